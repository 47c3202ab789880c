// SPDX-FileCopyrightText: 2026 Katbot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mention resolution from raw message text.
//!
//! The router only reads pre-resolved mention flags. Transports that receive
//! raw text can use [`scan`] to derive them: `<@ID>` and `<@!ID>` address an
//! account, `@everyone` and `@here` address the whole channel.

use katbot_core::InboundMessage;

const BROADCAST_TOKENS: &[&str] = &["@everyone", "@here"];

/// Mention flags found in one message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MentionScan {
    pub mentions_bot: bool,
    pub mentions_everyone: bool,
}

/// Scan `content` for mentions of `bot_user_id` and for broadcast mentions.
///
/// With no bot ID only broadcast mentions can be detected. Mentions of other
/// accounts and role mentions (`<@&ID>`) set neither flag.
pub fn scan(content: &str, bot_user_id: Option<&str>) -> MentionScan {
    let mentions_bot = bot_user_id
        .filter(|id| !id.is_empty())
        .is_some_and(|id| account_mentions(content).any(|mentioned| mentioned == id));

    let mentions_everyone = content.split_whitespace().any(|token| {
        let token = token.trim_matches(|c: char| !(c.is_alphanumeric() || c == '@'));
        BROADCAST_TOKENS.contains(&token)
    });

    MentionScan {
        mentions_bot,
        mentions_everyone,
    }
}

/// Fold scanned mentions into a message. Flags already set by the transport
/// are kept.
pub fn resolve(mut message: InboundMessage, bot_user_id: Option<&str>) -> InboundMessage {
    let found = scan(&message.content, bot_user_id);
    message.mentions_bot |= found.mentions_bot;
    message.mentions_everyone |= found.mentions_everyone;
    message
}

/// Account IDs inside `<@ID>` / `<@!ID>` tokens.
fn account_mentions(content: &str) -> impl Iterator<Item = &str> {
    content.split("<@").skip(1).filter_map(|rest| {
        let (inner, _) = rest.split_once('>')?;
        let id = inner.strip_prefix('!').unwrap_or(inner);
        let well_formed = !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric());
        well_formed.then_some(id)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOT: Option<&str> = Some("4242");

    #[test]
    fn direct_mention_of_bot() {
        assert!(scan("<@4242> help", BOT).mentions_bot);
        assert!(scan("hey <@!4242>, ping", BOT).mentions_bot);
    }

    #[test]
    fn mention_of_other_user_is_ignored() {
        let found = scan("<@1111> what do you think?", BOT);
        assert_eq!(found, MentionScan::default());
    }

    #[test]
    fn role_mention_is_not_a_bot_mention() {
        assert!(!scan("<@&4242> meeting", BOT).mentions_bot);
    }

    #[test]
    fn malformed_tokens_are_skipped() {
        assert!(!scan("<@4242 no closing bracket", BOT).mentions_bot);
        assert!(!scan("<@> empty", BOT).mentions_bot);
        assert!(scan("<@> then <@4242>", BOT).mentions_bot);
    }

    #[test]
    fn broadcast_mentions() {
        assert!(scan("@everyone standup in 5", None).mentions_everyone);
        assert!(scan("heads up, @here!", None).mentions_everyone);
        assert!(!scan("email me at ops@everyone.example", None).mentions_everyone);
        assert!(!scan("@everyonee", None).mentions_everyone);
    }

    #[test]
    fn no_bot_id_means_no_bot_mention() {
        assert!(!scan("<@4242>", None).mentions_bot);
        assert!(!scan("<@4242>", Some("")).mentions_bot);
    }

    #[test]
    fn resolve_keeps_transport_flags() {
        let msg = InboundMessage {
            content: "plain text".into(),
            mentions_bot: true,
            ..Default::default()
        };
        let resolved = resolve(msg, BOT);
        assert!(resolved.mentions_bot);
        assert!(!resolved.mentions_everyone);

        let msg = InboundMessage {
            content: "<@4242> @here".into(),
            ..Default::default()
        };
        let resolved = resolve(msg, BOT);
        assert!(resolved.mentions_bot);
        assert!(resolved.mentions_everyone);
    }
}
