// SPDX-FileCopyrightText: 2026 Katbot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The message router: an ordered rule chain producing one verdict.
//!
//! Precedence: authorship > content > mention override > channel allow-list >
//! fail-closed. The first rule that returns a verdict wins.

use katbot_config::RoutingConfig;
use katbot_core::InboundMessage;
use tracing::{debug, trace};

use crate::allow_list::ChannelAllowList;
use crate::verdict::{IgnoreReason, RespondReason, RoutingVerdict};

/// One step of the chain. `check` returns `None` to defer to the next rule.
struct Rule {
    name: &'static str,
    check: fn(&MessageRouter, &InboundMessage) -> Option<RoutingVerdict>,
}

/// Evaluation order. Later rules assume earlier ones did not reject.
static RULES: [Rule; 4] = [
    Rule {
        name: "authorship",
        check: authorship,
    },
    Rule {
        name: "content",
        check: content,
    },
    Rule {
        name: "mention",
        check: mention_override,
    },
    Rule {
        name: "channel",
        check: channel_allow_list,
    },
];

/// Routes inbound messages against one immutable policy snapshot.
///
/// Cheap to share: `decide` takes `&self` and touches no shared mutable state.
#[derive(Debug, Clone)]
pub struct MessageRouter {
    allow_list: ChannelAllowList,
    respond_to_mentions: bool,
}

impl MessageRouter {
    /// Compile a router from a routing configuration.
    pub fn new(config: &RoutingConfig) -> Self {
        Self {
            allow_list: ChannelAllowList::from_config(config),
            respond_to_mentions: config.respond_to_mentions,
        }
    }

    pub fn allow_list(&self) -> &ChannelAllowList {
        &self.allow_list
    }

    pub fn respond_to_mentions(&self) -> bool {
        self.respond_to_mentions
    }

    /// Rule names in evaluation order.
    pub fn rule_names() -> impl Iterator<Item = &'static str> {
        RULES.iter().map(|rule| rule.name)
    }

    /// Decide whether the bot should respond to `message`.
    ///
    /// Total: every input, including ones with no channel or no channel
    /// name, yields a verdict.
    pub fn decide(&self, message: &InboundMessage) -> RoutingVerdict {
        let (rule, verdict) = RULES
            .iter()
            .find_map(|rule| (rule.check)(self, message).map(|v| (rule.name, v)))
            .unwrap_or((
                "fallback",
                RoutingVerdict::Ignore(IgnoreReason::NoRuleMatched),
            ));

        match verdict {
            RoutingVerdict::Ignore(reason) => debug!(
                rule,
                %reason,
                author = %message.author_id,
                channel_id = message.channel_id().unwrap_or("-"),
                "ignoring message"
            ),
            RoutingVerdict::Respond(reason) => trace!(
                rule,
                %reason,
                author = %message.author_id,
                channel_id = message.channel_id().unwrap_or("-"),
                "admitting message"
            ),
        }
        verdict
    }
}

impl Default for MessageRouter {
    fn default() -> Self {
        Self::new(&RoutingConfig::default())
    }
}

/// Decide with a router compiled on the spot from `config`.
///
/// Long-lived callers should build a [`MessageRouter`] once instead.
pub fn decide(message: &InboundMessage, config: &RoutingConfig) -> RoutingVerdict {
    MessageRouter::new(config).decide(message)
}

fn authorship(_: &MessageRouter, message: &InboundMessage) -> Option<RoutingVerdict> {
    if message.is_self {
        Some(IgnoreReason::SelfAuthor.into())
    } else if message.is_from_bot {
        Some(IgnoreReason::BotAuthor.into())
    } else {
        None
    }
}

fn content(_: &MessageRouter, message: &InboundMessage) -> Option<RoutingVerdict> {
    message
        .content
        .trim()
        .is_empty()
        .then_some(IgnoreReason::EmptyContent.into())
}

fn mention_override(router: &MessageRouter, message: &InboundMessage) -> Option<RoutingVerdict> {
    let mentioned = message.mentions_bot || message.mentions_everyone;
    (router.respond_to_mentions && mentioned).then_some(RespondReason::Mention.into())
}

fn channel_allow_list(router: &MessageRouter, message: &InboundMessage) -> Option<RoutingVerdict> {
    let verdict: RoutingVerdict = match router
        .allow_list
        .is_in_allowed_channel(message.channel.as_ref())
    {
        Ok(reason) => reason.into(),
        Err(reason) => reason.into(),
    };
    Some(verdict)
}

#[cfg(test)]
mod tests {
    use super::*;
    use katbot_test_utils::{message, routing};

    #[test]
    fn rules_run_in_documented_order() {
        let names: Vec<_> = MessageRouter::rule_names().collect();
        assert_eq!(names, ["authorship", "content", "mention", "channel"]);
    }

    #[test]
    fn authorship_rule_prefers_self_reason() {
        let router = MessageRouter::default();
        let msg = message("hi").from_bot().from_self().build();
        assert_eq!(
            authorship(&router, &msg),
            Some(RoutingVerdict::Ignore(IgnoreReason::SelfAuthor))
        );
        let msg = message("hi").from_bot().build();
        assert_eq!(
            authorship(&router, &msg),
            Some(RoutingVerdict::Ignore(IgnoreReason::BotAuthor))
        );
        assert_eq!(authorship(&router, &message("hi").build()), None);
    }

    #[test]
    fn content_rule_catches_whitespace_variants() {
        let router = MessageRouter::default();
        for text in ["", " ", "\n\t", "\u{3000}"] {
            let msg = message(text).build();
            assert_eq!(
                content(&router, &msg),
                Some(RoutingVerdict::Ignore(IgnoreReason::EmptyContent)),
                "text {text:?}"
            );
        }
        assert_eq!(content(&router, &message(" hi ").build()), None);
    }

    #[test]
    fn mention_rule_respects_config() {
        let on = MessageRouter::new(&routing(&[], &["katbot"], true));
        let off = MessageRouter::new(&routing(&[], &["katbot"], false));
        let msg = message("hey").mentioning_everyone().build();
        assert_eq!(
            mention_override(&on, &msg),
            Some(RoutingVerdict::Respond(RespondReason::Mention))
        );
        assert_eq!(mention_override(&off, &msg), None);
        assert_eq!(mention_override(&on, &message("hey").build()), None);
    }

    #[test]
    fn channel_rule_always_produces_a_verdict() {
        let router = MessageRouter::default();
        let msg = message("hi").in_unnamed_channel("c1").build();
        assert_eq!(
            channel_allow_list(&router, &msg),
            Some(RoutingVerdict::Ignore(IgnoreReason::ChannelNameMissing))
        );
    }

    #[test]
    fn free_decide_matches_router() {
        let config = routing(&["c1"], &[], true);
        let msg = message("hi").in_channel("c1", "ops").build();
        assert_eq!(decide(&msg, &config), MessageRouter::new(&config).decide(&msg));
    }

    #[test]
    fn default_router_uses_default_policy() {
        let router = MessageRouter::default();
        assert!(router.respond_to_mentions());
        assert_eq!(router.allow_list().name_count(), 1);
        assert_eq!(router.allow_list().id_count(), 0);
    }
}
