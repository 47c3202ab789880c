// SPDX-FileCopyrightText: 2026 Katbot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for katbot.
//!
//! All structs use `#[serde(deny_unknown_fields)]` so a misspelled key fails
//! at startup instead of silently falling back to a default.

use serde::{Deserialize, Serialize};

/// Top-level katbot configuration.
///
/// Every section is optional and defaults to the values a fresh install runs
/// with: respond in a channel named `katbot`, and to mentions anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct KatbotConfig {
    /// Bot identity and process settings.
    #[serde(default)]
    pub bot: BotConfig,

    /// Message routing policy.
    #[serde(default)]
    pub routing: RoutingConfig,
}

/// Bot identity and process settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BotConfig {
    /// Display name of the bot.
    #[serde(default = "default_bot_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// The bot's own account ID on the chat platform. Used to resolve
    /// `<@id>` mentions from raw message text when the transport has not
    /// already done so.
    #[serde(default)]
    pub user_id: Option<String>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: default_bot_name(),
            log_level: default_log_level(),
            user_id: None,
        }
    }
}

fn default_bot_name() -> String {
    "katbot".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Channel filtering policy consumed by the message router.
///
/// Channel restriction is opt-in: with both allow-lists empty the bot answers
/// in every channel. A non-empty `allowed_channels` takes full priority over
/// `allowed_channel_names`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RoutingConfig {
    /// Channel IDs the bot responds in unconditionally.
    #[serde(default)]
    pub allowed_channels: Vec<String>,

    /// Channel display names, matched case-insensitively. Only consulted
    /// while `allowed_channels` is empty.
    #[serde(default = "default_allowed_channel_names")]
    pub allowed_channel_names: Vec<String>,

    /// A direct or broadcast mention authorizes a response in any channel.
    #[serde(default = "default_respond_to_mentions")]
    pub respond_to_mentions: bool,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            allowed_channels: Vec::new(),
            allowed_channel_names: default_allowed_channel_names(),
            respond_to_mentions: default_respond_to_mentions(),
        }
    }
}

impl RoutingConfig {
    /// A policy with no channel restriction at all.
    pub fn unrestricted() -> Self {
        Self {
            allowed_channels: Vec::new(),
            allowed_channel_names: Vec::new(),
            respond_to_mentions: default_respond_to_mentions(),
        }
    }

    /// True when neither allow-list carries an entry.
    pub fn is_unrestricted(&self) -> bool {
        self.allowed_channels.is_empty() && self.allowed_channel_names.is_empty()
    }
}

fn default_allowed_channel_names() -> Vec<String> {
    vec!["katbot".to_string()]
}

fn default_respond_to_mentions() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_routing_config() {
        let cfg = RoutingConfig::default();
        assert!(cfg.allowed_channels.is_empty());
        assert_eq!(cfg.allowed_channel_names, vec!["katbot"]);
        assert!(cfg.respond_to_mentions);
        assert!(!cfg.is_unrestricted());
    }

    #[test]
    fn unrestricted_has_no_lists() {
        let cfg = RoutingConfig::unrestricted();
        assert!(cfg.is_unrestricted());
        assert!(cfg.respond_to_mentions);
    }

    #[test]
    fn explicit_empty_names_override_default() {
        let cfg: RoutingConfig = toml::from_str("allowed_channel_names = []").unwrap();
        assert!(cfg.allowed_channel_names.is_empty());
        assert!(cfg.is_unrestricted());
    }

    #[test]
    fn routing_rejects_camel_case_keys() {
        let result = toml::from_str::<RoutingConfig>("allowedChannels = [\"c1\"]");
        assert!(result.is_err());
    }

    #[test]
    fn bot_user_id_is_optional() {
        let cfg: KatbotConfig = toml::from_str("[bot]\nuser_id = \"4242\"\n").unwrap();
        assert_eq!(cfg.bot.user_id.as_deref(), Some("4242"));
        assert_eq!(cfg.bot.name, "katbot");
        assert_eq!(cfg.routing, RoutingConfig::default());
    }
}
