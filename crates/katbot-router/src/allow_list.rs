// SPDX-FileCopyrightText: 2026 Katbot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Channel allow-list evaluation.
//!
//! A non-empty ID list is authoritative: when it is set, a non-matching ID
//! rejects the channel even if its name is on the name list. Names only
//! matter while no IDs are configured.

use std::collections::HashSet;

use katbot_config::RoutingConfig;
use katbot_core::ChannelRef;

use crate::verdict::{IgnoreReason, RespondReason};

/// Immutable allow-list compiled from a [`RoutingConfig`].
#[derive(Debug, Clone, Default)]
pub struct ChannelAllowList {
    ids: HashSet<String>,
    /// Stored lower-cased.
    names: HashSet<String>,
}

impl ChannelAllowList {
    pub fn from_config(config: &RoutingConfig) -> Self {
        Self {
            ids: config.allowed_channels.iter().cloned().collect(),
            names: config
                .allowed_channel_names
                .iter()
                .map(|name| name.to_lowercase())
                .collect(),
        }
    }

    pub fn is_unrestricted(&self) -> bool {
        self.ids.is_empty() && self.names.is_empty()
    }

    pub fn id_count(&self) -> usize {
        self.ids.len()
    }

    pub fn name_count(&self) -> usize {
        self.names.len()
    }

    /// Decide whether the channel admits the message.
    ///
    /// `None` means no channel context (a direct message), which channel
    /// policy never rejects.
    pub fn is_in_allowed_channel(
        &self,
        channel: Option<&ChannelRef>,
    ) -> Result<RespondReason, IgnoreReason> {
        let Some(channel) = channel else {
            return Ok(RespondReason::DirectMessage);
        };

        if !self.ids.is_empty() {
            return if self.ids.contains(&channel.id) {
                Ok(RespondReason::AllowedChannelId)
            } else {
                Err(IgnoreReason::ChannelIdNotAllowed)
            };
        }

        if self.names.is_empty() {
            return Ok(RespondReason::Unrestricted);
        }

        match channel.name.as_deref() {
            Some(name) if self.names.contains(&name.to_lowercase()) => {
                Ok(RespondReason::AllowedChannelName)
            }
            Some(_) => Err(IgnoreReason::ChannelNameNotAllowed),
            None => Err(IgnoreReason::ChannelNameMissing),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(ids: &[&str], names: &[&str]) -> ChannelAllowList {
        ChannelAllowList::from_config(&RoutingConfig {
            allowed_channels: ids.iter().map(|s| s.to_string()).collect(),
            allowed_channel_names: names.iter().map(|s| s.to_string()).collect(),
            respond_to_mentions: true,
        })
    }

    #[test]
    fn direct_message_is_always_allowed() {
        assert_eq!(
            list(&["c1"], &["katbot"]).is_in_allowed_channel(None),
            Ok(RespondReason::DirectMessage)
        );
    }

    #[test]
    fn id_match() {
        let channel = ChannelRef::new("c1", "random");
        assert_eq!(
            list(&["c1"], &[]).is_in_allowed_channel(Some(&channel)),
            Ok(RespondReason::AllowedChannelId)
        );
    }

    #[test]
    fn id_list_suppresses_name_fallback() {
        let channel = ChannelRef::new("c2", "katbot");
        assert_eq!(
            list(&["c1"], &["katbot"]).is_in_allowed_channel(Some(&channel)),
            Err(IgnoreReason::ChannelIdNotAllowed)
        );
    }

    #[test]
    fn id_match_ignores_missing_name() {
        let channel = ChannelRef::unnamed("c1");
        assert_eq!(
            list(&["c1"], &["katbot"]).is_in_allowed_channel(Some(&channel)),
            Ok(RespondReason::AllowedChannelId)
        );
    }

    #[test]
    fn ids_are_case_sensitive() {
        let channel = ChannelRef::unnamed("C1");
        assert_eq!(
            list(&["c1"], &[]).is_in_allowed_channel(Some(&channel)),
            Err(IgnoreReason::ChannelIdNotAllowed)
        );
    }

    #[test]
    fn name_match_is_case_insensitive() {
        let allow = list(&[], &["KatBot"]);
        for name in ["katbot", "KATBOT", "Katbot"] {
            let channel = ChannelRef::new("c9", name);
            assert_eq!(
                allow.is_in_allowed_channel(Some(&channel)),
                Ok(RespondReason::AllowedChannelName),
                "name {name}"
            );
        }
    }

    #[test]
    fn name_match_handles_non_ascii_case() {
        let channel = ChannelRef::new("c9", "ÉQUIPE");
        assert_eq!(
            list(&[], &["équipe"]).is_in_allowed_channel(Some(&channel)),
            Ok(RespondReason::AllowedChannelName)
        );
    }

    #[test]
    fn name_mismatch_and_missing_name() {
        let allow = list(&[], &["katbot"]);
        assert_eq!(
            allow.is_in_allowed_channel(Some(&ChannelRef::new("c2", "general"))),
            Err(IgnoreReason::ChannelNameNotAllowed)
        );
        assert_eq!(
            allow.is_in_allowed_channel(Some(&ChannelRef::unnamed("c2"))),
            Err(IgnoreReason::ChannelNameMissing)
        );
    }

    #[test]
    fn empty_lists_allow_everything() {
        let allow = list(&[], &[]);
        assert!(allow.is_unrestricted());
        assert_eq!(
            allow.is_in_allowed_channel(Some(&ChannelRef::unnamed("anything"))),
            Ok(RespondReason::Unrestricted)
        );
    }

    #[test]
    fn duplicate_names_collapse() {
        let allow = list(&[], &["katbot", "KATBOT"]);
        assert_eq!(allow.name_count(), 1);
        assert_eq!(allow.id_count(), 0);
    }
}
