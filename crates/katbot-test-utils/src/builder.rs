// SPDX-FileCopyrightText: 2026 Katbot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Builders for routing test fixtures.

use katbot_config::RoutingConfig;
use katbot_core::{ChannelRef, InboundMessage};

/// Builder for [`InboundMessage`].
///
/// Starts as a human message from `user-1` with no channel (a direct
/// message) and no mentions.
#[derive(Debug, Clone)]
pub struct MessageBuilder {
    message: InboundMessage,
}

/// Start building a message with the given content.
pub fn message(content: &str) -> MessageBuilder {
    MessageBuilder {
        message: InboundMessage {
            author_id: "user-1".into(),
            content: content.into(),
            ..Default::default()
        },
    }
}

impl MessageBuilder {
    pub fn author(mut self, id: &str) -> Self {
        self.message.author_id = id.into();
        self
    }

    pub fn in_channel(mut self, id: &str, name: &str) -> Self {
        self.message.channel = Some(ChannelRef::new(id, name));
        self
    }

    pub fn in_unnamed_channel(mut self, id: &str) -> Self {
        self.message.channel = Some(ChannelRef::unnamed(id));
        self
    }

    /// Drop any channel context.
    pub fn direct(mut self) -> Self {
        self.message.channel = None;
        self
    }

    pub fn from_bot(mut self) -> Self {
        self.message.is_from_bot = true;
        self
    }

    /// Authored by the bot itself. Also marks the author as a bot.
    pub fn from_self(mut self) -> Self {
        self.message.is_from_bot = true;
        self.message.is_self = true;
        self
    }

    pub fn mentioning_bot(mut self) -> Self {
        self.message.mentions_bot = true;
        self
    }

    pub fn mentioning_everyone(mut self) -> Self {
        self.message.mentions_everyone = true;
        self
    }

    pub fn build(self) -> InboundMessage {
        self.message
    }
}

/// Routing config from literal slices.
pub fn routing(ids: &[&str], names: &[&str], respond_to_mentions: bool) -> RoutingConfig {
    RoutingConfig {
        allowed_channels: ids.iter().map(|id| id.to_string()).collect(),
        allowed_channel_names: names.iter().map(|name| name.to_string()).collect(),
        respond_to_mentions,
    }
}
