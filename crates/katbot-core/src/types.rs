// SPDX-FileCopyrightText: 2026 Katbot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Message types handed from the chat transport to the router.
//!
//! Every field that a transport may fail to resolve has a conservative serde
//! default: flags decode as `false` and a missing channel decodes as `None`.

use serde::{Deserialize, Serialize};

/// The channel a message was posted in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelRef {
    /// Opaque channel identifier assigned by the chat platform.
    pub id: String,

    /// Display name, when the transport could resolve one.
    #[serde(default)]
    pub name: Option<String>,
}

impl ChannelRef {
    /// A channel with both identifier and display name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
        }
    }

    /// A channel whose display name is unknown.
    pub fn unnamed(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
        }
    }
}

/// An inbound chat event, already resolved by the transport.
///
/// Mention flags are booleans: the router never parses mention syntax itself.
/// `channel` is `None` for direct messages and anything else without a
/// channel context.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundMessage {
    /// Identifier of the sender.
    #[serde(default)]
    pub author_id: String,

    /// The sender is a bot account (this bot included).
    #[serde(default)]
    pub is_from_bot: bool,

    /// The sender is this bot instance.
    #[serde(default)]
    pub is_self: bool,

    /// Raw message text.
    #[serde(default)]
    pub content: String,

    /// Channel context, absent for direct messages.
    #[serde(default)]
    pub channel: Option<ChannelRef>,

    /// The text explicitly mentions this bot's account.
    #[serde(default)]
    pub mentions_bot: bool,

    /// The text carries a broadcast mention (`@everyone` / `@here`).
    #[serde(default)]
    pub mentions_everyone: bool,
}

impl InboundMessage {
    pub fn channel_id(&self) -> Option<&str> {
        self.channel.as_ref().map(|c| c.id.as_str())
    }

    pub fn channel_name(&self) -> Option<&str> {
        self.channel.as_ref().and_then(|c| c.name.as_deref())
    }

    /// True for messages with no channel context.
    pub fn is_direct(&self) -> bool {
        self.channel.is_none()
    }
}
