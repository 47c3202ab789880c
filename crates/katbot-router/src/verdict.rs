// SPDX-FileCopyrightText: 2026 Katbot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The admit/reject outcome of routing one message.

use strum::{Display, IntoStaticStr};

/// Why a message was admitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum RespondReason {
    /// The bot, or everyone, was mentioned and mentions override channel policy.
    Mention,
    /// No channel context; channel policy does not apply.
    DirectMessage,
    /// The channel ID is on `allowed_channels`.
    AllowedChannelId,
    /// The channel name is on `allowed_channel_names`.
    AllowedChannelName,
    /// Both allow-lists are empty.
    Unrestricted,
}

/// Why a message was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum IgnoreReason {
    /// Sent by a bot account.
    BotAuthor,
    /// Sent by this bot.
    SelfAuthor,
    /// Empty or whitespace-only text.
    EmptyContent,
    /// `allowed_channels` is set and does not contain the channel ID.
    ChannelIdNotAllowed,
    /// The channel name is not on `allowed_channel_names`.
    ChannelNameNotAllowed,
    /// Name matching applies but the transport supplied no channel name.
    ChannelNameMissing,
    /// Fail-closed fallback when no rule produced a verdict.
    NoRuleMatched,
}

/// Verdict for one inbound message.
///
/// On `Respond` the pipeline moves on to command parsing; on `Ignore` the
/// event is dropped without a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoutingVerdict {
    Respond(RespondReason),
    Ignore(IgnoreReason),
}

impl RoutingVerdict {
    pub fn is_respond(&self) -> bool {
        matches!(self, Self::Respond(_))
    }

    pub fn is_ignore(&self) -> bool {
        matches!(self, Self::Ignore(_))
    }

    /// The snake_case reason tag, e.g. `allowed_channel_name`.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::Respond(reason) => reason.into(),
            Self::Ignore(reason) => reason.into(),
        }
    }
}

impl std::fmt::Display for RoutingVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Respond(reason) => write!(f, "respond {reason}"),
            Self::Ignore(reason) => write!(f, "ignore {reason}"),
        }
    }
}

impl From<RespondReason> for RoutingVerdict {
    fn from(reason: RespondReason) -> Self {
        Self::Respond(reason)
    }
}

impl From<IgnoreReason> for RoutingVerdict {
    fn from(reason: IgnoreReason) -> Self {
        Self::Ignore(reason)
    }
}
