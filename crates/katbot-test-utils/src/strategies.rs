// SPDX-FileCopyrightText: 2026 Katbot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Proptest strategies for routing properties.
//!
//! IDs and names are drawn from small pools so generated messages collide
//! with generated allow-lists often enough to exercise both outcomes. Names
//! appear in several casings.

use katbot_config::RoutingConfig;
use katbot_core::{ChannelRef, InboundMessage};
use proptest::collection::vec;
use proptest::option;
use proptest::prelude::*;

pub const CHANNEL_IDS: &[&str] = &["c1", "c2", "c3", "C1"];
pub const CHANNEL_NAMES: &[&str] = &["katbot", "KatBot", "general", "ops", "OPS"];

pub fn channel_id() -> impl Strategy<Value = String> {
    prop::sample::select(CHANNEL_IDS).prop_map(str::to_string)
}

pub fn channel_name() -> impl Strategy<Value = String> {
    prop::sample::select(CHANNEL_NAMES).prop_map(str::to_string)
}

/// Whitespace-only strings, including the empty string.
pub fn whitespace() -> impl Strategy<Value = String> {
    "[ \t\r\n\u{00a0}\u{3000}]{0,6}"
}

/// Content that is not whitespace-only.
pub fn text() -> impl Strategy<Value = String> {
    "[ ]{0,2}[a-z!?]{1,12}[ ]{0,2}"
}

pub fn arb_channel() -> impl Strategy<Value = ChannelRef> {
    (channel_id(), option::of(channel_name())).prop_map(|(id, name)| ChannelRef { id, name })
}

pub fn arb_message() -> impl Strategy<Value = InboundMessage> {
    (
        "[a-z0-9]{1,6}",
        any::<bool>(),
        any::<bool>(),
        prop_oneof![whitespace(), text()],
        option::of(arb_channel()),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(
            |(author_id, is_from_bot, is_self, content, channel, mentions_bot, mentions_everyone)| {
                InboundMessage {
                    author_id,
                    is_from_bot,
                    is_self,
                    content,
                    channel,
                    mentions_bot,
                    mentions_everyone,
                }
            },
        )
}

pub fn arb_routing_config() -> impl Strategy<Value = RoutingConfig> {
    (
        vec(channel_id(), 0..3),
        vec(channel_name(), 0..3),
        any::<bool>(),
    )
        .prop_map(
            |(allowed_channels, allowed_channel_names, respond_to_mentions)| RoutingConfig {
                allowed_channels,
                allowed_channel_names,
                respond_to_mentions,
            },
        )
}
