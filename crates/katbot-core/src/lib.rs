// SPDX-FileCopyrightText: 2026 Katbot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for katbot.
//!
//! Holds the values exchanged between the chat transport and the message
//! router, plus the runtime error type shared by the workspace.

pub mod error;
pub mod types;

pub use error::KatbotError;
pub use types::{ChannelRef, InboundMessage};
