// SPDX-FileCopyrightText: 2026 Katbot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Message routing for katbot.
//!
//! Decides, before any command parsing, whether the bot should respond to an
//! inbound message at all:
//! - [`MessageRouter`]: ordered rule chain over one immutable policy
//! - [`RouterHandle`]: the same, hot-swappable on config reload
//! - [`mention`]: derive mention flags from raw text for transports that
//!   cannot resolve them

pub mod allow_list;
pub mod handle;
pub mod mention;
pub mod router;
pub mod verdict;

pub use allow_list::ChannelAllowList;
pub use handle::RouterHandle;
pub use router::{MessageRouter, decide};
pub use verdict::{IgnoreReason, RespondReason, RoutingVerdict};
