// SPDX-FileCopyrightText: 2026 Katbot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for katbot routing tests.
//!
//! # Components
//!
//! - [`message`] / [`MessageBuilder`] - terse construction of inbound messages
//! - [`routing`] - routing config from slices
//! - [`strategies`] - proptest generators for messages and policies

pub mod builder;
pub mod strategies;

pub use builder::{MessageBuilder, message, routing};
