// SPDX-FileCopyrightText: 2026 Katbot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for katbot.
//!
//! The routing decision itself is total and has no error path. These errors
//! cover the surrounding runtime: loading configuration, reading events and
//! watching the config file for changes.

use thiserror::Error;

/// The primary error type used by the katbot binary and its helpers.
#[derive(Debug, Error)]
pub enum KatbotError {
    /// Configuration could not be loaded or failed validation.
    #[error("configuration error: {0}")]
    Config(String),

    /// Reading or writing a file or stream failed.
    #[error("i/o error while {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// An inbound event could not be decoded into an `InboundMessage`.
    #[error("invalid event on line {line}: {source}")]
    InvalidEvent {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// The config file watcher could not be started.
    #[error("config watcher error: {0}")]
    Watch(String),
}

impl KatbotError {
    /// Wrap an I/O error with a short description of what was being attempted.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}
