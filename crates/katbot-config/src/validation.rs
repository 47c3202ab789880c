// SPDX-FileCopyrightText: 2026 Katbot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Checks shape only. Channel IDs and names are opaque strings here: an ID
//! that matches no real channel is accepted and simply never matches.

use std::collections::HashSet;

use crate::diagnostic::ConfigError;
use crate::model::{KatbotConfig, RoutingConfig};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration.
///
/// Collects every problem instead of stopping at the first one.
pub fn validate_config(config: &KatbotConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.bot.name.trim().is_empty() {
        errors.push(ConfigError::validation("bot.name must not be empty"));
    }

    let level = config.bot.log_level.trim().to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigError::validation(format!(
            "bot.log_level `{}` is not one of {}",
            config.bot.log_level,
            LOG_LEVELS.join(", ")
        )));
    }

    if let Some(user_id) = &config.bot.user_id {
        if user_id.trim().is_empty() {
            errors.push(ConfigError::validation(
                "bot.user_id must not be empty when set",
            ));
        }
    }

    validate_routing(&config.routing, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_routing(routing: &RoutingConfig, errors: &mut Vec<ConfigError>) {
    check_entries(
        "routing.allowed_channels",
        &routing.allowed_channels,
        |id| id.to_string(),
        errors,
    );
    check_entries(
        "routing.allowed_channel_names",
        &routing.allowed_channel_names,
        str::to_lowercase,
        errors,
    );
}

/// Reject blank, padded and duplicate entries. `normalize` decides what counts as a
/// duplicate (names compare case-insensitively, IDs exactly).
fn check_entries(
    key: &str,
    entries: &[String],
    normalize: impl Fn(&str) -> String,
    errors: &mut Vec<ConfigError>,
) {
    let mut seen = HashSet::new();
    for (i, entry) in entries.iter().enumerate() {
        if entry.trim().is_empty() {
            errors.push(ConfigError::validation(format!(
                "{key}[{i}] must not be blank"
            )));
            continue;
        }
        if entry.trim() != entry {
            errors.push(ConfigError::validation(format!(
                "{key}[{i}] `{entry}` has leading or trailing whitespace"
            )));
            continue;
        }
        if !seen.insert(normalize(entry)) {
            errors.push(ConfigError::validation(format!(
                "duplicate entry `{entry}` in {key}"
            )));
        }
    }
}
