// SPDX-FileCopyrightText: 2026 Katbot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for katbot.
//!
//! TOML configuration with strict key checking (`deny_unknown_fields`), a
//! file hierarchy plus `KATBOT_*` environment overrides, and miette
//! diagnostics with typo suggestions.
//!
//! # Usage
//!
//! ```no_run
//! use katbot_config::load_and_validate;
//!
//! let config = load_and_validate().expect("config errors");
//! println!("allowed names: {:?}", config.routing.allowed_channel_names);
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

use std::path::Path;

pub use diagnostic::{ConfigError, render_errors};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::{BotConfig, KatbotConfig, RoutingConfig};

/// Load configuration from the standard hierarchy and validate it.
pub fn load_and_validate() -> Result<KatbotConfig, Vec<ConfigError>> {
    finish(loader::load_config(), collect_toml_sources)
}

/// Load configuration from one explicit file and validate it.
///
/// Unlike the search paths, an explicit file must exist.
pub fn load_and_validate_path(path: &Path) -> Result<KatbotConfig, Vec<ConfigError>> {
    if !path.is_file() {
        return Err(vec![ConfigError::Other(format!(
            "{} does not exist",
            path.display()
        ))]);
    }
    finish(loader::load_config_from_path(path), || {
        read_source(path).into_iter().collect()
    })
}

/// Load configuration from a TOML string and validate it.
pub fn load_and_validate_str(toml_content: &str) -> Result<KatbotConfig, Vec<ConfigError>> {
    finish(loader::load_config_from_str(toml_content), || {
        vec![("<inline>".to_string(), toml_content.to_string())]
    })
}

/// Validate a successful load, or translate a Figment failure into
/// diagnostics. Sources are only read on the error path.
fn finish(
    loaded: Result<KatbotConfig, figment::Error>,
    sources: impl FnOnce() -> Vec<(String, String)>,
) -> Result<KatbotConfig, Vec<ConfigError>> {
    match loaded {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => Err(diagnostic::figment_to_config_errors(err, &sources())),
    }
}

fn collect_toml_sources() -> Vec<(String, String)> {
    loader::config_search_paths()
        .iter()
        .filter_map(|path| read_source(path))
        .collect()
}

/// Read a config file, keyed by the path string Figment reports for it.
fn read_source(path: &Path) -> Option<(String, String)> {
    let content = std::fs::read_to_string(path).ok()?;
    let display = if path.is_relative() {
        std::env::current_dir()
            .map(|dir| dir.join(path).display().to_string())
            .unwrap_or_else(|_| path.display().to_string())
    } else {
        path.display().to_string()
    };
    Some((display, content))
}
