// SPDX-FileCopyrightText: 2026 Katbot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Lookup order: `./katbot.toml` > `~/.config/katbot/katbot.toml` >
//! `/etc/katbot/katbot.toml`, with `KATBOT_*` environment variables on top.

#![allow(clippy::result_large_err)] // figment::Error is external

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::KatbotConfig;

/// File name looked up in every config directory.
pub const CONFIG_FILE_NAME: &str = "katbot.toml";

/// Top-level sections an environment variable may address.
const ENV_SECTIONS: &[&str] = &["bot", "routing"];

/// Config files consulted by [`load_config`], lowest precedence first.
pub fn config_search_paths() -> Vec<PathBuf> {
    let mut paths = vec![Path::new("/etc/katbot").join(CONFIG_FILE_NAME)];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("katbot").join(CONFIG_FILE_NAME));
    }
    paths.push(PathBuf::from(CONFIG_FILE_NAME));
    paths
}

/// Build the layered Figment without extracting it.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. Every file from [`config_search_paths`] that exists
/// 3. `KATBOT_*` environment variables
pub fn build_figment() -> Figment {
    let figment = config_search_paths()
        .into_iter()
        .fold(defaults(), |figment, path| figment.merge(Toml::file(path)));
    figment.merge(env_provider())
}

/// Load configuration from the standard hierarchy with env var overrides.
pub fn load_config() -> Result<KatbotConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string over the compiled defaults only.
///
/// No files and no environment are consulted; used by tests and tooling.
pub fn load_config_from_str(toml_content: &str) -> Result<KatbotConfig, figment::Error> {
    defaults().merge(Toml::string(toml_content)).extract()
}

/// Load configuration from one explicit file, with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<KatbotConfig, figment::Error> {
    defaults()
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

fn defaults() -> Figment {
    Figment::from(Serialized::defaults(KatbotConfig::default()))
}

/// Environment provider mapping `KATBOT_<SECTION>_<KEY>` to `<section>.<key>`.
///
/// Only the first underscore after a known section name becomes a dot, so
/// `KATBOT_ROUTING_RESPOND_TO_MENTIONS` maps to
/// `routing.respond_to_mentions`, never `routing.respond.to.mentions`.
fn env_provider() -> Env {
    Env::prefixed("KATBOT_").map(|key| section_key(&key.as_str().to_ascii_lowercase()).into())
}

fn section_key(key: &str) -> String {
    for section in ENV_SECTIONS {
        if let Some(rest) = key
            .strip_prefix(section)
            .and_then(|rest| rest.strip_prefix('_'))
        {
            return format!("{section}.{rest}");
        }
    }
    key.to_string()
}
