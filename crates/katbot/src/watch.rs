// SPDX-FileCopyrightText: 2026 Katbot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Config file watcher for `route --watch`.
//!
//! Watches the directory holding the config file, since editors often
//! replace the file rather than write it in place. Changes are debounced,
//! re-validated, and only a valid config reaches the [`RouterHandle`].

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use katbot_core::KatbotError;
use katbot_router::RouterHandle;
use notify::{RecommendedWatcher, RecursiveMode};
use notify_debouncer_mini::{DebounceEventResult, Debouncer, new_debouncer};
use tracing::{debug, info, warn};

const DEBOUNCE: Duration = Duration::from_millis(300);

/// Keeps the debouncer alive; dropping it stops watching.
pub struct ConfigWatcher {
    _debouncer: Debouncer<RecommendedWatcher>,
}

impl ConfigWatcher {
    pub fn start(path: &Path, handle: Arc<RouterHandle>) -> Result<Self, KatbotError> {
        let file_name = path
            .file_name()
            .map(ToOwned::to_owned)
            .ok_or_else(|| KatbotError::Watch(format!("{} is not a file path", path.display())))?;
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let config_path = path.to_path_buf();
        let mut debouncer = new_debouncer(DEBOUNCE, move |result: DebounceEventResult| {
            match result {
                Ok(events) => {
                    let touched = events
                        .iter()
                        .any(|event| event.path.file_name() == Some(file_name.as_os_str()));
                    if touched {
                        debug!(path = %config_path.display(), "config file changed");
                        if let Err(e) = reload_from(&config_path, &handle) {
                            warn!(error = %e, "config reload rejected; keeping previous routing policy");
                        }
                    }
                }
                Err(e) => warn!(error = %e, "config watcher error"),
            }
        })
        .map_err(|e| KatbotError::Watch(e.to_string()))?;

        debouncer
            .watcher()
            .watch(&dir, RecursiveMode::NonRecursive)
            .map_err(|e| KatbotError::Watch(format!("watching {}: {e}", dir.display())))?;
        info!(path = %path.display(), "watching config file for changes");

        Ok(Self {
            _debouncer: debouncer,
        })
    }
}

/// Load and validate `path`, and publish its routing section on success.
///
/// A file that is briefly absent mid-save is rejected like any other
/// invalid config, so it never widens the policy.
pub fn reload_from(path: &Path, handle: &RouterHandle) -> Result<(), KatbotError> {
    let config = katbot_config::load_and_validate_path(path).map_err(|errors| {
        let messages: Vec<_> = errors.iter().map(ToString::to_string).collect();
        KatbotError::Config(messages.join("; "))
    })?;
    handle.reload(&config.routing);
    Ok(())
}
