// SPDX-FileCopyrightText: 2026 Katbot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `route` subcommand: JSON events in, one verdict line out per event.

use std::path::Path;
use std::sync::Arc;

use katbot_config::KatbotConfig;
use katbot_core::{InboundMessage, KatbotError};
use katbot_router::{RouterHandle, RoutingVerdict, mention};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::warn;

use crate::watch::ConfigWatcher;

/// Verdict counts for one event stream.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RouteSummary {
    pub responded: usize,
    pub ignored: usize,
    pub errors: usize,
}

impl RouteSummary {
    fn record(&mut self, verdict: RoutingVerdict) {
        if verdict.is_respond() {
            self.responded += 1;
        } else {
            self.ignored += 1;
        }
    }
}

/// Route events from `input` (or stdin) to stdout.
///
/// With `watch_path`, the config file is watched for the lifetime of the
/// stream and valid changes replace the active routing policy.
pub async fn run(
    config: &KatbotConfig,
    input: Option<&Path>,
    watch_path: Option<&Path>,
) -> Result<RouteSummary, KatbotError> {
    let handle = Arc::new(RouterHandle::new(&config.routing));
    let _watcher = watch_path
        .map(|path| ConfigWatcher::start(path, Arc::clone(&handle)))
        .transpose()?;

    let bot_user_id = config.bot.user_id.as_deref();
    let stdout = tokio::io::stdout();
    match input {
        Some(path) => {
            let file = tokio::fs::File::open(path)
                .await
                .map_err(|e| KatbotError::io(format!("opening {}", path.display()), e))?;
            route_lines(BufReader::new(file), stdout, &handle, bot_user_id).await
        }
        None => route_lines(BufReader::new(tokio::io::stdin()), stdout, &handle, bot_user_id).await,
    }
}

/// Route every non-blank line of `reader` and write one result line per
/// event to `writer`: `respond <reason>`, `ignore <reason>` or
/// `error <message>` for lines that are not a valid event.
pub async fn route_lines<R, W>(
    reader: R,
    mut writer: W,
    handle: &RouterHandle,
    bot_user_id: Option<&str>,
) -> Result<RouteSummary, KatbotError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();
    let mut summary = RouteSummary::default();
    let mut line_no = 0;

    while let Some(line) = lines
        .next_line()
        .await
        .map_err(|e| KatbotError::io("reading events", e))?
    {
        line_no += 1;
        if line.trim().is_empty() {
            continue;
        }

        let output = match parse_event(&line, line_no) {
            Ok(message) => {
                let message = mention::resolve(message, bot_user_id);
                let verdict = handle.decide(&message);
                summary.record(verdict);
                verdict.to_string()
            }
            Err(e) => {
                warn!(error = %e, "skipping malformed event");
                summary.errors += 1;
                format!("error {e}")
            }
        };

        writer
            .write_all(format!("{output}\n").as_bytes())
            .await
            .map_err(|e| KatbotError::io("writing verdicts", e))?;
    }

    writer
        .flush()
        .await
        .map_err(|e| KatbotError::io("writing verdicts", e))?;
    Ok(summary)
}

fn parse_event(line: &str, line_no: usize) -> Result<InboundMessage, KatbotError> {
    serde_json::from_str(line).map_err(|source| KatbotError::InvalidEvent {
        line: line_no,
        source,
    })
}
