// SPDX-FileCopyrightText: 2026 Katbot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Katbot - decides which chat messages the bot should answer.
//!
//! This is the binary entry point: it loads configuration, then either
//! reports the effective routing policy or routes a stream of JSON events.

mod route;
mod watch;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use katbot_config::{ConfigError, KatbotConfig};
use katbot_router::MessageRouter;
use tracing::{error, info, warn};

/// Katbot - decides which chat messages the bot should answer.
#[derive(Parser, Debug)]
#[command(name = "katbot", version, about, long_about = None)]
struct Cli {
    /// Load this config file instead of the standard search paths.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate the configuration and print the effective routing policy.
    Check,
    /// Route JSON events, one per line, and print a verdict for each.
    Route {
        /// Read events from this file instead of stdin.
        #[arg(long, value_name = "FILE")]
        input: Option<PathBuf>,
        /// Reload the routing policy when the config file changes.
        #[arg(long)]
        watch: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(errors) => {
            katbot_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.bot.log_level);
    info!(bot = %config.bot.name, "config loaded");

    match cli.command {
        Some(Commands::Check) => {
            print!("{}", describe_policy(&config));
        }
        Some(Commands::Route { input, watch }) => {
            let watch_path = if watch { cli.config.as_deref() } else { None };
            if watch && watch_path.is_none() {
                warn!("--watch needs --config; config changes will not be picked up");
            }
            match route::run(&config, input.as_deref(), watch_path).await {
                Ok(summary) => info!(
                    responded = summary.responded,
                    ignored = summary.ignored,
                    errors = summary.errors,
                    "event stream finished"
                ),
                Err(e) => {
                    error!(error = %e, "routing failed");
                    eprintln!("katbot: {e}");
                    std::process::exit(1);
                }
            }
        }
        None => {
            println!("katbot: use --help for available commands");
        }
    }
}

fn load(path: Option<&Path>) -> Result<KatbotConfig, Vec<ConfigError>> {
    match path {
        Some(path) => katbot_config::load_and_validate_path(path),
        None => katbot_config::load_and_validate(),
    }
}

/// Initializes the tracing subscriber with the given log level.
///
/// Logs go to stderr; stdout carries verdicts.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("katbot={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .init();
}

/// Human-readable summary of the routing policy for `katbot check`.
fn describe_policy(config: &KatbotConfig) -> String {
    let routing = &config.routing;
    let router = MessageRouter::new(routing);

    let channels = if router.allow_list().is_unrestricted() {
        "every channel"
    } else if router.allow_list().id_count() > 0 {
        "listed channel IDs only"
    } else {
        "listed channel names only"
    };
    let rules: Vec<_> = MessageRouter::rule_names().collect();

    format!(
        "config ok\n\
         bot.name = {name}\n\
         bot.user_id = {user_id}\n\
         routing.allowed_channels = {ids:?}\n\
         routing.allowed_channel_names = {names:?}\n\
         routing.respond_to_mentions = {mentions}\n\
         channels: {channels}\n\
         rules: {rules}\n",
        name = config.bot.name,
        user_id = config.bot.user_id.as_deref().unwrap_or("(unset)"),
        ids = routing.allowed_channels,
        names = routing.allowed_channel_names,
        mentions = routing.respond_to_mentions,
        rules = rules.join(" > "),
    )
}
