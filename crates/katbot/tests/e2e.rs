// SPDX-FileCopyrightText: 2026 Katbot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end tests for the katbot binary.
//!
//! Each test writes its own config and event files into a temp directory and
//! runs the compiled binary with a cleared environment.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn katbot(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_katbot"))
        .args(args)
        .env_clear()
        .output()
        .expect("failed to run katbot binary")
}

fn write(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, body).unwrap();
    path
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

// ---- Test 1: check ----

#[test]
fn test_check_prints_effective_policy() {
    let dir = tempfile::tempdir().unwrap();
    let config = write(
        dir.path(),
        "katbot.toml",
        "[routing]\nallowed_channels = [\"c1\", \"c2\"]\n",
    );

    let output = katbot(&["--config", config.to_str().unwrap(), "check"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("routing.allowed_channels = [\"c1\", \"c2\"]"));
    assert!(text.contains("channels: listed channel IDs only"));
}

#[test]
fn test_check_rejects_invalid_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = write(
        dir.path(),
        "katbot.toml",
        "[routing]\nallowed_channel_names = [\"ops\", \"OPS\"]\n",
    );

    let output = katbot(&["--config", config.to_str().unwrap(), "check"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("duplicate"));
}

#[test]
fn test_check_rejects_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("katbto.toml");

    let output = katbot(&["--config", missing.to_str().unwrap(), "check"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("does not exist"));
}

// ---- Test 2: route ----

#[test]
fn test_route_file_of_events() {
    let dir = tempfile::tempdir().unwrap();
    let config = write(
        dir.path(),
        "katbot.toml",
        "[bot]\nuser_id = \"4242\"\n\n[routing]\nallowed_channel_names = [\"katbot\"]\n",
    );
    let events = write(
        dir.path(),
        "events.jsonl",
        concat!(
            r#"{"author_id":"u1","content":"hi","channel":{"id":"c1","name":"KatBot"}}"#,
            "\n",
            r#"{"author_id":"u1","content":"hi","channel":{"id":"c2","name":"general"}}"#,
            "\n",
            r#"{"author_id":"u1","content":"<@4242> hi","channel":{"id":"c2","name":"general"}}"#,
            "\n",
            r#"{"author_id":"u1","content":"   "}"#,
            "\n",
            "garbage\n",
            r#"{"author_id":"u1","content":"hi","channel":{"id":"c3"}}"#,
            "\n",
        ),
    );

    let output = katbot(&[
        "--config",
        config.to_str().unwrap(),
        "route",
        "--input",
        events.to_str().unwrap(),
    ]);
    assert!(output.status.success());

    let text = stdout(&output);
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "respond allowed_channel_name");
    assert_eq!(lines[1], "ignore channel_name_not_allowed");
    assert_eq!(lines[2], "respond mention");
    assert_eq!(lines[3], "ignore empty_content");
    assert!(lines[4].starts_with("error invalid event on line 5"));
    assert_eq!(lines[5], "ignore channel_name_missing");
}

#[test]
fn test_route_missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = write(dir.path(), "katbot.toml", "");
    let missing = dir.path().join("nope.jsonl");

    let output = katbot(&[
        "--config",
        config.to_str().unwrap(),
        "route",
        "--input",
        missing.to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("opening"));
}
