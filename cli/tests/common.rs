//! # GoBot Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration test files (`session.rs`, `config.rs`,
//! `main_tests.rs`). Each of those files is compiled as its own test crate and
//! pulls this one in with `mod common;`.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::Path;

pub const GREETING: &str = "🤖 Hello there! Nice to meet you!";
pub const SAID_NOTHING: &str = "🤖 You didn't say anything. Try typing something!";
pub const GO_PRAISE: &str =
    "🤖 Go is awesome! It's fast, simple, and great for building applications!";
pub const FIRST_FALLBACK: &str = "🤖 That's interesting! Tell me more.";
pub const GOODBYE: &str = "🤖 Goodbye! Thanks for chatting with me!";

/// # Get GoBot Command (`gobot_cmd`)
///
/// Creates an `assert_cmd::Command` pointing at the compiled `gobot` binary.
///
/// ## Panics
/// Panics if the `gobot` binary cannot be found via `Command::cargo_bin`.
pub fn gobot_cmd() -> Command {
    Command::cargo_bin("gobot").expect("Failed to find gobot binary for testing")
}

/// # Get Isolated GoBot Command (`isolated_cmd`)
///
/// Like `gobot_cmd`, but runs inside `dir` with `HOME` and `XDG_CONFIG_HOME`
/// pointed there too, so neither a developer's own `config.toml` nor a stray
/// `.gobot.toml` can change what the tests see.
pub fn isolated_cmd(dir: &Path) -> Command {
    let mut cmd = gobot_cmd();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("RUST_LOG");
    cmd
}
