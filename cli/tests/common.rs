//! # Akrag Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each test runs
//! the compiled `akrag` binary inside its own temporary directory so that no
//! `.akrag.toml`, user config or `quotes.csv` from the developer's machine
//! leaks into the result.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

/// # Get Akrag Command (`akrag_cmd`)
///
/// Creates an `assert_cmd::Command` for the compiled `akrag` binary.
///
/// ## Panics
/// Panics if the `akrag` binary cannot be found via `Command::cargo_bin`.
pub fn akrag_cmd() -> Command {
    Command::cargo_bin("akrag").expect("Failed to find akrag binary for testing")
}

/// A scratch working directory with a `.git` marker, so project config
/// lookup stops here.
pub fn sandbox() -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    fs::create_dir(dir.path().join(".git")).expect("Failed to create .git marker");
    dir
}

/// `akrag_cmd()` running inside `dir`, with user config and env overrides
/// pointed away from the real machine.
pub fn akrag_in(dir: &TempDir) -> Command {
    let mut cmd = akrag_cmd();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join("config"))
        .env_remove("AKRAG_QUOTES")
        .env_remove("AKRAG_SEARCH_ENDPOINT")
        .env_remove("RUST_LOG");
    cmd
}
