//! # Akrag Quotes Integration Tests
//!
//! File: cli/tests/quotes.rs
//!
//! ## Overview
//!
//! Integration tests for `akrag quotes`, which prints the quote bank the chat
//! would use.
//!

mod common;
use common::*;
use predicates::prelude::*;
use std::fs;

#[test]
fn test_parses_quote_file() {
    let dir = sandbox();
    let path = dir.path().join("mine.csv");
    fs::write(&path, "a\n#comment\n\"b\"\n\nc").unwrap();

    akrag_in(&dir)
        .args(["quotes", "--quotes", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout("a\nb\nc\n")
        .stderr(predicate::str::contains("Loaded 3 quotes"));
}

#[test]
fn test_missing_source_falls_back_to_defaults() {
    let dir = sandbox();
    akrag_in(&dir)
        .args(["quotes", "--quotes", "does-not-exist.csv"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Small progress every day leads to big results.")
                .and(predicate::str::contains(
                    "A little research today saves hours of guesswork tomorrow.",
                )),
        )
        .stderr(predicate::str::contains("Using the 4 built-in quotes."));
}

#[test]
fn test_source_from_environment() {
    let dir = sandbox();
    let path = dir.path().join("env.csv");
    fs::write(&path, "from the environment\n").unwrap();

    akrag_in(&dir)
        .arg("quotes")
        .env("AKRAG_QUOTES", &path)
        .assert()
        .success()
        .stdout("from the environment\n");
}

#[test]
fn test_comment_only_file_falls_back_to_defaults() {
    let dir = sandbox();
    fs::write(dir.path().join("quotes.csv"), "# nothing here\n\n").unwrap();
    akrag_in(&dir)
        .arg("quotes")
        .assert()
        .success()
        .stderr(predicate::str::contains("built-in"));
}
