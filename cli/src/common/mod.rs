//! # Akrag Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! Shared, command-independent utilities. Currently only the terminal UI:
//! the `Presenter` trait and its implementations.
//!

/// Terminal rendering of the conversation (`Presenter`, `TerminalPresenter`).
pub mod ui;
