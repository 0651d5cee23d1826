//! # Akrag Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! Each top-level command defines its own argument struct and an async
//! handler that `main.rs` dispatches to.
//!
//! - `chat`: the interactive scripted conversation
//! - `quotes`: print the effective quote bank
//!

/// The interactive chat session. Includes the session loop in `chat::session`.
pub mod chat;
/// Prints the quote bank `chat` would use.
pub mod quotes;
