//! # Akrag UI Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//!
//! ## Overview
//!
//! Everything the user sees goes through the `Presenter` trait. The chat
//! logic produces scripts of steps; the runner turns each step into one or
//! two presenter calls. Keeping the terminal behind a trait lets the same
//! scripts drive the real terminal and the in-memory recorder the tests use.
//!
//! ## Architecture
//!
//! - **`terminal`**: `TerminalPresenter`, writing styled text to any `Write`
//!   (stdout in the binary). Uses `crossterm` to clear the typing indicator
//!   in place and `webbrowser` to open search pages.
//! - **`recording`** (tests only): `RecordingPresenter`, which stores every
//!   call as a `UiEvent` for assertions.
//!
//! Presenter calls are best-effort. A failing call is logged by the caller
//! and the conversation carries on.
//!
use crate::chat::content::{Link, Message};
use crate::core::error::Result;
use tracing::warn;

pub mod terminal;

#[cfg(test)]
pub mod recording;

pub use terminal::{TerminalOptions, TerminalPresenter};

/// The display surface a conversation renders into.
pub trait Presenter {
    /// Echo a submitted user message.
    fn user_message(&mut self, text: &str) -> Result<()>;

    /// A bot bubble shown without a typing phase (the welcome message).
    fn bot_message(&mut self, message: &Message) -> Result<()>;

    /// Show the transient "thinking" placeholder.
    fn show_typing(&mut self) -> Result<()>;

    /// Replace the placeholder with the final content.
    fn replace_typing(&mut self, message: &Message) -> Result<()>;

    fn notice(&mut self, text: &str) -> Result<()>;

    fn link_notice(&mut self, prefix: &str, link: &Link) -> Result<()>;

    /// Open `url` outside the chat, e.g. in a browser tab.
    fn open_external(&mut self, url: &str) -> Result<()>;

    /// Disable (or re-enable) the input surface and toggle the reset hint.
    fn set_locked(&mut self, locked: bool) -> Result<()>;

    /// Remove everything shown so far.
    fn clear(&mut self) -> Result<()>;

    /// Ask for the next line of input.
    fn prompt(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Logs a failed presenter call and carries on.
pub fn best_effort(action: &str, result: Result<()>) {
    if let Err(e) = result {
        warn!("Failed to {}: {:#}", action, e);
    }
}
