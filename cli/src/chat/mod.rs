//! # Akrag Conversation Core (`chat`)
//!
//! File: cli/src/chat/mod.rs
//!
//! ## Overview
//!
//! The scripted conversation itself, independent of any terminal:
//!
//! - **`state`**: the per-session message counter and lock.
//! - **`policy`**: count → response variant → script.
//! - **`quotes`**: the quote bank and its loader.
//! - **`script`** / **`content`**: the data a response is made of.
//! - **`search`**: search URL construction.
//! - **`engine`**: one session tying the above together.
//! - **`runner`**: plays scripts against a `common::ui::Presenter`.
//!
//! ```text
//! input ─▶ ChatEngine::handle_input ─▶ Turn { variant, script } ─▶ runner::play ─▶ Presenter
//! ```
//!
pub mod content;
pub mod engine;
pub mod policy;
pub mod quotes;
pub mod runner;
pub mod script;
pub mod search;
pub mod state;
