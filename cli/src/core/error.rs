//! # Akrag Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout Akrag. Very little can
//! actually go wrong once a chat session is running: the conversation state
//! machine and response policy are total, and rendering failures are logged
//! and ignored. The errors below exist for the edges of the program.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `AkragError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The error types cover:
//! - Configuration errors (fatal at startup)
//! - Quote source errors (always swallowed by the loader, which falls back to defaults)
//! - Presenter and browser errors (logged, never shown to the user)
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error type
//! if scale < 0.0 {
//!     return Err(AkragError::Config(format!("Invalid pace: {}", scale)))?;
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//! ```
//!
use thiserror::Error;

/// Custom error type for the Akrag application.
#[derive(Error, Debug)]
pub enum AkragError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Quote source '{source_name}' unavailable: {reason}")]
    QuoteSource { source_name: String, reason: String },

    #[error("Quote source request failed: {source}")]
    QuoteFetch {
        #[from]
        source: reqwest::Error,
    },

    #[error("Terminal output failed: {source}")]
    Presenter {
        #[from]
        source: std::io::Error,
    },

    #[error("Could not open '{url}' in a browser: {reason}")]
    Browser { url: String, reason: String },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
