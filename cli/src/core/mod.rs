//! # Akrag Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the infrastructure the chat commands stand on:
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types and error handling utilities
//!
//! ```rust
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{AkragError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
