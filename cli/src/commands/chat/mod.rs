//! # Akrag Chat Command
//!
//! File: cli/src/commands/chat/mod.rs
//!
//! ## Overview
//!
//! `akrag chat` runs one scripted conversation on stdin/stdout:
//!
//! 1. Load and merge configuration (flags, `.akrag.toml`, user config).
//! 2. Load the quote bank, silently falling back to the built-in quotes.
//! 3. Build the terminal presenter, detecting whether a person is typing.
//! 4. Hand everything to `session::run_session` until `/quit` or EOF.
//!
//! ## Examples
//!
//! ```bash
//! # Chat with the defaults
//! akrag chat
//!
//! # Use your own quotes, never launch a browser, reply instantly
//! akrag chat --quotes ~/quotes.csv --no-browser --instant
//!
//! # Pipe a transcript through it
//! printf 'bake cookies\nmore\nthanks\n' | akrag chat --no-browser --instant
//! ```
//!
use crate::chat::engine::ChatEngine;
use crate::chat::quotes;
use crate::common::ui::{TerminalOptions, TerminalPresenter};
use crate::core::config::{self, Overrides};
use crate::core::error::Result;
use clap::Parser;
use std::io::IsTerminal;
use tokio::io::BufReader;
use tracing::info;

pub mod session;

#[derive(Parser, Debug)]
pub struct ChatArgs {
    /// Quote source: a file path or an http(s) URL. Defaults to ./quotes.csv.
    #[arg(long, env = "AKRAG_QUOTES")]
    pub quotes: Option<String>,

    /// Search endpoint the first answer sends your question to.
    #[arg(long, env = "AKRAG_SEARCH_ENDPOINT")]
    pub search_endpoint: Option<String>,

    /// Print the search link without launching a browser.
    #[arg(long)]
    pub no_browser: bool,

    /// Multiplier for every reply delay (1.0 = normal, 0 = instant).
    #[arg(long, conflicts_with = "instant")]
    pub pace: Option<f64>,

    /// Reply without any delays. Same as `--pace 0`.
    #[arg(long)]
    pub instant: bool,

    /// Name the bot introduces itself with.
    #[arg(long)]
    pub name: Option<String>,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,
}

impl ChatArgs {
    fn overrides(&self) -> Overrides {
        Overrides {
            name: self.name.clone(),
            quotes_source: self.quotes.clone(),
            search_endpoint: self.search_endpoint.clone(),
            open_browser: self.no_browser.then_some(false),
            pace: if self.instant { Some(0.0) } else { self.pace },
        }
    }
}

/// # Handle Chat Command (`handle_chat`)
///
/// Entry point for `akrag chat`. Returns an error only for configuration
/// problems or unreadable stdin; everything that goes wrong during the
/// conversation itself is logged and skipped.
pub async fn handle_chat(args: ChatArgs) -> Result<()> {
    info!("Handling chat command with args: {:?}", args);
    let config = config::load_config(&args.overrides())?;

    let bank = quotes::load_quote_bank(&config.quotes).await;
    info!("Quote bank ready: {} quotes ({:?})", bank.len(), bank.origin());
    let mut engine = ChatEngine::new(&config, bank);

    let stdout_tty = std::io::stdout().is_terminal();
    let options = TerminalOptions {
        name: config.persona.name.clone(),
        styled: stdout_tty && !args.no_color && std::env::var_os("NO_COLOR").is_none(),
        interactive: stdout_tty && std::io::stdin().is_terminal(),
        open_browser: config.search.open_browser,
    };
    let mut presenter = TerminalPresenter::new(std::io::stdout(), options);
    let input = BufReader::new(tokio::io::stdin());

    session::run_session(&mut engine, &mut presenter, input, config.pacing.scale).await
}
