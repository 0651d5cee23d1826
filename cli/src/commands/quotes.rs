//! # Akrag Quotes Command
//!
//! File: cli/src/commands/quotes.rs
//!
//! `akrag quotes` loads the quote bank exactly the way `akrag chat` does and
//! prints it, one quote per line. Handy for checking a quote file before
//! chatting with it. Whether the built-in defaults were used is reported on
//! stderr so stdout stays a clean list.
//!
use crate::chat::quotes::{self, QuoteOrigin};
use crate::core::config::{self, Overrides};
use crate::core::error::Result;
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
pub struct QuotesArgs {
    /// Quote source: a file path or an http(s) URL. Defaults to ./quotes.csv.
    #[arg(long, env = "AKRAG_QUOTES")]
    pub quotes: Option<String>,
}

pub async fn handle_quotes(args: QuotesArgs) -> Result<()> {
    info!("Handling quotes command with args: {:?}", args);
    let config = config::load_config(&Overrides {
        quotes_source: args.quotes,
        ..Default::default()
    })?;

    let bank = quotes::load_quote_bank(&config.quotes).await;
    for quote in bank.quotes() {
        println!("{quote}");
    }
    match bank.origin() {
        QuoteOrigin::Defaults => eprintln!("Using the {} built-in quotes.", bank.len()),
        QuoteOrigin::Source(name) => eprintln!("Loaded {} quotes from {}.", bank.len(), name),
    }
    Ok(())
}
