//! # Akrag Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! Akrag is a scripted chat bot for the terminal. It doesn't understand
//! anything you type: the first message gets a motivational reminder and a
//! web search, the second a short essay on the limits of AI, the third a
//! goodbye, after which the chat locks until `/reset`.
//!
//! This file handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the command handlers
//!
//! ## Examples
//!
//! ```bash
//! # Start chatting
//! akrag chat
//!
//! # Show the quotes the bot would use, with debug logging
//! akrag -vv quotes --quotes ./quotes.csv
//! ```
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod chat; // The scripted conversation: state, policy, quotes, runner
mod commands; // Command handlers (chat, quotes)
mod common; // Shared utilities (terminal UI)
mod core; // Core infrastructure (errors, config)

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "akrag",
    about = "Akrag: a scripted chat bot that nudges you to do your own research",
    long_about = "Chat with Akrag, a deliberately scripted bot.\n\
                  It answers three messages, points you to real sources, then locks.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    #[command(alias = "q")]
    Quotes(commands::quotes::QuotesArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Chat(args) => commands::chat::handle_chat(args).await,
        Commands::Quotes(args) => commands::quotes::handle_quotes(args).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
