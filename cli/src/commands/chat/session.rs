//! # Chat Session Loop
//!
//! File: cli/src/commands/chat/session.rs
//!
//! ## Overview
//!
//! Reads lines, feeds them to the `ChatEngine`, and plays each resulting
//! script through the presenter. Input keeps being read while a response is
//! playing:
//!
//! - `/reset` cancels the playing response at once and starts over.
//! - Anything else typed meanwhile is queued and handled, in order, once the
//!   response finishes.
//! - `/quit` (or end of input) ends the session after the current response.
//!
use crate::chat::engine::ChatEngine;
use crate::chat::runner;
use crate::common::ui::{best_effort, Presenter};
use crate::core::error::Result;
use anyhow::Context;
use rand::Rng;
use std::collections::VecDeque;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info};

const RESET_COMMAND: &str = "/reset";
const QUIT_COMMANDS: [&str; 2] = ["/quit", "/exit"];

#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Message(&'a str),
    Reset,
    Quit,
}

fn classify(line: &str) -> Command<'_> {
    match line.trim() {
        RESET_COMMAND => Command::Reset,
        cmd if QUIT_COMMANDS.contains(&cmd) => Command::Quit,
        _ => Command::Message(line),
    }
}

/// Runs one chat session until `/quit` or end of input.
pub async fn run_session<G, P, I>(
    engine: &mut ChatEngine<G>,
    presenter: &mut P,
    input: I,
    pace: f64,
) -> Result<()>
where
    G: Rng,
    P: Presenter,
    I: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    let mut pending: VecDeque<String> = VecDeque::new();
    let mut eof = false;

    best_effort("render welcome", presenter.bot_message(&engine.welcome()));

    loop {
        let line = match pending.pop_front() {
            Some(line) => line,
            None if eof => break,
            None => {
                best_effort("render prompt", presenter.prompt());
                match lines.next_line().await.context("Failed to read input")? {
                    Some(line) => line,
                    None => break,
                }
            }
        };

        let text = match classify(&line) {
            Command::Quit => {
                debug!("Quit requested");
                break;
            }
            Command::Reset => {
                reset_session(engine, presenter);
                continue;
            }
            Command::Message(text) => text,
        };
        let Some(turn) = engine.handle_input(text) else {
            continue;
        };
        best_effort("echo user message", presenter.user_message(&turn.question));
        debug!(
            "Playing {:?} response ({:?} at normal pace)",
            turn.variant,
            turn.script.total_delay()
        );
        let locks = turn.script.ends_locked();

        let token = engine.sequence_token();
        let reset_requested = {
            let playback = runner::play(turn.script, presenter, pace, &token);
            tokio::pin!(playback);
            loop {
                tokio::select! {
                    outcome = &mut playback => {
                        debug!("Response finished: {:?}", outcome);
                        break false;
                    }
                    next = lines.next_line(), if !eof => {
                        match next.context("Failed to read input")? {
                            Some(line) if classify(&line) == Command::Reset => {
                                token.cancel();
                                let outcome = playback.as_mut().await;
                                debug!("Response stopped by reset: {:?}", outcome);
                                break true;
                            }
                            Some(line) => pending.push_back(line),
                            None => eof = true,
                        }
                    }
                }
            }
        };
        if locks && !reset_requested {
            info!(
                "Conversation locked after {} messages",
                engine.state().ask_count()
            );
        }
        if reset_requested {
            info!("Reset requested while a response was playing");
            pending.clear();
            reset_session(engine, presenter);
        }
    }

    Ok(())
}

fn reset_session<G: Rng, P: Presenter>(engine: &mut ChatEngine<G>, presenter: &mut P) {
    let welcome = engine.reset();
    best_effort("clear conversation", presenter.clear());
    best_effort("unlock input", presenter.set_locked(false));
    best_effort("render welcome", presenter.bot_message(&welcome));
}
