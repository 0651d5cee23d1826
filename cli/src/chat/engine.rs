//! # Chat Engine
//!
//! File: cli/src/chat/engine.rs
//!
//! ## Overview
//!
//! One `ChatEngine` is one session: it owns the conversation state, the
//! quote bank, the random source and the cancellation token of the response
//! sequence currently allowed to render. It turns raw input into a `Turn`
//! (the variant chosen plus its script) and never renders anything itself.
//!
//! ## Reset
//!
//! `reset` zeroes the counter and cancels the current sequence token before
//! issuing a fresh one. A script started before the reset keeps the old token,
//! so the runner stops it at its next delay instead of letting it render into
//! the cleared session.
//!
use super::content::{Inline, Message};
use super::policy::{ResponsePolicy, ResponseVariant};
use super::quotes::QuoteBank;
use super::script::Script;
use super::state::ConversationState;
use crate::core::config::Config;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// What the engine decided to do with one submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Turn {
    /// The submission, trimmed.
    pub question: String,
    pub variant: ResponseVariant,
    pub script: Script,
}

pub struct ChatEngine<R: Rng = StdRng> {
    state: ConversationState,
    quotes: QuoteBank,
    policy: ResponsePolicy,
    persona: String,
    rng: R,
    sequence: CancellationToken,
}

impl ChatEngine<StdRng> {
    pub fn new(config: &Config, quotes: QuoteBank) -> Self {
        Self::with_rng(config, quotes, StdRng::from_entropy())
    }
}

impl<R: Rng> ChatEngine<R> {
    pub fn with_rng(config: &Config, quotes: QuoteBank, rng: R) -> Self {
        Self {
            state: ConversationState::new(),
            quotes,
            policy: ResponsePolicy::new(config),
            persona: config.persona.name.clone(),
            rng,
            sequence: CancellationToken::new(),
        }
    }

    pub fn state(&self) -> &ConversationState {
        &self.state
    }

    /// Token for scripts started now. Cancelled by the next `reset`.
    pub fn sequence_token(&self) -> CancellationToken {
        self.sequence.clone()
    }

    pub fn welcome(&self) -> Message {
        Message::paragraph(vec![
            Inline::Text(format!(
                "Hi — I'm {}. I'm a software, not a real human. Try asking something like ",
                self.persona
            )),
            Inline::Highlight("\"How to bake cookies in air fryer\"".to_string()),
        ])
    }

    /// Handles one line of user input.
    ///
    /// Returns `None` for empty or whitespace-only input, which leaves the
    /// session untouched. While locked every submission gets the overflow
    /// response and the count stays put.
    pub fn handle_input(&mut self, raw: &str) -> Option<Turn> {
        let question = raw.trim();
        if question.is_empty() {
            return None;
        }

        let variant = if self.state.locked() {
            debug!("Submission while locked; count stays at {}", self.state.ask_count());
            ResponseVariant::Overflow
        } else {
            let count = self.state.submit();
            ResponsePolicy::select(count)
        };
        info!("Now {:?} -> {:?} response", self.state.phase(), variant);

        let script = self
            .policy
            .script(variant, question, &self.quotes, &mut self.rng);
        Some(Turn {
            question: question.to_string(),
            variant,
            script,
        })
    }

    /// Starts over: zero the counter, abandon any in-flight sequence, and
    /// return the welcome message to show again.
    pub fn reset(&mut self) -> Message {
        self.sequence.cancel();
        self.sequence = CancellationToken::new();
        self.state.reset();
        info!("Conversation reset");
        self.welcome()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::runner::{play, Playback};
    use crate::chat::script::Step;
    use crate::common::ui::recording::RecordingPresenter;
    use std::time::Duration;

    fn engine() -> ChatEngine<StdRng> {
        ChatEngine::with_rng(
            &Config::default(),
            QuoteBank::default(),
            StdRng::seed_from_u64(42),
        )
    }

    #[test]
    fn test_nth_submission_gets_mapped_variant() {
        let mut engine = engine();
        let variants: Vec<ResponseVariant> = ["q1", "q2", "q3", "q4", "q5"]
            .iter()
            .filter_map(|q| engine.handle_input(q))
            .map(|turn| turn.variant)
            .collect();
        assert_eq!(
            variants,
            vec![
                ResponseVariant::First,
                ResponseVariant::Second,
                ResponseVariant::Third,
                ResponseVariant::Overflow,
                ResponseVariant::Overflow,
            ]
        );
        assert_eq!(engine.state().ask_count(), 3);
        assert!(engine.state().locked());
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let mut engine = engine();
        for blank in ["", "   ", "\t\n", "\r\n"] {
            assert!(engine.handle_input(blank).is_none());
        }
        assert_eq!(engine.state().ask_count(), 0);
        let turn = engine.handle_input("  bake cookies \n").unwrap();
        assert_eq!(turn.question, "bake cookies");
        assert_eq!(turn.variant, ResponseVariant::First);
    }

    #[test]
    fn test_reset_from_any_state() {
        for submissions in 0..6 {
            let mut engine = engine();
            for i in 0..submissions {
                engine.handle_input(&format!("question {i}"));
            }
            let welcome = engine.reset();
            assert_eq!(engine.state().ask_count(), 0);
            assert!(!engine.state().locked());
            assert!(welcome.plain_text().starts_with("Hi — I'm Akrag."));
            assert_eq!(
                engine.handle_input("again").map(|t| t.variant),
                Some(ResponseVariant::First)
            );
        }
    }

    #[test]
    fn test_reset_cancels_previous_token_only() {
        let mut engine = engine();
        let before = engine.sequence_token();
        engine.reset();
        assert!(before.is_cancelled());
        assert!(!engine.sequence_token().is_cancelled());
    }

    #[test]
    fn test_first_turn_searches_for_question() {
        let mut engine = engine();
        let turn = engine.handle_input("bake cookies").unwrap();
        let expected = Step::OpenExternal("https://duckduckgo.com/?q=bake%20cookies".into());
        assert!(turn.script.steps().contains(&expected));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_during_first_response_stops_it() {
        let mut engine = engine();
        let mut presenter = RecordingPresenter::new();
        let turn = engine.handle_input("bake cookies").unwrap();
        let token = engine.sequence_token();

        let outcome = {
            let playback = play(turn.script, &mut presenter, 1.0, &token);
            tokio::pin!(playback);
            tokio::select! {
                outcome = &mut playback => outcome,
                _ = tokio::time::sleep(Duration::from_millis(1000)) => {
                    engine.reset();
                    playback.await
                }
            }
        };

        assert_eq!(outcome, Playback::Cancelled);
        assert_eq!(presenter.bubbles().len(), 1);
        assert!(presenter.opened().is_empty());
        assert_eq!(engine.state().ask_count(), 0);
    }
}
