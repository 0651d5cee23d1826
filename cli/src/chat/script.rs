//! # Response Scripts
//!
//! File: cli/src/chat/script.rs
//!
//! A script is the ordered, timed list of things a response variant does.
//! Scripts are plain data: building one has no side effects, and the runner
//! (`chat::runner`) is the only thing that plays them.
//!
use super::content::{Link, Message};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Show the typing indicator, wait `delay`, then replace it with `message`.
    Typing { delay: Duration, message: Message },
    Pause(Duration),
    /// Ask the presenter to open `url` outside the chat (a browser tab).
    OpenExternal(String),
    Notice(String),
    LinkNotice { prefix: String, link: Link },
    /// Disable input and reveal the reset affordance.
    Lock,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Script {
    steps: Vec<Step>,
}

impl Script {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn typing(mut self, delay_ms: u64, message: Message) -> Self {
        self.steps.push(Step::Typing {
            delay: Duration::from_millis(delay_ms),
            message,
        });
        self
    }

    pub fn pause(mut self, delay_ms: u64) -> Self {
        self.steps.push(Step::Pause(Duration::from_millis(delay_ms)));
        self
    }

    pub fn then(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    #[cfg(test)]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Sum of all delays at normal pace.
    pub fn total_delay(&self) -> Duration {
        self.steps
            .iter()
            .map(|s| match s {
                Step::Typing { delay, .. } | Step::Pause(delay) => *delay,
                _ => Duration::ZERO,
            })
            .sum()
    }

    pub fn ends_locked(&self) -> bool {
        self.steps.iter().any(|s| matches!(s, Step::Lock))
    }
}

impl IntoIterator for Script {
    type Item = Step;
    type IntoIter = std::vec::IntoIter<Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}
