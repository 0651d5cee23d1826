//! # Conversation State
//!
//! File: cli/src/chat/state.rs
//!
//! The per-session message counter. A session starts `Fresh`, moves through
//! two `Active` stages, and locks on the third submission. Only `reset`
//! leaves the locked state.
//!

/// Number of submissions after which the conversation locks.
pub const LOCK_AFTER: u32 = 3;

/// Where a session currently sits in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Fresh,
    Active(u32),
    Locked(u32),
}

/// Counter and lock state for one chat session.
///
/// `locked()` is derived from the count, so the two can never disagree.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConversationState {
    ask_count: u32,
}

impl ConversationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ask_count(&self) -> u32 {
        self.ask_count
    }

    pub fn locked(&self) -> bool {
        self.ask_count >= LOCK_AFTER
    }

    pub fn phase(&self) -> Phase {
        match self.ask_count {
            0 => Phase::Fresh,
            n if n < LOCK_AFTER => Phase::Active(n),
            n => Phase::Locked(n),
        }
    }

    /// Records one user message and returns the new count.
    ///
    /// While locked this is a no-op that returns the unchanged count; callers
    /// check `locked()` first.
    pub fn submit(&mut self) -> u32 {
        if !self.locked() {
            self.ask_count += 1;
        }
        self.ask_count
    }

    pub fn reset(&mut self) {
        self.ask_count = 0;
    }
}
