//! In-memory presenter for tests.
use super::Presenter;
use crate::chat::content::{Link, Message};
use crate::core::error::Result;

#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    User(String),
    Bot(Message),
    Typing,
    Replaced(Message),
    Notice(String),
    LinkNotice { prefix: String, link: Link },
    OpenExternal(String),
    Locked(bool),
    Cleared,
}

#[derive(Debug, Default)]
pub struct RecordingPresenter {
    pub events: Vec<UiEvent>,
    pub locked: bool,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plain text of every replaced bubble, in order.
    pub fn bubbles(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|e| match e {
                UiEvent::Replaced(m) => Some(m.plain_text()),
                _ => None,
            })
            .collect()
    }

    pub fn opened(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                UiEvent::OpenExternal(url) => Some(url.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Presenter for RecordingPresenter {
    fn user_message(&mut self, text: &str) -> Result<()> {
        self.events.push(UiEvent::User(text.to_string()));
        Ok(())
    }

    fn bot_message(&mut self, message: &Message) -> Result<()> {
        self.events.push(UiEvent::Bot(message.clone()));
        Ok(())
    }

    fn show_typing(&mut self) -> Result<()> {
        self.events.push(UiEvent::Typing);
        Ok(())
    }

    fn replace_typing(&mut self, message: &Message) -> Result<()> {
        self.events.push(UiEvent::Replaced(message.clone()));
        Ok(())
    }

    fn notice(&mut self, text: &str) -> Result<()> {
        self.events.push(UiEvent::Notice(text.to_string()));
        Ok(())
    }

    fn link_notice(&mut self, prefix: &str, link: &Link) -> Result<()> {
        self.events.push(UiEvent::LinkNotice {
            prefix: prefix.to_string(),
            link: link.clone(),
        });
        Ok(())
    }

    fn open_external(&mut self, url: &str) -> Result<()> {
        self.events.push(UiEvent::OpenExternal(url.to_string()));
        Ok(())
    }

    fn set_locked(&mut self, locked: bool) -> Result<()> {
        self.locked = locked;
        self.events.push(UiEvent::Locked(locked));
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.events.push(UiEvent::Cleared);
        Ok(())
    }
}
