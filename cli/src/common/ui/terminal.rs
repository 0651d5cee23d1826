//! # Terminal Presenter
//!
//! File: cli/src/common/ui/terminal.rs
//!
//! Renders the conversation as lines of text. On an interactive terminal the
//! typing indicator is drawn on its own line and wiped in place when the
//! reply arrives; when output is piped the indicator is skipped entirely so
//! transcripts stay clean.
//!
use super::Presenter;
use crate::chat::content::{Block, Inline, Link, Message};
use crate::core::error::{AkragError, Result};
use crossterm::style::{StyledContent, Stylize};
use crossterm::{cursor, queue, terminal};
use std::io::Write;
use tracing::{debug, info};

const INDENT: &str = "  ";

#[derive(Debug, Clone)]
pub struct TerminalOptions {
    /// Persona name shown before every bot bubble.
    pub name: String,
    /// Emit ANSI colors and attributes.
    pub styled: bool,
    /// Input comes from a person at a terminal: draw the typing indicator and
    /// prompt, and don't echo what they typed.
    pub interactive: bool,
    pub open_browser: bool,
}

pub struct TerminalPresenter<W: Write> {
    out: W,
    options: TerminalOptions,
    typing_shown: bool,
    locked: bool,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W, options: TerminalOptions) -> Self {
        Self {
            out,
            options,
            typing_shown: false,
            locked: false,
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(
        &self,
        text: &str,
        style: impl FnOnce(StyledContent<&str>) -> StyledContent<&str>,
    ) -> String {
        if self.options.styled {
            style(text.stylize()).to_string()
        } else {
            text.to_string()
        }
    }

    fn render_link(&self, link: &Link) -> String {
        format!(
            "{} ({})",
            link.label,
            self.paint(&link.href, |s| s.underlined().blue())
        )
    }

    fn render_inlines(&self, inlines: &[Inline]) -> String {
        inlines
            .iter()
            .map(|inline| match inline {
                Inline::Text(t) => t.clone(),
                Inline::Highlight(t) => self.paint(t, |s| s.bold().yellow()),
                Inline::Link(link) => self.render_link(link),
            })
            .collect()
    }

    /// One output line per block row, without the persona prefix.
    fn render_message(&self, message: &Message) -> Vec<String> {
        let mut lines = Vec::new();
        for block in &message.blocks {
            match block {
                Block::Paragraph(inlines) => lines.push(self.render_inlines(inlines)),
                Block::Heading(text) => lines.push(self.paint(text, |s| s.bold())),
                Block::Bullets(items) => {
                    lines.extend(items.iter().map(|item| format!("{INDENT}• {item}")))
                }
                Block::Links(links) => lines.extend(
                    links
                        .iter()
                        .map(|link| format!("{INDENT}• {}", self.render_link(link))),
                ),
            }
        }
        lines
    }

    fn write_bubble(&mut self, message: &Message) -> Result<()> {
        let prefix = format!("{} › ", self.paint(&self.options.name, |s| s.bold().cyan()));
        let lines = self.render_message(message);
        let mut lines = lines.iter();
        match lines.next() {
            Some(first) => writeln!(self.out, "{prefix}{first}").map_err(AkragError::from)?,
            None => writeln!(self.out, "{prefix}").map_err(AkragError::from)?,
        }
        for line in lines {
            writeln!(self.out, "{INDENT}{line}").map_err(AkragError::from)?;
        }
        self.out.flush().map_err(AkragError::from)?;
        Ok(())
    }

    fn clear_typing(&mut self) -> Result<()> {
        if self.typing_shown {
            queue!(
                self.out,
                cursor::MoveToColumn(0),
                terminal::Clear(terminal::ClearType::CurrentLine)
            )
            .map_err(AkragError::from)?;
            self.typing_shown = false;
        }
        Ok(())
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn user_message(&mut self, text: &str) -> Result<()> {
        if !self.options.interactive {
            let who = self.paint("you", |s| s.bold().green());
            writeln!(self.out, "{who} › {text}").map_err(AkragError::from)?;
        }
        Ok(())
    }

    fn bot_message(&mut self, message: &Message) -> Result<()> {
        self.write_bubble(message)
    }

    fn show_typing(&mut self) -> Result<()> {
        if self.options.interactive {
            let line = format!("{} is thinking...", self.options.name);
            let line = self.paint(&line, |s| s.dim().italic());
            write!(self.out, "{line}").map_err(AkragError::from)?;
            self.out.flush().map_err(AkragError::from)?;
            self.typing_shown = true;
        }
        Ok(())
    }

    fn replace_typing(&mut self, message: &Message) -> Result<()> {
        self.clear_typing()?;
        self.write_bubble(message)
    }

    fn notice(&mut self, text: &str) -> Result<()> {
        let text = self.paint(text, |s| s.dim());
        writeln!(self.out, "{INDENT}{text}").map_err(AkragError::from)?;
        Ok(())
    }

    fn link_notice(&mut self, prefix: &str, link: &Link) -> Result<()> {
        let prefix = self.paint(prefix, |s| s.dim());
        let link = self.render_link(link);
        writeln!(self.out, "{INDENT}{prefix}{link}").map_err(AkragError::from)?;
        self.out.flush().map_err(AkragError::from)?;
        Ok(())
    }

    fn open_external(&mut self, url: &str) -> Result<()> {
        if !self.options.open_browser {
            debug!("Browser launch disabled; not opening {}", url);
            return Ok(());
        }
        info!("Opening {} in the default browser", url);
        webbrowser::open(url).map_err(|e| AkragError::Browser {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        Ok(())
    }

    fn set_locked(&mut self, locked: bool) -> Result<()> {
        if locked && !self.locked {
            let hint = self.paint("Chat locked. Type /reset to start over.", |s| s.bold().red());
            writeln!(self.out, "{INDENT}{hint}").map_err(AkragError::from)?;
        }
        self.locked = locked;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.typing_shown = false;
        if self.options.interactive {
            queue!(
                self.out,
                terminal::Clear(terminal::ClearType::All),
                cursor::MoveTo(0, 0)
            )
            .map_err(AkragError::from)?;
        } else {
            writeln!(self.out, "--- conversation reset ---").map_err(AkragError::from)?;
        }
        self.out.flush().map_err(AkragError::from)?;
        Ok(())
    }

    fn prompt(&mut self) -> Result<()> {
        if self.options.interactive {
            let prompt = if self.locked {
                self.paint("[locked] /reset › ", |s| s.red())
            } else {
                self.paint("you › ", |s| s.bold().green())
            };
            write!(self.out, "{prompt}").map_err(AkragError::from)?;
            self.out.flush().map_err(AkragError::from)?;
        }
        Ok(())
    }
}
