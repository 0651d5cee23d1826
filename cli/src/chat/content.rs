//! # Message Content
//!
//! File: cli/src/chat/content.rs
//!
//! A small rich-text model for bot bubbles. Presenters decide how each piece
//! looks; the conversation logic only decides what is said.
//!

/// A labelled hyperlink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub label: String,
    pub href: String,
}

impl Link {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// A run of text inside a paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    /// Text echoed back from the user, shown highlighted.
    Highlight(String),
    Link(Link),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Paragraph(Vec<Inline>),
    Heading(String),
    Bullets(Vec<String>),
    Links(Vec<Link>),
}

/// The final content of one bot bubble.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Message {
    pub blocks: Vec<Block>,
}

impl Message {
    /// A message made of a single plain paragraph.
    pub fn text(text: impl Into<String>) -> Self {
        Self::paragraph(vec![Inline::Text(text.into())])
    }

    pub fn paragraph(inlines: Vec<Inline>) -> Self {
        Self {
            blocks: vec![Block::Paragraph(inlines)],
        }
    }

    pub fn with_block(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }

    /// Every link in the message, in reading order.
    #[cfg(test)]
    pub fn links(&self) -> Vec<&Link> {
        let mut out = Vec::new();
        for block in &self.blocks {
            match block {
                Block::Paragraph(inlines) => out.extend(inlines.iter().filter_map(|i| match i {
                    Inline::Link(link) => Some(link),
                    _ => None,
                })),
                Block::Links(links) => out.extend(links.iter()),
                Block::Heading(_) | Block::Bullets(_) => {}
            }
        }
        out
    }

    /// Flattens the message to unstyled text, one block per line.
    pub fn plain_text(&self) -> String {
        let mut lines = Vec::new();
        for block in &self.blocks {
            match block {
                Block::Paragraph(inlines) => lines.push(
                    inlines
                        .iter()
                        .map(|i| match i {
                            Inline::Text(t) | Inline::Highlight(t) => t.clone(),
                            Inline::Link(link) => link.label.clone(),
                        })
                        .collect::<String>(),
                ),
                Block::Heading(h) => lines.push(h.clone()),
                Block::Bullets(items) => lines.extend(items.iter().map(|i| format!("- {i}"))),
                Block::Links(links) => {
                    lines.extend(links.iter().map(|l| format!("- {} ({})", l.label, l.href)))
                }
            }
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_and_links() {
        let msg = Message::paragraph(vec![
            Inline::Text("Consider donating ".into()),
            Inline::Link(Link::new("here", "https://example.com/give")),
            Inline::Text(".".into()),
        ])
        .with_block(Block::Bullets(vec!["one".into(), "two".into()]));

        assert_eq!(msg.plain_text(), "Consider donating here.\n- one\n- two");
        let links = msg.links();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].href, "https://example.com/give");
    }
}
