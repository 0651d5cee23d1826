//! # Response Policy
//!
//! File: cli/src/chat/policy.rs
//!
//! ## Overview
//!
//! Maps the post-increment message count to one of four response variants,
//! and each variant to the script it plays. Nothing here looks at what the
//! user actually asked beyond echoing it back.
//!
//! | count | variant  |
//! |-------|----------|
//! | 1     | First    |
//! | 2     | Second   |
//! | 3     | Third    |
//! | >3    | Overflow |
//!
//! The stages live in the `STAGES` table, so adding one is a data change.
//!
use super::content::{Block, Inline, Link, Message};
use super::quotes::QuoteBank;
use super::script::{Script, Step};
use super::search::{search_label, search_url};
use crate::core::config::Config;
use rand::Rng;

/// The closed set of bot behaviors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseVariant {
    First,
    Second,
    Third,
    Overflow,
}

/// Variant for each count, starting at count 1.
const STAGES: [ResponseVariant; 3] = [
    ResponseVariant::First,
    ResponseVariant::Second,
    ResponseVariant::Third,
];

// Delays, in milliseconds at normal pace.
const REMINDER_TYPING_MS: u64 = 700;
const RESEARCH_TYPING_MS: u64 = 900;
const BEFORE_SEARCH_MS: u64 = 600;
const SEARCH_TYPING_MS: u64 = 500;
const BEFORE_OPEN_MS: u64 = 1400;
const ESSAY_TYPING_MS: u64 = 700;
const CLOSING_TYPING_MS: u64 = 700;
const OVERFLOW_TYPING_MS: u64 = 400;

pub const RESEARCH_TEXT: &str = "Do some research and read other sources about this.";
pub const RISKS_HEADING: &str = "Important — some risks and limitations of AI:";
pub const RISKS: [&str; 4] = [
    "Not a human — the system is not conscious or understanding; treat it as a tool.",
    "Answers are not validated — models can produce plausible-sounding but incorrect facts.",
    "May reinforce false beliefs or hallucinations — double-check important claims.",
    "Bias & fairness — models reflect training data and can show biased outputs.",
];
pub const FURTHER_READING: [(&str, &str); 3] = [
    (
        "Filling The Data Gaps Causes AI To Make Up False Facts",
        "https://medium.com/publishous/filling-the-data-gaps-causes-ai-to-make-up-false-facts-7895b79711db",
    ),
    (
        "Psychology Today: The Emerging Problem of \"AI Psychosis\"",
        "https://www.psychologytoday.com/gb/blog/urban-survival/202507/the-emerging-problem-of-ai-psychosis",
    ),
    (
        "Wired: Worry About Misuse of AI, Not Superintelligence",
        "https://www.wired.com/story/human-misuse-will-make-artificial-intelligence-more-dangerous/",
    ),
];
pub const LOCKED_NOTICE: &str =
    "This conversation has reached the design limits for this demo and has been locked.";
pub const OVERFLOW_TEXT: &str = "I've already reached my design limits — this chat is locked.";

/// Builds response scripts for one configuration.
#[derive(Debug, Clone)]
pub struct ResponsePolicy {
    search_endpoint: String,
    donation_url: String,
}

impl ResponsePolicy {
    pub fn new(config: &Config) -> Self {
        Self {
            search_endpoint: config.search.endpoint.clone(),
            donation_url: config.donation.url.clone(),
        }
    }

    /// Picks the variant for a post-increment count. Total over all counts;
    /// 0 is treated like 1.
    pub fn select(count: u32) -> ResponseVariant {
        let index = count.saturating_sub(1) as usize;
        STAGES
            .get(index)
            .copied()
            .unwrap_or(ResponseVariant::Overflow)
    }

    pub fn script<R: Rng + ?Sized>(
        &self,
        variant: ResponseVariant,
        question: &str,
        quotes: &QuoteBank,
        rng: &mut R,
    ) -> Script {
        match variant {
            ResponseVariant::First => self.first(question, quotes.pick(rng)),
            ResponseVariant::Second => second(),
            ResponseVariant::Third => self.third(),
            ResponseVariant::Overflow => overflow(),
        }
    }

    /// Reminder, research nudge, then hand the question to the search site.
    fn first(&self, question: &str, quote: &str) -> Script {
        let url = search_url(&self.search_endpoint, question);
        let label = search_label(&self.search_endpoint);
        Script::new()
            .typing(
                REMINDER_TYPING_MS,
                Message::text(format!("Here's an important reminder: {quote}")),
            )
            .typing(RESEARCH_TYPING_MS, Message::text(RESEARCH_TEXT))
            .pause(BEFORE_SEARCH_MS)
            .typing(
                SEARCH_TYPING_MS,
                Message::paragraph(vec![
                    Inline::Text("Okay — opening search results for: ".to_string()),
                    Inline::Highlight(question.to_string()),
                ]),
            )
            .pause(BEFORE_OPEN_MS)
            .then(Step::OpenExternal(url.clone()))
            .then(Step::LinkNotice {
                prefix: "Search opened — ".to_string(),
                link: Link::new(format!("Open {label} for: {question}"), url),
            })
    }

    fn third(&self) -> Script {
        Script::new()
            .typing(
                CLOSING_TYPING_MS,
                Message::paragraph(vec![
                    Inline::Text(
                        "I have reached my design limits. Was this useful? Consider donating "
                            .to_string(),
                    ),
                    Inline::Link(Link::new("here", self.donation_url.clone())),
                    Inline::Text(".".to_string()),
                ]),
            )
            .then(Step::Lock)
            .then(Step::Notice(LOCKED_NOTICE.to_string()))
    }
}

fn second() -> Script {
    let essay = Message::default()
        .with_block(Block::Heading(RISKS_HEADING.to_string()))
        .with_block(Block::Bullets(RISKS.iter().map(|r| r.to_string()).collect()))
        .with_block(Block::Paragraph(vec![Inline::Text(
            "Further reading:".to_string(),
        )]))
        .with_block(Block::Links(
            FURTHER_READING
                .iter()
                .map(|(label, href)| Link::new(*label, *href))
                .collect(),
        ));
    Script::new().typing(ESSAY_TYPING_MS, essay)
}

fn overflow() -> Script {
    Script::new().typing(OVERFLOW_TYPING_MS, Message::text(OVERFLOW_TEXT))
}
