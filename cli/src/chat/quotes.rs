//! # Quote Bank
//!
//! File: cli/src/chat/quotes.rs
//!
//! ## Overview
//!
//! The motivational quotes used by the first response. A bank is loaded once
//! at startup from an optional external source and never changes afterwards.
//!
//! ## Source format
//!
//! Plain text, one quote per line:
//!
//! ```text
//! # lines starting with '#' are comments
//! Small steps still count.
//! "Surrounding double quotes are stripped"
//! ```
//!
//! Loading never fails from the caller's point of view: a missing file, a
//! network error, a non-success HTTP status, undecodable bytes or a source
//! with no usable lines all leave the built-in defaults in place. The reason
//! is logged at debug level only.
//!
use crate::core::config::{is_http_url, QuotesConfig};
use crate::core::error::{AkragError, Result};
use anyhow::Context;
use rand::seq::SliceRandom;
use rand::Rng;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

/// Tried when no source is configured.
pub const DEFAULT_SOURCE_FILE: &str = "quotes.csv";

pub const DEFAULT_QUOTES: [&str; 4] = [
    "You can do it — start small and build momentum.",
    "Small progress every day leads to big results.",
    "Curiosity wins: read more, then go try it yourself!",
    "A little research today saves hours of guesswork tomorrow.",
];

/// Where a quote bank's contents came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteOrigin {
    Defaults,
    Source(String),
}

/// A non-empty, ordered collection of quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteBank {
    quotes: Vec<String>,
    origin: QuoteOrigin,
}

impl Default for QuoteBank {
    fn default() -> Self {
        Self {
            quotes: DEFAULT_QUOTES.iter().map(|q| q.to_string()).collect(),
            origin: QuoteOrigin::Defaults,
        }
    }
}

impl QuoteBank {
    /// Builds a bank from already-parsed quotes, or `None` if there are none.
    pub fn from_quotes(quotes: Vec<String>, origin: QuoteOrigin) -> Option<Self> {
        if quotes.is_empty() {
            None
        } else {
            Some(Self { quotes, origin })
        }
    }

    pub fn quotes(&self) -> &[String] {
        &self.quotes
    }

    pub fn origin(&self) -> &QuoteOrigin {
        &self.origin
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// Picks one quote uniformly at random.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        // The bank is never empty, so `choose` always returns something.
        self.quotes
            .choose(rng)
            .map(String::as_str)
            .unwrap_or(DEFAULT_QUOTES[0])
    }
}

/// Parses quote source text into quotes.
///
/// Lines are trimmed; blank lines and `#` comments are dropped; one layer of
/// surrounding double quotes is stripped, and a line left empty by that is
/// dropped too.
pub fn parse_quotes(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            if line.starts_with('"') && line.ends_with('"') {
                // A lone `"` has no inner text.
                line.get(1..line.len() - 1).unwrap_or("")
            } else {
                line
            }
        })
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// A resolved quote source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteSource {
    File(PathBuf),
    Url(String),
}

impl QuoteSource {
    /// Classifies a configured source; `None` means `quotes.csv` in the
    /// current directory.
    pub fn resolve(configured: Option<&str>) -> Self {
        match configured {
            Some(s) if is_http_url(s) => QuoteSource::Url(s.to_string()),
            Some(s) => QuoteSource::File(PathBuf::from(s)),
            None => QuoteSource::File(PathBuf::from(DEFAULT_SOURCE_FILE)),
        }
    }

    pub fn display_name(&self) -> String {
        match self {
            QuoteSource::File(path) => path.display().to_string(),
            QuoteSource::Url(url) => url.clone(),
        }
    }

    async fn read(&self, timeout: Duration) -> Result<String> {
        match self {
            QuoteSource::File(path) => {
                let bytes = tokio::fs::read(path)
                    .await
                    .with_context(|| format!("Failed to read quote file: {}", path.display()))?;
                // Same lossy decoding as `Response::text` for URL sources.
                Ok(String::from_utf8_lossy(&bytes).into_owned())
            }
            QuoteSource::Url(url) => {
                let client = reqwest::Client::builder()
                    .timeout(timeout)
                    .build()
                    .map_err(AkragError::from)?;
                let response = client.get(url).send().await.map_err(AkragError::from)?;
                let status = response.status();
                if !status.is_success() {
                    return Err(AkragError::QuoteSource {
                        source_name: url.clone(),
                        reason: format!("HTTP {status}"),
                    }
                    .into());
                }
                Ok(response.text().await.map_err(AkragError::from)?)
            }
        }
    }
}

/// Loads the quote bank for a session. Never fails; see the module docs.
pub async fn load_quote_bank(config: &QuotesConfig) -> QuoteBank {
    let source = QuoteSource::resolve(config.source.as_deref());
    let name = source.display_name();
    match source.read(Duration::from_secs(config.timeout_secs)).await {
        Ok(text) => {
            let quotes = parse_quotes(&text);
            match QuoteBank::from_quotes(quotes, QuoteOrigin::Source(name.clone())) {
                Some(bank) => {
                    info!("Loaded {} quotes from {}", bank.len(), name);
                    bank
                }
                None => {
                    debug!("Quote source {} has no usable lines; using defaults", name);
                    QuoteBank::default()
                }
            }
        }
        Err(e) => {
            debug!("No quotes loaded from {}: {:#}", name, e);
            QuoteBank::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;
    use tempfile::tempdir;
    use tokio::net::TcpListener;
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn quotes_config(source: Option<String>) -> QuotesConfig {
        QuotesConfig {
            source,
            timeout_secs: 5,
        }
    }

    /// Starts a mock server answering `GET /quotes.csv` with `status` and `body`.
    async fn quote_server(status: u16, body: &str) -> (MockServer, String) {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/quotes.csv"))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .expect(1)
            .mount(&server)
            .await;
        let url = format!("{}/quotes.csv", server.uri());
        (server, url)
    }

    #[test]
    fn test_parse_drops_comments_blanks_and_quotes() {
        assert_eq!(parse_quotes("a\n#comment\n\"b\"\n\nc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_parse_handles_crlf_and_padding() {
        assert_eq!(
            parse_quotes("  first  \r\n\t\"second one\"\r\n   # indented comment\r\n"),
            vec!["first", "second one"]
        );
    }

    #[test]
    fn test_parse_strips_only_one_layer() {
        assert_eq!(parse_quotes("\"\"nested\"\""), vec!["\"nested\""]);
        // A lone quote character or an empty quoted string leaves nothing.
        assert!(parse_quotes("\"\n\"\"").is_empty());
        // An unbalanced quote is left alone.
        assert_eq!(parse_quotes("\"open"), vec!["\"open"]);
    }

    #[test]
    fn test_default_bank_has_four_quotes() {
        let bank = QuoteBank::default();
        assert_eq!(bank.len(), 4);
        assert_eq!(bank.origin(), &QuoteOrigin::Defaults);
        assert!(QuoteBank::from_quotes(vec![], QuoteOrigin::Defaults).is_none());
    }

    #[test]
    fn test_pick_reaches_every_quote() {
        let bank = QuoteBank::default();
        let mut rng = StdRng::seed_from_u64(7);
        let seen: HashSet<&str> = (0..200).map(|_| bank.pick(&mut rng)).collect();
        assert_eq!(seen.len(), bank.len());
    }

    #[test]
    fn test_resolve_source() {
        assert_eq!(
            QuoteSource::resolve(None),
            QuoteSource::File(PathBuf::from("quotes.csv"))
        );
        assert_eq!(
            QuoteSource::resolve(Some("https://example.com/q.txt")),
            QuoteSource::Url("https://example.com/q.txt".into())
        );
        assert_eq!(
            QuoteSource::resolve(Some("/srv/q.txt")),
            QuoteSource::File(PathBuf::from("/srv/q.txt"))
        );
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("quotes.csv");
        std::fs::write(&path, "# mine\n\"Keep going\"\nRead the docs\n").unwrap();

        let bank = load_quote_bank(&quotes_config(Some(path.display().to_string()))).await;
        assert_eq!(bank.quotes(), &["Keep going", "Read the docs"]);
        assert!(matches!(bank.origin(), QuoteOrigin::Source(_)));
    }

    #[tokio::test]
    async fn test_missing_or_empty_file_falls_back() {
        let dir = tempdir().unwrap();

        let missing = dir.path().join("nope.csv");
        let bank = load_quote_bank(&quotes_config(Some(missing.display().to_string()))).await;
        assert_eq!(bank, QuoteBank::default());

        let only_comments = dir.path().join("comments.csv");
        std::fs::write(&only_comments, "# nothing\n\n   \n").unwrap();
        let bank =
            load_quote_bank(&quotes_config(Some(only_comments.display().to_string()))).await;
        assert_eq!(bank, QuoteBank::default());
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_decoded_lossily() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("latin1.csv");
        // "caf\xe9" is Latin-1 for "café".
        std::fs::write(&path, b"caf\xe9 au lait\nplain line\n").unwrap();

        let bank = load_quote_bank(&quotes_config(Some(path.display().to_string()))).await;
        assert_eq!(bank.quotes(), &["caf\u{FFFD} au lait", "plain line"]);
    }

    #[tokio::test]
    async fn test_load_from_url() {
        let (_server, url) = quote_server(200, "alpha\n#skip\n\"beta\"\n").await;
        let bank = load_quote_bank(&quotes_config(Some(url.clone()))).await;
        assert_eq!(bank.quotes(), &["alpha", "beta"]);
        assert_eq!(bank.origin(), &QuoteOrigin::Source(url));
    }

    #[tokio::test]
    async fn test_http_error_status_falls_back() {
        let (_server, url) = quote_server(404, "alpha\n").await;
        let bank = load_quote_bank(&quotes_config(Some(url))).await;
        assert_eq!(bank, QuoteBank::default());
    }

    #[tokio::test]
    async fn test_unreachable_url_falls_back() {
        // Bind and drop to get a port nothing listens on.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let bank = load_quote_bank(&quotes_config(Some(format!("http://{addr}/q")))).await;
        assert_eq!(bank, QuoteBank::default());
    }
}
