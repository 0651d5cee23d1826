//! # Search Links
//!
//! File: cli/src/chat/search.rs
//!
//! Builds the external search URL the first response hands the user's
//! question to.
//!

/// Returns `<endpoint>?q=<encoded question>`.
///
/// The question is percent-encoded (a space becomes `%20`). If the endpoint
/// already carries a query string, `q` is appended with `&`. A fragment on
/// the endpoint stays after the query.
pub fn search_url(endpoint: &str, question: &str) -> String {
    let param = format!("q={}", urlencoding::encode(question));
    match url::Url::parse(endpoint) {
        Ok(mut url) => {
            let query = match url.query() {
                Some(existing) if !existing.is_empty() => format!("{existing}&{param}"),
                _ => param,
            };
            url.set_query(Some(&query));
            url.to_string()
        }
        // Endpoints are validated at startup; keep plain appending as a fallback.
        Err(_) => {
            let separator = if endpoint.contains('?') { '&' } else { '?' };
            format!("{endpoint}{separator}{param}")
        }
    }
}

/// A short human name for the search site, used in link labels.
pub fn search_label(endpoint: &str) -> String {
    let host = url::Url::parse(endpoint)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_default();
    let host = host.strip_prefix("www.").unwrap_or(&host);
    match host {
        "duckduckgo.com" => "DuckDuckGo".to_string(),
        "" => "search".to_string(),
        other => other.to_string(),
    }
}
