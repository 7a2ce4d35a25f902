//! Pagination support.
//!
//! Freshservice paginates list endpoints with a `Link` header:
//!
//! ```text
//! Link: <https://acme.freshservice.com/api/v2/tickets?page=2>; rel="next"
//! ```
//!
//! The client hands the query part of that URL (`page=2`) back to the
//! caller as an opaque token. Passing the token as the filter of the next
//! list call fetches the following page. No further pages is signalled by
//! an empty token.

use reqwest::header::{HeaderMap, LINK};
use url::Url;

/// Extracts the next-page token from a response's `Link` header.
///
/// Only the first comma-separated link entry is consulted. Returns an empty
/// string when the header is absent or malformed; pagination never fails
/// the call it belongs to.
pub fn next_page_token(headers: &HeaderMap) -> String {
    let Some(value) = headers.get(LINK).and_then(|v| v.to_str().ok()) else {
        return String::new();
    };

    let Some(first) = value.split(',').next() else {
        return String::new();
    };

    let target = match (first.find('<'), first.find('>')) {
        (Some(start), Some(end)) if start < end => &first[start + 1..end],
        _ => return String::new(),
    };

    match Url::parse(target.trim()) {
        Ok(url) => url.query().unwrap_or_default().to_string(),
        Err(e) => {
            tracing::debug!(error = %e, "Ignoring malformed Link header");
            String::new()
        }
    }
}
