//! Query filter capability.
//!
//! Every list-style accessor accepts an optional `&dyn QueryFilter`. The
//! request pipeline only ever asks a filter for its rendered query string,
//! so new filter types can be added without touching the client.

/// A value that can render itself as a URL query string.
///
/// Filters are borrowed across the request's await points, so they must be
/// `Send + Sync` for the returned futures to be spawnable.
pub trait QueryFilter: Send + Sync {
    /// Renders `key=value` pairs joined by `&`, without a leading `?`.
    ///
    /// An empty string means "no query string".
    fn query_string(&self) -> String;
}

/// A raw query string, typically a next-page token returned by a previous
/// list call.
impl QueryFilter for String {
    fn query_string(&self) -> String {
        self.clone()
    }
}

/// Joins rendered `key=value` pairs into a query string.
pub(crate) fn join_pairs(pairs: Vec<String>) -> String {
    pairs
        .into_iter()
        .filter(|pair| !pair.is_empty())
        .collect::<Vec<_>>()
        .join("&")
}

/// Renders a single `key=value` pair with the value percent-encoded.
pub(crate) fn pair(key: &str, value: impl ToString) -> String {
    format!("{}={}", key, urlencoding::encode(&value.to_string()))
}
