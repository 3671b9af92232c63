use std::fmt;

use async_trait::async_trait;

use super::types::{ListingPage, SortKey};

/// Errors that can occur while fetching a catalog listing.
/// Variants carry enough info to determine retryability (future use).
#[derive(Debug)]
pub enum CatalogError {
    /// Client misconfigured (missing API key, bad URL). Not retryable.
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused). Retryable.
    Network(String),
    /// API returned an error status. Retryable if status >= 500 or 429.
    Api { status: u16, message: String },
    /// A well-formed body without a `results` collection. The message is the
    /// upstream `status_message` (or "Error"), shown to the user verbatim.
    Listing(String),
    /// Failed to parse the response body. Not retryable.
    Parse(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Config(msg) => write!(f, "config error: {msg}"),
            CatalogError::Network(msg) => write!(f, "network error: {msg}"),
            CatalogError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            CatalogError::Listing(msg) => write!(f, "{msg}"),
            CatalogError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Everything a catalog source needs to fetch one page of results.
///
/// An empty `term` selects the discover listing (sorted/filtered); a
/// non-empty term selects the search listing, where the upstream ignores
/// `sort` and `year`.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingQuery {
    pub term: String,
    pub page: u32,
    pub sort: SortKey,
    pub year: Option<i32>,
}

#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Returns the name of the catalog source.
    fn name(&self) -> &str;

    /// Fetches one page of results for the given query.
    async fn fetch_listing(&self, query: &ListingQuery) -> Result<ListingPage, CatalogError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_message_displays_bare() {
        // The footer substitutes this string directly, so no prefix.
        let err = CatalogError::Listing("Invalid API key".to_string());
        assert_eq!(err.to_string(), "Invalid API key");
    }

    #[test]
    fn test_api_error_display_carries_status() {
        let err = CatalogError::Api {
            status: 404,
            message: "not found".to_string(),
        };
        assert_eq!(err.to_string(), "API error (HTTP 404): not found");
    }
}
