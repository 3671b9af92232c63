//! TMDB-shaped catalog client.
//!
//! Two read endpoints share a response shape:
//! - `GET /discover/movie` — sorted/filtered listing, no free text
//! - `GET /search/movie` — free-text query listing
//!
//! Endpoint selection follows the query term: empty selects discover,
//! anything else selects search (where the upstream ignores sort/year).

use async_trait::async_trait;
use log::{debug, info, warn};

use super::source::{CatalogError, CatalogSource, ListingQuery};
use super::types::{ListingPage, RawListing};

pub const DEFAULT_TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Remote catalog client backed by reqwest.
pub struct TmdbCatalog {
    api_key: String,
    base_url: String,
    language: String,
    client: reqwest::Client,
}

impl TmdbCatalog {
    /// Creates a new catalog client.
    ///
    /// # Arguments
    /// * `api_key` - API key sent on every request
    /// * `base_url` - Optional custom base URL (defaults to the public API)
    /// * `language` - Locale parameter forwarded to both endpoints
    pub fn new(api_key: String, base_url: Option<String>, language: String) -> Self {
        Self {
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_TMDB_BASE_URL.to_string()),
            language,
            client: reqwest::Client::new(),
        }
    }

    /// Query parameters for one listing request. `sort_by` and
    /// `primary_release_year` are sent only when set; the search endpoint
    /// carries the free-text `query` instead.
    fn listing_params(&self, query: &ListingQuery) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("api_key", self.api_key.clone()),
            ("language", self.language.clone()),
            ("page", query.page.to_string()),
        ];

        if query.term.is_empty() {
            if let Some(sort_by) = query.sort.api_param() {
                params.push(("sort_by", sort_by.to_string()));
            }
            if let Some(year) = query.year {
                params.push(("primary_release_year", year.to_string()));
            }
        } else {
            params.push(("query", query.term.clone()));
        }

        params
    }
}

#[async_trait]
impl CatalogSource for TmdbCatalog {
    fn name(&self) -> &str {
        "tmdb"
    }

    async fn fetch_listing(&self, query: &ListingQuery) -> Result<ListingPage, CatalogError> {
        let endpoint = if query.term.is_empty() {
            "discover/movie"
        } else {
            "search/movie"
        };

        info!(
            "Catalog request: endpoint={}, page={}, sort={:?}, year={:?}",
            endpoint, query.page, query.sort, query.year
        );

        let response = self
            .client
            .get(format!("{}/{}", self.base_url, endpoint))
            .query(&self.listing_params(query))
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        debug!("Catalog response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Catalog API error: {} - {}", status, err_body);
            return Err(CatalogError::Api {
                status,
                message: err_body,
            });
        }

        let raw: RawListing = response
            .json()
            .await
            .map_err(|e| CatalogError::Parse(e.to_string()))?;

        raw.into_listing().map_err(|message| {
            warn!("Catalog body without results: {}", message);
            CatalogError::Listing(message)
        })
    }
}
