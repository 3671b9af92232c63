//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::catalog::{
    CatalogError, CatalogSource, ImageConfig, ListingPage, ListingQuery, MovieSummary,
};

/// A catalog source that always returns an empty first page, for tests that
/// never execute fetch effects.
pub struct NoopCatalog;

#[async_trait]
impl CatalogSource for NoopCatalog {
    fn name(&self) -> &str {
        "noop"
    }

    async fn fetch_listing(&self, _query: &ListingQuery) -> Result<ListingPage, CatalogError> {
        Ok(ListingPage {
            results: Vec::new(),
            total_pages: 0,
            total_results: 0,
        })
    }
}

/// Creates a test App with a NoopCatalog and placeholder image config.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(
        Arc::new(NoopCatalog),
        ImageConfig::new(
            "https://images.test/".to_string(),
            "wide".to_string(),
            "poster".to_string(),
        ),
    )
}

/// A minimal catalog entry with the given id.
pub fn movie(id: u64, title: &str) -> MovieSummary {
    MovieSummary {
        id,
        title: title.to_string(),
        poster_path: Some(format!("/poster-{id}.jpg")),
        backdrop_path: Some(format!("/backdrop-{id}.jpg")),
        overview: String::new(),
        release_date: None,
    }
}

/// A listing page holding one movie per id.
pub fn listing_page(ids: &[u64], total_pages: u32, total_results: u32) -> ListingPage {
    ListingPage {
        results: ids.iter().map(|&id| movie(id, &format!("Movie {id}"))).collect(),
        total_pages,
        total_results,
    }
}
