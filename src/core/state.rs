//! # Application State
//!
//! Core business state for Marquee. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── catalog: Arc<dyn CatalogSource>  // remote catalog
//! ├── images: ImageConfig          // image-host URL builder
//! ├── term: String                 // free-text search term
//! ├── sort: SortKey                // discover sort order
//! ├── release_year: Option<i32>    // discover year filter
//! ├── page: u32                    // current page (1-based)
//! ├── movies: Vec<MovieSummary>    // accumulated results across pages
//! ├── counts: PageCounts           // total_pages / total_results
//! ├── phase: FetchPhase            // Idle | Loading | Loaded | Failed
//! ├── request_seq: u64             // latest fetch token
//! └── status_message: String       // status line text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::sync::Arc;

use crate::catalog::{CatalogSource, ImageConfig, ListingQuery, MovieSummary, SortKey};

/// Pagination counters reported by the remote catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCounts {
    pub total_pages: u32,
    pub total_results: u32,
}

impl Default for PageCounts {
    /// Optimistic pre-fetch counters so pagination is offered before the
    /// first response lands; overwritten by every successful listing.
    fn default() -> Self {
        Self {
            total_pages: 500,
            total_results: 10_000,
        }
    }
}

/// Fetch lifecycle as a tagged state, so a stale error can never coexist
/// with an in-flight or successful fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

impl FetchPhase {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchPhase::Loading)
    }

    /// The last failure message, if the most recent fetch failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            FetchPhase::Failed(message) => Some(message),
            _ => None,
        }
    }
}

pub struct App {
    pub catalog: Arc<dyn CatalogSource>,
    pub images: ImageConfig,
    pub term: String,
    pub sort: SortKey,
    pub release_year: Option<i32>,
    pub page: u32,
    pub movies: Vec<MovieSummary>,
    pub counts: PageCounts,
    pub phase: FetchPhase,
    /// Monotonically increasing fetch token; responses carrying an older
    /// token are discarded so only the latest query's result is applied.
    pub request_seq: u64,
    pub status_message: String,
}

impl App {
    pub fn new(catalog: Arc<dyn CatalogSource>, images: ImageConfig) -> Self {
        Self {
            catalog,
            images,
            term: String::new(),
            sort: SortKey::default(),
            release_year: None,
            page: 1,
            movies: Vec::new(),
            counts: PageCounts::default(),
            phase: FetchPhase::Idle,
            request_seq: 0,
            status_message: String::from("Type to search · Tab switches fields · Enter loads more"),
        }
    }

    /// Whether another page is available to load.
    pub fn has_next(&self) -> bool {
        self.counts.total_pages > self.page
    }

    /// Snapshot of the query state for the next fetch.
    pub fn current_query(&self) -> ListingQuery {
        ListingQuery {
            term: self.term.clone(),
            page: self.page,
            sort: self.sort,
            year: self.release_year,
        }
    }

    /// First accumulated entry, used for the backdrop banner.
    pub fn first_movie(&self) -> Option<&MovieSummary> {
        self.movies.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.term, "");
        assert_eq!(app.page, 1);
        assert_eq!(app.phase, FetchPhase::Idle);
        assert!(app.movies.is_empty());
        assert_eq!(app.request_seq, 0);
    }

    #[test]
    fn test_initial_counts_offer_pagination() {
        // Mirrors the pre-fetch state: 500 pages / 10000 results assumed.
        let app = test_app();
        assert_eq!(app.counts, PageCounts {
            total_pages: 500,
            total_results: 10_000,
        });
        assert!(app.has_next());
    }

    #[test]
    fn test_has_next_at_last_page() {
        let mut app = test_app();
        app.counts = PageCounts {
            total_pages: 3,
            total_results: 60,
        };
        app.page = 2;
        assert!(app.has_next());
        app.page = 3;
        assert!(!app.has_next());
    }

    #[test]
    fn test_current_query_snapshots_state() {
        let mut app = test_app();
        app.term = "batman".to_string();
        app.page = 4;
        let query = app.current_query();
        assert_eq!(query.term, "batman");
        assert_eq!(query.page, 4);
    }
}
