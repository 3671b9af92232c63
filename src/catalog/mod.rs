//! Remote catalog access: wire types, the source trait seam, the reqwest
//! client, and image URL construction.
//!
//! The `core` reducer never talks HTTP directly — it holds an
//! `Arc<dyn CatalogSource>` and the TUI event loop executes fetch effects
//! against it, so tests can substitute a canned source.

pub mod images;
pub mod source;
pub mod tmdb;
pub mod types;

pub use images::ImageConfig;
pub use source::{CatalogError, CatalogSource, ListingQuery};
pub use tmdb::TmdbCatalog;
pub use types::{ListingPage, MovieSummary, RawListing, SortKey};
