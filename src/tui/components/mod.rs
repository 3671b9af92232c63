//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `Backdrop`: Banner from the first entry's backdrop, hosts the search box
//! - `GridCard`: One poster tile (poster band, title, year)
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `SearchBox`: Free-text input emitting a change per keystroke
//! - `FilterBar`: Sort selector + release-year input
//! - `MovieGrid`: Scrollable card grid reporting bottom-of-content
//!
//! Components receive external data as "props" (struct fields), not by
//! directly accessing global state. This makes dependencies explicit and
//! components testable: the grid does not know about pages, it only reports
//! that the viewport hit the content end; the search box does not fetch, it
//! only reports the new term.

pub mod backdrop;
pub mod filter_bar;
pub mod grid_card;
pub mod movie_grid;
pub mod search_box;

pub use backdrop::Backdrop;
pub use filter_bar::{FilterBar, FilterEvent, FilterFocus};
pub use grid_card::GridCard;
pub use movie_grid::{GridEvent, MovieGrid, MovieGridState};
pub use search_box::{SearchBox, SearchEvent};
