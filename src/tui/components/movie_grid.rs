//! # MovieGrid Component
//!
//! Scrollable grid of poster cards over the accumulated results.
//!
//! ## Responsibilities
//!
//! - Lay out cards in fixed columns inside a virtual scroll canvas
//! - Manage scroll state, clamped to the content bounds
//! - Detect "reached the bottom" (within one row of the content end) and
//!   report it so the parent can paginate — the infinite-scroll trigger
//!
//! ## Architecture
//!
//! `MovieGrid` is a transient component (created each frame) that wraps
//! `&'a mut MovieGridState` (persistent state) and the movie slice (props).
//! Event handling lives on the state so the parent can route scroll events
//! without constructing the component.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::catalog::MovieSummary;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::grid_card::{CARD_HEIGHT, GridCard};
use crate::tui::event::TuiEvent;

/// Cards per row.
pub const GRID_COLUMNS: u16 = 3;
/// Rows moved per wheel tick / arrow key.
const SCROLL_STEP: u16 = 2;

/// High-level events emitted by the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridEvent {
    /// The viewport reached the end of the content (within one row).
    ReachedBottom,
}

/// Scroll state for the grid. Must be persisted in the parent TuiState.
pub struct MovieGridState {
    pub scroll_state: ScrollViewState,
    /// Last rendered viewport height (for clamping between frames)
    pub viewport_height: u16,
    /// Last rendered content height
    pub content_height: u16,
}

impl Default for MovieGridState {
    fn default() -> Self {
        Self::new()
    }
}

impl MovieGridState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            viewport_height: 0,
            content_height: 0,
        }
    }

    fn max_offset(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    /// Scroll vertically by `delta` rows, clamped to the content bounds.
    pub fn scroll_by(&mut self, delta: i32) {
        let current = self.scroll_state.offset();
        let y = (current.y as i32 + delta).clamp(0, self.max_offset() as i32) as u16;
        self.scroll_state.set_offset(Position { x: current.x, y });
    }

    pub fn scroll_to_bottom(&mut self) {
        let current = self.scroll_state.offset();
        self.scroll_state.set_offset(Position {
            x: current.x,
            y: self.max_offset(),
        });
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    /// Prevents overscrolling when the grid shrinks (e.g. a new search).
    pub fn clamp_scroll(&mut self) {
        let current = self.scroll_state.offset();
        if current.y > self.max_offset() {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: self.max_offset(),
            });
        }
    }

    /// True once scroll offset + viewport height has reached the content
    /// height, within one row. Never true for empty content.
    pub fn at_bottom(&self) -> bool {
        self.content_height > 0
            && self.scroll_state.offset().y + self.viewport_height + 1 >= self.content_height
    }
}

impl EventHandler for MovieGridState {
    type Event = GridEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => {
                self.scroll_by(-(SCROLL_STEP as i32));
                None
            }
            TuiEvent::ScrollDown => {
                self.scroll_by(SCROLL_STEP as i32);
                self.at_bottom().then_some(GridEvent::ReachedBottom)
            }
            TuiEvent::ScrollPageUp => {
                self.scroll_by(-(self.viewport_height as i32));
                None
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_by(self.viewport_height as i32);
                self.at_bottom().then_some(GridEvent::ReachedBottom)
            }
            TuiEvent::ScrollToBottom => {
                self.scroll_to_bottom();
                self.at_bottom().then_some(GridEvent::ReachedBottom)
            }
            _ => None,
        }
    }
}

/// Scrollable poster grid. Created fresh each frame with references to
/// state and data.
pub struct MovieGrid<'a> {
    pub state: &'a mut MovieGridState,
    pub movies: &'a [MovieSummary],
}

impl<'a> MovieGrid<'a> {
    pub fn new(state: &'a mut MovieGridState, movies: &'a [MovieSummary]) -> Self {
        Self { state, movies }
    }
}

impl Component for MovieGrid<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // -1 for scrollbar safe area
        let card_width = (content_width / GRID_COLUMNS).max(1);
        let rows = self.movies.len().div_ceil(GRID_COLUMNS as usize);
        let content_height = (rows as u16).saturating_mul(CARD_HEIGHT);

        self.state.viewport_height = area.height;
        self.state.content_height = content_height;
        self.state.clamp_scroll();

        let mut scroll_view = ScrollView::new(Size::new(content_width, content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        for (index, entry) in self.movies.iter().enumerate() {
            let col = (index as u16) % GRID_COLUMNS;
            let row = (index / GRID_COLUMNS as usize) as u16;
            let card_rect = Rect::new(
                col * card_width,
                row * CARD_HEIGHT,
                card_width,
                CARD_HEIGHT,
            );
            scroll_view.render_widget(GridCard::new(entry), card_rect);
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}
