use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components in this architecture follow the React pattern:
/// - They receive data via props (struct fields): the grid gets the movie
///   slice, the backdrop gets the first entry.
/// - They may hold internal state (the search buffer, the grid scroll).
/// - They render to a `Frame` within a given `Rect`.
///
/// # Mutability
///
/// The `render` method takes `&mut self` so components can update internal
/// presentation state (scroll offsets, cached layout heights) during the
/// render pass. This aligns with Ratatui's `StatefulWidget` pattern.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that handles terminal events.
///
/// Handlers emit typed high-level events instead of mutating shared state:
/// the search box emits the new term, the grid emits "reached bottom". The
/// event loop owns the translation into core actions.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
