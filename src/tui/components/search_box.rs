//! # SearchBox Component
//!
//! The free-text search input rendered inside the backdrop banner.
//!
//! ## Responsibilities
//!
//! - Capture text input (chars, backspace, paste)
//! - Emit a `Changed` event on every edit — the parent refetches per
//!   keystroke; there is deliberately no debounce
//!
//! The buffer is internal state; the parent mirrors it into `App::term`
//! through the reducer, keeping this a controlled component.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the SearchBox
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    /// The term changed; carries the full new value.
    Changed(String),
}

pub struct SearchBox {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Whether this component currently has keyboard focus (Prop)
    pub focused: bool,
}

impl SearchBox {
    pub fn new(initial: String) -> Self {
        Self {
            buffer: initial,
            focused: true,
        }
    }
}

impl Component for SearchBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::bordered()
            .border_type(ratatui::widgets::BorderType::Rounded)
            .border_style(border_style)
            .title("Search");

        let (text, style) = if self.buffer.is_empty() {
            (
                "Search",
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::DIM),
            )
        } else {
            (self.buffer.as_str(), Style::default().fg(Color::White))
        };

        frame.render_widget(Paragraph::new(text).style(style).block(block), area);

        if self.focused {
            // End-of-buffer cursor, clamped to the inner width.
            let inner_width = area.width.saturating_sub(2);
            let x = area.x + 1 + (self.buffer.len() as u16).min(inner_width.saturating_sub(1));
            frame.set_cursor_position((x, area.y + 1));
        }
    }
}

impl EventHandler for SearchBox {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) if !c.is_control() => {
                self.buffer.push(*c);
                Some(SearchEvent::Changed(self.buffer.clone()))
            }
            TuiEvent::Paste(text) => {
                self.buffer.push_str(text);
                Some(SearchEvent::Changed(self.buffer.clone()))
            }
            TuiEvent::Backspace => {
                self.buffer.pop().map(|_| SearchEvent::Changed(self.buffer.clone()))
            }
            _ => None,
        }
    }
}
