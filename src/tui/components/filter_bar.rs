//! # FilterBar Component
//!
//! Sort selector and release-year filter, shown between the heading and the
//! results grid.
//!
//! The sort selection cycles with Left/Right through the four options the
//! discover endpoint accepts. The year field takes digits only; every edit
//! emits the parsed value so the parent can refetch immediately.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::catalog::SortKey;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Which filter field holds keyboard focus (prop from the parent).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterFocus {
    None,
    Sort,
    Year,
}

/// High-level events emitted by the FilterBar
#[derive(Debug, Clone, PartialEq)]
pub enum FilterEvent {
    SortChanged(SortKey),
    /// None = the year field was cleared.
    YearChanged(Option<i32>),
}

pub struct FilterBar {
    /// Current sort selection (Prop, mirrored from App)
    pub sort: SortKey,
    /// Year digits as typed (Internal State)
    pub year_buffer: String,
    /// Focused field (Prop)
    pub focus: FilterFocus,
}

impl FilterBar {
    pub fn new(initial_year: Option<i32>) -> Self {
        Self {
            sort: SortKey::default(),
            year_buffer: initial_year.map(|y| y.to_string()).unwrap_or_default(),
            focus: FilterFocus::None,
        }
    }

    fn parsed_year(&self) -> Option<i32> {
        self.year_buffer.parse().ok()
    }

    fn field_style(&self, field: FilterFocus) -> Style {
        if self.focus == field {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }
}

impl Component for FilterBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::{Min, Percentage};
        let [sort_area, year_area] = Layout::horizontal([Percentage(60), Min(20)]).areas(area);

        // Sort selector: "Sort ◂ Popularity Desc ▸"
        let sort_line = Line::from(vec![
            Span::styled("Sort ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled("◂ ", self.field_style(FilterFocus::Sort)),
            Span::raw(self.sort.label()),
            Span::styled(" ▸", self.field_style(FilterFocus::Sort)),
        ]);
        frame.render_widget(
            Paragraph::new(sort_line)
                .block(Block::bordered().border_style(self.field_style(FilterFocus::Sort))),
            sort_area,
        );

        // Year filter: "Release Year: 1989"
        let year_line = Line::from(vec![
            Span::styled(
                "Release Year: ",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(self.year_buffer.as_str()),
        ]);
        frame.render_widget(
            Paragraph::new(year_line)
                .block(Block::bordered().border_style(self.field_style(FilterFocus::Year))),
            year_area,
        );
    }
}

impl EventHandler for FilterBar {
    type Event = FilterEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match self.focus {
            FilterFocus::Sort => match event {
                TuiEvent::Right => {
                    self.sort = self.sort.next();
                    Some(FilterEvent::SortChanged(self.sort))
                }
                TuiEvent::Left => {
                    self.sort = self.sort.prev();
                    Some(FilterEvent::SortChanged(self.sort))
                }
                _ => None,
            },
            FilterFocus::Year => match event {
                TuiEvent::InputChar(c) if c.is_ascii_digit() && self.year_buffer.len() < 4 => {
                    self.year_buffer.push(*c);
                    Some(FilterEvent::YearChanged(self.parsed_year()))
                }
                TuiEvent::Backspace => self
                    .year_buffer
                    .pop()
                    .map(|_| FilterEvent::YearChanged(self.parsed_year())),
                _ => None,
            },
            FilterFocus::None => None,
        }
    }
}
