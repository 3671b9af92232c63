//! # GridCard Component
//!
//! One poster tile in the results grid: a poster band, the title, and the
//! release year. Stateless — created fresh each frame for each entry.
//!
//! Terminal cells can't show the poster bitmap, so the band is a shaded
//! placeholder when the entry has a poster path and an explicit "No Poster"
//! slate when it doesn't.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::catalog::MovieSummary;
use crate::tui::component::Component;

/// Rows of shaded placeholder standing in for the poster image.
const POSTER_BAND_ROWS: u16 = 3;
/// Total vertical space consumed by borders (1 top + 1 bottom).
const VERTICAL_OVERHEAD: u16 = 2;
/// Fixed tile height: poster band + title + year + borders.
pub const CARD_HEIGHT: u16 = POSTER_BAND_ROWS + 2 + VERTICAL_OVERHEAD;

#[derive(Clone, Copy)]
pub struct GridCard<'a> {
    pub movie: &'a MovieSummary,
}

impl<'a> GridCard<'a> {
    pub fn new(movie: &'a MovieSummary) -> Self {
        Self { movie }
    }

    fn lines(&self, inner_width: u16) -> Vec<Line<'static>> {
        let mut lines = Vec::with_capacity((POSTER_BAND_ROWS + 2) as usize);

        for row in 0..POSTER_BAND_ROWS {
            let line = match &self.movie.poster_path {
                Some(_) => Line::from(Span::styled(
                    "▒".repeat(inner_width as usize),
                    Style::default().fg(Color::DarkGray),
                )),
                None if row == POSTER_BAND_ROWS / 2 => Line::from(Span::styled(
                    "No Poster",
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::DIM),
                ))
                .alignment(Alignment::Center),
                None => Line::default(),
            };
            lines.push(line);
        }

        lines.push(Line::from(Span::styled(
            truncate_to_width(&self.movie.title, inner_width),
            Style::default().add_modifier(Modifier::BOLD),
        )));

        let year = self
            .movie
            .release_year()
            .map(|y| y.to_string())
            .unwrap_or_default();
        lines.push(Line::from(Span::styled(
            year,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM),
        )));

        lines
    }

    fn paragraph(&self, inner_width: u16) -> Paragraph<'static> {
        Paragraph::new(self.lines(inner_width)).block(
            Block::bordered().border_style(Style::default().add_modifier(Modifier::DIM)),
        )
    }
}

/// Truncates to the given display width, appending an ellipsis when cut.
/// Width-aware so CJK and other wide glyphs don't overflow the tile.
fn truncate_to_width(text: &str, max_width: u16) -> String {
    let max = max_width as usize;
    if text.width() <= max {
        return text.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max.saturating_sub(1) {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

impl Widget for GridCard<'_> {
    /// Buffer-level rendering so the grid can paint cards into its
    /// `ScrollView` canvas.
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        self.paragraph(area.width.saturating_sub(2)).render(area, buf);
    }
}

impl Component for GridCard<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(self.paragraph(area.width.saturating_sub(2)), area);
    }
}
