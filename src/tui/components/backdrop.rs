//! # Backdrop Component
//!
//! Full-width banner above the results: the first accumulated entry's
//! backdrop, or a neutral band when nothing has loaded. The search box sits
//! centered inside it; [`Backdrop::search_area`] tells the parent where.
//!
//! A terminal can't paint the backdrop bitmap, so the banner shows the
//! entry's title and a wrapped slice of its overview on a shaded band, with
//! the image URL in the corner.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::catalog::MovieSummary;
use crate::tui::component::Component;

/// Banner height including its content rows.
pub const BACKDROP_HEIGHT: u16 = 7;

const SEARCH_BOX_WIDTH: u16 = 44;
const SEARCH_BOX_HEIGHT: u16 = 3;

pub struct Backdrop<'a> {
    /// Entry providing the banner art, if any results are loaded (Prop)
    pub movie: Option<&'a MovieSummary>,
    /// Full backdrop image URL for that entry (Prop)
    pub image_url: Option<String>,
}

impl<'a> Backdrop<'a> {
    pub fn new(movie: Option<&'a MovieSummary>, image_url: Option<String>) -> Self {
        Self { movie, image_url }
    }

    /// Where the parent should render the search box: centered inside the
    /// banner, mirroring the search-over-backdrop composition of the page.
    pub fn search_area(area: Rect) -> Rect {
        let width = SEARCH_BOX_WIDTH.min(area.width.saturating_sub(4));
        let height = SEARCH_BOX_HEIGHT.min(area.height);
        Rect::new(
            area.x + (area.width.saturating_sub(width)) / 2,
            area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        )
    }
}

impl Component for Backdrop<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let band_style = Style::default().bg(Color::DarkGray);

        match self.movie {
            Some(movie) => {
                let mut lines = vec![Line::from(Span::styled(
                    movie.title.clone(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ))];

                let wrap_width = area.width.saturating_sub(2).max(1) as usize;
                for wrapped in textwrap::wrap(&movie.overview, wrap_width)
                    .into_iter()
                    .take(2)
                {
                    lines.push(Line::from(Span::styled(
                        wrapped.into_owned(),
                        Style::default()
                            .fg(Color::Gray)
                            .add_modifier(Modifier::DIM),
                    )));
                }

                frame.render_widget(
                    Paragraph::new(lines).style(band_style).block(Block::new()),
                    area,
                );

                if let Some(url) = &self.image_url {
                    // Image URL pinned to the banner's bottom edge.
                    let url_area = Rect::new(area.x, area.y + area.height.saturating_sub(1), area.width, 1);
                    frame.render_widget(
                        Paragraph::new(Line::from(Span::styled(
                            url.clone(),
                            Style::default()
                                .fg(Color::Gray)
                                .add_modifier(Modifier::DIM),
                        )))
                        .style(band_style)
                        .alignment(Alignment::Right),
                        url_area,
                    );
                }
            }
            None => {
                // Neutral band while nothing is loaded.
                frame.render_widget(
                    Paragraph::new("").style(Style::default().bg(Color::Gray)),
                    area,
                );
            }
        }
    }
}
