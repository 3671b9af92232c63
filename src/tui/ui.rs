use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::backdrop::BACKDROP_HEIGHT;
use crate::tui::components::{Backdrop, MovieGrid};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// The footer's pagination control, decided by the remaining pages and the
/// outcome of the last fetch.
#[derive(Debug, PartialEq, Eq)]
enum FooterControl {
    LoadMore { error: bool },
    Summary(String),
}

fn footer_control(app: &App) -> FooterControl {
    if app.has_next() {
        FooterControl::LoadMore {
            error: app.phase.error().is_some(),
        }
    } else {
        FooterControl::Summary(format!(
            "Showing {} of {} Movies",
            app.counts.total_results, app.counts.total_results
        ))
    }
}

fn heading_text(app: &App) -> String {
    if app.term.is_empty() {
        String::from("Latest movies")
    } else {
        format!("Results for: {}", app.term)
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([
        Length(BACKDROP_HEIGHT),
        Length(1),
        Length(3),
        Min(0),
        Length(2),
    ]);
    let [backdrop_area, heading_area, filter_area, grid_area, footer_area] =
        layout.areas(frame.area());

    // Backdrop banner with the search box centered inside it
    let first = app.first_movie();
    let image_url = first
        .and_then(|m| m.backdrop_path.as_deref())
        .map(|path| app.images.backdrop_url(path));
    Backdrop::new(first, image_url).render(frame, backdrop_area);
    tui.search_box
        .render(frame, Backdrop::search_area(backdrop_area));

    // Heading
    frame.render_widget(
        Span::styled(
            heading_text(app),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        heading_area,
    );

    // Sort / release-year controls
    tui.filter_bar.render(frame, filter_area);

    // Results grid
    MovieGrid::new(&mut tui.grid, &app.movies).render(frame, grid_area);

    draw_footer(frame, app, footer_area, spinner_frame);
}

fn draw_footer(
    frame: &mut Frame,
    app: &App,
    area: ratatui::layout::Rect,
    spinner_frame: usize,
) {
    use Constraint::Length;
    let [status_area, control_area] = Layout::vertical([Length(1), Length(1)]).areas(area);

    // Status line: in-flight fetch beats everything, then failure detail,
    // then the ambient status message.
    let status = if app.phase.is_loading() {
        Line::from(Span::styled(
            format!(
                "{} Loading...",
                SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()]
            ),
            Style::default().fg(Color::Cyan),
        ))
    } else if let Some(message) = app.phase.error() {
        Line::from(Span::styled(message.to_string(), Style::default().fg(Color::Red)))
    } else {
        Line::from(Span::styled(
            app.status_message.clone(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM),
        ))
    };
    frame.render_widget(Paragraph::new(status), status_area);

    // Pagination control, centered like the page's Load More button
    let control = match footer_control(app) {
        FooterControl::LoadMore { error } => {
            let mut style = if error {
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            };
            if app.phase.is_loading() {
                style = style.add_modifier(Modifier::DIM);
            }
            let label = if error { "An error occurred!" } else { "Load More" };
            Line::from(Span::styled(format!("[ {label} ]"), style))
        }
        FooterControl::Summary(text) => Line::from(Span::styled(
            text,
            Style::default().fg(Color::DarkGray),
        )),
    };
    frame.render_widget(
        Paragraph::new(control).alignment(Alignment::Center),
        control_area,
    );
}
