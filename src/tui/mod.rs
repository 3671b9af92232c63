//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//! The intention is to swap this out for a different adapter (web, etc.)
//! in the future if needed.
//!
//! ## Fetch model
//!
//! The reducer never blocks: a query edit returns `Effect::SpawnFetch`, and
//! this loop spawns the fetch on the tokio runtime. The result comes back
//! over an mpsc channel as an `Action` tagged with the request token it was
//! spawned under. Spawning also aborts the previous fetch's handle; a
//! completion that outlives its token is discarded by the reducer, so an
//! out-of-order response can never overwrite fresher state.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Loading**: draws every ~80ms for a smooth spinner.
//! - **Idle**: sleeps up to 250ms, only redraws on events or resize.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::catalog::{CatalogSource, TmdbCatalog};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    FilterBar, FilterEvent, FilterFocus, GridEvent, MovieGridState, SearchBox, SearchEvent,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Which control owns keyboard input. Scroll events always go to the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Search,
    Sort,
    Year,
}

impl Focus {
    /// Tab order: Search → Sort → Year → Search.
    pub fn next(self) -> Focus {
        match self {
            Focus::Search => Focus::Sort,
            Focus::Sort => Focus::Year,
            Focus::Year => Focus::Search,
        }
    }
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent component states
    pub search_box: SearchBox,
    pub filter_bar: FilterBar,
    pub grid: MovieGridState,
    // Keyboard focus
    pub focus: Focus,
}

impl TuiState {
    pub fn new(app: &App) -> Self {
        Self {
            search_box: SearchBox::new(app.term.clone()),
            filter_bar: FilterBar::new(app.release_year),
            grid: MovieGridState::new(),
            focus: Focus::Search, // User expects to type immediately
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)?;
        info!("Terminal modes enabled (mouse, bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);
    }
}

/// Build the catalog source from a resolved config's credentials.
pub fn build_catalog(config: &ResolvedConfig) -> Arc<dyn CatalogSource> {
    let api_key = config
        .api_key
        .clone()
        .expect("TMDB API key must be set (config file or TMDB_API_KEY env var)");
    Arc::new(TmdbCatalog::new(
        api_key,
        Some(config.base_url.clone()),
        config.language.clone(),
    ))
}

pub fn run(
    config: ResolvedConfig,
    initial_query: Option<String>,
    initial_year: Option<i32>,
) -> std::io::Result<()> {
    let catalog = build_catalog(&config);
    let mut app = App::new(catalog, config.image_config());
    if let Some(query) = initial_query {
        app.term = query;
    }
    app.release_year = initial_year;
    let mut tui = TuiState::new(&app);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    // Channel for actions from background fetch tasks
    let (tx, rx) = mpsc::channel();

    // Abort handle for the in-flight fetch (superseded fetches are aborted)
    let mut active_fetch: Option<tokio::task::AbortHandle> = None;

    // Fetch on mount, before the first frame
    let mut should_quit = apply(&mut app, Action::Refresh, &tx, &mut active_fetch);

    // Animation timer
    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    while !should_quit {
        // Sync component props with App/TUI state
        tui.search_box.focused = tui.focus == Focus::Search;
        tui.filter_bar.sort = app.sort;
        tui.filter_bar.focus = match tui.focus {
            Focus::Sort => FilterFocus::Sort,
            Focus::Year => FilterFocus::Year,
            Focus::Search => FilterFocus::None,
        };

        // The spinner animates while a fetch is in flight
        let animating = app.phase.is_loading();
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(250)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // Quit keys work regardless of focus
            if matches!(event, TuiEvent::Quit | TuiEvent::ForceQuit) {
                should_quit |= apply(&mut app, Action::Quit, &tx, &mut active_fetch);
                continue;
            }

            // Tab cycles focus between the editable controls
            if matches!(event, TuiEvent::FocusNext) {
                tui.focus = tui.focus.next();
                continue;
            }

            // Enter is the explicit Load More control
            if matches!(event, TuiEvent::Submit) {
                should_quit |= apply(&mut app, Action::LoadMore, &tx, &mut active_fetch);
                continue;
            }

            // Scroll events always go to the grid; hitting the content end
            // is the infinite-scroll pagination trigger
            if matches!(
                event,
                TuiEvent::ScrollUp
                    | TuiEvent::ScrollDown
                    | TuiEvent::ScrollPageUp
                    | TuiEvent::ScrollPageDown
                    | TuiEvent::ScrollToBottom
            ) {
                if let Some(GridEvent::ReachedBottom) = tui.grid.handle_event(&event) {
                    should_quit |= apply(&mut app, Action::LoadMore, &tx, &mut active_fetch);
                }
                continue;
            }

            // Editing events go to the focused control
            match tui.focus {
                Focus::Search => {
                    if let Some(SearchEvent::Changed(term)) = tui.search_box.handle_event(&event) {
                        should_quit |=
                            apply(&mut app, Action::SearchChanged(term), &tx, &mut active_fetch);
                    }
                }
                Focus::Sort | Focus::Year => {
                    if let Some(filter_event) = tui.filter_bar.handle_event(&event) {
                        let action = match filter_event {
                            FilterEvent::SortChanged(sort) => Action::SortChanged(sort),
                            FilterEvent::YearChanged(year) => Action::YearChanged(year),
                        };
                        should_quit |= apply(&mut app, action, &tx, &mut active_fetch);
                    }
                }
            }
        }

        // Handle background task actions (fetch results)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            should_quit |= apply(&mut app, action, &tx, &mut active_fetch);
        }
    }

    ratatui::restore();
    Ok(())
}

/// Run one action through the reducer and execute its effect.
/// Returns true when the app should quit.
fn apply(
    app: &mut App,
    action: Action,
    tx: &mpsc::Sender<Action>,
    active_fetch: &mut Option<tokio::task::AbortHandle>,
) -> bool {
    match update(app, action) {
        Effect::Quit => true,
        Effect::SpawnFetch => {
            // The superseded fetch is both aborted and, if it still
            // completes, discarded by the reducer's token check.
            if let Some(handle) = active_fetch.take() {
                handle.abort();
            }
            *active_fetch = Some(spawn_fetch(app, tx.clone()));
            false
        }
        Effect::None => false,
    }
}

fn spawn_fetch(app: &App, tx: mpsc::Sender<Action>) -> tokio::task::AbortHandle {
    let catalog = app.catalog.clone();
    let query = app.current_query();
    let token = app.request_seq;

    info!(
        "Spawning catalog fetch (token={}, page={}, term={:?})",
        token, query.page, query.term
    );

    let handle = tokio::spawn(async move {
        let page_number = query.page;
        let action = match catalog.fetch_listing(&query).await {
            Ok(listing) => Action::ListingArrived {
                token,
                page_number,
                listing,
            },
            Err(e) => Action::ListingFailed {
                token,
                message: e.to_string(),
            },
        };
        if tx.send(action).is_err() {
            warn!("Failed to send fetch result (token={}): receiver dropped", token);
        }
    });

    handle.abort_handle()
}
