//! # Actions
//!
//! Everything that can happen in Marquee becomes an `Action`.
//! User types in the search box? That's `Action::SearchChanged`.
//! A listing page lands? That's `Action::ListingArrived`.
//!
//! The `update()` function takes the current state and an action,
//! then returns an `Effect` for the event loop to execute. No side
//! effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: apply a sequence of actions and assert
//! on the resulting state, no terminal and no network required.

use log::{info, warn};

use crate::catalog::ListingPage;
use crate::core::state::{App, FetchPhase, PageCounts};

#[derive(Debug)]
pub enum Action {
    /// The search term changed (every keystroke; there is no debounce).
    SearchChanged(String),
    /// The sort selection changed.
    SortChanged(crate::catalog::SortKey),
    /// The release-year filter changed (None = cleared).
    YearChanged(Option<i32>),
    /// Request the next page, if one remains.
    LoadMore,
    /// Re-issue the current query (used once at mount).
    Refresh,
    /// A listing page arrived for the fetch spawned with `token`.
    ListingArrived {
        token: u64,
        page_number: u32,
        listing: ListingPage,
    },
    /// The fetch spawned with `token` failed.
    ListingFailed { token: u64, message: String },
    Quit,
}

/// What the event loop must do after a state update.
#[derive(Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Spawn a fetch for `App::current_query`, tagged with `App::request_seq`.
    SpawnFetch,
    Quit,
}

/// Transition into `Loading` and claim a fresh request token.
/// Every query edit funnels through here, so whichever fetch is spawned
/// last holds the highest token and wins.
fn begin_fetch(app: &mut App) -> Effect {
    app.request_seq += 1;
    app.phase = FetchPhase::Loading;
    Effect::SpawnFetch
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::SearchChanged(term) => {
            app.term = term;
            // A new term restarts pagination from the first page.
            app.page = 1;
            begin_fetch(app)
        }
        Action::SortChanged(sort) => {
            app.sort = sort;
            app.status_message = format!("Sort: {}", sort.label());
            begin_fetch(app)
        }
        Action::YearChanged(year) => {
            app.release_year = year;
            app.status_message = match year {
                Some(y) => format!("Release year: {y}"),
                None => String::from("Release year cleared"),
            };
            begin_fetch(app)
        }
        Action::LoadMore => {
            if app.has_next() {
                app.page += 1;
                begin_fetch(app)
            } else {
                Effect::None
            }
        }
        Action::Refresh => begin_fetch(app),
        Action::ListingArrived {
            token,
            page_number,
            listing,
        } => {
            if token != app.request_seq {
                warn!(
                    "Discarding stale listing (token {} < {})",
                    token, app.request_seq
                );
                return Effect::None;
            }
            if page_number == 1 {
                app.movies = listing.results;
            } else {
                app.movies.extend(listing.results);
            }
            app.counts = PageCounts {
                total_pages: listing.total_pages,
                total_results: listing.total_results,
            };
            app.phase = FetchPhase::Loaded;
            info!(
                "Listing applied: page={}, accumulated={}, total={}",
                page_number,
                app.movies.len(),
                app.counts.total_results
            );
            Effect::None
        }
        Action::ListingFailed { token, message } => {
            if token != app.request_seq {
                warn!("Discarding stale failure (token {})", token);
                return Effect::None;
            }
            warn!("Fetch failed: {}", message);
            // Accumulated results are left untouched on failure.
            app.phase = FetchPhase::Failed(message);
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{MovieSummary, SortKey};
    use crate::test_support::{listing_page, movie, test_app};

    /// Drives the spawn side of `Effect::SpawnFetch` for tests: returns the
    /// token the event loop would tag the fetch with.
    fn expect_spawn(app: &mut App, action: Action) -> u64 {
        let effect = update(app, action);
        assert_eq!(effect, Effect::SpawnFetch);
        app.request_seq
    }

    fn arrived(token: u64, page_number: u32, listing: ListingPage) -> Action {
        Action::ListingArrived {
            token,
            page_number,
            listing,
        }
    }

    #[test]
    fn test_first_page_replaces_accumulation() {
        let mut app = test_app();
        app.movies = vec![movie(99, "Leftover")];

        let token = expect_spawn(&mut app, Action::SearchChanged("batman".to_string()));
        assert_eq!(app.page, 1);
        assert!(app.phase.is_loading());

        let effect = update(&mut app, arrived(token, 1, listing_page(&[1], 5, 100)));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.movies.iter().map(|m| m.id).collect::<Vec<_>>(), [1]);
        assert_eq!(app.counts.total_pages, 5);
        assert_eq!(app.counts.total_results, 100);
        assert_eq!(app.phase, FetchPhase::Loaded);
        assert!(app.has_next());
    }

    #[test]
    fn test_load_more_appends_in_order() {
        let mut app = test_app();
        let token = expect_spawn(&mut app, Action::SearchChanged("batman".to_string()));
        update(&mut app, arrived(token, 1, listing_page(&[1], 5, 100)));

        let token = expect_spawn(&mut app, Action::LoadMore);
        assert_eq!(app.page, 2);
        update(&mut app, arrived(token, 2, listing_page(&[2], 5, 100)));

        // Entry 1 then entry 2, in arrival order.
        assert_eq!(app.movies.iter().map(|m| m.id).collect::<Vec<_>>(), [1, 2]);
    }

    #[test]
    fn test_accumulation_never_exceeds_total_results() {
        let mut app = test_app();
        let mut token = expect_spawn(&mut app, Action::Refresh);
        update(&mut app, arrived(token, 1, listing_page(&[1, 2], 3, 6)));

        for page in 2u64..=3 {
            token = expect_spawn(&mut app, Action::LoadMore);
            let ids = [page * 10, page * 10 + 1];
            update(&mut app, arrived(token, page as u32, listing_page(&ids, 3, 6)));
            assert!(app.movies.len() as u32 <= app.counts.total_results);
        }
        assert_eq!(app.movies.len(), 6);
        assert!(!app.has_next());
    }

    #[test]
    fn test_term_change_resets_page_and_clears_on_first_page() {
        let mut app = test_app();
        let token = expect_spawn(&mut app, Action::Refresh);
        update(&mut app, arrived(token, 1, listing_page(&[1], 5, 100)));
        expect_spawn(&mut app, Action::LoadMore);
        assert_eq!(app.page, 2);

        let token = expect_spawn(&mut app, Action::SearchChanged("robin".to_string()));
        assert_eq!(app.page, 1);

        update(&mut app, arrived(token, 1, listing_page(&[7], 1, 1)));
        assert_eq!(app.movies.iter().map(|m| m.id).collect::<Vec<_>>(), [7]);
    }

    #[test]
    fn test_sort_and_year_changes_refetch_without_page_reset() {
        let mut app = test_app();
        let token = expect_spawn(&mut app, Action::Refresh);
        update(&mut app, arrived(token, 1, listing_page(&[1], 5, 100)));
        expect_spawn(&mut app, Action::LoadMore);
        assert_eq!(app.page, 2);

        expect_spawn(&mut app, Action::SortChanged(SortKey::PopularityDesc));
        assert_eq!(app.page, 2);
        assert_eq!(app.sort, SortKey::PopularityDesc);

        expect_spawn(&mut app, Action::YearChanged(Some(1989)));
        assert_eq!(app.page, 2);
        assert_eq!(app.release_year, Some(1989));
    }

    #[test]
    fn test_load_more_is_noop_at_last_page() {
        let mut app = test_app();
        let token = expect_spawn(&mut app, Action::Refresh);
        update(&mut app, arrived(token, 1, listing_page(&[1], 1, 1)));
        assert!(!app.has_next());

        let effect = update(&mut app, Action::LoadMore);
        assert_eq!(effect, Effect::None);
        assert_eq!(app.page, 1);
        // No fetch started either: phase stays Loaded.
        assert_eq!(app.phase, FetchPhase::Loaded);
    }

    #[test]
    fn test_failure_ends_loading_and_keeps_results() {
        let mut app = test_app();
        let token = expect_spawn(&mut app, Action::Refresh);
        update(&mut app, arrived(token, 1, listing_page(&[1, 2], 5, 100)));
        let before: Vec<MovieSummary> = app.movies.clone();

        let token = expect_spawn(&mut app, Action::LoadMore);
        update(&mut app, Action::ListingFailed {
            token,
            message: "Error".to_string(),
        });

        assert!(!app.phase.is_loading());
        assert_eq!(app.phase.error(), Some("Error"));
        assert_eq!(app.movies, before);
        assert_eq!(app.counts.total_pages, 5);
    }

    #[test]
    fn test_success_clears_prior_error() {
        let mut app = test_app();
        let token = expect_spawn(&mut app, Action::Refresh);
        update(&mut app, Action::ListingFailed {
            token,
            message: "boom".to_string(),
        });
        assert!(app.phase.error().is_some());

        let token = expect_spawn(&mut app, Action::Refresh);
        update(&mut app, arrived(token, 1, listing_page(&[3], 1, 1)));
        assert_eq!(app.phase, FetchPhase::Loaded);
        assert_eq!(app.phase.error(), None);
    }

    #[test]
    fn test_stale_listing_is_discarded() {
        let mut app = test_app();
        let old_token = expect_spawn(&mut app, Action::SearchChanged("bat".to_string()));
        let new_token = expect_spawn(&mut app, Action::SearchChanged("batman".to_string()));
        assert!(new_token > old_token);

        // The older fetch resolves after the newer one was issued.
        update(&mut app, arrived(old_token, 1, listing_page(&[1], 5, 100)));
        assert!(app.movies.is_empty(), "stale listing must not be applied");
        assert!(app.phase.is_loading(), "still waiting on the latest fetch");

        update(&mut app, arrived(new_token, 1, listing_page(&[2], 5, 100)));
        assert_eq!(app.movies.iter().map(|m| m.id).collect::<Vec<_>>(), [2]);
    }

    #[test]
    fn test_stale_failure_is_discarded() {
        let mut app = test_app();
        let old_token = expect_spawn(&mut app, Action::SearchChanged("bat".to_string()));
        let new_token = expect_spawn(&mut app, Action::SearchChanged("batman".to_string()));

        update(&mut app, Action::ListingFailed {
            token: old_token,
            message: "too slow".to_string(),
        });
        assert!(app.phase.is_loading(), "stale failure must not surface");

        update(&mut app, arrived(new_token, 1, listing_page(&[2], 1, 1)));
        assert_eq!(app.phase, FetchPhase::Loaded);
    }

    #[test]
    fn test_quit_produces_quit_effect() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
