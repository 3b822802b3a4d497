//! Panel state and view model computation.
//!
//! This module defines [`PanelState`], the central state container for the
//! search panel, along with cursor bookkeeping and result view computation.
//! It is the single source of truth for everything the panel tracks between
//! events.
//!
//! # State components
//!
//! - **Cursors**: `next`/`previous` tokens and `total` from the last applied
//!   response. Pagination affordances are derived from these on demand,
//!   never tracked separately.
//! - **Generation**: monotonic counter tagging every dispatched search. A
//!   response is applied only if it carries the latest issued generation;
//!   anything older is stale and discarded, so a superseded page can never
//!   resurrect its cursors after a newer page has loaded.
//! - **Phase**: whether a search is currently outstanding. Informational —
//!   there is no cancellation or timeout; a hung request stays `Requesting`
//!   until a newer dispatch supersedes it.
//! - **Session & favorites**: the visitor's session and their owned
//!   favorites set, with lifecycle tied to session bootstrap/teardown.

use crate::domain::{SearchResultPage, Session};
use crate::favorites::FavoritesStore;
use crate::ui::viewmodel::{DisplayResult, EmptyState, PaginationView, ResultsView};
use crate::Config;

/// Request lifecycle phase of the search controller.
///
/// One implicit state per dispatch: Idle → Requesting → (applied | failed)
/// → Idle. Concurrent dispatches are allowed; the generation counter, not
/// the phase, decides which response wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RequestPhase {
    /// No search outstanding.
    #[default]
    Idle,

    /// A search has been dispatched and its response has not yet arrived.
    Requesting,
}

/// Central panel state container.
///
/// Mutated by the event handler in response to host events and transport
/// responses. View models are computed on demand from state snapshots.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelState {
    /// Panel configuration (default sort, failure message, trace level).
    pub config: Config,

    /// The visitor's session, fixed for the panel's lifetime.
    pub session: Session,

    /// Owned favorites set, lifecycle tied to the session.
    pub favorites: FavoritesStore,

    /// Last applied result page, if any response has been applied yet.
    pub page: Option<SearchResultPage>,

    /// Total matches reported by the last applied response.
    pub total: u64,

    /// Cursor for the following page, from the last applied response.
    pub next: Option<String>,

    /// Cursor for the preceding page, from the last applied response.
    pub previous: Option<String>,

    /// Generation of the most recently issued search dispatch.
    pub generation: u64,

    /// Current request lifecycle phase.
    pub phase: RequestPhase,
}

impl PanelState {
    /// Creates panel state for a fresh view with no results yet.
    #[must_use]
    pub fn new(config: Config, session: Session) -> Self {
        Self {
            config,
            session,
            favorites: FavoritesStore::new(),
            page: None,
            total: 0,
            next: None,
            previous: None,
            generation: 0,
            phase: RequestPhase::Idle,
        }
    }

    /// Issues the next request generation and marks a search outstanding.
    ///
    /// Every dispatch path goes through here, so the stored generation is
    /// always the latest issued one.
    pub(crate) fn begin_dispatch(&mut self) -> u64 {
        self.generation += 1;
        self.phase = RequestPhase::Requesting;
        self.generation
    }

    /// Applies a successful response: cursors, total and page replace the
    /// previous ones wholesale.
    pub(crate) fn apply_page(&mut self, page: SearchResultPage) {
        self.total = page.total;
        self.next = page.next.clone();
        self.previous = page.previous.clone();
        self.page = Some(page);
        self.phase = RequestPhase::Idle;
    }

    /// Computes the result-area view model from current state.
    ///
    /// - Before any response has been applied, everything is empty and no
    ///   pagination is shown.
    /// - An applied page with no items yields the empty state, again without
    ///   pagination: a "no results" page exposes no page controls.
    /// - Otherwise items are marked against the favorites set (signed-out
    ///   sessions mark nothing) and the pagination affordances are derived
    ///   from cursor presence.
    #[must_use]
    pub fn compute_results_view(&self) -> ResultsView {
        let Some(page) = &self.page else {
            return ResultsView {
                items: vec![],
                pagination: None,
                empty_state: None,
            };
        };

        if page.items.is_empty() {
            return ResultsView {
                items: vec![],
                pagination: None,
                empty_state: Some(EmptyState::default()),
            };
        }

        let marks = if self.session.authenticated {
            self.favorites.reconcile(&page.items)
        } else {
            vec![false; page.items.len()]
        };

        let items = page
            .items
            .iter()
            .zip(marks)
            .map(|(item, favorited)| DisplayResult {
                template: item.template.clone(),
                resource_uri: item.resource_uri.clone(),
                favorited,
            })
            .collect();

        ResultsView {
            items,
            pagination: Some(PaginationView {
                total: self.total,
                next_enabled: self.next.is_some(),
                previous_enabled: self.previous.is_some(),
            }),
            empty_state: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Plan, ResultItem};

    fn page(items: Vec<ResultItem>, next: Option<&str>, previous: Option<&str>) -> SearchResultPage {
        SearchResultPage {
            total: items.len() as u64,
            items,
            next: next.map(String::from),
            previous: previous.map(String::from),
        }
    }

    fn item(uri: &str) -> ResultItem {
        ResultItem {
            resource_uri: uri.to_string(),
            template: format!("<li>{uri}</li>"),
        }
    }

    #[test]
    fn test_initial_view_is_blank() {
        let state = PanelState::new(Config::default(), Session::anonymous());
        let view = state.compute_results_view();

        assert!(view.items.is_empty());
        assert!(view.pagination.is_none());
        assert!(view.empty_state.is_none());
    }

    #[test]
    fn test_empty_page_shows_empty_state_without_pagination() {
        let mut state = PanelState::new(Config::default(), Session::anonymous());
        state.apply_page(page(vec![], Some("tok"), None));

        let view = state.compute_results_view();
        assert!(view.items.is_empty());
        assert!(view.pagination.is_none());
        assert!(view.empty_state.is_some());
    }

    #[test]
    fn test_pagination_derived_from_cursors() {
        let mut state = PanelState::new(Config::default(), Session::anonymous());
        state.apply_page(page(vec![item("/api/v1/sitters/1/")], Some("n"), None));

        let pagination = state.compute_results_view().pagination.unwrap();
        assert!(pagination.next_enabled);
        assert!(!pagination.previous_enabled);
        assert_eq!(pagination.total, 1);
    }

    #[test]
    fn test_favorite_marks_for_signed_in_session() {
        let mut state = PanelState::new(Config::default(), Session::signed_in(Plan::Basic));
        state
            .favorites
            .initialize(vec!["/api/v1/sitters/2/".to_string()]);
        state.apply_page(page(
            vec![item("/api/v1/sitters/1/"), item("/api/v1/sitters/2/")],
            None,
            None,
        ));

        let view = state.compute_results_view();
        assert!(!view.items[0].favorited);
        assert!(view.items[1].favorited);
    }

    #[test]
    fn test_no_marks_for_anonymous_session() {
        let mut state = PanelState::new(Config::default(), Session::anonymous());
        // Even with a populated set, signed-out sessions mark nothing.
        state
            .favorites
            .initialize(vec!["/api/v1/sitters/1/".to_string()]);
        state.apply_page(page(vec![item("/api/v1/sitters/1/")], None, None));

        let view = state.compute_results_view();
        assert!(!view.items[0].favorited);
    }

    #[test]
    fn test_begin_dispatch_is_monotonic() {
        let mut state = PanelState::new(Config::default(), Session::anonymous());
        assert_eq!(state.begin_dispatch(), 1);
        assert_eq!(state.begin_dispatch(), 2);
        assert_eq!(state.phase, RequestPhase::Requesting);
    }
}
