//! View model types representing renderable result state.
//!
//! This module defines the immutable view model computed from panel state.
//! The renderer itself is external: the core decides *when* results are
//! rendered and with which marks, never *how*. View models contain no
//! business logic, only display-ready data.
//!
//! A [`ResultsView`] is computed by
//! [`PanelState::compute_results_view`](crate::app::PanelState::compute_results_view)
//! after every state change the handler reports as render-worthy.

/// Default empty-state message, shown when a search matched nothing.
pub const EMPTY_STATE_MESSAGE: &str = "Aucun résultat ne correspond à votre recherche.";

/// Complete result-area view model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsView {
    /// Items of the applied page, in server order, with favorite marks.
    pub items: Vec<DisplayResult>,

    /// Pagination affordances, derived from the current cursors.
    ///
    /// `None` both before the first response and when the applied page is
    /// empty: an empty result page exposes no page controls.
    pub pagination: Option<PaginationView>,

    /// Empty-state message, set exactly when a page was applied and carried
    /// no items.
    pub empty_state: Option<EmptyState>,
}

/// Display information for a single result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayResult {
    /// Opaque server-rendered payload, passed to the renderer as-is.
    pub template: String,

    /// Resource identifier, kept alongside so favorite toggles can be wired
    /// back to the right item.
    pub resource_uri: String,

    /// Whether the item is in the visitor's favorites set. Always `false`
    /// for signed-out sessions.
    pub favorited: bool,
}

/// Pagination affordance state.
///
/// The enabled flags are purely derived from cursor presence on the last
/// applied page; they are never tracked separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationView {
    /// Total number of matches across all pages.
    pub total: u64,

    /// Whether the next-page affordance is enabled.
    pub next_enabled: bool,

    /// Whether the previous-page affordance is enabled.
    pub previous_enabled: bool,
}

/// Empty-state display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Message to show in place of the result list.
    pub message: String,
}

impl Default for EmptyState {
    fn default() -> Self {
        Self {
            message: EMPTY_STATE_MESSAGE.to_string(),
        }
    }
}
