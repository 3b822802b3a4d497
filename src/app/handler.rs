//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes host events and
//! transport responses, translating them into state changes and action
//! sequences. It is the primary control flow coordinator of the panel.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the host (control changes, clicks) or from the
//!    transport collaborator (response arrival)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `PanelState` methods
//! 4. Actions are collected and returned for execution
//!
//! Every handler invocation is one synchronous step: the host's event loop
//! enqueues one call per discrete event, with no reentrancy and no
//! preemption between calls.

use crate::app::{Action, PanelState, RequestPhase};
use crate::domain::error::Result;
use crate::query::{build_query, ControlState};
use crate::transport::{TransportRequest, TransportResponse};

/// Events triggered by user input or transport responses.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The handler processes these sequentially, ensuring
/// deterministic state transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A filter control changed or the form was submitted: run a fresh
    /// search, replacing the current cursors once it loads.
    SearchRequested {
        /// Snapshot of the active filter controls, read fresh from the UI.
        controls: Vec<ControlState>,

        /// Selected sort value; falls back to the configured default.
        sort: Option<String>,
    },

    /// The next-page affordance was activated. No-op without a next cursor.
    NextPage,

    /// The previous-page affordance was activated. No-op without a previous
    /// cursor.
    PreviousPage,

    /// A result's favorite star was toggled. No-op for signed-out sessions.
    ToggleFavorite {
        /// Resource identifier of the toggled result.
        resource_uri: String,
    },

    /// The rating action was activated on a result (premium-gated).
    RateItem {
        /// Resource identifier of the result.
        resource_uri: String,
    },

    /// The report action was activated on a result (premium-gated).
    ReportItem {
        /// Resource identifier of the result.
        resource_uri: String,
    },

    /// An authenticated session bootstrapped: seed the favorites set with
    /// the identifiers already rendered as favorited. Skipped entirely for
    /// signed-out sessions.
    SessionStarted {
        /// Identifiers of the items rendered as favorited at bootstrap.
        favorited_uris: Vec<String>,
    },

    /// The session ended: tear the favorites set down.
    SessionEnded,

    /// Wraps a response from the transport collaborator.
    TransportResponse(TransportResponse),
}

/// Processes an event, mutates panel state, and returns actions to execute.
///
/// Returns `(should_render, actions)`: the host re-renders from
/// [`PanelState::compute_results_view`] when `should_render` is true, then
/// executes the actions in order.
///
/// # Errors
///
/// The current event set has no failing transitions; the `Result` return is
/// the seam kept for host-reported decode failures routed through events.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut PanelState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::SearchRequested { controls, sort } => {
            let sort = sort.as_deref().unwrap_or(&state.config.default_sort);
            let query = build_query(controls, sort);
            let generation = state.begin_dispatch();

            tracing::debug!(generation, query_len = query.len(), "dispatching fresh search");
            Ok((
                false,
                vec![Action::Dispatch(TransportRequest::Search { query, generation })],
            ))
        }
        Event::NextPage => {
            let token = state.next.clone();
            dispatch_cursor(state, token, "next")
        }
        Event::PreviousPage => {
            let token = state.previous.clone();
            dispatch_cursor(state, token, "previous")
        }
        Event::ToggleFavorite { resource_uri } => {
            if !state.session.authenticated {
                return Ok((false, vec![]));
            }

            let action = state.favorites.toggle(resource_uri);
            tracing::debug!(resource_uri = %resource_uri, action = ?action, "favorite toggled locally");

            Ok((
                true,
                vec![Action::Dispatch(TransportRequest::ToggleFavorite {
                    resource_uri: resource_uri.clone(),
                    action,
                })],
            ))
        }
        Event::RateItem { resource_uri } => gate_premium_action(
            state,
            Action::OpenRating {
                resource_uri: resource_uri.clone(),
            },
            resource_uri,
        ),
        Event::ReportItem { resource_uri } => gate_premium_action(
            state,
            Action::OpenReport {
                resource_uri: resource_uri.clone(),
            },
            resource_uri,
        ),
        Event::SessionStarted { favorited_uris } => {
            if !state.session.authenticated {
                return Ok((false, vec![]));
            }

            state.favorites.initialize(favorited_uris.iter().cloned());
            Ok((true, vec![]))
        }
        Event::SessionEnded => {
            state.favorites.clear();
            Ok((false, vec![]))
        }
        Event::TransportResponse(response) => handle_response(state, response),
    }
}

/// Dispatches a relative-page search from a stored cursor token.
///
/// Without a token the affordance is disabled and the event is a no-op.
fn dispatch_cursor(
    state: &mut PanelState,
    token: Option<String>,
    direction: &str,
) -> Result<(bool, Vec<Action>)> {
    let Some(token) = token else {
        tracing::debug!(direction, "no cursor held, ignoring page request");
        return Ok((false, vec![]));
    };

    let generation = state.begin_dispatch();
    tracing::debug!(direction, generation, "dispatching cursor page");

    Ok((
        false,
        vec![Action::Dispatch(TransportRequest::Search {
            query: token,
            generation,
        })],
    ))
}

/// Runs a premium-gated action through the access gate.
///
/// On denial the action is suppressed and the upgrade prompt is surfaced
/// instead; the underlying side effect is never emitted.
fn gate_premium_action(
    state: &PanelState,
    allowed: Action,
    resource_uri: &str,
) -> Result<(bool, Vec<Action>)> {
    if state.session.plan.allows_premium_actions() {
        Ok((false, vec![allowed]))
    } else {
        tracing::debug!(resource_uri = %resource_uri, "premium action denied");
        Ok((
            false,
            vec![Action::PromptUpgrade {
                resource_uri: resource_uri.to_string(),
            }],
        ))
    }
}

/// Applies a transport response.
///
/// Search responses are applied only when they carry the latest issued
/// generation; anything older was superseded by a newer dispatch and is
/// discarded, cursors untouched. Favorite failures revert the optimistic
/// local flip.
fn handle_response(
    state: &mut PanelState,
    response: &TransportResponse,
) -> Result<(bool, Vec<Action>)> {
    match response {
        TransportResponse::SearchLoaded { generation, page } => {
            if *generation != state.generation {
                tracing::debug!(
                    response_generation = generation,
                    current_generation = state.generation,
                    "discarding stale search response"
                );
                return Ok((false, vec![]));
            }

            tracing::debug!(
                generation,
                result_count = page.items.len(),
                total = page.total,
                "search response applied"
            );
            state.apply_page(page.clone());
            Ok((true, vec![]))
        }
        TransportResponse::SearchFailed {
            generation,
            message,
        } => {
            tracing::debug!(generation, error = %message, "search failed");

            if *generation != state.generation {
                // Superseded request: a newer dispatch owns the UI now.
                return Ok((false, vec![]));
            }

            state.phase = RequestPhase::Idle;
            Ok((
                false,
                vec![Action::Notify {
                    message: state.config.failure_message.clone(),
                }],
            ))
        }
        TransportResponse::FavoriteToggleFailed {
            resource_uri,
            action,
        } => {
            if !state.session.authenticated {
                return Ok((false, vec![]));
            }

            tracing::debug!(resource_uri = %resource_uri, action = ?action, "favorite toggle failed remotely, rolling back");
            state.favorites.rollback(resource_uri, *action);

            Ok((
                true,
                vec![Action::Notify {
                    message: state.config.failure_message.clone(),
                }],
            ))
        }
    }
}
