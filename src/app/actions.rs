//! Actions representing side effects to be executed by the host.
//!
//! This module defines the [`Action`] type, the imperative commands produced
//! by the event handler after processing a host event. Actions bridge pure
//! state transformations and effectful operations — dispatching transport
//! requests, surfacing notifications and prompts. The handler returns a
//! `Vec<Action>` per event and the host executes them in sequence.

use crate::transport::TransportRequest;

/// Commands representing side effects to be executed by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hands a request to the transport collaborator.
    ///
    /// Carries searches (fresh queries and cursor pages) and fire-and-forget
    /// favorite toggles without blocking the event loop.
    Dispatch(TransportRequest),

    /// Surfaces a user-facing failure notification.
    ///
    /// The single generic channel for request failures; the message is the
    /// configured one, never transport detail.
    Notify {
        /// Message to show.
        message: String,
    },

    /// Surfaces the upgrade prompt after a plan-gated action was denied.
    ///
    /// A deliberate UX interrupt, not an error: the gated action itself was
    /// suppressed and is never performed.
    PromptUpgrade {
        /// Resource the visitor tried to act on.
        resource_uri: String,
    },

    /// Opens the rating flow for a result (premium only).
    OpenRating {
        /// Resource being rated.
        resource_uri: String,
    },

    /// Opens the report flow for a result (premium only).
    OpenReport {
        /// Resource being reported.
        resource_uri: String,
    },
}
