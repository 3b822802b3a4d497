//! Transport protocol types for the panel/host boundary.
//!
//! The core never performs network I/O. Requests leave the core wrapped in
//! [`Action::Dispatch`](crate::app::Action::Dispatch) and are executed by the
//! host's transport collaborator; whatever comes back re-enters the core as an
//! [`Event::TransportResponse`](crate::app::Event::TransportResponse). Both
//! directions serialize with serde so hosts can ship them across whatever
//! boundary they have (message port, FFI, thread channel).
//!
//! Search traffic is tagged with the issuing request generation; the handler
//! uses the tag to discard responses that a newer dispatch has superseded.
//! Favorite toggles are fire-and-forget — the only response that exists for
//! them is the failure case, which drives the compensating rollback.

use serde::{Deserialize, Serialize};

use crate::domain::SearchResultPage;

/// Direction of a favorite toggle, as it appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FavoriteAction {
    /// The resource was added to the favorites set.
    Add,

    /// The resource was removed from the favorites set.
    Remove,
}

/// Requests the core asks the host transport to carry out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransportRequest {
    /// Run a search.
    ///
    /// `query` is either a freshly built filter query string or an opaque
    /// cursor token echoed back from a previous page — the transport treats
    /// both identically.
    Search {
        /// Filter query string or cursor token.
        query: String,

        /// Generation of the dispatch that issued this request. Echoed back
        /// on the response so stale results can be discarded.
        generation: u64,
    },

    /// Toggle a favorite remotely. Fire-and-forget: no success response, no
    /// retry, no queuing.
    ToggleFavorite {
        /// Resource identifier being toggled.
        resource_uri: String,

        /// Whether the optimistic local flip was an add or a remove.
        action: FavoriteAction,
    },
}

/// Responses the host transport feeds back into the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransportResponse {
    /// A search completed successfully.
    SearchLoaded {
        /// Generation echoed from the originating request.
        generation: u64,

        /// The decoded result page.
        page: SearchResultPage,
    },

    /// A search failed.
    SearchFailed {
        /// Generation echoed from the originating request.
        generation: u64,

        /// Transport-level detail, logged but never shown to the user.
        message: String,
    },

    /// A remote favorite toggle failed after the local flip already happened.
    FavoriteToggleFailed {
        /// Resource identifier whose toggle failed.
        resource_uri: String,

        /// The action that failed remotely, used to revert the local flip.
        action: FavoriteAction,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ResultItem;

    #[test]
    fn test_favorite_action_wire_names() {
        assert_eq!(
            serde_json::to_string(&FavoriteAction::Add).unwrap(),
            r#""add""#
        );
        assert_eq!(
            serde_json::to_string(&FavoriteAction::Remove).unwrap(),
            r#""remove""#
        );
    }

    #[test]
    fn test_request_roundtrip() {
        let request = TransportRequest::ToggleFavorite {
            resource_uri: "/api/v1/sitters/3/".to_string(),
            action: FavoriteAction::Add,
        };

        let payload = serde_json::to_string(&request).unwrap();
        let decoded: TransportRequest = serde_json::from_str(&payload).unwrap();
        assert_eq!(request, decoded);
    }

    #[test]
    fn test_response_roundtrip() {
        let response = TransportResponse::SearchLoaded {
            generation: 4,
            page: SearchResultPage {
                items: vec![ResultItem {
                    resource_uri: "/api/v1/sitters/3/".to_string(),
                    template: "<li>a</li>".to_string(),
                }],
                total: 1,
                next: None,
                previous: Some("tok".to_string()),
            },
        };

        let payload = serde_json::to_string(&response).unwrap();
        let decoded: TransportResponse = serde_json::from_str(&payload).unwrap();
        assert_eq!(response, decoded);
    }
}
