//! Sitterscope: the logic core of an embeddable care-provider search panel.
//!
//! Sitterscope drives an interactive search panel for a care-provider
//! marketplace. It owns the parts with real logic — filter-query encoding,
//! cursor pagination, the client-side favorites set, plan gating — and
//! leaves DOM wiring, template rendering, HTTP transport and authentication
//! to the host as external collaborators.
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host shim (event loop, DOM wiring, transport)      │  ← Not this crate
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Pagination cycle
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Query Layer   │   │ Favorites     │   │ Transport     │
//! │ (query/)      │   │ (favorites/)  │   │ (transport/)  │
//! │ - Encoders    │   │ - Owned set   │   │ - Request/    │
//! │ - Builder     │   │ - Optimistic  │   │   response    │
//! │               │   │   toggle      │   │   protocol    │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Presentation Layers                       │
//! │  - Result pages, session, errors (domain/)          │
//! │  - Result view models (ui/)                         │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Event cycle
//!
//! The host maps its UI events onto [`Event`] values and drives a single
//! synchronous loop:
//!
//! 1. call [`handle_event`] with the event;
//! 2. execute the returned [`Action`]s (hand transport requests to the
//!    network layer, surface notifications and prompts);
//! 3. when the returned render flag is set, re-render from
//!    [`PanelState::compute_results_view`];
//! 4. feed transport completions back in as
//!    [`Event::TransportResponse`].
//!
//! Searches in flight are tagged with a monotonic request generation; a
//! response is applied only when it carries the latest issued tag, so racing
//! requests cannot resurrect a superseded page or its cursors.
//!
//! # Example
//!
//! ```rust
//! use sitterscope::{
//!     handle_event, initialize, Action, Config, ControlState, Event, Session,
//! };
//!
//! let mut state = initialize(&Config::default(), Session::anonymous());
//!
//! let event = Event::SearchRequested {
//!     controls: vec![ControlState::scalar("pc", "iexact", "75011")],
//!     sort: None,
//! };
//! let (should_render, actions) = handle_event(&mut state, &event)?;
//!
//! assert!(!should_render);
//! assert!(matches!(actions[0], Action::Dispatch(_)));
//! # Ok::<(), sitterscope::SitterscopeError>(())
//! ```

pub mod app;
pub mod domain;
pub mod favorites;
pub mod observability;
pub mod query;
pub mod transport;
pub mod ui;

pub use app::{handle_event, Action, Event, PanelState, RequestPhase};
pub use domain::{Plan, Result, ResultItem, SearchResultPage, Session, SitterscopeError};
pub use favorites::FavoritesStore;
pub use query::{build_query, ControlState, ControlValue};
pub use transport::{FavoriteAction, TransportRequest, TransportResponse};
pub use ui::{DisplayResult, EmptyState, PaginationView, ResultsView};

use std::collections::BTreeMap;

use serde::Deserialize;

/// Panel configuration supplied by the host.
///
/// Hosts embed the panel with a small string map (or a TOML document) and
/// every field has a default, so an empty configuration is valid.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Sort value used when the sort control reports none.
    ///
    /// Appended to every built query as `order_by=<value>`; the sort
    /// fragment is always present. Default: `"-updated_at"`.
    #[serde(default = "default_sort")]
    pub default_sort: String,

    /// Generic user-facing message for failed requests.
    ///
    /// The single failure channel deliberately carries no transport detail.
    #[serde(default = "default_failure_message")]
    pub failure_message: String,

    /// Tracing level for [`observability::init_tracing`].
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`.
    #[serde(default)]
    pub trace_level: Option<String>,
}

fn default_sort() -> String {
    "-updated_at".to_string()
}

fn default_failure_message() -> String {
    "Une erreur est survenue, veuillez réessayer ultérieurement.".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_sort: default_sort(),
            failure_message: default_failure_message(),
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from a host-provided string map.
    ///
    /// Missing keys fall back to defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use sitterscope::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("default_sort".to_string(), "rating".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.default_sort, "rating");
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        Self {
            default_sort: config
                .get("default_sort")
                .cloned()
                .unwrap_or(defaults.default_sort),
            failure_message: config
                .get("failure_message")
                .cloned()
                .unwrap_or(defaults.failure_message),
            trace_level: config.get("trace_level").cloned(),
        }
    }

    /// Parses configuration from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`SitterscopeError::Config`] if the document is not valid
    /// TOML or a field has the wrong type.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }
}

/// Initializes panel state for one embedded view.
///
/// The session is fixed for the panel's lifetime; favorites start empty and
/// are seeded by [`Event::SessionStarted`] for authenticated sessions.
#[must_use]
pub fn initialize(config: &Config, session: Session) -> PanelState {
    tracing::debug!(
        authenticated = session.authenticated,
        plan = ?session.plan,
        "initializing search panel"
    );
    PanelState::new(config.clone(), session)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.default_sort, "-updated_at");
        assert!(config.failure_message.contains("erreur"));
        assert_eq!(config.trace_level, None);
    }

    #[test]
    fn test_config_from_map() {
        let mut map = BTreeMap::new();
        map.insert("default_sort".to_string(), "rating".to_string());
        map.insert("trace_level".to_string(), "debug".to_string());

        let config = Config::from_map(&map);
        assert_eq!(config.default_sort, "rating");
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
        // Unset keys keep their defaults.
        assert_eq!(config.failure_message, Config::default().failure_message);
    }

    #[test]
    fn test_config_from_toml() {
        let config = Config::from_toml_str(
            r#"
            default_sort = "rating"
            failure_message = "Oups."
            "#,
        )
        .unwrap();

        assert_eq!(config.default_sort, "rating");
        assert_eq!(config.failure_message, "Oups.");
        assert_eq!(config.trace_level, None);

        assert!(Config::from_toml_str("default_sort = 3").is_err());
    }

    #[test]
    fn test_initialize_builds_blank_state() {
        let state = initialize(&Config::default(), Session::anonymous());
        assert!(state.page.is_none());
        assert!(state.favorites.is_empty());
        assert_eq!(state.generation, 0);
    }
}
