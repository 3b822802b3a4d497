//! Result-area presentation boundary.
//!
//! Rendering is an external collaborator; this layer only computes what the
//! renderer should show, following a declarative model:
//!
//! ```text
//! PanelState → compute_results_view → ResultsView → host renderer
//! ```

pub mod viewmodel;

pub use viewmodel::{DisplayResult, EmptyState, PaginationView, ResultsView};
