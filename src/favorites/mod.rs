//! Client-side favorites set.
//!
//! [`FavoritesStore`] holds the resource identifiers the signed-in visitor has
//! favorited. It is owned by
//! [`PanelState`](crate::app::PanelState) and passed by reference wherever it
//! is needed — never ambient global state — with its lifecycle tied to the
//! session: initialized wholesale at bootstrap, cleared at teardown.
//!
//! The store itself is a plain unique set and knows nothing about sessions or
//! transport; the event handler that owns it enforces the signed-in gate and
//! issues the remote add/remove action after the optimistic local flip.

use std::collections::HashSet;

use crate::domain::ResultItem;
use crate::transport::FavoriteAction;

/// Unique set of favorited resource identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoritesStore {
    uris: HashSet<String>,
}

impl FavoritesStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the set wholesale.
    ///
    /// Called once per session bootstrap with the identifiers of the items
    /// already rendered as favorited.
    pub fn initialize<I>(&mut self, uris: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.uris = uris.into_iter().collect();
        tracing::debug!(favorite_count = self.uris.len(), "favorites initialized");
    }

    /// Flips local membership and reports which direction the flip took.
    ///
    /// The returned action is what must be mirrored remotely: [`Add`] when the
    /// identifier just entered the set, [`Remove`] when it just left.
    ///
    /// [`Add`]: FavoriteAction::Add
    /// [`Remove`]: FavoriteAction::Remove
    pub fn toggle(&mut self, resource_uri: &str) -> FavoriteAction {
        if self.uris.remove(resource_uri) {
            FavoriteAction::Remove
        } else {
            self.uris.insert(resource_uri.to_string());
            FavoriteAction::Add
        }
    }

    /// Reverts an optimistic flip whose remote mirror failed.
    ///
    /// The failed [`FavoriteAction::Add`] removes the identifier again; the
    /// failed [`FavoriteAction::Remove`] restores it.
    pub fn rollback(&mut self, resource_uri: &str, failed: FavoriteAction) {
        match failed {
            FavoriteAction::Add => {
                self.uris.remove(resource_uri);
            }
            FavoriteAction::Remove => {
                self.uris.insert(resource_uri.to_string());
            }
        }
    }

    /// Returns `true` if the identifier is currently favorited.
    #[must_use]
    pub fn contains(&self, resource_uri: &str) -> bool {
        self.uris.contains(resource_uri)
    }

    /// Marks rendered items against the set.
    ///
    /// Pure read: returns one flag per item, in item order, without mutating
    /// the set.
    #[must_use]
    pub fn reconcile(&self, items: &[ResultItem]) -> Vec<bool> {
        items
            .iter()
            .map(|item| self.uris.contains(&item.resource_uri))
            .collect()
    }

    /// Empties the set. Called at session teardown.
    pub fn clear(&mut self) {
        self.uris.clear();
    }

    /// Number of favorited identifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.uris.len()
    }

    /// Returns `true` if nothing is favorited.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.uris.is_empty()
    }
}

/// Builds the canonical resource identifier for a result kind and id.
///
/// The bootstrap scan derives identifiers from rendered markup this way:
/// `resource_uri("Sitter", 42)` is `"/api/v1/sitters/42/"`.
#[must_use]
pub fn resource_uri(kind: &str, id: u64) -> String {
    format!("/api/v1/{}s/{}/", kind.to_lowercase(), id)
}
