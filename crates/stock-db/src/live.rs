//! Live queries: an initial snapshot, then a fresh snapshot after every change.

use stock_core::entities::Item;
use tokio::sync::watch;

use crate::error::DatabaseError;
use crate::store::{ItemFilter, ItemStore};

/// A reactive read over an [`ItemStore`].
///
/// The first [`LiveQuery::next`] runs the query immediately. Every later call
/// waits until the store's change counter moves, then re-runs it. Changes
/// that land while a snapshot is being read are not lost: they trigger one
/// more snapshot.
pub struct LiveQuery<S> {
    store: S,
    filter: ItemFilter,
    changes: watch::Receiver<u64>,
    primed: bool,
}

impl<S: ItemStore> LiveQuery<S> {
    #[must_use]
    pub fn new(store: S, filter: ItemFilter) -> Self {
        let changes = store.changes();
        Self {
            store,
            filter,
            changes,
            primed: false,
        }
    }

    /// The filter this query runs.
    #[must_use]
    pub const fn filter(&self) -> &ItemFilter {
        &self.filter
    }

    /// Next snapshot. `None` once the store's change source has closed.
    pub async fn next(&mut self) -> Option<Result<Vec<Item>, DatabaseError>> {
        if self.primed {
            self.changes.changed().await.ok()?;
        } else {
            self.primed = true;
        }
        self.changes.mark_unchanged();
        Some(self.store.query(&self.filter).await)
    }
}
