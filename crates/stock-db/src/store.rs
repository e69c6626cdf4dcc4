//! The item store contract.
//!
//! `ItemStore` is what the query controller depends on: one-shot reads, two
//! mutations, and a change signal. The live reads `get_all` and
//! `find_by_name_substring` are provided on top of those.

use std::future::Future;

use stock_core::entities::Item;
use tokio::sync::watch;

use crate::error::DatabaseError;
use crate::live::LiveQuery;

/// Which rows a query selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemFilter {
    /// Every item.
    All,
    /// Items whose name contains the text, ignoring case.
    NameContains(String),
}

/// Durable keyed item storage with reactive reads.
///
/// Implementations must bump the [`ItemStore::changes`] counter whenever a
/// stored row changes, and must not bump it for failed mutations.
pub trait ItemStore: Clone + Send + Sync + 'static {
    /// Run `filter` once, items ordered by id.
    fn query(
        &self,
        filter: &ItemFilter,
    ) -> impl Future<Output = Result<Vec<Item>, DatabaseError>> + Send;

    /// Replace the stored row with `item.id`. Last write wins; absent ids are a no-op.
    fn update(&self, item: &Item) -> impl Future<Output = Result<(), DatabaseError>> + Send;

    /// Remove the stored row with `item.id`. Absent ids are a no-op.
    fn delete(&self, item: &Item) -> impl Future<Output = Result<(), DatabaseError>> + Send;

    /// Receiver over the data version counter.
    fn changes(&self) -> watch::Receiver<u64>;

    /// Live query over every item.
    fn get_all(&self) -> LiveQuery<Self> {
        LiveQuery::new(self.clone(), ItemFilter::All)
    }

    /// Live query over items whose name contains `text`, ignoring case.
    ///
    /// The text matches literally; an empty text matches every item.
    fn find_by_name_substring(&self, text: &str) -> LiveQuery<Self> {
        let filter = if text.is_empty() {
            ItemFilter::All
        } else {
            ItemFilter::NameContains(text.to_string())
        };
        LiveQuery::new(self.clone(), filter)
    }
}
