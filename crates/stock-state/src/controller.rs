//! Search state and the single live query that feeds the visible list.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use stock_core::entities::Item;
use stock_db::{ItemStore, LiveQuery};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::error::QueryError;

#[derive(Default)]
struct Subscription {
    generation: u64,
    follower: Option<JoinHandle<()>>,
}

struct Shared {
    search_text: watch::Sender<String>,
    items: watch::Sender<Vec<Item>>,
    active: Mutex<Subscription>,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, Subscription> {
        self.active.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Publish `items` if `generation` is still current. `false` once superseded.
    fn publish(&self, generation: u64, items: Vec<Item>) -> bool {
        let active = self.lock();
        if active.generation != generation {
            return false;
        }
        self.items.send_replace(items);
        true
    }
}

/// Owns the current search text and the items it selects.
///
/// Exactly one live query is active at a time. Every search change, mutation,
/// or refresh replaces it: the previous follower task is aborted and its
/// generation retired, so a late snapshot from a replaced query is dropped
/// instead of overwriting newer results.
pub struct QueryController<S: ItemStore> {
    store: S,
    shared: Arc<Shared>,
}

impl<S: ItemStore> QueryController<S> {
    /// Controller with an empty search and an empty list. Call
    /// [`Self::refresh`] to load the first snapshot.
    #[must_use]
    pub fn new(store: S) -> Self {
        let (search_text, _) = watch::channel(String::new());
        let (items, _) = watch::channel(Vec::new());
        Self {
            store,
            shared: Arc::new(Shared {
                search_text,
                items,
                active: Mutex::new(Subscription::default()),
            }),
        }
    }

    /// Store `text` and switch the visible list to the items it selects.
    ///
    /// Blank text selects every item. Returns once the first snapshot of the
    /// new query has been published or superseded by a newer search.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::Query` if the first snapshot cannot be read.
    pub async fn set_search_text(&self, text: impl Into<String>) -> Result<(), QueryError> {
        let (generation, live) = self.resubscribe(Some(text.into()));
        self.start(generation, live).await
    }

    /// Re-run the current search.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::Query` if the first snapshot cannot be read.
    pub async fn refresh(&self) -> Result<(), QueryError> {
        let (generation, live) = self.resubscribe(None);
        self.start(generation, live).await
    }

    /// Persist `item`, then refresh the current search.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::Mutation` if the store rejects the update; the
    /// visible list is left as it was.
    pub async fn request_update(&self, item: &Item) -> Result<(), QueryError> {
        self.store.update(item).await.map_err(|error| {
            tracing::warn!(id = item.id, %error, "update rejected");
            QueryError::Mutation(error)
        })?;
        tracing::debug!(id = item.id, amount = item.amount, "item updated");
        self.refresh().await
    }

    /// Remove `item`, then refresh the current search.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::Mutation` if the store rejects the delete; the
    /// visible list is left as it was.
    pub async fn request_delete(&self, item: &Item) -> Result<(), QueryError> {
        self.store.delete(item).await.map_err(|error| {
            tracing::warn!(id = item.id, %error, "delete rejected");
            QueryError::Mutation(error)
        })?;
        tracing::debug!(id = item.id, "item deleted");
        self.refresh().await
    }

    /// The store this controller reads from and writes to.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn search_text(&self) -> String {
        self.shared.search_text.borrow().clone()
    }

    #[must_use]
    pub fn visible_items(&self) -> Vec<Item> {
        self.shared.items.borrow().clone()
    }

    /// Receiver that observes the current search text and every later change.
    #[must_use]
    pub fn subscribe_search_text(&self) -> watch::Receiver<String> {
        self.shared.search_text.subscribe()
    }

    /// Receiver that observes the visible list and every later change.
    #[must_use]
    pub fn subscribe_items(&self) -> watch::Receiver<Vec<Item>> {
        self.shared.items.subscribe()
    }

    /// Retire the active query and build its replacement.
    ///
    /// The text update, generation bump, and abort happen under one lock so
    /// concurrent callers are totally ordered.
    fn resubscribe(&self, text: Option<String>) -> (u64, LiveQuery<S>) {
        let mut active = self.shared.lock();
        if let Some(text) = text {
            self.shared.search_text.send_replace(text);
        }
        active.generation += 1;
        if let Some(follower) = active.follower.take() {
            follower.abort();
        }

        let text = self.shared.search_text.borrow().clone();
        let live = if text.trim().is_empty() {
            self.store.get_all()
        } else {
            self.store.find_by_name_substring(&text)
        };
        tracing::debug!(generation = active.generation, search = %text, "resubscribed");
        (active.generation, live)
    }

    /// Publish the first snapshot, then hand the query to a follower task.
    async fn start(&self, generation: u64, mut live: LiveQuery<S>) -> Result<(), QueryError> {
        match live.next().await {
            Some(Ok(items)) => {
                if !self.shared.publish(generation, items) {
                    tracing::debug!(generation, "first snapshot superseded");
                    return Ok(());
                }
            }
            Some(Err(error)) => return Err(QueryError::Query(error)),
            None => return Ok(()),
        }

        let follower = tokio::spawn(follow(Arc::clone(&self.shared), generation, live));
        let mut active = self.shared.lock();
        if active.generation == generation {
            active.follower = Some(follower);
        } else {
            follower.abort();
        }
        Ok(())
    }
}

impl<S: ItemStore> Drop for QueryController<S> {
    fn drop(&mut self) {
        if let Some(follower) = self.shared.lock().follower.take() {
            follower.abort();
        }
    }
}

async fn follow<S: ItemStore>(shared: Arc<Shared>, generation: u64, mut live: LiveQuery<S>) {
    while let Some(snapshot) = live.next().await {
        match snapshot {
            Ok(items) => {
                if !shared.publish(generation, items) {
                    break;
                }
            }
            Err(error) => {
                tracing::warn!(generation, %error, "live query failed; keeping last results");
                break;
            }
        }
    }
    tracing::debug!(generation, "follower stopped");
}
