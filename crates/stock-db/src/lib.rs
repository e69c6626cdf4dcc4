//! # stock-db
//!
//! libSQL storage for Stockroom inventory items.
//!
//! Holds the single `item` table, loads the seed snapshot on first open, and
//! exposes the [`store::ItemStore`] contract: two live queries (all items,
//! name substring) and two mutations (update, delete). Live queries re-run
//! whenever the `item` table changes; change detection uses an `SQLite`
//! update hook feeding a `tokio::sync::watch` version counter.

pub mod error;
pub mod helpers;
pub mod live;
mod migrations;
pub mod repos;
pub mod seed;
pub mod store;

use std::path::Path;
use std::sync::Arc;

use error::DatabaseError;
use libsql::Builder;
use tokio::sync::watch;

pub use live::LiveQuery;
pub use seed::SeedSource;
pub use store::{ItemFilter, ItemStore};

/// Table whose changes drive live queries.
pub const ITEM_TABLE: &str = "item";

/// Handle to the Stockroom database.
///
/// Cloning is cheap: clones share the connection and the change counter.
#[derive(Clone)]
pub struct StockDb {
    #[allow(dead_code)]
    db: Arc<libsql::Database>,
    conn: libsql::Connection,
    version: Arc<watch::Sender<u64>>,
}

impl StockDb {
    /// Open a local database at the given path (`":memory:"` for tests).
    ///
    /// Runs migrations and, on the first open only, loads `seed`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened, migrations
    /// fail, or the seed snapshot is invalid.
    pub async fn open_local(
        path: impl AsRef<Path>,
        seed: &SeedSource,
    ) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        let (version, _) = watch::channel(0u64);
        let version = Arc::new(version);
        install_change_hook(&conn, &version)?;

        let stock_db = Self {
            db: Arc::new(db),
            conn,
            version,
        };
        stock_db.run_migrations().await?;
        stock_db.seed_once(seed).await?;
        Ok(stock_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Subscribe to the item table's change counter.
    ///
    /// The counter increases every time a row of `item` is inserted, updated,
    /// or deleted, whoever issued the statement.
    #[must_use]
    pub fn subscribe_changes(&self) -> watch::Receiver<u64> {
        self.version.subscribe()
    }

    /// Current value of the change counter.
    #[must_use]
    pub fn data_version(&self) -> u64 {
        *self.version.borrow()
    }
}

fn install_change_hook(
    conn: &libsql::Connection,
    version: &Arc<watch::Sender<u64>>,
) -> Result<(), DatabaseError> {
    let notifier = Arc::clone(version);
    conn.add_update_hook(Box::new(
        move |_op: libsql::Op, _db: &str, table: &str, _rowid: i64| {
            if table == ITEM_TABLE {
                notifier.send_modify(|v| *v = v.wrapping_add(1));
            }
        },
    ))?;
    Ok(())
}
