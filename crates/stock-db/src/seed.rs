//! Seed snapshot loading.
//!
//! A snapshot is JSONL: one object per line with the fields
//! `id, name, time, tags, amount`. It is inserted verbatim the first time a
//! database is opened; a `seeded` key in `meta` prevents any later reload,
//! even after every item has been deleted.

use std::path::PathBuf;

use chrono::Utc;
use stock_core::entities::Item;

use crate::StockDb;
use crate::error::DatabaseError;

/// Snapshot bundled with the application.
pub const BUNDLED_SNAPSHOT: &str = include_str!("../seed/items.jsonl");

const SEEDED_KEY: &str = "seeded";

/// Where first-open seed rows come from.
#[derive(Debug, Clone, Default)]
pub enum SeedSource {
    /// The snapshot compiled into the binary.
    #[default]
    Bundled,
    /// A JSONL file on disk.
    File(PathBuf),
    /// Rows supplied directly.
    Items(Vec<Item>),
    /// No rows; the database starts empty.
    Empty,
}

impl SeedSource {
    /// Materialize the seed rows.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Seed` if the file cannot be read or a line is
    /// not a valid item.
    pub fn load(&self) -> Result<Vec<Item>, DatabaseError> {
        match self {
            Self::Bundled => parse_snapshot(BUNDLED_SNAPSHOT),
            Self::File(path) => {
                let text = std::fs::read_to_string(path).map_err(|e| {
                    DatabaseError::Seed(format!("cannot read {}: {e}", path.display()))
                })?;
                parse_snapshot(&text)
            }
            Self::Items(items) => Ok(items.clone()),
            Self::Empty => Ok(Vec::new()),
        }
    }
}

/// Parse a JSONL snapshot. Blank lines are ignored.
///
/// # Errors
///
/// Returns `DatabaseError::Seed` naming the offending line.
pub fn parse_snapshot(text: &str) -> Result<Vec<Item>, DatabaseError> {
    serde_json::Deserializer::from_str(text)
        .into_iter::<Item>()
        .map(|row| row.map_err(|e| DatabaseError::Seed(format!("line {}: {e}", e.line()))))
        .collect()
}

impl StockDb {
    /// Load `source` unless this database was already seeded.
    ///
    /// A database that already holds items but has no `seeded` marker (for
    /// example a pre-populated file) is marked as seeded without inserting.
    /// Returns the number of rows inserted.
    pub(crate) async fn seed_once(&self, source: &SeedSource) -> Result<usize, DatabaseError> {
        if self.is_seeded().await? {
            return Ok(0);
        }

        let existing = self.count_items().await?;
        let items = if existing == 0 {
            source.load()?
        } else {
            tracing::info!(existing, "item table already populated; skipping seed");
            Vec::new()
        };

        let tx = self.conn.transaction().await?;
        for item in &items {
            tx.execute(
                "INSERT INTO item (id, name, time, tags, amount) VALUES (?1, ?2, ?3, ?4, ?5)",
                libsql::params![
                    item.id,
                    item.name.as_str(),
                    item.time,
                    item.tags.as_str(),
                    item.amount
                ],
            )
            .await?;
        }
        tx.execute(
            "INSERT INTO meta (key, value) VALUES (?1, ?2)",
            libsql::params![SEEDED_KEY, Utc::now().to_rfc3339()],
        )
        .await?;
        tx.commit().await?;

        tracing::info!(count = items.len(), "loaded seed snapshot");
        Ok(items.len())
    }

    /// Whether the seed snapshot has been applied to this database.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn is_seeded(&self) -> Result<bool, DatabaseError> {
        let mut rows = self
            .conn
            .query("SELECT 1 FROM meta WHERE key = ?1", [SEEDED_KEY])
            .await?;
        Ok(rows.next().await?.is_some())
    }
}
