//! Item repository: filtered reads, update, delete.

use stock_core::entities::Item;
use tokio::sync::watch;

use crate::StockDb;
use crate::error::DatabaseError;
use crate::helpers::{ITEM_COLS, row_to_item};
use crate::store::{ItemFilter, ItemStore};

impl StockDb {
    /// Run `filter` once, items ordered by id.
    ///
    /// Name matching happens here rather than in SQL: SQLite `LIKE` folds case
    /// for ASCII only.
    pub async fn query_items(&self, filter: &ItemFilter) -> Result<Vec<Item>, DatabaseError> {
        let mut rows = self
            .conn
            .query(&format!("SELECT {ITEM_COLS} FROM item ORDER BY id"), ())
            .await?;

        let mut items = Vec::new();
        while let Some(row) = rows.next().await? {
            let item = row_to_item(&row)?;
            let keep = match filter {
                ItemFilter::All => true,
                ItemFilter::NameContains(text) => item.name_contains(text),
            };
            if keep {
                items.push(item);
            }
        }
        tracing::debug!(?filter, count = items.len(), "queried items");
        Ok(items)
    }

    pub async fn get_item(&self, id: i64) -> Result<Option<Item>, DatabaseError> {
        let mut rows = self
            .conn
            .query(&format!("SELECT {ITEM_COLS} FROM item WHERE id = ?1"), [id])
            .await?;
        rows.next()
            .await?
            .map(|row| row_to_item(&row))
            .transpose()
    }

    pub async fn count_items(&self) -> Result<u64, DatabaseError> {
        let mut rows = self.conn.query("SELECT COUNT(*) FROM item", ()).await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::Query("COUNT(*) returned no row".into()))?;
        Ok(row.get::<u64>(0)?)
    }

    /// Overwrite every column of the row with `item.id`. Returns rows changed.
    pub async fn update_item(&self, item: &Item) -> Result<u64, DatabaseError> {
        let changed = self
            .conn
            .execute(
                "UPDATE item SET name = ?2, time = ?3, tags = ?4, amount = ?5 WHERE id = ?1",
                libsql::params![
                    item.id,
                    item.name.as_str(),
                    item.time,
                    item.tags.as_str(),
                    item.amount
                ],
            )
            .await?;
        if changed == 0 {
            tracing::debug!(id = item.id, "update matched no row");
        }
        Ok(changed)
    }

    /// Remove the row with `item.id`. Returns rows removed.
    pub async fn delete_item(&self, item: &Item) -> Result<u64, DatabaseError> {
        let removed = self
            .conn
            .execute("DELETE FROM item WHERE id = ?1", [item.id])
            .await?;
        if removed == 0 {
            tracing::debug!(id = item.id, "delete matched no row");
        }
        Ok(removed)
    }
}

impl ItemStore for StockDb {
    async fn query(&self, filter: &ItemFilter) -> Result<Vec<Item>, DatabaseError> {
        self.query_items(filter).await
    }

    async fn update(&self, item: &Item) -> Result<(), DatabaseError> {
        self.update_item(item).await.map(drop)
    }

    async fn delete(&self, item: &Item) -> Result<(), DatabaseError> {
        self.delete_item(item).await.map(drop)
    }

    fn changes(&self) -> watch::Receiver<u64> {
        self.subscribe_changes()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::SeedSource;

    fn item(id: i64, name: &str, amount: u32) -> Item {
        Item {
            id,
            name: name.into(),
            time: 1_633_046_400_000 + id,
            tags: r#"["tool"]"#.into(),
            amount,
        }
    }

    async fn test_db(items: Vec<Item>) -> StockDb {
        StockDb::open_local(":memory:", &SeedSource::Items(items))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn query_all_orders_by_id() {
        let db = test_db(vec![item(3, "Saw", 1), item(1, "Hammer", 3)]).await;
        let ids: Vec<i64> = db
            .query_items(&ItemFilter::All)
            .await
            .unwrap()
            .iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn name_match_ignores_case() {
        let db = test_db(vec![item(1, "Hammer", 3), item(2, "Nail", 100)]).await;
        let found = db
            .query_items(&ItemFilter::NameContains("HAM".into()))
            .await
            .unwrap();
        assert_eq!(found, vec![item(1, "Hammer", 3)]);
    }

    #[tokio::test]
    async fn name_match_folds_non_ascii_case() {
        let db = test_db(vec![item(1, "Яблоко", 4), item(2, "Äpfel", 2), item(3, "Nail", 1)]).await;
        let ids = |items: Vec<Item>| items.iter().map(|i| i.id).collect::<Vec<_>>();

        let cyrillic = db
            .query_items(&ItemFilter::NameContains("яблоко".into()))
            .await
            .unwrap();
        assert_eq!(ids(cyrillic), vec![1]);

        let umlaut = db
            .query_items(&ItemFilter::NameContains("äPF".into()))
            .await
            .unwrap();
        assert_eq!(ids(umlaut), vec![2]);
    }

    #[tokio::test]
    async fn wildcard_characters_match_literally() {
        let db = test_db(vec![item(1, "50% off", 1), item(2, "500 screws", 2)]).await;
        let found = db
            .query_items(&ItemFilter::NameContains("50%".into()))
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 1);
    }

    #[tokio::test]
    async fn update_replaces_row() {
        let db = test_db(vec![item(1, "Hammer", 3)]).await;
        let changed = db.update_item(&item(1, "Hammer", 5)).await.unwrap();
        assert_eq!(changed, 1);
        assert_eq!(db.get_item(1).await.unwrap(), Some(item(1, "Hammer", 5)));
    }

    #[tokio::test]
    async fn update_of_missing_row_is_noop() {
        let db = test_db(vec![item(1, "Hammer", 3)]).await;
        let before = db.data_version();
        assert_eq!(db.update_item(&item(9, "Ghost", 1)).await.unwrap(), 0);
        assert_eq!(db.data_version(), before);
        assert_eq!(db.count_items().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn delete_removes_row_and_missing_is_noop() {
        let db = test_db(vec![item(1, "Hammer", 3), item(2, "Nail", 100)]).await;
        assert_eq!(db.delete_item(&item(1, "Hammer", 3)).await.unwrap(), 1);
        assert_eq!(db.delete_item(&item(1, "Hammer", 3)).await.unwrap(), 0);
        assert_eq!(db.get_item(1).await.unwrap(), None);
        assert_eq!(db.get_item(2).await.unwrap(), Some(item(2, "Nail", 100)));
    }

    #[tokio::test]
    async fn negative_amount_is_invalid_state() {
        let db = test_db(Vec::new()).await;
        db.conn()
            .execute(
                "INSERT INTO item (id, name, time, tags, amount) VALUES (1, 'Broken', 0, '[]', -4)",
                (),
            )
            .await
            .unwrap();
        let err = db.query_items(&ItemFilter::All).await.unwrap_err();
        assert!(matches!(err, DatabaseError::InvalidState(_)));
    }
}
