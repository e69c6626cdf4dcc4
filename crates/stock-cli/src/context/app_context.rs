use std::path::PathBuf;

use anyhow::Context;
use stock_config::StockConfig;
use stock_db::{SeedSource, StockDb};
use stock_state::QueryController;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: StockConfig,
    pub db_path: PathBuf,
    pub controller: QueryController<StockDb>,
}

impl AppContext {
    /// Open the configured database (seeding it on first use) and build the
    /// controller over it.
    pub async fn init(config: StockConfig) -> anyhow::Result<Self> {
        let db_path = config.store.resolved_path()?;
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create database directory {}", parent.display())
            })?;
        }

        let seed = seed_source(&config);
        let db = StockDb::open_local(&db_path, &seed)
            .await
            .with_context(|| format!("failed to open database at {}", db_path.display()))?;
        tracing::debug!(path = %db_path.display(), "item store ready");

        Ok(Self {
            config,
            db_path,
            controller: QueryController::new(db),
        })
    }

    /// Date format for item timestamps.
    #[must_use]
    pub fn date_format(&self) -> &str {
        &self.config.general.date_format
    }
}

fn seed_source(config: &StockConfig) -> SeedSource {
    config
        .store
        .seed_override()
        .map_or(SeedSource::Bundled, SeedSource::File)
}

#[cfg(test)]
mod tests {
    use stock_db::ItemFilter;

    use super::*;

    #[tokio::test]
    async fn init_creates_and_seeds_database() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = StockConfig::default();
        config.store.path = dir
            .path()
            .join("nested/app_database.db")
            .display()
            .to_string();

        let ctx = AppContext::init(config).await.unwrap();
        assert!(ctx.db_path.exists());
        ctx.controller.refresh().await.unwrap();
        assert!(!ctx.controller.visible_items().is_empty());
    }

    #[tokio::test]
    async fn seed_override_file_is_used() {
        let dir = tempfile::tempdir().unwrap();
        let seed = dir.path().join("seed.jsonl");
        std::fs::write(
            &seed,
            "{\"id\":1,\"name\":\"Hammer\",\"time\":0,\"tags\":\"[\\\"tool\\\"]\",\"amount\":3}\n",
        )
        .unwrap();

        let mut config = StockConfig::default();
        config.store.path = dir.path().join("items.db").display().to_string();
        config.store.seed_path = seed.display().to_string();

        let ctx = AppContext::init(config).await.unwrap();
        let db = StockDb::open_local(&ctx.db_path, &SeedSource::Empty)
            .await
            .unwrap();
        let items = db.query_items(&ItemFilter::All).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Hammer");
    }

    #[test]
    fn default_seed_is_bundled() {
        assert!(matches!(
            seed_source(&StockConfig::default()),
            SeedSource::Bundled
        ));
    }
}
