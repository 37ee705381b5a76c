//! Shared application state

use std::sync::Arc;

use anyhow::{Context, Result};
use sqlx::sqlite::SqlitePoolOptions;

use crate::application::ports::outbound::SaveRepositoryPort;
use crate::application::services::{GameSessionService, SaveService};
use crate::domain::aggregates::CatalogAggregate;
use crate::infrastructure::catalog_loader::load_catalog;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::persistence::{InMemorySaveRepository, SqliteSaveRepository};

/// Shared application state
pub struct AppState {
    pub config: AppConfig,
    pub catalog: Arc<CatalogAggregate>,
    // Application services
    pub game_service: Arc<GameSessionService>,
    pub save_service: SaveService,
}

impl AppState {
    pub async fn new(config: AppConfig) -> Result<Self> {
        let catalog = Arc::new(load_catalog(&config.catalog_dir)?);

        let repository: Arc<dyn SaveRepositoryPort> = match &config.database_url {
            Some(url) => {
                let pool = SqlitePoolOptions::new()
                    .max_connections(5)
                    .connect(url)
                    .await
                    .with_context(|| format!("Failed to open save database {url}"))?;
                Arc::new(SqliteSaveRepository::new(pool).await?)
            }
            None => {
                tracing::warn!("DATABASE_URL not set, saves will not survive a restart");
                Arc::new(InMemorySaveRepository::new())
            }
        };

        Ok(Self::with_parts(config, catalog, repository))
    }

    /// Assemble the state from already constructed collaborators
    pub fn with_parts(
        config: AppConfig,
        catalog: Arc<CatalogAggregate>,
        repository: Arc<dyn SaveRepositoryPort>,
    ) -> Self {
        let game_service = Arc::new(GameSessionService::new(catalog.clone(), config.rng_seed));
        let save_service = SaveService::new(repository, game_service.clone());

        Self {
            config,
            catalog,
            game_service,
            save_service,
        }
    }
}
