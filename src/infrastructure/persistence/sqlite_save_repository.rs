use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::application::ports::outbound::{
    SaveError, SaveRepositoryPort, SaveSlot, SaveSlotSummary,
};

pub struct SqliteSaveRepository {
    pool: SqlitePool,
}

impl SqliteSaveRepository {
    pub async fn new(pool: SqlitePool) -> Result<Self, sqlx::Error> {
        // Create table if not exists
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS save_slots (
                slot TEXT PRIMARY KEY,
                snapshot TEXT NOT NULL,
                saved_at TIMESTAMP NOT NULL
            )
        "#,
        )
        .execute(&pool)
        .await?;

        Ok(Self { pool })
    }
}

fn db_error(e: sqlx::Error) -> SaveError {
    SaveError::Database(e.to_string())
}

#[async_trait]
impl SaveRepositoryPort for SqliteSaveRepository {
    async fn save(&self, slot: &SaveSlot, blob: &str) -> Result<(), SaveError> {
        sqlx::query("INSERT OR REPLACE INTO save_slots (slot, snapshot, saved_at) VALUES (?, ?, ?)")
            .bind(slot.as_str())
            .bind(blob)
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .map_err(db_error)?;
        Ok(())
    }

    async fn load(&self, slot: &SaveSlot) -> Result<Option<String>, SaveError> {
        let row: Option<(String,)> = sqlx::query_as("SELECT snapshot FROM save_slots WHERE slot = ?")
            .bind(slot.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error)?;
        Ok(row.map(|(snapshot,)| snapshot))
    }

    async fn list(&self) -> Result<Vec<SaveSlotSummary>, SaveError> {
        let rows: Vec<(String, DateTime<Utc>)> =
            sqlx::query_as("SELECT slot, saved_at FROM save_slots ORDER BY slot")
                .fetch_all(&self.pool)
                .await
                .map_err(db_error)?;

        rows.into_iter()
            .map(|(slot, saved_at)| -> Result<SaveSlotSummary, SaveError> {
                Ok(SaveSlotSummary {
                    slot: SaveSlot::new(slot)?,
                    saved_at,
                })
            })
            .collect()
    }

    async fn delete(&self, slot: &SaveSlot) -> Result<bool, SaveError> {
        let result = sqlx::query("DELETE FROM save_slots WHERE slot = ?")
            .bind(slot.as_str())
            .execute(&self.pool)
            .await
            .map_err(db_error)?;
        Ok(result.rows_affected() > 0)
    }
}
