//! Save Service - snapshots the session into save slots
//!
//! The repository only ever sees an opaque JSON string. The format is
//! versioned so an old save is refused instead of half-loaded.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::application::dto::SessionSnapshot;
use crate::application::ports::outbound::{
    SaveError, SaveRepositoryPort, SaveSlot, SaveSlotSummary,
};
use crate::application::services::GameSessionService;

/// Current save file format
pub const SAVE_FORMAT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct SaveFile {
    version: u32,
    saved_at: DateTime<Utc>,
    session: SessionSnapshot,
}

pub struct SaveService {
    repository: Arc<dyn SaveRepositoryPort>,
    game: Arc<GameSessionService>,
}

impl SaveService {
    pub fn new(repository: Arc<dyn SaveRepositoryPort>, game: Arc<GameSessionService>) -> Self {
        Self { repository, game }
    }

    #[instrument(skip(self))]
    pub async fn save(&self, slot: &SaveSlot) -> Result<SaveSlotSummary, SaveError> {
        let file = SaveFile {
            version: SAVE_FORMAT_VERSION,
            saved_at: Utc::now(),
            session: self.game.snapshot().await,
        };
        let blob =
            serde_json::to_string(&file).map_err(|e| SaveError::Serialization(e.to_string()))?;

        self.repository.save(slot, &blob).await?;
        info!(slot = %slot, day = file.session.player.day, "Game saved");

        Ok(SaveSlotSummary {
            slot: slot.clone(),
            saved_at: file.saved_at,
        })
    }

    /// Replace the running session with the one stored in `slot`
    #[instrument(skip(self))]
    pub async fn load(&self, slot: &SaveSlot) -> Result<SessionSnapshot, SaveError> {
        let blob = self
            .repository
            .load(slot)
            .await?
            .ok_or_else(|| SaveError::EmptySlot(slot.to_string()))?;

        let file = decode(&blob)?;
        info!(slot = %slot, saved_at = %file.saved_at, "Loading game");
        Ok(self.game.restore(file.session).await)
    }

    pub async fn list(&self) -> Result<Vec<SaveSlotSummary>, SaveError> {
        self.repository.list().await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, slot: &SaveSlot) -> Result<bool, SaveError> {
        self.repository.delete(slot).await
    }
}

fn decode(blob: &str) -> Result<SaveFile, SaveError> {
    let file: SaveFile =
        serde_json::from_str(blob).map_err(|e| SaveError::Serialization(e.to_string()))?;

    if file.version != SAVE_FORMAT_VERSION {
        return Err(SaveError::IncompatibleVersion {
            found: file.version,
            expected: SAVE_FORMAT_VERSION,
        });
    }
    if file.session.player.day == 0 {
        return Err(SaveError::Serialization("day must be at least 1".to_string()));
    }
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::aggregates::CatalogAggregate;
    use crate::domain::entities::Character;
    use crate::domain::value_objects::{Activity, CharacterId, EventId, InteractionKind};
    use crate::infrastructure::persistence::InMemorySaveRepository;

    fn services() -> (Arc<InMemorySaveRepository>, Arc<GameSessionService>, SaveService) {
        let catalog = CatalogAggregate::new(
            vec![Character::new(CharacterId::new("sakura").unwrap(), "사쿠라")],
            Vec::new(),
            Vec::new(),
        )
        .unwrap();
        let game = Arc::new(GameSessionService::new(Arc::new(catalog), Some(1)));
        let repository = Arc::new(InMemorySaveRepository::new());
        let saves = SaveService::new(repository.clone(), game.clone());
        (repository, game, saves)
    }

    #[tokio::test]
    async fn test_save_then_load_restores_session() {
        let (_, game, saves) = services();
        let slot = SaveSlot::new("slot1").unwrap();

        game.perform_activity(Activity::Study).await.unwrap();
        game.interact(&CharacterId::new("sakura").unwrap(), InteractionKind::Gift)
            .await
            .unwrap();
        let saved = game.snapshot().await;
        saves.save(&slot).await.unwrap();

        game.new_game().await;
        assert_ne!(game.snapshot().await, saved);

        let loaded = saves.load(&slot).await.unwrap();
        assert_eq!(loaded, saved);
        assert_eq!(game.snapshot().await, saved);
    }

    #[tokio::test]
    async fn test_load_returns_installed_session() {
        let (repository, game, saves) = services();
        let slot = SaveSlot::new("stale").unwrap();
        let mut session = game.snapshot().await;
        session.pending_event = Some(EventId::new("removed_event").unwrap());
        let file = serde_json::json!({
            "version": SAVE_FORMAT_VERSION,
            "saved_at": Utc::now(),
            "session": session,
        });
        repository.save(&slot, &file.to_string()).await.unwrap();

        let loaded = saves.load(&slot).await.unwrap();
        assert!(loaded.pending_event.is_none());
        assert_eq!(loaded, game.snapshot().await);
    }

    #[tokio::test]
    async fn test_load_empty_slot() {
        let (_, _, saves) = services();
        let result = saves.load(&SaveSlot::new("nothing").unwrap()).await;
        assert!(matches!(result, Err(SaveError::EmptySlot(_))));
    }

    #[tokio::test]
    async fn test_incompatible_version_rejected() {
        let (repository, game, saves) = services();
        let slot = SaveSlot::new("old").unwrap();
        let file = serde_json::json!({
            "version": 99,
            "saved_at": Utc::now(),
            "session": game.snapshot().await,
        });
        repository.save(&slot, &file.to_string()).await.unwrap();

        let result = saves.load(&slot).await;
        assert!(matches!(
            result,
            Err(SaveError::IncompatibleVersion { found: 99, expected: 1 })
        ));
    }

    #[tokio::test]
    async fn test_corrupt_blob_rejected() {
        let (repository, _, saves) = services();
        let slot = SaveSlot::new("broken").unwrap();
        repository.save(&slot, "{not json").await.unwrap();

        assert!(matches!(
            saves.load(&slot).await,
            Err(SaveError::Serialization(_))
        ));
    }

    #[tokio::test]
    async fn test_list_and_delete() {
        let (_, _, saves) = services();
        let slot = SaveSlot::new("slot1").unwrap();
        saves.save(&slot).await.unwrap();

        let listed = saves.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].slot, slot);

        assert!(saves.delete(&slot).await.unwrap());
        assert!(!saves.delete(&slot).await.unwrap());
        assert!(saves.list().await.unwrap().is_empty());
    }
}
