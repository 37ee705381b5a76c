use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::application::ports::outbound::{
    SaveError, SaveRepositoryPort, SaveSlot, SaveSlotSummary,
};

/// Process-local save storage, used when no database is configured
#[derive(Default)]
pub struct InMemorySaveRepository {
    slots: RwLock<HashMap<SaveSlot, (String, DateTime<Utc>)>>,
}

impl InMemorySaveRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SaveRepositoryPort for InMemorySaveRepository {
    async fn save(&self, slot: &SaveSlot, blob: &str) -> Result<(), SaveError> {
        self.slots
            .write()
            .await
            .insert(slot.clone(), (blob.to_string(), Utc::now()));
        Ok(())
    }

    async fn load(&self, slot: &SaveSlot) -> Result<Option<String>, SaveError> {
        Ok(self
            .slots
            .read()
            .await
            .get(slot)
            .map(|(blob, _)| blob.clone()))
    }

    async fn list(&self) -> Result<Vec<SaveSlotSummary>, SaveError> {
        let mut summaries: Vec<SaveSlotSummary> = self
            .slots
            .read()
            .await
            .iter()
            .map(|(slot, (_, saved_at))| SaveSlotSummary {
                slot: slot.clone(),
                saved_at: *saved_at,
            })
            .collect();
        summaries.sort_by(|a, b| a.slot.as_str().cmp(b.slot.as_str()));
        Ok(summaries)
    }

    async fn delete(&self, slot: &SaveSlot) -> Result<bool, SaveError> {
        Ok(self.slots.write().await.remove(slot).is_some())
    }
}
