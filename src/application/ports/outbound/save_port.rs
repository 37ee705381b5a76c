use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("Invalid save slot '{0}': use 1-32 characters of [A-Za-z0-9_-]")]
    InvalidSlot(String),
    #[error("Save slot '{0}' is empty")]
    EmptySlot(String),
    #[error("Save format version {found} is not supported (expected {expected})")]
    IncompatibleVersion { found: u32, expected: u32 },
    #[error("Database error: {0}")]
    Database(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Name of a save slot
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SaveSlot(String);

impl SaveSlot {
    pub fn new(name: impl Into<String>) -> Result<Self, SaveError> {
        let name = name.into();
        let valid = !name.is_empty()
            && name.len() <= 32
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if valid {
            Ok(Self(name))
        } else {
            Err(SaveError::InvalidSlot(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SaveSlot {
    type Error = SaveError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SaveSlot> for String {
    fn from(slot: SaveSlot) -> String {
        slot.0
    }
}

impl std::fmt::Display for SaveSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Listing entry for a stored save
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveSlotSummary {
    pub slot: SaveSlot,
    pub saved_at: DateTime<Utc>,
}

/// Opaque blob storage for save snapshots, keyed by slot
#[async_trait]
pub trait SaveRepositoryPort: Send + Sync {
    async fn save(&self, slot: &SaveSlot, blob: &str) -> Result<(), SaveError>;
    async fn load(&self, slot: &SaveSlot) -> Result<Option<String>, SaveError>;
    async fn list(&self) -> Result<Vec<SaveSlotSummary>, SaveError>;
    async fn delete(&self, slot: &SaveSlot) -> Result<bool, SaveError>;
}
