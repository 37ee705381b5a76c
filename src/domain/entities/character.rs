//! Character entity - the classmates the player can grow close to

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Affection, CharacterId};

/// A romanceable character, loaded from the character catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub likes: Vec<String>,
    #[serde(default)]
    pub dislikes: Vec<String>,
    /// Dialogue lines keyed by the minimum affection at which they are used
    #[serde(default)]
    pub dialogue: BTreeMap<u8, String>,
}

impl Character {
    pub fn new(id: CharacterId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            likes: Vec::new(),
            dislikes: Vec::new(),
            dialogue: BTreeMap::new(),
        }
    }

    pub fn with_dialogue(mut self, threshold: u8, line: impl Into<String>) -> Self {
        self.dialogue.insert(threshold, line.into());
        self
    }

    /// Line for the highest threshold not above `affection`
    ///
    /// Falls back to the threshold-0 line, and to `None` when the table has
    /// no entry at or below the current affection.
    pub fn dialogue_for(&self, affection: Affection) -> Option<&str> {
        self.dialogue
            .iter()
            .rev()
            .find(|(threshold, _)| **threshold <= affection.value())
            .or_else(|| self.dialogue.get_key_value(&0))
            .map(|(_, line)| line.as_str())
    }
}
