//! Catalog Aggregate - The static content of the game
//!
//! Characters, events and items are loaded once at startup and never
//! mutated afterwards. The aggregate checks cross references on
//! construction so the engine can rely on every id it meets being known.

use std::collections::HashMap;

use crate::domain::entities::{Character, GameEvent, Item};
use crate::domain::value_objects::{CharacterId, EventId, ItemId};

/// Errors detected while assembling the catalog
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate {kind} id '{id}'")]
    DuplicateId { kind: &'static str, id: String },
    #[error("event '{event}' references unknown {kind} '{id}'")]
    UnknownReference {
        event: String,
        kind: &'static str,
        id: String,
    },
}

/// The Catalog Aggregate Root
///
/// Entries keep their file order, which is the order event selection sees
/// them in; lookups go through id indexes.
#[derive(Debug, Clone, Default)]
pub struct CatalogAggregate {
    characters: Vec<Character>,
    events: Vec<GameEvent>,
    items: Vec<Item>,
    character_index: HashMap<CharacterId, usize>,
    event_index: HashMap<EventId, usize>,
    item_index: HashMap<ItemId, usize>,
}

impl CatalogAggregate {
    /// Build the catalog, rejecting duplicates and dangling references
    pub fn new(
        characters: Vec<Character>,
        events: Vec<GameEvent>,
        items: Vec<Item>,
    ) -> Result<Self, CatalogError> {
        let character_index = index_by(&characters, "character", |c| c.id.clone())?;
        let event_index = index_by(&events, "event", |e| e.id.clone())?;
        let item_index = index_by(&items, "item", |i| i.id.clone())?;

        let catalog = Self {
            characters,
            events,
            items,
            character_index,
            event_index,
            item_index,
        };
        for event in &catalog.events {
            catalog.check_references(event)?;
        }
        Ok(catalog)
    }

    fn check_references(&self, event: &GameEvent) -> Result<(), CatalogError> {
        let unknown = |kind: &'static str, id: &dyn std::fmt::Display| CatalogError::UnknownReference {
            event: event.id.to_string(),
            kind,
            id: id.to_string(),
        };

        for character in event.trigger.min_affection.keys() {
            if self.find_character(character).is_none() {
                return Err(unknown("character", character));
            }
        }
        for choice in &event.choices {
            for character in choice.effect.affection.keys() {
                if self.find_character(character).is_none() {
                    return Err(unknown("character", character));
                }
            }
            if let Some(item) = &choice.effect.item {
                if self.find_item(item).is_none() {
                    return Err(unknown("item", item));
                }
            }
        }
        Ok(())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn character_ids(&self) -> impl Iterator<Item = &CharacterId> {
        self.characters.iter().map(|c| &c.id)
    }

    // ========================================================================
    // Finders
    // ========================================================================

    pub fn find_character(&self, id: &CharacterId) -> Option<&Character> {
        self.character_index.get(id).map(|&i| &self.characters[i])
    }

    pub fn find_event(&self, id: &EventId) -> Option<&GameEvent> {
        self.event_index.get(id).map(|&i| &self.events[i])
    }

    pub fn find_item(&self, id: &ItemId) -> Option<&Item> {
        self.item_index.get(id).map(|&i| &self.items[i])
    }
}

fn index_by<T, K>(
    entries: &[T],
    kind: &'static str,
    key: impl Fn(&T) -> K,
) -> Result<HashMap<K, usize>, CatalogError>
where
    K: std::hash::Hash + Eq + std::fmt::Display,
{
    let mut index = HashMap::with_capacity(entries.len());
    for (position, entry) in entries.iter().enumerate() {
        let id = key(entry);
        if index.contains_key(&id) {
            return Err(CatalogError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
        index.insert(id, position);
    }
    Ok(index)
}
