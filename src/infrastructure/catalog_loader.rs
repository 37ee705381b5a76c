//! Loads the static game content from JSON files

use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use crate::domain::aggregates::CatalogAggregate;

pub const CHARACTERS_FILE: &str = "characters.json";
pub const EVENTS_FILE: &str = "events.json";
pub const ITEMS_FILE: &str = "items.json";

/// Read and validate the three catalog files under `dir`
pub fn load_catalog(dir: &Path) -> Result<CatalogAggregate> {
    let characters = read_json(&dir.join(CHARACTERS_FILE))?;
    let events = read_json(&dir.join(EVENTS_FILE))?;
    let items = read_json(&dir.join(ITEMS_FILE))?;

    let catalog = CatalogAggregate::new(characters, events, items)
        .with_context(|| format!("Invalid catalog in {}", dir.display()))?;

    tracing::info!(
        characters = catalog.characters().len(),
        events = catalog.events().len(),
        items = catalog.items().len(),
        "Catalog loaded"
    );
    Ok(catalog)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
}
