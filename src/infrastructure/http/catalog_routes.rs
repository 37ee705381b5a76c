//! Read-only catalog routes

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::domain::entities::{Character, Item};
use crate::domain::value_objects::CharacterId;
use crate::infrastructure::state::AppState;

pub async fn list_characters(State(state): State<Arc<AppState>>) -> Json<Vec<Character>> {
    Json(state.catalog.characters().to_vec())
}

pub async fn get_character(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Character>, (StatusCode, String)> {
    let not_found = || (StatusCode::NOT_FOUND, format!("Unknown character '{id}'"));

    let character_id = CharacterId::new(id.clone()).map_err(|_| not_found())?;
    state
        .catalog
        .find_character(&character_id)
        .cloned()
        .map(Json)
        .ok_or_else(not_found)
}

/// Items currently for sale
pub async fn list_items(State(state): State<Arc<AppState>>) -> Json<Vec<Item>> {
    Json(
        state
            .catalog
            .items()
            .iter()
            .filter(|item| item.is_for_sale())
            .cloned()
            .collect(),
    )
}
