//! Save slot API routes

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::SessionSnapshot;
use crate::application::ports::outbound::{SaveSlot, SaveSlotSummary};
use crate::infrastructure::state::AppState;

use super::save_error;

pub async fn list_saves(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<SaveSlotSummary>>, (StatusCode, String)> {
    state.save_service.list().await.map(Json).map_err(save_error)
}

/// Write the current session into a slot, replacing what was there
pub async fn save_game(
    State(state): State<Arc<AppState>>,
    Path(slot): Path<String>,
) -> Result<Json<SaveSlotSummary>, (StatusCode, String)> {
    let slot = SaveSlot::new(slot).map_err(save_error)?;
    state.save_service.save(&slot).await.map(Json).map_err(save_error)
}

/// Replace the current session with a saved one
pub async fn load_game(
    State(state): State<Arc<AppState>>,
    Path(slot): Path<String>,
) -> Result<Json<SessionSnapshot>, (StatusCode, String)> {
    let slot = SaveSlot::new(slot).map_err(save_error)?;
    state.save_service.load(&slot).await.map(Json).map_err(save_error)
}

pub async fn delete_save(
    State(state): State<Arc<AppState>>,
    Path(slot): Path<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    let slot = SaveSlot::new(slot).map_err(save_error)?;
    let deleted = state.save_service.delete(&slot).await.map_err(save_error)?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err((StatusCode::NOT_FOUND, format!("Save slot '{slot}' is empty")))
    }
}
