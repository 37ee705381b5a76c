//! HTTP REST API routes

mod catalog_routes;
mod game_routes;
mod save_routes;

use std::sync::Arc;

use axum::{
    http::StatusCode,
    routing::{get, post, put},
    Router,
};

use crate::application::ports::outbound::SaveError;
use crate::application::services::GameError;
use crate::infrastructure::state::AppState;

/// Create all API routes
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Game session routes
        .route("/api/game", get(game_routes::get_game))
        .route("/api/game/new", post(game_routes::new_game))
        .route("/api/game/activity", post(game_routes::perform_activity))
        .route("/api/game/visit", post(game_routes::visit))
        .route("/api/game/event", get(game_routes::get_pending_event))
        .route("/api/game/choice", post(game_routes::choose))
        .route("/api/game/event/dismiss", post(game_routes::dismiss_event))
        .route("/api/game/interact", post(game_routes::interact))
        .route("/api/game/purchase", post(game_routes::purchase))
        .route("/api/game/ending", get(game_routes::get_ending))
        // Catalog routes
        .route("/api/characters", get(catalog_routes::list_characters))
        .route("/api/characters/{id}", get(catalog_routes::get_character))
        .route("/api/items", get(catalog_routes::list_items))
        // Save slot routes
        .route("/api/saves", get(save_routes::list_saves))
        .route(
            "/api/saves/{slot}",
            put(save_routes::save_game).delete(save_routes::delete_save),
        )
        .route("/api/saves/{slot}/load", post(save_routes::load_game))
}

pub(crate) fn game_error(e: GameError) -> (StatusCode, String) {
    let status = match e {
        GameError::NotFound { .. } => StatusCode::NOT_FOUND,
        GameError::CampaignOver(_) | GameError::EventPending(_) | GameError::NoPendingEvent => {
            StatusCode::CONFLICT
        }
    };
    (status, e.to_string())
}

pub(crate) fn save_error(e: SaveError) -> (StatusCode, String) {
    let status = match e {
        SaveError::InvalidSlot(_) => StatusCode::BAD_REQUEST,
        SaveError::EmptySlot(_) => StatusCode::NOT_FOUND,
        SaveError::IncompatibleVersion { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        SaveError::Database(_) | SaveError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, e.to_string())
}
