//! Game session API routes

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::application::dto::{
    ActivityRequest, ChoiceRequest, EndingResponse, EventView, InteractRequest, PurchaseRequest,
    SessionSnapshot, TurnReport, VisitRequest,
};
use crate::infrastructure::state::AppState;

use super::game_error;

type TurnResult = Result<Json<TurnReport>, (StatusCode, String)>;

/// Current session state
pub async fn get_game(State(state): State<Arc<AppState>>) -> Json<SessionSnapshot> {
    Json(state.game_service.snapshot().await)
}

/// Discard the current session and start over
pub async fn new_game(State(state): State<Arc<AppState>>) -> Json<SessionSnapshot> {
    Json(state.game_service.new_game().await)
}

pub async fn perform_activity(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ActivityRequest>,
) -> TurnResult {
    state
        .game_service
        .perform_activity(req.activity)
        .await
        .map(Json)
        .map_err(game_error)
}

pub async fn visit(
    State(state): State<Arc<AppState>>,
    Json(req): Json<VisitRequest>,
) -> TurnResult {
    state
        .game_service
        .visit(req.location)
        .await
        .map(Json)
        .map_err(game_error)
}

/// The event waiting for a choice, with each choice's availability
pub async fn get_pending_event(
    State(state): State<Arc<AppState>>,
) -> Result<Json<EventView>, (StatusCode, String)> {
    state
        .game_service
        .pending_event()
        .await
        .map(Json)
        .ok_or_else(|| (StatusCode::NOT_FOUND, "No event is waiting for a choice".to_string()))
}

/// Answer the pending event
pub async fn choose(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChoiceRequest>,
) -> TurnResult {
    state
        .game_service
        .choose(req.index)
        .await
        .map(Json)
        .map_err(game_error)
}

pub async fn dismiss_event(State(state): State<Arc<AppState>>) -> TurnResult {
    state
        .game_service
        .dismiss_event()
        .await
        .map(Json)
        .map_err(game_error)
}

pub async fn interact(
    State(state): State<Arc<AppState>>,
    Json(req): Json<InteractRequest>,
) -> TurnResult {
    state
        .game_service
        .interact(&req.character_id, req.kind)
        .await
        .map(Json)
        .map_err(game_error)
}

pub async fn purchase(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PurchaseRequest>,
) -> TurnResult {
    state
        .game_service
        .purchase(&req.item_id)
        .await
        .map(Json)
        .map_err(game_error)
}

pub async fn get_ending(State(state): State<Arc<AppState>>) -> Json<EndingResponse> {
    Json(state.game_service.ending().await)
}
