//! Game session DTOs

use serde::{Deserialize, Serialize};

use crate::domain::entities::{CompletedEvents, GameEvent, PlayerState};
use crate::domain::value_objects::{
    Activity, CharacterId, EndingKind, EventId, InteractionKind, ItemId, Location,
};

/// Everything needed to resume a session
///
/// This is also the payload of a save file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub player: PlayerState,
    pub completed_events: CompletedEvents,
    #[serde(default)]
    pub pending_event: Option<EventId>,
    #[serde(default)]
    pub ending: Option<EndingKind>,
}

/// A fired event as shown to the player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventView {
    pub id: EventId,
    pub title: String,
    pub description: String,
    pub choices: Vec<ChoiceView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceView {
    pub index: usize,
    pub label: String,
    /// Whether the player currently meets the choice's condition
    pub available: bool,
}

impl EventView {
    pub fn new(event: &GameEvent, player: &PlayerState) -> Self {
        Self {
            id: event.id.clone(),
            title: event.title.clone(),
            description: event.description.clone(),
            choices: event
                .choices
                .iter()
                .enumerate()
                .map(|(index, choice)| ChoiceView {
                    index,
                    label: choice.label.clone(),
                    available: choice.is_available(player),
                })
                .collect(),
        }
    }
}

/// Result of one player action
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnReport {
    pub message: String,
    pub accepted: bool,
    #[serde(default)]
    pub advanced_time: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affection_delta: Option<i32>,
    /// Event that fired (or is still waiting for a choice)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<EventView>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ending: Option<EndingKind>,
    pub player: PlayerState,
}

impl TurnReport {
    pub fn new(player: PlayerState, message: impl Into<String>, accepted: bool) -> Self {
        Self {
            message: message.into(),
            accepted,
            advanced_time: false,
            affection_delta: None,
            event: None,
            ending: None,
            player,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityRequest {
    pub activity: Activity,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisitRequest {
    pub location: Location,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChoiceRequest {
    pub index: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractRequest {
    pub character_id: CharacterId,
    pub kind: InteractionKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseRequest {
    pub item_id: ItemId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndingResponse {
    pub day: u32,
    pub ending: Option<EndingKind>,
}
