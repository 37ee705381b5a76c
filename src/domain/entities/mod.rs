//! Domain entities - Core game objects

mod character;
mod game_event;
mod item;
mod player_state;

pub use character::Character;
pub use game_event::{
    ChoiceCondition, ChoiceEffect, CompletedEvents, EventChoice, EventTrigger, GameEvent,
    UnmetRequirement,
};
pub use item::Item;
pub use player_state::{PlayerState, STARTING_MONEY};
