//! Picking the narrative event that fires this tick

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::entities::{CompletedEvents, GameEvent, PlayerState};
use crate::domain::value_objects::Location;

/// Choose uniformly among the events whose trigger holds
///
/// `location_override` replaces the player's own location when checking
/// location triggers (used when the player is about to enter a place).
/// Returns `None` when nothing is eligible.
pub fn select_event<'a, R>(
    player: &PlayerState,
    events: &'a [GameEvent],
    completed: &CompletedEvents,
    location_override: Option<Location>,
    rng: &mut R,
) -> Option<&'a GameEvent>
where
    R: Rng + ?Sized,
{
    let location = location_override.unwrap_or(player.location);
    let eligible: Vec<&GameEvent> = events
        .iter()
        .filter(|event| event.is_eligible(player, location, completed))
        .collect();

    eligible.choose(rng).copied()
}
