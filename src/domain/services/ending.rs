//! Deciding how the campaign ends

use crate::domain::entities::PlayerState;
use crate::domain::value_objects::{
    Affection, CharacterId, EndingKind, CAMPAIGN_DAYS, FRIENDSHIP_THRESHOLD, ROMANCE_THRESHOLD,
};

/// The ending reached by `player`, or `None` while the campaign continues
///
/// Only the character with the highest affection counts. Ties go to the
/// lexicographically smallest character id.
pub fn determine_ending(player: &PlayerState) -> Option<EndingKind> {
    if player.day <= CAMPAIGN_DAYS {
        return None;
    }

    let favourite = favourite_character(player);
    let best = favourite.map(|(_, affection)| affection.value()).unwrap_or(0);

    let ending = match favourite {
        Some((character, _)) if best >= ROMANCE_THRESHOLD => {
            if player.has_flag(&character.route_flag()) {
                EndingKind::Route(character.clone())
            } else {
                EndingKind::Good
            }
        }
        _ if best >= FRIENDSHIP_THRESHOLD => EndingKind::Normal,
        _ => EndingKind::Solo,
    };
    Some(ending)
}

fn favourite_character(player: &PlayerState) -> Option<(&CharacterId, Affection)> {
    // BTreeMap iterates in id order; keeping the earlier entry on ties makes
    // the smallest id win.
    player
        .affection
        .iter()
        .fold(None, |best, (id, affection)| match best {
            Some((_, top)) if top >= *affection => best,
            _ => Some((id, *affection)),
        })
}
