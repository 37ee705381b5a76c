//! Spending time with a character

use crate::domain::entities::{Character, PlayerState};
use crate::domain::value_objects::InteractionKind;

use super::InteractionOutcome;

/// Apply an interaction's fixed affection delta; never fails
///
/// Talking shows the dialogue line for the affection the player had before
/// the conversation.
pub fn interact(player: &PlayerState, character: &Character, kind: InteractionKind) -> InteractionOutcome {
    let before = player.affection_for(&character.id);
    let delta = kind.affection_delta();

    let mut next = player.clone();
    next.adjust_affection(&character.id, delta);

    let message = match kind {
        InteractionKind::Talk => character
            .dialogue_for(before)
            .map(str::to_string)
            .unwrap_or_else(|| format!("{}와(과) 이야기를 나눴습니다.", character.name)),
        InteractionKind::Compliment => format!("{}이(가) 수줍게 웃습니다.", character.name),
        InteractionKind::Gift => format!("{}에게 선물을 건넸습니다. 무척 기뻐합니다!", character.name),
        InteractionKind::Other => format!("{}와(과) 함께 시간을 보냈습니다.", character.name),
    };

    InteractionOutcome {
        player: next,
        message,
        affection_delta: delta,
    }
}
