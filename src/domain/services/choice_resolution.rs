//! Applying the branch the player picked

use crate::domain::entities::{GameEvent, PlayerState};

use super::{ActionOutcome, RejectedAction};

/// Resolve choice `index` of `event`
///
/// All-or-nothing: an out-of-range index or an unmet condition returns the
/// input state untouched. Otherwise effects apply in a fixed order
/// (affection, stats, money, item, flag) and the branch text is returned.
pub fn resolve_choice(player: &PlayerState, event: &GameEvent, index: usize) -> ActionOutcome {
    let Some(choice) = event.choices.get(index) else {
        return ActionOutcome::rejected(
            player,
            RejectedAction::InvalidChoice {
                index,
                available: event.choices.len(),
            },
        );
    };

    if let Some(condition) = &choice.condition {
        let unmet = condition.unmet(player);
        if !unmet.is_empty() {
            let reasons = unmet
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            return ActionOutcome::rejected(player, RejectedAction::ChoiceUnavailable { reasons });
        }
    }

    let effect = &choice.effect;
    let mut next = player.clone();
    for (character, delta) in &effect.affection {
        next.adjust_affection(character, *delta);
    }
    for (stat, delta) in &effect.stats {
        next.adjust_stat(*stat, *delta);
    }
    next.adjust_money(effect.money);
    if let Some(item) = &effect.item {
        next.grant_item(item.clone());
    }
    if let Some(flag) = &effect.flag {
        next.set_flag(flag.clone());
    }

    ActionOutcome::accepted(next, effect.text.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{ChoiceCondition, ChoiceEffect, EventChoice};
    use crate::domain::value_objects::{CharacterId, EventId, ItemId, StatKind};

    fn sakura() -> CharacterId {
        CharacterId::new("sakura").unwrap()
    }

    fn study_date() -> GameEvent {
        GameEvent::new(EventId::new("study_date").unwrap(), "공부 데이트")
            .with_choice(
                EventChoice::new(
                    "어려운 문제를 설명해준다",
                    ChoiceEffect::narrated("사쿠라가 감탄했다.")
                        .with_affection(sakura(), 10)
                        .with_stat(StatKind::Intelligence, 1)
                        .with_money(-50)
                        .with_item(ItemId::new("notebook").unwrap())
                        .with_flag("sakura_route"),
                )
                .with_condition(ChoiceCondition::default().with_min_stat(StatKind::Intelligence, 20)),
            )
            .with_choice(EventChoice::new(
                "같이 간식을 먹는다",
                ChoiceEffect::narrated("즐거운 시간이었다.").with_affection(sakura(), 3),
            ))
    }

    fn player() -> PlayerState {
        PlayerState::new_game(&[sakura()])
    }

    #[test]
    fn test_ineligible_choice_changes_nothing() {
        let p = player();
        assert_eq!(p.stats.intelligence, 10);

        let outcome = resolve_choice(&p, &study_date(), 0);
        assert!(!outcome.is_accepted());
        assert_eq!(outcome.player, p);
        assert!(matches!(
            outcome.rejection,
            Some(RejectedAction::ChoiceUnavailable { .. })
        ));
        assert!(outcome.message.contains("지력 20"));
    }

    #[test]
    fn test_out_of_range_choice_rejected() {
        let p = player();
        let outcome = resolve_choice(&p, &study_date(), 2);
        assert_eq!(
            outcome.rejection,
            Some(RejectedAction::InvalidChoice { index: 2, available: 2 })
        );
        assert_eq!(outcome.player, p);
    }

    #[test]
    fn test_eligible_choice_applies_every_effect() {
        let mut p = player();
        p.stats.intelligence = 25;

        let outcome = resolve_choice(&p, &study_date(), 0);
        assert!(outcome.is_accepted());
        assert_eq!(outcome.message, "사쿠라가 감탄했다.");

        let next = outcome.player;
        assert_eq!(next.affection_for(&sakura()).value(), 10);
        assert_eq!(next.stats.intelligence, 26);
        assert_eq!(next.money, p.money - 50);
        assert_eq!(next.inventory, vec![ItemId::new("notebook").unwrap()]);
        assert!(next.has_flag("sakura_route"));
    }

    #[test]
    fn test_affection_effect_is_clamped() {
        let mut p = player();
        p.adjust_affection(&sakura(), 99);
        let outcome = resolve_choice(&p, &study_date(), 1);
        assert_eq!(outcome.player.affection_for(&sakura()).value(), 100);
    }

    #[test]
    fn test_required_flag_gates_choice() {
        let event = GameEvent::new(EventId::new("promise").unwrap(), "약속").with_choice(
            EventChoice::new("약속을 지킨다", ChoiceEffect::narrated("..."))
                .with_condition(ChoiceCondition::default().with_required_flag("made_promise")),
        );
        let mut p = player();
        assert!(!resolve_choice(&p, &event, 0).is_accepted());

        p.set_flag("made_promise");
        assert!(resolve_choice(&p, &event, 0).is_accepted());
    }
}
