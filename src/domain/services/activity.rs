//! Daily activities, the clock, and moving around campus

use crate::domain::entities::PlayerState;
use crate::domain::value_objects::{Activity, Location, StatKind, TimeOfDay, MIN_ACTIVITY_STAMINA};

use super::{ActivityOutcome, RejectedAction};

/// Apply one activity's fixed effects
///
/// Exhausted players (stamina below the minimum) can only rest or shop; any
/// other activity returns the state unchanged and does not advance time.
pub fn apply_activity(player: &PlayerState, activity: Activity) -> ActivityOutcome {
    let stamina = player.stat(StatKind::Stamina);
    if !activity.is_stamina_exempt() && stamina < MIN_ACTIVITY_STAMINA {
        let reason = RejectedAction::InsufficientStamina {
            required: MIN_ACTIVITY_STAMINA,
            actual: stamina,
        };
        return ActivityOutcome {
            player: player.clone(),
            message: reason.to_string(),
            advances_time: false,
        };
    }

    let effect = activity.effect();
    let mut next = player.clone();
    for (stat, delta) in effect.stats {
        next.adjust_stat(*stat, *delta);
    }
    next.adjust_money(effect.money);

    ActivityOutcome {
        player: next,
        message: effect.message.to_string(),
        advances_time: true,
    }
}

/// Move to the next time slot, rolling over to the next morning after night
pub fn advance_time(player: &PlayerState) -> PlayerState {
    let mut next = player.clone();
    match player.time_of_day.next() {
        Some(slot) => next.time_of_day = slot,
        None => {
            next.time_of_day = TimeOfDay::Morning;
            next.day = player.day.saturating_add(1);
        }
    }
    next
}

pub fn move_to(player: &PlayerState, location: Location) -> PlayerState {
    let mut next = player.clone();
    next.location = location;
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> PlayerState {
        PlayerState::new_game(std::iter::empty())
    }

    fn exhausted() -> PlayerState {
        let mut p = player();
        p.stats.stamina = 9;
        p
    }

    #[test]
    fn test_study_applies_delta_table() {
        let outcome = apply_activity(&player(), Activity::Study);
        assert!(outcome.advances_time);
        assert_eq!(outcome.player.stats.intelligence, 12);
        assert_eq!(outcome.player.stats.stamina, 90);
    }

    #[test]
    fn test_exhausted_player_rejected_without_change() {
        let p = exhausted();
        for activity in [
            Activity::Study,
            Activity::Exercise,
            Activity::CharmTraining,
            Activity::PartTimeJob,
            Activity::ClubActivity,
        ] {
            let outcome = apply_activity(&p, activity);
            assert_eq!(outcome.player, p, "{activity:?}");
            assert!(!outcome.advances_time);
            assert!(outcome.message.contains("체력이 부족합니다"));
        }
    }

    #[test]
    fn test_exhausted_player_can_rest_and_shop() {
        let p = exhausted();
        let rested = apply_activity(&p, Activity::Rest);
        assert!(rested.advances_time);
        assert_eq!(rested.player.stats.stamina, 39);

        let shopped = apply_activity(&p, Activity::Shop);
        assert!(shopped.advances_time);
        assert_eq!(shopped.player.stats, p.stats);
    }

    #[test]
    fn test_stamina_floors_at_zero() {
        let mut p = player();
        p.stats.stamina = 12;
        let outcome = apply_activity(&p, Activity::PartTimeJob);
        assert_eq!(outcome.player.stats.stamina, 0);
        assert_eq!(outcome.player.money, p.money + 100);
    }

    #[test]
    fn test_activity_is_pure() {
        let p = player();
        let first = apply_activity(&p, Activity::Exercise);
        let second = apply_activity(&p, Activity::Exercise);
        assert_eq!(first, second);
        assert_eq!(p, player());
    }

    #[test]
    fn test_advance_time_rolls_over_day() {
        let mut p = player();
        p.time_of_day = TimeOfDay::Evening;
        let night = advance_time(&p);
        assert_eq!((night.day, night.time_of_day), (1, TimeOfDay::Night));

        let morning = advance_time(&night);
        assert_eq!((morning.day, morning.time_of_day), (2, TimeOfDay::Morning));
    }

    #[test]
    fn test_move_to() {
        let moved = move_to(&player(), Location::Rooftop);
        assert_eq!(moved.location, Location::Rooftop);
    }
}
