//! Player state - everything that changes while the campaign is played
//!
//! The engine treats `PlayerState` as a value: transformation functions take
//! `&PlayerState` and hand back a fresh copy. The mutators below are only
//! called on such copies and each one enforces its own bound.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{
    apply_floored, Affection, CharacterId, ItemId, Location, StatKind, Stats, TimeOfDay,
};

/// Money the player starts a new game with
pub const STARTING_MONEY: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub stats: Stats,
    /// Ordered by character id, which also fixes ending tie-breaks
    pub affection: BTreeMap<CharacterId, Affection>,
    pub flags: BTreeSet<String>,
    pub inventory: Vec<ItemId>,
    pub day: u32,
    pub time_of_day: TimeOfDay,
    pub location: Location,
    pub money: u32,
}

impl PlayerState {
    /// Fresh state for a new game, with zero affection for every character
    pub fn new_game<'a>(characters: impl IntoIterator<Item = &'a CharacterId>) -> Self {
        Self {
            stats: Stats::default(),
            affection: characters
                .into_iter()
                .map(|id| (id.clone(), Affection::ZERO))
                .collect(),
            flags: BTreeSet::new(),
            inventory: Vec::new(),
            day: 1,
            time_of_day: TimeOfDay::Morning,
            location: Location::Dormitory,
            money: STARTING_MONEY,
        }
    }

    pub fn affection_for(&self, character: &CharacterId) -> Affection {
        self.affection.get(character).copied().unwrap_or_default()
    }

    pub fn stat(&self, kind: StatKind) -> u32 {
        self.stats.get(kind)
    }

    pub fn has_flag(&self, flag: &str) -> bool {
        self.flags.contains(flag)
    }

    pub fn has_item(&self, item: &ItemId) -> bool {
        self.inventory.contains(item)
    }

    /// Apply a clamped affection delta and return the new value
    pub fn adjust_affection(&mut self, character: &CharacterId, delta: i32) -> Affection {
        let entry = self.affection.entry(character.clone()).or_default();
        *entry = entry.apply(delta);
        *entry
    }

    pub fn adjust_stat(&mut self, kind: StatKind, delta: i32) {
        self.stats.apply(kind, delta);
    }

    pub fn adjust_money(&mut self, delta: i32) {
        self.money = apply_floored(self.money, delta);
    }

    /// Record a flag; setting an existing flag is a no-op
    pub fn set_flag(&mut self, flag: impl Into<String>) {
        self.flags.insert(flag.into());
    }

    pub fn grant_item(&mut self, item: ItemId) {
        self.inventory.push(item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sakura() -> CharacterId {
        CharacterId::new("sakura").unwrap()
    }

    #[test]
    fn test_new_game_defaults() {
        let ids = [sakura(), CharacterId::new("yuki").unwrap()];
        let player = PlayerState::new_game(&ids);

        assert_eq!(player.day, 1);
        assert_eq!(player.time_of_day, TimeOfDay::Morning);
        assert_eq!(player.money, STARTING_MONEY);
        assert_eq!(player.affection.len(), 2);
        assert_eq!(player.affection_for(&sakura()), Affection::ZERO);
    }

    #[test]
    fn test_thirty_gifts_cap_at_max() {
        let mut player = PlayerState::new_game(&[sakura()]);
        for _ in 0..30 {
            player.adjust_affection(&sakura(), 5);
        }
        assert_eq!(player.affection_for(&sakura()), Affection::MAX);
    }

    #[test]
    fn test_set_flag_idempotent() {
        let mut once = PlayerState::new_game(std::iter::empty());
        once.set_flag("sakura_route");

        let mut twice = once.clone();
        twice.set_flag("sakura_route");

        assert_eq!(once.flags, twice.flags);
        assert_eq!(twice.flags.len(), 1);
    }

    #[test]
    fn test_money_floors_at_zero() {
        let mut player = PlayerState::new_game(std::iter::empty());
        player.adjust_money(-5000);
        assert_eq!(player.money, 0);
    }

    #[test]
    fn test_unknown_character_affection_is_zero() {
        let player = PlayerState::new_game(std::iter::empty());
        assert_eq!(player.affection_for(&sakura()), Affection::ZERO);
    }
}
