//! Player attributes
//!
//! Stats are unsigned and unbounded above. Every write goes through
//! [`Stats::apply`], which floors the result at zero.

use serde::{Deserialize, Serialize};

/// The named player attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    Intelligence,
    Charm,
    Stamina,
    Strength,
    Agility,
    Luck,
}

impl StatKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Intelligence => "지력",
            Self::Charm => "매력",
            Self::Stamina => "체력",
            Self::Strength => "근력",
            Self::Agility => "민첩",
            Self::Luck => "행운",
        }
    }
}

/// Current values of every player attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub intelligence: u32,
    pub charm: u32,
    pub stamina: u32,
    pub strength: u32,
    pub agility: u32,
    pub luck: u32,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            intelligence: 10,
            charm: 10,
            stamina: 100,
            strength: 10,
            agility: 10,
            luck: 10,
        }
    }
}

impl Stats {
    pub fn get(&self, kind: StatKind) -> u32 {
        match kind {
            StatKind::Intelligence => self.intelligence,
            StatKind::Charm => self.charm,
            StatKind::Stamina => self.stamina,
            StatKind::Strength => self.strength,
            StatKind::Agility => self.agility,
            StatKind::Luck => self.luck,
        }
    }

    fn slot_mut(&mut self, kind: StatKind) -> &mut u32 {
        match kind {
            StatKind::Intelligence => &mut self.intelligence,
            StatKind::Charm => &mut self.charm,
            StatKind::Stamina => &mut self.stamina,
            StatKind::Strength => &mut self.strength,
            StatKind::Agility => &mut self.agility,
            StatKind::Luck => &mut self.luck,
        }
    }

    /// Add a signed delta to a stat, flooring at zero
    pub fn apply(&mut self, kind: StatKind, delta: i32) {
        let slot = self.slot_mut(kind);
        *slot = apply_floored(*slot, delta);
    }

    /// Builder-style variant of [`Stats::apply`]
    pub fn with(mut self, kind: StatKind, value: u32) -> Self {
        *self.slot_mut(kind) = value;
        self
    }
}

/// Add a signed delta to an unsigned quantity, flooring at zero
pub fn apply_floored(value: u32, delta: i32) -> u32 {
    if delta >= 0 {
        value.saturating_add(delta.unsigned_abs())
    } else {
        value.saturating_sub(delta.unsigned_abs())
    }
}
