//! GameEvent entity - narrative events with triggers and branching choices
//!
//! Events are static catalog data. An event fires when every part of its
//! trigger holds against the current player state; the player then picks
//! one of its choices, each of which may be gated by a condition and carries
//! an effect bundle.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::domain::entities::PlayerState;
use crate::domain::value_objects::{CharacterId, EventId, ItemId, Location, StatKind, TimeOfDay};

/// A narrative event loaded from the event catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameEvent {
    pub id: EventId,
    pub title: String,
    /// Narrative text shown when the event fires
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub trigger: EventTrigger,
    #[serde(default)]
    pub choices: Vec<EventChoice>,
}

impl GameEvent {
    pub fn new(id: EventId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            trigger: EventTrigger::default(),
            choices: Vec::new(),
        }
    }

    pub fn with_trigger(mut self, trigger: EventTrigger) -> Self {
        self.trigger = trigger;
        self
    }

    pub fn with_choice(mut self, choice: EventChoice) -> Self {
        self.choices.push(choice);
        self
    }

    /// Whether this event may fire for `player` at `location`
    pub fn is_eligible(
        &self,
        player: &PlayerState,
        location: Location,
        completed: &CompletedEvents,
    ) -> bool {
        if self.trigger.once && completed.contains(&self.id) {
            return false;
        }
        self.trigger.matches(player, location)
    }
}

/// Conditions under which an event fires; every populated part must hold
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EventTrigger {
    pub location: Option<Location>,
    /// Inclusive lower bound on the current day
    pub min_day: Option<u32>,
    /// Inclusive upper bound on the current day
    pub max_day: Option<u32>,
    pub time_of_day: Option<TimeOfDay>,
    /// Never offered again once recorded as completed
    pub once: bool,
    pub required_flags: Vec<String>,
    pub min_affection: BTreeMap<CharacterId, u8>,
}

impl EventTrigger {
    pub fn matches(&self, player: &PlayerState, location: Location) -> bool {
        if self.location.is_some_and(|required| required != location) {
            return false;
        }
        if self.min_day.is_some_and(|min| player.day < min) {
            return false;
        }
        if self.max_day.is_some_and(|max| player.day > max) {
            return false;
        }
        if self
            .time_of_day
            .is_some_and(|required| required != player.time_of_day)
        {
            return false;
        }
        if !self.required_flags.iter().all(|flag| player.has_flag(flag)) {
            return false;
        }
        self.min_affection
            .iter()
            .all(|(character, min)| player.affection_for(character).value() >= *min)
    }
}

/// One branch the player can take when an event fires
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventChoice {
    pub label: String,
    #[serde(default)]
    pub condition: Option<ChoiceCondition>,
    #[serde(default)]
    pub effect: ChoiceEffect,
}

impl EventChoice {
    pub fn new(label: impl Into<String>, effect: ChoiceEffect) -> Self {
        Self {
            label: label.into(),
            condition: None,
            effect,
        }
    }

    pub fn with_condition(mut self, condition: ChoiceCondition) -> Self {
        self.condition = Some(condition);
        self
    }

    pub fn is_available(&self, player: &PlayerState) -> bool {
        self.condition
            .as_ref()
            .map_or(true, |condition| condition.unmet(player).is_empty())
    }
}

/// Requirements gating a choice
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChoiceCondition {
    pub min_stats: BTreeMap<StatKind, u32>,
    pub required_flags: Vec<String>,
}

/// A single unmet part of a [`ChoiceCondition`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnmetRequirement {
    Stat { stat: StatKind, required: u32, actual: u32 },
    Flag(String),
}

impl std::fmt::Display for UnmetRequirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stat { stat, required, .. } => {
                write!(f, "{} {} 이상 필요", stat.display_name(), required)
            }
            Self::Flag(_) => f.write_str("아직 조건을 만족하지 못했습니다"),
        }
    }
}

impl ChoiceCondition {
    pub fn with_min_stat(mut self, stat: StatKind, value: u32) -> Self {
        self.min_stats.insert(stat, value);
        self
    }

    pub fn with_required_flag(mut self, flag: impl Into<String>) -> Self {
        self.required_flags.push(flag.into());
        self
    }

    /// Every requirement `player` does not meet; empty when eligible
    pub fn unmet(&self, player: &PlayerState) -> Vec<UnmetRequirement> {
        let stats = self.min_stats.iter().filter_map(|(stat, required)| {
            let actual = player.stat(*stat);
            (actual < *required).then_some(UnmetRequirement::Stat {
                stat: *stat,
                required: *required,
                actual,
            })
        });
        let flags = self
            .required_flags
            .iter()
            .filter(|flag| !player.has_flag(flag))
            .map(|flag| UnmetRequirement::Flag(flag.clone()));
        stats.chain(flags).collect()
    }
}

/// Everything a chosen branch does to the player
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChoiceEffect {
    pub affection: BTreeMap<CharacterId, i32>,
    pub stats: BTreeMap<StatKind, i32>,
    pub money: i32,
    pub item: Option<ItemId>,
    pub flag: Option<String>,
    /// Narrative text shown after the choice is made
    pub text: String,
}

impl ChoiceEffect {
    pub fn narrated(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_affection(mut self, character: CharacterId, delta: i32) -> Self {
        self.affection.insert(character, delta);
        self
    }

    pub fn with_stat(mut self, stat: StatKind, delta: i32) -> Self {
        self.stats.insert(stat, delta);
        self
    }

    pub fn with_money(mut self, delta: i32) -> Self {
        self.money = delta;
        self
    }

    pub fn with_item(mut self, item: ItemId) -> Self {
        self.item = Some(item);
        self
    }

    pub fn with_flag(mut self, flag: impl Into<String>) -> Self {
        self.flag = Some(flag.into());
        self
    }
}

/// History of events the player has finished
///
/// Append-only within a session; a recorded `once` event never fires again.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletedEvents(BTreeSet<EventId>);

impl CompletedEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, id: EventId) {
        self.0.insert(id);
    }

    pub fn contains(&self, id: &EventId) -> bool {
        self.0.contains(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}
