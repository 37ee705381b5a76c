//! Scene context - where the player is and when

use serde::{Deserialize, Serialize};

/// Places on and around campus the player can be
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    Classroom,
    Library,
    Gym,
    Cafeteria,
    Garden,
    Rooftop,
    Dormitory,
    Shop,
    Town,
}

impl Location {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Classroom => "교실",
            Self::Library => "도서관",
            Self::Gym => "체육관",
            Self::Cafeteria => "식당",
            Self::Garden => "정원",
            Self::Rooftop => "옥상",
            Self::Dormitory => "기숙사",
            Self::Shop => "상점",
            Self::Town => "마을",
        }
    }
}

/// Time slot within a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    /// The following slot, or `None` when the day is over
    pub fn next(&self) -> Option<TimeOfDay> {
        match self {
            Self::Morning => Some(Self::Afternoon),
            Self::Afternoon => Some(Self::Evening),
            Self::Evening => Some(Self::Night),
            Self::Night => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Morning => "아침",
            Self::Afternoon => "오후",
            Self::Evening => "저녁",
            Self::Night => "밤",
        }
    }
}
