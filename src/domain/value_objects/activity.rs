//! Daily activities and their fixed effect table

use serde::{Deserialize, Serialize};

use super::StatKind;

/// Stamina below this blocks every activity that is not stamina-exempt
pub const MIN_ACTIVITY_STAMINA: u32 = 10;

/// Something the player spends a time slot on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Activity {
    Study,
    Exercise,
    CharmTraining,
    PartTimeJob,
    ClubActivity,
    Rest,
    Shop,
}

/// Fixed consequences of performing an activity once
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEffect {
    pub stats: &'static [(StatKind, i32)],
    pub money: i32,
    pub message: &'static str,
}

impl Activity {
    /// Activities allowed even when the player is exhausted
    pub fn is_stamina_exempt(&self) -> bool {
        matches!(self, Self::Rest | Self::Shop)
    }

    pub fn effect(&self) -> ActivityEffect {
        use StatKind::*;
        match self {
            Self::Study => ActivityEffect {
                stats: &[(Intelligence, 2), (Stamina, -10)],
                money: 0,
                message: "열심히 공부했습니다. 지력이 올랐습니다.",
            },
            Self::Exercise => ActivityEffect {
                stats: &[(Strength, 2), (Agility, 1), (Stamina, -15)],
                money: 0,
                message: "땀 흘리며 운동했습니다. 근력과 민첩이 올랐습니다.",
            },
            Self::CharmTraining => ActivityEffect {
                stats: &[(Charm, 2), (Stamina, -10)],
                money: 0,
                message: "거울 앞에서 미소를 연습했습니다. 매력이 올랐습니다.",
            },
            Self::PartTimeJob => ActivityEffect {
                stats: &[(Stamina, -20)],
                money: 100,
                message: "아르바이트로 돈을 벌었습니다.",
            },
            Self::ClubActivity => ActivityEffect {
                stats: &[(Charm, 1), (Luck, 1), (Stamina, -10)],
                money: 0,
                message: "동아리 활동에 참여했습니다.",
            },
            Self::Rest => ActivityEffect {
                stats: &[(Stamina, 30)],
                money: 0,
                message: "푹 쉬었습니다. 체력이 회복되었습니다.",
            },
            Self::Shop => ActivityEffect {
                stats: &[],
                money: 0,
                message: "상점을 둘러보았습니다.",
            },
        }
    }
}
