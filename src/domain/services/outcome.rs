//! Results returned by the progression engine
//!
//! A rejected action is not an error: the engine hands back the untouched
//! player state together with the reason, and the caller shows the reason's
//! message to the player.

use crate::domain::entities::PlayerState;

/// Why the engine refused to apply an action
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RejectedAction {
    #[error("체력이 부족합니다. (현재 {actual}, 필요 {required})")]
    InsufficientStamina { required: u32, actual: u32 },
    #[error("잘못된 선택입니다.")]
    InvalidChoice { index: usize, available: usize },
    #[error("선택할 수 없습니다: {reasons}")]
    ChoiceUnavailable { reasons: String },
    #[error("돈이 부족합니다. (가격 {price}, 소지금 {money})")]
    InsufficientMoney { price: u32, money: u32 },
    #[error("판매하지 않는 물건입니다.")]
    NotForSale,
}

/// Outcome of an action that may be accepted or rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    pub player: PlayerState,
    pub message: String,
    pub rejection: Option<RejectedAction>,
}

impl ActionOutcome {
    pub fn accepted(player: PlayerState, message: impl Into<String>) -> Self {
        Self {
            player,
            message: message.into(),
            rejection: None,
        }
    }

    /// Reject with `player` returned exactly as it was passed in
    pub fn rejected(player: &PlayerState, reason: RejectedAction) -> Self {
        Self {
            player: player.clone(),
            message: reason.to_string(),
            rejection: Some(reason),
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.rejection.is_none()
    }
}

/// Outcome of a daily activity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityOutcome {
    pub player: PlayerState,
    pub message: String,
    /// Whether the caller should move the clock forward
    pub advances_time: bool,
}

/// Outcome of spending time with a character
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionOutcome {
    pub player: PlayerState,
    pub message: String,
    /// Nominal delta of the interaction kind, before clamping
    pub affection_delta: i32,
}
