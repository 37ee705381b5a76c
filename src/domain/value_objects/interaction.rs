//! Ways the player can spend time with a character

use serde::{Deserialize, Serialize};

/// Interaction kinds; anything unrecognised falls back to `Other`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionKind {
    Talk,
    Compliment,
    Gift,
    #[serde(other)]
    Other,
}

impl InteractionKind {
    pub fn affection_delta(&self) -> i32 {
        match self {
            Self::Talk => 1,
            Self::Compliment => 2,
            Self::Gift => 5,
            Self::Other => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_kind_is_other() {
        let kind: InteractionKind = serde_json::from_str("\"wave\"").unwrap();
        assert_eq!(kind, InteractionKind::Other);
        assert_eq!(kind.affection_delta(), 1);
    }

    #[test]
    fn test_deltas() {
        assert_eq!(InteractionKind::Talk.affection_delta(), 1);
        assert_eq!(InteractionKind::Compliment.affection_delta(), 2);
        assert_eq!(InteractionKind::Gift.affection_delta(), 5);
    }
}
