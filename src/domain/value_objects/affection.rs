//! Affection score between the player and a character

use serde::{Deserialize, Serialize};

/// Upper bound of every affection score
pub const AFFECTION_MAX: u8 = 100;

/// Relationship progress with one character, always within `0..=100`
///
/// The only constructors clamp, including deserialization, so a hand-edited
/// save cannot smuggle in an out-of-range value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct Affection(u8);

impl Affection {
    pub const ZERO: Affection = Affection(0);
    pub const MAX: Affection = Affection(AFFECTION_MAX);

    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(0, AFFECTION_MAX as i64) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Apply a signed delta, clamping to the valid range
    pub fn apply(self, delta: i32) -> Self {
        Self::clamped(self.0 as i64 + delta as i64)
    }
}

impl From<i64> for Affection {
    fn from(value: i64) -> Self {
        Self::clamped(value)
    }
}

impl From<Affection> for u8 {
    fn from(affection: Affection) -> u8 {
        affection.0
    }
}

impl std::fmt::Display for Affection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_clamps_both_ends() {
        assert_eq!(Affection::clamped(95).apply(10), Affection::MAX);
        assert_eq!(Affection::clamped(3).apply(-10), Affection::ZERO);
        assert_eq!(Affection::clamped(40).apply(5).value(), 45);
    }

    #[test]
    fn test_deserialize_clamps() {
        let high: Affection = serde_json::from_str("250").unwrap();
        let low: Affection = serde_json::from_str("-7").unwrap();
        assert_eq!(high.value(), 100);
        assert_eq!(low.value(), 0);
    }
}
