//! Narrative outcomes reached at the end of the campaign

use serde::{Deserialize, Serialize};

use super::CharacterId;

/// Campaign length in days; endings are only evaluated once it is exceeded
pub const CAMPAIGN_DAYS: u32 = 30;

/// Affection needed for a romantic ending
pub const ROMANCE_THRESHOLD: u8 = 80;

/// Affection needed for the normal ending
pub const FRIENDSHIP_THRESHOLD: u8 = 50;

/// How the story ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "character", rename_all = "snake_case")]
pub enum EndingKind {
    /// The dedicated ending of a character whose route was chosen
    Route(CharacterId),
    /// High affection without a chosen route
    Good,
    Normal,
    Solo,
}

impl EndingKind {
    /// Short key used by the front end to pick the ending scene
    pub fn key(&self) -> &str {
        match self {
            Self::Route(character) => character.as_str(),
            Self::Good => "good",
            Self::Normal => "normal",
            Self::Solo => "solo",
        }
    }
}

impl std::fmt::Display for EndingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
