//! Strongly-typed identifiers for domain entities
//!
//! Catalog entries are keyed by short human-written strings (`"sakura"`,
//! `"library_study_date"`). Keys are validated on construction so a typo in
//! catalog data fails at load time instead of silently never matching.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Error returned when a catalog key is malformed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind} '{value}': keys must be 1-64 chars of [a-z0-9_]")]
pub struct InvalidKey {
    pub kind: &'static str,
    pub value: String,
}

fn is_valid_key(value: &str) -> bool {
    !value.is_empty()
        && value.len() <= 64
        && value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

macro_rules! define_key {
    ($name:ident, $kind:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Result<Self, InvalidKey> {
                let value = value.into();
                if is_valid_key(&value) {
                    Ok(Self(value))
                } else {
                    Err(InvalidKey { kind: $kind, value })
                }
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = InvalidKey;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> String {
                id.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

define_key!(CharacterId, "character id");
define_key!(EventId, "event id");
define_key!(ItemId, "item id");

impl CharacterId {
    /// Flag that marks this character's story route as chosen
    pub fn route_flag(&self) -> String {
        format!("{}_route", self.0)
    }
}

/// Identifier of a running game session (used for log correlation)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
