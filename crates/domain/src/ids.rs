use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Maximum length for identifier strings
const MAX_ID_LENGTH: usize = 50;

macro_rules! define_id {
    ($name:ident, $label:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Create an identifier from a caller-supplied string.
            ///
            /// # Errors
            ///
            /// Returns `DomainError::InvalidId` if the value is empty after
            /// trimming or exceeds 50 characters.
            pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
                let value = value.into();
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    return Err(DomainError::invalid_id(concat!(
                        $label,
                        " cannot be empty"
                    )));
                }
                if trimmed.len() > MAX_ID_LENGTH {
                    return Err(DomainError::invalid_id(format!(
                        "{} cannot exceed {} characters",
                        $label, MAX_ID_LENGTH
                    )));
                }
                Ok(Self(trimmed.to_string()))
            }

            /// Generate a fresh identifier backed by a UUID v4 string.
            pub fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = DomainError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                Self::new(s)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> String {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

// Core aggregate IDs
define_id!(GameId, "Game ID");
define_id!(PlayerId, "Player ID");

// Lineup and inning stream IDs
define_id!(TeamLineupId, "Team lineup ID");
define_id!(InningStateId, "Inning state ID");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_plain_string() {
        let id = GameId::new("game-2026-06-14").unwrap();
        assert_eq!(id.as_str(), "game-2026-06-14");
    }

    #[test]
    fn new_trims_whitespace() {
        let id = PlayerId::new("  player-7  ").unwrap();
        assert_eq!(id.as_str(), "player-7");
    }

    #[test]
    fn empty_rejected() {
        let result = GameId::new("");
        assert!(matches!(result, Err(DomainError::InvalidId(_))));
    }

    #[test]
    fn whitespace_only_rejected() {
        assert!(GameId::new("   ").is_err());
    }

    #[test]
    fn too_long_rejected() {
        let result = PlayerId::new("a".repeat(51));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("50"));
    }

    #[test]
    fn max_length_accepted() {
        let id = PlayerId::new("a".repeat(50)).unwrap();
        assert_eq!(id.as_str().len(), 50);
    }

    #[test]
    fn generate_produces_uuid_format() {
        let id = GameId::generate();
        assert!(Uuid::parse_str(id.as_str()).is_ok());
    }

    #[test]
    fn generated_ids_are_unique() {
        assert_ne!(GameId::generate(), GameId::generate());
    }

    #[test]
    fn equality_is_by_value() {
        let a = PlayerId::new("p1").unwrap();
        let b = PlayerId::new("p1").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, PlayerId::new("p2").unwrap());
    }

    #[test]
    fn serde_round_trip() {
        let id = GameId::generate();
        let json = serde_json::to_string(&id).unwrap();
        let back: GameId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }

    #[test]
    fn deserialize_rejects_empty() {
        let result: Result<GameId, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }
}
