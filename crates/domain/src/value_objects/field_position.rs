//! Slow-pitch softball field positions
//!
//! Ten defensive positions (slow-pitch adds a short fielder to the
//! traditional nine) plus the extra player, who bats but does not field.

use serde::{Deserialize, Serialize};

/// A defensive assignment for a lineup slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldPosition {
    Pitcher,
    Catcher,
    FirstBase,
    SecondBase,
    ThirdBase,
    Shortstop,
    LeftField,
    CenterField,
    RightField,
    /// Tenth defensive position, usually a fourth outfielder.
    ShortFielder,
    /// Bats in the order but takes no defensive position.
    ExtraPlayer,
}

impl FieldPosition {
    pub fn display_name(&self) -> &'static str {
        match self {
            FieldPosition::Pitcher => "Pitcher",
            FieldPosition::Catcher => "Catcher",
            FieldPosition::FirstBase => "First Base",
            FieldPosition::SecondBase => "Second Base",
            FieldPosition::ThirdBase => "Third Base",
            FieldPosition::Shortstop => "Shortstop",
            FieldPosition::LeftField => "Left Field",
            FieldPosition::CenterField => "Center Field",
            FieldPosition::RightField => "Right Field",
            FieldPosition::ShortFielder => "Short Fielder",
            FieldPosition::ExtraPlayer => "Extra Player",
        }
    }

    /// Conventional scorekeeping abbreviation.
    pub fn abbreviation(&self) -> &'static str {
        match self {
            FieldPosition::Pitcher => "P",
            FieldPosition::Catcher => "C",
            FieldPosition::FirstBase => "1B",
            FieldPosition::SecondBase => "2B",
            FieldPosition::ThirdBase => "3B",
            FieldPosition::Shortstop => "SS",
            FieldPosition::LeftField => "LF",
            FieldPosition::CenterField => "CF",
            FieldPosition::RightField => "RF",
            FieldPosition::ShortFielder => "SF",
            FieldPosition::ExtraPlayer => "EP",
        }
    }

    /// Returns true for positions that take the field (everything except EP).
    pub fn is_defensive(&self) -> bool {
        !matches!(self, FieldPosition::ExtraPlayer)
    }
}

impl std::fmt::Display for FieldPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extra_player_is_not_defensive() {
        assert!(!FieldPosition::ExtraPlayer.is_defensive());
        assert!(FieldPosition::ShortFielder.is_defensive());
        assert!(FieldPosition::Pitcher.is_defensive());
    }

    #[test]
    fn abbreviations() {
        assert_eq!(FieldPosition::Shortstop.abbreviation(), "SS");
        assert_eq!(FieldPosition::ShortFielder.abbreviation(), "SF");
        assert_eq!(FieldPosition::ExtraPlayer.abbreviation(), "EP");
    }

    #[test]
    fn serde_uses_snake_case() {
        assert_eq!(
            serde_json::to_string(&FieldPosition::ShortFielder).unwrap(),
            "\"short_fielder\""
        );
    }
}
