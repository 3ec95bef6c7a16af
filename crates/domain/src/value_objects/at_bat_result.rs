//! At-bat result classification
//!
//! The wizard-level outcome of a plate appearance. Runner movement is
//! recorded separately as `RunnerAdvanced` events; the result here drives
//! the batting order and the box score, not base-occupancy.

use serde::{Deserialize, Serialize};

/// How a plate appearance resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AtBatResult {
    Single,
    Double,
    Triple,
    HomeRun,
    Walk,
    Strikeout,
    GroundOut,
    FlyOut,
    SacrificeFly,
    FieldersChoice,
    Error,
    DoublePlay,
    TriplePlay,
}

impl AtBatResult {
    pub fn display_name(&self) -> &'static str {
        match self {
            AtBatResult::Single => "Single",
            AtBatResult::Double => "Double",
            AtBatResult::Triple => "Triple",
            AtBatResult::HomeRun => "Home Run",
            AtBatResult::Walk => "Walk",
            AtBatResult::Strikeout => "Strikeout",
            AtBatResult::GroundOut => "Ground Out",
            AtBatResult::FlyOut => "Fly Out",
            AtBatResult::SacrificeFly => "Sacrifice Fly",
            AtBatResult::FieldersChoice => "Fielder's Choice",
            AtBatResult::Error => "Error",
            AtBatResult::DoublePlay => "Double Play",
            AtBatResult::TriplePlay => "Triple Play",
        }
    }

    /// Returns true for results that count as base hits.
    pub fn is_hit(&self) -> bool {
        matches!(
            self,
            AtBatResult::Single | AtBatResult::Double | AtBatResult::Triple | AtBatResult::HomeRun
        )
    }

    /// Returns true for results that retire the batter.
    pub fn is_out(&self) -> bool {
        matches!(
            self,
            AtBatResult::Strikeout
                | AtBatResult::GroundOut
                | AtBatResult::FlyOut
                | AtBatResult::SacrificeFly
                | AtBatResult::DoublePlay
                | AtBatResult::TriplePlay
        )
    }
}

impl std::fmt::Display for AtBatResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hits_are_hits() {
        assert!(AtBatResult::Single.is_hit());
        assert!(AtBatResult::HomeRun.is_hit());
        assert!(!AtBatResult::Walk.is_hit());
        assert!(!AtBatResult::Error.is_hit());
    }

    #[test]
    fn outs_retire_the_batter() {
        assert!(AtBatResult::Strikeout.is_out());
        assert!(AtBatResult::SacrificeFly.is_out());
        assert!(!AtBatResult::Walk.is_out());
        assert!(!AtBatResult::FieldersChoice.is_out());
    }
}
