//! Top/bottom half of an inning

use serde::{Deserialize, Serialize};

use crate::value_objects::TeamSide;

/// Which half of the inning is being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InningHalf {
    #[default]
    Top,
    Bottom,
}

impl InningHalf {
    pub fn display_name(&self) -> &'static str {
        match self {
            InningHalf::Top => "Top",
            InningHalf::Bottom => "Bottom",
        }
    }

    /// The side at bat during this half (away bats first).
    pub fn batting_side(&self) -> TeamSide {
        match self {
            InningHalf::Top => TeamSide::Away,
            InningHalf::Bottom => TeamSide::Home,
        }
    }

    /// The half that follows this one.
    pub fn next(&self) -> InningHalf {
        match self {
            InningHalf::Top => InningHalf::Bottom,
            InningHalf::Bottom => InningHalf::Top,
        }
    }
}

impl std::fmt::Display for InningHalf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
