//! Why a runner advanced
//!
//! The reason is descriptive only: any reason is accepted with any legal
//! base transition. A walk paired with an advance to third is a legitimate
//! scorekeeping entry (walk plus defensive indifference), so no cross-check
//! against the from/to pair is performed.

use serde::{Deserialize, Serialize};

/// The cause recorded for a runner advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvanceReason {
    Hit,
    Walk,
    Sacrifice,
    StolenBase,
    FieldersChoice,
    Error,
    WildPitch,
    Balk,
}

impl AdvanceReason {
    pub fn display_name(&self) -> &'static str {
        match self {
            AdvanceReason::Hit => "Hit",
            AdvanceReason::Walk => "Walk",
            AdvanceReason::Sacrifice => "Sacrifice",
            AdvanceReason::StolenBase => "Stolen Base",
            AdvanceReason::FieldersChoice => "Fielder's Choice",
            AdvanceReason::Error => "Error",
            AdvanceReason::WildPitch => "Wild Pitch",
            AdvanceReason::Balk => "Balk",
        }
    }
}

impl std::fmt::Display for AdvanceReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
