//! Runner advancement event
//!
//! The most heavily validated fact in the log: a runner (or the batter)
//! moved along the base path. Construction rejects same-base and backward
//! movement so an illegal advance can never enter the log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::{GameId, PlayerId};
use crate::value_objects::{AdvanceDestination, AdvanceReason, Base};

/// A runner moved from one spot on the base path to another.
///
/// # Invariants
///
/// - `from == None` means the batter (no prior base)
/// - When both ends are bases: never the same base, never backward
/// - `reason` is descriptive and is not cross-checked against the path
///   (a walk combined with a defensive-indifference advance to third is a
///   legitimate entry)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RunnerAdvancedWire")]
pub struct RunnerAdvanced {
    game_id: GameId,
    runner_id: PlayerId,
    from: Option<Base>,
    to: AdvanceDestination,
    reason: AdvanceReason,
    occurred_at: DateTime<Utc>,
}

impl RunnerAdvanced {
    /// Create a validated advancement fact.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` for a same-base advance or backward
    /// movement along the base path.
    pub fn new(
        game_id: GameId,
        runner_id: PlayerId,
        from: Option<Base>,
        to: AdvanceDestination,
        reason: AdvanceReason,
        occurred_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        if let (Some(start), Some(dest)) = (from, to.as_base()) {
            if dest == start {
                return Err(DomainError::validation(format!(
                    "Runner cannot advance from {start} to the same base"
                )));
            }
            if dest.ordinal() < start.ordinal() {
                return Err(DomainError::validation(format!(
                    "Runner cannot advance backward from {start} to {dest}"
                )));
            }
        }
        Ok(Self {
            game_id,
            runner_id,
            from,
            to,
            reason,
            occurred_at,
        })
    }

    /// The game this advance belongs to.
    pub fn game_id(&self) -> &GameId {
        &self.game_id
    }

    /// The runner who moved (the batter when `from` is `None`).
    pub fn runner_id(&self) -> &PlayerId {
        &self.runner_id
    }

    /// The base the runner left, or `None` for the batter.
    pub fn from(&self) -> Option<Base> {
        self.from
    }

    /// Where the runner ended up.
    pub fn to(&self) -> AdvanceDestination {
        self.to
    }

    /// Why the runner moved.
    pub fn reason(&self) -> AdvanceReason {
        self.reason
    }

    /// When the advance was recorded.
    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}

/// Wire shape: deserialization re-runs the constructor so an illegal
/// advance cannot be smuggled in through storage.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RunnerAdvancedWire {
    game_id: GameId,
    runner_id: PlayerId,
    from: Option<Base>,
    to: AdvanceDestination,
    reason: AdvanceReason,
    occurred_at: DateTime<Utc>,
}

impl TryFrom<RunnerAdvancedWire> for RunnerAdvanced {
    type Error = DomainError;

    fn try_from(wire: RunnerAdvancedWire) -> Result<Self, Self::Error> {
        Self::new(
            wire.game_id,
            wire.runner_id,
            wire.from,
            wire.to,
            wire.reason,
            wire.occurred_at,
        )
    }
}
