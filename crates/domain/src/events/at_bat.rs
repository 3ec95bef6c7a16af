//! Plate appearance event

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::{GameId, PlayerId};
use crate::lineup::BattingSlot;
use crate::value_objects::{AtBatResult, InningHalf};

/// A plate appearance resolved.
///
/// Descriptive: it classifies the at-bat and advances the batting order.
/// Base-occupancy and outs are carried by the `RunnerAdvanced` events
/// recorded in the same action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "AtBatCompletedWire")]
pub struct AtBatCompleted {
    game_id: GameId,
    batter_id: PlayerId,
    batting_slot: BattingSlot,
    result: AtBatResult,
    inning: u8,
    half: InningHalf,
    occurred_at: DateTime<Utc>,
}

impl AtBatCompleted {
    /// Create a validated plate-appearance fact.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` for inning zero.
    pub fn new(
        game_id: GameId,
        batter_id: PlayerId,
        batting_slot: BattingSlot,
        result: AtBatResult,
        inning: u8,
        half: InningHalf,
        occurred_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        if inning == 0 {
            return Err(DomainError::validation("Inning must be at least 1"));
        }
        Ok(Self {
            game_id,
            batter_id,
            batting_slot,
            result,
            inning,
            half,
            occurred_at,
        })
    }

    pub fn game_id(&self) -> &GameId {
        &self.game_id
    }

    pub fn batter_id(&self) -> &PlayerId {
        &self.batter_id
    }

    pub fn batting_slot(&self) -> BattingSlot {
        self.batting_slot
    }

    pub fn result(&self) -> AtBatResult {
        self.result
    }

    pub fn inning(&self) -> u8 {
        self.inning
    }

    pub fn half(&self) -> InningHalf {
        self.half
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AtBatCompletedWire {
    game_id: GameId,
    batter_id: PlayerId,
    batting_slot: BattingSlot,
    result: AtBatResult,
    inning: u8,
    half: InningHalf,
    occurred_at: DateTime<Utc>,
}

impl TryFrom<AtBatCompletedWire> for AtBatCompleted {
    type Error = DomainError;

    fn try_from(wire: AtBatCompletedWire) -> Result<Self, Self::Error> {
        Self::new(
            wire.game_id,
            wire.batter_id,
            wire.batting_slot,
            wire.result,
            wire.inning,
            wire.half,
            wire.occurred_at,
        )
    }
}
