//! Batting slots and the players that occupy them

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;
use crate::ids::PlayerId;
use crate::value_objects::{FieldPosition, JerseyNumber, PlayerName};

/// Smallest legal batting order position
const MIN_BATTING_SLOT: u8 = 1;

/// Largest legal batting order position (rec leagues bat everyone)
const MAX_BATTING_SLOT: u8 = 20;

// ============================================================================
// BattingSlot
// ============================================================================

/// A position in the batting order (1..=20), independent of the player's
/// defensive assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct BattingSlot(u8);

impl BattingSlot {
    /// Create a validated batting slot number.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when outside 1..=20.
    pub fn new(number: u8) -> Result<Self, DomainError> {
        if !(MIN_BATTING_SLOT..=MAX_BATTING_SLOT).contains(&number) {
            return Err(DomainError::validation(format!(
                "Batting slot must be between {MIN_BATTING_SLOT} and {MAX_BATTING_SLOT}, got {number}"
            )));
        }
        Ok(Self(number))
    }

    /// Returns the slot number.
    pub fn number(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for BattingSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for BattingSlot {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BattingSlot> for u8 {
    fn from(slot: BattingSlot) -> u8 {
        slot.0
    }
}

// ============================================================================
// TeamPlayer
// ============================================================================

/// A rostered player: identity, display name, and jersey number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamPlayer {
    player_id: PlayerId,
    name: PlayerName,
    jersey_number: JerseyNumber,
}

impl TeamPlayer {
    /// Assemble a player from pre-validated parts.
    pub fn new(player_id: PlayerId, name: PlayerName, jersey_number: JerseyNumber) -> Self {
        Self {
            player_id,
            name,
            jersey_number,
        }
    }

    /// Returns the player's identifier.
    pub fn player_id(&self) -> &PlayerId {
        &self.player_id
    }

    /// Returns the player's name.
    pub fn name(&self) -> &PlayerName {
        &self.name
    }

    /// Returns the player's jersey number.
    pub fn jersey_number(&self) -> &JerseyNumber {
        &self.jersey_number
    }
}

// ============================================================================
// BattingSlotState
// ============================================================================

/// The current occupant of one batting slot: who bats there and where they
/// currently play in the field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattingSlotState {
    slot_number: BattingSlot,
    current_player: TeamPlayer,
    current_position: FieldPosition,
}

impl BattingSlotState {
    /// Create a slot state from pre-validated parts.
    pub fn new(
        slot_number: BattingSlot,
        current_player: TeamPlayer,
        current_position: FieldPosition,
    ) -> Self {
        Self {
            slot_number,
            current_player,
            current_position,
        }
    }

    /// Returns the batting order position.
    pub fn slot_number(&self) -> BattingSlot {
        self.slot_number
    }

    /// Returns the player currently batting in this slot.
    pub fn current_player(&self) -> &TeamPlayer {
        &self.current_player
    }

    /// Returns the player's current defensive assignment.
    pub fn current_position(&self) -> FieldPosition {
        self.current_position
    }

    /// Returns a copy with a new occupant; other slots are unaffected.
    pub fn with_player(&self, player: TeamPlayer, position: FieldPosition) -> Self {
        Self {
            slot_number: self.slot_number,
            current_player: player,
            current_position: position,
        }
    }

    /// Returns a copy with a new defensive assignment, same player.
    pub fn with_position(&self, position: FieldPosition) -> Self {
        Self {
            slot_number: self.slot_number,
            current_player: self.current_player.clone(),
            current_position: position,
        }
    }
}
