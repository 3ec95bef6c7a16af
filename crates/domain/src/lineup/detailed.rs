//! Incremental per-slot lineup strategy
//!
//! Suits the detailed setup flow: slots are filled one at a time, players
//! change defensive positions mid-game, and substitutions are tracked slot
//! by slot. Every mutation re-checks the lineup-wide invariants before it
//! lands.

use std::collections::BTreeMap;

use crate::error::DomainError;
use crate::lineup::{
    ensure_no_conflict, is_valid_lineup, BattingSlot, BattingSlotState, TeamPlayer, TeamStrategy,
};
use crate::value_objects::FieldPosition;

/// Lineup strategy that manages batting slots individually.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailedTeamStrategy {
    slots: BTreeMap<BattingSlot, BattingSlotState>,
}

impl DetailedTeamStrategy {
    /// An empty lineup (invalid until at least nine slots are filled).
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a player to an empty batting slot.
    ///
    /// # Errors
    ///
    /// Returns a `DomainError` if the slot is already occupied or the player
    /// duplicates a player ID or jersey number elsewhere in the lineup.
    pub fn add_player(
        &mut self,
        player: TeamPlayer,
        slot: BattingSlot,
        position: FieldPosition,
    ) -> Result<(), DomainError> {
        if let Some(existing) = self.slots.get(&slot) {
            return Err(DomainError::SlotOccupied {
                slot: slot.number(),
                player_name: existing.current_player().name().to_string(),
            });
        }
        ensure_no_conflict(self.slots.values(), slot, &player)?;
        self.slots
            .insert(slot, BattingSlotState::new(slot, player, position));
        Ok(())
    }

    /// Move the occupant of `slot` to a new defensive position.
    ///
    /// # Errors
    ///
    /// Returns a `DomainError::Validation` if the slot is empty.
    pub fn change_player_position(
        &mut self,
        slot: BattingSlot,
        position: FieldPosition,
    ) -> Result<(), DomainError> {
        let state = self.slots.get_mut(&slot).ok_or_else(|| {
            DomainError::validation(format!("Batting slot {slot} has no player assigned"))
        })?;
        *state = state.with_position(position);
        Ok(())
    }

    /// The occupant of a slot, if any.
    pub fn player_in_slot(&self, slot: BattingSlot) -> Option<&BattingSlotState> {
        self.slots.get(&slot)
    }
}

impl TeamStrategy for DetailedTeamStrategy {
    fn is_lineup_valid(&self) -> bool {
        let lineup: Vec<BattingSlotState> = self.slots.values().cloned().collect();
        is_valid_lineup(&lineup)
    }

    fn current_lineup(&self) -> Vec<BattingSlotState> {
        // BTreeMap iterates in batting order
        self.slots.values().cloned().collect()
    }

    fn substitute_player(
        &mut self,
        slot: BattingSlot,
        incoming: TeamPlayer,
        position: FieldPosition,
    ) -> Result<TeamPlayer, DomainError> {
        ensure_no_conflict(self.slots.values(), slot, &incoming)?;
        let state = self.slots.get_mut(&slot).ok_or_else(|| {
            DomainError::validation(format!("Batting slot {slot} has no player assigned"))
        })?;
        let outgoing = state.current_player().clone();
        *state = state.with_player(incoming, position);
        Ok(outgoing)
    }
}
