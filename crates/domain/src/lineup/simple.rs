//! Whole-lineup replacement strategy
//!
//! Suits the quick-setup flow: the caller hands over a complete lineup in
//! one call, typically straight out of the setup wizard.

use crate::error::DomainError;
use crate::lineup::{
    ensure_no_conflict, ensure_unique, is_valid_lineup, BattingSlot, BattingSlotState, TeamPlayer,
    TeamStrategy,
};
use crate::value_objects::FieldPosition;

/// Lineup strategy that swaps the entire lineup at once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimpleTeamStrategy {
    slots: Vec<BattingSlotState>,
}

impl SimpleTeamStrategy {
    /// An empty lineup (invalid until set).
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entire lineup.
    ///
    /// Slots are stored in batting order regardless of input order.
    ///
    /// # Errors
    ///
    /// Returns a `DomainError` if the proposed lineup duplicates a slot
    /// number, player ID, or jersey number. The current lineup is untouched
    /// on failure.
    pub fn set_lineup(&mut self, mut slots: Vec<BattingSlotState>) -> Result<(), DomainError> {
        ensure_unique(&slots)?;
        slots.sort_by_key(|s| s.slot_number());
        self.slots = slots;
        Ok(())
    }

    /// Build a strategy from a complete lineup.
    pub fn from_lineup(slots: Vec<BattingSlotState>) -> Result<Self, DomainError> {
        let mut strategy = Self::new();
        strategy.set_lineup(slots)?;
        Ok(strategy)
    }
}

impl TeamStrategy for SimpleTeamStrategy {
    fn is_lineup_valid(&self) -> bool {
        is_valid_lineup(&self.slots)
    }

    fn current_lineup(&self) -> Vec<BattingSlotState> {
        self.slots.clone()
    }

    fn substitute_player(
        &mut self,
        slot: BattingSlot,
        incoming: TeamPlayer,
        position: FieldPosition,
    ) -> Result<TeamPlayer, DomainError> {
        ensure_no_conflict(self.slots.iter(), slot, &incoming)?;
        let state = self
            .slots
            .iter_mut()
            .find(|s| s.slot_number() == slot)
            .ok_or_else(|| {
                DomainError::validation(format!("Batting slot {slot} is not part of the lineup"))
            })?;
        let outgoing = state.current_player().clone();
        *state = state.with_player(incoming, position);
        Ok(outgoing)
    }
}
