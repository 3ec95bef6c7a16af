//! Lineup and roster model
//!
//! Tracks which player occupies which batting slot and field position, and
//! enforces the lineup-wide invariants: unique slot numbers, unique player
//! IDs, unique jersey numbers. A lineup is *valid* once it also has at least
//! nine occupied slots (slow-pitch allows a tenth short fielder plus extra
//! players batting without fielding).
//!
//! Two construction styles exist behind the [`TeamStrategy`] trait, selected
//! at construction time: [`SimpleTeamStrategy`] replaces the whole lineup in
//! one call, [`DetailedTeamStrategy`] manages slots incrementally.

mod detailed;
mod player;
mod simple;

pub use detailed::DetailedTeamStrategy;
pub use player::{BattingSlot, BattingSlotState, TeamPlayer};
pub use simple::SimpleTeamStrategy;

use crate::error::DomainError;
use crate::value_objects::FieldPosition;

/// Minimum occupied slots for a legal lineup
pub const MIN_LINEUP_SIZE: usize = 9;

/// The capability contract shared by both lineup construction styles.
///
/// Callers pick a concrete strategy when a team is configured; no runtime
/// capability probing.
pub trait TeamStrategy {
    /// True when the lineup satisfies all invariants and has at least
    /// [`MIN_LINEUP_SIZE`] occupied slots.
    fn is_lineup_valid(&self) -> bool;

    /// The occupied slots in batting order.
    fn current_lineup(&self) -> Vec<BattingSlotState>;

    /// Replace the occupant of `slot`, preserving every other slot.
    ///
    /// Returns the outgoing player.
    ///
    /// # Errors
    ///
    /// Returns a `DomainError` when the slot is empty or the incoming player
    /// would duplicate a player ID or jersey number elsewhere in the lineup.
    fn substitute_player(
        &mut self,
        slot: BattingSlot,
        incoming: TeamPlayer,
        position: FieldPosition,
    ) -> Result<TeamPlayer, DomainError>;
}

/// Check slot/player/jersey uniqueness across a whole lineup.
///
/// Reports the first collision with both slot numbers so a UI can point at
/// the offending rows.
pub fn ensure_unique(slots: &[BattingSlotState]) -> Result<(), DomainError> {
    for (i, slot) in slots.iter().enumerate() {
        for other in &slots[i + 1..] {
            if slot.slot_number() == other.slot_number() {
                return Err(DomainError::validation(format!(
                    "Batting slot {} appears more than once in the lineup",
                    slot.slot_number()
                )));
            }
            ensure_players_distinct(slot, other)?;
        }
    }
    Ok(())
}

/// Check that the incoming occupant of `slot` collides with no other slot.
fn ensure_players_distinct(
    slot: &BattingSlotState,
    other: &BattingSlotState,
) -> Result<(), DomainError> {
    if slot.current_player().player_id() == other.current_player().player_id() {
        return Err(DomainError::DuplicatePlayer {
            player_name: slot.current_player().name().to_string(),
            first_slot: slot.slot_number().number(),
            second_slot: other.slot_number().number(),
        });
    }
    if slot.current_player().jersey_number() == other.current_player().jersey_number() {
        return Err(DomainError::DuplicateJersey {
            jersey: slot.current_player().jersey_number().to_string(),
            first_slot: slot.slot_number().number(),
            second_slot: other.slot_number().number(),
        });
    }
    Ok(())
}

/// Check that `incoming` at `slot` conflicts with none of `others`.
pub(crate) fn ensure_no_conflict<'a>(
    others: impl Iterator<Item = &'a BattingSlotState>,
    slot: BattingSlot,
    incoming: &TeamPlayer,
) -> Result<(), DomainError> {
    for other in others {
        if other.slot_number() == slot {
            continue;
        }
        if other.current_player().player_id() == incoming.player_id() {
            return Err(DomainError::DuplicatePlayer {
                player_name: incoming.name().to_string(),
                first_slot: slot.number(),
                second_slot: other.slot_number().number(),
            });
        }
        if other.current_player().jersey_number() == incoming.jersey_number() {
            return Err(DomainError::DuplicateJersey {
                jersey: incoming.jersey_number().to_string(),
                first_slot: slot.number(),
                second_slot: other.slot_number().number(),
            });
        }
    }
    Ok(())
}

/// Whole-lineup validity: uniqueness plus the minimum slot count.
pub fn is_valid_lineup(slots: &[BattingSlotState]) -> bool {
    slots.len() >= MIN_LINEUP_SIZE && ensure_unique(slots).is_ok()
}
