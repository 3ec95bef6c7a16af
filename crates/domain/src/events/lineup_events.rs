//! Lineup mutation events

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::{GameId, PlayerId};
use crate::lineup::{ensure_unique, BattingSlot, BattingSlotState, TeamPlayer};
use crate::value_objects::{FieldPosition, TeamSide};

// ============================================================================
// LineupConfigured
// ============================================================================

/// A team's batting order was set (initial lineup or wizard setup).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "LineupConfiguredWire")]
pub struct LineupConfigured {
    game_id: GameId,
    team: TeamSide,
    slots: Vec<BattingSlotState>,
    occurred_at: DateTime<Utc>,
}

impl LineupConfigured {
    /// Create a validated lineup-configuration fact.
    ///
    /// # Errors
    ///
    /// Returns a `DomainError` for an empty lineup or any slot/player/jersey
    /// collision.
    pub fn new(
        game_id: GameId,
        team: TeamSide,
        slots: Vec<BattingSlotState>,
        occurred_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        if slots.is_empty() {
            return Err(DomainError::validation(
                "Lineup must contain at least one batting slot",
            ));
        }
        ensure_unique(&slots)?;
        Ok(Self {
            game_id,
            team,
            slots,
            occurred_at,
        })
    }

    pub fn game_id(&self) -> &GameId {
        &self.game_id
    }

    pub fn team(&self) -> TeamSide {
        self.team
    }

    pub fn slots(&self) -> &[BattingSlotState] {
        &self.slots
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LineupConfiguredWire {
    game_id: GameId,
    team: TeamSide,
    slots: Vec<BattingSlotState>,
    occurred_at: DateTime<Utc>,
}

impl TryFrom<LineupConfiguredWire> for LineupConfigured {
    type Error = DomainError;

    fn try_from(wire: LineupConfiguredWire) -> Result<Self, Self::Error> {
        Self::new(wire.game_id, wire.team, wire.slots, wire.occurred_at)
    }
}

// ============================================================================
// SubstitutionMade
// ============================================================================

/// A new player took over a batting slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "SubstitutionMadeWire")]
pub struct SubstitutionMade {
    game_id: GameId,
    team: TeamSide,
    batting_slot: BattingSlot,
    outgoing_player: PlayerId,
    incoming_player: TeamPlayer,
    field_position: FieldPosition,
    occurred_at: DateTime<Utc>,
}

impl SubstitutionMade {
    /// Create a validated substitution fact.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when a player is "substituted" for
    /// themselves.
    pub fn new(
        game_id: GameId,
        team: TeamSide,
        batting_slot: BattingSlot,
        outgoing_player: PlayerId,
        incoming_player: TeamPlayer,
        field_position: FieldPosition,
        occurred_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        if &outgoing_player == incoming_player.player_id() {
            return Err(DomainError::validation(format!(
                "Player {} cannot be substituted for themselves",
                incoming_player.name()
            )));
        }
        Ok(Self {
            game_id,
            team,
            batting_slot,
            outgoing_player,
            incoming_player,
            field_position,
            occurred_at,
        })
    }

    pub fn game_id(&self) -> &GameId {
        &self.game_id
    }

    pub fn team(&self) -> TeamSide {
        self.team
    }

    pub fn batting_slot(&self) -> BattingSlot {
        self.batting_slot
    }

    pub fn outgoing_player(&self) -> &PlayerId {
        &self.outgoing_player
    }

    pub fn incoming_player(&self) -> &TeamPlayer {
        &self.incoming_player
    }

    pub fn field_position(&self) -> FieldPosition {
        self.field_position
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubstitutionMadeWire {
    game_id: GameId,
    team: TeamSide,
    batting_slot: BattingSlot,
    outgoing_player: PlayerId,
    incoming_player: TeamPlayer,
    field_position: FieldPosition,
    occurred_at: DateTime<Utc>,
}

impl TryFrom<SubstitutionMadeWire> for SubstitutionMade {
    type Error = DomainError;

    fn try_from(wire: SubstitutionMadeWire) -> Result<Self, Self::Error> {
        Self::new(
            wire.game_id,
            wire.team,
            wire.batting_slot,
            wire.outgoing_player,
            wire.incoming_player,
            wire.field_position,
            wire.occurred_at,
        )
    }
}

// ============================================================================
// FielderPositionChanged
// ============================================================================

/// A player moved to a new defensive position without leaving the order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FielderPositionChanged {
    game_id: GameId,
    team: TeamSide,
    batting_slot: BattingSlot,
    new_position: FieldPosition,
    occurred_at: DateTime<Utc>,
}

impl FielderPositionChanged {
    pub fn new(
        game_id: GameId,
        team: TeamSide,
        batting_slot: BattingSlot,
        new_position: FieldPosition,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            game_id,
            team,
            batting_slot,
            new_position,
            occurred_at,
        }
    }

    pub fn game_id(&self) -> &GameId {
        &self.game_id
    }

    pub fn team(&self) -> TeamSide {
        self.team
    }

    pub fn batting_slot(&self) -> BattingSlot {
        self.batting_slot
    }

    pub fn new_position(&self) -> FieldPosition {
        self.new_position
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lineup::test_support::{nine_player_lineup, numbered_player, numbered_slot};
    use chrono::TimeZone;

    fn when() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 14, 18, 0, 0).unwrap()
    }

    mod lineup_configured {
        use super::*;

        #[test]
        fn valid_lineup_accepted() {
            let event = LineupConfigured::new(
                GameId::new("game-1").unwrap(),
                TeamSide::Home,
                nine_player_lineup(),
                when(),
            )
            .unwrap();
            assert_eq!(event.slots().len(), 9);
        }

        #[test]
        fn empty_lineup_rejected() {
            let result = LineupConfigured::new(
                GameId::new("game-1").unwrap(),
                TeamSide::Home,
                vec![],
                when(),
            );
            assert!(result.is_err());
        }

        #[test]
        fn duplicate_slot_rejected() {
            let mut slots = nine_player_lineup();
            slots.push(numbered_slot(9));
            let result = LineupConfigured::new(
                GameId::new("game-1").unwrap(),
                TeamSide::Away,
                slots,
                when(),
            );
            assert!(result.is_err());
        }
    }

    mod substitution_made {
        use super::*;

        #[test]
        fn valid_substitution() {
            let event = SubstitutionMade::new(
                GameId::new("game-1").unwrap(),
                TeamSide::Away,
                BattingSlot::new(5).unwrap(),
                numbered_player(5).player_id().clone(),
                numbered_player(15),
                FieldPosition::ThirdBase,
                when(),
            )
            .unwrap();
            assert_eq!(event.batting_slot().number(), 5);
        }

        #[test]
        fn self_substitution_rejected() {
            let incoming = numbered_player(5);
            let result = SubstitutionMade::new(
                GameId::new("game-1").unwrap(),
                TeamSide::Away,
                BattingSlot::new(5).unwrap(),
                incoming.player_id().clone(),
                incoming,
                FieldPosition::ThirdBase,
                when(),
            );
            assert!(result.is_err());
            assert!(result.unwrap_err().to_string().contains("themselves"));
        }
    }
}
