//! Domain events
//!
//! Immutable facts describing a single state transition. Every event is
//! fully validated at construction - an invalid event can never enter the
//! log. Once appended the log is append-only: undo moves a read pointer,
//! it never edits history.

mod at_bat;
mod game_lifecycle;
mod lineup_events;
mod runner_advanced;

pub use at_bat::AtBatCompleted;
pub use game_lifecycle::{GameCompleted, GameStarted, HalfInningEnded};
pub use lineup_events::{FielderPositionChanged, LineupConfigured, SubstitutionMade};
pub use runner_advanced::RunnerAdvanced;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::GameId;

/// Every fact that can appear in a game's event log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum GameEvent {
    GameStarted(GameStarted),
    LineupConfigured(LineupConfigured),
    AtBatCompleted(AtBatCompleted),
    RunnerAdvanced(RunnerAdvanced),
    SubstitutionMade(SubstitutionMade),
    FielderPositionChanged(FielderPositionChanged),
    HalfInningEnded(HalfInningEnded),
    GameCompleted(GameCompleted),
}

impl GameEvent {
    /// Stable event tag for logs and storage.
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::GameStarted(_) => "game_started",
            Self::LineupConfigured(_) => "lineup_configured",
            Self::AtBatCompleted(_) => "at_bat_completed",
            Self::RunnerAdvanced(_) => "runner_advanced",
            Self::SubstitutionMade(_) => "substitution_made",
            Self::FielderPositionChanged(_) => "fielder_position_changed",
            Self::HalfInningEnded(_) => "half_inning_ended",
            Self::GameCompleted(_) => "game_completed",
        }
    }

    /// The game this event belongs to.
    pub fn game_id(&self) -> &GameId {
        match self {
            Self::GameStarted(e) => e.game_id(),
            Self::LineupConfigured(e) => e.game_id(),
            Self::AtBatCompleted(e) => e.game_id(),
            Self::RunnerAdvanced(e) => e.game_id(),
            Self::SubstitutionMade(e) => e.game_id(),
            Self::FielderPositionChanged(e) => e.game_id(),
            Self::HalfInningEnded(e) => e.game_id(),
            Self::GameCompleted(e) => e.game_id(),
        }
    }

    /// When the event was recorded.
    pub fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            Self::GameStarted(e) => e.occurred_at(),
            Self::LineupConfigured(e) => e.occurred_at(),
            Self::AtBatCompleted(e) => e.occurred_at(),
            Self::RunnerAdvanced(e) => e.occurred_at(),
            Self::SubstitutionMade(e) => e.occurred_at(),
            Self::FielderPositionChanged(e) => e.occurred_at(),
            Self::HalfInningEnded(e) => e.occurred_at(),
            Self::GameCompleted(e) => e.occurred_at(),
        }
    }
}

impl From<GameStarted> for GameEvent {
    fn from(event: GameStarted) -> Self {
        Self::GameStarted(event)
    }
}

impl From<LineupConfigured> for GameEvent {
    fn from(event: LineupConfigured) -> Self {
        Self::LineupConfigured(event)
    }
}

impl From<AtBatCompleted> for GameEvent {
    fn from(event: AtBatCompleted) -> Self {
        Self::AtBatCompleted(event)
    }
}

impl From<RunnerAdvanced> for GameEvent {
    fn from(event: RunnerAdvanced) -> Self {
        Self::RunnerAdvanced(event)
    }
}

impl From<SubstitutionMade> for GameEvent {
    fn from(event: SubstitutionMade) -> Self {
        Self::SubstitutionMade(event)
    }
}

impl From<FielderPositionChanged> for GameEvent {
    fn from(event: FielderPositionChanged) -> Self {
        Self::FielderPositionChanged(event)
    }
}

impl From<HalfInningEnded> for GameEvent {
    fn from(event: HalfInningEnded) -> Self {
        Self::HalfInningEnded(event)
    }
}

impl From<GameCompleted> for GameEvent {
    fn from(event: GameCompleted) -> Self {
        Self::GameCompleted(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::PlayerId;
    use crate::value_objects::{AdvanceDestination, AdvanceReason};
    use chrono::TimeZone;

    fn when() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 14, 19, 0, 0).unwrap()
    }

    #[test]
    fn event_type_tags_are_stable() {
        let advance = RunnerAdvanced::new(
            GameId::new("game-1").unwrap(),
            PlayerId::new("runner-1").unwrap(),
            None,
            AdvanceDestination::First,
            AdvanceReason::Walk,
            when(),
        )
        .unwrap();
        let event: GameEvent = advance.into();
        assert_eq!(event.event_type(), "runner_advanced");
        assert_eq!(event.game_id().as_str(), "game-1");
    }

    #[test]
    fn serde_round_trip_with_type_tag() {
        let advance = RunnerAdvanced::new(
            GameId::new("game-1").unwrap(),
            PlayerId::new("runner-1").unwrap(),
            None,
            AdvanceDestination::Home,
            AdvanceReason::Hit,
            when(),
        )
        .unwrap();
        let event: GameEvent = advance.into();
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"runnerAdvanced\""));
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }
}
