//! Undo/redo history
//!
//! An append-only action log plus a position cursor. Each recorded action
//! bundles the 1+ events one user gesture produced (an at-bat with several
//! runner advances is a single action), so undo never partially unwinds a
//! gesture. Undo moves the cursor backward, redo forward; recording a new
//! action discards the stale suffix beyond the cursor, which is the only
//! way history is ever truncated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::events::GameEvent;

// ============================================================================
// ActionKind
// ============================================================================

/// The user gesture an action corresponds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    GameStart,
    AtBat,
    Substitution,
    PositionChange,
    /// A single event hydrated from cold storage, where gesture grouping
    /// is no longer known.
    Imported,
}

impl ActionKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            ActionKind::GameStart => "Game Start",
            ActionKind::AtBat => "At-Bat",
            ActionKind::Substitution => "Substitution",
            ActionKind::PositionChange => "Position Change",
            ActionKind::Imported => "Imported",
        }
    }
}

// ============================================================================
// RecordedAction
// ============================================================================

/// One atomic unit of history: every event a single gesture produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordedAction {
    kind: ActionKind,
    events: Vec<GameEvent>,
    recorded_at: DateTime<Utc>,
}

impl RecordedAction {
    /// Bundle events into one undoable action.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` for an empty event list.
    pub fn new(
        kind: ActionKind,
        events: Vec<GameEvent>,
        recorded_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        if events.is_empty() {
            return Err(DomainError::validation(
                "An action must contain at least one event",
            ));
        }
        Ok(Self {
            kind,
            events,
            recorded_at,
        })
    }

    pub fn kind(&self) -> ActionKind {
        self.kind
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }
}

// ============================================================================
// Navigation results
// ============================================================================

/// Outcome of an undo/redo request. Unavailable navigation is a structured
/// no-op, never an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationOutcome {
    pub success: bool,
    pub reason: Option<String>,
}

impl NavigationOutcome {
    fn applied() -> Self {
        Self {
            success: true,
            reason: None,
        }
    }

    fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            success: false,
            reason: Some(reason.into()),
        }
    }
}

/// Derived undo-stack metadata; recomputed on every query, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryInfo {
    pub can_undo: bool,
    pub can_redo: bool,
    pub history_position: usize,
    pub total_actions: usize,
}

// ============================================================================
// GameHistory
// ============================================================================

/// The action log and its cursor.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GameHistory {
    actions: Vec<RecordedAction>,
    position: usize,
}

impl GameHistory {
    /// An empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new action at the cursor.
    ///
    /// Any actions beyond the cursor (undone but not yet redone) are
    /// discarded first: after a new action, redo is unavailable and the
    /// discarded suffix can never reappear.
    pub fn record(&mut self, action: RecordedAction) {
        self.actions.truncate(self.position);
        self.actions.push(action);
        self.position = self.actions.len();
    }

    /// Move the cursor back `count` actions.
    ///
    /// The request is all-or-nothing: asking for more actions than are
    /// available is reported as unavailable, not partially applied.
    pub fn undo(&mut self, count: usize) -> NavigationOutcome {
        if count == 0 {
            return NavigationOutcome::unavailable("Undo count must be at least 1");
        }
        if self.position == 0 {
            return NavigationOutcome::unavailable("Nothing to undo");
        }
        if count > self.position {
            return NavigationOutcome::unavailable(format!(
                "Cannot undo {count} actions; only {} available",
                self.position
            ));
        }
        self.position -= count;
        NavigationOutcome::applied()
    }

    /// Move the cursor forward `count` actions.
    ///
    /// Only possible when a previous undo left actions beyond the cursor
    /// and no new action has been recorded since.
    pub fn redo(&mut self, count: usize) -> NavigationOutcome {
        if count == 0 {
            return NavigationOutcome::unavailable("Redo count must be at least 1");
        }
        let available = self.actions.len() - self.position;
        if available == 0 {
            return NavigationOutcome::unavailable("Nothing to redo");
        }
        if count > available {
            return NavigationOutcome::unavailable(format!(
                "Cannot redo {count} actions; only {available} available"
            ));
        }
        self.position += count;
        NavigationOutcome::applied()
    }

    /// The ordered event prefix up to the cursor - the input to the fold.
    pub fn events(&self) -> impl Iterator<Item = &GameEvent> {
        self.actions[..self.position]
            .iter()
            .flat_map(|action| action.events().iter())
    }

    /// Number of events up to the cursor (the persisted log length after a
    /// truncate-on-new-action).
    pub fn event_count(&self) -> usize {
        self.actions[..self.position]
            .iter()
            .map(|action| action.events().len())
            .sum()
    }

    /// Derived undo-stack metadata.
    pub fn info(&self) -> HistoryInfo {
        HistoryInfo {
            can_undo: self.position > 0,
            can_redo: self.position < self.actions.len(),
            history_position: self.position,
            total_actions: self.actions.len(),
        }
    }

    /// The actions currently reachable (including any redoable suffix).
    pub fn actions(&self) -> &[RecordedAction] {
        &self.actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::RunnerAdvanced;
    use crate::game::state::GameState;
    use crate::ids::{GameId, PlayerId};
    use crate::value_objects::{AdvanceDestination, AdvanceReason, Base};
    use chrono::TimeZone;

    fn when() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 14, 19, 0, 0).unwrap()
    }

    fn advance_action(runner: &str, to: AdvanceDestination) -> RecordedAction {
        let event = RunnerAdvanced::new(
            GameId::new("game-1").unwrap(),
            PlayerId::new(runner).unwrap(),
            None,
            to,
            AdvanceReason::Hit,
            when(),
        )
        .unwrap();
        RecordedAction::new(ActionKind::AtBat, vec![event.into()], when()).unwrap()
    }

    fn multi_event_action() -> RecordedAction {
        let batter = RunnerAdvanced::new(
            GameId::new("game-1").unwrap(),
            PlayerId::new("batter").unwrap(),
            None,
            AdvanceDestination::First,
            AdvanceReason::Hit,
            when(),
        )
        .unwrap();
        let runner = RunnerAdvanced::new(
            GameId::new("game-1").unwrap(),
            PlayerId::new("lead-runner").unwrap(),
            Some(Base::First),
            AdvanceDestination::Third,
            AdvanceReason::Hit,
            when(),
        )
        .unwrap();
        RecordedAction::new(
            ActionKind::AtBat,
            vec![batter.into(), runner.into()],
            when(),
        )
        .unwrap()
    }

    #[test]
    fn empty_action_rejected() {
        let result = RecordedAction::new(ActionKind::AtBat, vec![], when());
        assert!(result.is_err());
    }

    #[test]
    fn fresh_history_has_nothing_to_navigate() {
        let history = GameHistory::new();
        let info = history.info();
        assert!(!info.can_undo);
        assert!(!info.can_redo);
        assert_eq!(info.history_position, 0);
        assert_eq!(info.total_actions, 0);
    }

    #[test]
    fn record_advances_the_cursor() {
        let mut history = GameHistory::new();
        history.record(advance_action("a", AdvanceDestination::First));
        history.record(advance_action("b", AdvanceDestination::Home));

        let info = history.info();
        assert!(info.can_undo);
        assert!(!info.can_redo);
        assert_eq!(info.history_position, 2);
        assert_eq!(info.total_actions, 2);
        assert_eq!(history.event_count(), 2);
    }

    #[test]
    fn undo_moves_cursor_without_deleting_history() {
        let mut history = GameHistory::new();
        history.record(advance_action("a", AdvanceDestination::First));
        history.record(advance_action("b", AdvanceDestination::Home));

        let outcome = history.undo(1);
        assert!(outcome.success);

        let info = history.info();
        assert_eq!(info.history_position, 1);
        assert_eq!(info.total_actions, 2);
        assert!(info.can_redo);
        assert_eq!(history.events().count(), 1);
    }

    #[test]
    fn undo_on_empty_history_is_a_structured_no_op() {
        let mut history = GameHistory::new();
        let outcome = history.undo(1);
        assert!(!outcome.success);
        assert_eq!(outcome.reason.as_deref(), Some("Nothing to undo"));
    }

    #[test]
    fn undo_more_than_available_is_all_or_nothing() {
        let mut history = GameHistory::new();
        history.record(advance_action("a", AdvanceDestination::First));

        let outcome = history.undo(3);
        assert!(!outcome.success);
        // nothing moved
        assert_eq!(history.info().history_position, 1);
    }

    #[test]
    fn redo_without_prior_undo_is_a_structured_no_op() {
        let mut history = GameHistory::new();
        history.record(advance_action("a", AdvanceDestination::First));

        let outcome = history.redo(1);
        assert!(!outcome.success);
        assert_eq!(outcome.reason.as_deref(), Some("Nothing to redo"));
    }

    #[test]
    fn undo_redo_round_trip_restores_state() {
        let mut history = GameHistory::new();
        history.record(advance_action("a", AdvanceDestination::First));
        history.record(multi_event_action());

        let before = GameState::replay(history.events());

        assert!(history.undo(1).success);
        assert!(history.redo(1).success);

        let after = GameState::replay(history.events());
        assert_eq!(before, after);
        assert_eq!(history.info().history_position, 2);
    }

    #[test]
    fn multi_event_actions_unwind_atomically() {
        let mut history = GameHistory::new();
        history.record(multi_event_action());
        assert_eq!(history.event_count(), 2);

        assert!(history.undo(1).success);
        // both events gone together, never one at a time
        assert_eq!(history.event_count(), 0);
    }

    #[test]
    fn new_action_after_undo_discards_the_stale_suffix() {
        let mut history = GameHistory::new();
        history.record(advance_action("a", AdvanceDestination::First));
        history.record(advance_action("b", AdvanceDestination::Home));

        assert!(history.undo(1).success);
        assert!(history.info().can_redo);

        // a new action replaces the undone future
        history.record(advance_action("c", AdvanceDestination::Out));

        let info = history.info();
        assert!(!info.can_redo);
        assert_eq!(info.total_actions, 2);

        // the discarded suffix never reappears, even after further undos
        assert!(history.undo(2).success);
        assert!(history.redo(2).success);
        let runners: Vec<&str> = history
            .events()
            .map(|e| match e {
                GameEvent::RunnerAdvanced(a) => a.runner_id().as_str(),
                _ => panic!("unexpected event"),
            })
            .collect();
        assert_eq!(runners, vec!["a", "c"]);
    }

    #[test]
    fn undo_count_zero_is_rejected() {
        let mut history = GameHistory::new();
        history.record(advance_action("a", AdvanceDestination::First));
        assert!(!history.undo(0).success);
        assert!(!history.redo(0).success);
    }

    #[test]
    fn multi_step_undo_and_redo() {
        let mut history = GameHistory::new();
        for runner in ["a", "b", "c", "d"] {
            history.record(advance_action(runner, AdvanceDestination::First));
        }

        assert!(history.undo(3).success);
        assert_eq!(history.info().history_position, 1);

        assert!(history.redo(2).success);
        assert_eq!(history.info().history_position, 3);
        assert!(history.info().can_redo);
    }
}
