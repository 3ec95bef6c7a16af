//! Per-game session state
//!
//! A session holds the one mutable thing in the system: the action history
//! and its undo cursor. Commands for a game run to completion under the
//! session's lock before the next is admitted (at-most-one-writer); derived
//! state is always refolded from the history, never cached independently.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;

use dugout_domain::{
    ActionKind, DomainError, GameEvent, GameHistory, GameId, GameState, RecordedAction,
};

use crate::infrastructure::ports::GameRecord;

/// One open game: metadata plus the undoable action history.
pub struct GameSession {
    record: GameRecord,
    history: GameHistory,
}

impl GameSession {
    /// A fresh session with no recorded actions.
    pub fn new(record: GameRecord) -> Self {
        Self {
            record,
            history: GameHistory::new(),
        }
    }

    /// Hydrate a session from a cold event stream.
    ///
    /// The persisted log is flat, so gesture grouping is gone: each event
    /// becomes its own action. Undo granularity over hydrated history is
    /// therefore per-event, matching what the stream can support.
    pub fn from_events(record: GameRecord, events: Vec<GameEvent>) -> Result<Self, DomainError> {
        let mut history = GameHistory::new();
        for event in events {
            let recorded_at = event.occurred_at();
            history.record(RecordedAction::new(
                ActionKind::Imported,
                vec![event],
                recorded_at,
            )?);
        }
        Ok(Self { record, history })
    }

    /// The game this session belongs to.
    pub fn game_id(&self) -> &GameId {
        &self.record.game_id
    }

    /// Game metadata.
    pub fn record(&self) -> &GameRecord {
        &self.record
    }

    /// The action history (read).
    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    /// The action history (write).
    pub fn history_mut(&mut self) -> &mut GameHistory {
        &mut self.history
    }

    /// Refold the event prefix up to the cursor.
    pub fn current_state(&self) -> GameState {
        GameState::replay(self.history.events())
    }
}

/// Registry of open sessions, one lock per game.
#[derive(Default)]
pub struct SessionRegistry {
    sessions: DashMap<GameId, Arc<Mutex<GameSession>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The session for a game, if open.
    pub fn get(&self, game_id: &GameId) -> Option<Arc<Mutex<GameSession>>> {
        self.sessions.get(game_id).map(|entry| Arc::clone(&entry))
    }

    /// Register a session, returning the shared handle.
    pub fn insert(&self, session: GameSession) -> Arc<Mutex<GameSession>> {
        let game_id = session.game_id().clone();
        let handle = Arc::new(Mutex::new(session));
        self.sessions.insert(game_id, Arc::clone(&handle));
        handle
    }

    /// Drop a session (the stream and record stay in storage).
    pub fn close(&self, game_id: &GameId) {
        self.sessions.remove(game_id);
    }
}
