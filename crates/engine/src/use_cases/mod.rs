//! Use cases - one struct per user gesture.
//!
//! Every use case follows the same shape: open the game's session, refold
//! current state, validate the command against it, construct events
//! (fail-fast), commit them as one atomic action, and return the refreshed
//! snapshot.

pub mod at_bat;
pub mod history;
pub mod lineup;
pub mod queries;
pub mod start_game;

pub use at_bat::RecordAtBat;
pub use history::{RedoAction, UndoLastAction};
pub use lineup::{ChangeFielderPosition, SubstitutePlayer};
pub use queries::GameQueries;
pub use start_game::StartGame;

use std::sync::Arc;

use tokio::sync::Mutex;

use dugout_domain::{DomainError, GameId, RecordedAction};

use crate::infrastructure::ports::{EventStore, EventStoreError, GameRepo, RepoError};
use crate::state::{GameSession, SessionRegistry};

/// Errors surfaced by command handling.
///
/// Domain and infrastructure failures pass through transparently so the UI
/// sees the precise underlying message, never a generic wrapper.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("Game not found: {0}")]
    GameNotFound(String),

    #[error("Game already exists: {0}")]
    GameAlreadyExists(String),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    EventStore(#[from] EventStoreError),

    #[error(transparent)]
    Repo(#[from] RepoError),
}

/// Fetch an open session, hydrating it from storage on first touch.
pub(crate) async fn open_session(
    sessions: &SessionRegistry,
    event_store: &Arc<dyn EventStore>,
    game_repo: &Arc<dyn GameRepo>,
    game_id: &GameId,
) -> Result<Arc<Mutex<GameSession>>, CommandError> {
    if let Some(session) = sessions.get(game_id) {
        return Ok(session);
    }
    let record = game_repo
        .get(game_id.clone())
        .await?
        .ok_or_else(|| CommandError::GameNotFound(game_id.to_string()))?;
    let events = event_store.load(game_id.clone()).await?;
    let session = GameSession::from_events(record, events)?;
    Ok(sessions.insert(session))
}

/// Persist and record one atomic action.
///
/// When the cursor sits before the end of history (an undo happened), the
/// stale suffix is first truncated out of storage; the new events are then
/// appended and recorded. Storage is written before the in-memory history
/// moves, so a failed append leaves the session unchanged.
pub(crate) async fn commit_action(
    event_store: &Arc<dyn EventStore>,
    session: &mut GameSession,
    action: RecordedAction,
) -> Result<(), CommandError> {
    let game_id = session.game_id().clone();
    if session.history().info().can_redo {
        event_store
            .truncate(game_id.clone(), session.history().event_count())
            .await?;
    }
    event_store
        .append(game_id, action.events().to_vec())
        .await?;
    session.history_mut().record(action);
    Ok(())
}
