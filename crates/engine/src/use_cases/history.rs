//! Undo/redo use cases - cursor navigation over the action history.
//!
//! Navigation never rewrites storage: undo moves the session's cursor and
//! refolds, and the stale suffix is only truncated out of the stream when a
//! NEW action is recorded afterward. An unavailable undo/redo is a
//! structured `success: false` response, never an error.

use std::sync::Arc;

use dugout_domain::GameId;
use dugout_shared::{NavigationResponse, RedoCommand, UndoCommand};

use crate::infrastructure::ports::{EventStore, GameRepo};
use crate::mappers;
use crate::state::SessionRegistry;
use crate::use_cases::{open_session, CommandError};

/// Undoes the last N recorded actions.
pub struct UndoLastAction {
    sessions: Arc<SessionRegistry>,
    event_store: Arc<dyn EventStore>,
    game_repo: Arc<dyn GameRepo>,
}

impl UndoLastAction {
    pub fn new(
        sessions: Arc<SessionRegistry>,
        event_store: Arc<dyn EventStore>,
        game_repo: Arc<dyn GameRepo>,
    ) -> Self {
        Self {
            sessions,
            event_store,
            game_repo,
        }
    }

    pub async fn execute(&self, cmd: UndoCommand) -> Result<NavigationResponse, CommandError> {
        let game_id = GameId::new(cmd.game_id)?;
        let session =
            open_session(&self.sessions, &self.event_store, &self.game_repo, &game_id).await?;
        let mut session = session.lock().await;

        let outcome = session.history_mut().undo(cmd.action_count);
        if outcome.success {
            tracing::info!(game_id = %game_id, actions = cmd.action_count, "undo applied");
        } else {
            tracing::warn!(
                game_id = %game_id,
                reason = outcome.reason.as_deref().unwrap_or(""),
                "undo unavailable"
            );
        }

        let state = session.current_state();
        Ok(NavigationResponse {
            success: outcome.success,
            reason: outcome.reason,
            snapshot: mappers::to_snapshot(&game_id, &state, session.history().info()),
        })
    }
}

/// Redoes N previously undone actions.
pub struct RedoAction {
    sessions: Arc<SessionRegistry>,
    event_store: Arc<dyn EventStore>,
    game_repo: Arc<dyn GameRepo>,
}

impl RedoAction {
    pub fn new(
        sessions: Arc<SessionRegistry>,
        event_store: Arc<dyn EventStore>,
        game_repo: Arc<dyn GameRepo>,
    ) -> Self {
        Self {
            sessions,
            event_store,
            game_repo,
        }
    }

    pub async fn execute(&self, cmd: RedoCommand) -> Result<NavigationResponse, CommandError> {
        let game_id = GameId::new(cmd.game_id)?;
        let session =
            open_session(&self.sessions, &self.event_store, &self.game_repo, &game_id).await?;
        let mut session = session.lock().await;

        let outcome = session.history_mut().redo(cmd.action_count);
        if outcome.success {
            tracing::info!(game_id = %game_id, actions = cmd.action_count, "redo applied");
        } else {
            tracing::warn!(
                game_id = %game_id,
                reason = outcome.reason.as_deref().unwrap_or(""),
                "redo unavailable"
            );
        }

        let state = session.current_state();
        Ok(NavigationResponse {
            success: outcome.success,
            reason: outcome.reason,
            snapshot: mappers::to_snapshot(&game_id, &state, session.history().info()),
        })
    }
}
