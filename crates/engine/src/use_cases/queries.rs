//! Read-side queries - snapshots without mutation.

use std::sync::Arc;

use dugout_domain::GameId;
use dugout_shared::GameSnapshot;

use crate::infrastructure::ports::{EventStore, GameRecord, GameRepo};
use crate::mappers;
use crate::state::SessionRegistry;
use crate::use_cases::{open_session, CommandError};

/// Read-only access to game state for UI loads and refreshes.
pub struct GameQueries {
    sessions: Arc<SessionRegistry>,
    event_store: Arc<dyn EventStore>,
    game_repo: Arc<dyn GameRepo>,
}

impl GameQueries {
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

    /// The current snapshot, refolded from the session's event prefix.
    pub async fn snapshot(&self, game_id: &str) -> Result<GameSnapshot, CommandError> {
        let game_id = GameId::new(game_id)?;
        let session =
            open_session(&self.sessions, &self.event_store, &self.game_repo, &game_id).await?;
        let session = session.lock().await;
        let state = session.current_state();
        Ok(mappers::to_snapshot(&game_id, &state, session.history().info()))
    }

    /// Every known game, for the game list screen.
    pub async fn list_games(&self) -> Result<Vec<GameRecord>, CommandError> {
        Ok(self.game_repo.list_all().await?)
    }
}
