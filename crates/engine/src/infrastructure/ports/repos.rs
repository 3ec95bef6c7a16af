// Port traits define the full contract - some methods are for adapters to come
#![allow(dead_code)]

//! Repository and event-stream port traits.

use async_trait::async_trait;

use dugout_domain::{GameEvent, GameId};

use super::error::{EventStoreError, RepoError};
use super::types::GameRecord;

// =============================================================================
// Event Persistence Port
// =============================================================================

/// Append-only storage for a game's ordered event stream.
///
/// Implementations MUST preserve insertion order exactly - the state fold
/// depends on it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Append events to the end of a game's stream.
    async fn append(&self, game_id: GameId, events: Vec<GameEvent>) -> Result<(), EventStoreError>;

    /// Load the full ordered stream; empty for an unknown game.
    async fn load(&self, game_id: GameId) -> Result<Vec<GameEvent>, EventStoreError>;

    /// Drop every event past `len`.
    ///
    /// Called when a new action is recorded after an undo: the stale redo
    /// suffix is discarded from storage so it can never reappear.
    async fn truncate(&self, game_id: GameId, len: usize) -> Result<(), EventStoreError>;
}

// =============================================================================
// Game Repository Port
// =============================================================================

/// Snapshot lookup for game metadata.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GameRepo: Send + Sync {
    async fn get(&self, id: GameId) -> Result<Option<GameRecord>, RepoError>;
    async fn save(&self, record: &GameRecord) -> Result<(), RepoError>;
    async fn list_all(&self) -> Result<Vec<GameRecord>, RepoError>;
    async fn delete(&self, id: GameId) -> Result<(), RepoError>;
}
