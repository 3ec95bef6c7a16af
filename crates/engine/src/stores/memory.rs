//! In-memory adapters for the event store and game repository
//!
//! Back the tests and the in-memory storage profile. The browser-persistent
//! adapter lives behind the same ports, outside this crate.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use dugout_domain::{GameEvent, GameId};

use crate::infrastructure::ports::{
    EventStore, EventStoreError, GameRecord, GameRepo, RepoError,
};

/// Event streams held in a map, append order preserved per game.
#[derive(Default)]
pub struct InMemoryEventStore {
    streams: RwLock<HashMap<GameId, Vec<GameEvent>>>,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current stream length, for tests asserting truncation.
    pub async fn stream_len(&self, game_id: &GameId) -> usize {
        self.streams
            .read()
            .await
            .get(game_id)
            .map_or(0, Vec::len)
    }
}

#[async_trait]
impl EventStore for InMemoryEventStore {
    async fn append(&self, game_id: GameId, events: Vec<GameEvent>) -> Result<(), EventStoreError> {
        let mut streams = self.streams.write().await;
        streams.entry(game_id).or_default().extend(events);
        Ok(())
    }

    async fn load(&self, game_id: GameId) -> Result<Vec<GameEvent>, EventStoreError> {
        let streams = self.streams.read().await;
        Ok(streams.get(&game_id).cloned().unwrap_or_default())
    }

    async fn truncate(&self, game_id: GameId, len: usize) -> Result<(), EventStoreError> {
        let mut streams = self.streams.write().await;
        if let Some(stream) = streams.get_mut(&game_id) {
            stream.truncate(len);
        }
        Ok(())
    }
}

/// Game metadata records held in a map.
#[derive(Default)]
pub struct InMemoryGameRepo {
    records: RwLock<HashMap<GameId, GameRecord>>,
}

impl InMemoryGameRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GameRepo for InMemoryGameRepo {
    async fn get(&self, id: GameId) -> Result<Option<GameRecord>, RepoError> {
        let records = self.records.read().await;
        Ok(records.get(&id).cloned())
    }

    async fn save(&self, record: &GameRecord) -> Result<(), RepoError> {
        let mut records = self.records.write().await;
        records.insert(record.game_id.clone(), record.clone());
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<GameRecord>, RepoError> {
        let records = self.records.read().await;
        let mut all: Vec<GameRecord> = records.values().cloned().collect();
        all.sort_by(|a, b| a.started_at.cmp(&b.started_at));
        Ok(all)
    }

    async fn delete(&self, id: GameId) -> Result<(), RepoError> {
        let mut records = self.records.write().await;
        records
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RepoError::NotFound {
                entity_type: "Game",
                id: id.to_string(),
            })
    }
}
