//! Shared fixtures for use-case and e2e tests.

use std::sync::Arc;

use chrono::{TimeZone, Utc};

use dugout_domain::FieldPosition;
use dugout_shared::{LineupSlotInput, PlayerInput, StartGameCommand};

use crate::infrastructure::clock::FixedClock;
use crate::state::SessionRegistry;
use crate::stores::{InMemoryEventStore, InMemoryGameRepo};
use crate::use_cases::{
    ChangeFielderPosition, GameQueries, RecordAtBat, RedoAction, StartGame, SubstitutePlayer,
    UndoLastAction,
};

/// A wizard-style lineup: players `{prefix}-1..=count`, jerseys matching,
/// positions cycling through the ten defensive spots.
pub fn lineup_input(prefix: &str, count: u8) -> Vec<LineupSlotInput> {
    let positions = [
        FieldPosition::Pitcher,
        FieldPosition::Catcher,
        FieldPosition::FirstBase,
        FieldPosition::SecondBase,
        FieldPosition::ThirdBase,
        FieldPosition::Shortstop,
        FieldPosition::LeftField,
        FieldPosition::CenterField,
        FieldPosition::RightField,
        FieldPosition::ShortFielder,
    ];
    (1..=count)
        .map(|n| LineupSlotInput {
            batting_slot: n,
            player: PlayerInput {
                player_id: format!("{prefix}-{n}"),
                player_name: format!("{prefix} Player {n}"),
                jersey_number: n.to_string(),
            },
            field_position: positions[usize::from(n - 1) % positions.len()],
        })
        .collect()
}

/// A ready-to-send start command for "game-1", nine players a side.
pub fn start_command() -> StartGameCommand {
    StartGameCommand {
        game_id: Some("game-1".to_string()),
        home_team: "Herons".to_string(),
        away_team: "Owls".to_string(),
        home_lineup: lineup_input("home", 9),
        away_lineup: lineup_input("away", 9),
        rules: None,
    }
}

/// The whole engine wired to in-memory adapters and a fixed clock.
pub struct TestEngine {
    pub sessions: Arc<SessionRegistry>,
    pub event_store: Arc<InMemoryEventStore>,
    pub game_repo: Arc<InMemoryGameRepo>,
    pub start_game: StartGame,
    pub record_at_bat: RecordAtBat,
    pub substitute: SubstitutePlayer,
    pub change_position: ChangeFielderPosition,
    pub undo: UndoLastAction,
    pub redo: RedoAction,
    pub queries: GameQueries,
}

/// Install a test subscriber once so `RUST_LOG=debug cargo test` shows
/// use-case tracing.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn engine() -> TestEngine {
    init_tracing();
    let sessions = Arc::new(SessionRegistry::new());
    let event_store = Arc::new(InMemoryEventStore::new());
    let game_repo = Arc::new(InMemoryGameRepo::new());
    let clock = Arc::new(FixedClock(
        Utc.with_ymd_and_hms(2026, 6, 14, 18, 0, 0).unwrap(),
    ));

    let store = event_store.clone() as Arc<dyn crate::infrastructure::ports::EventStore>;
    let repo = game_repo.clone() as Arc<dyn crate::infrastructure::ports::GameRepo>;
    let clock_port = clock as Arc<dyn crate::infrastructure::ports::ClockPort>;

    TestEngine {
        start_game: StartGame::new(
            sessions.clone(),
            store.clone(),
            repo.clone(),
            clock_port.clone(),
        ),
        record_at_bat: RecordAtBat::new(
            sessions.clone(),
            store.clone(),
            repo.clone(),
            clock_port.clone(),
        ),
        substitute: SubstitutePlayer::new(
            sessions.clone(),
            store.clone(),
            repo.clone(),
            clock_port.clone(),
        ),
        change_position: ChangeFielderPosition::new(
            sessions.clone(),
            store.clone(),
            repo.clone(),
            clock_port,
        ),
        undo: UndoLastAction::new(sessions.clone(), store.clone(), repo.clone()),
        redo: RedoAction::new(sessions.clone(), store.clone(), repo.clone()),
        queries: GameQueries::new(sessions.clone(), store, repo),
        sessions,
        event_store,
        game_repo,
    }
}
