//! Start game use case - validates both lineups and opens the event stream.

use std::sync::Arc;

use dugout_domain::{
    ActionKind, DomainError, GameEvent, GameId, GameStarted, LineupConfigured, RecordedAction,
    SimpleTeamStrategy, TeamName, TeamSide, TeamStrategy, MIN_LINEUP_SIZE,
};
use dugout_shared::{GameSnapshot, StartGameCommand};

use crate::infrastructure::ports::{ClockPort, EventStore, GameRecord, GameRepo};
use crate::mappers;
use crate::state::{GameSession, SessionRegistry};
use crate::use_cases::{commit_action, CommandError};

/// Starts a game from the setup wizard's output.
pub struct StartGame {
    sessions: Arc<SessionRegistry>,
    event_store: Arc<dyn EventStore>,
    game_repo: Arc<dyn GameRepo>,
    clock: Arc<dyn ClockPort>,
}

impl StartGame {
    pub fn new(
        sessions: Arc<SessionRegistry>,
        event_store: Arc<dyn EventStore>,
        game_repo: Arc<dyn GameRepo>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            sessions,
            event_store,
            game_repo,
            clock,
        }
    }

    /// Validate lineups, persist the game record, and emit the opening
    /// events as one atomic action.
    pub async fn execute(&self, cmd: StartGameCommand) -> Result<GameSnapshot, CommandError> {
        let game_id = match cmd.game_id {
            Some(raw) => GameId::new(raw)?,
            None => GameId::generate(),
        };
        if self.sessions.get(&game_id).is_some()
            || self.game_repo.get(game_id.clone()).await?.is_some()
        {
            return Err(CommandError::GameAlreadyExists(game_id.to_string()));
        }

        let home_team = TeamName::new(cmd.home_team)?;
        let away_team = TeamName::new(cmd.away_team)?;
        let rules = cmd.rules.unwrap_or_default();

        let home_slots = mappers::to_lineup(&cmd.home_lineup)?;
        let away_slots = mappers::to_lineup(&cmd.away_lineup)?;
        for (side, slots) in [(TeamSide::Home, &home_slots), (TeamSide::Away, &away_slots)] {
            let strategy = SimpleTeamStrategy::from_lineup(slots.clone())?;
            if !strategy.is_lineup_valid() {
                return Err(DomainError::validation(format!(
                    "{side} lineup needs at least {MIN_LINEUP_SIZE} players, got {}",
                    slots.len()
                ))
                .into());
            }
        }

        let now = self.clock.now();
        let events: Vec<GameEvent> = vec![
            GameStarted::new(
                game_id.clone(),
                home_team.clone(),
                away_team.clone(),
                rules.clone(),
                now,
            )?
            .into(),
            LineupConfigured::new(game_id.clone(), TeamSide::Home, home_slots, now)?.into(),
            LineupConfigured::new(game_id.clone(), TeamSide::Away, away_slots, now)?.into(),
        ];
        let action = RecordedAction::new(ActionKind::GameStart, events, now)?;

        let record = GameRecord {
            game_id: game_id.clone(),
            home_team,
            away_team,
            rules,
            started_at: now,
        };
        self.game_repo.save(&record).await?;

        let mut session = GameSession::new(record);
        commit_action(&self.event_store, &mut session, action).await?;

        let state = session.current_state();
        let info = session.history().info();
        let snapshot = mappers::to_snapshot(&game_id, &state, info);
        self.sessions.insert(session);

        tracing::info!(game_id = %game_id, "game started");
        Ok(snapshot)
    }
}
