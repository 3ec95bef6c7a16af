//! Record at-bat use case - the main scoring path.
//!
//! One gesture in the UI becomes one atomic action: the plate appearance,
//! every runner advance it produced, and any half-inning or game-ending
//! transition those advances forced.

use std::sync::Arc;

use dugout_domain::{
    ActionKind, AtBatCompleted, BattingSlot, DomainError, GameCompleted, GameEvent, GameId,
    HalfInningEnded, PlayerId, RecordedAction,
};
use dugout_shared::{GameSnapshot, RecordAtBatCommand};

use crate::infrastructure::ports::{ClockPort, EventStore, GameRepo};
use crate::mappers;
use crate::state::SessionRegistry;
use crate::use_cases::{commit_action, open_session, CommandError};

/// Outs that end a half-inning.
const OUTS_PER_HALF_INNING: u8 = 3;

/// Records a completed plate appearance with its runner movements.
pub struct RecordAtBat {
    sessions: Arc<SessionRegistry>,
    event_store: Arc<dyn EventStore>,
    game_repo: Arc<dyn GameRepo>,
    clock: Arc<dyn ClockPort>,
}

impl RecordAtBat {
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

    /// Validate the at-bat against current replayed state, emit its events
    /// as one action, and return the refreshed snapshot.
    pub async fn execute(&self, cmd: RecordAtBatCommand) -> Result<GameSnapshot, CommandError> {
        let game_id = GameId::new(cmd.game_id)?;
        let session =
            open_session(&self.sessions, &self.event_store, &self.game_repo, &game_id).await?;
        let mut session = session.lock().await;

        let state = session.current_state();
        if !state.is_in_progress() {
            return Err(DomainError::invalid_state_transition(format!(
                "Cannot record an at-bat while the game is {}",
                state.status()
            ))
            .into());
        }

        let batter_id = PlayerId::new(&cmd.batter_id)?;
        let slot = BattingSlot::new(cmd.batting_slot)?;
        let batting_side = state.batting_side();
        let slot_state = state
            .team(batting_side)
            .lineup()
            .iter()
            .find(|s| s.slot_number() == slot)
            .ok_or_else(|| {
                DomainError::validation(format!(
                    "Batting slot {slot} is not part of the {batting_side} lineup"
                ))
            })?;
        if slot_state.current_player().player_id() != &batter_id {
            return Err(DomainError::validation(format!(
                "Player {} does not bat in slot {slot}; {} does",
                batter_id,
                slot_state.current_player().name()
            ))
            .into());
        }

        let now = self.clock.now();
        let mut events: Vec<GameEvent> = Vec::with_capacity(cmd.advances.len() + 2);
        events.push(
            AtBatCompleted::new(
                game_id.clone(),
                batter_id,
                slot,
                cmd.result,
                state.inning(),
                state.half(),
                now,
            )?
            .into(),
        );
        for advance in &cmd.advances {
            // every advance starts from the pre-gesture base configuration
            if let Some(base) = advance.from {
                match state.bases().runner_on(base) {
                    Some(occupant) if occupant.as_str() == advance.runner_id => {}
                    Some(occupant) => {
                        return Err(DomainError::validation(format!(
                            "Runner {} is not on {base}; {occupant} is",
                            advance.runner_id
                        ))
                        .into());
                    }
                    None => {
                        return Err(DomainError::validation(format!(
                            "No runner on {base} to advance"
                        ))
                        .into());
                    }
                }
            }
            events.push(mappers::to_runner_advanced(&game_id, advance, now)?.into());
        }

        // preview what the advances do before deciding on transitions
        let mut preview = state.clone();
        for event in &events {
            preview.apply(event);
        }
        if preview.outs() >= OUTS_PER_HALF_INNING {
            let ended_inning = preview.inning();
            let ended_half = preview.half();
            let half_end: GameEvent =
                HalfInningEnded::new(game_id.clone(), ended_inning, ended_half, now)?.into();
            preview.apply(&half_end);
            events.push(half_end);

            if let Some(ending) =
                preview
                    .rules()
                    .evaluate_end(&preview.score(), ended_inning, ended_half)
            {
                let completed: GameEvent =
                    GameCompleted::new(game_id.clone(), ending, preview.score(), now).into();
                preview.apply(&completed);
                events.push(completed);
            }
        }

        let event_count = events.len();
        let action = RecordedAction::new(ActionKind::AtBat, events, now)?;
        commit_action(&self.event_store, &mut session, action).await?;

        tracing::info!(
            game_id = %game_id,
            result = %cmd.result,
            events = event_count,
            "at-bat recorded"
        );

        let state = session.current_state();
        Ok(mappers::to_snapshot(&game_id, &state, session.history().info()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{EventStoreError, MockEventStore, MockGameRepo};
    use crate::test_fixtures::{engine, start_command};
    use chrono::{TimeZone, Utc};
    use dugout_domain::{
        AdvanceDestination, AdvanceReason, AtBatResult, Base, GameStarted, GameStatus,
        InningHalf, LineupConfigured, SoftballRules, TeamName, TeamSide,
    };
    use dugout_shared::RunnerAdvanceInput;

    fn walk(batter_n: u8, advances: Vec<RunnerAdvanceInput>) -> RecordAtBatCommand {
        RecordAtBatCommand {
            game_id: "game-1".to_string(),
            batter_id: format!("away-{batter_n}"),
            batting_slot: batter_n,
            result: AtBatResult::Walk,
            advances,
        }
    }

    fn batter_to_first(batter_n: u8) -> RunnerAdvanceInput {
        RunnerAdvanceInput {
            runner_id: format!("away-{batter_n}"),
            from: None,
            to: AdvanceDestination::First,
            reason: AdvanceReason::Walk,
        }
    }

    #[tokio::test]
    async fn walk_with_bases_empty_occupies_first_only() {
        let engine = engine();
        engine.start_game.execute(start_command()).await.unwrap();

        let snapshot = engine
            .record_at_bat
            .execute(walk(1, vec![batter_to_first(1)]))
            .await
            .unwrap();

        assert_eq!(snapshot.bases.first.as_deref(), Some("away-1"));
        assert_eq!(snapshot.bases.second, None);
        assert_eq!(snapshot.bases.third, None);
        assert_eq!(snapshot.score.away, 0);
        assert_eq!(snapshot.score.home, 0);
    }

    #[tokio::test]
    async fn wrong_batter_for_slot_is_rejected() {
        let engine = engine();
        engine.start_game.execute(start_command()).await.unwrap();

        let mut cmd = walk(1, vec![batter_to_first(1)]);
        cmd.batter_id = "away-5".to_string();
        let err = engine.record_at_bat.execute(cmd).await.unwrap_err();
        assert!(err.to_string().contains("does not bat in slot 1"));
    }

    #[tokio::test]
    async fn advance_from_an_empty_base_is_rejected() {
        let engine = engine();
        engine.start_game.execute(start_command()).await.unwrap();

        let cmd = walk(
            1,
            vec![RunnerAdvanceInput {
                runner_id: "away-9".to_string(),
                from: Some(Base::Second),
                to: AdvanceDestination::Third,
                reason: AdvanceReason::WildPitch,
            }],
        );
        let err = engine.record_at_bat.execute(cmd).await.unwrap_err();
        assert!(err.to_string().contains("No runner on Second"));
    }

    #[tokio::test]
    async fn unknown_game_is_not_found() {
        let engine = engine();
        let err = engine
            .record_at_bat
            .execute(walk(1, vec![batter_to_first(1)]))
            .await
            .unwrap_err();
        assert!(matches!(err, CommandError::GameNotFound(_)));
    }

    #[tokio::test]
    async fn three_outs_end_the_half_inning_in_the_same_action() {
        let engine = engine();
        engine.start_game.execute(start_command()).await.unwrap();

        for batter_n in 1..=2u8 {
            engine
                .record_at_bat
                .execute(RecordAtBatCommand {
                    game_id: "game-1".to_string(),
                    batter_id: format!("away-{batter_n}"),
                    batting_slot: batter_n,
                    result: AtBatResult::GroundOut,
                    advances: vec![RunnerAdvanceInput {
                        runner_id: format!("away-{batter_n}"),
                        from: None,
                        to: AdvanceDestination::Out,
                        reason: AdvanceReason::FieldersChoice,
                    }],
                })
                .await
                .unwrap();
        }

        let snapshot = engine
            .record_at_bat
            .execute(RecordAtBatCommand {
                game_id: "game-1".to_string(),
                batter_id: "away-3".to_string(),
                batting_slot: 3,
                result: AtBatResult::FlyOut,
                advances: vec![RunnerAdvanceInput {
                    runner_id: "away-3".to_string(),
                    from: None,
                    to: AdvanceDestination::Out,
                    reason: AdvanceReason::FieldersChoice,
                }],
            })
            .await
            .unwrap();

        // sides switched, outs and bases cleared
        assert_eq!(snapshot.half, InningHalf::Bottom);
        assert_eq!(snapshot.batting_team, TeamSide::Home);
        assert_eq!(snapshot.outs, 0);
        assert_eq!(snapshot.bases.first, None);
        // the transition rides inside the at-bat action
        assert_eq!(snapshot.undo.total_actions, 4);
    }

    #[tokio::test]
    async fn completed_game_rejects_further_at_bats() {
        let engine = engine();
        let mut cmd = start_command();
        cmd.rules = Some(SoftballRules {
            total_innings: 1,
            mercy_rule_enabled: false,
            mercy_rule_tiers: vec![],
        });
        engine.start_game.execute(cmd).await.unwrap();

        // top 1: away scores once, then three outs
        engine
            .record_at_bat
            .execute(RecordAtBatCommand {
                game_id: "game-1".to_string(),
                batter_id: "away-1".to_string(),
                batting_slot: 1,
                result: AtBatResult::HomeRun,
                advances: vec![RunnerAdvanceInput {
                    runner_id: "away-1".to_string(),
                    from: None,
                    to: AdvanceDestination::Home,
                    reason: AdvanceReason::Hit,
                }],
            })
            .await
            .unwrap();
        for batter_n in 2..=4u8 {
            engine
                .record_at_bat
                .execute(RecordAtBatCommand {
                    game_id: "game-1".to_string(),
                    batter_id: format!("away-{batter_n}"),
                    batting_slot: batter_n,
                    result: AtBatResult::GroundOut,
                    advances: vec![RunnerAdvanceInput {
                        runner_id: format!("away-{batter_n}"),
                        from: None,
                        to: AdvanceDestination::Out,
                        reason: AdvanceReason::FieldersChoice,
                    }],
                })
                .await
                .unwrap();
        }
        // bottom 1: three outs without scoring - away wins 1-0 by regulation
        let mut last = None;
        for batter_n in 1..=3u8 {
            last = Some(
                engine
                    .record_at_bat
                    .execute(RecordAtBatCommand {
                        game_id: "game-1".to_string(),
                        batter_id: format!("home-{batter_n}"),
                        batting_slot: batter_n,
                        result: AtBatResult::Strikeout,
                        advances: vec![RunnerAdvanceInput {
                            runner_id: format!("home-{batter_n}"),
                            from: None,
                            to: AdvanceDestination::Out,
                            reason: AdvanceReason::FieldersChoice,
                        }],
                    })
                    .await
                    .unwrap(),
            );
        }
        let snapshot = last.unwrap();
        assert_eq!(snapshot.status, GameStatus::Completed);

        let err = engine
            .record_at_bat
            .execute(walk(5, vec![batter_to_first(5)]))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Completed"));
    }

    #[tokio::test]
    async fn storage_failure_propagates_untouched() {
        let sessions = Arc::new(SessionRegistry::new());
        let game_id = GameId::new("game-1").unwrap();
        let when = Utc.with_ymd_and_hms(2026, 6, 14, 18, 0, 0).unwrap();

        let lineup = mappers::to_lineup(&crate::test_fixtures::lineup_input("away", 9)).unwrap();
        let home_lineup =
            mappers::to_lineup(&crate::test_fixtures::lineup_input("home", 9)).unwrap();
        let started: Vec<dugout_domain::GameEvent> = vec![
            GameStarted::new(
                game_id.clone(),
                TeamName::new("Herons").unwrap(),
                TeamName::new("Owls").unwrap(),
                SoftballRules::default(),
                when,
            )
            .unwrap()
            .into(),
            LineupConfigured::new(game_id.clone(), TeamSide::Home, home_lineup, when)
                .unwrap()
                .into(),
            LineupConfigured::new(game_id.clone(), TeamSide::Away, lineup, when)
                .unwrap()
                .into(),
        ];

        let mut store = MockEventStore::new();
        store.expect_load().return_once(move |_| Ok(started));
        store.expect_append().return_once(|_, _| {
            Err(EventStoreError::Storage {
                operation: "append",
                message: "disk full".to_string(),
            })
        });
        let mut repo = MockGameRepo::new();
        let record = crate::infrastructure::ports::GameRecord {
            game_id: game_id.clone(),
            home_team: TeamName::new("Herons").unwrap(),
            away_team: TeamName::new("Owls").unwrap(),
            rules: SoftballRules::default(),
            started_at: when,
        };
        repo.expect_get().return_once(move |_| Ok(Some(record)));

        let use_case = RecordAtBat::new(
            sessions,
            Arc::new(store),
            Arc::new(repo),
            Arc::new(crate::infrastructure::clock::FixedClock(when)),
        );

        let err = use_case
            .execute(walk(1, vec![batter_to_first(1)]))
            .await
            .unwrap_err();
        assert!(matches!(err, CommandError::EventStore(_)));
        assert!(err.to_string().contains("disk full"));
    }
}
