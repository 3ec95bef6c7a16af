//! Lineup mutation use cases - substitutions and position changes.
//!
//! Both run the proposed change through a lineup strategy built from the
//! current replayed state, so every lineup-wide invariant is re-checked
//! before the event is emitted.

use std::sync::Arc;

use dugout_domain::{
    ActionKind, BattingSlot, DetailedTeamStrategy, DomainError, FielderPositionChanged, GameId,
    RecordedAction, SimpleTeamStrategy, SubstitutionMade, TeamStrategy,
};
use dugout_shared::{ChangePositionCommand, GameSnapshot, SubstitutePlayerCommand};

use crate::infrastructure::ports::{ClockPort, EventStore, GameRepo};
use crate::mappers;
use crate::state::SessionRegistry;
use crate::use_cases::{commit_action, open_session, CommandError};

// =============================================================================
// SubstitutePlayer
// =============================================================================

/// Puts a bench player into an occupied batting slot.
pub struct SubstitutePlayer {
    sessions: Arc<SessionRegistry>,
    event_store: Arc<dyn EventStore>,
    game_repo: Arc<dyn GameRepo>,
    clock: Arc<dyn ClockPort>,
}

impl SubstitutePlayer {
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

    pub async fn execute(&self, cmd: SubstitutePlayerCommand) -> Result<GameSnapshot, CommandError> {
        let game_id = GameId::new(cmd.game_id)?;
        let session =
            open_session(&self.sessions, &self.event_store, &self.game_repo, &game_id).await?;
        let mut session = session.lock().await;

        let state = session.current_state();
        if !state.is_in_progress() {
            return Err(DomainError::invalid_state_transition(format!(
                "Cannot substitute while the game is {}",
                state.status()
            ))
            .into());
        }

        let slot = BattingSlot::new(cmd.batting_slot)?;
        let incoming = mappers::to_team_player(&cmd.incoming)?;

        // run the change through the whole-lineup strategy to re-check
        // slot/player/jersey uniqueness against the folded lineup
        let mut strategy =
            SimpleTeamStrategy::from_lineup(state.team(cmd.team).lineup().to_vec())?;
        let outgoing =
            strategy.substitute_player(slot, incoming.clone(), cmd.field_position)?;

        let now = self.clock.now();
        let event = SubstitutionMade::new(
            game_id.clone(),
            cmd.team,
            slot,
            outgoing.player_id().clone(),
            incoming,
            cmd.field_position,
            now,
        )?;
        let action = RecordedAction::new(ActionKind::Substitution, vec![event.into()], now)?;
        commit_action(&self.event_store, &mut session, action).await?;

        tracing::info!(game_id = %game_id, team = %cmd.team, slot = cmd.batting_slot, "substitution made");

        let state = session.current_state();
        Ok(mappers::to_snapshot(&game_id, &state, session.history().info()))
    }
}

// =============================================================================
// ChangeFielderPosition
// =============================================================================

/// Moves a player to a new defensive position without a lineup change.
pub struct ChangeFielderPosition {
    sessions: Arc<SessionRegistry>,
    event_store: Arc<dyn EventStore>,
    game_repo: Arc<dyn GameRepo>,
    clock: Arc<dyn ClockPort>,
}

impl ChangeFielderPosition {
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

    pub async fn execute(&self, cmd: ChangePositionCommand) -> Result<GameSnapshot, CommandError> {
        let game_id = GameId::new(cmd.game_id)?;
        let session =
            open_session(&self.sessions, &self.event_store, &self.game_repo, &game_id).await?;
        let mut session = session.lock().await;

        let state = session.current_state();
        if !state.is_in_progress() {
            return Err(DomainError::invalid_state_transition(format!(
                "Cannot change positions while the game is {}",
                state.status()
            ))
            .into());
        }

        let slot = BattingSlot::new(cmd.batting_slot)?;

        // rebuild the per-slot strategy from the folded lineup and let it
        // reject a change to an empty slot
        let mut strategy = DetailedTeamStrategy::new();
        for slot_state in state.team(cmd.team).lineup() {
            strategy.add_player(
                slot_state.current_player().clone(),
                slot_state.slot_number(),
                slot_state.current_position(),
            )?;
        }
        strategy.change_player_position(slot, cmd.new_position)?;

        let now = self.clock.now();
        let event =
            FielderPositionChanged::new(game_id.clone(), cmd.team, slot, cmd.new_position, now);
        let action = RecordedAction::new(ActionKind::PositionChange, vec![event.into()], now)?;
        commit_action(&self.event_store, &mut session, action).await?;

        tracing::info!(
            game_id = %game_id,
            team = %cmd.team,
            slot = cmd.batting_slot,
            position = %cmd.new_position,
            "fielder position changed"
        );

        let state = session.current_state();
        Ok(mappers::to_snapshot(&game_id, &state, session.history().info()))
    }
}
