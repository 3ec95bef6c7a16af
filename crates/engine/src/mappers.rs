//! Conversions between wire types and domain types
//!
//! Inbound: command primitives become value objects here, before anything
//! reaches the domain core - a mapping failure surfaces the exact domain
//! validation message. Outbound: the folded `GameState` flattens into the
//! UI snapshot.

use chrono::{DateTime, Utc};

use dugout_domain::{
    Base, BattingSlot, BattingSlotState, DomainError, GameId, GameState, HistoryInfo,
    JerseyNumber, PlayerId, PlayerName, RunnerAdvanced, TeamPlayer, TeamSide,
};
use dugout_shared::{
    BasesSnapshot, GameSnapshot, LineupSlotInput, LineupSlotSnapshot, PlayerInput,
    RunnerAdvanceInput, ScoreSnapshot, UndoStackInfo,
};

// =============================================================================
// Inbound: commands -> value objects
// =============================================================================

/// Build a `TeamPlayer` from command primitives.
pub fn to_team_player(input: &PlayerInput) -> Result<TeamPlayer, DomainError> {
    Ok(TeamPlayer::new(
        PlayerId::new(&input.player_id)?,
        PlayerName::new(&input.player_name)?,
        JerseyNumber::new(&input.jersey_number)?,
    ))
}

/// Build one batting slot from a wizard row.
pub fn to_slot_state(input: &LineupSlotInput) -> Result<BattingSlotState, DomainError> {
    Ok(BattingSlotState::new(
        BattingSlot::new(input.batting_slot)?,
        to_team_player(&input.player)?,
        input.field_position,
    ))
}

/// Build a whole lineup from wizard rows.
pub fn to_lineup(inputs: &[LineupSlotInput]) -> Result<Vec<BattingSlotState>, DomainError> {
    inputs.iter().map(to_slot_state).collect()
}

/// Build a validated `RunnerAdvanced` event from a command row.
pub fn to_runner_advanced(
    game_id: &GameId,
    input: &RunnerAdvanceInput,
    occurred_at: DateTime<Utc>,
) -> Result<RunnerAdvanced, DomainError> {
    RunnerAdvanced::new(
        game_id.clone(),
        PlayerId::new(&input.runner_id)?,
        input.from,
        input.to,
        input.reason,
        occurred_at,
    )
}

// =============================================================================
// Outbound: folded state -> snapshot
// =============================================================================

fn slot_snapshot(slot: &BattingSlotState) -> LineupSlotSnapshot {
    LineupSlotSnapshot {
        batting_slot: slot.slot_number().number(),
        player_id: slot.current_player().player_id().to_string(),
        player_name: slot.current_player().name().to_string(),
        jersey_number: slot.current_player().jersey_number().to_string(),
        field_position: slot.current_position(),
    }
}

/// Flatten the folded state and undo metadata into the UI snapshot.
pub fn to_snapshot(game_id: &GameId, state: &GameState, info: HistoryInfo) -> GameSnapshot {
    let bases = state.bases();
    GameSnapshot {
        game_id: game_id.to_string(),
        status: state.status(),
        home_team: state.team(TeamSide::Home).name().map(|n| n.to_string()),
        away_team: state.team(TeamSide::Away).name().map(|n| n.to_string()),
        score: ScoreSnapshot {
            home: state.score().home().runs(),
            away: state.score().away().runs(),
        },
        inning: state.inning(),
        half: state.half(),
        outs: state.outs(),
        batting_team: state.batting_side(),
        bases: BasesSnapshot {
            first: bases.runner_on(Base::First).map(ToString::to_string),
            second: bases.runner_on(Base::Second).map(ToString::to_string),
            third: bases.runner_on(Base::Third).map(ToString::to_string),
        },
        home_lineup: state
            .team(TeamSide::Home)
            .lineup()
            .iter()
            .map(slot_snapshot)
            .collect(),
        away_lineup: state
            .team(TeamSide::Away)
            .lineup()
            .iter()
            .map(slot_snapshot)
            .collect(),
        undo: UndoStackInfo {
            can_undo: info.can_undo,
            can_redo: info.can_redo,
            history_position: info.history_position,
            total_actions: info.total_actions,
        },
    }
}
