//! Game state snapshot sent to the UI
//!
//! A flat, camelCase view of the replayed game state. Snapshots are derived
//! by the engine after every command and never mutated by the client.

use serde::{Deserialize, Serialize};

use dugout_domain::{AdvanceDestination, FieldPosition, GameStatus, InningHalf, TeamSide};

/// Undo-stack metadata shown next to the undo/redo buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UndoStackInfo {
    pub can_undo: bool,
    pub can_redo: bool,
    pub history_position: usize,
    pub total_actions: usize,
}

/// One team's run total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSnapshot {
    pub home: u32,
    pub away: u32,
}

/// Base occupancy by player ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BasesSnapshot {
    pub first: Option<String>,
    pub second: Option<String>,
    pub third: Option<String>,
}

/// One row of a lineup table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineupSlotSnapshot {
    pub batting_slot: u8,
    pub player_id: String,
    pub player_name: String,
    pub jersey_number: String,
    pub field_position: FieldPosition,
}

/// The full scoreboard view for one game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub game_id: String,
    pub status: GameStatus,
    pub home_team: Option<String>,
    pub away_team: Option<String>,
    pub score: ScoreSnapshot,
    pub inning: u8,
    pub half: InningHalf,
    pub outs: u8,
    pub batting_team: TeamSide,
    pub bases: BasesSnapshot,
    pub home_lineup: Vec<LineupSlotSnapshot>,
    pub away_lineup: Vec<LineupSlotSnapshot>,
    pub undo: UndoStackInfo,
}

/// Result of an undo/redo request, paired with the refreshed snapshot.
///
/// Unavailable navigation is `success: false` with a reason - the snapshot
/// is still returned so the UI stays consistent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationResponse {
    pub success: bool,
    pub reason: Option<String>,
    pub snapshot: GameSnapshot,
}

/// A runner movement echoed back in play-by-play views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunnerAdvanceSnapshot {
    pub runner_id: String,
    pub from: Option<dugout_domain::Base>,
    pub to: AdvanceDestination,
}
