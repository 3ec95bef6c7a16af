//! Commands from the UI to the scoring engine
//!
//! Payloads carry validated primitives plus domain vocabulary enums; the
//! engine converts them into value objects before anything reaches the
//! domain core. The `GameCommand` envelope is the wire shape.

use serde::{Deserialize, Serialize};

use dugout_domain::{
    AdvanceDestination, AdvanceReason, AtBatResult, Base, FieldPosition, SoftballRules, TeamSide,
};

fn default_one() -> usize {
    1
}

/// A player referenced or introduced by a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerInput {
    pub player_id: String,
    pub player_name: String,
    pub jersey_number: String,
}

/// One lineup row as entered in the setup wizard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineupSlotInput {
    pub batting_slot: u8,
    #[serde(flatten)]
    pub player: PlayerInput,
    pub field_position: FieldPosition,
}

/// One runner movement within an at-bat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunnerAdvanceInput {
    pub runner_id: String,
    pub from: Option<Base>,
    pub to: AdvanceDestination,
    pub reason: AdvanceReason,
}

/// Start a new game with both lineups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartGameCommand {
    /// Client-supplied ID; the engine generates one when absent.
    #[serde(default)]
    pub game_id: Option<String>,
    pub home_team: String,
    pub away_team: String,
    pub home_lineup: Vec<LineupSlotInput>,
    pub away_lineup: Vec<LineupSlotInput>,
    /// Falls back to league defaults when absent.
    #[serde(default)]
    pub rules: Option<SoftballRules>,
}

/// Record a completed plate appearance with its runner movements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordAtBatCommand {
    pub game_id: String,
    pub batter_id: String,
    pub batting_slot: u8,
    pub result: AtBatResult,
    pub advances: Vec<RunnerAdvanceInput>,
}

/// Put a bench player into a batting slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubstitutePlayerCommand {
    pub game_id: String,
    pub team: TeamSide,
    pub batting_slot: u8,
    pub incoming: PlayerInput,
    pub field_position: FieldPosition,
}

/// Move a player to a different defensive position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePositionCommand {
    pub game_id: String,
    pub team: TeamSide,
    pub batting_slot: u8,
    pub new_position: FieldPosition,
}

/// Undo the last N recorded actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UndoCommand {
    pub game_id: String,
    #[serde(default = "default_one")]
    pub action_count: usize,
}

/// Redo N previously undone actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedoCommand {
    pub game_id: String,
    #[serde(default = "default_one")]
    pub action_count: usize,
}

/// Wire envelope for every command the UI can send.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum GameCommand {
    StartGame(StartGameCommand),
    RecordAtBat(RecordAtBatCommand),
    SubstitutePlayer(SubstitutePlayerCommand),
    ChangePosition(ChangePositionCommand),
    Undo(UndoCommand),
    Redo(RedoCommand),
}
