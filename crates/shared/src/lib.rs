//! Wire contracts between the scoring engine and the browser UI
//!
//! This crate contains the serialized shapes exchanged at the application
//! boundary: command payloads coming in, game snapshots going out. Both
//! sides reuse vocabulary enums from `dugout-domain`; conversions between
//! wire types and domain value objects live in the engine.

pub mod commands;
pub mod snapshot;

pub use commands::{
    ChangePositionCommand, GameCommand, LineupSlotInput, PlayerInput, RecordAtBatCommand,
    RedoCommand, RunnerAdvanceInput, StartGameCommand, SubstitutePlayerCommand, UndoCommand,
};
pub use snapshot::{
    BasesSnapshot, GameSnapshot, LineupSlotSnapshot, NavigationResponse, RunnerAdvanceSnapshot,
    ScoreSnapshot, UndoStackInfo,
};
