//! Game aggregate: replayed state, rules, and undo/redo history
//!
//! The event log is the single source of truth. Everything here is derived
//! from it by a pure fold, so identical `(events, position)` always yields
//! identical state - the property pointer-based undo/redo relies on.

pub mod history;
pub mod rules;
pub mod state;

pub use history::{ActionKind, GameHistory, HistoryInfo, NavigationOutcome, RecordedAction};
pub use rules::{GameEnding, MercyRuleTier, SoftballRules};
pub use state::{BasesState, GameState, GameStatus, TeamState};
