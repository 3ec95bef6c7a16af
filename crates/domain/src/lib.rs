extern crate self as dugout_domain;

pub mod error;
pub mod events;
pub mod game;
pub mod ids;
pub mod lineup;
pub mod value_objects;

pub use error::DomainError;

// Re-export event types
pub use events::{
    AtBatCompleted, FielderPositionChanged, GameCompleted, GameEvent, GameStarted,
    HalfInningEnded, LineupConfigured, RunnerAdvanced, SubstitutionMade,
};

// Re-export game aggregate types
pub use game::{
    ActionKind, BasesState, GameEnding, GameHistory, GameState, GameStatus, HistoryInfo,
    MercyRuleTier, NavigationOutcome, RecordedAction, SoftballRules, TeamState,
};

// Re-export ID types
pub use ids::{GameId, InningStateId, PlayerId, TeamLineupId};

// Re-export lineup types
pub use lineup::{
    BattingSlot, BattingSlotState, DetailedTeamStrategy, SimpleTeamStrategy, TeamPlayer,
    TeamStrategy, MIN_LINEUP_SIZE,
};

// Re-export value objects (explicit list in value_objects/mod.rs)
pub use value_objects::{
    AdvanceDestination, AdvanceReason, AtBatResult, Base, FieldPosition, GameScore, InningHalf,
    JerseyNumber, PlayerName, Score, TeamName, TeamSide,
};
