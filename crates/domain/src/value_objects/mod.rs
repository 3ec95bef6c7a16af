//! Value objects - immutable, self-validating domain primitives

mod advance_reason;
mod at_bat_result;
mod base;
mod field_position;
mod inning_half;
mod jersey_number;
mod names;
mod score;
mod team_side;

pub use advance_reason::AdvanceReason;
pub use at_bat_result::AtBatResult;
pub use base::{AdvanceDestination, Base};
pub use field_position::FieldPosition;
pub use inning_half::InningHalf;
pub use jersey_number::JerseyNumber;
pub use names::{PlayerName, TeamName};
pub use score::{GameScore, Score};
pub use team_side::TeamSide;
