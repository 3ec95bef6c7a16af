//! Dugout Engine library.
//!
//! The application layer of the scorekeeper:
//!
//! - `infrastructure/` - port traits and local adapters (clock)
//! - `stores/` - in-memory event store and game repository
//! - `state/` - per-game sessions (the action history and its undo cursor)
//! - `use_cases/` - one struct per user gesture
//! - `mappers` - wire types <-> domain types

pub mod infrastructure;
pub mod mappers;
pub mod state;
pub mod stores;
pub mod use_cases;

/// Test fixtures module for integration testing.
#[cfg(test)]
pub mod test_fixtures;

/// E2E flows over the in-memory adapters.
#[cfg(test)]
mod e2e_tests;
