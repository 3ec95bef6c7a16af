//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is
//! concrete types. Ports exist for:
//! - Event persistence (in-memory now, browser-persistent adapter elsewhere)
//! - Game metadata lookup
//! - Clock (for testing)

mod error;
mod repos;
mod testing;
mod types;

pub use error::{EventStoreError, RepoError};
pub use repos::{EventStore, GameRepo};
pub use testing::ClockPort;
pub use types::GameRecord;

#[cfg(test)]
pub use repos::{MockEventStore, MockGameRepo};
#[cfg(test)]
pub use testing::MockClockPort;
