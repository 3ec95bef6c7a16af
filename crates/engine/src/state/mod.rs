//! Engine-held mutable state.

mod sessions;

pub use sessions::{GameSession, SessionRegistry};
