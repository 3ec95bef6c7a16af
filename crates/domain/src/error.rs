//! Unified error types for the domain layer
//!
//! Provides a common error type used across all domain operations, enabling
//! consistent error handling without forcing callers to use String or anyhow.
//! Messages are written to be shown directly in a UI error toast.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Invalid ID format
    #[error("Invalid ID format: {0}")]
    InvalidId(String),

    /// Entity not found
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// State transition not allowed
    #[error("Invalid state transition: {0}")]
    InvalidStateTransition(String),

    /// A batting slot is already occupied
    #[error("Batting slot {slot} is already filled by {player_name}")]
    SlotOccupied { slot: u8, player_name: String },

    /// Two lineup slots carry the same jersey number
    #[error("Jersey number {jersey} is worn by both slot {first_slot} and slot {second_slot}")]
    DuplicateJersey {
        jersey: String,
        first_slot: u8,
        second_slot: u8,
    },

    /// The same player appears in two lineup slots
    #[error("Player {player_name} is listed in both slot {first_slot} and slot {second_slot}")]
    DuplicatePlayer {
        player_name: String,
        first_slot: u8,
        second_slot: u8,
    },
}

impl DomainError {
    /// Creates a validation error for business rule violations.
    ///
    /// Use this when domain invariants or constraints are violated:
    /// - Required fields are empty or missing
    /// - Values are outside allowed ranges
    /// - Business rules are not satisfied
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an invalid ID error
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Create an invalid state transition error
    pub fn invalid_state_transition(msg: impl Into<String>) -> Self {
        Self::InvalidStateTransition(msg.into())
    }
}
