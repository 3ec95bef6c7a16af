//! Jersey number value object
//!
//! Jersey numbers are format-preserving: "05" and "5" are different
//! identifiers even though they agree numerically. Uniqueness within a team
//! is a lineup-level invariant, not enforced here.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A validated jersey number in the range "1"..="99"
///
/// # Invariants
///
/// - Purely ASCII-numeric characters, no whitespace
/// - Numeric value between 1 and 99
/// - The original string form is preserved ("05" stays "05")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct JerseyNumber(String);

impl JerseyNumber {
    /// Create a new validated jersey number.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The value is empty
    /// - The value contains non-numeric characters or whitespace
    /// - The numeric value is outside 1..=99
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::validation("Jersey number cannot be empty"));
        }
        if value != value.trim() {
            return Err(DomainError::validation(
                "Jersey number cannot contain leading or trailing whitespace",
            ));
        }
        if !value.chars().all(|c| c.is_ascii_digit()) {
            return Err(DomainError::validation(format!(
                "Jersey number must contain only digits, got \"{value}\""
            )));
        }
        let numeric: u32 = value.parse().map_err(|_| {
            DomainError::validation(format!("Jersey number \"{value}\" is not a valid number"))
        })?;
        if !(1..=99).contains(&numeric) {
            return Err(DomainError::validation(format!(
                "Jersey number must be between 1 and 99, got {numeric}"
            )));
        }
        Ok(Self(value))
    }

    /// Returns the jersey number as originally written.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the numeric value ("05" and "5" both yield 5).
    pub fn to_number(&self) -> u8 {
        // Validated at construction: 1..=99 always fits in u8
        self.0.parse().unwrap_or(0)
    }
}

impl fmt::Display for JerseyNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for JerseyNumber {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<JerseyNumber> for String {
    fn from(jersey: JerseyNumber) -> String {
        jersey.0
    }
}
