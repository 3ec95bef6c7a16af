//! Bases and advancement destinations
//!
//! The base path is ordered FIRST < SECOND < THIRD; HOME and OUT are
//! terminal destinations, not bases. Ordering is what makes "no backward
//! advancement" checkable at event construction time.

use serde::{Deserialize, Serialize};

/// One of the three occupiable bases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Base {
    First,
    Second,
    Third,
}

impl Base {
    pub fn display_name(&self) -> &'static str {
        match self {
            Base::First => "First",
            Base::Second => "Second",
            Base::Third => "Third",
        }
    }

    /// Position on the base path: FIRST = 1, SECOND = 2, THIRD = 3.
    pub fn ordinal(&self) -> u8 {
        match self {
            Base::First => 1,
            Base::Second => 2,
            Base::Third => 3,
        }
    }

    /// Returns all bases in path order.
    pub fn all() -> [Base; 3] {
        [Base::First, Base::Second, Base::Third]
    }
}

impl std::fmt::Display for Base {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Where a runner ends up after an advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvanceDestination {
    First,
    Second,
    Third,
    /// The runner crossed home plate and scored.
    Home,
    /// The runner was retired on the play.
    Out,
}

impl AdvanceDestination {
    pub fn display_name(&self) -> &'static str {
        match self {
            AdvanceDestination::First => "First",
            AdvanceDestination::Second => "Second",
            AdvanceDestination::Third => "Third",
            AdvanceDestination::Home => "Home",
            AdvanceDestination::Out => "Out",
        }
    }

    /// The destination as a base, when it is one.
    pub fn as_base(&self) -> Option<Base> {
        match self {
            AdvanceDestination::First => Some(Base::First),
            AdvanceDestination::Second => Some(Base::Second),
            AdvanceDestination::Third => Some(Base::Third),
            AdvanceDestination::Home | AdvanceDestination::Out => None,
        }
    }

    /// Returns true when the runner scored.
    pub fn is_home(&self) -> bool {
        matches!(self, AdvanceDestination::Home)
    }

    /// Returns true when the runner was retired.
    pub fn is_out(&self) -> bool {
        matches!(self, AdvanceDestination::Out)
    }
}

impl From<Base> for AdvanceDestination {
    fn from(base: Base) -> Self {
        match base {
            Base::First => AdvanceDestination::First,
            Base::Second => AdvanceDestination::Second,
            Base::Third => AdvanceDestination::Third,
        }
    }
}

impl std::fmt::Display for AdvanceDestination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_follow_base_path() {
        assert!(Base::First.ordinal() < Base::Second.ordinal());
        assert!(Base::Second.ordinal() < Base::Third.ordinal());
    }

    #[test]
    fn destination_as_base() {
        assert_eq!(AdvanceDestination::Second.as_base(), Some(Base::Second));
        assert_eq!(AdvanceDestination::Home.as_base(), None);
        assert_eq!(AdvanceDestination::Out.as_base(), None);
    }

    #[test]
    fn home_and_out_flags() {
        assert!(AdvanceDestination::Home.is_home());
        assert!(!AdvanceDestination::Home.is_out());
        assert!(AdvanceDestination::Out.is_out());
        assert!(!AdvanceDestination::First.is_home());
    }

    #[test]
    fn base_converts_to_destination() {
        assert_eq!(
            AdvanceDestination::from(Base::Third),
            AdvanceDestination::Third
        );
    }

    #[test]
    fn serde_uses_snake_case() {
        assert_eq!(serde_json::to_string(&Base::First).unwrap(), "\"first\"");
        assert_eq!(
            serde_json::to_string(&AdvanceDestination::Home).unwrap(),
            "\"home\""
        );
    }
}
