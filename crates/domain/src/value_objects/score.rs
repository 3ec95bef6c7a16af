//! Score value objects
//!
//! `Score` wraps a single team's run count; `GameScore` pairs the home and
//! away scores and answers derived questions (differential, leader, tie).
//! Both are immutable - every mutator returns a new instance.

use serde::{Deserialize, Serialize};

use crate::value_objects::TeamSide;

/// A non-negative run count for one team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Score(u32);

impl Score {
    /// A zero score.
    pub fn zero() -> Self {
        Self(0)
    }

    /// Create a score with the given run count.
    pub fn new(runs: u32) -> Self {
        Self(runs)
    }

    /// Returns the run count.
    pub fn runs(&self) -> u32 {
        self.0
    }

    /// Returns a new score with `runs` added; the receiver is unchanged.
    pub fn add_runs(&self, runs: u32) -> Self {
        Self(self.0 + runs)
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The paired home/away score for a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GameScore {
    home: Score,
    away: Score,
}

impl GameScore {
    /// A 0-0 score.
    pub fn tied_at_zero() -> Self {
        Self::default()
    }

    /// Create a score from explicit run counts.
    pub fn new(home: Score, away: Score) -> Self {
        Self { home, away }
    }

    /// Returns the home team's score.
    pub fn home(&self) -> Score {
        self.home
    }

    /// Returns the away team's score.
    pub fn away(&self) -> Score {
        self.away
    }

    /// Returns the score for the given side.
    pub fn for_side(&self, side: TeamSide) -> Score {
        match side {
            TeamSide::Home => self.home,
            TeamSide::Away => self.away,
        }
    }

    /// Signed run differential: positive when home leads.
    pub fn run_differential(&self) -> i64 {
        i64::from(self.home.runs()) - i64::from(self.away.runs())
    }

    /// The leading side, or `None` when tied.
    pub fn leader(&self) -> Option<TeamSide> {
        match self.run_differential() {
            d if d > 0 => Some(TeamSide::Home),
            d if d < 0 => Some(TeamSide::Away),
            _ => None,
        }
    }

    /// Returns true when both sides have the same run count.
    pub fn is_tied(&self) -> bool {
        self.home == self.away
    }

    /// Returns a new score with `runs` credited to `side`.
    pub fn with_runs_added(&self, side: TeamSide, runs: u32) -> Self {
        match side {
            TeamSide::Home => Self {
                home: self.home.add_runs(runs),
                away: self.away,
            },
            TeamSide::Away => Self {
                home: self.home,
                away: self.away.add_runs(runs),
            },
        }
    }
}

impl std::fmt::Display for GameScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.home, self.away)
    }
}
