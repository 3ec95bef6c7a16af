//! Game lifecycle events

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::game::rules::{GameEnding, SoftballRules};
use crate::ids::GameId;
use crate::value_objects::{GameScore, InningHalf, TeamName};

// ============================================================================
// GameStarted
// ============================================================================

/// A game began: teams named, rules locked in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "GameStartedWire")]
pub struct GameStarted {
    game_id: GameId,
    home_team: TeamName,
    away_team: TeamName,
    rules: SoftballRules,
    occurred_at: DateTime<Utc>,
}

impl GameStarted {
    /// Create a validated game-start fact.
    ///
    /// # Errors
    ///
    /// Returns a `DomainError` when the rules configuration is invalid or
    /// both teams share a name.
    pub fn new(
        game_id: GameId,
        home_team: TeamName,
        away_team: TeamName,
        rules: SoftballRules,
        occurred_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        rules.validate()?;
        if home_team == away_team {
            return Err(DomainError::validation(
                "Home and away teams cannot share a name",
            ));
        }
        Ok(Self {
            game_id,
            home_team,
            away_team,
            rules,
            occurred_at,
        })
    }

    pub fn game_id(&self) -> &GameId {
        &self.game_id
    }

    pub fn home_team(&self) -> &TeamName {
        &self.home_team
    }

    pub fn away_team(&self) -> &TeamName {
        &self.away_team
    }

    pub fn rules(&self) -> &SoftballRules {
        &self.rules
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GameStartedWire {
    game_id: GameId,
    home_team: TeamName,
    away_team: TeamName,
    rules: SoftballRules,
    occurred_at: DateTime<Utc>,
}

impl TryFrom<GameStartedWire> for GameStarted {
    type Error = DomainError;

    fn try_from(wire: GameStartedWire) -> Result<Self, Self::Error> {
        Self::new(
            wire.game_id,
            wire.home_team,
            wire.away_team,
            wire.rules,
            wire.occurred_at,
        )
    }
}

// ============================================================================
// HalfInningEnded
// ============================================================================

/// Three outs: the half-inning is over, bases clear, sides switch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "HalfInningEndedWire")]
pub struct HalfInningEnded {
    game_id: GameId,
    inning: u8,
    half: InningHalf,
    occurred_at: DateTime<Utc>,
}

impl HalfInningEnded {
    /// Create a validated half-inning transition fact.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` for inning zero.
    pub fn new(
        game_id: GameId,
        inning: u8,
        half: InningHalf,
        occurred_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        if inning == 0 {
            return Err(DomainError::validation("Inning must be at least 1"));
        }
        Ok(Self {
            game_id,
            inning,
            half,
            occurred_at,
        })
    }

    pub fn game_id(&self) -> &GameId {
        &self.game_id
    }

    /// The inning whose half just completed.
    pub fn inning(&self) -> u8 {
        self.inning
    }

    /// The half that just completed.
    pub fn half(&self) -> InningHalf {
        self.half
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct HalfInningEndedWire {
    game_id: GameId,
    inning: u8,
    half: InningHalf,
    occurred_at: DateTime<Utc>,
}

impl TryFrom<HalfInningEndedWire> for HalfInningEnded {
    type Error = DomainError;

    fn try_from(wire: HalfInningEndedWire) -> Result<Self, Self::Error> {
        Self::new(wire.game_id, wire.inning, wire.half, wire.occurred_at)
    }
}

// ============================================================================
// GameCompleted
// ============================================================================

/// The game ended, by regulation or mercy rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameCompleted {
    game_id: GameId,
    ending: GameEnding,
    final_score: GameScore,
    occurred_at: DateTime<Utc>,
}

impl GameCompleted {
    pub fn new(
        game_id: GameId,
        ending: GameEnding,
        final_score: GameScore,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            game_id,
            ending,
            final_score,
            occurred_at,
        }
    }

    pub fn game_id(&self) -> &GameId {
        &self.game_id
    }

    pub fn ending(&self) -> GameEnding {
        self.ending
    }

    pub fn final_score(&self) -> GameScore {
        self.final_score
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn when() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 14, 18, 0, 0).unwrap()
    }

    #[test]
    fn game_started_validates_rules() {
        let bad_rules = SoftballRules {
            total_innings: 0,
            ..SoftballRules::default()
        };
        let result = GameStarted::new(
            GameId::new("game-1").unwrap(),
            TeamName::new("Home Herons").unwrap(),
            TeamName::new("Away Owls").unwrap(),
            bad_rules,
            when(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn game_started_rejects_identical_team_names() {
        let result = GameStarted::new(
            GameId::new("game-1").unwrap(),
            TeamName::new("Herons").unwrap(),
            TeamName::new("Herons").unwrap(),
            SoftballRules::default(),
            when(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn half_inning_ended_rejects_inning_zero() {
        let result =
            HalfInningEnded::new(GameId::new("game-1").unwrap(), 0, InningHalf::Top, when());
        assert!(result.is_err());
    }

    #[test]
    fn game_completed_serde_round_trip() {
        let event = GameCompleted::new(
            GameId::new("game-1").unwrap(),
            GameEnding::Regulation,
            GameScore::default(),
            when(),
        );
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("finalScore"));
        let back: GameCompleted = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }
}
