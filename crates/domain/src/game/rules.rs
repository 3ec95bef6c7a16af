//! Game-ending rules for recreational slow-pitch
//!
//! A game ends by regulation (seven completed innings with a leader) or by
//! mercy rule (a configured run differential reached at or after a
//! configured inning). Tied games extend one inning at a time.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::{GameScore, InningHalf, TeamSide};

/// One mercy-rule tier: end the game when the lead reaches `differential`
/// at or after `after_inning` completed innings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MercyRuleTier {
    pub differential: u32,
    pub after_inning: u8,
}

/// Configured rules for one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftballRules {
    /// Regulation length in innings.
    pub total_innings: u8,
    /// When false, mercy tiers are ignored entirely.
    pub mercy_rule_enabled: bool,
    /// Checked in order; the first tier that applies ends the game.
    pub mercy_rule_tiers: Vec<MercyRuleTier>,
}

impl Default for SoftballRules {
    fn default() -> Self {
        Self {
            total_innings: 7,
            mercy_rule_enabled: true,
            mercy_rule_tiers: vec![
                MercyRuleTier {
                    differential: 15,
                    after_inning: 3,
                },
                MercyRuleTier {
                    differential: 10,
                    after_inning: 5,
                },
            ],
        }
    }
}

impl SoftballRules {
    /// Check a rules configuration before a game starts.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` for a zero-inning game, a zero-run
    /// mercy differential, or a tier placed beyond the end of regulation.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.total_innings == 0 {
            return Err(DomainError::validation(
                "A game must be at least one inning long",
            ));
        }
        for tier in &self.mercy_rule_tiers {
            if tier.differential == 0 {
                return Err(DomainError::validation(
                    "Mercy rule differential must be at least 1 run",
                ));
            }
            if tier.after_inning == 0 || tier.after_inning > self.total_innings {
                return Err(DomainError::validation(format!(
                    "Mercy rule tier inning must be between 1 and {}, got {}",
                    self.total_innings, tier.after_inning
                )));
            }
        }
        Ok(())
    }

    /// Evaluate whether the game is over after a completed half-inning.
    ///
    /// `completed_inning` is the inning whose `half` just finished. Mercy is
    /// checked first: after a top half only a home lead ends the game (the
    /// home team would bat next and is already ahead); after a bottom half
    /// any qualifying lead ends it. Regulation end requires the bottom of
    /// the final inning (or later) and a leader - ties keep playing.
    pub fn evaluate_end(
        &self,
        score: &GameScore,
        completed_inning: u8,
        half: InningHalf,
    ) -> Option<GameEnding> {
        if let Some(tier) = self.mercy_tier_reached(score, completed_inning, half) {
            return Some(GameEnding::MercyRule(tier));
        }
        if half == InningHalf::Bottom
            && completed_inning >= self.total_innings
            && !score.is_tied()
        {
            return Some(GameEnding::Regulation);
        }
        None
    }

    fn mercy_tier_reached(
        &self,
        score: &GameScore,
        completed_inning: u8,
        half: InningHalf,
    ) -> Option<MercyRuleTier> {
        if !self.mercy_rule_enabled {
            return None;
        }
        let leader = score.leader()?;
        if half == InningHalf::Top && leader != TeamSide::Home {
            return None;
        }
        let lead = score.run_differential().unsigned_abs();
        self.mercy_rule_tiers
            .iter()
            .copied()
            .find(|tier| completed_inning >= tier.after_inning && lead >= u64::from(tier.differential))
    }
}

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum GameEnding {
    /// Regulation innings completed with a leader.
    Regulation,
    /// A mercy tier tripped; carries the tier that ended the game.
    MercyRule(MercyRuleTier),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::Score;

    fn score(home: u32, away: u32) -> GameScore {
        GameScore::new(Score::new(home), Score::new(away))
    }

    fn mercy_at_15_after_3() -> SoftballRules {
        SoftballRules {
            total_innings: 7,
            mercy_rule_enabled: true,
            mercy_rule_tiers: vec![MercyRuleTier {
                differential: 15,
                after_inning: 3,
            }],
        }
    }

    mod validation {
        use super::*;

        #[test]
        fn default_rules_are_valid() {
            assert!(SoftballRules::default().validate().is_ok());
        }

        #[test]
        fn zero_innings_rejected() {
            let rules = SoftballRules {
                total_innings: 0,
                ..SoftballRules::default()
            };
            assert!(rules.validate().is_err());
        }

        #[test]
        fn tier_beyond_regulation_rejected() {
            let rules = SoftballRules {
                total_innings: 7,
                mercy_rule_enabled: true,
                mercy_rule_tiers: vec![MercyRuleTier {
                    differential: 10,
                    after_inning: 8,
                }],
            };
            assert!(rules.validate().is_err());
        }

        #[test]
        fn zero_differential_rejected() {
            let rules = SoftballRules {
                mercy_rule_tiers: vec![MercyRuleTier {
                    differential: 0,
                    after_inning: 3,
                }],
                ..SoftballRules::default()
            };
            assert!(rules.validate().is_err());
        }
    }

    mod mercy_rule {
        use super::*;

        #[test]
        fn fifteen_run_lead_after_third_ends_game() {
            let rules = mercy_at_15_after_3();
            let ending = rules.evaluate_end(&score(2, 17), 3, InningHalf::Bottom);
            assert!(matches!(ending, Some(GameEnding::MercyRule(tier)) if tier.differential == 15));
        }

        #[test]
        fn fifteen_run_lead_before_third_keeps_playing() {
            let rules = mercy_at_15_after_3();
            assert_eq!(rules.evaluate_end(&score(2, 17), 2, InningHalf::Bottom), None);
        }

        #[test]
        fn fourteen_run_lead_is_not_enough() {
            let rules = mercy_at_15_after_3();
            assert_eq!(rules.evaluate_end(&score(2, 16), 4, InningHalf::Bottom), None);
        }

        #[test]
        fn disabled_mercy_rule_never_fires() {
            let rules = SoftballRules {
                mercy_rule_enabled: false,
                ..mercy_at_15_after_3()
            };
            assert_eq!(
                rules.evaluate_end(&score(2, 20), 5, InningHalf::Bottom),
                None
            );
        }

        #[test]
        fn after_top_half_only_a_home_lead_ends_it() {
            let rules = mercy_at_15_after_3();
            // Home leads big after the top: home would bat next, game over.
            assert!(rules
                .evaluate_end(&score(18, 2), 4, InningHalf::Top)
                .is_some());
            // Away leads big after the top: home still gets to bat.
            assert_eq!(rules.evaluate_end(&score(2, 18), 4, InningHalf::Top), None);
        }

        #[test]
        fn first_matching_tier_wins() {
            let rules = SoftballRules::default();
            let ending = rules.evaluate_end(&score(0, 16), 5, InningHalf::Bottom);
            assert!(matches!(ending, Some(GameEnding::MercyRule(tier)) if tier.differential == 15));
        }
    }

    mod regulation {
        use super::*;

        #[test]
        fn leader_after_seven_completed_innings_ends_game() {
            let rules = SoftballRules::default();
            assert_eq!(
                rules.evaluate_end(&score(5, 3), 7, InningHalf::Bottom),
                Some(GameEnding::Regulation)
            );
        }

        #[test]
        fn tie_after_seven_extends_play() {
            let rules = SoftballRules::default();
            assert_eq!(rules.evaluate_end(&score(4, 4), 7, InningHalf::Bottom), None);
        }

        #[test]
        fn top_of_the_seventh_is_not_the_end() {
            let rules = SoftballRules::default();
            assert_eq!(rules.evaluate_end(&score(3, 5), 7, InningHalf::Top), None);
        }

        #[test]
        fn extra_innings_end_once_someone_leads() {
            let rules = SoftballRules::default();
            assert_eq!(
                rules.evaluate_end(&score(6, 5), 9, InningHalf::Bottom),
                Some(GameEnding::Regulation)
            );
        }
    }
}
