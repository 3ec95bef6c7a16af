//! Types crossing the port boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use dugout_domain::{GameId, SoftballRules, TeamName};

/// Snapshot-level game metadata held by the repository.
///
/// Everything derivable from the event log stays out of here; the record
/// exists so games can be listed and reopened without folding their streams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub game_id: GameId,
    pub home_team: TeamName,
    pub away_team: TeamName,
    pub rules: SoftballRules,
    pub started_at: DateTime<Utc>,
}
