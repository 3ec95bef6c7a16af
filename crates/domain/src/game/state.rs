//! Replayed game state
//!
//! `GameState` is derived, never stored: a pure fold over an ordered event
//! prefix. `replay` folds from genesis; `apply` applies one event
//! incrementally and is observably equivalent to a full refold - that
//! equivalence is what makes pointer-based undo/redo safe.

use serde::{Deserialize, Serialize};

use crate::events::GameEvent;
use crate::game::rules::{GameEnding, SoftballRules};
use crate::ids::{GameId, PlayerId};
use crate::lineup::{BattingSlot, BattingSlotState, TeamPlayer};
use crate::value_objects::{Base, FieldPosition, GameScore, InningHalf, TeamName, TeamSide};

// ============================================================================
// GameStatus
// ============================================================================

/// Lifecycle phase derived from the folded events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

impl GameStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            GameStatus::NotStarted => "Not Started",
            GameStatus::InProgress => "In Progress",
            GameStatus::Completed => "Completed",
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// BasesState
// ============================================================================

/// Who stands where on the base path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BasesState {
    first: Option<PlayerId>,
    second: Option<PlayerId>,
    third: Option<PlayerId>,
}

impl BasesState {
    /// Empty bases.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The runner on `base`, if any.
    pub fn runner_on(&self, base: Base) -> Option<&PlayerId> {
        match base {
            Base::First => self.first.as_ref(),
            Base::Second => self.second.as_ref(),
            Base::Third => self.third.as_ref(),
        }
    }

    /// Number of occupied bases.
    pub fn occupied_count(&self) -> usize {
        Base::all()
            .iter()
            .filter(|b| self.runner_on(**b).is_some())
            .count()
    }

    /// True when no base is occupied.
    pub fn is_empty(&self) -> bool {
        self.occupied_count() == 0
    }

    fn set_runner(&mut self, base: Base, runner: PlayerId) {
        match base {
            Base::First => self.first = Some(runner),
            Base::Second => self.second = Some(runner),
            Base::Third => self.third = Some(runner),
        }
    }

    fn clear(&mut self, base: Base) {
        match base {
            Base::First => self.first = None,
            Base::Second => self.second = None,
            Base::Third => self.third = None,
        }
    }
}

// ============================================================================
// TeamState
// ============================================================================

/// One team's folded view: name, lineup, and whose turn it is to bat.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TeamState {
    name: Option<TeamName>,
    lineup: Vec<BattingSlotState>,
    next_batter: Option<BattingSlot>,
}

impl TeamState {
    /// The team name once the game has started.
    pub fn name(&self) -> Option<&TeamName> {
        self.name.as_ref()
    }

    /// The occupied slots in batting order.
    pub fn lineup(&self) -> &[BattingSlotState] {
        &self.lineup
    }

    /// The slot due up next, once a lineup is configured.
    pub fn next_batter(&self) -> Option<BattingSlot> {
        self.next_batter
    }

    fn configure_lineup(&mut self, slots: &[BattingSlotState]) {
        let mut lineup = slots.to_vec();
        lineup.sort_by_key(|s| s.slot_number());
        self.next_batter = lineup.first().map(|s| s.slot_number());
        self.lineup = lineup;
    }

    fn advance_batter(&mut self, after: BattingSlot) {
        if self.lineup.is_empty() {
            return;
        }
        let next_index = match self.lineup.iter().position(|s| s.slot_number() == after) {
            Some(i) => (i + 1) % self.lineup.len(),
            None => 0,
        };
        self.next_batter = self.lineup.get(next_index).map(|s| s.slot_number());
    }

    fn substitute(&mut self, slot: BattingSlot, player: TeamPlayer, position: FieldPosition) {
        if let Some(state) = self.lineup.iter_mut().find(|s| s.slot_number() == slot) {
            *state = state.with_player(player, position);
        }
    }

    fn change_position(&mut self, slot: BattingSlot, position: FieldPosition) {
        if let Some(state) = self.lineup.iter_mut().find(|s| s.slot_number() == slot) {
            *state = state.with_position(position);
        }
    }
}

// ============================================================================
// GameState
// ============================================================================

/// Point-in-time game state, derived by folding an event prefix.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GameState {
    game_id: Option<GameId>,
    status: GameStatus,
    score: GameScore,
    inning: u8,
    half: InningHalf,
    outs: u8,
    bases: BasesState,
    rules: SoftballRules,
    home: TeamState,
    away: TeamState,
    ending: Option<GameEnding>,
}

impl GameState {
    /// The state before any event: not started, empty everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold an ordered event prefix into a state snapshot.
    ///
    /// Pure: identical input always yields structurally identical state.
    pub fn replay<'a>(events: impl IntoIterator<Item = &'a GameEvent>) -> Self {
        let mut state = Self::new();
        for event in events {
            state.apply(event);
        }
        state
    }

    /// Apply one event incrementally.
    ///
    /// Events are validated facts by the time they reach the fold, so
    /// application is infallible; command validation against the current
    /// state is the caller's job.
    pub fn apply(&mut self, event: &GameEvent) {
        match event {
            GameEvent::GameStarted(e) => {
                self.game_id = Some(e.game_id().clone());
                self.status = GameStatus::InProgress;
                self.score = GameScore::tied_at_zero();
                self.inning = 1;
                self.half = InningHalf::Top;
                self.outs = 0;
                self.bases = BasesState::empty();
                self.rules = e.rules().clone();
                self.home.name = Some(e.home_team().clone());
                self.away.name = Some(e.away_team().clone());
            }
            GameEvent::LineupConfigured(e) => {
                self.team_mut(e.team()).configure_lineup(e.slots());
            }
            GameEvent::AtBatCompleted(e) => {
                self.team_mut(e.half().batting_side())
                    .advance_batter(e.batting_slot());
            }
            GameEvent::RunnerAdvanced(e) => {
                if let Some(base) = e.from() {
                    self.bases.clear(base);
                }
                match e.to().as_base() {
                    Some(base) => self.bases.set_runner(base, e.runner_id().clone()),
                    None if e.to().is_home() => {
                        self.score = self.score.with_runs_added(self.half.batting_side(), 1);
                    }
                    None => {
                        self.outs = self.outs.saturating_add(1);
                    }
                }
            }
            GameEvent::SubstitutionMade(e) => {
                self.team_mut(e.team()).substitute(
                    e.batting_slot(),
                    e.incoming_player().clone(),
                    e.field_position(),
                );
            }
            GameEvent::FielderPositionChanged(e) => {
                self.team_mut(e.team())
                    .change_position(e.batting_slot(), e.new_position());
            }
            GameEvent::HalfInningEnded(e) => {
                self.outs = 0;
                self.bases = BasesState::empty();
                if e.half() == InningHalf::Bottom {
                    self.inning = e.inning().saturating_add(1);
                    self.half = InningHalf::Top;
                } else {
                    self.half = InningHalf::Bottom;
                }
            }
            GameEvent::GameCompleted(e) => {
                self.status = GameStatus::Completed;
                self.ending = Some(e.ending());
            }
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The game's identifier, once started.
    pub fn game_id(&self) -> Option<&GameId> {
        self.game_id.as_ref()
    }

    /// Lifecycle phase.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True while at-bats may be recorded.
    pub fn is_in_progress(&self) -> bool {
        self.status == GameStatus::InProgress
    }

    /// Current score.
    pub fn score(&self) -> GameScore {
        self.score
    }

    /// Current inning (1-based).
    pub fn inning(&self) -> u8 {
        self.inning
    }

    /// Current half.
    pub fn half(&self) -> InningHalf {
        self.half
    }

    /// Outs in the current half-inning.
    pub fn outs(&self) -> u8 {
        self.outs
    }

    /// Base occupancy.
    pub fn bases(&self) -> &BasesState {
        &self.bases
    }

    /// The rules the game was started with.
    pub fn rules(&self) -> &SoftballRules {
        &self.rules
    }

    /// The side currently at bat.
    pub fn batting_side(&self) -> TeamSide {
        self.half.batting_side()
    }

    /// One team's folded view.
    pub fn team(&self, side: TeamSide) -> &TeamState {
        match side {
            TeamSide::Home => &self.home,
            TeamSide::Away => &self.away,
        }
    }

    /// How the game ended, once completed.
    pub fn ending(&self) -> Option<GameEnding> {
        self.ending
    }

    fn team_mut(&mut self, side: TeamSide) -> &mut TeamState {
        match side {
            TeamSide::Home => &mut self.home,
            TeamSide::Away => &mut self.away,
        }
    }
}
