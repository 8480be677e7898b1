//! Rules engine trait and terminal-condition evaluation.
//!
//! The rules implementation decides:
//! - Which choices are legal in the current phase
//! - How a choice modifies state
//! - Whether the game has ended

use serde::{Deserialize, Serialize};

use crate::core::{GameError, LockReason, PlayerId, RainResult, Randomness, RulesConfig};
use crate::game::{Choice, GameState};

/// Why the table lost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DefeatReason {
    /// A player's capacity reached zero.
    CapacityDepleted(PlayerId),
    /// A player collected the burnout token limit.
    BurnoutLimit(PlayerId),
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Enough Rain cards resolved.
    Victory,
    /// A loss condition fired.
    Defeat(DefeatReason),
}

impl GameResult {
    /// Check if the table won.
    #[must_use]
    pub fn is_victory(&self) -> bool {
        matches!(self, GameResult::Victory)
    }

    /// Human-readable reason, using player names from `state`.
    #[must_use]
    pub fn reason(&self, state: &GameState, config: &RulesConfig) -> String {
        match self {
            GameResult::Victory => format!("Resolved {} Cards", config.resolve_target),
            GameResult::Defeat(DefeatReason::CapacityDepleted(p)) => {
                format!("{} ran out of emotional capacity.", state.players[*p].name)
            }
            GameResult::Defeat(DefeatReason::BurnoutLimit(p)) => {
                format!("{} accumulated too much Burnout.", state.players[*p].name)
            }
        }
    }
}

/// Check the terminal conditions against live state.
///
/// Victory takes precedence: resolving the last card wins even if a loss
/// condition is also met.
#[must_use]
pub fn evaluate(state: &GameState, config: &RulesConfig) -> Option<GameResult> {
    if state.resolved >= config.resolve_target {
        return Some(GameResult::Victory);
    }

    if let Some((p, _)) = state.players.iter().find(|(_, pl)| pl.capacity <= 0) {
        return Some(GameResult::Defeat(DefeatReason::CapacityDepleted(p)));
    }

    state
        .players
        .iter()
        .find(|(_, pl)| pl.burnout_tokens >= config.burnout_token_limit)
        .map(|(p, _)| GameResult::Defeat(DefeatReason::BurnoutLimit(p)))
}

/// Flattened terminal check for the presentation layer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub is_over: bool,
    pub is_victory: bool,
    pub reason: Option<String>,
}

impl Verdict {
    /// Evaluate `state`.
    #[must_use]
    pub fn of(state: &GameState, config: &RulesConfig) -> Self {
        match evaluate(state, config) {
            Some(result) => Self {
                is_over: true,
                is_victory: result.is_victory(),
                reason: Some(result.reason(state, config)),
            },
            None => Self::default(),
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `check`: Must not mutate; a rejected choice leaves state untouched
/// - `apply`: Only called after `check` succeeds
/// - `is_terminal`: Return None if the game continues
pub trait RulesEngine {
    /// Get the rule constants.
    fn config(&self) -> &RulesConfig;

    /// Every choice the current phase offers, each paired with the reason it
    /// is locked (if it is).
    fn options(&self, state: &GameState) -> Vec<(Choice, Option<LockReason>)>;

    /// Validate a choice without applying it.
    fn check(&self, state: &GameState, choice: &Choice) -> Result<(), LockReason>;

    /// Apply a choice, then run any automatic phase transitions.
    fn apply<R: Randomness>(&self, state: &mut GameState, rng: &mut R, choice: Choice) -> RainResult<()>;

    /// Check if the game is over.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        evaluate(state, self.config())
    }

    // === Convenience Methods ===

    /// Choices that would be accepted right now.
    fn legal_choices(&self, state: &GameState) -> Vec<Choice> {
        self.options(state)
            .into_iter()
            .filter(|(_, lock)| lock.is_none())
            .map(|(choice, _)| choice)
            .collect()
    }

    /// Whether `choice` would be accepted right now.
    fn is_legal(&self, state: &GameState, choice: &Choice) -> bool {
        self.is_terminal(state).is_none() && self.check(state, choice).is_ok()
    }

    /// Validate and apply in one step.
    fn submit<R: Randomness>(&self, state: &mut GameState, rng: &mut R, choice: Choice) -> RainResult<()> {
        if self.is_terminal(state).is_some() {
            return Err(GameError::GameOver);
        }
        self.check(state, &choice)?;
        self.apply(state, rng, choice)
    }
}
