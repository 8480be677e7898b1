//! Rule constants.
//!
//! Every number the engine compares against lives in [`RulesConfig`] so
//! variants (longer games, stricter burnout) can be tried without touching
//! the rules code. The defaults are the published game.

use serde::{Deserialize, Serialize};

/// Tunable rule constants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Resolved Rain cards needed for victory.
    pub resolve_target: u32,

    /// Assists each player may give over a whole game.
    pub assist_cap: u32,

    /// Burnout tokens that end the game.
    pub burnout_token_limit: u32,

    /// Age (in turns) from which an active card gains a stress token each turn.
    pub stress_age: u32,

    /// Maximum damage an Atlas may pre-absorb.
    pub absorb_cap: i32,

    /// Extra action slots granted by Sprint.
    pub sprint_slots: u32,

    /// Capacity at or above which a player is in Flow.
    pub flow_threshold: i32,

    /// Capacity at or above which a player is Strained (below Flow).
    pub strained_threshold: i32,

    /// Shine cards dealt into each deck.
    pub shines_per_deck: usize,

    /// Hurricane cards dealt into each deck.
    pub hurricanes_per_deck: usize,

    /// Filler cards shuffled in with the Hurricanes at the draw end.
    pub top_block_fillers: usize,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            resolve_target: 10,
            assist_cap: 8,
            burnout_token_limit: 3,
            stress_age: 3,
            absorb_cap: 2,
            sprint_slots: 2,
            flow_threshold: 10,
            strained_threshold: 5,
            shines_per_deck: 12,
            hurricanes_per_deck: 4,
            top_block_fillers: 6,
        }
    }
}

impl RulesConfig {
    /// Set the number of resolved cards needed to win.
    #[must_use]
    pub fn with_resolve_target(mut self, target: u32) -> Self {
        self.resolve_target = target;
        self
    }

    /// Set the per-player assist cap.
    #[must_use]
    pub fn with_assist_cap(mut self, cap: u32) -> Self {
        self.assist_cap = cap;
        self
    }

    /// Set the burnout token limit.
    #[must_use]
    pub fn with_burnout_token_limit(mut self, limit: u32) -> Self {
        self.burnout_token_limit = limit;
        self
    }

    /// Set the card age at which stress starts accruing.
    #[must_use]
    pub fn with_stress_age(mut self, age: u32) -> Self {
        self.stress_age = age;
        self
    }
}
