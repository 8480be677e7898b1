//! Single-slot undo.
//!
//! A checkpoint is a full structural clone of [`GameState`] together with
//! the randomness source as it stood. Taking a new one overwrites the old;
//! restoring leaves it in place, so undo is one level deep and repeating it
//! is a no-op. Replaying an undone step that draws cards deals the same
//! cards again.

use serde::{Deserialize, Serialize};

use super::state::GameState;
use crate::core::Phase;

/// Snapshot of the whole mutable game state and the randomness position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint<R> {
    state: GameState,
    rng: R,
}

impl<R: Clone> Checkpoint<R> {
    /// Capture `state` and `rng`.
    #[must_use]
    pub fn capture(state: &GameState, rng: &R) -> Self {
        Self {
            state: state.clone(),
            rng: rng.clone(),
        }
    }

    /// Fresh copies of the captured state and randomness.
    #[must_use]
    pub fn restore(&self) -> (GameState, R) {
        (self.state.clone(), self.rng.clone())
    }
}

impl<R> Checkpoint<R> {
    /// Turn and phase the checkpoint was taken in.
    #[must_use]
    pub fn taken_at(&self) -> (u32, Phase) {
        (self.state.turn, self.state.phase)
    }

    /// Same snapshot with the randomness converted, e.g. to its saved form.
    #[must_use]
    pub fn map_rng<S>(self, f: impl FnOnce(R) -> S) -> Checkpoint<S> {
        Checkpoint {
            state: self.state,
            rng: f(self.rng),
        }
    }
}
