//! New-game parameters.

use serde::{Deserialize, Serialize};

use crate::core::{GameError, RainResult};
use crate::players::Archetype;

/// One seat's setup: name, archetype, and an optional pre-rolled 2d6.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSetup {
    pub name: String,
    pub archetype: Archetype,
    /// Opening capacity. Rolled as 2d6 when absent.
    pub roll: Option<i32>,
}

impl PlayerSetup {
    #[must_use]
    pub fn new(name: impl Into<String>, archetype: Archetype) -> Self {
        Self {
            name: name.into(),
            archetype,
            roll: None,
        }
    }

    /// Use a roll made outside the engine.
    #[must_use]
    pub fn with_roll(mut self, roll: i32) -> Self {
        self.roll = Some(roll);
        self
    }
}

/// Both seats' setup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewGame {
    pub first: PlayerSetup,
    pub second: PlayerSetup,
}

impl NewGame {
    #[must_use]
    pub fn new(first: PlayerSetup, second: PlayerSetup) -> Self {
        Self { first, second }
    }

    /// Reject blank names and rolls no pair of dice can produce.
    pub fn validate(&self) -> RainResult<()> {
        for seat in [&self.first, &self.second] {
            if seat.name.trim().is_empty() {
                return Err(GameError::InvalidSetup("player name is empty".into()));
            }
            if let Some(roll) = seat.roll {
                if !(2..=12).contains(&roll) {
                    return Err(GameError::InvalidSetup(format!(
                        "{} rolled {roll}, expected 2-12",
                        seat.name
                    )));
                }
            }
        }
        Ok(())
    }
}
