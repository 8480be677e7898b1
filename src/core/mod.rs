//! Core engine types: seats, RNG, configuration, phases, errors, event log.
//!
//! Nothing in here knows about specific cards or archetypes.

pub mod player;
pub mod rng;
pub mod config;
pub mod phase;
pub mod error;
pub mod log;

pub use player::{PlayerId, PlayerMap, SEAT_COUNT};
pub use rng::{GameRng, GameRngState, Randomness};
pub use config::RulesConfig;
pub use phase::Phase;
pub use error::{GameError, LockReason, RainResult};
pub use log::{EventLog, LogEntry};
