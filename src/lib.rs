//! # rain-or-shine
//!
//! Rules engine for Rain or Shine, a two-player cooperative card game about
//! carrying emotional weight together.
//!
//! ## Design Principles
//!
//! 1. **One Mutating Entrypoint**: Only [`Session`] changes the state, and it
//!    validates every choice before committing it. A rejected choice leaves
//!    the state untouched.
//!
//! 2. **Injected Randomness**: Dice and shuffles go through the
//!    [`Randomness`] trait. Settlement never rolls.
//!
//! 3. **Configuration Over Constants**: Every rule number lives in
//!    [`RulesConfig`].
//!
//! ## Architecture
//!
//! - **Phase State Machine**: Setup → Strategy → Action → Atlas_Intervention
//!   → Exhaust → Setup, with a Shine side-flow whenever a Shine is drawn.
//!
//! - **Persistent Data Structures**: Deck and log are `im` vectors, so the
//!   undo snapshot is a cheap structural clone.
//!
//! ## Modules
//!
//! - `core`: Seats, RNG, configuration, phases, errors, event log
//! - `cards`: Card pools, card instances, deck construction
//! - `players`: Archetypes, status tiers, player state
//! - `rules`: `RulesEngine` trait, action values, terminal checks, report
//! - `game`: Game state, rules, settlement, undo, session, render view

pub mod core;
pub mod cards;
pub mod players;
pub mod rules;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap,
    GameRng, GameRngState, Randomness,
    RulesConfig, Phase,
    GameError, LockReason, RainResult,
    EventLog, LogEntry,
};

pub use crate::cards::{CardKind, CardSerial, RainCard, Deck, DeckBuilder, DrawStats};

pub use crate::players::{Archetype, AssistBuff, Player, Status};

pub use crate::rules::{
    compute_values, evaluate, statistics_report,
    ActionValues, DefeatReason, GameResult, RulesEngine, Verdict,
};

pub use crate::game::{
    ActionKind, Choice,
    NewGame, PlayerSetup,
    GameState, PendingShine,
    RainOrShine, AbsorbOffer,
    Checkpoint, Session,
    GameView, PlayerSummary, CardSummary, ChoiceOption,
};
