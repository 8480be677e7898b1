//! Rules: the engine trait, action values, terminal checks, reporting.

pub mod engine;
pub mod values;
pub mod report;

pub use engine::{evaluate, DefeatReason, GameResult, RulesEngine, Verdict};
pub use values::{compute_values, ActionValues};
pub use report::statistics_report;
