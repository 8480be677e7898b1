//! Player model: archetypes, status tiers, and per-player state.

pub mod archetype;
pub mod player;

pub use archetype::{Archetype, AssistBuff};
pub use player::{Player, Status};
