//! Card model and deck construction.
//!
//! - `manifest`: the printed card pools
//! - `card`: `RainCard` instances and their derived exhaust
//! - `deck`: `DeckBuilder`, the draw pile, and draw statistics

pub mod manifest;
pub mod card;
pub mod deck;

pub use manifest::CardSpec;
pub use card::{CardKind, CardSerial, RainCard};
pub use deck::{Deck, DeckBuilder, DrawStats};
