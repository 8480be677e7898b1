//! The Rain or Shine session: state, rules, settlement, undo and the
//! render projection.

pub mod choice;
pub mod setup;
pub mod state;
pub mod rules;
pub mod settlement;
pub mod checkpoint;
pub mod session;
pub mod view;

pub use choice::{ActionKind, Choice};
pub use setup::{NewGame, PlayerSetup};
pub use state::{GameState, PendingShine};
pub use rules::{AbsorbOffer, RainOrShine};
pub use settlement::settle_turn;
pub use checkpoint::Checkpoint;
pub use session::Session;
pub use view::{CardSummary, ChoiceOption, GameView, PlayerSummary};
