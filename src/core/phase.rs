//! Turn phases.

use serde::{Deserialize, Serialize};

/// Phase of the turn cycle.
///
/// One turn runs `Setup -> Strategy -> Action -> AtlasIntervention -> Exhaust`.
/// `Shine` is a sub-flow entered whenever a drawn card is a Shine card; it
/// returns to the phase that drew it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Refill empty active-card slots from the deck.
    Setup,
    /// Pick who acts first.
    #[default]
    Strategy,
    /// Players spend their action slots.
    Action,
    /// A pending Shine card waits to be claimed.
    Shine,
    /// An Atlas may pre-absorb partner damage.
    AtlasIntervention,
    /// End-of-turn settlement.
    Exhaust,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Setup => "Setup",
            Phase::Strategy => "Strategy",
            Phase::Action => "Action",
            Phase::Shine => "Shine",
            Phase::AtlasIntervention => "Atlas_Intervention",
            Phase::Exhaust => "Exhaust",
        };
        f.write_str(name)
    }
}
