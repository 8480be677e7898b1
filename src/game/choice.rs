//! Discrete choices submitted by the presentation layer.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// What the current actor does with an action slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    /// Reduce the weight of the actor's own card.
    ResolveOwn,
    /// Reduce the weight of the partner's card.
    ResolvePartner,
    /// Give capacity to the partner.
    Comfort,
    /// Give capacity to the actor.
    SelfCare,
    /// Spend an assist charge on the partner.
    Assist,
    /// Sprinter only: gain two action slots this turn.
    Sprint,
    /// Forced on a recovery turn: +1 capacity.
    ActiveRecovery,
}

impl ActionKind {
    /// Whether taking this action spends a pending doubling buff.
    #[must_use]
    pub const fn consumes_double(self) -> bool {
        matches!(
            self,
            ActionKind::ResolveOwn
                | ActionKind::ResolvePartner
                | ActionKind::Comfort
                | ActionKind::SelfCare
                | ActionKind::ActiveRecovery
        )
    }
}

/// One human decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice {
    /// Strategy: this player acts first.
    FirstMover(PlayerId),
    /// Action: the current actor takes an action.
    Act(ActionKind),
    /// Shine: claim the pending Shine card.
    ClaimShine,
    /// Atlas intervention: damage to pre-absorb.
    Absorb(i32),
    /// Exhaust: settle the turn.
    EndTurn,
}
