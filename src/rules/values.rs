//! Action-value calculator.
//!
//! Pure: reads the actor's archetype, status and doubling buff plus the
//! partner's status. Consuming the doubling buff is the engine's job.

use serde::{Deserialize, Serialize};

use crate::players::{Archetype, Player, Status};

/// Magnitudes of the three valued actions for one actor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionValues {
    /// Weight removed from the target card.
    pub resolve: i32,
    /// Capacity given to the partner. Zero means Comfort is locked.
    pub comfort: i32,
    /// Capacity given to the actor.
    pub self_care: i32,
}

impl ActionValues {
    /// All three values doubled.
    #[must_use]
    pub const fn doubled(self) -> Self {
        Self {
            resolve: self.resolve * 2,
            comfort: self.comfort * 2,
            self_care: self.self_care * 2,
        }
    }
}

/// Compute the action values for `player` acting alongside `partner`.
///
/// ```
/// use rain_or_shine::core::RulesConfig;
/// use rain_or_shine::players::{Archetype, Player};
/// use rain_or_shine::rules::compute_values;
///
/// let config = RulesConfig::default();
/// let sprinter = Player::new("Ana", Archetype::Sprinter, 12, &config);
/// let partner = Player::new("Ben", Archetype::Atlas, 6, &config);
///
/// let values = compute_values(&sprinter, &partner);
/// assert_eq!((values.resolve, values.comfort, values.self_care), (3, 4, 3));
/// ```
#[must_use]
pub fn compute_values(player: &Player, partner: &Player) -> ActionValues {
    let archetype = player.archetype;
    let status = player.status;

    let resolve = match status {
        Status::Flow => 3,
        Status::Strained => 2,
        Status::Burnout if archetype == Archetype::Soloist => 2,
        Status::Burnout => 1,
    };

    let comfort = match archetype {
        Archetype::Soloist => 0,
        Archetype::Peacemaker if partner.status == Status::Burnout => 5,
        Archetype::Peacemaker => 4,
        Archetype::Sprinter | Archetype::Atlas => match status {
            Status::Flow => 4,
            Status::Strained => 3,
            Status::Burnout => 0,
        },
    };

    let self_care = match status {
        Status::Flow => 3,
        Status::Strained => 2,
        Status::Burnout if archetype == Archetype::Soloist => 1,
        Status::Burnout => 3,
    };

    let values = ActionValues {
        resolve,
        comfort,
        self_care,
    };

    if player.double_next {
        values.doubled()
    } else {
        values
    }
}
