//! Archetypes and the assists they receive.

use serde::{Deserialize, Serialize};

/// A player's fixed role for the whole game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Archetype {
    /// Strong in Burnout, cannot Comfort.
    Soloist,
    /// May Sprint for two actions, then must rest.
    Sprinter,
    /// May absorb partner damage; tolerates pain while in Flow.
    Atlas,
    /// Strong Comfort; hurts when the partner is hit hard.
    Peacemaker,
}

impl Archetype {
    /// All archetypes in menu order.
    pub const ALL: [Archetype; 4] = [
        Archetype::Soloist,
        Archetype::Sprinter,
        Archetype::Atlas,
        Archetype::Peacemaker,
    ];

    /// The buff a player of this archetype receives when assisted.
    #[must_use]
    pub const fn assist_received(self) -> AssistBuff {
        match self {
            Archetype::Soloist => AssistBuff::Space,
            Archetype::Atlas => AssistBuff::Validation,
            Archetype::Peacemaker => AssistBuff::Permission,
            Archetype::Sprinter => AssistBuff::Pacing,
        }
    }
}

impl std::fmt::Display for Archetype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Archetype::Soloist => "Soloist",
            Archetype::Sprinter => "Sprinter",
            Archetype::Atlas => "Atlas",
            Archetype::Peacemaker => "Peacemaker",
        };
        f.write_str(name)
    }
}

/// Archetype-specific help granted by an Assist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssistBuff {
    /// +4 capacity (Soloist).
    Space,
    /// +4 capacity (Atlas).
    Validation,
    /// +2 capacity and the next action is doubled (Peacemaker).
    Permission,
    /// Skip the next recovery turn (Sprinter).
    Pacing,
}

impl AssistBuff {
    /// Capacity granted immediately.
    #[must_use]
    pub const fn capacity(self) -> i32 {
        match self {
            AssistBuff::Space | AssistBuff::Validation => 4,
            AssistBuff::Permission => 2,
            AssistBuff::Pacing => 0,
        }
    }

    /// Short label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            AssistBuff::Space => "SPACE",
            AssistBuff::Validation => "VALIDATION",
            AssistBuff::Permission => "PERMISSION",
            AssistBuff::Pacing => "PACING",
        }
    }

    /// Label with the effect spelled out.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            AssistBuff::Space => "SPACE (+4 Capacity)",
            AssistBuff::Validation => "VALIDATION (+4 Capacity)",
            AssistBuff::Permission => "PERMISSION (+2 Capacity, Next Action Doubled)",
            AssistBuff::Pacing => "PACING (Skip Rest)",
        }
    }
}

impl std::fmt::Display for AssistBuff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AssistBuff::Space => "Space",
            AssistBuff::Validation => "Validation",
            AssistBuff::Permission => "Permission",
            AssistBuff::Pacing => "Pacing",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assist_mapping() {
        assert_eq!(Archetype::Soloist.assist_received(), AssistBuff::Space);
        assert_eq!(Archetype::Atlas.assist_received(), AssistBuff::Validation);
        assert_eq!(Archetype::Peacemaker.assist_received(), AssistBuff::Permission);
        assert_eq!(Archetype::Sprinter.assist_received(), AssistBuff::Pacing);
    }

    #[test]
    fn test_assist_capacity() {
        let gains: Vec<_> = Archetype::ALL
            .iter()
            .map(|a| a.assist_received().capacity())
            .collect();
        assert_eq!(gains, vec![4, 0, 4, 2]);
    }
}
