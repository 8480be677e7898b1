//! Card instances.
//!
//! A `RainCard` is created once when a deck is built, then owned by the
//! deck, then by at most one player as their active card. Resolved cards are
//! dropped, never recycled.

use serde::{Deserialize, Serialize};

use super::manifest::CardSpec;

/// Unique identity of a dealt card.
///
/// Serials are never reused, including across rebuilt decks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardSerial(pub u32);

/// Card category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Shine,
    Drizzle,
    Downpour,
    Hurricane,
}

impl CardKind {
    /// All kinds in report order.
    pub const ALL: [CardKind; 4] = [
        CardKind::Drizzle,
        CardKind::Downpour,
        CardKind::Hurricane,
        CardKind::Shine,
    ];

    /// Printed exhaust for cards of this kind.
    #[must_use]
    pub const fn base_exhaust(self) -> i32 {
        match self {
            CardKind::Shine => 0,
            CardKind::Drizzle => 1,
            CardKind::Downpour | CardKind::Hurricane => 2,
        }
    }

    /// Capacity granted to the holder when a card of this kind is resolved.
    #[must_use]
    pub const fn resolve_bonus(self) -> i32 {
        match self {
            CardKind::Downpour => 1,
            CardKind::Hurricane => 2,
            CardKind::Shine | CardKind::Drizzle => 0,
        }
    }
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CardKind::Shine => "Shine",
            CardKind::Drizzle => "Drizzle",
            CardKind::Downpour => "Downpour",
            CardKind::Hurricane => "Hurricane",
        };
        f.write_str(name)
    }
}

/// A stressor (Drizzle/Downpour/Hurricane) or positive event (Shine).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RainCard {
    pub serial: CardSerial,
    pub kind: CardKind,
    pub title: String,
    /// Effort left to resolve. For Shine cards, the capacity gained on claim.
    pub weight: i32,
    /// Printed exhaust, before stress.
    pub exhaust: i32,
    /// Also stresses the holder's partner each turn.
    pub is_joint: bool,
    pub flavor: String,
    /// Reflection question printed on the card.
    pub prompt: String,
    /// Turns survived while active.
    pub age: u32,
    /// Permanent stress accrued from ageing.
    pub stress_tokens: i32,
}

impl RainCard {
    /// Deal a fresh card from its printed spec.
    #[must_use]
    pub fn from_spec(serial: CardSerial, kind: CardKind, spec: &CardSpec) -> Self {
        Self {
            serial,
            kind,
            title: spec.title.to_string(),
            weight: spec.weight,
            exhaust: kind.base_exhaust(),
            is_joint: spec.joint,
            flavor: spec.flavor.to_string(),
            prompt: spec.prompt.to_string(),
            age: 0,
            stress_tokens: 0,
        }
    }

    /// Exhaust dealt to the holder each turn.
    #[must_use]
    pub fn exhaust_value(&self) -> i32 {
        self.exhaust + self.stress_tokens
    }

    /// Whether this is a Shine card.
    #[must_use]
    pub fn is_shine(&self) -> bool {
        self.kind == CardKind::Shine
    }

    /// Whether enough effort has been spent to retire the card.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.weight <= 0
    }

    /// Age the card by one turn; from `stress_age` on, each turn adds a
    /// stress token. Returns true if a token was added.
    pub fn age_one_turn(&mut self, stress_age: u32) -> bool {
        self.age += 1;
        if self.age >= stress_age {
            self.stress_tokens += 1;
            true
        } else {
            false
        }
    }
}
