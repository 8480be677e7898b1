//! Deck construction and drawing.
//!
//! ## Layout
//!
//! The draw end is the back of the sequence. A fresh deck is
//! `bottom ++ top`, where `top` is the selected Hurricanes plus a few filler
//! cards shuffled together, so every Hurricane sits within the first ten
//! draws. `bottom` is the rest of the fillers, shuffled.
//!
//! ## Exhaustion
//!
//! Drawing from an empty deck first appends a freshly built deck. This is
//! transparent to callers; `draw` always returns a card.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::card::{CardKind, CardSerial, RainCard};
use super::manifest::{CardSpec, DOWNPOURS, DRIZZLES, HURRICANE_POOL, SHINE_POOL};
use crate::core::{Randomness, RulesConfig};

/// Per-kind draw counters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawStats {
    counts: FxHashMap<CardKind, u32>,
}

impl DrawStats {
    /// Record one draw of `kind`.
    pub fn record(&mut self, kind: CardKind) {
        *self.counts.entry(kind).or_insert(0) += 1;
    }

    /// Record `n` draws of `kind`.
    pub fn record_many(&mut self, kind: CardKind, n: u32) {
        *self.counts.entry(kind).or_insert(0) += n;
    }

    /// Draws recorded for `kind`.
    #[must_use]
    pub fn count(&self, kind: CardKind) -> u32 {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    /// Total draws recorded.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }
}

/// Builds decks with fresh card identities.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckBuilder {
    next_serial: u32,
}

impl DeckBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn alloc(&mut self) -> CardSerial {
        let serial = CardSerial(self.next_serial);
        self.next_serial += 1;
        serial
    }

    fn deal(&mut self, kind: CardKind, specs: &[CardSpec]) -> Vec<RainCard> {
        specs
            .iter()
            .map(|spec| RainCard::from_spec(self.alloc(), kind, spec))
            .collect()
    }

    /// Build one shuffled deck, draw end last.
    pub fn build<R: Randomness>(&mut self, config: &RulesConfig, rng: &mut R) -> Vec<RainCard> {
        let mut shine_pool = SHINE_POOL;
        rng.shuffle(&mut shine_pool);
        let mut hurricane_pool = HURRICANE_POOL;
        rng.shuffle(&mut hurricane_pool);

        let shine_count = config.shines_per_deck.min(shine_pool.len());
        let hurricane_count = config.hurricanes_per_deck.min(hurricane_pool.len());

        let mut fillers = self.deal(CardKind::Drizzle, &DRIZZLES);
        fillers.extend(self.deal(CardKind::Downpour, &DOWNPOURS));
        fillers.extend(self.deal(CardKind::Shine, &shine_pool[..shine_count]));
        rng.shuffle(&mut fillers);

        let split = config.top_block_fillers.min(fillers.len());
        let mut bottom = fillers.split_off(split);
        let mut top = self.deal(CardKind::Hurricane, &hurricane_pool[..hurricane_count]);
        top.append(&mut fillers);
        rng.shuffle(&mut top);
        rng.shuffle(&mut bottom);

        bottom.append(&mut top);
        bottom
    }
}

/// The draw pile.
///
/// Backed by `im::Vector` so checkpoints share structure with the live deck.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<RainCard>,
    builder: DeckBuilder,
}

impl Deck {
    /// Build a fresh deck.
    pub fn build<R: Randomness>(config: &RulesConfig, rng: &mut R) -> Self {
        let mut builder = DeckBuilder::new();
        let cards = builder.build(config, rng).into_iter().collect();
        Self { cards, builder }
    }

    /// Wrap an explicit card sequence (draw end last).
    #[must_use]
    pub fn from_cards(cards: Vec<RainCard>) -> Self {
        let next_serial = cards.iter().map(|c| c.serial.0 + 1).max().unwrap_or(0);
        Self {
            cards: cards.into_iter().collect(),
            builder: DeckBuilder { next_serial },
        }
    }

    /// Cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in draw order, next draw first.
    pub fn iter_draw_order(&self) -> impl Iterator<Item = &RainCard> {
        self.cards.iter().rev()
    }

    /// Draw the next card, rebuilding first if the pile is empty.
    ///
    /// The draw is counted in `stats` when a sink is attached.
    pub fn draw<R: Randomness>(
        &mut self,
        config: &RulesConfig,
        rng: &mut R,
        stats: Option<&mut DrawStats>,
    ) -> RainCard {
        let card = loop {
            if let Some(card) = self.cards.pop_back() {
                break card;
            }
            tracing::warn!(target: "rain_or_shine::deck", "deck.exhausted.rebuild");
            self.cards.extend(self.builder.build(config, rng));
        };

        tracing::debug!(
            target: "rain_or_shine::deck",
            kind = %card.kind,
            title = %card.title,
            remaining = self.cards.len(),
            "deck.draw"
        );
        if let Some(stats) = stats {
            stats.record(card.kind);
        }
        card
    }

    /// Take the first two Drizzles from the draw end for the opening hands.
    ///
    /// Other cards popped on the way are put back in their original order.
    pub fn take_opening_drizzles(&mut self) -> Vec<RainCard> {
        let mut found = Vec::with_capacity(2);
        let mut skipped = Vec::new();

        while found.len() < 2 {
            let Some(card) = self.cards.pop_back() else {
                break;
            };
            if card.kind == CardKind::Drizzle {
                found.push(card);
            } else {
                skipped.push(card);
            }
        }

        for card in skipped.into_iter().rev() {
            self.cards.push_back(card);
        }
        found
    }
}
