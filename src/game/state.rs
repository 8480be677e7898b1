//! The session aggregate.
//!
//! ## GameState
//!
//! Everything that changes during a game lives here:
//! - Both players and the draw pile
//! - Turn counter, current phase, resolved-card counter
//! - Actor queue and sprint bookkeeping for the Action phase
//! - The pending Shine claim
//! - Event log and draw statistics
//!
//! Cloning is the checkpoint mechanism; the deck and log are `im` vectors so
//! a clone shares their structure.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::setup::NewGame;
use crate::cards::{CardKind, Deck, DrawStats, RainCard};
use crate::core::{EventLog, Phase, PlayerId, PlayerMap, RainResult, Randomness, RulesConfig};
use crate::players::Player;

/// A drawn Shine card waiting to be claimed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingShine {
    pub card: RainCard,
    /// Player who drew it and will receive the capacity.
    pub claimant: PlayerId,
    /// Resume Setup after the claim (otherwise resume play).
    pub return_to_setup: bool,
}

/// Complete mutable game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub players: PlayerMap<Player>,
    pub deck: Deck,

    // === Game Progression ===
    /// Turn number (starts at 1).
    pub turn: u32,
    pub phase: Phase,
    /// Rain cards retired so far.
    pub resolved: u32,

    // === Action Phase ===
    /// Players still to act this turn, current actor first.
    pub actor_queue: SmallVec<[PlayerId; 2]>,
    /// Sprint slots left for the current actor.
    pub sprint_actions: u32,
    /// The current Sprint burst already included an Assist.
    pub sprint_assist_used: bool,

    pub pending_shine: Option<PendingShine>,

    // === Records ===
    pub log: EventLog,
    pub draw_stats: DrawStats,
}

impl GameState {
    /// Assemble a state from parts, starting in the Strategy phase of turn 1.
    #[must_use]
    pub fn from_parts(players: PlayerMap<Player>, deck: Deck) -> Self {
        Self {
            players,
            deck,
            turn: 1,
            phase: Phase::Strategy,
            resolved: 0,
            actor_queue: SmallVec::new(),
            sprint_actions: 0,
            sprint_assist_used: false,
            pending_shine: None,
            log: EventLog::new(),
            draw_stats: DrawStats::default(),
        }
    }

    /// Start a new game: roll capacities, build the deck, deal each player
    /// an opening Drizzle.
    ///
    /// Turn 1 starts in Strategy. If the opening deal came up short the game
    /// starts in Setup instead; the engine tops the hands up from there.
    pub fn new_game<R: Randomness>(setup: &NewGame, config: &RulesConfig, rng: &mut R) -> RainResult<Self> {
        setup.validate()?;

        let mut roll = |seat_roll: Option<i32>| seat_roll.unwrap_or_else(|| rng.roll_2d6()).max(1);
        let first_cap = roll(setup.first.roll);
        let second_cap = roll(setup.second.roll);

        let players = PlayerMap::from_pair(
            Player::new(setup.first.name.trim(), setup.first.archetype, first_cap, config),
            Player::new(setup.second.name.trim(), setup.second.archetype, second_cap, config),
        );

        let mut deck = Deck::build(config, rng);
        let opening = deck.take_opening_drizzles();

        let mut state = Self::from_parts(players, deck);
        state
            .draw_stats
            .record_many(CardKind::Drizzle, u32::try_from(opening.len()).unwrap_or(0));
        for (seat, card) in PlayerId::both().zip(opening) {
            state.players[seat].active_card = Some(card);
        }
        if state.players.iter().any(|(_, p)| p.active_card.is_none()) {
            state.phase = Phase::Setup;
        }

        tracing::info!(
            target: "rain_or_shine::engine",
            first = %state.players[PlayerId::FIRST].tag(),
            first_capacity = first_cap,
            second = %state.players[PlayerId::SECOND].tag(),
            second_capacity = second_cap,
            "game.start"
        );
        Ok(state)
    }

    /// Player whose action slot is open, during the Action phase.
    #[must_use]
    pub fn current_actor(&self) -> Option<PlayerId> {
        if self.phase == Phase::Action {
            self.actor_queue.first().copied()
        } else {
            None
        }
    }

    /// Append a line to the event log, tagged with the current turn.
    pub fn log(&mut self, message: impl Into<String>) {
        self.log.push(self.turn, message);
    }

    /// Draw the next card, counting it in the draw statistics.
    pub fn draw<R: Randomness>(&mut self, config: &RulesConfig, rng: &mut R) -> RainCard {
        self.deck.draw(config, rng, Some(&mut self.draw_stats))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameRng;
    use crate::game::setup::PlayerSetup;
    use crate::players::Archetype;

    fn setup() -> NewGame {
        NewGame::new(
            PlayerSetup::new("Kevin", Archetype::Soloist).with_roll(8),
            PlayerSetup::new("Partner", Archetype::Atlas),
        )
    }

    #[test]
    fn test_new_game() {
        let config = RulesConfig::default();
        let mut rng = GameRng::new(42);
        let state = GameState::new_game(&setup(), &config, &mut rng).unwrap();

        assert_eq!(state.turn, 1);
        assert_eq!(state.phase, Phase::Strategy);
        assert_eq!(state.resolved, 0);
        assert_eq!(state.players[PlayerId::FIRST].capacity, 8);
        assert!((2..=12).contains(&state.players[PlayerId::SECOND].capacity));

        for (_, p) in state.players.iter() {
            let card = p.active_card.as_ref().unwrap();
            assert_eq!(card.kind, CardKind::Drizzle);
        }
        assert_eq!(state.draw_stats.count(CardKind::Drizzle), 2);
        assert_eq!(state.deck.len(), 62);
        assert!(state.log.is_empty());
    }

    #[test]
    fn test_new_game_rejects_bad_setup() {
        let config = RulesConfig::default();
        let mut rng = GameRng::new(42);
        let bad = NewGame::new(
            PlayerSetup::new("", Archetype::Soloist),
            PlayerSetup::new("Partner", Archetype::Atlas),
        );
        assert!(GameState::new_game(&bad, &config, &mut rng).is_err());
    }

    #[test]
    fn test_current_actor_only_in_action() {
        let config = RulesConfig::default();
        let mut rng = GameRng::new(1);
        let mut state = GameState::new_game(&setup(), &config, &mut rng).unwrap();

        state.actor_queue.push(PlayerId::SECOND);
        assert_eq!(state.current_actor(), None);

        state.phase = Phase::Action;
        assert_eq!(state.current_actor(), Some(PlayerId::SECOND));
    }

    #[test]
    fn test_clone_is_deep() {
        let config = RulesConfig::default();
        let mut rng = GameRng::new(1);
        let mut state = GameState::new_game(&setup(), &config, &mut rng).unwrap();

        let snapshot = state.clone();
        state.players[PlayerId::FIRST].mod_capacity(-3);
        state.draw(&config, &mut rng);
        state.log("changed");

        assert_ne!(snapshot, state);
        assert_eq!(snapshot.players[PlayerId::FIRST].capacity, 8);
        assert_eq!(snapshot.deck.len(), 62);
        assert!(snapshot.log.is_empty());
    }
}
