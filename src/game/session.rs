//! The live game session.
//!
//! ## Session
//!
//! Owns the rules, the state, the randomness source and the undo slot, and
//! is the only entrypoint that mutates the state:
//! - `advance` validates a choice, snapshots, then commits it
//! - `undo` restores the last snapshot, dice position included
//! - `reset` discards everything and starts over
//!
//! Once the game is terminal only `report` and `reset` remain useful.

use serde::{Deserialize, Serialize};

use super::checkpoint::Checkpoint;
use super::choice::Choice;
use super::rules::RainOrShine;
use super::setup::NewGame;
use super::state::GameState;
use super::view::GameView;
use crate::core::{GameError, GameRng, GameRngState, Phase, RainResult, Randomness, RulesConfig};
use crate::rules::{statistics_report, RulesEngine, Verdict};

/// A single running game.
#[derive(Clone, Debug)]
pub struct Session<R: Randomness = GameRng> {
    rules: RainOrShine,
    state: GameState,
    rng: R,
    checkpoint: Option<Checkpoint<R>>,
}

impl<R: Randomness + Clone> Session<R> {
    /// Start a new game.
    pub fn new(setup: &NewGame, config: RulesConfig, mut rng: R) -> RainResult<Self> {
        let rules = RainOrShine::new(config);
        let mut state = GameState::new_game(setup, rules.config(), &mut rng)?;
        rules.run_automatic(&mut state, &mut rng);
        Ok(Self {
            rules,
            state,
            rng,
            checkpoint: None,
        })
    }

    /// Resume from an existing state. No undo is available.
    ///
    /// Pending automatic transitions run first, so a state saved in Setup
    /// or with an empty actor queue resumes at the next human choice.
    #[must_use]
    pub fn from_state(mut state: GameState, config: RulesConfig, mut rng: R) -> Self {
        let rules = RainOrShine::new(config);
        rules.run_automatic(&mut state, &mut rng);
        Self {
            rules,
            state,
            rng,
            checkpoint: None,
        }
    }

    /// Submit one choice.
    ///
    /// A rejected choice changes nothing, including the undo slot. End of
    /// turn is a commit point: it clears the undo slot instead of filling it.
    pub fn advance(&mut self, choice: Choice) -> RainResult<()> {
        if self.rules.is_terminal(&self.state).is_some() {
            return Err(GameError::GameOver);
        }
        if let Err(lock) = self.rules.check(&self.state, &choice) {
            tracing::debug!(
                target: "rain_or_shine::session",
                turn = self.state.turn,
                choice = ?choice,
                reason = %lock,
                "choice.rejected"
            );
            return Err(lock.into());
        }

        self.checkpoint = match choice {
            Choice::EndTurn => None,
            _ => Some(Checkpoint::capture(&self.state, &self.rng)),
        };
        self.rules.apply(&mut self.state, &mut self.rng, choice)
    }

    /// Restore the last snapshot. Repeating it without an intervening
    /// choice restores the same snapshot again.
    pub fn undo(&mut self) -> RainResult<()> {
        if self.rules.is_terminal(&self.state).is_some() {
            return Err(GameError::GameOver);
        }
        let checkpoint = self.checkpoint.as_ref().ok_or(GameError::NothingToUndo)?;
        (self.state, self.rng) = checkpoint.restore();
        tracing::debug!(
            target: "rain_or_shine::session",
            turn = self.state.turn,
            phase = %self.state.phase,
            "undo"
        );
        Ok(())
    }

    /// Discard the game and start a new one with the same rules.
    pub fn reset(&mut self, setup: &NewGame) -> RainResult<()> {
        let mut state = GameState::new_game(setup, self.rules.config(), &mut self.rng)?;
        self.rules.run_automatic(&mut state, &mut self.rng);
        self.state = state;
        self.checkpoint = None;
        tracing::info!(target: "rain_or_shine::session", "session.reset");
        Ok(())
    }

    #[must_use]
    pub fn verdict(&self) -> Verdict {
        Verdict::of(&self.state, self.rules.config())
    }

    /// The exportable statistics report.
    #[must_use]
    pub fn report(&self) -> String {
        statistics_report(&self.state, self.rules.config())
    }

    #[must_use]
    pub fn view(&self) -> GameView {
        GameView::project(&self.rules, &self.state, self.undo_target())
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.undo_target().is_some()
    }

    /// Turn and phase that `undo` would return to.
    #[must_use]
    pub fn undo_target(&self) -> Option<(u32, Phase)> {
        if self.rules.is_terminal(&self.state).is_some() {
            return None;
        }
        self.checkpoint.as_ref().map(Checkpoint::taken_at)
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn rules(&self) -> &RainOrShine {
        &self.rules
    }
}

#[derive(Serialize, Deserialize)]
struct SessionBlob {
    rules: RainOrShine,
    state: GameState,
    rng: GameRngState,
    checkpoint: Option<Checkpoint<GameRngState>>,
}

impl Session<GameRng> {
    /// Serialize the whole session, RNG position included.
    pub fn encode(&self) -> RainResult<Vec<u8>> {
        let blob = SessionBlob {
            rules: self.rules.clone(),
            state: self.state.clone(),
            rng: self.rng.state(),
            checkpoint: self
                .checkpoint
                .clone()
                .map(|c| c.map_rng(|rng| rng.state())),
        };
        bincode::serialize(&blob).map_err(|e| GameError::Session(e.to_string()))
    }

    /// Rebuild a session from [`Session::encode`] output.
    pub fn decode(bytes: &[u8]) -> RainResult<Self> {
        let blob: SessionBlob =
            bincode::deserialize(bytes).map_err(|e| GameError::Session(e.to_string()))?;
        Ok(Self {
            rules: blob.rules,
            state: blob.state,
            rng: GameRng::from_state(&blob.rng),
            checkpoint: blob
                .checkpoint
                .map(|c| c.map_rng(|saved| GameRng::from_state(&saved))),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardKind, CardSerial, Deck, RainCard};
    use crate::core::{LockReason, PlayerId, PlayerMap};
    use crate::game::{ActionKind, PendingShine, PlayerSetup};
    use crate::players::{Archetype, Player};

    fn card(serial: u32, kind: CardKind, weight: i32) -> RainCard {
        RainCard {
            serial: CardSerial(serial),
            kind,
            title: format!("Card {serial}"),
            weight,
            exhaust: kind.base_exhaust(),
            is_joint: false,
            flavor: String::new(),
            prompt: String::new(),
            age: 0,
            stress_tokens: 0,
        }
    }

    fn bare_state(deck: Vec<RainCard>) -> GameState {
        let config = RulesConfig::default();
        GameState::from_parts(
            PlayerMap::from_pair(
                Player::new("Ana", Archetype::Soloist, 8, &config),
                Player::new("Ben", Archetype::Atlas, 8, &config),
            ),
            Deck::from_cards(deck),
        )
    }

    fn session(seed: u64) -> Session {
        let setup = NewGame::new(
            PlayerSetup::new("Kevin", Archetype::Soloist).with_roll(8),
            PlayerSetup::new("Partner", Archetype::Peacemaker).with_roll(9),
        );
        Session::new(&setup, RulesConfig::default(), GameRng::new(seed)).unwrap()
    }

    #[test]
    fn test_new_session_waits_in_strategy() {
        let mut s = session(42);
        assert_eq!(s.state().phase, Phase::Strategy);
        assert!(!s.can_undo());
        assert_eq!(s.undo(), Err(GameError::NothingToUndo));
    }

    #[test]
    fn test_rejected_choice_keeps_state_and_snapshot() {
        let mut s = session(42);
        s.advance(Choice::FirstMover(PlayerId::FIRST)).unwrap();
        let before = s.state().clone();

        // Soloist cannot comfort.
        let err = s.advance(Choice::Act(ActionKind::Comfort)).unwrap_err();
        assert_eq!(err, GameError::InvalidChoice(LockReason::SoloistCannotComfort));
        assert_eq!(s.state(), &before);

        // The snapshot is still the one from before the Strategy choice.
        s.undo().unwrap();
        assert_eq!(s.state().phase, Phase::Strategy);
    }

    #[test]
    fn test_undo_twice_is_same_state() {
        let mut s = session(7);
        s.advance(Choice::FirstMover(PlayerId::SECOND)).unwrap();
        s.advance(Choice::Act(ActionKind::SelfCare)).unwrap();

        s.undo().unwrap();
        let once = s.state().clone();
        s.undo().unwrap();
        assert_eq!(s.state(), &once);
        assert_eq!(once.current_actor(), Some(PlayerId::SECOND));
    }

    #[test]
    fn test_encode_decode_resumes_identically() {
        let mut s = session(11);
        s.advance(Choice::FirstMover(PlayerId::FIRST)).unwrap();

        let bytes = s.encode().unwrap();
        let mut resumed = Session::decode(&bytes).unwrap();
        assert_eq!(resumed.state(), s.state());
        assert_eq!(resumed.can_undo(), s.can_undo());

        for choice in [Choice::Act(ActionKind::SelfCare), Choice::Act(ActionKind::SelfCare)] {
            s.advance(choice).unwrap();
            resumed.advance(choice).unwrap();
        }
        assert_eq!(resumed.state(), s.state());
    }

    #[test]
    fn test_from_state_runs_pending_setup() {
        let mut state = bare_state(vec![
            card(12, CardKind::Downpour, 6),
            card(11, CardKind::Drizzle, 3),
            card(10, CardKind::Drizzle, 4),
        ]);
        state.phase = Phase::Setup;

        let s = Session::from_state(state, RulesConfig::default(), GameRng::new(0));

        assert_eq!(s.state().phase, Phase::Strategy);
        let serial = |seat: PlayerId| s.state().players[seat].active_card.as_ref().map(|c| c.serial);
        assert_eq!(serial(PlayerId::FIRST), Some(CardSerial(10)));
        assert_eq!(serial(PlayerId::SECOND), Some(CardSerial(11)));
        assert!(!s.rules().legal_choices(s.state()).is_empty());
    }

    #[test]
    fn test_from_state_leaves_idle_action_phase() {
        let mut state = bare_state(Vec::new());
        for seat in PlayerId::both() {
            state.players[seat].active_card = Some(card(seat.index() as u32 + 1, CardKind::Drizzle, 3));
        }
        state.phase = Phase::Action;

        let s = Session::from_state(state, RulesConfig::default(), GameRng::new(0));

        assert_eq!(s.state().phase, Phase::AtlasIntervention);
        assert!(s.rules().absorb_offer(s.state()).is_some());
    }

    #[test]
    fn test_undo_replays_deck_rebuild_identically() {
        let mut state = bare_state(Vec::new());
        state.phase = Phase::Shine;
        state.pending_shine = Some(PendingShine {
            card: card(1, CardKind::Shine, 3),
            claimant: PlayerId::FIRST,
            return_to_setup: true,
        });
        let mut s = Session::from_state(state, RulesConfig::default(), GameRng::new(13));

        s.advance(Choice::ClaimShine).unwrap();
        let first = s.state().clone();
        assert_eq!(s.undo_target(), Some((1, Phase::Shine)));

        s.undo().unwrap();
        s.advance(Choice::ClaimShine).unwrap();

        assert_eq!(s.state(), &first);
    }

    #[test]
    fn test_view_reports_undo_target() {
        let mut s = session(5);
        assert_eq!(s.view().undo_to, None);

        s.advance(Choice::FirstMover(PlayerId::FIRST)).unwrap();

        let view = s.view();
        assert!(view.can_undo);
        assert_eq!(view.undo_to, Some((1, Phase::Strategy)));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(Session::decode(&[1, 2, 3]), Err(GameError::Session(_))));
    }
}
