//! Session lifecycle tests.
//!
//! These tests drive the public session API the way a front end would:
//! - Seeded new games and full playthroughs
//! - Single-level undo and its commit points
//! - Assist charges across turns
//! - Render projection, report export and session blobs

use std::collections::VecDeque;

use rain_or_shine::cards::manifest::DRIZZLES;
use rain_or_shine::cards::{CardKind, CardSerial, Deck, RainCard};
use rain_or_shine::core::{
    GameError, GameRng, LockReason, Phase, PlayerId, PlayerMap, Randomness, RulesConfig,
};
use rain_or_shine::game::{ActionKind, Choice, GameState, NewGame, PlayerSetup, Session};
use rain_or_shine::players::{Archetype, Player};
use rain_or_shine::rules::RulesEngine;

fn new_game() -> NewGame {
    NewGame::new(
        PlayerSetup::new("Kevin", Archetype::Sprinter),
        PlayerSetup::new("Partner", Archetype::Atlas),
    )
}

fn drizzle(serial: u32) -> RainCard {
    RainCard {
        serial: CardSerial(serial),
        kind: CardKind::Drizzle,
        title: format!("Drizzle {serial}"),
        weight: 3,
        exhaust: 1,
        is_joint: false,
        flavor: String::new(),
        prompt: String::new(),
        age: 0,
        stress_tokens: 0,
    }
}

/// Fixed dice and no shuffling.
#[derive(Clone)]
struct ScriptedRng {
    rolls: VecDeque<i32>,
}

impl Randomness for ScriptedRng {
    fn roll_d6(&mut self) -> i32 {
        self.rolls.pop_front().unwrap_or(1)
    }

    fn shuffle<T>(&mut self, _items: &mut [T]) {}
}

/// Play with a fixed policy: the first unlocked option each step.
fn play_out(session: &mut Session, max_steps: usize) -> usize {
    for step in 0..max_steps {
        if session.verdict().is_over {
            return step;
        }
        let choice = session
            .rules()
            .legal_choices(session.state())
            .into_iter()
            .next()
            .expect("a live game always offers a choice");
        session.advance(choice).unwrap();

        for (_, p) in session.state().players.iter() {
            assert!(p.min_capacity <= p.capacity && p.capacity <= p.max_capacity);
            assert!(p.assists_used <= 8);
        }
    }
    max_steps
}

#[test]
fn test_new_game_opening() {
    let session = Session::new(&new_game(), RulesConfig::default(), GameRng::new(42)).unwrap();
    let state = session.state();

    assert_eq!(state.turn, 1);
    assert_eq!(state.phase, Phase::Strategy);
    for (_, p) in state.players.iter() {
        assert_eq!(p.active_card.as_ref().map(|c| c.kind), Some(CardKind::Drizzle));
        assert!((2..=12).contains(&p.capacity));
    }
    assert_eq!(state.draw_stats.count(CardKind::Drizzle), 2);
}

#[test]
fn test_scripted_randomness_fixes_rolls_and_layout() {
    let rng = ScriptedRng {
        rolls: VecDeque::from([3, 4, 6, 6]),
    };
    let session = Session::new(&new_game(), RulesConfig::default(), rng).unwrap();
    let state = session.state();

    assert_eq!(state.players[PlayerId::FIRST].capacity, 7);
    assert_eq!(state.players[PlayerId::SECOND].capacity, 12);

    // Unshuffled, the top block is the Hurricanes under six Drizzles.
    let dealt = |seat: PlayerId| state.players[seat].active_card.as_ref().map(|c| c.title.clone());
    assert_eq!(dealt(PlayerId::FIRST).as_deref(), Some(DRIZZLES[5].title));
    assert_eq!(dealt(PlayerId::SECOND).as_deref(), Some(DRIZZLES[4].title));

    let next: Vec<_> = state.deck.iter_draw_order().take(8).map(|c| c.kind).collect();
    assert_eq!(&next[..4], &[CardKind::Drizzle; 4]);
    assert_eq!(&next[4..], &[CardKind::Hurricane; 4]);
}

#[test]
fn test_new_game_rejects_bad_roll() {
    let setup = NewGame::new(
        PlayerSetup::new("Kevin", Archetype::Sprinter).with_roll(1),
        PlayerSetup::new("Partner", Archetype::Atlas),
    );
    let result = Session::new(&setup, RulesConfig::default(), GameRng::new(42));
    assert!(matches!(result, Err(GameError::InvalidSetup(_))));
}

#[test]
fn test_full_game_reaches_verdict() {
    for seed in 0..8 {
        let mut session = Session::new(&new_game(), RulesConfig::default(), GameRng::new(seed)).unwrap();

        play_out(&mut session, 2_000);

        let verdict = session.verdict();
        assert!(verdict.is_over, "seed {seed} did not finish");
        assert!(verdict.reason.is_some());
        assert_eq!(session.advance(Choice::EndTurn), Err(GameError::GameOver));
    }
}

#[test]
fn test_same_seed_same_game() {
    let mut a = Session::new(&new_game(), RulesConfig::default(), GameRng::new(9)).unwrap();
    let mut b = Session::new(&new_game(), RulesConfig::default(), GameRng::new(9)).unwrap();

    play_out(&mut a, 2_000);
    play_out(&mut b, 2_000);

    assert_eq!(a.state(), b.state());
    assert_eq!(a.report(), b.report());
}

#[test]
fn test_undo_restores_and_keeps_snapshot() {
    let mut session = Session::new(&new_game(), RulesConfig::default(), GameRng::new(3)).unwrap();
    session.advance(Choice::FirstMover(PlayerId::SECOND)).unwrap();
    let before_action = session.state().clone();

    session.advance(Choice::Act(ActionKind::SelfCare)).unwrap();
    assert_ne!(session.state(), &before_action);
    assert!(session.can_undo());

    session.undo().unwrap();
    assert_eq!(session.state(), &before_action);

    session.undo().unwrap();
    assert_eq!(session.state(), &before_action);
}

#[test]
fn test_end_turn_clears_undo() {
    let mut session = Session::new(&new_game(), RulesConfig::default(), GameRng::new(3)).unwrap();
    session.advance(Choice::FirstMover(PlayerId::FIRST)).unwrap();
    session.advance(Choice::Act(ActionKind::SelfCare)).unwrap();
    session.advance(Choice::Act(ActionKind::SelfCare)).unwrap();

    if session.state().phase == Phase::AtlasIntervention {
        session.advance(Choice::Absorb(0)).unwrap();
    }
    assert_eq!(session.state().phase, Phase::Exhaust);
    assert!(session.can_undo());

    session.advance(Choice::EndTurn).unwrap();

    assert_eq!(session.state().turn, 2);
    assert!(!session.can_undo());
    assert_eq!(session.undo(), Err(GameError::NothingToUndo));
}

#[test]
fn test_assist_cap_enforced_across_turns() {
    let config = RulesConfig::default();
    let mut players = PlayerMap::from_pair(
        Player::new("Ana", Archetype::Soloist, 12, &config),
        Player::new("Ben", Archetype::Sprinter, 12, &config),
    );
    players[PlayerId::FIRST].assists_used = 7;
    players[PlayerId::FIRST].active_card = Some(drizzle(1));
    players[PlayerId::SECOND].active_card = Some(drizzle(2));
    let state = GameState::from_parts(players, Deck::from_cards(Vec::new()));
    let mut session = Session::from_state(state, config, GameRng::new(0));

    session.advance(Choice::FirstMover(PlayerId::FIRST)).unwrap();
    session.advance(Choice::Act(ActionKind::Assist)).unwrap();
    session.advance(Choice::Act(ActionKind::SelfCare)).unwrap();
    session.advance(Choice::EndTurn).unwrap();

    assert_eq!(session.state().phase, Phase::Strategy);
    assert_eq!(session.state().players[PlayerId::FIRST].assists_used, 8);

    session.advance(Choice::FirstMover(PlayerId::FIRST)).unwrap();
    let err = session.advance(Choice::Act(ActionKind::Assist)).unwrap_err();

    assert_eq!(err, GameError::InvalidChoice(LockReason::AssistChargesSpent));
    assert_eq!(session.state().players[PlayerId::FIRST].assists_used, 8);
}

#[test]
fn test_view_flags_locked_options() {
    let config = RulesConfig::default();
    let mut players = PlayerMap::from_pair(
        Player::new("Ana", Archetype::Soloist, 7, &config),
        Player::new("Ben", Archetype::Peacemaker, 3, &config),
    );
    players[PlayerId::FIRST].active_card = Some(drizzle(1));
    players[PlayerId::SECOND].active_card = Some(drizzle(2));
    let state = GameState::from_parts(players, Deck::from_cards(Vec::new()));
    let mut session = Session::from_state(state, config, GameRng::new(0));
    session.advance(Choice::FirstMover(PlayerId::FIRST)).unwrap();

    let view = session.view();
    assert_eq!(view.actor, Some(PlayerId::FIRST));
    assert!(view.players[PlayerId::FIRST].is_acting);
    assert!(view.can_undo);

    let option = |kind: ActionKind| {
        view.options
            .iter()
            .find(|o| o.choice == Choice::Act(kind))
            .cloned()
            .unwrap()
    };
    assert_eq!(option(ActionKind::ResolveOwn).label, "Resolve my Rain Card (-2 Weight)");
    assert_eq!(option(ActionKind::ResolveOwn).lock, None);
    assert_eq!(
        option(ActionKind::ResolvePartner).lock,
        Some(LockReason::SoloistNeedsFlow)
    );
    assert_eq!(
        option(ActionKind::Comfort).lock,
        Some(LockReason::SoloistCannotComfort)
    );
    assert_eq!(
        option(ActionKind::Assist).label,
        "Assist Ben (Effect: PERMISSION (+2 Capacity, Next Action Doubled)) - 8/8 Left"
    );
    assert!(view.options.iter().all(|o| o.choice != Choice::Act(ActionKind::Sprint)));
}

#[test]
fn test_report_layout() {
    let session = Session::new(&new_game(), RulesConfig::default(), GameRng::new(1)).unwrap();
    let report = session.report();
    let lines: Vec<_> = report.lines().collect();

    assert_eq!(lines[0], "GAME RESULT: IN PROGRESS");
    assert!(report.contains("PLAYER STATS"));
    assert!(report.contains("Kevin (Sprinter):"));
    assert!(report.contains("  - Assists Used: 0/8"));
    assert!(report.contains("  Drizzle: 2"));
    assert!(report.ends_with("FULL GAME LOG:"));
}

#[test]
fn test_reset_discards_game() {
    let mut session = Session::new(&new_game(), RulesConfig::default(), GameRng::new(5)).unwrap();
    session.advance(Choice::FirstMover(PlayerId::FIRST)).unwrap();

    let setup = NewGame::new(
        PlayerSetup::new("Ana", Archetype::Soloist).with_roll(6),
        PlayerSetup::new("Ben", Archetype::Peacemaker).with_roll(11),
    );
    session.reset(&setup).unwrap();

    let state = session.state();
    assert_eq!(state.turn, 1);
    assert_eq!(state.phase, Phase::Strategy);
    assert_eq!(state.players[PlayerId::FIRST].name, "Ana");
    assert_eq!(state.players[PlayerId::SECOND].capacity, 11);
    assert!(state.log.is_empty());
    assert!(!session.can_undo());
}

#[test]
fn test_session_blob_round_trip_midgame() {
    let mut session = Session::new(&new_game(), RulesConfig::default(), GameRng::new(21)).unwrap();
    play_out(&mut session, 12);
    if session.verdict().is_over {
        return;
    }

    let bytes = session.encode().unwrap();
    let mut resumed = Session::decode(&bytes).unwrap();
    assert_eq!(resumed.state(), session.state());

    play_out(&mut session, 2_000);
    play_out(&mut resumed, 2_000);
    assert_eq!(resumed.state(), session.state());
}

#[test]
fn test_state_serializes_to_json() {
    let session = Session::new(&new_game(), RulesConfig::default(), GameRng::new(2)).unwrap();

    let json = serde_json::to_string(session.state()).unwrap();
    let back: GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(&back, session.state());

    let view = serde_json::to_value(session.view()).unwrap();
    assert_eq!(view["phase"], "Strategy");
}
