//! Read-only projection of the state for rendering.

use serde::{Deserialize, Serialize};

use super::choice::{ActionKind, Choice};
use super::rules::{AbsorbOffer, RainOrShine};
use super::state::GameState;
use crate::cards::{CardKind, RainCard};
use crate::core::{LockReason, Phase, PlayerId, PlayerMap};
use crate::players::{Archetype, AssistBuff, Player, Status};
use crate::rules::{compute_values, RulesEngine, Verdict};

/// What a card face shows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSummary {
    pub title: String,
    pub kind: CardKind,
    pub weight: i32,
    /// Effective exhaust, stress included.
    pub exhaust: i32,
    pub is_joint: bool,
    pub stress_tokens: i32,
    pub flavor: String,
    pub prompt: String,
}

impl From<&RainCard> for CardSummary {
    fn from(card: &RainCard) -> Self {
        Self {
            title: card.title.clone(),
            kind: card.kind,
            weight: card.weight,
            exhaust: card.exhaust_value(),
            is_joint: card.is_joint,
            stress_tokens: card.stress_tokens,
            flavor: card.flavor.clone(),
            prompt: card.prompt.clone(),
        }
    }
}

/// A player's dashboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub name: String,
    pub archetype: Archetype,
    pub capacity: i32,
    pub status: Status,
    pub burnout_tokens: u32,
    pub assists_left: u32,
    pub assist_buff: Option<AssistBuff>,
    pub resting: bool,
    pub queued_absorb: i32,
    pub double_next: bool,
    pub active_card: Option<CardSummary>,
    pub is_acting: bool,
}

/// One entry of the current choice menu.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub choice: Choice,
    pub label: String,
    /// Why the option cannot be taken, if it cannot.
    pub lock: Option<LockReason>,
}

/// Everything the presentation layer needs for one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    pub turn: u32,
    pub phase: Phase,
    pub resolved: u32,
    pub resolve_target: u32,
    pub players: PlayerMap<PlayerSummary>,
    pub actor: Option<PlayerId>,
    pub sprint_actions_left: u32,
    pub pending_shine: Option<CardSummary>,
    pub absorb_offer: Option<AbsorbOffer>,
    pub options: Vec<ChoiceOption>,
    pub can_undo: bool,
    /// Turn and phase an undo would return to.
    pub undo_to: Option<(u32, Phase)>,
    pub verdict: Verdict,
}

impl GameView {
    /// Project `state`. Never mutates.
    #[must_use]
    pub fn project(rules: &RainOrShine, state: &GameState, undo_to: Option<(u32, Phase)>) -> Self {
        let config = rules.config();
        let actor = state.current_actor();
        let verdict = Verdict::of(state, config);

        let players = PlayerMap::new(|seat| {
            let p = &state.players[seat];
            PlayerSummary {
                name: p.name.clone(),
                archetype: p.archetype,
                capacity: p.capacity,
                status: p.status,
                burnout_tokens: p.burnout_tokens,
                assists_left: p.assists_left(config),
                assist_buff: p.assist_buff,
                resting: p.resting,
                queued_absorb: p.queued_absorb,
                double_next: p.double_next,
                active_card: p.active_card.as_ref().map(CardSummary::from),
                is_acting: actor == Some(seat),
            }
        });

        let options = if verdict.is_over {
            Vec::new()
        } else {
            rules
                .options(state)
                .into_iter()
                .map(|(choice, lock)| ChoiceOption {
                    label: label(rules, state, choice),
                    choice,
                    lock,
                })
                .collect()
        };

        Self {
            turn: state.turn,
            phase: state.phase,
            resolved: state.resolved,
            resolve_target: config.resolve_target,
            players,
            actor,
            sprint_actions_left: state.sprint_actions,
            pending_shine: state.pending_shine.as_ref().map(|s| CardSummary::from(&s.card)),
            absorb_offer: rules.absorb_offer(state),
            options,
            can_undo: undo_to.is_some(),
            undo_to,
            verdict,
        }
    }
}

fn label(rules: &RainOrShine, state: &GameState, choice: Choice) -> String {
    match choice {
        Choice::FirstMover(p) => format!("{} goes first", state.players[p].name),
        Choice::ClaimShine => "Claim Shine & Redraw".to_string(),
        Choice::Absorb(n) => format!("Absorb {n}"),
        Choice::EndTurn => "End Turn".to_string(),
        Choice::Act(kind) => match state.current_actor() {
            Some(actor) => action_label(
                rules,
                &state.players[actor],
                &state.players[actor.partner()],
                kind,
            ),
            None => format!("{kind:?}"),
        },
    }
}

fn action_label(rules: &RainOrShine, me: &Player, partner: &Player, kind: ActionKind) -> String {
    let values = compute_values(me, partner);
    match kind {
        ActionKind::ResolveOwn => format!("Resolve my Rain Card (-{} Weight)", values.resolve),
        ActionKind::ResolvePartner => {
            format!("Resolve {}'s Rain Card (-{} Weight)", partner.name, values.resolve)
        }
        ActionKind::Comfort => format!("Comfort {} (+{} Capacity)", partner.name, values.comfort),
        ActionKind::SelfCare => format!("Self-Care (+{} Capacity)", values.self_care),
        ActionKind::Assist => format!(
            "Assist {} (Effect: {}) - {}/{} Left",
            partner.name,
            partner.archetype.assist_received().description(),
            me.assists_left(rules.config()),
            rules.config().assist_cap
        ),
        ActionKind::Sprint => "SPRINT (Perform 2 Actions)".to_string(),
        ActionKind::ActiveRecovery => "Active Recovery (+1 Capacity)".to_string(),
    }
}
