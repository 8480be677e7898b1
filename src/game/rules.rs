//! Rain or Shine rules.
//!
//! Phase transitions happen in two ways:
//! - A validated [`Choice`] commits a step (first mover, action, Shine claim,
//!   absorb amount, end of turn)
//! - After every commit, automatic transitions run until a phase needs a
//!   human again: Setup draws, an empty actor queue, an Atlas with nothing
//!   to absorb
//!
//! Nothing advances once the game is terminal.

use serde::{Deserialize, Serialize};
use smallvec::smallvec;

use super::choice::{ActionKind, Choice};
use super::settlement::settle_turn;
use super::state::{GameState, PendingShine};
use crate::core::{LockReason, Phase, PlayerId, RainResult, Randomness, RulesConfig};
use crate::players::{Archetype, Status};
use crate::rules::{compute_values, evaluate, RulesEngine};

/// An Atlas's chance to take some of the partner's damage this turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbsorbOffer {
    pub atlas: PlayerId,
    /// Damage the partner is about to take.
    pub projected_damage: i32,
    /// Largest amount the Atlas may absorb.
    pub max: i32,
}

/// The game's rules, parameterised by [`RulesConfig`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RainOrShine {
    config: RulesConfig,
}

impl RainOrShine {
    #[must_use]
    pub fn new(config: RulesConfig) -> Self {
        Self { config }
    }

    /// The absorb offer for this turn, if any.
    ///
    /// The first Atlas in seat order who is off cooldown gets the offer, so
    /// with two Atlases only one absorbs per turn and seat one has priority
    /// while off cooldown. The projected damage is the partner's card exhaust plus one if the Atlas's
    /// own card is joint.
    #[must_use]
    pub fn absorb_offer(&self, state: &GameState) -> Option<AbsorbOffer> {
        let atlas = PlayerId::both().find(|&p| {
            let pl = &state.players[p];
            pl.archetype == Archetype::Atlas && !pl.absorb_cooldown
        })?;

        let partner_card = state.players[atlas.partner()].active_card.as_ref();
        let own_joint = state.players[atlas]
            .active_card
            .as_ref()
            .is_some_and(|c| c.is_joint);
        let projected_damage =
            partner_card.map_or(0, |c| c.exhaust_value()) + i32::from(own_joint);

        (projected_damage > 0).then(|| AbsorbOffer {
            atlas,
            projected_damage,
            max: projected_damage.min(self.config.absorb_cap),
        })
    }

    /// Action kinds shown to `actor` this slot, in menu order.
    #[must_use]
    pub fn action_menu(&self, state: &GameState, actor: PlayerId) -> Vec<ActionKind> {
        let player = &state.players[actor];
        if player.resting && state.sprint_actions == 0 {
            return vec![ActionKind::ActiveRecovery];
        }

        let mut menu = vec![
            ActionKind::ResolveOwn,
            ActionKind::ResolvePartner,
            ActionKind::Comfort,
            ActionKind::SelfCare,
            ActionKind::Assist,
        ];
        if player.archetype == Archetype::Sprinter {
            menu.push(ActionKind::Sprint);
        }
        menu
    }

    fn check_action(&self, state: &GameState, kind: ActionKind) -> Result<(), LockReason> {
        let actor = state
            .current_actor()
            .ok_or(LockReason::WrongPhase(state.phase))?;
        let me = &state.players[actor];
        let partner = &state.players[actor.partner()];

        if me.resting && state.sprint_actions == 0 {
            return match kind {
                ActionKind::ActiveRecovery => Ok(()),
                _ => Err(LockReason::RecoveryDue),
            };
        }

        match kind {
            ActionKind::ActiveRecovery => Err(LockReason::RecoveryNotDue),
            ActionKind::ResolveOwn if me.active_card.is_none() => Err(LockReason::NoActiveCard),
            ActionKind::ResolvePartner if partner.active_card.is_none() => {
                Err(LockReason::PartnerHasNoCard)
            }
            ActionKind::ResolvePartner
                if me.archetype == Archetype::Soloist && me.status != Status::Flow =>
            {
                Err(LockReason::SoloistNeedsFlow)
            }
            ActionKind::Comfort if me.archetype == Archetype::Soloist => {
                Err(LockReason::SoloistCannotComfort)
            }
            ActionKind::Comfort if compute_values(me, partner).comfort == 0 => {
                Err(LockReason::ComfortDepleted)
            }
            ActionKind::Assist if state.sprint_assist_used => Err(LockReason::AssistUsedThisSprint),
            ActionKind::Assist if me.assists_used >= self.config.assist_cap => {
                Err(LockReason::AssistChargesSpent)
            }
            ActionKind::Sprint if me.archetype != Archetype::Sprinter => Err(LockReason::NotASprinter),
            ActionKind::Sprint if state.sprint_actions > 0 => Err(LockReason::AlreadySprinting),
            _ => Ok(()),
        }
    }

    fn apply_action(&self, state: &mut GameState, kind: ActionKind) {
        let Some(actor) = state.current_actor() else {
            return;
        };
        let partner = actor.partner();

        match kind {
            ActionKind::ActiveRecovery => {
                let me = &mut state.players[actor];
                let old = me.capacity;
                me.mod_capacity(1);
                me.resting = false;
                me.double_next = false;
                let line = format!(
                    "{} takes Active Recovery. Capacity {old} -> {}.",
                    me.tag(),
                    me.capacity
                );
                state.log(line);
                state.actor_queue.remove(0);
                return;
            }
            ActionKind::Sprint => {
                state.sprint_actions = self.config.sprint_slots;
                let me = &mut state.players[actor];
                let paced = me.pacing;
                if paced {
                    me.pacing = false;
                } else {
                    me.resting = true;
                }
                let (name, tag) = (me.name.clone(), me.tag());
                if paced {
                    state.log(format!("{name} uses PACING to Sprint without fatigue!"));
                }
                state.log(format!(
                    "{tag} activates SPRINT! ({} Actions).",
                    self.config.sprint_slots
                ));
                return;
            }
            _ => {}
        }

        let values = compute_values(&state.players[actor], &state.players[partner]);

        match kind {
            ActionKind::ResolveOwn => self.resolve_card(state, actor, actor, values.resolve),
            ActionKind::ResolvePartner => self.resolve_card(state, actor, partner, values.resolve),
            ActionKind::Comfort => {
                let tag = state.players[actor].tag();
                let target = &mut state.players[partner];
                let old = target.capacity;
                target.mod_capacity(values.comfort);
                let line = format!(
                    "{tag} comforts {name}. {name} Capacity {old} -> {new}.",
                    name = target.name,
                    new = target.capacity
                );
                state.log(line);
            }
            ActionKind::SelfCare => {
                let me = &mut state.players[actor];
                let old = me.capacity;
                me.mod_capacity(values.self_care);
                let line = format!("{} self-cares. Capacity {old} -> {}.", me.tag(), me.capacity);
                state.log(line);
            }
            ActionKind::Assist => {
                if state.sprint_actions > 0 {
                    state.sprint_assist_used = true;
                }
                let (me, target) = state.players.split_mut(actor);
                me.assists_used += 1;
                let old = target.capacity;
                let buff = target.receive_assist();
                let line = format!(
                    "{} assists {} with {}. {} Capacity {old} -> {}. (Charges: {}/{})",
                    me.tag(),
                    target.tag(),
                    buff.label(),
                    target.name,
                    target.capacity,
                    me.assists_used,
                    self.config.assist_cap
                );
                state.log(line);
            }
            ActionKind::Sprint | ActionKind::ActiveRecovery => {}
        }

        if kind.consumes_double() {
            state.players[actor].double_next = false;
        }

        if state.sprint_actions > 0 {
            state.sprint_actions -= 1;
        }
        if state.sprint_actions == 0 {
            state.actor_queue.remove(0);
            state.sprint_assist_used = false;
        }
    }

    /// Reduce `holder`'s card by `amount`; retire it at weight zero.
    fn resolve_card(&self, state: &mut GameState, actor: PlayerId, holder: PlayerId, amount: i32) {
        let actor_tag = state.players[actor].tag();
        let holder_name = state.players[holder].name.clone();
        let Some(card) = state.players[holder].active_card.as_mut() else {
            return;
        };

        let old = card.weight;
        card.weight -= amount;
        let whose = if actor == holder {
            String::new()
        } else {
            format!("{holder_name}'s ")
        };
        let line = format!(
            "{actor_tag} resolves {whose}'{}'. Weight {old} -> {}.",
            card.title, card.weight
        );
        let retired = card.is_resolved();
        state.log(line);

        if !retired {
            return;
        }
        let Some(card) = state.players[holder].active_card.take() else {
            return;
        };
        state.resolved += 1;

        let bonus = card.kind.resolve_bonus();
        if bonus > 0 {
            state.players[holder].mod_capacity(bonus);
            state.log(format!("Card Resolved! {holder_name} gets +{bonus} Capacity."));
        } else {
            state.log("Card Resolved! (No Bonus).");
        }
        tracing::debug!(
            target: "rain_or_shine::engine",
            title = %card.title,
            resolved = state.resolved,
            "card.resolved"
        );
    }

    fn claim_shine<R: Randomness>(&self, state: &mut GameState, rng: &mut R) {
        let Some(pending) = state.pending_shine.take() else {
            return;
        };
        let claimant = &mut state.players[pending.claimant];
        let old = claimant.capacity;
        claimant.mod_capacity(pending.card.weight);
        let line = format!(
            "{} claims {}. Capacity {old} -> {}.",
            claimant.tag(),
            pending.card.title,
            claimant.capacity
        );
        state.log(line);

        let replacement = state.draw(&self.config, rng);
        if replacement.is_shine() {
            state.pending_shine = Some(PendingShine {
                card: replacement,
                ..pending
            });
            return;
        }

        state.players[pending.claimant].active_card = Some(replacement);
        state.phase = if pending.return_to_setup {
            Phase::Setup
        } else if state.sprint_actions > 0 || !state.actor_queue.is_empty() {
            Phase::Action
        } else {
            Phase::AtlasIntervention
        };
    }

    /// Run automatic transitions until a phase needs a human choice.
    pub(crate) fn run_automatic<R: Randomness>(&self, state: &mut GameState, rng: &mut R) {
        loop {
            if evaluate(state, &self.config).is_some() {
                return;
            }

            let next = match state.phase {
                Phase::Setup => self.run_setup(state, rng),
                Phase::Action if state.actor_queue.is_empty() => Phase::AtlasIntervention,
                Phase::AtlasIntervention if self.absorb_offer(state).is_none() => Phase::Exhaust,
                _ => return,
            };

            tracing::debug!(
                target: "rain_or_shine::engine",
                turn = state.turn,
                from = %state.phase,
                to = %next,
                "phase.transition"
            );
            state.phase = next;
            if next == Phase::Shine {
                return;
            }
        }
    }

    /// Fill empty card slots; divert to the Shine sub-flow on a Shine draw.
    fn run_setup<R: Randomness>(&self, state: &mut GameState, rng: &mut R) -> Phase {
        for seat in PlayerId::both() {
            if state.players[seat].active_card.is_some() {
                continue;
            }
            let card = state.draw(&self.config, rng);
            if card.is_shine() {
                state.pending_shine = Some(PendingShine {
                    card,
                    claimant: seat,
                    return_to_setup: true,
                });
                return Phase::Shine;
            }
            state.players[seat].active_card = Some(card);
        }
        Phase::Strategy
    }
}

impl RulesEngine for RainOrShine {
    fn config(&self) -> &RulesConfig {
        &self.config
    }

    fn options(&self, state: &GameState) -> Vec<(Choice, Option<LockReason>)> {
        let with_lock = |choice: Choice| (choice, self.check(state, &choice).err());

        match state.phase {
            Phase::Setup => Vec::new(),
            Phase::Strategy => PlayerId::both().map(Choice::FirstMover).map(with_lock).collect(),
            Phase::Action => match state.current_actor() {
                Some(actor) => self
                    .action_menu(state, actor)
                    .into_iter()
                    .map(Choice::Act)
                    .map(with_lock)
                    .collect(),
                None => Vec::new(),
            },
            Phase::Shine => vec![with_lock(Choice::ClaimShine)],
            Phase::AtlasIntervention => match self.absorb_offer(state) {
                Some(offer) => (0..=offer.max).map(Choice::Absorb).map(with_lock).collect(),
                None => Vec::new(),
            },
            Phase::Exhaust => vec![with_lock(Choice::EndTurn)],
        }
    }

    fn check(&self, state: &GameState, choice: &Choice) -> Result<(), LockReason> {
        let expected = match choice {
            Choice::FirstMover(_) => Phase::Strategy,
            Choice::Act(_) => Phase::Action,
            Choice::ClaimShine => Phase::Shine,
            Choice::Absorb(_) => Phase::AtlasIntervention,
            Choice::EndTurn => Phase::Exhaust,
        };
        if state.phase != expected {
            return Err(LockReason::WrongPhase(state.phase));
        }

        match *choice {
            Choice::Act(kind) => self.check_action(state, kind),
            Choice::ClaimShine if state.pending_shine.is_none() => {
                Err(LockReason::WrongPhase(state.phase))
            }
            Choice::Absorb(amount) => {
                let offer = self.absorb_offer(state).ok_or(LockReason::NoAbsorbOffer)?;
                if (0..=offer.max).contains(&amount) {
                    Ok(())
                } else {
                    Err(LockReason::AbsorbOutOfRange { max: offer.max })
                }
            }
            _ => Ok(()),
        }
    }

    fn apply<R: Randomness>(&self, state: &mut GameState, rng: &mut R, choice: Choice) -> RainResult<()> {
        tracing::debug!(
            target: "rain_or_shine::engine",
            turn = state.turn,
            phase = %state.phase,
            choice = ?choice,
            "choice.apply"
        );

        match choice {
            Choice::FirstMover(first) => {
                state.actor_queue = smallvec![first, first.partner()];
                let line = format!("{} acts first.", state.players[first].name);
                state.log(line);
                state.phase = Phase::Action;
            }
            Choice::Act(kind) => self.apply_action(state, kind),
            Choice::ClaimShine => self.claim_shine(state, rng),
            Choice::Absorb(amount) => {
                if let Some(offer) = self.absorb_offer(state) {
                    state.players[offer.atlas].queued_absorb = amount;
                    if amount > 0 {
                        let line = format!(
                            "{} prepares to ABSORB {amount} damage for {}.",
                            state.players[offer.atlas].name,
                            state.players[offer.atlas.partner()].name
                        );
                        state.log(line);
                    }
                }
                state.phase = Phase::Exhaust;
            }
            Choice::EndTurn => settle_turn(state, &self.config),
        }

        self.run_automatic(state, rng);

        if let Some(result) = evaluate(state, &self.config) {
            tracing::info!(
                target: "rain_or_shine::engine",
                turn = state.turn,
                victory = result.is_victory(),
                resolved = state.resolved,
                "game.over"
            );
        }
        Ok(())
    }
}
