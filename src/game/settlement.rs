//! End-of-turn exhaust settlement.
//!
//! Deterministic given the state: no randomness and no choices.
//!
//! Order:
//! 1. Raw damage = own card's exhaust value
//! 2. Queued absorb moves damage from the partner to the Atlas
//! 3. Joint cards add 1 to the partner, except that a Peacemaker whose
//!    partner's raw damage is 3+ loses 1 capacity directly instead
//! 4. An Atlas in Flow shrugs off 1 damage
//! 5. Damage is applied, statuses recomputed, buffs refreshed, burnout
//!    tokens tallied, and active cards aged

use crate::core::{Phase, PlayerId, PlayerMap, RulesConfig};
use crate::players::{Archetype, Status};

use super::state::GameState;

/// Partner raw damage at which a Peacemaker feels it.
const EMPATH_THRESHOLD: i32 = 3;

/// Settle the turn and move to the next turn's Setup.
pub fn settle_turn(state: &mut GameState, config: &RulesConfig) {
    let mut damage = PlayerMap::new(|p| {
        state.players[p]
            .active_card
            .as_ref()
            .map_or(0, |c| c.exhaust_value())
    });

    for seat in PlayerId::both() {
        let player = &mut state.players[seat];
        let absorbed = player.queued_absorb;
        if absorbed > 0 {
            player.absorb_cooldown = true;
            player.queued_absorb = 0;
            damage[seat] += absorbed;
            damage[seat.partner()] -= absorbed;
        } else {
            player.absorb_cooldown = false;
        }
    }
    for (_, d) in damage.iter_mut() {
        *d = (*d).max(0);
    }

    let raw = damage.clone();
    for seat in PlayerId::both() {
        let partner = seat.partner();
        let partner_joint = state.players[partner]
            .active_card
            .as_ref()
            .is_some_and(|c| c.is_joint);

        if state.players[seat].archetype == Archetype::Peacemaker && raw[partner] >= EMPATH_THRESHOLD {
            state.players[seat].mod_capacity(-1);
            let line = format!(
                "{} (Peacemaker) feels pain from partner's high damage. (-1 Capacity)",
                state.players[seat].name
            );
            state.log(line);
        } else if partner_joint {
            damage[seat] += 1;
        }
    }

    for seat in PlayerId::both() {
        let player = &state.players[seat];
        if player.archetype == Archetype::Atlas && player.status == Status::Flow && damage[seat] > 0 {
            damage[seat] -= 1;
            let line = format!("{} (Atlas) Pain Tolerance reduces damage by 1.", player.name);
            state.log(line);
        }
    }

    for seat in PlayerId::both() {
        let player = &mut state.players[seat];
        let taken = damage[seat].max(0);
        let line = if taken > 0 {
            let old = player.capacity;
            player.mod_capacity(-taken);
            format!(
                "{} takes {taken} Exhaust Damage. Capacity {old} -> {}.",
                player.name, player.capacity
            )
        } else {
            format!("{} takes 0 damage.", player.name)
        };
        state.log(line);
    }

    for seat in PlayerId::both() {
        let player = &mut state.players[seat];
        player.update_status(config);
        player.refresh_assist_buff();
        player.tally_burnout();

        let mut stressed = None;
        if let Some(card) = player.active_card.as_mut() {
            if card.age_one_turn(config.stress_age) {
                stressed = Some(card.stress_tokens);
            }
        }
        if let Some(total) = stressed {
            let line = format!(
                "STRESS ACCUMULATED: {}'s card rots! +1 Token (Total: {total})",
                player.name
            );
            state.log(line);
        }
    }

    tracing::debug!(
        target: "rain_or_shine::engine",
        turn = state.turn,
        first_damage = damage[PlayerId::FIRST],
        second_damage = damage[PlayerId::SECOND],
        "turn.settled"
    );

    state.turn += 1;
    state.phase = Phase::Setup;
}
