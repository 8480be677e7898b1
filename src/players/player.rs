//! Per-player state.

use serde::{Deserialize, Serialize};

use super::archetype::{Archetype, AssistBuff};
use crate::cards::RainCard;
use crate::core::RulesConfig;

/// Capacity tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Flow,
    Strained,
    Burnout,
}

impl Status {
    /// Tier for a capacity value under the given thresholds.
    ///
    /// ```
    /// use rain_or_shine::core::RulesConfig;
    /// use rain_or_shine::players::Status;
    ///
    /// let config = RulesConfig::default();
    /// assert_eq!(Status::from_capacity(10, &config), Status::Flow);
    /// assert_eq!(Status::from_capacity(5, &config), Status::Strained);
    /// assert_eq!(Status::from_capacity(4, &config), Status::Burnout);
    /// ```
    #[must_use]
    pub fn from_capacity(capacity: i32, config: &RulesConfig) -> Self {
        if capacity >= config.flow_threshold {
            Status::Flow
        } else if capacity >= config.strained_threshold {
            Status::Strained
        } else {
            Status::Burnout
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Status::Flow => "Flow",
            Status::Strained => "Strained",
            Status::Burnout => "Burnout",
        };
        f.write_str(name)
    }
}

/// One of the two participants.
///
/// `status` is only recomputed at end-of-turn settlement, so capacity gained
/// mid-turn does not change action values until the next turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub archetype: Archetype,
    pub capacity: i32,
    pub status: Status,
    pub burnout_tokens: u32,
    pub active_card: Option<RainCard>,

    // === Transient flags ===
    /// A recovery turn is due (after an unpaced Sprint).
    pub resting: bool,
    /// Next Sprint skips the recovery turn.
    pub pacing: bool,
    /// Absorbed last turn; cannot absorb this turn.
    pub absorb_cooldown: bool,
    /// Damage queued to absorb at settlement.
    pub queued_absorb: i32,
    /// Assist buff shown on the player's summary.
    pub assist_buff: Option<AssistBuff>,
    /// Next Resolve/Comfort/Self-Care is doubled.
    pub double_next: bool,

    // === Lifetime counters ===
    pub starting_capacity: i32,
    pub min_capacity: i32,
    pub max_capacity: i32,
    pub burnout_total: u32,
    pub assists_used: u32,
}

impl Player {
    /// Create a player at their opening capacity.
    #[must_use]
    pub fn new(name: impl Into<String>, archetype: Archetype, capacity: i32, config: &RulesConfig) -> Self {
        Self {
            name: name.into(),
            archetype,
            capacity,
            status: Status::from_capacity(capacity, config),
            burnout_tokens: 0,
            active_card: None,
            resting: false,
            pacing: false,
            absorb_cooldown: false,
            queued_absorb: 0,
            assist_buff: None,
            double_next: false,
            starting_capacity: capacity,
            min_capacity: capacity,
            max_capacity: capacity,
            burnout_total: 0,
            assists_used: 0,
        }
    }

    /// Change capacity, keeping the lifetime min/max trackers current.
    pub fn mod_capacity(&mut self, amount: i32) {
        self.capacity += amount;
        self.min_capacity = self.min_capacity.min(self.capacity);
        self.max_capacity = self.max_capacity.max(self.capacity);
    }

    /// Recompute status from current capacity.
    pub fn update_status(&mut self, config: &RulesConfig) {
        self.status = Status::from_capacity(self.capacity, config);
    }

    /// Assist charges left.
    #[must_use]
    pub fn assists_left(&self, config: &RulesConfig) -> u32 {
        config.assist_cap.saturating_sub(self.assists_used)
    }

    /// `"Name (Archetype)"`, as used in log lines.
    #[must_use]
    pub fn tag(&self) -> String {
        format!("{} ({})", self.name, self.archetype)
    }

    /// Receive an assist from the partner. Returns the buff applied.
    pub fn receive_assist(&mut self) -> AssistBuff {
        let buff = self.archetype.assist_received();
        self.mod_capacity(buff.capacity());
        match buff {
            AssistBuff::Permission => self.double_next = true,
            AssistBuff::Pacing => {
                self.pacing = true;
                self.resting = false;
            }
            AssistBuff::Space | AssistBuff::Validation => {}
        }
        self.assist_buff = Some(buff);
        buff
    }

    /// Keep only the buff labels whose effect is still pending.
    pub fn refresh_assist_buff(&mut self) {
        self.assist_buff = match self.archetype {
            Archetype::Sprinter if self.pacing => Some(AssistBuff::Pacing),
            Archetype::Peacemaker if self.double_next => Some(AssistBuff::Permission),
            _ => None,
        };
    }

    /// Burnout-token accounting after settlement.
    pub fn tally_burnout(&mut self) {
        if self.status == Status::Burnout {
            self.burnout_tokens += 1;
            self.burnout_total += 1;
        } else {
            self.burnout_tokens = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(archetype: Archetype, capacity: i32) -> Player {
        Player::new("Ana", archetype, capacity, &RulesConfig::default())
    }

    #[test]
    fn test_new_player() {
        let p = player(Archetype::Atlas, 7);
        assert_eq!(p.status, Status::Strained);
        assert_eq!(p.starting_capacity, 7);
        assert_eq!((p.min_capacity, p.max_capacity), (7, 7));
        assert_eq!(p.tag(), "Ana (Atlas)");
    }

    #[test]
    fn test_mod_capacity_tracks_extremes() {
        let mut p = player(Archetype::Soloist, 7);

        p.mod_capacity(5);
        p.mod_capacity(-9);
        p.mod_capacity(2);

        assert_eq!(p.capacity, 5);
        assert_eq!(p.max_capacity, 12);
        assert_eq!(p.min_capacity, 3);
    }

    #[test]
    fn test_status_not_recomputed_until_asked() {
        let config = RulesConfig::default();
        let mut p = player(Archetype::Soloist, 7);

        p.mod_capacity(10);
        assert_eq!(p.status, Status::Strained);

        p.update_status(&config);
        assert_eq!(p.status, Status::Flow);
    }

    #[test]
    fn test_receive_assist_pacing() {
        let mut p = player(Archetype::Sprinter, 8);
        p.resting = true;

        let buff = p.receive_assist();

        assert_eq!(buff, AssistBuff::Pacing);
        assert!(p.pacing);
        assert!(!p.resting);
        assert_eq!(p.capacity, 8);
    }

    #[test]
    fn test_receive_assist_permission() {
        let mut p = player(Archetype::Peacemaker, 8);
        p.receive_assist();
        assert!(p.double_next);
        assert_eq!(p.capacity, 10);
        assert_eq!(p.assist_buff, Some(AssistBuff::Permission));
    }

    #[test]
    fn test_refresh_assist_buff() {
        let mut p = player(Archetype::Atlas, 8);
        p.receive_assist();
        p.refresh_assist_buff();
        assert_eq!(p.assist_buff, None);

        let mut s = player(Archetype::Sprinter, 8);
        s.receive_assist();
        s.refresh_assist_buff();
        assert_eq!(s.assist_buff, Some(AssistBuff::Pacing));
    }

    #[test]
    fn test_tally_burnout_resets() {
        let mut p = player(Archetype::Soloist, 3);

        p.tally_burnout();
        p.tally_burnout();
        assert_eq!(p.burnout_tokens, 2);

        p.status = Status::Strained;
        p.tally_burnout();
        assert_eq!(p.burnout_tokens, 0);
        assert_eq!(p.burnout_total, 2);
    }
}
