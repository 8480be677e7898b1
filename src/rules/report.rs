//! End-of-game statistics report.

use std::fmt;

use super::engine::evaluate;
use crate::cards::CardKind;
use crate::core::RulesConfig;
use crate::game::GameState;

const RULE: &str = "------------------------------";

/// Render the exportable report: result, per-player stats, draw counts and
/// the full event log.
///
/// Works on unfinished games too; the result line then reads `IN PROGRESS`.
#[must_use]
pub fn statistics_report(state: &GameState, config: &RulesConfig) -> String {
    StatisticsReport { state, config }.to_string()
}

struct StatisticsReport<'a> {
    state: &'a GameState,
    config: &'a RulesConfig,
}

impl fmt::Display for StatisticsReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { state, config } = *self;
        let result = evaluate(state, config);

        let headline = match result {
            Some(r) if r.is_victory() => "VICTORY",
            Some(_) => "DEFEAT",
            None => "IN PROGRESS",
        };
        let reason = result.map_or_else(String::new, |r| r.reason(state, config));

        writeln!(f, "GAME RESULT: {headline}")?;
        writeln!(f, "REASON: {reason}")?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "PLAYER STATS")?;

        for (i, (_, p)) in state.players.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{}:", p.tag())?;
            writeln!(f, "  - Capacity: Start {}, End {}", p.starting_capacity, p.capacity)?;
            writeln!(f, "  - High/Low Cap: {} / {}", p.max_capacity, p.min_capacity)?;
            writeln!(f, "  - Total Burnout Accumulated: {}", p.burnout_total)?;
            writeln!(f, "  - Assists Used: {}/{}", p.assists_used, config.assist_cap)?;
        }

        writeln!(f, "{RULE}")?;
        writeln!(f, "CARDS DRAWN")?;
        for kind in CardKind::ALL {
            writeln!(f, "  {kind}: {}", state.draw_stats.count(kind))?;
        }
        writeln!(f, "{RULE}")?;
        write!(f, "FULL GAME LOG:")?;
        for line in state.log.lines() {
            write!(f, "\n{line}")?;
        }
        Ok(())
    }
}
