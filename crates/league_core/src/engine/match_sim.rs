//! One fixture, two Poisson draws, two mirrored result rows.

use log::debug;
use rand::Rng;

use super::goal_model::simulate_goals;
use crate::error::Result;
use crate::models::MatchResult;
use crate::stats::TeamStats;

/// Simulate `home` against `away` in `round`. Returns the home row first.
///
/// Both draws normalise by the *home* side's league scalars. Within one
/// snapshot the two sides carry the same scalars, so this only matters when
/// callers pass rows taken from different snapshots.
pub fn simulate_match<R: Rng + ?Sized>(
    rng: &mut R,
    home: &TeamStats,
    away: &TeamStats,
    round: u32,
) -> Result<[MatchResult; 2]> {
    let scored = home.league_avg_scored;
    let conceded = home.league_avg_conceded;

    let home_goals = simulate_goals(rng, home.avg_goals_for, away.avg_goals_against, scored, conceded)?;
    let away_goals = simulate_goals(rng, away.avg_goals_for, home.avg_goals_against, scored, conceded)?;

    debug!(
        "Round {}: {} {}-{} {}",
        round, home.team, home_goals, away_goals, away.team
    );

    Ok(MatchResult::pair(
        home.team.clone(),
        away.team.clone(),
        home_goals,
        away_goals,
        round,
    ))
}

// ========== Tests ==========
