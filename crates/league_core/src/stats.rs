//! Stats table
//!
//! Per-team scoring/conceding rates and the two league-wide scalars the
//! goal model normalises by. A snapshot is a pure function of a result log
//! and is rebuilt whenever the log grows.

use std::collections::HashMap;

use crate::config::ConcededBasis;
use crate::error::{Result, SimError};
use crate::models::TeamId;
use crate::result_log::ResultLog;

/// Mean goals for/against over every row where the team is `team`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TeamRates {
    pub avg_goals_for: f64,
    pub avg_goals_against: f64,
    pub rows: usize,
}

impl TeamRates {
    pub fn goal_difference_per_row(&self) -> f64 {
        self.avg_goals_for - self.avg_goals_against
    }
}

/// One team's rates bundled with the league scalars of the same snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamStats {
    pub team: TeamId,
    pub avg_goals_for: f64,
    pub avg_goals_against: f64,
    pub league_avg_scored: f64,
    pub league_avg_conceded: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatsSnapshot {
    order: Vec<TeamId>,
    teams: HashMap<TeamId, TeamRates>,
    pub avg_goals_scored: f64,
    pub avg_goals_conceded: f64,
}

#[derive(Default)]
struct Totals {
    goals_for: u64,
    goals_against: u64,
    rows: usize,
}

/// Default basis: the league "conceded" average is the mean of goals for.
pub fn compute_stats(log: &ResultLog) -> Result<StatsSnapshot> {
    compute_stats_with(log, ConcededBasis::GoalsFor)
}

pub fn compute_stats_with(log: &ResultLog, basis: ConcededBasis) -> Result<StatsSnapshot> {
    if log.is_empty() {
        return Err(SimError::EmptyLog);
    }

    let mut order = Vec::new();
    let mut totals: HashMap<&TeamId, Totals> = HashMap::new();
    let mut league_for = 0u64;
    let mut league_against = 0u64;

    for row in log.rows() {
        let entry = totals.entry(&row.team).or_insert_with(|| {
            order.push(row.team.clone());
            Totals::default()
        });
        entry.goals_for += u64::from(row.goals_for);
        entry.goals_against += u64::from(row.goals_against);
        entry.rows += 1;

        league_for += u64::from(row.goals_for);
        league_against += u64::from(row.goals_against);
    }

    let n = log.len() as f64;
    let avg_goals_scored = league_for as f64 / n;
    let avg_goals_conceded = match basis {
        ConcededBasis::GoalsFor => avg_goals_scored,
        ConcededBasis::GoalsAgainst => league_against as f64 / n,
    };

    let teams = totals
        .into_iter()
        .map(|(team, t)| {
            let rows = t.rows as f64;
            let rates = TeamRates {
                avg_goals_for: t.goals_for as f64 / rows,
                avg_goals_against: t.goals_against as f64 / rows,
                rows: t.rows,
            };
            (team.clone(), rates)
        })
        .collect();

    Ok(StatsSnapshot { order, teams, avg_goals_scored, avg_goals_conceded })
}

impl StatsSnapshot {
    pub fn rates(&self, team: &TeamId) -> Result<&TeamRates> {
        self.teams
            .get(team)
            .ok_or_else(|| SimError::UnknownTeam { team: team.clone() })
    }

    /// The row the goal model consumes for `team`.
    pub fn team(&self, team: &TeamId) -> Result<TeamStats> {
        let rates = self.rates(team)?;
        Ok(TeamStats {
            team: team.clone(),
            avg_goals_for: rates.avg_goals_for,
            avg_goals_against: rates.avg_goals_against,
            league_avg_scored: self.avg_goals_scored,
            league_avg_conceded: self.avg_goals_conceded,
        })
    }

    /// Teams in first-appearance order.
    pub fn teams(&self) -> &[TeamId] {
        &self.order
    }

    pub fn contains(&self, team: &TeamId) -> bool {
        self.teams.contains_key(team)
    }

    /// Highest mean goal difference per row; ties go to the earlier team.
    pub fn strongest_team(&self) -> Option<&TeamId> {
        let mut best: Option<(&TeamId, f64)> = None;
        for team in &self.order {
            let gd = self.teams[team].goal_difference_per_row();
            match best {
                Some((_, top)) if gd <= top => {}
                _ => best = Some((team, gd)),
            }
        }
        best.map(|(team, _)| team)
    }
}
