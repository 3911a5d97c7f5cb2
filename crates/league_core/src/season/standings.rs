//! League table from the simulated part of a result log.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::TieBreak;
use crate::error::{Result, SimError};
use crate::models::{TeamId, DRAW_POINTS, WIN_POINTS};
use crate::result_log::ResultLog;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsRow {
    pub team: TeamId,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub total_goals_for: u32,
    pub total_goals_against: u32,
    pub total_points: u32,
}

impl StandingsRow {
    fn new(team: TeamId) -> Self {
        Self {
            team,
            played: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            total_goals_for: 0,
            total_goals_against: 0,
            total_points: 0,
        }
    }

    pub fn goal_difference(&self) -> i64 {
        i64::from(self.total_goals_for) - i64::from(self.total_goals_against)
    }
}

/// Rows sorted best first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standings {
    pub rows: Vec<StandingsRow>,
}

impl Standings {
    pub fn champion(&self) -> Option<&StandingsRow> {
        self.rows.first()
    }

    /// 1-based table position.
    pub fn position(&self, team: &TeamId) -> Option<usize> {
        self.rows.iter().position(|r| &r.team == team).map(|i| i + 1)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StandingsRow> {
        self.rows.iter()
    }
}

/// Points order only; level teams keep first-encountered order.
pub fn summarize(log: &ResultLog) -> Result<Standings> {
    summarize_with(log, TieBreak::FirstEncountered)
}

pub fn summarize_with(log: &ResultLog, tie_break: TieBreak) -> Result<Standings> {
    let mut rows: Vec<StandingsRow> = Vec::new();
    let mut index: HashMap<&TeamId, usize> = HashMap::new();

    for result in log.simulated() {
        let slot = *index.entry(&result.team).or_insert_with(|| {
            rows.push(StandingsRow::new(result.team.clone()));
            rows.len() - 1
        });
        let row = &mut rows[slot];
        let points = result.points.unwrap_or(0);

        row.played += 1;
        row.total_goals_for += result.goals_for;
        row.total_goals_against += result.goals_against;
        row.total_points += u32::from(points);
        match points {
            WIN_POINTS => row.wins += 1,
            DRAW_POINTS => row.draws += 1,
            _ => row.losses += 1,
        }
    }

    if rows.is_empty() {
        return Err(SimError::EmptyLog);
    }

    // sort_by is stable, so equal keys keep first-encountered order.
    rows.sort_by(|a, b| compare(a, b, tie_break));
    Ok(Standings { rows })
}

fn compare(a: &StandingsRow, b: &StandingsRow, tie_break: TieBreak) -> Ordering {
    let by_points = b.total_points.cmp(&a.total_points);
    match tie_break {
        TieBreak::FirstEncountered => by_points,
        TieBreak::GoalDifference => by_points
            .then_with(|| b.goal_difference().cmp(&a.goal_difference()))
            .then_with(|| b.total_goals_for.cmp(&a.total_goals_for)),
    }
}

// ========== Tests ==========

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MatchResult;

    fn played(home: &str, away: &str, hg: u32, ag: u32) -> [MatchResult; 2] {
        MatchResult::pair(home.into(), away.into(), hg, ag, 1)
    }

    fn table(standings: &Standings) -> Vec<(&str, u32)> {
        standings.iter().map(|r| (r.team.as_str(), r.total_points)).collect()
    }

    #[test]
    fn test_two_matches() {
        let log = ResultLog::new()
            .appended(played("A", "B", 2, 0))
            .appended(played("C", "D", 1, 1));
        let standings = summarize(&log).unwrap();

        assert_eq!(table(&standings), vec![("A", 3), ("C", 1), ("D", 1), ("B", 0)]);
        assert_eq!(standings.champion().map(|r| r.team.as_str()), Some("A"));
        assert_eq!(standings.position(&"B".into()), Some(4));
        assert_eq!(standings.position(&"Z".into()), None);
    }

    #[test]
    fn test_seed_rows_excluded() {
        let log = ResultLog::from_rows(vec![
            MatchResult::seed("B".into(), "A".into(), 9, 0, 1),
            MatchResult::seed("A".into(), "B".into(), 0, 9, 1),
        ])
        .appended(played("A", "B", 1, 0));
        let standings = summarize(&log).unwrap();

        let b = &standings.rows[1];
        assert_eq!(b.team.as_str(), "B");
        assert_eq!((b.total_goals_for, b.total_goals_against, b.played), (0, 1, 1));
    }

    #[test]
    fn test_no_simulated_rows_fails() {
        let log = ResultLog::from_rows(vec![MatchResult::seed("A".into(), "B".into(), 1, 0, 1)]);
        assert_eq!(summarize(&log), Err(SimError::EmptyLog));
        assert_eq!(summarize(&ResultLog::new()), Err(SimError::EmptyLog));
    }

    #[test]
    fn test_record_columns() {
        let log = ResultLog::new()
            .appended(played("A", "B", 3, 1))
            .appended(played("B", "A", 2, 2))
            .appended(played("A", "C", 0, 1));
        let standings = summarize(&log).unwrap();
        let a = &standings.rows[standings.position(&"A".into()).unwrap() - 1];

        assert_eq!((a.played, a.wins, a.draws, a.losses), (3, 1, 1, 1));
        assert_eq!(a.total_points, 4);
        assert_eq!(a.goal_difference(), 0);
    }

    #[test]
    fn test_goal_difference_tie_break() {
        let log = ResultLog::new()
            .appended(played("A", "X", 1, 0))
            .appended(played("B", "Y", 4, 0))
            .appended(played("C", "Z", 4, 3));

        let plain = summarize(&log).unwrap();
        assert_eq!(&table(&plain)[..3], &[("A", 3), ("B", 3), ("C", 3)]);

        let ranked = summarize_with(&log, TieBreak::GoalDifference).unwrap();
        let order: Vec<_> = ranked.iter().take(3).map(|r| r.team.as_str()).collect();
        assert_eq!(order, vec!["B", "C", "A"]);
    }
}
