//! # Fixture Scheduling
//!
//! Turns a team list into a home-and-away round robin where each fixture is
//! assigned to a round.
//!
//! ## Schedulers
//! - [`GreedyRoundScheduler`]: single pass, earliest free round under a
//!   shared cursor. The default; double-books rounds from 8 teams up
//!   and once the cursor wraps.
//! - [`CircleScheduler`]: circle method, `2 * (M - 1)` rounds for `M` teams
//!   rounded up to even. Never double-books.
//!
//! Both sit behind [`FixtureScheduler`] so the season runner does not care
//! which one built its schedule.

pub mod circle;
pub mod greedy;

pub use circle::CircleScheduler;
pub use greedy::GreedyRoundScheduler;

use std::collections::{BTreeMap, HashSet};

use crate::config::{ScheduleConfig, SchedulerKind};
use crate::models::{Fixture, TeamId};

pub trait FixtureScheduler {
    /// Every ordered pair of distinct teams exactly once, sorted by round.
    fn build_schedule(&self, teams: &[TeamId]) -> Schedule;
}

/// Build the scheduler named by `config`.
pub fn scheduler_for(config: &ScheduleConfig) -> Box<dyn FixtureScheduler + Send + Sync> {
    match config.kind {
        SchedulerKind::Greedy => Box::new(GreedyRoundScheduler::new(config.wrap_after)),
        SchedulerKind::Circle => Box::new(CircleScheduler),
    }
}

/// A team booked into more than one fixture of the same round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub team: TeamId,
    pub round: u32,
    pub fixtures: usize,
}

/// Fixtures ordered by round. Insertion order is kept within a round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    fixtures: Vec<Fixture>,
}

impl Schedule {
    pub fn new(mut fixtures: Vec<Fixture>) -> Self {
        fixtures.sort_by_key(|f| f.round);
        Self { fixtures }
    }

    pub fn fixtures(&self) -> &[Fixture] {
        &self.fixtures
    }

    pub fn len(&self) -> usize {
        self.fixtures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fixtures.is_empty()
    }

    /// Highest round in use (0 for an empty schedule).
    pub fn round_count(&self) -> u32 {
        self.fixtures.last().map(|f| f.round).unwrap_or(0)
    }

    pub fn fixtures_in_round(&self, round: u32) -> impl Iterator<Item = &Fixture> {
        self.fixtures.iter().filter(move |f| f.round == round)
    }

    /// Every (team, round) slot that holds more than one fixture, ordered by
    /// round then team name.
    pub fn conflicts(&self) -> Vec<Conflict> {
        let mut slots: BTreeMap<(u32, &TeamId), usize> = BTreeMap::new();
        for fixture in &self.fixtures {
            *slots.entry((fixture.round, &fixture.home)).or_default() += 1;
            *slots.entry((fixture.round, &fixture.away)).or_default() += 1;
        }

        slots
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|((round, team), fixtures)| Conflict { team: team.clone(), round, fixtures })
            .collect()
    }

    pub fn into_fixtures(self) -> Vec<Fixture> {
        self.fixtures
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a Fixture;
    type IntoIter = std::slice::Iter<'a, Fixture>;

    fn into_iter(self) -> Self::IntoIter {
        self.fixtures.iter()
    }
}

/// Drop repeated names, keeping the first occurrence.
pub(crate) fn distinct(teams: &[TeamId]) -> Vec<&TeamId> {
    let mut seen = HashSet::new();
    teams.iter().filter(|t| seen.insert(*t)).collect()
}

// ========== Tests ==========

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(names: &[&str]) -> Vec<TeamId> {
        names.iter().map(|n| TeamId::from(*n)).collect()
    }

    #[test]
    fn test_schedule_sorts_by_round_stably() {
        let schedule = Schedule::new(vec![
            Fixture::new("A".into(), "B".into(), 2),
            Fixture::new("C".into(), "D".into(), 1),
            Fixture::new("B".into(), "A".into(), 1),
        ]);
        let order: Vec<_> = schedule.fixtures().iter().map(|f| f.home.as_str()).collect();
        assert_eq!(order, vec!["C", "B", "A"]);
        assert_eq!(schedule.round_count(), 2);
        assert_eq!(schedule.fixtures_in_round(1).count(), 2);
    }

    #[test]
    fn test_conflicts_detected() {
        let schedule = Schedule::new(vec![
            Fixture::new("A".into(), "B".into(), 1),
            Fixture::new("A".into(), "C".into(), 1),
            Fixture::new("B".into(), "C".into(), 2),
        ]);
        let conflicts = schedule.conflicts();
        assert_eq!(conflicts, vec![Conflict { team: "A".into(), round: 1, fixtures: 2 }]);
    }

    #[test]
    fn test_empty_schedule() {
        let schedule = Schedule::default();
        assert!(schedule.is_empty());
        assert_eq!(schedule.round_count(), 0);
        assert!(schedule.conflicts().is_empty());
    }

    #[test]
    fn test_distinct_keeps_first() {
        let teams = ids(&["B", "A", "B", "C", "A"]);
        let names: Vec<_> = distinct(&teams).into_iter().map(|t| t.as_str()).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_scheduler_for_kind() {
        let teams = ids(&["A", "B", "C", "D"]);
        let greedy = scheduler_for(&ScheduleConfig::default()).build_schedule(&teams);
        let circle = scheduler_for(&ScheduleConfig { kind: SchedulerKind::Circle, wrap_after: 37 })
            .build_schedule(&teams);
        assert_eq!(greedy.round_count(), 11);
        assert_eq!(circle.round_count(), 6);
        assert_eq!(greedy.len(), circle.len());
    }
}
