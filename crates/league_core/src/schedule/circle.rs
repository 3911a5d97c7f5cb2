//! Circle-method double round robin
//!
//! The first slot stays fixed while the others rotate one place per round.
//! An odd team count gets a bye slot. Rounds `1..=M-1` form the first leg;
//! the second leg replays them with home and away swapped.

use super::{distinct, FixtureScheduler, Schedule};
use crate::models::{Fixture, TeamId};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CircleScheduler;

impl FixtureScheduler for CircleScheduler {
    fn build_schedule(&self, teams: &[TeamId]) -> Schedule {
        let mut slots: Vec<Option<&TeamId>> = distinct(teams).into_iter().map(Some).collect();
        if slots.len() % 2 == 1 {
            slots.push(None);
        }

        let n = slots.len();
        if n < 2 {
            return Schedule::default();
        }

        let legs = (n - 1) as u32;
        let mut fixtures = Vec::with_capacity(n * (n - 1));

        for round in 0..legs {
            for i in 0..n / 2 {
                let (mut home, mut away) = (slots[i], slots[n - 1 - i]);
                // The fixed slot alternates venues.
                if i == 0 && round % 2 == 1 {
                    std::mem::swap(&mut home, &mut away);
                }
                if let (Some(home), Some(away)) = (home, away) {
                    fixtures.push(Fixture::new(home.clone(), away.clone(), round + 1));
                    fixtures.push(Fixture::new(away.clone(), home.clone(), round + 1 + legs));
                }
            }
            slots[1..].rotate_right(1);
        }

        Schedule::new(fixtures)
    }
}

// ========== Tests ==========

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn ids(n: usize) -> Vec<TeamId> {
        (0..n).map(|i| TeamId::new(format!("T{:02}", i))).collect()
    }

    #[test]
    fn test_four_teams_six_rounds() {
        let schedule = CircleScheduler.build_schedule(&ids(4));
        assert_eq!(schedule.len(), 12);
        assert_eq!(schedule.round_count(), 6);
        for round in 1..=6 {
            assert_eq!(schedule.fixtures_in_round(round).count(), 2);
        }
        assert!(schedule.conflicts().is_empty());
    }

    #[test]
    fn test_twenty_teams_full_season() {
        let schedule = CircleScheduler.build_schedule(&ids(20));
        assert_eq!(schedule.len(), 380);
        assert_eq!(schedule.round_count(), 38);
        assert!(schedule.conflicts().is_empty());
    }

    #[test]
    fn test_odd_team_count_gets_bye() {
        let schedule = CircleScheduler.build_schedule(&ids(5));
        assert_eq!(schedule.len(), 20);
        assert_eq!(schedule.round_count(), 10);
        for round in 1..=10 {
            assert_eq!(schedule.fixtures_in_round(round).count(), 2);
        }
        assert!(schedule.conflicts().is_empty());
    }

    #[test]
    fn test_second_leg_mirrors_first() {
        let schedule = CircleScheduler.build_schedule(&ids(6));
        let legs = 5;
        for fixture in schedule.fixtures().iter().filter(|f| f.round <= legs) {
            let reverse = schedule
                .fixtures_in_round(fixture.round + legs)
                .find(|f| f.home == fixture.away && f.away == fixture.home);
            assert!(reverse.is_some(), "{:?} has no return fixture", fixture);
        }
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(CircleScheduler.build_schedule(&[]).is_empty());
        assert!(CircleScheduler.build_schedule(&ids(1)).is_empty());
        assert_eq!(CircleScheduler.build_schedule(&ids(2)).round_count(), 2);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_never_double_books(n in 0usize..26) {
                let schedule = CircleScheduler.build_schedule(&ids(n));
                prop_assert_eq!(schedule.len(), n * n.saturating_sub(1));
                prop_assert!(schedule.conflicts().is_empty());

                let pairs: HashSet<(&TeamId, &TeamId)> =
                    schedule.fixtures().iter().map(|f| (&f.home, &f.away)).collect();
                prop_assert_eq!(pairs.len(), schedule.len());
            }
        }
    }
}
