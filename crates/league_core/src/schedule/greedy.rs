//! Greedy round assignment
//!
//! Pairs are enumerated as the cartesian product of the team list with
//! itself (self-pairs dropped), so `A` hosts everyone before `B` hosts
//! anyone. Each pair takes the first round at or after a shared cursor in
//! which neither side has just played. The cursor never moves back except
//! when it passes `wrap_after`, at which point it restarts from round 1 and
//! later fixtures can land on top of earlier ones.

use std::collections::HashMap;

use super::{distinct, FixtureScheduler, Schedule};
use crate::models::{Fixture, TeamId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GreedyRoundScheduler {
    pub wrap_after: u32,
}

impl GreedyRoundScheduler {
    pub fn new(wrap_after: u32) -> Self {
        Self { wrap_after }
    }
}

impl Default for GreedyRoundScheduler {
    fn default() -> Self {
        Self::new(37)
    }
}

impl FixtureScheduler for GreedyRoundScheduler {
    fn build_schedule(&self, teams: &[TeamId]) -> Schedule {
        let teams = distinct(teams);
        let mut last_round: HashMap<&TeamId, u32> = HashMap::new();
        let mut cursor = 1u32;
        let mut fixtures = Vec::with_capacity(teams.len() * teams.len().saturating_sub(1));

        for &home in &teams {
            for &away in &teams {
                if home == away {
                    continue;
                }

                while last_round.get(home) == Some(&cursor) || last_round.get(away) == Some(&cursor) {
                    cursor += 1;
                }

                fixtures.push(Fixture::new(home.clone(), away.clone(), cursor));
                last_round.insert(home, cursor);
                last_round.insert(away, cursor);

                if cursor > self.wrap_after {
                    cursor = 1;
                }
            }
        }

        Schedule::new(fixtures)
    }
}

// ========== Tests ==========
