//! Append-only result log
//!
//! The log is the only state a season accumulates. It is never mutated in
//! place by readers: extending it consumes the old value and hands back the
//! new one, so every match step is `(log) -> (log', rows)`.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::models::{MatchResult, TeamId};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultLog {
    rows: Vec<MatchResult>,
}

impl ResultLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<MatchResult>) -> Self {
        Self { rows }
    }

    /// Extend the log with `rows`, preserving order.
    #[must_use]
    pub fn appended<I>(mut self, rows: I) -> Self
    where
        I: IntoIterator<Item = MatchResult>,
    {
        self.rows.extend(rows);
        self
    }

    pub fn rows(&self) -> &[MatchResult] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows produced by simulation (the ones carrying points).
    pub fn simulated(&self) -> impl Iterator<Item = &MatchResult> {
        self.rows.iter().filter(|row| row.is_simulated())
    }

    /// Distinct `team` values in order of first appearance.
    pub fn teams(&self) -> Vec<TeamId> {
        let mut seen = HashSet::new();
        self.rows
            .iter()
            .filter(|row| seen.insert(&row.team))
            .map(|row| row.team.clone())
            .collect()
    }

    pub fn into_rows(self) -> Vec<MatchResult> {
        self.rows
    }
}

impl FromIterator<MatchResult> for ResultLog {
    fn from_iter<I: IntoIterator<Item = MatchResult>>(iter: I) -> Self {
        Self { rows: iter.into_iter().collect() }
    }
}
