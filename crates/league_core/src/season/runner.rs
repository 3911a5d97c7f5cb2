//! SeasonRunner - one simulated season
//!
//! Each fixture is a pure transition `(log, fixture) -> (log', outcome)`:
//! stats are rebuilt from everything played so far, the match is drawn and
//! its two rows are appended. Fixtures run strictly in schedule order because
//! every result feeds the stats of the next match.

use log::{info, warn};
use rand::Rng;

use crate::config::{ConcededBasis, ModelConfig, ScheduleConfig};
use crate::engine::simulate_match;
use crate::error::{Result, SimError};
use crate::models::{Fixture, TeamId};
use crate::result_log::ResultLog;
use crate::schedule::{scheduler_for, FixtureScheduler, GreedyRoundScheduler};
use crate::stats::compute_stats_with;

/// What happened to a single fixture.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome {
    Played { fixture: Fixture, home_goals: u32, away_goals: u32 },
    /// The match failed with a recoverable error and left no rows.
    Skipped { fixture: Fixture, error: SimError },
}

impl MatchOutcome {
    pub fn fixture(&self) -> &Fixture {
        match self {
            MatchOutcome::Played { fixture, .. } => fixture,
            MatchOutcome::Skipped { fixture, .. } => fixture,
        }
    }

    pub fn is_played(&self) -> bool {
        matches!(self, MatchOutcome::Played { .. })
    }
}

/// Result of [`SeasonRunner::run_season`].
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonReport {
    /// Seed rows followed by every simulated row, in play order.
    pub log: ResultLog,
    /// One entry per scheduled fixture, in play order.
    pub outcomes: Vec<MatchOutcome>,
}

impl SeasonReport {
    pub fn played(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_played()).count()
    }

    pub fn skipped(&self) -> impl Iterator<Item = (&Fixture, &SimError)> {
        self.outcomes.iter().filter_map(|o| match o {
            MatchOutcome::Skipped { fixture, error } => Some((fixture, error)),
            MatchOutcome::Played { .. } => None,
        })
    }

    pub fn into_log(self) -> ResultLog {
        self.log
    }
}

/// Drives a season: schedule, then one [`step`](SeasonRunner::step) per fixture.
pub struct SeasonRunner {
    scheduler: Box<dyn FixtureScheduler + Send + Sync>,
    conceded_basis: ConcededBasis,
}

impl Default for SeasonRunner {
    fn default() -> Self {
        Self::new(GreedyRoundScheduler::default(), ModelConfig::default())
    }
}

impl SeasonRunner {
    pub fn new<S>(scheduler: S, model: ModelConfig) -> Self
    where
        S: FixtureScheduler + Send + Sync + 'static,
    {
        Self { scheduler: Box::new(scheduler), conceded_basis: model.conceded_basis }
    }

    pub fn from_config(model: &ModelConfig, schedule: &ScheduleConfig) -> Self {
        Self { scheduler: scheduler_for(schedule), conceded_basis: model.conceded_basis }
    }

    pub fn scheduler(&self) -> &dyn FixtureScheduler {
        self.scheduler.as_ref()
    }

    /// Play one fixture against the current log.
    ///
    /// The log is handed back unchanged when the match is skipped.
    pub fn step<R: Rng + ?Sized>(
        &self,
        log: ResultLog,
        fixture: &Fixture,
        rng: &mut R,
    ) -> (ResultLog, MatchOutcome) {
        let played = compute_stats_with(&log, self.conceded_basis).and_then(|snapshot| {
            let home = snapshot.team(&fixture.home)?;
            let away = snapshot.team(&fixture.away)?;
            simulate_match(rng, &home, &away, fixture.round)
        });

        match played {
            Ok(rows) => {
                let outcome = MatchOutcome::Played {
                    fixture: fixture.clone(),
                    home_goals: rows[0].goals_for,
                    away_goals: rows[0].goals_against,
                };
                (log.appended(rows), outcome)
            }
            Err(error) => (log, MatchOutcome::Skipped { fixture: fixture.clone(), error }),
        }
    }

    /// Simulate every fixture among `teams`, starting from `seed_log`.
    ///
    /// Recoverable match failures are logged and skipped. Anything else
    /// aborts the season.
    pub fn run_season<R: Rng + ?Sized>(
        &self,
        seed_log: ResultLog,
        teams: &[TeamId],
        rng: &mut R,
    ) -> Result<SeasonReport> {
        let schedule = self.scheduler.build_schedule(teams);
        let mut log = seed_log;
        let mut outcomes = Vec::with_capacity(schedule.len());

        for fixture in &schedule {
            let (next, outcome) = self.step(log, fixture, rng);
            log = next;

            if let MatchOutcome::Skipped { fixture, error } = &outcome {
                if !error.is_recoverable() {
                    return Err(error.clone());
                }
                warn!(
                    "Skipped {} vs {} (round {}): {}",
                    fixture.home, fixture.away, fixture.round, error
                );
            }
            outcomes.push(outcome);
        }

        let report = SeasonReport { log, outcomes };
        info!(
            "Season finished: {} played, {} skipped, {} rows",
            report.played(),
            report.skipped().count(),
            report.log.len()
        );
        Ok(report)
    }
}

// ========== Tests ==========
