//! Multi-season batch driver
//!
//! Seasons share nothing but the read-only seed log, so they run as
//! independent rayon tasks. Each task returns its champion (or its error)
//! and the caller folds the results into a [`BatchReport`].

use std::collections::BTreeMap;

use log::{info, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use super::runner::SeasonRunner;
use super::standings::summarize_with;
use crate::config::SimConfig;
use crate::error::{Result, SimError};
use crate::models::TeamId;
use crate::result_log::ResultLog;
use crate::stats::compute_stats_with;

/// RNG for season `index`: the batch seed on its own ChaCha stream, so a
/// season's draws do not depend on which thread runs it.
pub fn season_rng(seed: u64, index: u32) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(u64::from(index));
    rng
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeasonFailure {
    pub season: u32,
    pub error: SimError,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatchReport {
    pub seasons: u32,
    pub champions: BTreeMap<TeamId, u32>,
    pub failures: Vec<SeasonFailure>,
    /// Strongest team of the seed log by mean goal difference.
    pub favourite: Option<TeamId>,
}

impl BatchReport {
    /// Seasons that produced a champion.
    pub fn completed(&self) -> u32 {
        self.champions.values().sum()
    }

    pub fn champion_share(&self, team: &TeamId) -> f64 {
        let completed = self.completed();
        if completed == 0 {
            return 0.0;
        }
        f64::from(self.champions.get(team).copied().unwrap_or(0)) / f64::from(completed)
    }

    /// Share of completed seasons the favourite failed to win.
    pub fn upset_rate(&self) -> Option<f64> {
        let favourite = self.favourite.as_ref()?;
        if self.completed() == 0 {
            return None;
        }
        Some(1.0 - self.champion_share(favourite))
    }

    /// Title count descending, then team name.
    pub fn sorted_champions(&self) -> Vec<(&TeamId, u32)> {
        let mut sorted: Vec<(&TeamId, u32)> = self.champions.iter().map(|(t, c)| (t, *c)).collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        sorted
    }
}

/// Simulate season `index` from scratch and return its champion.
pub fn run_single_season(
    seed_log: &ResultLog,
    teams: &[TeamId],
    config: &SimConfig,
    index: u32,
) -> Result<TeamId> {
    let runner = SeasonRunner::from_config(&config.model, &config.schedule);
    let mut rng = season_rng(config.seed, index);

    let report = runner.run_season(seed_log.clone(), teams, &mut rng)?;
    let standings = summarize_with(&report.log, config.standings.tie_break)?;
    standings
        .champion()
        .map(|row| row.team.clone())
        .ok_or(SimError::EmptyLog)
}

/// Run `config.seasons` seasons over the seed log's teams.
///
/// A failed season is recorded in [`BatchReport::failures`]; only an
/// unusable config or seed log fails the batch.
pub fn run_batch(seed_log: &ResultLog, config: &SimConfig) -> Result<BatchReport> {
    config.validate()?;

    let snapshot = compute_stats_with(seed_log, config.model.conceded_basis)?;
    let favourite = snapshot.strongest_team().cloned();
    let teams = seed_log.teams();

    info!(
        "Running {} seasons for {} teams (seed {})",
        config.seasons,
        teams.len(),
        config.seed
    );

    let results: Vec<(u32, Result<TeamId>)> = (0..config.seasons)
        .into_par_iter()
        .map(|index| (index, run_single_season(seed_log, &teams, config, index)))
        .collect();

    let mut champions: BTreeMap<TeamId, u32> = BTreeMap::new();
    let mut failures = Vec::new();
    for (season, result) in results {
        match result {
            Ok(champion) => *champions.entry(champion).or_insert(0) += 1,
            Err(error) => {
                warn!("Season {} failed: {}", season, error);
                failures.push(SeasonFailure { season, error });
            }
        }
    }

    let report = BatchReport { seasons: config.seasons, champions, failures, favourite };
    info!(
        "Batch finished: {} completed, {} failed",
        report.completed(),
        report.failures.len()
    );
    Ok(report)
}

// ========== Tests ==========
