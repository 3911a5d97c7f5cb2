//! # league_core - Monte Carlo League Season Simulator
//!
//! Estimates how often the statistically strongest team of a league fails
//! to win the title. Historical results seed per-team scoring rates, a
//! round-robin schedule is simulated match by match with an
//! independent-Poisson goal model, and the whole season is repeated many
//! times to get a distribution of champions.
//!
//! ## Features
//! - Deterministic: same seed and seed log, same seasons
//! - Simulated results feed forward into the stats of later matches
//! - Greedy or circle-method fixture scheduling
//! - Seasons run in parallel with per-season RNG streams
//!
//! ## Usage
//! ```rust
//! use league_core::{run_batch, MatchResult, ResultLog, SimConfig};
//!
//! let log: ResultLog = [("A", "B", 2, 1), ("B", "C", 0, 0), ("C", "A", 1, 3)]
//!     .iter()
//!     .flat_map(|(h, a, hg, ag)| {
//!         let row = MatchResult::seed((*h).into(), (*a).into(), *hg, *ag, 1);
//!         let mirror = row.mirror();
//!         [row, mirror]
//!     })
//!     .collect();
//!
//! let report = run_batch(&log, &SimConfig::default().with_seasons(10)).unwrap();
//! assert_eq!(report.completed() as usize + report.failures.len(), 10);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod result_log;
pub mod schedule;
pub mod season;
pub mod stats;

pub use config::{ConcededBasis, SchedulerKind, SimConfig, TieBreak};
pub use error::{Result, SimError};
pub use models::{Fixture, MatchResult, Outcome, TeamId};
pub use result_log::ResultLog;
pub use schedule::{CircleScheduler, FixtureScheduler, GreedyRoundScheduler, Schedule};
pub use season::{
    run_batch, run_single_season, summarize, BatchReport, MatchOutcome, SeasonReport,
    SeasonRunner, Standings, StandingsRow,
};
pub use stats::{compute_stats, StatsSnapshot, TeamStats};
