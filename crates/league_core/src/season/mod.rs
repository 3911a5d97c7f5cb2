//! # Season Simulation
//!
//! ## Features
//! - [`SeasonRunner`]: one season as a chain of pure match steps
//! - [`summarize`]: league table from the simulated rows
//! - [`run_batch`]: many independent seasons in parallel, champions tallied

pub mod batch;
pub mod runner;
pub mod standings;

pub use batch::{run_batch, run_single_season, season_rng, BatchReport, SeasonFailure};
pub use runner::{MatchOutcome, SeasonReport, SeasonRunner};
pub use standings::{summarize, summarize_with, Standings, StandingsRow};
