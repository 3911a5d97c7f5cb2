//! # Simulation Configuration
//!
//! Every tunable of a batch in one serde-friendly place.
//!
//! ## Presets
//! - `SimConfig::faithful()`: the historical model, quirks included
//! - `SimConfig::corrected()`: concession averages from goals against,
//!   circle-method schedule, goal-difference tie-break
//!
//! ```rust
//! use league_core::config::SimConfig;
//!
//! let config = SimConfig::default();
//! let fixed = SimConfig::corrected();
//! assert_ne!(config.schedule.kind, fixed.schedule.kind);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};

/// Which per-row column feeds the league-wide "goals conceded" average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConcededBasis {
    /// Mean of goals *for*, same as the scored average. Default.
    #[default]
    GoalsFor,
    GoalsAgainst,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchedulerKind {
    #[default]
    Greedy,
    Circle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    #[default]
    FirstEncountered,
    /// Goal difference, then goals for, then first-encountered.
    GoalDifference,
}

/// Goal model parameters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    #[serde(default)]
    pub conceded_basis: ConcededBasis,
}

/// Fixture scheduling parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    #[serde(default)]
    pub kind: SchedulerKind,
    /// Greedy cursor resets to round 1 once it passes this round (default: 37)
    #[serde(default = "default_wrap_after")]
    pub wrap_after: u32,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self { kind: SchedulerKind::default(), wrap_after: default_wrap_after() }
    }
}

fn default_wrap_after() -> u32 {
    37
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StandingsConfig {
    #[serde(default)]
    pub tie_break: TieBreak,
}

/// Complete batch configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Base seed; season `i` draws from stream `i` of this seed
    #[serde(default)]
    pub seed: u64,
    /// Number of seasons in a batch (default: 100)
    #[serde(default = "default_seasons")]
    pub seasons: u32,
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub schedule: ScheduleConfig,
    #[serde(default)]
    pub standings: StandingsConfig,
}

fn default_seasons() -> u32 {
    100
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            seasons: default_seasons(),
            model: ModelConfig::default(),
            schedule: ScheduleConfig::default(),
            standings: StandingsConfig::default(),
        }
    }
}

impl SimConfig {
    pub fn faithful() -> Self {
        Self::default()
    }

    pub fn corrected() -> Self {
        let mut cfg = Self::default();
        cfg.model.conceded_basis = ConcededBasis::GoalsAgainst;
        cfg.schedule.kind = SchedulerKind::Circle;
        cfg.standings.tie_break = TieBreak::GoalDifference;
        cfg
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_seasons(mut self, seasons: u32) -> Self {
        self.seasons = seasons;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.seasons == 0 {
            return Err(SimError::InvalidConfig("seasons must be at least 1".to_string()));
        }
        if self.schedule.wrap_after == 0 {
            return Err(SimError::InvalidConfig("schedule.wrap_after must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Parse and validate a JSON document. Missing fields take defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        let cfg: SimConfig = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }
}

// ========== Tests ==========
