//! League CLI Library
//!
//! CSV result log → `ResultLog`, plus config resolution for the
//! `title-race` binary.
//!
//! Expected CSV columns (matched by header name, any order, extras ignored):
//! `Team`, `Opponent`, `GF`, `GA`, `Round`. Goal columns may be written as
//! integral floats (`2.0`); `Round` may be `12` or `Matchweek 12`.

use anyhow::{bail, Context, Result};
use league_core::{BatchReport, MatchResult, ResultLog, SimConfig};
use serde_json::json;
use log::warn;
use std::fs;
use std::path::Path;

/// CSV parsing statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseStats {
    pub total_rows: u32,
    pub parsed: u32,
    pub failed: u32,
}

const COLUMNS: [&str; 5] = ["Team", "Opponent", "GF", "GA", "Round"];

/// Load the historical result log from `csv_path`.
///
/// Rows that fail to parse (blank scores of unplayed fixtures, bad rounds)
/// are counted in [`ParseStats::failed`] and skipped. A file without a
/// single usable row is an error.
pub fn load_results(csv_path: &Path) -> Result<(ResultLog, ParseStats)> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(csv_path)
        .with_context(|| format!("Failed to open CSV file: {}", csv_path.display()))?;

    let headers = reader
        .headers()
        .with_context(|| format!("Failed to read CSV header: {}", csv_path.display()))?
        .clone();

    let mut idx = [0usize; 5];
    for (slot, name) in idx.iter_mut().zip(COLUMNS) {
        *slot = headers
            .iter()
            .position(|h| h.trim() == name)
            .with_context(|| format!("Missing column '{}' in {}", name, csv_path.display()))?;
    }
    let [team_idx, opponent_idx, gf_idx, ga_idx, round_idx] = idx;

    let mut rows = Vec::new();
    let mut stats = ParseStats::default();

    for (line, result) in reader.records().enumerate() {
        stats.total_rows += 1;
        // 1-based, header is line 1
        let line = line + 2;

        let record = match result {
            Ok(record) => record,
            Err(e) => {
                stats.failed += 1;
                warn!("Line {} - unreadable record: {}", line, e);
                continue;
            }
        };

        let field = |i: usize| record.get(i).map(str::trim).unwrap_or("");
        let team = field(team_idx);
        let opponent = field(opponent_idx);
        if team.is_empty() || opponent.is_empty() {
            stats.failed += 1;
            warn!("Line {} - missing team or opponent", line);
            continue;
        }

        let parsed = (parse_goals(field(gf_idx)), parse_goals(field(ga_idx)), parse_round(field(round_idx)));
        let (goals_for, goals_against, round) = match parsed {
            (Some(gf), Some(ga), Some(round)) => (gf, ga, round),
            _ => {
                stats.failed += 1;
                warn!(
                    "Line {} - invalid GF/GA/Round: '{}' / '{}' / '{}'",
                    line,
                    field(gf_idx),
                    field(ga_idx),
                    field(round_idx)
                );
                continue;
            }
        };

        rows.push(MatchResult::seed(team.into(), opponent.into(), goals_for, goals_against, round));
        stats.parsed += 1;
    }

    if rows.is_empty() {
        bail!("No valid result rows in {} ({} rows read)", csv_path.display(), stats.total_rows);
    }

    Ok((ResultLog::from_rows(rows), stats))
}

/// Non-negative whole number, optionally written as a float (`2.0`).
fn parse_goals(raw: &str) -> Option<u32> {
    if let Ok(v) = raw.parse::<u32>() {
        return Some(v);
    }
    let v = raw.parse::<f64>().ok()?;
    if v.is_finite() && v >= 0.0 && v.fract() == 0.0 && v <= f64::from(u32::MAX) {
        Some(v as u32)
    } else {
        None
    }
}

/// `12` or `Matchweek 12`.
fn parse_round(raw: &str) -> Option<u32> {
    raw.split_whitespace().last()?.parse().ok()
}

/// Base config: the JSON file if given, else the faithful preset.
/// `corrected` switches model, schedule and tie-break to the corrected preset.
pub fn resolve_config(config_path: Option<&Path>, corrected: bool) -> Result<SimConfig> {
    let mut config = match config_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config: {}", path.display()))?;
            SimConfig::from_json(&raw)
                .with_context(|| format!("Invalid config: {}", path.display()))?
        }
        None => SimConfig::faithful(),
    };

    if corrected {
        let preset = SimConfig::corrected();
        config.model = preset.model;
        config.schedule.kind = preset.schedule.kind;
        config.standings = preset.standings;
    }
    Ok(config)
}

/// Batch report as a JSON document. Champions are listed most titles first.
pub fn report_json(report: &BatchReport) -> Result<String> {
    let champions: Vec<serde_json::Value> = report
        .sorted_champions()
        .into_iter()
        .map(|(team, count)| {
            json!({ "team": team, "count": count, "share": report.champion_share(team) })
        })
        .collect();
    let failures: Vec<serde_json::Value> = report
        .failures
        .iter()
        .map(|f| json!({ "season": f.season, "error": f.error.to_string() }))
        .collect();

    let value = json!({
        "seasons": report.seasons,
        "completed": report.completed(),
        "champions": champions,
        "favourite": report.favourite,
        "upset_rate": report.upset_rate(),
        "failures": failures,
    });
    Ok(serde_json::to_string_pretty(&value)?)
}
