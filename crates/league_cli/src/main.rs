//! title-race CLI
//!
//! How often does the strongest team fail to win the league?
//! CSV result log → N simulated seasons → champion frequency table.

#[cfg(feature = "cli")]
use anyhow::{Context, Result};
#[cfg(feature = "cli")]
use clap::{Args, Parser, Subcommand, ValueEnum};
#[cfg(feature = "cli")]
use league_core::schedule::scheduler_for;
#[cfg(feature = "cli")]
use league_core::season::{season_rng, summarize_with};
#[cfg(feature = "cli")]
use league_core::{run_batch, BatchReport, SchedulerKind, SeasonRunner, SimConfig};
#[cfg(feature = "cli")]
use log::info;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "title-race")]
#[command(about = "Monte Carlo league season simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Simulate many seasons and tally champions
    Simulate {
        #[command(flatten)]
        common: CommonArgs,

        /// Number of seasons (overrides config)
        #[arg(long)]
        seasons: Option<u32>,

        /// Print the report as JSON
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Simulate one season and print the final table
    Season {
        #[command(flatten)]
        common: CommonArgs,

        /// Season index, selects the RNG stream
        #[arg(long, default_value = "0")]
        index: u32,
    },

    /// Print the fixture schedule for the teams in the CSV
    Schedule {
        #[command(flatten)]
        common: CommonArgs,
    },
}

#[cfg(feature = "cli")]
#[derive(Args)]
struct CommonArgs {
    /// Historical results CSV (Team, Opponent, GF, GA, Round)
    #[arg(long)]
    csv: PathBuf,

    /// Base RNG seed (overrides config)
    #[arg(long)]
    seed: Option<u64>,

    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Use the corrected model, circle schedule and goal-difference tie-break
    #[arg(long, default_value = "false")]
    corrected: bool,

    /// Fixture scheduler (overrides config)
    #[arg(long, value_enum)]
    scheduler: Option<SchedulerArg>,
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum SchedulerArg {
    Greedy,
    Circle,
}

#[cfg(feature = "cli")]
impl From<SchedulerArg> for SchedulerKind {
    fn from(arg: SchedulerArg) -> Self {
        match arg {
            SchedulerArg::Greedy => SchedulerKind::Greedy,
            SchedulerArg::Circle => SchedulerKind::Circle,
        }
    }
}

#[cfg(feature = "cli")]
impl CommonArgs {
    fn config(&self) -> Result<SimConfig> {
        let mut config = league_cli::resolve_config(self.config.as_deref(), self.corrected)?;
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(kind) = self.scheduler {
            config.schedule.kind = kind.into();
        }
        config.validate()?;
        Ok(config)
    }

    fn load(&self) -> Result<league_core::ResultLog> {
        let (log, stats) = league_cli::load_results(&self.csv)?;
        // stdout carries the report only
        info!(
            "Loaded {} rows from {} ({} skipped)",
            stats.parsed,
            self.csv.display(),
            stats.failed
        );
        Ok(log)
    }
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate { common, seasons, json } => {
            let mut config = common.config()?;
            if let Some(seasons) = seasons {
                config.seasons = seasons;
            }
            let log = common.load()?;
            let report = run_batch(&log, &config).context("Batch failed")?;

            if json {
                println!("{}", league_cli::report_json(&report)?);
            } else {
                print_report(&report);
            }
        }

        Commands::Season { common, index } => {
            let config = common.config()?;
            let log = common.load()?;
            let teams = log.teams();

            let runner = SeasonRunner::from_config(&config.model, &config.schedule);
            let mut rng = season_rng(config.seed, index);
            let report = runner
                .run_season(log, &teams, &mut rng)
                .context("Season failed")?;

            let skipped = report.skipped().count();
            let standings = summarize_with(&report.log, config.standings.tie_break)?;

            println!(
                "\n{:>3}  {:<24} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>5} {:>4}",
                "#", "Team", "P", "W", "D", "L", "GF", "GA", "GD", "Pts"
            );
            for (pos, row) in standings.iter().enumerate() {
                println!(
                    "{:>3}  {:<24} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>+5} {:>4}",
                    pos + 1,
                    row.team,
                    row.played,
                    row.wins,
                    row.draws,
                    row.losses,
                    row.total_goals_for,
                    row.total_goals_against,
                    row.goal_difference(),
                    row.total_points
                );
            }
            if skipped > 0 {
                println!("\n⚠️  {} fixtures skipped", skipped);
            }
        }

        Commands::Schedule { common } => {
            let config = common.config()?;
            let log = common.load()?;
            let schedule = scheduler_for(&config.schedule).build_schedule(&log.teams());

            for round in 1..=schedule.round_count() {
                println!("\nRound {}", round);
                for fixture in schedule.fixtures_in_round(round) {
                    println!("   {} vs {}", fixture.home, fixture.away);
                }
            }

            let conflicts = schedule.conflicts();
            println!("\n{} fixtures over {} rounds", schedule.len(), schedule.round_count());
            if conflicts.is_empty() {
                println!("✅ No double-booked rounds");
            } else {
                println!("⚠️  {} double-booked slots:", conflicts.len());
                for c in &conflicts {
                    println!("   round {:>2}: {} plays {} times", c.round, c.team, c.fixtures);
                }
            }
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn print_report(report: &BatchReport) {
    println!("\n🏆 Champions over {} seasons", report.seasons);
    for (team, count) in report.sorted_champions() {
        println!(
            "   {:<24} {:>5}  ({:>5.1}%)",
            team,
            count,
            report.champion_share(team) * 100.0
        );
    }

    if let Some(favourite) = &report.favourite {
        println!("\n   Favourite: {}", favourite);
    }
    if let Some(rate) = report.upset_rate() {
        println!("   Upset rate: {:.1}%", rate * 100.0);
    }
    if !report.failures.is_empty() {
        println!("\n⚠️  {} seasons failed", report.failures.len());
        for failure in &report.failures {
            println!("   season {}: {}", failure.season, failure.error);
        }
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("title-race is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
