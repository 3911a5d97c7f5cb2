use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use league_core::schedule::{CircleScheduler, FixtureScheduler, GreedyRoundScheduler};
use league_core::season::{season_rng, SeasonRunner};
use league_core::{MatchResult, ResultLog, TeamId};

fn teams(n: usize) -> Vec<TeamId> {
    (0..n).map(|i| TeamId::new(format!("Team {:02}", i))).collect()
}

/// One historical meeting per consecutive pair, enough to give every team rates.
fn seed_log(teams: &[TeamId]) -> ResultLog {
    teams
        .iter()
        .zip(teams.iter().cycle().skip(1))
        .enumerate()
        .flat_map(|(i, (home, away))| {
            let row = MatchResult::seed(home.clone(), away.clone(), (i % 4) as u32, (i % 3) as u32, 1);
            let mirror = row.mirror();
            [row, mirror]
        })
        .collect()
}

fn bench_schedules(c: &mut Criterion) {
    let teams = teams(20);
    c.bench_function("greedy_schedule_20", |b| {
        b.iter(|| black_box(GreedyRoundScheduler::default().build_schedule(black_box(&teams))))
    });
    c.bench_function("circle_schedule_20", |b| {
        b.iter(|| black_box(CircleScheduler.build_schedule(black_box(&teams))))
    });
}

fn bench_full_season(c: &mut Criterion) {
    let teams = teams(20);
    let log = seed_log(&teams);
    let runner = SeasonRunner::default();

    c.bench_function("season_20_teams", |b| {
        b.iter(|| {
            let mut rng = season_rng(42, 0);
            let report = runner.run_season(log.clone(), &teams, &mut rng).unwrap();
            black_box(report.played());
        })
    });
}

criterion_group!(benches, bench_schedules, bench_full_season);
criterion_main!(benches);
