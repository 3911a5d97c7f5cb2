use rand::Rng;
use rand_distr::{Distribution, Poisson};

use crate::error::{Result, SimError};

/// Attack rate scaled by the defender's concession rate, relative to the
/// league norms: `(for / scored) * (against / conceded) * scored`.
pub fn expected_goals(
    attacker_avg_for: f64,
    defender_avg_against: f64,
    league_avg_scored: f64,
    league_avg_conceded: f64,
) -> Result<f64> {
    check_divisor("league average scored", league_avg_scored)?;
    check_divisor("league average conceded", league_avg_conceded)?;

    let xg = (attacker_avg_for / league_avg_scored)
        * (defender_avg_against / league_avg_conceded)
        * league_avg_scored;

    if !xg.is_finite() || xg < 0.0 {
        return Err(SimError::InvalidRate { what: "expected goals", value: xg });
    }
    Ok(xg)
}

/// One Poisson draw around [`expected_goals`].
pub fn simulate_goals<R: Rng + ?Sized>(
    rng: &mut R,
    attacker_avg_for: f64,
    defender_avg_against: f64,
    league_avg_scored: f64,
    league_avg_conceded: f64,
) -> Result<u32> {
    let xg = expected_goals(
        attacker_avg_for,
        defender_avg_against,
        league_avg_scored,
        league_avg_conceded,
    )?;

    // Poisson::new rejects a zero mean; the distribution is degenerate there.
    if xg == 0.0 {
        return Ok(0);
    }

    let dist = Poisson::new(xg)
        .map_err(|_| SimError::InvalidRate { what: "expected goals", value: xg })?;
    let draw: f64 = dist.sample(rng);
    Ok(draw as u32)
}

fn check_divisor(what: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SimError::InvalidRate { what, value })
    }
}

// ========== Tests ==========

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_expected_goals_formula() {
        // (2 / 1.5) * (1 / 1.5) * 1.5 = 1.333..
        let xg = expected_goals(2.0, 1.0, 1.5, 1.5).unwrap();
        assert!((xg - 4.0 / 3.0).abs() < 1e-12);

        // League-average teams score the league average.
        let xg = expected_goals(1.4, 1.4, 1.4, 1.4).unwrap();
        assert!((xg - 1.4).abs() < 1e-12);
    }

    #[test]
    fn test_simulate_goals_returns_count() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..200 {
            let goals = simulate_goals(&mut rng, 4.0, 4.0, 2.0, 2.0).unwrap();
            assert!(goals < 100);
        }
    }

    #[test]
    fn test_zero_rate_scores_nothing() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(simulate_goals(&mut rng, 0.0, 1.0, 1.0, 1.0).unwrap(), 0);
        assert_eq!(simulate_goals(&mut rng, 2.0, 0.0, 1.0, 1.0).unwrap(), 0);
    }

    #[test]
    fn test_invalid_divisors() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(
            simulate_goals(&mut rng, 1.0, 1.0, 0.0, 1.0),
            Err(SimError::InvalidRate { what: "league average scored", value: 0.0 })
        );
        assert_eq!(
            simulate_goals(&mut rng, 1.0, 1.0, 1.0, -2.0),
            Err(SimError::InvalidRate { what: "league average conceded", value: -2.0 })
        );
        assert!(simulate_goals(&mut rng, 1.0, 1.0, f64::NAN, 1.0).is_err());
        assert!(simulate_goals(&mut rng, 1.0, 1.0, 1.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_negative_expected_goals_rejected() {
        let err = expected_goals(-1.0, 1.0, 1.0, 1.0).unwrap_err();
        assert!(matches!(err, SimError::InvalidRate { what: "expected goals", .. }));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_same_seed_same_draws() {
        let draw = |seed| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            (0..20)
                .map(|_| simulate_goals(&mut rng, 1.7, 1.3, 1.4, 1.4).unwrap())
                .collect::<Vec<_>>()
        };
        assert_eq!(draw(9), draw(9));
    }

    #[test]
    fn test_sample_mean_tracks_expected_goals() {
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        let n = 20_000;
        let total: u64 = (0..n)
            .map(|_| u64::from(simulate_goals(&mut rng, 2.0, 1.0, 1.5, 1.5).unwrap()))
            .sum();
        let mean = total as f64 / n as f64;
        assert!((mean - 4.0 / 3.0).abs() < 0.05, "mean {}", mean);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_valid_rates_always_draw(
                attack in 0.0f64..6.0,
                defence in 0.0f64..6.0,
                scored in 0.1f64..5.0,
                conceded in 0.1f64..5.0,
                seed in any::<u64>(),
            ) {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                prop_assert!(simulate_goals(&mut rng, attack, defence, scored, conceded).is_ok());
            }

            #[test]
            fn prop_non_positive_divisor_rejected(
                scored in -5.0f64..=0.0,
                seed in any::<u64>(),
            ) {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                prop_assert!(simulate_goals(&mut rng, 1.0, 1.0, scored, 1.0).is_err());
            }
        }
    }
}
