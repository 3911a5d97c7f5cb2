//! # Match Engine
//!
//! Independent-Poisson scorelines from attack/defence rates.
//!
//! ## Usage
//! ```rust
//! use league_core::engine::simulate_goals;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(7);
//! let goals = simulate_goals(&mut rng, 1.8, 1.2, 1.4, 1.4).unwrap();
//! assert!(goals < 100);
//! ```

pub mod goal_model;
pub mod match_sim;

pub use goal_model::{expected_goals, simulate_goals};
pub use match_sim::simulate_match;
