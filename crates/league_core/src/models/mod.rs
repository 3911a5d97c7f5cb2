pub mod fixture;
pub mod match_result;
pub mod team;

pub use fixture::Fixture;
pub use match_result::{points_for, MatchResult, Outcome, DRAW_POINTS, LOSS_POINTS, WIN_POINTS};
pub use team::TeamId;
