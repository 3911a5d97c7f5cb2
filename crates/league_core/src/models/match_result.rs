//! Result rows
//!
//! One row per team per played match. A simulated match produces two rows
//! that mirror each other's goals; historical seed rows carry no points.

use serde::{Deserialize, Serialize};

use super::TeamId;

pub const WIN_POINTS: u8 = 3;
pub const DRAW_POINTS: u8 = 1;
pub const LOSS_POINTS: u8 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    HomeWin,
    Draw,
    AwayWin,
}

impl Outcome {
    pub fn from_score(home_goals: u32, away_goals: u32) -> Self {
        if home_goals > away_goals {
            Outcome::HomeWin
        } else if home_goals < away_goals {
            Outcome::AwayWin
        } else {
            Outcome::Draw
        }
    }

    /// (home points, away points)
    pub fn points(self) -> (u8, u8) {
        match self {
            Outcome::HomeWin => (WIN_POINTS, LOSS_POINTS),
            Outcome::Draw => (DRAW_POINTS, DRAW_POINTS),
            Outcome::AwayWin => (LOSS_POINTS, WIN_POINTS),
        }
    }
}

/// League points earned by the side that scored `goals_for`.
pub fn points_for(goals_for: u32, goals_against: u32) -> u8 {
    Outcome::from_score(goals_for, goals_against).points().0
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub team: TeamId,
    pub opponent: TeamId,
    pub goals_for: u32,
    pub goals_against: u32,
    /// `None` for historical rows that predate point tracking.
    pub points: Option<u8>,
    pub round: u32,
}

impl MatchResult {
    /// Historical row from the input dataset.
    pub fn seed(
        team: TeamId,
        opponent: TeamId,
        goals_for: u32,
        goals_against: u32,
        round: u32,
    ) -> Self {
        Self { team, opponent, goals_for, goals_against, points: None, round }
    }

    /// Simulated row; points follow from the score.
    pub fn simulated(
        team: TeamId,
        opponent: TeamId,
        goals_for: u32,
        goals_against: u32,
        round: u32,
    ) -> Self {
        Self {
            team,
            opponent,
            goals_for,
            goals_against,
            points: Some(points_for(goals_for, goals_against)),
            round,
        }
    }

    /// Home row followed by its away mirror.
    pub fn pair(
        home: TeamId,
        away: TeamId,
        home_goals: u32,
        away_goals: u32,
        round: u32,
    ) -> [MatchResult; 2] {
        let home_row = Self::simulated(home, away, home_goals, away_goals, round);
        let away_row = home_row.mirror();
        [home_row, away_row]
    }

    /// The same match seen from the opponent's side.
    pub fn mirror(&self) -> Self {
        Self {
            team: self.opponent.clone(),
            opponent: self.team.clone(),
            goals_for: self.goals_against,
            goals_against: self.goals_for,
            points: self.points.map(|_| points_for(self.goals_against, self.goals_for)),
            round: self.round,
        }
    }

    pub fn is_simulated(&self) -> bool {
        self.points.is_some()
    }
}
