use serde::{Deserialize, Serialize};

use super::TeamId;

/// A scheduled pairing. `home` is the row's `team`, `away` its `opponent`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fixture {
    pub home: TeamId,
    pub away: TeamId,
    pub round: u32,
}

impl Fixture {
    pub fn new(home: TeamId, away: TeamId, round: u32) -> Self {
        Self { home, away, round }
    }

    /// True if `team` is on either side of this fixture.
    pub fn involves(&self, team: &TeamId) -> bool {
        &self.home == team || &self.away == team
    }
}
