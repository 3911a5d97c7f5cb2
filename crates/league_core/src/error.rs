use thiserror::Error;

use crate::models::TeamId;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("Result log is empty")]
    EmptyLog,

    #[error("Unknown team: {team}")]
    UnknownTeam { team: TeamId },

    #[error("Invalid rate for {what}: {value}")]
    InvalidRate { what: &'static str, value: f64 },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl SimError {
    /// Whether a season can skip the failing match and keep going.
    pub fn is_recoverable(&self) -> bool {
        match self {
            SimError::UnknownTeam { .. } => true,
            SimError::InvalidRate { .. } => true,
            SimError::EmptyLog => false,
            SimError::InvalidConfig(_) => false,
        }
    }
}

impl From<serde_json::Error> for SimError {
    fn from(err: serde_json::Error) -> Self {
        SimError::InvalidConfig(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SimError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_split() {
        assert!(SimError::UnknownTeam { team: TeamId::from("Arsenal") }.is_recoverable());
        assert!(SimError::InvalidRate { what: "league_avg_scored", value: 0.0 }.is_recoverable());
        assert!(!SimError::EmptyLog.is_recoverable());
        assert!(!SimError::InvalidConfig("seasons".into()).is_recoverable());
    }

    #[test]
    fn test_display_names_team() {
        let err = SimError::UnknownTeam { team: TeamId::from("Luton Town") };
        assert_eq!(err.to_string(), "Unknown team: Luton Town");
    }
}
