use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Team identity. Teams carry no other persistent attributes; everything
/// derived lives in [`crate::stats::StatsSnapshot`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(String);

impl TeamId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for TeamId {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for TeamId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl Borrow<str> for TeamId {
    fn borrow(&self) -> &str {
        &self.0
    }
}
