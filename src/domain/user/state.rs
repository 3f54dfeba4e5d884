use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle states of a user. `Invalid` is where every user starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserState {
    #[default]
    Invalid,
    Registered,
    Activated,
}

impl UserState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Invalid => "invalid",
            Self::Registered => "registered",
            Self::Activated => "activated",
        }
    }

    /// No transition leaves `Activated`
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Activated)
    }
}

impl fmt::Display for UserState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
