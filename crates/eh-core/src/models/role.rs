use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Portal role. `Guest` is what an empty session reports; it is never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Student,
    #[default]
    Guest,
}

impl Role {
    /// Wire representation, as persisted in the `engihub_user` record
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Student => "STUDENT",
            Self::Guest => "GUEST",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    pub fn is_guest(&self) -> bool {
        matches!(self, Self::Guest)
    }
}

impl FromStr for Role {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "ADMIN" => Ok(Self::Admin),
            "STUDENT" => Ok(Self::Student),
            "GUEST" => Ok(Self::Guest),
            _ => Err(CoreError::InvalidRole {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
