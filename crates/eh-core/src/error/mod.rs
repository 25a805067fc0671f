use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid role: {value} {location}")]
    InvalidRole {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid theme: {value} {location}")]
    InvalidTheme {
        value: String,
        location: ErrorLocation,
    },

    #[error("An identity cannot hold the GUEST role {location}")]
    GuestIdentity { location: ErrorLocation },
}

impl CoreError {
    #[track_caller]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn guest_identity() -> Self {
        Self::GuestIdentity {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
