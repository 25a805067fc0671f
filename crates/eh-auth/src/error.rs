use crate::{ResetFailure, ResetFailureKind};

use eh_core::{CoreError, Role};
use eh_storage::StorageError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Role {role} may not be claimed with this matric code {location}")]
    AuthorizationDenied { role: Role, location: ErrorLocation },

    #[error("Role {role} cannot be used to log in {location}")]
    InvalidRole { role: Role, location: ErrorLocation },

    #[error("Invalid email address '{email}' {location}")]
    InvalidEmail {
        email: String,
        location: ErrorLocation,
    },

    #[error("Rate limit exceeded: {limit} attempts per {window_secs}s {location}")]
    RateLimitExceeded {
        limit: u32,
        window_secs: u64,
        location: ErrorLocation,
    },

    #[error("Password reset timed out after {timeout_secs}s {location}")]
    ResetTimedOut {
        timeout_secs: u64,
        location: ErrorLocation,
    },

    #[error("Password reset cancelled {location}")]
    ResetCancelled { location: ErrorLocation },

    #[error("Password reset failed ({kind}): {message} {location}")]
    ResetFailed {
        kind: ResetFailureKind,
        message: String,
        location: ErrorLocation,
    },

    #[error("Identity rejected: {source} {location}")]
    Identity {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },

    #[error("Session storage failed: {source} {location}")]
    Storage {
        #[source]
        source: StorageError,
        location: ErrorLocation,
    },
}

impl AuthError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::AuthorizationDenied { .. } => "AUTHORIZATION_DENIED",
            Self::InvalidRole { .. } => "INVALID_ROLE",
            Self::InvalidEmail { .. } => "INVALID_EMAIL",
            Self::RateLimitExceeded { .. } => "RATE_LIMIT_EXCEEDED",
            Self::ResetTimedOut { .. } => "RESET_TIMED_OUT",
            Self::ResetCancelled { .. } => "RESET_CANCELLED",
            Self::ResetFailed { .. } => "RESET_FAILED",
            Self::Identity { .. } => "INVALID_IDENTITY",
            Self::Storage { .. } => "STORAGE_FAILED",
        }
    }

    /// Whether repeating the same action may succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::RateLimitExceeded { .. } | Self::ResetTimedOut { .. } => true,
            Self::ResetFailed { kind, .. } => *kind == ResetFailureKind::Unreachable,
            Self::Storage { source, .. } => source.is_transient(),
            Self::AuthorizationDenied { .. }
            | Self::InvalidRole { .. }
            | Self::InvalidEmail { .. }
            | Self::ResetCancelled { .. }
            | Self::Identity { .. } => false,
        }
    }

    /// Short text suitable for a notice
    pub fn user_message(&self) -> String {
        match self {
            Self::AuthorizationDenied { .. } => {
                String::from("Unauthorized: Admin access restricted.")
            }
            Self::InvalidRole { .. } => String::from("Please choose a role to continue."),
            Self::InvalidEmail { .. } => String::from("Please enter a valid email address."),
            Self::RateLimitExceeded { .. } => {
                String::from("Too many admin login attempts. Please wait a minute.")
            }
            Self::ResetTimedOut { .. } => {
                String::from("The reset service is taking too long. Please try again.")
            }
            Self::ResetCancelled { .. } => String::from("Password reset cancelled."),
            Self::ResetFailed { kind, .. } => match kind {
                ResetFailureKind::Unreachable => {
                    String::from("Could not reach the reset service. Please try again.")
                }
                ResetFailureKind::UnknownEmail => {
                    String::from("No account is registered with that email.")
                }
                ResetFailureKind::Rejected => {
                    String::from("The reset request was refused. Please contact support.")
                }
            },
            Self::Identity { .. } => String::from("Those details could not be used to sign in."),
            Self::Storage { source, .. } => source.recovery_hint().to_string(),
        }
    }

    #[track_caller]
    pub fn authorization_denied(role: Role) -> Self {
        Self::AuthorizationDenied {
            role,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_role(role: Role) -> Self {
        Self::InvalidRole {
            role,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_email(email: impl Into<String>) -> Self {
        Self::InvalidEmail {
            email: email.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn rate_limit_exceeded(limit: u32, window_secs: u64) -> Self {
        Self::RateLimitExceeded {
            limit,
            window_secs,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn reset_timed_out(timeout_secs: u64) -> Self {
        Self::ResetTimedOut {
            timeout_secs,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn reset_cancelled() -> Self {
        Self::ResetCancelled {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn reset_failed(failure: ResetFailure) -> Self {
        Self::ResetFailed {
            kind: failure.kind,
            message: failure.message,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for AuthError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        Self::Identity {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<StorageError> for AuthError {
    #[track_caller]
    fn from(source: StorageError) -> Self {
        Self::Storage {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
