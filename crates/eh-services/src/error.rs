use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failures talking to the portal's external collaborators
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        #[source]
        source: reqwest::Error,
        location: ErrorLocation,
    },

    #[error("API error {status}: {message} (code: {code}) {location}")]
    Api {
        status: u16,
        code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("{service} returned no usable content {location}")]
    EmptyResponse {
        service: &'static str,
        location: ErrorLocation,
    },

    #[error("{service} is not configured: {message} {location}")]
    Unconfigured {
        service: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Forbidden: {action} requires an administrator {location}")]
    Forbidden {
        action: &'static str,
        location: ErrorLocation,
    },

    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("File error at {path}: {source} {location}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },
}

impl ServiceError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Http { .. } => "HTTP_ERROR",
            Self::Api { .. } => "API_ERROR",
            Self::Json { .. } => "JSON_ERROR",
            Self::EmptyResponse { .. } => "EMPTY_RESPONSE",
            Self::Unconfigured { .. } => "UNCONFIGURED",
            Self::Forbidden { .. } => "FORBIDDEN",
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::Io { .. } => "IO_ERROR",
        }
    }

    /// Transport failures, throttling and server-side errors may clear up
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http { source, .. } => {
                source.is_connect() || source.is_timeout() || source.is_request()
            }
            Self::Api { status, .. } => *status == 429 || *status >= 500,
            Self::EmptyResponse { .. } => true,
            Self::Json { .. }
            | Self::Unconfigured { .. }
            | Self::Forbidden { .. }
            | Self::Validation { .. }
            | Self::Io { .. } => false,
        }
    }

    /// Whether the request never got an answer from the remote side
    pub fn is_unreachable(&self) -> bool {
        match self {
            Self::Http { source, .. } => !source.is_status(),
            Self::Unconfigured { .. } => true,
            _ => false,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    #[track_caller]
    pub fn api(status: u16, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            code: code.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn empty_response(service: &'static str) -> Self {
        Self::EmptyResponse {
            service,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unconfigured(service: &'static str, message: impl Into<String>) -> Self {
        Self::Unconfigured {
            service,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn forbidden(action: &'static str) -> Self {
        Self::Forbidden {
            action,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn io(path: PathBuf, source: std::io::Error) -> Self {
        Self::Io {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for ServiceError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        Self::Http {
            message: err.to_string(),
            source: err,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for ServiceError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::Json {
            message: err.to_string(),
            source: err,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
