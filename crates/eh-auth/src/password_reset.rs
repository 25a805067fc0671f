use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetFailureKind {
    /// Service could not be reached (network, DNS, not configured)
    Unreachable,
    UnknownEmail,
    /// Service answered but refused the request
    Rejected,
}

impl ResetFailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unreachable => "unreachable",
            Self::UnknownEmail => "unknown_email",
            Self::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for ResetFailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("password reset {kind}: {message}")]
pub struct ResetFailure {
    pub kind: ResetFailureKind,
    pub message: String,
}

impl ResetFailure {
    pub fn new(kind: ResetFailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// External service that emails password reset links
#[async_trait]
pub trait PasswordResetService: Send + Sync {
    async fn request_reset(&self, email: &str) -> Result<(), ResetFailure>;
}
