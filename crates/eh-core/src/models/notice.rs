use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// User-facing message delivered through the [`crate::Notifier`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    /// The user may retry the action that produced this notice
    pub retryable: bool,
}

impl Notice {
    fn new(level: NoticeLevel, message: impl Into<String>, retryable: bool) -> Self {
        Self {
            level,
            message: message.into(),
            retryable,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, message, false)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, message, false)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, message, false)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message, false)
    }

    pub fn retryable_error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message, true)
    }
}
