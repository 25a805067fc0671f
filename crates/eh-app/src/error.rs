use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(#[from] eh_config::ConfigError),

    #[error("Storage error: {0}")]
    Storage(#[from] eh_storage::StorageError),

    #[error("Service error: {0}")]
    Service(#[from] eh_services::ServiceError),

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, AppError>;
