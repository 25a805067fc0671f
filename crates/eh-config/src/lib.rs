mod auth_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod retry_config;
mod services_config;
mod storage_config;
mod ui_config;

#[cfg(test)]
mod tests;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use retry_config::RetryConfig;
pub use services_config::ServicesConfig;
pub use storage_config::StorageConfig;
pub use ui_config::UiConfig;

const CONFIG_DIR_ENV: &str = "EH_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".engihub";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_ADMIN_MATRIC_CODE: &str = "19/ENG02/XXX";
const DEFAULT_ENFORCE_ADMIN_CODE_ON_SIGNUP: bool = true;
const DEFAULT_PASSWORD_RESET_TIMEOUT_SECS: u64 = 10;
const DEFAULT_MAX_ADMIN_ATTEMPTS_PER_MINUTE: u32 = 5;

const DEFAULT_STORAGE_FILENAME: &str = "storage.json";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

const DEFAULT_AI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_AI_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_EXPORT_DIRECTORY: &str = "exports";
