use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR_NAME, LoggingConfig, RetryConfig, ServicesConfig, StorageConfig, UiConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub auth: AuthConfig,
    pub storage: StorageConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
    pub services: ServicesConfig,
    pub retry: RetryConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for EH_CONFIG_DIR env var, else use ./.engihub/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply EH_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: EH_CONFIG_DIR env var > ./.engihub/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.auth.validate()?;
        self.storage.validate()?;
        self.services.validate()?;
        self.retry.validate()?;

        if let Some(ref file) = self.logging.file
            && (file.is_empty() || file.contains(".."))
        {
            return Err(ConfigError::config(
                "logging.file must be a non-empty name without '..'",
            ));
        }

        Ok(())
    }

    /// Absolute path of the local storage file.
    pub fn storage_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.storage.file))
    }

    /// Absolute path of the report export directory.
    pub fn export_dir(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.services.export_dir))
    }

    /// Absolute path of the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref file) => Ok(Some(
                Self::config_dir()?.join(&self.logging.dir).join(file),
            )),
            None => Ok(None),
        }
    }

    /// Log configuration summary (NEVER logs the admin code or API key).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  auth: signup admin check {}, reset timeout {}s, admin attempts {}/min",
            if self.auth.enforce_admin_code_on_signup {
                "enforced"
            } else {
                "DISABLED"
            },
            self.auth.password_reset_timeout_secs,
            self.auth.max_admin_attempts_per_minute
        );
        info!("  storage: {}", self.storage.file);
        info!("  ui: system theme {}", self.ui.system_theme);
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
        info!(
            "  services: reset={}, announcements={}, ai={} ({}, key {}), timeout={}s",
            self.services.reset_base_url.as_deref().unwrap_or("none"),
            self.services
                .announcements_base_url
                .as_deref()
                .unwrap_or("local"),
            self.services.ai_base_url,
            self.services.ai_model,
            if self.services.ai_api_key.is_some() {
                "set"
            } else {
                "missing"
            },
            self.services.request_timeout_secs
        );
        info!(
            "  retry: attempts={}, initial={}ms, max={}s, backoff={}x",
            self.retry.max_attempts,
            self.retry.initial_delay_ms,
            self.retry.max_delay_secs,
            self.retry.backoff_multiplier
        );
    }

    fn apply_env_overrides(&mut self) {
        // Auth
        Self::apply_env_string("EH_AUTH_ADMIN_MATRIC_CODE", &mut self.auth.admin_matric_code);
        Self::apply_env_bool(
            "EH_AUTH_ENFORCE_ADMIN_CODE_ON_SIGNUP",
            &mut self.auth.enforce_admin_code_on_signup,
        );
        Self::apply_env_parse(
            "EH_AUTH_PASSWORD_RESET_TIMEOUT_SECS",
            &mut self.auth.password_reset_timeout_secs,
        );
        Self::apply_env_parse(
            "EH_AUTH_MAX_ADMIN_ATTEMPTS_PER_MINUTE",
            &mut self.auth.max_admin_attempts_per_minute,
        );

        // Storage
        Self::apply_env_string("EH_STORAGE_FILE", &mut self.storage.file);

        // UI
        Self::apply_env_parse("EH_UI_SYSTEM_THEME", &mut self.ui.system_theme);

        // Logging
        Self::apply_env_parse("EH_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("EH_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("EH_LOG_FILE", &mut self.logging.file);

        // Services
        Self::apply_env_option_string("EH_RESET_BASE_URL", &mut self.services.reset_base_url);
        Self::apply_env_option_string(
            "EH_ANNOUNCEMENTS_BASE_URL",
            &mut self.services.announcements_base_url,
        );
        Self::apply_env_string("EH_AI_BASE_URL", &mut self.services.ai_base_url);
        Self::apply_env_string("EH_AI_MODEL", &mut self.services.ai_model);
        Self::apply_env_option_string("EH_AI_API_KEY", &mut self.services.ai_api_key);
        Self::apply_env_parse(
            "EH_REQUEST_TIMEOUT_SECS",
            &mut self.services.request_timeout_secs,
        );
        Self::apply_env_string("EH_EXPORT_DIR", &mut self.services.export_dir);

        // Retry
        Self::apply_env_parse("EH_RETRY_MAX_ATTEMPTS", &mut self.retry.max_attempts);
        Self::apply_env_parse(
            "EH_RETRY_INITIAL_DELAY_MS",
            &mut self.retry.initial_delay_ms,
        );
        Self::apply_env_parse("EH_RETRY_MAX_DELAY_SECS", &mut self.retry.max_delay_secs);
        Self::apply_env_parse(
            "EH_RETRY_BACKOFF_MULTIPLIER",
            &mut self.retry.backoff_multiplier,
        );
        Self::apply_env_bool("EH_RETRY_JITTER", &mut self.retry.jitter);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
