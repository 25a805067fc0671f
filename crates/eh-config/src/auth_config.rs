use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ADMIN_MATRIC_CODE,
    DEFAULT_ENFORCE_ADMIN_CODE_ON_SIGNUP, DEFAULT_MAX_ADMIN_ATTEMPTS_PER_MINUTE,
    DEFAULT_PASSWORD_RESET_TIMEOUT_SECS,
};

use serde::Deserialize;

pub const MIN_PASSWORD_RESET_TIMEOUT_SECS: u64 = 1;
pub const MAX_PASSWORD_RESET_TIMEOUT_SECS: u64 = 120;

pub const MIN_ADMIN_ATTEMPTS_PER_MINUTE: u32 = 1;
pub const MAX_ADMIN_ATTEMPTS_PER_MINUTE: u32 = 1000;

/// Client-local authentication settings.
///
/// `admin_matric_code` is compared by plain equality when a login claims the
/// ADMIN role. It is not a credential and offers no real protection.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub admin_matric_code: String,
    /// Apply the admin-code check to signup as well as login
    pub enforce_admin_code_on_signup: bool,
    pub password_reset_timeout_secs: u64,
    /// Admin claims allowed per minute before further attempts are refused
    pub max_admin_attempts_per_minute: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            admin_matric_code: String::from(DEFAULT_ADMIN_MATRIC_CODE),
            enforce_admin_code_on_signup: DEFAULT_ENFORCE_ADMIN_CODE_ON_SIGNUP,
            password_reset_timeout_secs: DEFAULT_PASSWORD_RESET_TIMEOUT_SECS,
            max_admin_attempts_per_minute: DEFAULT_MAX_ADMIN_ATTEMPTS_PER_MINUTE,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.admin_matric_code.is_empty() {
            return Err(ConfigError::auth("auth.admin_matric_code cannot be empty"));
        }

        if self.password_reset_timeout_secs < MIN_PASSWORD_RESET_TIMEOUT_SECS
            || self.password_reset_timeout_secs > MAX_PASSWORD_RESET_TIMEOUT_SECS
        {
            return Err(ConfigError::auth(format!(
                "auth.password_reset_timeout_secs must be {}-{}, got {}",
                MIN_PASSWORD_RESET_TIMEOUT_SECS,
                MAX_PASSWORD_RESET_TIMEOUT_SECS,
                self.password_reset_timeout_secs
            )));
        }

        if self.max_admin_attempts_per_minute < MIN_ADMIN_ATTEMPTS_PER_MINUTE
            || self.max_admin_attempts_per_minute > MAX_ADMIN_ATTEMPTS_PER_MINUTE
        {
            return Err(ConfigError::auth(format!(
                "auth.max_admin_attempts_per_minute must be {}-{}, got {}",
                MIN_ADMIN_ATTEMPTS_PER_MINUTE,
                MAX_ADMIN_ATTEMPTS_PER_MINUTE,
                self.max_admin_attempts_per_minute
            )));
        }

        Ok(())
    }
}
