use crate::{ConfigError, ConfigErrorResult};

use std::time::Duration;

use serde::Deserialize;

pub const MIN_MAX_ATTEMPTS: u32 = 1;
pub const MAX_MAX_ATTEMPTS: u32 = 10;
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

pub const MIN_INITIAL_DELAY_MS: u64 = 10;
pub const MAX_INITIAL_DELAY_MS: u64 = 10000;
pub const DEFAULT_INITIAL_DELAY_MS: u64 = 200;

pub const MIN_MAX_DELAY_SECS: u64 = 1;
pub const MAX_MAX_DELAY_SECS: u64 = 60;
pub const DEFAULT_MAX_DELAY_SECS: u64 = 5;

pub const MIN_BACKOFF_MULTIPLIER: f64 = 1.0;
pub const MAX_BACKOFF_MULTIPLIER: f64 = 10.0;
pub const DEFAULT_BACKOFF_MULTIPLIER: f64 = 2.0;

pub const DEFAULT_JITTER: bool = true;

/// Retry policy for calls to external services (AI, password reset,
/// announcement publishing).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Total attempts, including the first
    pub max_attempts: u32,
    pub initial_delay_ms: u64,
    pub max_delay_secs: u64,
    pub backoff_multiplier: f64,
    pub jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            initial_delay_ms: DEFAULT_INITIAL_DELAY_MS,
            max_delay_secs: DEFAULT_MAX_DELAY_SECS,
            backoff_multiplier: DEFAULT_BACKOFF_MULTIPLIER,
            jitter: DEFAULT_JITTER,
        }
    }
}

impl RetryConfig {
    pub fn initial_delay(&self) -> Duration {
        Duration::from_millis(self.initial_delay_ms)
    }

    pub fn max_delay(&self) -> Duration {
        Duration::from_secs(self.max_delay_secs)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(MIN_MAX_ATTEMPTS..=MAX_MAX_ATTEMPTS).contains(&self.max_attempts) {
            return Err(ConfigError::config(format!(
                "retry.max_attempts must be {}-{}, got {}",
                MIN_MAX_ATTEMPTS, MAX_MAX_ATTEMPTS, self.max_attempts
            )));
        }

        if !(MIN_INITIAL_DELAY_MS..=MAX_INITIAL_DELAY_MS).contains(&self.initial_delay_ms) {
            return Err(ConfigError::config(format!(
                "retry.initial_delay_ms must be {}-{}, got {}",
                MIN_INITIAL_DELAY_MS, MAX_INITIAL_DELAY_MS, self.initial_delay_ms
            )));
        }

        if !(MIN_MAX_DELAY_SECS..=MAX_MAX_DELAY_SECS).contains(&self.max_delay_secs) {
            return Err(ConfigError::config(format!(
                "retry.max_delay_secs must be {}-{}, got {}",
                MIN_MAX_DELAY_SECS, MAX_MAX_DELAY_SECS, self.max_delay_secs
            )));
        }

        if !(MIN_BACKOFF_MULTIPLIER..=MAX_BACKOFF_MULTIPLIER).contains(&self.backoff_multiplier) {
            return Err(ConfigError::config(format!(
                "retry.backoff_multiplier must be {}-{}, got {}",
                MIN_BACKOFF_MULTIPLIER, MAX_BACKOFF_MULTIPLIER, self.backoff_multiplier
            )));
        }

        Ok(())
    }
}
