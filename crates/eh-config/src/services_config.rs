use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_AI_BASE_URL, DEFAULT_AI_MODEL,
    DEFAULT_EXPORT_DIRECTORY, DEFAULT_REQUEST_TIMEOUT_SECS,
};

use serde::Deserialize;

pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

/// Endpoints of the portal's external collaborators
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServicesConfig {
    /// Password reset service; resets fail as unreachable when unset
    pub reset_base_url: Option<String>,
    /// Announcement publisher; announcements stay local when unset
    pub announcements_base_url: Option<String>,
    pub ai_base_url: String,
    pub ai_model: String,
    /// Never logged
    pub ai_api_key: Option<String>,
    pub request_timeout_secs: u64,
    /// Report export directory, relative to the config directory
    pub export_dir: String,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            reset_base_url: None,
            announcements_base_url: None,
            ai_base_url: String::from(DEFAULT_AI_BASE_URL),
            ai_model: String::from(DEFAULT_AI_MODEL),
            ai_api_key: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            export_dir: String::from(DEFAULT_EXPORT_DIRECTORY),
        }
    }
}

impl ServicesConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let urls = [
            ("services.reset_base_url", self.reset_base_url.as_deref()),
            (
                "services.announcements_base_url",
                self.announcements_base_url.as_deref(),
            ),
            ("services.ai_base_url", Some(self.ai_base_url.as_str())),
        ];
        for (name, url) in urls {
            if let Some(url) = url
                && !(url.starts_with("http://") || url.starts_with("https://"))
            {
                return Err(ConfigError::services(format!(
                    "{name} must start with http:// or https://, got '{url}'"
                )));
            }
        }

        if self.ai_model.is_empty() {
            return Err(ConfigError::services("services.ai_model cannot be empty"));
        }

        if !(MIN_REQUEST_TIMEOUT_SECS..=MAX_REQUEST_TIMEOUT_SECS)
            .contains(&self.request_timeout_secs)
        {
            return Err(ConfigError::services(format!(
                "services.request_timeout_secs must be {}-{}, got {}",
                MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS, self.request_timeout_secs
            )));
        }

        let export_dir = std::path::Path::new(&self.export_dir);
        if export_dir.is_absolute() || self.export_dir.contains("..") {
            return Err(ConfigError::services(
                "services.export_dir must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }
}
