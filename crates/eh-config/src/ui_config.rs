use eh_core::Theme;

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Theme reported by the host environment, used until the user picks one
    pub system_theme: Theme,
}
