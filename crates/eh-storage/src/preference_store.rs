use crate::keys::{LOW_DATA_MODE_KEY, THEME_KEY};
use crate::{KeyValueStore, StorageResult};

use eh_core::{Preferences, Theme};

use std::str::FromStr;
use std::sync::Arc;

use log::{debug, warn};
use parking_lot::RwLock;

/// Theme and low-bandwidth preferences, persisted as plain strings.
pub struct PreferenceStore {
    storage: Arc<dyn KeyValueStore>,
    current: RwLock<Preferences>,
}

impl PreferenceStore {
    /// Restore preferences, falling back to `system_theme` when no valid
    /// theme was stored. The effective values are written back right away.
    pub fn open(storage: Arc<dyn KeyValueStore>, system_theme: Theme) -> Self {
        let theme = match storage.get_item(THEME_KEY) {
            Ok(Some(raw)) => Theme::from_str(&raw).unwrap_or_else(|_| {
                warn!("Ignoring unknown stored theme '{raw}'");
                system_theme
            }),
            Ok(None) => system_theme,
            Err(e) => {
                warn!("Could not read stored theme: {e}");
                system_theme
            }
        };

        let low_data_mode = match storage.get_item(LOW_DATA_MODE_KEY) {
            Ok(raw) => raw.as_deref() == Some("true"),
            Err(e) => {
                warn!("Could not read stored low-data flag: {e}");
                false
            }
        };

        let store = Self {
            storage,
            current: RwLock::new(Preferences {
                theme,
                low_data_mode,
            }),
        };

        if let Err(e) = store.persist_all() {
            warn!("Could not persist preferences on startup: {e}");
        }

        store
    }

    fn persist_all(&self) -> StorageResult<()> {
        let preferences = *self.current.read();
        self.storage.set_item(THEME_KEY, preferences.theme.as_str())?;
        self.storage
            .set_item(LOW_DATA_MODE_KEY, bool_str(preferences.low_data_mode))
    }

    pub fn preferences(&self) -> Preferences {
        *self.current.read()
    }

    pub fn set_theme(&self, theme: Theme) -> StorageResult<()> {
        let mut current = self.current.write();
        self.storage.set_item(THEME_KEY, theme.as_str())?;
        current.theme = theme;
        debug!("Theme set to {theme}");
        Ok(())
    }

    pub fn toggle_theme(&self) -> StorageResult<Theme> {
        let mut current = self.current.write();
        let theme = current.theme.toggled();
        self.storage.set_item(THEME_KEY, theme.as_str())?;
        current.theme = theme;
        debug!("Theme toggled to {theme}");
        Ok(theme)
    }

    pub fn set_low_data_mode(&self, enabled: bool) -> StorageResult<()> {
        let mut current = self.current.write();
        self.storage.set_item(LOW_DATA_MODE_KEY, bool_str(enabled))?;
        current.low_data_mode = enabled;
        debug!("Low-data mode set to {enabled}");
        Ok(())
    }

    pub fn toggle_low_data_mode(&self) -> StorageResult<bool> {
        let mut current = self.current.write();
        let enabled = !current.low_data_mode;
        self.storage.set_item(LOW_DATA_MODE_KEY, bool_str(enabled))?;
        current.low_data_mode = enabled;
        debug!("Low-data mode toggled to {enabled}");
        Ok(enabled)
    }
}

fn bool_str(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}
