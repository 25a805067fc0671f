use crate::Theme;

use serde::{Deserialize, Serialize};

/// Display preferences shared by every view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Preferences {
    pub theme: Theme,
    /// Disables non-essential visual work
    pub low_data_mode: bool,
}
