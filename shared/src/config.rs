use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::Mode;

/// Host-page settings for the screen. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    pub brand: String,
    pub initial_mode: Mode,
    pub dark_mode: bool,
    pub forgot_password_href: String,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            brand: "Facebook".to_string(),
            initial_mode: Mode::Login,
            dark_mode: false,
            forgot_password_href: "#".to_string(),
        }
    }
}

impl ScreenConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }
}
