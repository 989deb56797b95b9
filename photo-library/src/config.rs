use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Mobile platform the native module runs on
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Android,
    Ios,
    /// Anything without a native photo library (desktop, tests)
    Other,
}

impl Platform {
    /// Platform this binary was compiled for
    pub fn current() -> Self {
        if cfg!(target_os = "android") {
            Platform::Android
        } else if cfg!(target_os = "ios") {
            Platform::Ios
        } else {
            Platform::Other
        }
    }

    /// Whether the native enumeration honours the `groupTypes` filter
    pub fn supports_group_types(&self) -> bool {
        !matches!(self, Platform::Android)
    }
}

/// Configuration for the camera roll façade
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct CameraRollConfig {
    /// Overrides compile-time platform detection
    pub platform: Option<Platform>,
}

impl CameraRollConfig {
    pub fn platform(&self) -> Platform {
        self.platform.unwrap_or_else(Platform::current)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }
}
