use crate::error::AppError;
use photo_library::{CameraRollConfig, ConfigError};
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_BRIDGE_CLASS: &str = "com/reactnativecommunity/cameraroll/CameraRollBridge";

/// Configuration for the Android bridge
///
/// This allows customization of the JVM class hosting the bridge for different apps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BridgeConfig {
    /// Fully qualified class name in slash format (e.g., "com/example/myapp/CameraRollBridge")
    pub bridge_class: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            bridge_class: DEFAULT_BRIDGE_CLASS.to_string(),
        }
    }
}

/// Top-level configuration; every section is optional in the TOML file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub camera_roll: CameraRollConfig,
    pub android: BridgeConfig,
}

impl Config {
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        log::debug!("Loading camera roll config from {:?}", path);
        let text = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&text)?)
    }
}
