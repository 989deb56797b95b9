/// Failure reported by (or while talking to) the native module
#[derive(Debug, Clone, PartialEq)]
pub enum NativeError {
    /// The native module rejected the call; code and message are verbatim
    Rejected { code: String, message: String },
    /// No native implementation exists on this platform
    PlatformNotSupported(String),
    /// The call could not be delivered to native code
    Bridge(String),
    /// The native reply did not match the expected shape
    Decode(String),
}

impl NativeError {
    pub fn rejected(code: impl Into<String>, message: impl Into<String>) -> Self {
        NativeError::Rejected {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Native error code, when the native module supplied one
    pub fn code(&self) -> Option<&str> {
        match self {
            NativeError::Rejected { code, .. } => Some(code),
            _ => None,
        }
    }
}

impl std::fmt::Display for NativeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NativeError::Rejected { code, message } => write!(f, "{}: {}", code, message),
            NativeError::PlatformNotSupported(msg) => write!(f, "Platform not supported: {}", msg),
            NativeError::Bridge(msg) => write!(f, "Bridge error: {}", msg),
            NativeError::Decode(msg) => write!(f, "Decode error: {}", msg),
        }
    }
}

impl std::error::Error for NativeError {}

impl From<serde_json::Error> for NativeError {
    fn from(err: serde_json::Error) -> Self {
        NativeError::Decode(err.to_string())
    }
}

/// Error type for camera roll operations
#[derive(Debug, Clone, PartialEq)]
pub enum CameraRollError {
    /// Rejected locally before anything was dispatched
    Validation(String),
    Native(NativeError),
}

impl CameraRollError {
    pub fn is_validation(&self) -> bool {
        matches!(self, CameraRollError::Validation(_))
    }

    pub fn native(&self) -> Option<&NativeError> {
        match self {
            CameraRollError::Native(e) => Some(e),
            CameraRollError::Validation(_) => None,
        }
    }
}

impl std::fmt::Display for CameraRollError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CameraRollError::Validation(msg) => write!(f, "Validation error: {}", msg),
            CameraRollError::Native(e) => write!(f, "Native error: {}", e),
        }
    }
}

impl std::error::Error for CameraRollError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CameraRollError::Native(e) => Some(e),
            CameraRollError::Validation(_) => None,
        }
    }
}

impl From<NativeError> for CameraRollError {
    fn from(err: NativeError) -> Self {
        CameraRollError::Native(err)
    }
}

/// Error type for configuration (de)serialization
#[derive(Debug)]
pub enum ConfigError {
    Parse(toml::de::Error),
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "Config parse error: {}", e),
            ConfigError::Serialize(e) => write!(f, "Config serialize error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        ConfigError::Serialize(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_error_is_kept_verbatim() {
        let native = NativeError::rejected("E_UNABLE_TO_LOAD", "Could not load photos");
        let err = CameraRollError::from(native.clone());
        assert!(!err.is_validation());
        assert_eq!(err.native(), Some(&native));
        assert_eq!(native.code(), Some("E_UNABLE_TO_LOAD"));
        assert_eq!(
            err.to_string(),
            "Native error: E_UNABLE_TO_LOAD: Could not load photos"
        );
    }

    #[test]
    fn test_decode_error_from_json() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = NativeError::from(json_err);
        assert!(matches!(err, NativeError::Decode(_)));
        assert_eq!(err.code(), None);
    }
}
