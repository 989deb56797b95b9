use photo_library::{CameraRollError, ConfigError, NativeError};
use std::fmt;

/// Central error type for apps embedding the camera roll
#[derive(Debug)]
pub enum AppError {
    /// Request rejected before dispatch (e.g. empty source URI)
    Validation(String),
    /// The running platform has no camera roll implementation
    Unsupported(String),
    /// Failure reported by the native module
    Native(NativeError),
    /// Configuration could not be parsed or written
    Config(ConfigError),
    /// Filesystem error
    Filesystem(std::io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
            AppError::Unsupported(msg) => write!(f, "Unsupported: {}", msg),
            AppError::Native(e) => write!(f, "Native error: {}", e),
            AppError::Config(e) => write!(f, "{}", e),
            AppError::Filesystem(e) => write!(f, "Filesystem error: {}", e),
        }
    }
}

impl std::error::Error for AppError {}

impl From<CameraRollError> for AppError {
    fn from(e: CameraRollError) -> Self {
        match e {
            CameraRollError::Validation(msg) => AppError::Validation(msg),
            CameraRollError::Native(NativeError::PlatformNotSupported(msg)) => {
                AppError::Unsupported(msg)
            }
            CameraRollError::Native(e) => AppError::Native(e),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        AppError::Config(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Filesystem(e)
    }
}

/// User-friendly error messages for UI
impl AppError {
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Unsupported(_) => {
                "The photo library is not available on this device.".to_string()
            }
            AppError::Native(e) => match e {
                NativeError::Rejected { message, .. } => message.clone(),
                _ => "Could not reach the photo library. Please try again.".to_string(),
            },
            AppError::Config(_) => "The camera roll configuration is invalid.".to_string(),
            AppError::Filesystem(_) => {
                "Error accessing files. Please check app permissions.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_through() {
        let err = AppError::from(CameraRollError::Validation("tag must be a valid string".into()));
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(err.user_message(), "tag must be a valid string");
    }

    #[test]
    fn test_platform_not_supported_maps_to_unsupported() {
        let err = AppError::from(CameraRollError::Native(NativeError::PlatformNotSupported(
            "getPhotos".into(),
        )));
        assert!(matches!(err, AppError::Unsupported(_)));
    }

    #[test]
    fn test_rejection_message_is_shown() {
        let err = AppError::from(CameraRollError::Native(NativeError::rejected(
            "E_PHOTO_LIBRARY_AUTH_DENIED",
            "Access to photo library was denied",
        )));
        assert_eq!(err.user_message(), "Access to photo library was denied");
        assert_eq!(
            err.to_string(),
            "Native error: E_PHOTO_LIBRARY_AUTH_DENIED: Access to photo library was denied"
        );
    }
}
