//! # Camera Roll
//!
//! Platform integration for the [`photo_library`] façade.
//!
//! This crate picks the native bridge for the platform it is compiled for
//! and wires it into a [`CameraRoll`] and a [`Permissions`] façade:
//! - Android: JNI calls into the app's `CameraRollBridge` class
//! - Everywhere else: a bridge that reports the platform as unsupported
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use camera_roll::{Config, EnumerationRequest};
//!
//! camera_roll::logging::init();
//! let config = Config::load("camera_roll.toml")?;
//! let roll = camera_roll::open(&config);
//! let page = roll.get_photos(&EnumerationRequest::first(20)).await?;
//! ```

#[cfg(target_os = "android")]
mod android;
pub mod bridge;
pub mod config;
pub mod error;
pub mod logging;
#[cfg(not(target_os = "android"))]
mod unsupported;

pub use config::{BridgeConfig, Config};
pub use error::AppError;
pub use photo_library::*;

#[cfg(target_os = "android")]
pub use android::AndroidBridge;
#[cfg(not(target_os = "android"))]
pub use unsupported::UnsupportedBridge;

use std::sync::Arc;

#[cfg(target_os = "android")]
fn platform_bridge(config: &Config) -> Arc<AndroidBridge> {
    Arc::new(AndroidBridge::new(config.android.clone()))
}

#[cfg(not(target_os = "android"))]
fn platform_bridge(_config: &Config) -> Arc<UnsupportedBridge> {
    Arc::new(UnsupportedBridge)
}

/// Camera roll façade backed by this platform's bridge
pub fn open(config: &Config) -> CameraRoll {
    log::info!(
        "Opening camera roll for platform {:?}",
        config.camera_roll.platform()
    );
    CameraRoll::new(platform_bridge(config), &config.camera_roll)
}

/// Permission façade backed by this platform's bridge
pub fn open_permissions(config: &Config) -> Permissions {
    Permissions::new(platform_bridge(config))
}

#[cfg(all(test, not(target_os = "android")))]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_unsupported_platform_reports_errors() {
        let roll = open(&Config::default());
        let err = roll
            .get_photos(&EnumerationRequest::first(10))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            CameraRollError::Native(NativeError::PlatformNotSupported(
                "getPhotos not available on this platform".to_string()
            ))
        );
        assert!(matches!(AppError::from(err), AppError::Unsupported(_)));
    }

    #[tokio::test]
    async fn test_validation_still_happens_first() {
        let roll = open(&Config::default());
        let err = roll.save_asset("", SaveOptions::default()).await.unwrap_err();
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn test_progress_subscription_is_a_no_op() {
        let roll = open(&Config::default());
        assert!(!roll.progress().is_live());

        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let subscription = roll.progress().subscribe(move |event| {
            let _ = tx.send(event);
        });
        assert_eq!(roll.progress().listener_count(), 1);

        let waited = tokio::time::timeout(Duration::from_millis(50), rx.recv()).await;
        assert!(waited.is_err(), "dormant relay delivered {:?}", waited);

        subscription.remove();
        assert_eq!(roll.progress().listener_count(), 0);
    }

    #[tokio::test]
    async fn test_permissions_report_unavailable() {
        let permissions = open_permissions(&Config::default());
        assert_eq!(
            permissions.check(AccessLevel::ReadWrite).await.unwrap(),
            AuthorizationStatus::Unavailable
        );
        assert!(!permissions.refresh_photo_selection().await.unwrap());
    }
}
