//! Seams to the platform-specific media store.
//!
//! Implementations live outside this crate (JNI on Android, an
//! always-failing stub elsewhere). Each method is exactly one round trip.

use crate::error::NativeError;
use crate::models::{Album, Asset, Page, Thumbnail};
use crate::permissions::{AccessLevel, AuthorizationStatus};
use crate::progress::ProgressEmitter;
use crate::requests::{
    AlbumQuery, ConversionOptions, EnumerationRequest, NativeSaveOptions, ThumbnailOptions,
};
use async_trait::async_trait;

#[async_trait]
pub trait NativeCameraRoll: Send + Sync {
    async fn save_to_camera_roll(
        &self,
        uri: &str,
        options: &NativeSaveOptions,
    ) -> Result<Asset, NativeError>;

    async fn get_photos(&self, params: &EnumerationRequest) -> Result<Page, NativeError>;

    async fn get_albums(&self, params: &AlbumQuery) -> Result<Vec<Album>, NativeError>;

    async fn delete_photos(&self, uris: &[String]) -> Result<(), NativeError>;

    async fn get_photo_by_internal_id(
        &self,
        internal_id: &str,
        options: &ConversionOptions,
    ) -> Result<Asset, NativeError>;

    async fn get_photo_thumbnail(
        &self,
        internal_id: &str,
        options: &ThumbnailOptions,
    ) -> Result<Thumbnail, NativeError>;

    /// Event source for save/fetch progress, if this platform emits any
    fn progress_source(&self) -> Option<ProgressEmitter> {
        None
    }
}

#[async_trait]
pub trait NativePermissionModule: Send + Sync {
    async fn check_permission(&self, level: AccessLevel)
        -> Result<AuthorizationStatus, NativeError>;

    async fn request_read_write_permission(&self) -> Result<AuthorizationStatus, NativeError>;

    async fn request_add_only_permission(&self) -> Result<AuthorizationStatus, NativeError>;

    /// Re-open the limited-library selection UI
    async fn refresh_photo_selection(&self) -> Result<bool, NativeError>;
}
