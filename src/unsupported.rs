// Bridge for platforms without a native camera roll implementation.
//
// Every media operation fails with `PlatformNotSupported`; permission
// queries report `Unavailable` and progress subscriptions never fire.

use async_trait::async_trait;
use photo_library::{
    AccessLevel, Album, AlbumQuery, Asset, AuthorizationStatus, ConversionOptions,
    EnumerationRequest, NativeCameraRoll, NativeError, NativePermissionModule, NativeSaveOptions,
    Page, Thumbnail, ThumbnailOptions,
};

#[derive(Debug, Clone, Default)]
pub struct UnsupportedBridge;

fn not_supported<T>(operation: &str) -> Result<T, NativeError> {
    Err(NativeError::PlatformNotSupported(format!(
        "{} not available on this platform",
        operation
    )))
}

#[async_trait]
impl NativeCameraRoll for UnsupportedBridge {
    async fn save_to_camera_roll(
        &self,
        _uri: &str,
        _options: &NativeSaveOptions,
    ) -> Result<Asset, NativeError> {
        not_supported("saveToCameraRoll")
    }

    async fn get_photos(&self, _params: &EnumerationRequest) -> Result<Page, NativeError> {
        not_supported("getPhotos")
    }

    async fn get_albums(&self, _params: &AlbumQuery) -> Result<Vec<Album>, NativeError> {
        not_supported("getAlbums")
    }

    async fn delete_photos(&self, _uris: &[String]) -> Result<(), NativeError> {
        not_supported("deletePhotos")
    }

    async fn get_photo_by_internal_id(
        &self,
        _internal_id: &str,
        _options: &ConversionOptions,
    ) -> Result<Asset, NativeError> {
        not_supported("getPhotoByInternalID")
    }

    async fn get_photo_thumbnail(
        &self,
        _internal_id: &str,
        _options: &ThumbnailOptions,
    ) -> Result<Thumbnail, NativeError> {
        not_supported("getPhotoThumbnail")
    }
}

#[async_trait]
impl NativePermissionModule for UnsupportedBridge {
    async fn check_permission(
        &self,
        _level: AccessLevel,
    ) -> Result<AuthorizationStatus, NativeError> {
        Ok(AuthorizationStatus::Unavailable)
    }

    async fn request_read_write_permission(&self) -> Result<AuthorizationStatus, NativeError> {
        Ok(AuthorizationStatus::Unavailable)
    }

    async fn request_add_only_permission(&self) -> Result<AuthorizationStatus, NativeError> {
        Ok(AuthorizationStatus::Unavailable)
    }

    async fn refresh_photo_selection(&self) -> Result<bool, NativeError> {
        Ok(false)
    }
}
