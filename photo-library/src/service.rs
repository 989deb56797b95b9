use crate::config::{CameraRollConfig, Platform};
use crate::error::CameraRollError;
use crate::inference::resolve_media_type;
use crate::models::{Album, Asset, Page, Thumbnail};
use crate::native::NativeCameraRoll;
use crate::normalize::with_defaults;
use crate::options::MediaType;
use crate::pages::PageWalker;
use crate::progress::ProgressRelay;
use crate::requests::{
    AlbumQuery, ConversionOptions, EnumerationRequest, NativeSaveOptions, SaveOptions,
    ThumbnailOptions,
};
use std::sync::Arc;

/// Access to the device photo library.
///
/// Every operation is a single round trip to the native module. Nothing is
/// cached, retried or tracked between calls, so the façade can be cloned
/// and used concurrently.
#[derive(Clone)]
pub struct CameraRoll {
    native: Arc<dyn NativeCameraRoll>,
    platform: Platform,
    progress: ProgressRelay,
}

impl CameraRoll {
    pub fn new(native: Arc<dyn NativeCameraRoll>, config: &CameraRollConfig) -> Self {
        let progress = ProgressRelay::new(native.progress_source());
        Self {
            native,
            platform: config.platform(),
            progress,
        }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Save/fetch progress notifications from the native module
    pub fn progress(&self) -> &ProgressRelay {
        &self.progress
    }

    /// Fetch one page of assets, most recent first
    pub async fn get_photos(&self, params: &EnumerationRequest) -> Result<Page, CameraRollError> {
        let params = with_defaults(params, self.platform);
        log::debug!(
            "getPhotos(first={}, after={:?}, asset_type={:?}, group_types={:?})",
            params.first,
            params.after,
            params.asset_type,
            params.group_types
        );
        Ok(self.native.get_photos(&params).await?)
    }

    /// Walk every page matching `params`, starting at `params.after`
    pub fn pages(&self, params: EnumerationRequest) -> PageWalker<'_> {
        PageWalker::new(self, params)
    }

    pub async fn get_albums(&self, query: AlbumQuery) -> Result<Vec<Album>, CameraRollError> {
        log::debug!("getAlbums({:?})", query);
        Ok(self.native.get_albums(&query).await?)
    }

    /// Albums of all asset types, regular albums only
    pub async fn albums(&self) -> Result<Vec<Album>, CameraRollError> {
        self.get_albums(AlbumQuery::default()).await
    }

    /// Save a photo or video into the library and return the new asset.
    ///
    /// An empty `uri` fails with a validation error without reaching native
    /// code. `MediaType::Auto` is resolved from the file extension.
    pub async fn save_asset(&self, uri: &str, options: SaveOptions) -> Result<Asset, CameraRollError> {
        let media_type = resolve_media_type(uri, options.media_type)?;
        let native_options = NativeSaveOptions {
            media_type,
            album: options.album,
        };
        log::debug!("saveToCameraRoll({}, {:?})", uri, native_options);
        Ok(self.native.save_to_camera_roll(uri, &native_options).await?)
    }

    /// Save and return only the URI of the new asset
    #[deprecated(note = "use `save_asset` instead")]
    pub async fn save(&self, uri: &str, options: SaveOptions) -> Result<String, CameraRollError> {
        log::warn!("CameraRoll::save(uri, options) is deprecated. Use save_asset instead");
        let asset = self.save_asset(uri, options).await?;
        Ok(asset.node.image.uri)
    }

    #[deprecated(note = "use `save_asset` with `SaveOptions::with_type` instead")]
    pub async fn save_to_camera_roll(
        &self,
        uri: &str,
        media_type: MediaType,
    ) -> Result<Asset, CameraRollError> {
        log::warn!(
            "CameraRoll::save_to_camera_roll(uri, type) is deprecated. Use save_asset instead"
        );
        self.save_asset(uri, SaveOptions::with_type(media_type)).await
    }

    /// Save an image and report success
    #[deprecated(note = "use `save_asset` instead")]
    pub async fn save_image(&self, uri: &str) -> Result<bool, CameraRollError> {
        log::warn!("CameraRoll::save_image(uri) is deprecated. Use save_asset instead");
        self.save_asset(uri, SaveOptions::with_type(MediaType::Photo))
            .await
            .map(|_| true)
    }

    /// Delete assets by URI.
    ///
    /// Succeeds or fails as a whole; per-item outcomes are up to the
    /// native module. iOS asks the user to confirm.
    pub async fn delete_photos(&self, uris: &[String]) -> Result<(), CameraRollError> {
        log::debug!("deletePhotos({} uris)", uris.len());
        Ok(self.native.delete_photos(uris).await?)
    }

    /// Fetch full asset data by the media store's internal id
    pub async fn get_photo_by_internal_id(
        &self,
        internal_id: &str,
        options: ConversionOptions,
    ) -> Result<Asset, CameraRollError> {
        log::debug!("getPhotoByInternalID({}, {:?})", internal_id, options);
        Ok(self
            .native
            .get_photo_by_internal_id(internal_id, &options)
            .await?)
    }

    pub async fn get_photo_thumbnail(
        &self,
        internal_id: &str,
        options: ThumbnailOptions,
    ) -> Result<Thumbnail, CameraRollError> {
        log::debug!("getPhotoThumbnail({}, {:?})", internal_id, options);
        Ok(self.native.get_photo_thumbnail(internal_id, &options).await?)
    }
}

impl std::fmt::Debug for CameraRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CameraRoll")
            .field("platform", &self.platform)
            .field("progress", &self.progress)
            .finish_non_exhaustive()
    }
}
