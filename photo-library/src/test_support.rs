//! Recording in-memory stand-in for the native module.

use crate::error::NativeError;
use crate::models::{Album, Asset, AssetNode, Image, Page, PageInfo, Thumbnail};
use crate::native::{NativeCameraRoll, NativePermissionModule};
use crate::options::MediaType;
use crate::permissions::{AccessLevel, AuthorizationStatus};
use crate::progress::ProgressEmitter;
use crate::requests::{
    AlbumQuery, ConversionOptions, EnumerationRequest, NativeSaveOptions, ThumbnailOptions,
};
use async_trait::async_trait;
use std::sync::Mutex;

#[derive(Default)]
pub struct FakeNative {
    library: Vec<Asset>,
    calls: Mutex<Vec<String>>,
    failure: Mutex<Option<NativeError>>,
    last_params: Mutex<Option<EnumerationRequest>>,
    last_save: Mutex<Option<NativeSaveOptions>>,
    last_albums: Mutex<Option<AlbumQuery>>,
    last_conversion: Mutex<Option<ConversionOptions>>,
    limited: bool,
    emitter: Option<ProgressEmitter>,
}

pub fn asset(id: &str, uri: &str, media_type: &str) -> Asset {
    Asset {
        node: AssetNode {
            id: id.to_string(),
            media_type: media_type.to_string(),
            sub_types: Vec::new(),
            source_type: None,
            group_name: vec!["Camera".to_string()],
            image: Image {
                uri: uri.to_string(),
                ..Default::default()
            },
            timestamp: 1_700_000_000.0,
            modification_timestamp: 1_700_000_000.0,
            location: None,
        },
    }
}

impl FakeNative {
    pub fn with_library(count: usize) -> Self {
        let library = (0..count)
            .map(|i| asset(&i.to_string(), &format!("content://media/{}", i), "image/jpeg"))
            .collect();
        Self {
            library,
            ..Default::default()
        }
    }

    pub fn limited(mut self) -> Self {
        self.limited = true;
        self
    }

    pub fn with_progress(mut self, emitter: ProgressEmitter) -> Self {
        self.emitter = Some(emitter);
        self
    }

    pub fn fail_next(&self, err: NativeError) {
        *self.failure.lock().unwrap() = Some(err);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_params(&self) -> Option<EnumerationRequest> {
        self.last_params.lock().unwrap().clone()
    }

    pub fn last_save(&self) -> Option<NativeSaveOptions> {
        self.last_save.lock().unwrap().clone()
    }

    pub fn last_albums(&self) -> Option<AlbumQuery> {
        *self.last_albums.lock().unwrap()
    }

    pub fn last_conversion(&self) -> Option<ConversionOptions> {
        *self.last_conversion.lock().unwrap()
    }

    fn record(&self, call: impl Into<String>) -> Result<(), NativeError> {
        self.calls.lock().unwrap().push(call.into());
        match self.failure.lock().unwrap().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl NativeCameraRoll for FakeNative {
    async fn save_to_camera_roll(
        &self,
        uri: &str,
        options: &NativeSaveOptions,
    ) -> Result<Asset, NativeError> {
        self.record(format!("saveToCameraRoll({})", uri))?;
        *self.last_save.lock().unwrap() = Some(options.clone());
        let media_type = match options.media_type {
            MediaType::Video => "video",
            _ => "image",
        };
        Ok(asset("saved", &format!("ph://saved/{}", uri), media_type))
    }

    async fn get_photos(&self, params: &EnumerationRequest) -> Result<Page, NativeError> {
        self.record("getPhotos")?;
        *self.last_params.lock().unwrap() = Some(params.clone());

        let start = match &params.after {
            Some(cursor) => cursor
                .parse::<usize>()
                .map_err(|_| NativeError::rejected("E_INVALID_CURSOR", "Invalid cursor"))?,
            None => 0,
        };
        if params.first <= 0 {
            return Err(NativeError::rejected("E_INVALID_PARAMS", "first must be positive"));
        }
        let start = start.min(self.library.len());
        let end = (start + params.first as usize).min(self.library.len());

        Ok(Page {
            edges: self.library[start..end].to_vec(),
            page_info: PageInfo {
                has_next_page: end < self.library.len(),
                start_cursor: Some(start.to_string()),
                end_cursor: Some(end.to_string()),
            },
            limited: self.limited.then_some(true),
        })
    }

    async fn get_albums(&self, params: &AlbumQuery) -> Result<Vec<Album>, NativeError> {
        self.record("getAlbums")?;
        *self.last_albums.lock().unwrap() = Some(*params);
        Ok(vec![Album {
            id: "album-1".to_string(),
            title: "Camera".to_string(),
            count: self.library.len() as u64,
            album_type: params.album_type,
            subtype: None,
        }])
    }

    async fn delete_photos(&self, uris: &[String]) -> Result<(), NativeError> {
        self.record(format!("deletePhotos({})", uris.join(",")))
    }

    async fn get_photo_by_internal_id(
        &self,
        internal_id: &str,
        options: &ConversionOptions,
    ) -> Result<Asset, NativeError> {
        self.record(format!("getPhotoByInternalID({})", internal_id))?;
        *self.last_conversion.lock().unwrap() = Some(*options);
        self.library
            .iter()
            .find(|a| a.id() == internal_id)
            .cloned()
            .ok_or_else(|| NativeError::rejected("E_NOT_FOUND", "No asset with that id"))
    }

    async fn get_photo_thumbnail(
        &self,
        internal_id: &str,
        options: &ThumbnailOptions,
    ) -> Result<Thumbnail, NativeError> {
        self.record(format!(
            "getPhotoThumbnail({}, {}x{})",
            internal_id, options.target_size.width, options.target_size.height
        ))?;
        Ok(Thumbnail {
            thumbnail_base64: "/9j/4A==".to_string(),
        })
    }

    fn progress_source(&self) -> Option<ProgressEmitter> {
        self.emitter.clone()
    }
}

#[async_trait]
impl NativePermissionModule for FakeNative {
    async fn check_permission(
        &self,
        level: AccessLevel,
    ) -> Result<AuthorizationStatus, NativeError> {
        let level = match level {
            AccessLevel::ReadWrite => "readWrite",
            AccessLevel::AddOnly => "addOnly",
        };
        self.record(format!("checkPermission({})", level))?;
        Ok(AuthorizationStatus::Limited)
    }

    async fn request_read_write_permission(&self) -> Result<AuthorizationStatus, NativeError> {
        self.record("requestReadWritePermission")?;
        Ok(AuthorizationStatus::Granted)
    }

    async fn request_add_only_permission(&self) -> Result<AuthorizationStatus, NativeError> {
        self.record("requestAddOnlyPermission")?;
        Ok(AuthorizationStatus::Granted)
    }

    async fn refresh_photo_selection(&self) -> Result<bool, NativeError> {
        self.record("refreshPhotoSelection")?;
        Ok(true)
    }
}

/// Test logger that records warnings per thread, so parallel tests don't
/// see each other's output
struct WarningRecorder;

thread_local! {
    static WARNINGS: std::cell::RefCell<Vec<String>> = const { std::cell::RefCell::new(Vec::new()) };
}

impl log::Log for WarningRecorder {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::Level::Warn
    }

    fn log(&self, record: &log::Record) {
        if record.level() == log::Level::Warn {
            WARNINGS.with(|w| w.borrow_mut().push(record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static RECORDER: WarningRecorder = WarningRecorder;
static INSTALL: std::sync::Once = std::sync::Once::new();

/// Start recording warnings emitted on the current thread
pub fn record_warnings() {
    INSTALL.call_once(|| {
        if log::set_logger(&RECORDER).is_ok() {
            log::set_max_level(log::LevelFilter::Warn);
        }
    });
    WARNINGS.with(|w| w.borrow_mut().clear());
}

/// Warnings recorded on the current thread since the last call
pub fn take_warnings() -> Vec<String> {
    WARNINGS.with(|w| std::mem::take(&mut *w.borrow_mut()))
}
