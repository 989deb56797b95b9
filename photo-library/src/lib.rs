//! # Photo Library
//!
//! Typed access to the device photo library (camera roll).
//!
//! This crate provides the cross-platform half of the camera roll binding:
//! - Constant tag sets and wire-compatible value records
//! - Request defaulting and save-type inference
//! - A request façade over a pluggable native module
//! - Permission queries and a progress event relay
//!
//! ## Platform Separation
//!
//! Nothing in here touches the OS media store. The native module is reached
//! through the [`NativeCameraRoll`] and [`NativePermissionModule`] traits;
//! platform implementations (e.g. the Android JNI bridge) live in the
//! application crate.
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use photo_library::{CameraRoll, CameraRollConfig, EnumerationRequest};
//!
//! let roll = CameraRoll::new(native, &CameraRollConfig::default());
//! let page = roll.get_photos(&EnumerationRequest::first(20)).await?;
//! if let Some(cursor) = page.page_info.end_cursor {
//!     let next = roll.get_photos(&EnumerationRequest::first(20).after(cursor)).await?;
//! }
//! ```

pub mod config;
pub mod error;
pub mod inference;
pub mod models;
pub mod native;
pub mod normalize;
pub mod options;
pub mod pages;
pub mod permissions;
pub mod progress;
pub mod requests;
pub mod service;

#[cfg(test)]
mod test_support;

pub use config::{CameraRollConfig, Platform};
pub use error::{CameraRollError, ConfigError, NativeError};
pub use inference::{infer_media_type, resolve_media_type, validate_source_uri};
pub use models::{Album, Asset, AssetNode, Image, Location, Page, PageInfo, Thumbnail};
pub use native::{NativeCameraRoll, NativePermissionModule};
pub use normalize::with_defaults;
pub use options::{
    AlbumSubType, AlbumType, AssetType, GroupTypes, Include, MediaType, SourceType, SubType,
};
pub use pages::PageWalker;
pub use permissions::{AccessLevel, AuthorizationStatus, Permissions};
pub use progress::{
    ProgressEmitter, ProgressEvent, ProgressRelay, Subscription, PROGRESS_UPDATE_EVENT,
};
pub use requests::{
    AlbumQuery, ConversionOptions, EnumerationRequest, NativeSaveOptions, SaveOptions,
    ThumbnailOptions, ThumbnailSize,
};
pub use service::CameraRoll;
