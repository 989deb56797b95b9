//! Request records handed to the native module.

use crate::options::{AlbumType, AssetType, GroupTypes, Include, MediaType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Parameters for enumerating photos, most recent first.
///
/// `first` has no default. A non-positive page size is passed through and
/// rejected by the native module.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct EnumerationRequest {
    pub first: i64,
    /// `end_cursor` from a previous page requested with the same filters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_types: Option<GroupTypes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    /// iOS only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_shared_albums: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<AssetType>,
    /// Milliseconds since the epoch, exclusive
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_time: Option<i64>,
    /// Milliseconds since the epoch, inclusive
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_time: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_types: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<Include>>,
}

impl EnumerationRequest {
    pub fn first(first: i64) -> Self {
        Self {
            first,
            ..Default::default()
        }
    }

    pub fn after(mut self, cursor: impl Into<String>) -> Self {
        self.after = Some(cursor.into());
        self
    }

    pub fn group_types(mut self, group_types: GroupTypes) -> Self {
        self.group_types = Some(group_types);
        self
    }

    pub fn group_name(mut self, name: impl Into<String>) -> Self {
        self.group_name = Some(name.into());
        self
    }

    pub fn asset_type(mut self, asset_type: AssetType) -> Self {
        self.asset_type = Some(asset_type);
        self
    }

    pub fn include_shared_albums(mut self, include: bool) -> Self {
        self.include_shared_albums = Some(include);
        self
    }

    /// Restrict to assets created after `from` and up to and including `to`
    pub fn between(mut self, from: Option<DateTime<Utc>>, to: Option<DateTime<Utc>>) -> Self {
        self.from_time = from.map(|t| t.timestamp_millis());
        self.to_time = to.map(|t| t.timestamp_millis());
        self
    }

    pub fn mime_types<I, S>(mut self, mime_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.mime_types = Some(mime_types.into_iter().map(Into::into).collect());
        self
    }

    pub fn include(mut self, fields: &[Include]) -> Self {
        self.include = Some(fields.to_vec());
        self
    }
}

/// Filter for album listing; `Default` is `All` assets in regular albums
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AlbumQuery {
    pub asset_type: AssetType,
    pub album_type: AlbumType,
}

/// Caller-side save options
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SaveOptions {
    #[serde(rename = "type", default)]
    pub media_type: MediaType,
    /// Destination album; empty means the default location
    #[serde(default)]
    pub album: String,
}

impl SaveOptions {
    pub fn with_type(media_type: MediaType) -> Self {
        Self {
            media_type,
            ..Default::default()
        }
    }

    pub fn in_album(mut self, album: impl Into<String>) -> Self {
        self.album = album.into();
        self
    }
}

/// Save options as dispatched, with the media type already resolved
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NativeSaveOptions {
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub album: String,
}

/// Options for fetching a single asset by its internal id
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ConversionOptions {
    /// Write a temporary JPEG copy when the asset is HEIC
    #[serde(default)]
    pub convert_heic_images: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<f64>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ThumbnailSize {
    pub height: u32,
    pub width: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ThumbnailOptions {
    pub allow_network_access: bool,
    pub target_size: ThumbnailSize,
    pub quality: f64,
}
