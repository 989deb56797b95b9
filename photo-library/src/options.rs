//! Closed tag sets shared with the native module.
//!
//! Every enum here serializes to the exact string tag the native side
//! expects, so the variants double as the caller-facing constant tables.

use serde::{Deserialize, Serialize};

/// Group-type filter for photo enumeration.
///
/// Only honoured by the iOS media store; Android ignores it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum GroupTypes {
    Album,
    All,
    Event,
    Faces,
    Library,
    SmartAlbum,
    PhotoStream,
    SavedPhotos,
}

impl GroupTypes {
    pub const ALL: [GroupTypes; 8] = [
        GroupTypes::Album,
        GroupTypes::All,
        GroupTypes::Event,
        GroupTypes::Faces,
        GroupTypes::Library,
        GroupTypes::SmartAlbum,
        GroupTypes::PhotoStream,
        GroupTypes::SavedPhotos,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GroupTypes::Album => "Album",
            GroupTypes::All => "All",
            GroupTypes::Event => "Event",
            GroupTypes::Faces => "Faces",
            GroupTypes::Library => "Library",
            GroupTypes::SmartAlbum => "SmartAlbum",
            GroupTypes::PhotoStream => "PhotoStream",
            GroupTypes::SavedPhotos => "SavedPhotos",
        }
    }
}

/// Asset-type filter used by enumeration and album listing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum AssetType {
    #[default]
    All,
    Videos,
    Photos,
}

impl AssetType {
    pub const ALL: [AssetType; 3] = [AssetType::All, AssetType::Videos, AssetType::Photos];

    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::All => "All",
            AssetType::Videos => "Videos",
            AssetType::Photos => "Photos",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum AlbumType {
    All,
    #[default]
    Album,
    SmartAlbum,
}

impl AlbumType {
    pub const ALL: [AlbumType; 3] = [AlbumType::All, AlbumType::Album, AlbumType::SmartAlbum];

    pub fn as_str(&self) -> &'static str {
        match self {
            AlbumType::All => "All",
            AlbumType::Album => "Album",
            AlbumType::SmartAlbum => "SmartAlbum",
        }
    }
}

/// Platform-specific album classification (iOS only)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AlbumSubType {
    AlbumRegular,
    AlbumSyncedEvent,
    AlbumSyncedFaces,
    AlbumSyncedAlbum,
    AlbumImported,
    AlbumMyPhotoStream,
    AlbumCloudShared,
    #[serde(other)]
    Unknown,
}

/// Media sub-type tags reported for an asset
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SubType {
    PhotoPanorama,
    #[serde(rename = "PhotoHDR")]
    PhotoHdr,
    PhotoScreenshot,
    PhotoLive,
    PhotoDepthEffect,
    VideoStreamed,
    VideoHighFrameRate,
    VideoTimelapse,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SourceType {
    UserLibrary,
    CloudShared,
    #[serde(other)]
    Unknown,
}

/// Opt-in enrichment fields for enumeration results.
///
/// Each one costs extra work on the native side, which is why none of them
/// are requested unless the caller asks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Include {
    Filename,
    FileSize,
    FileExtension,
    Location,
    ImageSize,
    PlayableDuration,
    Orientation,
    Albums,
    SourceType,
}

impl Include {
    pub const ALL: [Include; 9] = [
        Include::Filename,
        Include::FileSize,
        Include::FileExtension,
        Include::Location,
        Include::ImageSize,
        Include::PlayableDuration,
        Include::Orientation,
        Include::Albums,
        Include::SourceType,
    ];
}

/// Media type requested when saving into the library
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Photo,
    Video,
    /// Resolved from the source file extension before dispatch
    #[default]
    Auto,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Photo => "photo",
            MediaType::Video => "video",
            MediaType::Auto => "auto",
        }
    }
}
