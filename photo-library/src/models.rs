use crate::options::{AlbumSubType, AlbumType, SourceType, SubType};
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A single photo or video as returned by the native media store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Asset {
    pub node: AssetNode,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssetNode {
    pub id: String,
    /// Coarse media tag, e.g. `image` or `video` (platform dependent)
    #[serde(rename = "type")]
    pub media_type: String,
    #[serde(default, deserialize_with = "one_or_many")]
    pub sub_types: Vec<SubType>,
    #[serde(default)]
    pub source_type: Option<SourceType>,
    #[serde(rename = "group_name", default)]
    pub group_name: Vec<String>,
    pub image: Image,
    /// Seconds since the epoch
    pub timestamp: f64,
    #[serde(default)]
    pub modification_timestamp: f64,
    #[serde(default)]
    pub location: Option<Location>,
}

/// File-level details; availability depends on platform and requested includes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub filepath: Option<String>,
    #[serde(default)]
    pub extension: Option<String>,
    pub uri: String,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub file_size: Option<u64>,
    #[serde(default)]
    pub playable_duration: Option<f64>,
    #[serde(default)]
    pub orientation: Option<i32>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Location {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub altitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
}

impl Asset {
    pub fn id(&self) -> &str {
        &self.node.id
    }

    pub fn uri(&self) -> &str {
        &self.node.image.uri
    }
}

impl AssetNode {
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        seconds_to_datetime(self.timestamp)
    }

    pub fn modified_at(&self) -> Option<DateTime<Utc>> {
        seconds_to_datetime(self.modification_timestamp)
    }

    pub fn is_video(&self) -> bool {
        self.media_type.starts_with("video")
    }
}

fn seconds_to_datetime(seconds: f64) -> Option<DateTime<Utc>> {
    if !seconds.is_finite() {
        return None;
    }
    DateTime::from_timestamp_millis((seconds * 1000.0).round() as i64)
}

// iOS reports a list of sub-types, older bridges a single tag
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<SubType>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(SubType),
        Many(Vec<SubType>),
        Missing(()),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(sub) => vec![sub],
        OneOrMany::Many(subs) => subs,
        OneOrMany::Missing(()) => Vec::new(),
    })
}

/// One page of enumeration results
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page {
    pub edges: Vec<Asset>,
    pub page_info: PageInfo,
    /// Set when the result was capped by a partial-library permission
    /// scope rather than by the page size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limited: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PageInfo {
    pub has_next_page: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_cursor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_cursor: Option<String>,
}

impl Page {
    pub fn is_limited(&self) -> bool {
        self.limited.unwrap_or(false)
    }

    /// True only when the native side reports the end of data and the
    /// result was not capped by a limited permission scope.
    pub fn is_complete(&self) -> bool {
        !self.page_info.has_next_page && !self.is_limited()
    }

    pub fn assets(&self) -> impl Iterator<Item = &Asset> {
        self.edges.iter()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Album {
    pub id: String,
    pub title: String,
    pub count: u64,
    #[serde(rename = "type")]
    pub album_type: AlbumType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtype: Option<AlbumSubType>,
}

/// Thumbnail rendering as returned by the native side
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Thumbnail {
    pub thumbnail_base64: String,
}

impl Thumbnail {
    /// Decode the base64 payload into raw image bytes
    pub fn decode(&self) -> Result<Vec<u8>, base64::DecodeError> {
        base64::engine::general_purpose::STANDARD.decode(self.thumbnail_base64.trim())
    }
}
