//! Debrid listing records and the library entries built from them.

use crate::paths::{is_subtitle_file, is_video_file};
use crate::types::{CachedStatus, MediaType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A single file inside a debrid torrent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TorrentFile {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// One entry of the debrid torrent listing.
///
/// Only `id` and `name` are required; the listing endpoint omits or nulls
/// the rest depending on download state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TorrentRecord {
    pub id: u64,
    #[serde(default)]
    pub hash: Option<String>,
    pub name: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub progress: f64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub download_state: Option<String>,
    #[serde(default)]
    pub files: Option<Vec<TorrentFile>>,
}

/// Debrid-side data attached to a library entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebridData {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub files: Vec<TorrentFile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default)]
    pub progress: f64,
    pub name: String,
}

impl From<&TorrentRecord> for DebridData {
    fn from(record: &TorrentRecord) -> Self {
        Self {
            id: record.id,
            hash: record.hash.clone(),
            added_at: record.created_at,
            size: record.size,
            files: record.files.clone().unwrap_or_default(),
            status: record.download_state.clone(),
            progress: record.progress,
            name: record.name.clone(),
        }
    }
}

/// A library entry: catalog metadata (when resolved) plus debrid data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: String,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backdrop_url: Option<String>,
    #[serde(default)]
    pub cached_status: CachedStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debrid: Option<DebridData>,
}

impl MediaItem {
    /// Create a bare item with no metadata or debrid data.
    pub fn new(id: impl Into<String>, media_type: MediaType, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            media_type,
            title: title.into(),
            year: None,
            overview: None,
            poster_url: None,
            backdrop_url: None,
            cached_status: CachedStatus::Unknown,
            debrid: None,
        }
    }

    /// Build the fallback entry used when no catalog metadata resolves.
    pub fn from_torrent(record: &TorrentRecord) -> Self {
        Self {
            cached_status: CachedStatus::Cached,
            debrid: Some(DebridData::from(record)),
            ..Self::new(format!("torbox-{}", record.id), MediaType::Other, &record.name)
        }
    }

    /// Attach debrid data, marking the item cached.
    pub fn with_debrid(mut self, debrid: DebridData) -> Self {
        self.debrid = Some(debrid);
        self.cached_status = CachedStatus::Cached;
        self
    }

    /// The release name used for parsing: the debrid name, else the title.
    pub fn display_name(&self) -> &str {
        self.debrid
            .as_ref()
            .map(|d| d.name.as_str())
            .unwrap_or(&self.title)
    }

    /// When the item was added to the debrid account, if known.
    pub fn added_at(&self) -> Option<DateTime<Utc>> {
        self.debrid.as_ref().and_then(|d| d.added_at)
    }

    /// Debrid size in bytes, zero when unknown.
    pub fn size(&self) -> u64 {
        self.debrid.as_ref().map(|d| d.size).unwrap_or(0)
    }

    fn files(&self) -> &[TorrentFile] {
        self.debrid.as_ref().map(|d| d.files.as_slice()).unwrap_or(&[])
    }

    /// Number of files in the debrid payload.
    pub fn file_count(&self) -> usize {
        self.files().len()
    }

    /// Number of video files in the debrid payload.
    pub fn video_file_count(&self) -> usize {
        self.files()
            .iter()
            .filter(|f| is_video_file(Path::new(&f.name)))
            .count()
    }

    /// Number of subtitle files in the debrid payload.
    pub fn subtitle_file_count(&self) -> usize {
        self.files()
            .iter()
            .filter(|f| is_subtitle_file(Path::new(&f.name)))
            .count()
    }
}
