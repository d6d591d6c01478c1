//! Text helpers for rendering groups and releases.

use crate::grouping::MediaGroup;
use boxshelf_common::MediaItem;
use boxshelf_parser::ParsedRelease;
use chrono::{DateTime, Utc};

const SIZE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Format a byte count with 1024-based units, at most two decimals.
///
/// ```
/// use boxshelf::display::format_file_size;
///
/// assert_eq!(format_file_size(0), "0 B");
/// assert_eq!(format_file_size(1536), "1.5 KB");
/// assert_eq!(format_file_size(1024 * 1024 * 1024), "1 GB");
/// ```
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = (value * 100.0).round() / 100.0;
    format!("{rounded} {}", SIZE_UNITS[unit])
}

/// Resolution and source joined for a release badge, e.g. `1080P • BluRay`.
pub fn quality_badge(release: &ParsedRelease) -> Option<String> {
    let parts: Vec<&str> = [release.resolution.as_deref(), release.quality.as_deref()]
        .into_iter()
        .flatten()
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" • "))
    }
}

/// Heading for a group: `Title (Year) Season N`, omitting absent parts.
pub fn group_heading(group: &MediaGroup) -> String {
    let mut heading = group.title.clone();
    if let Some(year) = group.year {
        heading.push_str(&format!(" ({year})"));
    }
    if let Some(season) = group.season {
        heading.push_str(&format!(" Season {season}"));
    }
    heading
}

/// Calendar date an entry was added, or `unknown`.
pub fn format_added(added: Option<DateTime<Utc>>) -> String {
    added
        .map(|at| at.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// File count of an entry, e.g. `3 files (1 video, 1 subtitle)`.
///
/// `None` when the debrid payload lists no files.
pub fn file_summary(item: &MediaItem) -> Option<String> {
    let total = item.file_count();
    if total == 0 {
        return None;
    }

    let mut summary = match total {
        1 => "1 file".to_string(),
        n => format!("{n} files"),
    };

    let kinds: Vec<String> = [
        (item.video_file_count(), "video"),
        (item.subtitle_file_count(), "subtitle"),
    ]
    .into_iter()
    .filter(|(count, _)| *count > 0)
    .map(|(count, kind)| format!("{count} {kind}"))
    .collect();

    if !kinds.is_empty() {
        summary.push_str(&format!(" ({})", kinds.join(", ")));
    }
    Some(summary)
}
