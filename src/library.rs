//! Filtering and sorting of the library listing.

use boxshelf_common::{MediaItem, MediaType};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Sort order for library entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Most recently added first.
    #[default]
    Added,
    /// Title, ascending, ignoring case.
    Title,
    /// Largest first.
    Size,
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Added => write!(f, "added"),
            Self::Title => write!(f, "title"),
            Self::Size => write!(f, "size"),
        }
    }
}

/// Type filter, title search and sort order applied to a listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibraryQuery {
    /// Keep only entries of this type.
    pub media_type: Option<MediaType>,
    /// Keep only entries whose title contains this text, ignoring case.
    pub search: Option<String>,
    pub sort: SortBy,
}

impl LibraryQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_media_type(mut self, media_type: MediaType) -> Self {
        self.media_type = Some(media_type);
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_sort(mut self, sort: SortBy) -> Self {
        self.sort = sort;
        self
    }

    /// Whether `item` passes the type filter and title search.
    pub fn matches(&self, item: &MediaItem) -> bool {
        if self.media_type.is_some_and(|t| t != item.media_type) {
            return false;
        }

        match self.search.as_deref().filter(|s| !s.is_empty()) {
            Some(search) => item.title.to_lowercase().contains(&search.to_lowercase()),
            None => true,
        }
    }

    /// Filter then sort `items`. The sort is stable.
    ///
    /// ```
    /// use boxshelf::library::{LibraryQuery, SortBy};
    /// use boxshelf_common::{MediaItem, MediaType};
    ///
    /// let items = vec![
    ///     MediaItem::new("1", MediaType::Movie, "heat"),
    ///     MediaItem::new("2", MediaType::Show, "Severance"),
    ///     MediaItem::new("3", MediaType::Movie, "Alien"),
    /// ];
    ///
    /// let movies = LibraryQuery::new()
    ///     .with_media_type(MediaType::Movie)
    ///     .with_sort(SortBy::Title)
    ///     .apply(items);
    /// let titles: Vec<_> = movies.iter().map(|i| i.title.as_str()).collect();
    /// assert_eq!(titles, ["Alien", "heat"]);
    /// ```
    pub fn apply(&self, items: Vec<MediaItem>) -> Vec<MediaItem> {
        let mut kept: Vec<MediaItem> = items.into_iter().filter(|i| self.matches(i)).collect();
        kept.sort_by(|a, b| compare(self.sort, a, b));
        kept
    }
}

fn compare(sort: SortBy, a: &MediaItem, b: &MediaItem) -> Ordering {
    match sort {
        SortBy::Added => b.added_at().cmp(&a.added_at()),
        SortBy::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        SortBy::Size => b.size().cmp(&a.size()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxshelf_common::TorrentRecord;
    use chrono::{TimeZone, Utc};

    fn torrent(id: u64, name: &str, size: u64, day: Option<u32>) -> MediaItem {
        let record = TorrentRecord {
            id,
            hash: None,
            name: name.to_string(),
            size,
            progress: 1.0,
            created_at: day.map(|d| Utc.with_ymd_and_hms(2024, 3, d, 0, 0, 0).unwrap()),
            updated_at: None,
            download_state: None,
            files: None,
        };
        MediaItem::from_torrent(&record)
    }

    fn ids(items: &[MediaItem]) -> Vec<&str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    fn sample() -> Vec<MediaItem> {
        vec![
            torrent(1, "Blade.Runner.1982.1080p", 300, Some(2)),
            torrent(2, "alien.1979.720p", 100, None),
            torrent(3, "Casablanca.1942.1080p", 200, Some(9)),
        ]
    }

    #[test]
    fn test_sort_added_newest_first() {
        let sorted = LibraryQuery::new().apply(sample());
        assert_eq!(ids(&sorted), ["torbox-3", "torbox-1", "torbox-2"]);
    }

    #[test]
    fn test_sort_title_ignores_case() {
        let sorted = LibraryQuery::new().with_sort(SortBy::Title).apply(sample());
        assert_eq!(ids(&sorted), ["torbox-2", "torbox-1", "torbox-3"]);
    }

    #[test]
    fn test_sort_size_largest_first() {
        let sorted = LibraryQuery::new().with_sort(SortBy::Size).apply(sample());
        assert_eq!(ids(&sorted), ["torbox-1", "torbox-3", "torbox-2"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let found = LibraryQuery::new().with_search("RUNNER").apply(sample());
        assert_eq!(ids(&found), ["torbox-1"]);

        let all = LibraryQuery::new().with_search("").apply(sample());
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_type_filter() {
        let mut items = sample();
        items.push(MediaItem::new("tmdb-1", MediaType::Movie, "Alien"));

        let movies = LibraryQuery::new().with_media_type(MediaType::Movie).apply(items.clone());
        assert_eq!(ids(&movies), ["tmdb-1"]);

        let other = LibraryQuery::new().with_media_type(MediaType::Other).apply(items);
        assert_eq!(other.len(), 3);
    }

    #[test]
    fn test_sort_by_serde_and_display() {
        let parsed: SortBy = serde_json::from_str("\"size\"").unwrap();
        assert_eq!(parsed, SortBy::Size);
        assert_eq!(SortBy::default().to_string(), "added");
    }
}
