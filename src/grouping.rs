//! Grouping of library entries into per-title release clusters.
//!
//! Every entry's release name is parsed and keyed with [`GroupKey`]; entries
//! sharing a key become the "versions" of one [`MediaGroup`]. Groups are
//! rebuilt from scratch for every snapshot of the library.

use boxshelf_common::{MediaItem, MediaType};
use boxshelf_parser::{GroupKey, ParsedRelease, Parser};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;

/// A cluster of library entries believed to be the same title.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediaGroup {
    pub key: GroupKey,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<u32>,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
    pub items: Vec<MediaItem>,
}

impl MediaGroup {
    /// Seed a group from the first entry that maps to `key`.
    fn seed(key: GroupKey, parsed: &ParsedRelease, item: &MediaItem) -> Self {
        let title = if parsed.title.is_empty() {
            item.title.clone()
        } else {
            parsed.title.clone()
        };

        Self {
            key,
            title,
            year: parsed.year.or(item.year),
            season: parsed.season,
            media_type: item.media_type,
            poster_url: None,
            items: Vec::new(),
        }
    }

    fn push(&mut self, item: MediaItem) {
        if self.poster_url.is_none() {
            self.poster_url = item.poster_url.clone().filter(|url| !url.is_empty());
        }
        self.items.push(item);
    }

    /// Most recent `added_at` among the members.
    pub fn latest_added(&self) -> Option<DateTime<Utc>> {
        self.items.iter().filter_map(MediaItem::added_at).max()
    }

    /// Combined debrid size of all members in bytes.
    pub fn total_size(&self) -> u64 {
        self.items.iter().map(MediaItem::size).sum()
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the group has no members.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Human label for the member count ("1 version", "3 versions").
    pub fn version_label(&self) -> String {
        match self.items.len() {
            1 => "1 version".to_string(),
            n => format!("{n} versions"),
        }
    }
}

/// Group items with the default parser.
///
/// ```
/// use boxshelf::grouping::group_items;
/// use boxshelf_common::{MediaItem, MediaType};
///
/// let items = vec![
///     MediaItem::new("a", MediaType::Other, "Severance.S01E01.1080p.WEB-DL"),
///     MediaItem::new("b", MediaType::Other, "Severance.S01E02.2160p.WEB-DL"),
///     MediaItem::new("c", MediaType::Other, "Severance.S02E01.1080p.WEB-DL"),
/// ];
///
/// let groups = group_items(items);
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[0].version_label(), "2 versions");
/// ```
pub fn group_items<I>(items: I) -> Vec<MediaGroup>
where
    I: IntoIterator<Item = MediaItem>,
{
    group_items_with(&Parser::default(), items)
}

/// Group items using `parser` to read each entry's release name.
///
/// Groups keep first-encounter order until the final sort, which orders them
/// newest first by their latest member. Groups with no timestamps sort last;
/// the sort is stable so ties keep encounter order.
pub fn group_items_with<I>(parser: &Parser, items: I) -> Vec<MediaGroup>
where
    I: IntoIterator<Item = MediaItem>,
{
    let mut item_count = 0usize;

    let (mut groups, _) = items.into_iter().fold(
        (Vec::<MediaGroup>::new(), HashMap::<GroupKey, usize>::new()),
        |(mut groups, mut index), item| {
            item_count += 1;
            let parsed = parser.parse(item.display_name());
            let key = parsed.group_key();

            let slot = match index.get(&key) {
                Some(&slot) => slot,
                None => {
                    index.insert(key.clone(), groups.len());
                    groups.push(MediaGroup::seed(key, &parsed, &item));
                    groups.len() - 1
                }
            };
            groups[slot].push(item);

            (groups, index)
        },
    );

    groups.sort_by(|a, b| b.latest_added().cmp(&a.latest_added()));

    tracing::debug!(items = item_count, groups = groups.len(), "Grouped library items");

    groups
}
