//! Integration tests for grouping a debrid listing.

use boxshelf::display::{format_file_size, group_heading};
use boxshelf::{group_items, group_items_with, LibraryQuery, SortBy};
use boxshelf_common::{MediaItem, MediaType, TorrentRecord};
use boxshelf_parser::{Parser, ParserConfig};
use std::path::PathBuf;

fn load_listing() -> Vec<MediaItem> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/listing.json");
    let content = std::fs::read_to_string(path).expect("Failed to read listing fixture");
    let records: Vec<TorrentRecord> =
        serde_json::from_str(&content).expect("Failed to parse listing fixture");
    records.iter().map(MediaItem::from_torrent).collect()
}

#[test]
fn test_listing_groups() {
    let groups = group_items(load_listing());

    let headings: Vec<String> = groups.iter().map(group_heading).collect();
    assert_eq!(
        headings,
        ["Dune Part Two (2024)", "Severance Season 2", "Heat (1995)"]
    );

    let dune = &groups[0];
    assert_eq!(dune.version_label(), "2 versions");
    assert_eq!(format_file_size(dune.total_size()), "30 GB");
    assert!(dune.items.iter().all(|i| i.media_type == MediaType::Other));
}

#[test]
fn test_group_order_ignores_input_order() {
    let mut items = load_listing();
    items.reverse();

    let groups = group_items(items);
    let keys: Vec<&str> = groups.iter().map(|g| g.key.as_str()).collect();
    assert_eq!(keys, ["duneparttwo-2024", "severance-s2", "heat-1995"]);
}

#[test]
fn test_query_then_group() {
    let items = LibraryQuery::new()
        .with_sort(SortBy::Size)
        .apply(load_listing());
    let groups = group_items(items);

    let dune_ids: Vec<&str> = groups[0].items.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(dune_ids, ["torbox-101", "torbox-102"]);
}

#[test]
fn test_video_file_count_from_listing() {
    let items = load_listing();
    assert_eq!(items[0].video_file_count(), 1);
    assert_eq!(items[2].video_file_count(), 0);
}

#[test]
fn test_grouping_is_deterministic() {
    let first = group_items(load_listing());
    let second = group_items(load_listing());
    assert_eq!(first, second);
}

#[test]
fn test_custom_parser_keeps_grouping_keys() {
    let parser = Parser::new(ParserConfig::builder().normalize_casing(false).build());
    let groups = group_items_with(&parser, load_listing());

    let keys: Vec<&str> = groups.iter().map(|g| g.key.as_str()).collect();
    assert_eq!(keys, ["duneparttwo-2024", "severance-s2", "heat-1995"]);
}
