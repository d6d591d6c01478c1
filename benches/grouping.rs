//! Benchmarks for library grouping.
//!
//! Run with: cargo bench --bench grouping

use boxshelf::{group_items, LibraryQuery, SortBy};
use boxshelf_common::{MediaItem, TorrentRecord};
use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const NAMES: &[&str] = &[
    "The.Matrix.1999.1080p.BluRay.x264-GROUP",
    "The.Matrix.1999.2160p.UHD.BluRay.x265.HDR-RELEASE",
    "Breaking.Bad.S01E01.720p.BluRay.x264-DEMAND",
    "Breaking.Bad.S01E02.720p.BluRay.x264-DEMAND",
    "Breaking.Bad.S02E01.1080p.WEB-DL.DD5.1.H.264",
    "[SubsPlease] Frieren - 12x05 (1080p) [ABCD1234].mkv",
    "Dune.Part.Two.2024.2160p.WEB-DL.DDP5.1.Atmos.DV.HDR.H.265-FLUX",
    "Severance.S01.COMPLETE.2160p.ATVP.WEB-DL.DDP5.1.H.265",
];

fn library(size: usize) -> Vec<MediaItem> {
    (0..size)
        .map(|i| {
            let record = TorrentRecord {
                id: i as u64,
                hash: None,
                name: NAMES[i % NAMES.len()].to_string(),
                size: (i as u64 + 1) * 1_000_000,
                progress: 1.0,
                created_at: Utc.timestamp_opt(1_700_000_000 + i as i64 * 60, 0).single(),
                updated_at: None,
                download_state: None,
                files: None,
            };
            MediaItem::from_torrent(&record)
        })
        .collect()
}

fn bench_group_items(c: &mut Criterion) {
    let mut group = c.benchmark_group("group_items");

    for size in [10, 100, 1000] {
        let items = library(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &items, |b, items| {
            b.iter(|| group_items(black_box(items.clone())))
        });
    }

    group.finish();
}

fn bench_query(c: &mut Criterion) {
    let items = library(1000);
    let mut group = c.benchmark_group("library_query");

    for sort in [SortBy::Added, SortBy::Title, SortBy::Size] {
        let query = LibraryQuery::new().with_search("the").with_sort(sort);
        group.bench_with_input(BenchmarkId::from_parameter(sort), &items, |b, items| {
            b.iter(|| query.apply(black_box(items.clone())))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_group_items, bench_query);
criterion_main!(benches);
