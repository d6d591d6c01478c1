//! Resolution, source and completeness detection.

use crate::patterns::compile;
use regex::Regex;
use std::sync::LazyLock;

static RESOLUTION: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)\b(2160p|1080p|720p|576p|480p|360p|4K|8K|UHD|FHD|HD)\b")
});

static QUALITY: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)\b(BluRay|BRRip|BDRip|WEBRip|WEB-DL|HDTV|DVDRip|REMUX|Hybrid|CAM|TS|TC)\b")
});

static COMPLETE: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)\b(?:Complete|Full\s*Series|Season\s*Pack|S\d+\s*Complete)\b")
});

/// First resolution token, upper-cased.
pub fn extract_resolution(text: &str) -> Option<String> {
    RESOLUTION
        .captures(text)
        .map(|caps| caps[1].to_uppercase())
}

/// First source/quality token with its original casing.
pub fn extract_quality(text: &str) -> Option<String> {
    QUALITY.captures(text).map(|caps| caps[1].to_string())
}

/// Whether the name advertises a complete season or series pack.
pub fn is_complete(text: &str) -> bool {
    COMPLETE.is_match(text)
}
