//! Title cutoff vocabulary.
//!
//! A release name is "title, then technical tags". The title ends where the
//! earliest technical tag begins. Each [`CutoffCategory`] owns one vocabulary;
//! categories are listed in priority order, which only matters when two
//! categories match at the same byte offset.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

pub(crate) fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in pattern must compile")
}

static RESOLUTION: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)\b(?:2160p|1080p|720p|576p|480p|360p|4K|8K|UHD|FHD|HD)\b")
});

static SOURCE: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)\b(?:BluRay|BRRip|BDRip|WEBRip|WEB-DL|HDTV|DVDRip|REMUX|Hybrid)\b")
});

static CODEC: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\b(?:x264|x265|HEVC|H\.?264|H\.?265|AVC|VC-1|XviD)\b"));

static BIT_DEPTH_HDR: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\b(?:10bit|8bit|HDR10|HDR|Dolby\.?Vision|DV)\b"));

static DS4K: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)\bDS4K\b"));

// Upper case only: "MAX" and "NF" are ordinary words in titles.
static STREAMING_SERVICE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"\b(?:AMZN|NF|HULU|DSNP|ATVP|HBO|MAX|PCOK|PMTP)\b"));

static LANGUAGE: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)\b(?:MULTI|DUAL|Dual\.Audio|Hindi|Telugu|Tamil|Korean|Japanese|Chinese)\b")
});

/// A family of technical tags that marks the end of the title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CutoffCategory {
    /// `2160p`, `1080p`, `4K`, `UHD`, `HD`, ...
    Resolution,
    /// `BluRay`, `WEB-DL`, `HDTV`, `REMUX`, ...
    Source,
    /// `x264`, `HEVC`, `H.265`, `XviD`, ...
    Codec,
    /// `10bit`, `HDR10`, `Dolby.Vision`, `DV`, ...
    BitDepthHdr,
    /// The `DS4K` downscale marker.
    Ds4k,
    /// `AMZN`, `NF`, `DSNP`, `HBO`, ...
    StreamingService,
    /// `MULTI`, `Dual.Audio`, `Hindi`, `Japanese`, ...
    Language,
}

impl CutoffCategory {
    /// All categories in priority order.
    pub const ALL: [CutoffCategory; 7] = [
        CutoffCategory::Resolution,
        CutoffCategory::Source,
        CutoffCategory::Codec,
        CutoffCategory::BitDepthHdr,
        CutoffCategory::Ds4k,
        CutoffCategory::StreamingService,
        CutoffCategory::Language,
    ];

    fn pattern(self) -> &'static Regex {
        match self {
            CutoffCategory::Resolution => &RESOLUTION,
            CutoffCategory::Source => &SOURCE,
            CutoffCategory::Codec => &CODEC,
            CutoffCategory::BitDepthHdr => &BIT_DEPTH_HDR,
            CutoffCategory::Ds4k => &DS4K,
            CutoffCategory::StreamingService => &STREAMING_SERVICE,
            CutoffCategory::Language => &LANGUAGE,
        }
    }

    /// Find the first tag of this category in `text`.
    pub fn find(self, text: &str) -> Option<Cutoff> {
        self.pattern().find(text).map(|m| Cutoff {
            category: self,
            start: m.start(),
            end: m.end(),
        })
    }
}

impl fmt::Display for CutoffCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CutoffCategory::Resolution => write!(f, "resolution"),
            CutoffCategory::Source => write!(f, "source"),
            CutoffCategory::Codec => write!(f, "codec"),
            CutoffCategory::BitDepthHdr => write!(f, "bit-depth/hdr"),
            CutoffCategory::Ds4k => write!(f, "ds4k"),
            CutoffCategory::StreamingService => write!(f, "streaming-service"),
            CutoffCategory::Language => write!(f, "language"),
        }
    }
}

/// Location of the tag where the title ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cutoff {
    /// Category whose vocabulary matched.
    pub category: CutoffCategory,
    /// Byte offset of the start of the tag.
    pub start: usize,
    /// Byte offset just past the end of the tag.
    pub end: usize,
}

/// Find the earliest technical tag in `text` across all categories.
///
/// ```
/// use boxshelf_parser::patterns::{find_cutoff, CutoffCategory};
///
/// let cutoff = find_cutoff("Heat.1995.1080p.BluRay.x264").unwrap();
/// assert_eq!(cutoff.category, CutoffCategory::Resolution);
/// assert_eq!(cutoff.start, 10);
/// assert!(find_cutoff("Just A Title").is_none());
/// ```
pub fn find_cutoff(text: &str) -> Option<Cutoff> {
    let mut earliest: Option<Cutoff> = None;
    for category in CutoffCategory::ALL {
        if let Some(found) = category.find(text) {
            // Strictly-less keeps the higher-priority category on ties.
            if earliest.map_or(true, |e| found.start < e.start) {
                earliest = Some(found);
            }
        }
    }
    earliest
}
