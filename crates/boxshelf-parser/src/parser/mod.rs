//! Staged release-name parser.
//!
//! Each stage reads the cleaned name independently; only the title stage
//! consumes the results of the others.

mod casing;
mod clean;
mod episode;
mod quality;
mod title;
mod year;

pub use casing::normalize_casing;

use crate::config::ParserConfig;
use crate::model::ParsedRelease;

/// Parse a release name into structured metadata with custom configuration.
///
/// Total over all inputs: garbage in yields a poor title, never a panic.
pub fn parse_with_config(input: &str, config: &ParserConfig) -> ParsedRelease {
    let cleaned = clean::clean(input, config);

    let is_complete = quality::is_complete(&cleaned);
    let year = year::extract(&cleaned);
    let episode = episode::extract(&cleaned);
    let resolution = quality::extract_resolution(&cleaned);
    let quality = quality::extract_quality(&cleaned);
    let title = title::extract(&cleaned, year, episode.as_ref(), config);

    ParsedRelease {
        title,
        year,
        season: episode.as_ref().and_then(|e| e.season),
        episode: episode.as_ref().and_then(|e| e.episode),
        resolution,
        quality,
        is_complete,
    }
}
