//! Season and episode extraction.
//!
//! Patterns are tried in a fixed order and the first one that matches
//! anywhere in the name decides both numbers.

use crate::patterns::compile;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static SEASON_EPISODE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)S(\d{1,2})\s*E(\d{1,3})"));

// Word boundaries keep frame sizes like 1920x1080 out.
static CROSS: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)\b(\d{1,2})x(\d{1,3})\b"));

static VERBOSE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)Season\s*(\d{1,4}).*?Episode\s*(\d{1,4})"));

static EPISODE_ONLY: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)\bEp?\.?\s*(\d{1,3})\b"));

/// Season/episode numbers and the text they were read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeMatch {
    /// Season number; absent for episode-only markers.
    pub season: Option<u32>,
    /// Episode number.
    pub episode: Option<u32>,
    /// Matched text, removed from the title later.
    pub raw: String,
}

#[derive(Debug, Clone, Copy)]
enum EpisodePattern {
    SeasonEpisode,
    Cross,
    Verbose,
    EpisodeOnly,
}

impl EpisodePattern {
    // Pattern priority wins over position: a later SxxEyy beats an earlier NxM.
    const ORDERED: [EpisodePattern; 4] = [
        EpisodePattern::SeasonEpisode,
        EpisodePattern::Cross,
        EpisodePattern::Verbose,
        EpisodePattern::EpisodeOnly,
    ];

    fn regex(self) -> &'static Regex {
        match self {
            EpisodePattern::SeasonEpisode => &SEASON_EPISODE,
            EpisodePattern::Cross => &CROSS,
            EpisodePattern::Verbose => &VERBOSE,
            EpisodePattern::EpisodeOnly => &EPISODE_ONLY,
        }
    }

    fn read(self, caps: &Captures<'_>) -> EpisodeMatch {
        let number = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u32>().ok());
        let (season, episode) = match self {
            EpisodePattern::EpisodeOnly => (None, number(1)),
            _ => (number(1), number(2)),
        };
        EpisodeMatch {
            season,
            episode,
            raw: caps[0].to_string(),
        }
    }
}

/// Extract season and episode numbers.
///
/// Returns `None` when no pattern matches; both numbers are then absent
/// rather than zero.
pub fn extract(text: &str) -> Option<EpisodeMatch> {
    EpisodePattern::ORDERED
        .iter()
        .find_map(|pattern| pattern.regex().captures(text).map(|caps| pattern.read(&caps)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(text: &str) -> (Option<u32>, Option<u32>) {
        extract(text)
            .map(|m| (m.season, m.episode))
            .unwrap_or((None, None))
    }

    #[test]
    fn test_season_episode() {
        assert_eq!(numbers("Show.S02E05.720p"), (Some(2), Some(5)));
        assert_eq!(numbers("Show s1e101"), (Some(1), Some(101)));
        assert_eq!(numbers("Show S03 E07"), (Some(3), Some(7)));
    }

    #[test]
    fn test_pattern_priority_beats_position() {
        assert_eq!(numbers("Show 1x02 S03E04"), (Some(3), Some(4)));
    }

    #[test]
    fn test_cross_format() {
        assert_eq!(numbers("Show 2x05"), (Some(2), Some(5)));
        assert_eq!(numbers("Anime 12x05"), (Some(12), Some(5)));
    }

    #[test]
    fn test_frame_size_is_not_an_episode() {
        assert_eq!(numbers("Movie 1920x1080"), (None, None));
    }

    #[test]
    fn test_verbose_format() {
        assert_eq!(numbers("Show Season 3 Episode 12"), (Some(3), Some(12)));
        assert_eq!(numbers("Show Season 1 - Pilot Episode 1"), (Some(1), Some(1)));
    }

    #[test]
    fn test_episode_only() {
        assert_eq!(numbers("Anime E07"), (None, Some(7)));
        assert_eq!(numbers("Anime Ep.12"), (None, Some(12)));
        assert_eq!(numbers("Anime ep 3"), (None, Some(3)));
    }

    #[test]
    fn test_patterns_tried_in_order() {
        // The cross pattern appears first in the text, but S01E02 has priority.
        let found = extract("Show 3x04 S01E02").unwrap();
        assert_eq!((found.season, found.episode), (Some(1), Some(2)));
        assert_eq!(found.raw, "S01E02");
    }

    #[test]
    fn test_no_match_leaves_both_absent() {
        assert!(extract("The.Matrix.1999.1080p.BluRay.x264").is_none());
        assert!(extract("").is_none());
    }

    #[test]
    fn test_raw_text() {
        assert_eq!(extract("Show.S01E01.720p").unwrap().raw, "S01E01");
    }
}
