//! Title extraction.
//!
//! The candidate title is everything before the earliest technical tag (see
//! [`crate::patterns`]). The candidate is then scrubbed of the year, the
//! season/episode marker and leftover scene noise.

use super::casing::normalize_casing;
use super::episode::EpisodeMatch;
use crate::config::ParserConfig;
use crate::patterns::{compile, find_cutoff};
use regex::Regex;
use std::sync::LazyLock;

static SITE_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)^\s*(?:www\.[^\s.]+\.[a-z]{2,6}\b|(?:rarbg|yts|eztv|1337x|ettv|tgx)\b)")
});

static BROADCAST_TAGS: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\b(?:HDTV|SDTV|PDTV|UHD)\b"));

// REAL, RETAIL and DC are ordinary words unless shouted.
static EDITION_TAGS: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)\b(?:REPACK|PROPER|(?-i:REAL|RETAIL|DC)|EXTENDED|UNRATED|UNCUT|Theatrical|Directors?\.?Cut|IMAX|3D|Open\.?Matte)\b",
    )
});

static HDR_TAGS: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)\b(?:HDR10\+|(?:HDR10|HDR|Dolby\.?Vision|DV|HLG|SDR|10bit|8bit)\b)")
});

static AUDIO_TAGS: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)\b(?:Atmos|TrueHD|DTS-HD|DTS\.HD|(?-i:MA)|FLAC|OPUS)\b")
});

static PART_TAGS: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\b(?:Part\.?\d+|CD\d+|Disc\.?\d+)\b"));

static GROUP_TAGS: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\b(?:RARBG|YIFY|YTS|PSA|NOGRP)\b"));

static COMPLETE_TAGS: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)\b(?:Complete|Full[.\s]?Series|Season[.\s]?Pack)\b")
});

static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| compile(r"[._-]"));
static EMPTY_PAIRS: LazyLock<Regex> = LazyLock::new(|| compile(r"\(\s*\)|\[\s*\]"));
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| compile(r"\s+"));
static TRAILING_PUNCT: LazyLock<Regex> = LazyLock::new(|| compile(r"\s*[:\-.,;!?(\[]\s*$"));
static LEADING_PUNCT: LazyLock<Regex> = LazyLock::new(|| compile(r"^[:\-.,;!?]\s*"));
static TRAILING_ARTICLE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)\s+(?:The|A|An)$"));

/// Noise removed from the candidate title, in application order.
static NOISE: [&LazyLock<Regex>; 8] = [
    &SITE_PREFIX,
    &BROADCAST_TAGS,
    &EDITION_TAGS,
    &HDR_TAGS,
    &AUDIO_TAGS,
    &PART_TAGS,
    &GROUP_TAGS,
    &COMPLETE_TAGS,
];

/// The part of `cleaned` that precedes the first technical tag.
pub fn candidate(cleaned: &str) -> &str {
    match find_cutoff(cleaned) {
        Some(cutoff) => &cleaned[..cutoff.start],
        None => cleaned,
    }
}

/// Extract the display title from the cleaned release name.
///
/// Falls back to refining the whole cleaned string when the text before the
/// cutoff refines to nothing (names that start with a technical tag). When
/// the year or episode marker is all there is ("1984", "S01E01"), it is kept
/// as the title.
pub fn extract(
    cleaned: &str,
    year: Option<u16>,
    episode: Option<&EpisodeMatch>,
    config: &ParserConfig,
) -> String {
    let title = refine(candidate(cleaned), year, episode, config);
    if !title.is_empty() {
        return title;
    }

    let title = refine(cleaned, year, episode, config);
    if !title.is_empty() || (year.is_none() && episode.is_none()) {
        return title;
    }

    refine(cleaned, None, None, config)
}

/// Scrub extracted metadata and scene noise from a candidate title.
pub fn refine(
    candidate: &str,
    year: Option<u16>,
    episode: Option<&EpisodeMatch>,
    config: &ParserConfig,
) -> String {
    let mut title = candidate.to_string();

    if let Some(year) = year {
        title = replace_first_word(&title, &year.to_string());
    }
    if let Some(found) = episode {
        title = title.replacen(&found.raw, " ", 1);
    }

    for pattern in NOISE.iter() {
        title = pattern.replace_all(&title, " ").into_owned();
    }

    let title = SEPARATORS.replace_all(&title, " ");
    let title = EMPTY_PAIRS.replace_all(&title, " ");
    let title = WHITESPACE.replace_all(&title, " ");
    let title = TRAILING_PUNCT.replace(title.trim(), "");
    let title = LEADING_PUNCT.replace(&title, "");

    let title = if config.drop_trailing_article {
        TRAILING_ARTICLE.replace(&title, "").into_owned()
    } else {
        title.into_owned()
    };

    if config.normalize_casing {
        normalize_casing(&title)
    } else {
        title
    }
}

/// Replace the first occurrence of `word` that stands on word boundaries.
fn replace_first_word(text: &str, word: &str) -> String {
    let is_word = |c: char| c.is_alphanumeric() || c == '_';

    for (start, _) in text.match_indices(word) {
        let end = start + word.len();
        let left_ok = !text[..start].chars().next_back().is_some_and(is_word);
        let right_ok = !text[end..].chars().next().is_some_and(is_word);
        if left_ok && right_ok {
            return format!("{} {}", &text[..start], &text[end..]);
        }
    }

    text.to_string()
}
