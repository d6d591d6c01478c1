//! Release year extraction.

use crate::patterns::compile;
use regex::Regex;
use std::sync::LazyLock;

static YEAR: LazyLock<Regex> = LazyLock::new(|| compile(r"\b(?:19[2-9]\d|20[0-2]\d)\b"));

const UNIT_SUFFIXES: [&str; 3] = ["bit", "p", "fps"];

/// Extract the first plausible year (1920-2029).
///
/// A number immediately followed by `bit`, `p` or `fps` is a bit depth,
/// resolution or frame rate and is skipped.
pub fn extract(text: &str) -> Option<u16> {
    YEAR.find_iter(text)
        .find(|m| !has_unit_suffix(&text[m.end()..]))
        .and_then(|m| m.as_str().parse().ok())
}

fn has_unit_suffix(rest: &str) -> bool {
    UNIT_SUFFIXES.iter().any(|suffix| {
        rest.get(..suffix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(suffix))
    })
}
