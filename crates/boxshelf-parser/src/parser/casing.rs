//! Title casing.

use crate::patterns::compile;
use phf::phf_map;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Acronyms that naive title-casing turns into ordinary words.
static ACRONYMS: phf::Map<&'static str, &'static str> = phf_map! {
    "Us" => "US",
    "Uk" => "UK",
    "Dc" => "DC",
    "Hbo" => "HBO",
    "Tv" => "TV",
};

static ACRONYM_WORDS: LazyLock<Regex> = LazyLock::new(|| compile(r"\b(?:Us|Uk|Dc|Hbo|Tv)\b"));

/// Capitalize every word, then restore known acronyms.
///
/// Applying it twice gives the same result as applying it once.
///
/// ```
/// use boxshelf_parser::normalize_casing;
///
/// assert_eq!(normalize_casing("the office us"), "The Office US");
/// assert_eq!(normalize_casing("The Office US"), "The Office US");
/// ```
pub fn normalize_casing(text: &str) -> String {
    fix_acronyms(&title_case(text))
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_apostrophe(c: char) -> bool {
    c == '\'' || c == '\u{2019}'
}

/// Upper-case the first character of every word, leaving the rest untouched.
///
/// A letter directly after an in-word apostrophe ("don't") is not a word start.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev: Option<char> = None;
    let mut before_prev: Option<char> = None;

    for c in text.chars() {
        let word_start = is_word_char(c) && !prev.is_some_and(is_word_char);
        let after_contraction =
            prev.is_some_and(is_apostrophe) && before_prev.is_some_and(char::is_alphanumeric);

        if word_start && !after_contraction {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }

        before_prev = prev;
        prev = Some(c);
    }

    out
}

/// Replace title-cased acronyms (`Us`, `Uk`, `Dc`, `Hbo`, `Tv`) with upper case.
pub fn fix_acronyms(text: &str) -> String {
    ACRONYM_WORDS
        .replace_all(text, |caps: &Captures<'_>| {
            let word = &caps[0];
            ACRONYMS.get(word).copied().unwrap_or(word).to_string()
        })
        .into_owned()
}
