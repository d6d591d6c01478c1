//! Pre-extraction cleanup.
//!
//! Removes the parts of a release name that never carry title information:
//! the container extension, bracketed uploader tags and hashes, and
//! parenthesised encode descriptions.

use crate::config::ParserConfig;
use crate::patterns::compile;
use phf::phf_set;
use regex::Regex;
use std::sync::LazyLock;

static EXTENSIONS: phf::Set<&'static str> = phf_set! {
    "mkv", "mp4", "avi", "mov", "wmv", "flv", "webm", "iso", "img", "m2ts", "vob",
};

static BRACKETS: LazyLock<Regex> = LazyLock::new(|| compile(r"\[[^\]]+\]"));
static BRACES: LazyLock<Regex> = LazyLock::new(|| compile(r"\{[^}]+\}"));

// Only parentheses holding encode jargon; "(2021)" must survive for year extraction.
static TECHNICAL_PARENS: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)\([^)]*(?:HEVC|x265|x264|10bit|8bit|AAC|DTS|AC3|BluRay|WEBRip|HDR)[^)]*\)")
});

/// Run every cleanup stage enabled by `config`.
pub fn clean(name: &str, config: &ParserConfig) -> String {
    let name = if config.strip_extensions {
        strip_extension(name)
    } else {
        name
    };
    let without_brackets = strip_brackets(name);
    strip_technical_parens(&without_brackets)
}

/// Remove a trailing known media container extension.
pub fn strip_extension(name: &str) -> &str {
    match name.rsplit_once('.') {
        Some((stem, ext)) if EXTENSIONS.contains(ext.to_ascii_lowercase().as_str()) => stem,
        _ => name,
    }
}

/// Replace `[...]` and `{...}` spans with a space.
pub fn strip_brackets(text: &str) -> String {
    let text = BRACKETS.replace_all(text, " ");
    BRACES.replace_all(&text, " ").into_owned()
}

/// Replace parenthesised encode descriptions such as `(1080p x265 10bit)`.
pub fn strip_technical_parens(text: &str) -> String {
    TECHNICAL_PARENS.replace_all(text, " ").into_owned()
}
