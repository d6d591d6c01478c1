//! Grouping keys for clustering releases of the same title.

use super::ParsedRelease;
use std::fmt;

/// Normalized equivalence key derived from a [`ParsedRelease`].
///
/// The key is the title lowercased with every non-alphanumeric character
/// removed, suffixed with `-<year>` when a year is known, otherwise with
/// `-s<season>` when a season is known. Used only as a map key, never shown.
///
/// ```
/// use boxshelf_parser::{parse, GroupKey};
///
/// let a = parse("The.Thing.1982.1080p.BluRay.x264-GROUP");
/// let b = parse("The Thing (1982) 2160p UHD REMUX");
/// assert_eq!(a.group_key(), b.group_key());
/// assert_eq!(a.group_key().as_str(), "thething-1982");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct GroupKey(String);

impl GroupKey {
    /// Build the key for a parsed release.
    pub fn from_release(release: &ParsedRelease) -> Self {
        let base: String = release
            .title
            .chars()
            .flat_map(char::to_lowercase)
            .filter(|c| c.is_alphanumeric())
            .collect();

        let key = match (release.year, release.season) {
            (Some(year), _) => format!("{base}-{year}"),
            (None, Some(season)) => format!("{base}-s{season}"),
            (None, None) => base,
        };

        Self(key)
    }

    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the key, returning the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for GroupKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&ParsedRelease> for GroupKey {
    fn from(release: &ParsedRelease) -> Self {
        Self::from_release(release)
    }
}
