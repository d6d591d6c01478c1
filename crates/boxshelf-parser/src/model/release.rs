//! Parsed release structure.

use super::GroupKey;

/// Structured attributes recovered from a release name.
///
/// Every field is a best-effort guess. `title` is always populated unless the
/// input consisted of nothing but removable noise (brackets, tags, punctuation).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParsedRelease {
    /// Cleaned, title-cased human title.
    pub title: String,
    /// Release year in the plausible range 1920-2029.
    pub year: Option<u16>,
    /// Season number for episodic content.
    pub season: Option<u32>,
    /// Episode number for episodic content.
    pub episode: Option<u32>,
    /// Resolution token normalized to upper case ("1080P", "4K", "UHD").
    pub resolution: Option<String>,
    /// Source/encode tag with the casing found in the name ("BluRay", "WEB-DL").
    pub quality: Option<String>,
    /// Whether the name marks a complete season or series pack.
    pub is_complete: bool,
}

impl ParsedRelease {
    /// Returns true when a season or episode number was recognised.
    pub fn is_episodic(&self) -> bool {
        self.season.is_some() || self.episode.is_some()
    }

    /// Equivalence key used to cluster releases of the same content.
    pub fn group_key(&self) -> GroupKey {
        GroupKey::from_release(self)
    }
}
