//! Core type definitions for library entries.
//!
//! All enums serialize in lowercase/snake_case, matching the JSON the
//! debrid front-end exchanges.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of content a library entry represents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    /// A feature film.
    Movie,
    /// An episodic series.
    Show,
    /// Anime, series or film.
    Anime,
    /// Anything not matched against the metadata catalog.
    #[default]
    Other,
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Movie => write!(f, "movie"),
            Self::Show => write!(f, "show"),
            Self::Anime => write!(f, "anime"),
            Self::Other => write!(f, "other"),
        }
    }
}

impl FromStr for MediaType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "movie" | "movies" => Ok(Self::Movie),
            "show" | "shows" | "tv" | "series" => Ok(Self::Show),
            "anime" => Ok(Self::Anime),
            "other" => Ok(Self::Other),
            _ => Err(Error::invalid_input(format!("unknown media type: {s}"))),
        }
    }
}

/// Whether the debrid service already holds the content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CachedStatus {
    /// Available for immediate download.
    Cached,
    /// Must be fetched before it can be downloaded.
    NotCached,
    /// Currently being fetched.
    Processing,
    /// Not known.
    #[default]
    Unknown,
}

impl fmt::Display for CachedStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cached => write!(f, "cached"),
            Self::NotCached => write!(f, "not_cached"),
            Self::Processing => write!(f, "processing"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}
