//! # boxshelf-parser
//!
//! Heuristic parser for torrent, usenet and web-download release names.
//!
//! Release names follow informal scene conventions: a title, an optional
//! year or season/episode marker, then a run of technical tags. This crate
//! recovers the title and the handful of attributes needed to display and
//! group a download library, and derives a [`GroupKey`] that clusters
//! different releases of the same content.
//!
//! ## Quick Start
//!
//! ```
//! use boxshelf_parser::parse;
//!
//! let result = parse("The.Girlfriend.2021.1080p.10bit.DS4K.NF.WEBRip.Hindi-Telugu.DDP5.1.x265.HEVC-Ospreay");
//!
//! assert_eq!(result.title, "The Girlfriend");
//! assert_eq!(result.year, Some(2021));
//! assert_eq!(result.resolution.as_deref(), Some("1080P"));
//! ```
//!
//! ## Grouping
//!
//! ```
//! use boxshelf_parser::parse;
//!
//! let pilot = parse("Severance.S01E01.1080p.WEB-DL");
//! let finale = parse("Severance.S01E09.2160p.WEB-DL");
//! assert_eq!(pilot.group_key(), finale.group_key());
//! ```

pub mod config;
pub mod model;
pub mod patterns;

mod parser;

pub use config::ParserConfig;
pub use model::{GroupKey, ParsedRelease};
pub use parser::normalize_casing;

/// Parse a release name using default settings.
///
/// # Examples
///
/// ```
/// use boxshelf_parser::parse;
///
/// let result = parse("Movie (2021) 1080p BluRay x264");
/// assert_eq!(result.title, "Movie");
/// assert_eq!(result.year, Some(2021));
/// assert_eq!(result.quality.as_deref(), Some("BluRay"));
/// ```
pub fn parse(input: &str) -> ParsedRelease {
    Parser::default().parse(input)
}

/// Compute the grouping key of a parsed release.
pub fn group_key(release: &ParsedRelease) -> GroupKey {
    GroupKey::from_release(release)
}

/// A configurable release name parser.
///
/// ```
/// use boxshelf_parser::{Parser, ParserConfig};
///
/// let parser = Parser::new(ParserConfig::builder().normalize_casing(false).build());
/// assert_eq!(parser.parse("the.office.us.S01E01.720p").title, "the office us");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with the given configuration.
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// The configuration this parser runs with.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse a release name into structured metadata.
    pub fn parse(&self, input: &str) -> ParsedRelease {
        parser::parse_with_config(input, &self.config)
    }
}
