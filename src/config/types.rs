use crate::library::SortBy;
use boxshelf_parser::ParserConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Release parser stages
    #[serde(default)]
    pub parser: ParserConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// Show resolution/source badges next to each version
    #[serde(default = "default_true")]
    pub show_badges: bool,

    /// Default sort order when none is given on the command line
    #[serde(default)]
    pub sort: SortBy,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_badges: true,
            sort: SortBy::default(),
        }
    }
}

fn default_true() -> bool {
    true
}
