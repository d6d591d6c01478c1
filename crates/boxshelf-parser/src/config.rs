//! Parser configuration.

/// Configuration for the parser.
///
/// The defaults run every stage of the pipeline. Use the builder to switch
/// individual stages off:
///
/// ```
/// use boxshelf_parser::config::ParserConfig;
///
/// let config = ParserConfig::builder()
///     .normalize_casing(false)
///     .build();
/// assert!(config.strip_extensions);
/// assert!(!config.normalize_casing);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParserConfig {
    /// Strip a trailing media container extension (`.mkv`, `.mp4`, ...).
    /// Default: true
    pub strip_extensions: bool,

    /// Title-case the result and repair acronyms broken by title-casing.
    /// Default: true
    pub normalize_casing: bool,

    /// Drop a dangling `The`/`A`/`An` left at the end of the title.
    /// Default: true
    pub drop_trailing_article: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            strip_extensions: true,
            normalize_casing: true,
            drop_trailing_article: true,
        }
    }
}

impl ParserConfig {
    /// Create a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration builder.
    pub fn builder() -> ParserConfigBuilder {
        ParserConfigBuilder::default()
    }
}

/// Builder for `ParserConfig`.
#[derive(Debug, Clone, Default)]
pub struct ParserConfigBuilder {
    strip_extensions: Option<bool>,
    normalize_casing: Option<bool>,
    drop_trailing_article: Option<bool>,
}

impl ParserConfigBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to strip container file extensions.
    pub fn strip_extensions(mut self, enabled: bool) -> Self {
        self.strip_extensions = Some(enabled);
        self
    }

    /// Set whether to title-case the extracted title.
    ///
    /// When disabled the title keeps the casing found in the release name.
    pub fn normalize_casing(mut self, enabled: bool) -> Self {
        self.normalize_casing = Some(enabled);
        self
    }

    /// Set whether to drop a trailing article from the title.
    pub fn drop_trailing_article(mut self, enabled: bool) -> Self {
        self.drop_trailing_article = Some(enabled);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> ParserConfig {
        ParserConfig {
            strip_extensions: self.strip_extensions.unwrap_or(true),
            normalize_casing: self.normalize_casing.unwrap_or(true),
            drop_trailing_article: self.drop_trailing_article.unwrap_or(true),
        }
    }
}
