mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

const DEFAULT_PATHS: [&str; 2] = ["./boxshelf.toml", "~/.config/boxshelf/config.toml"];

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    tracing::debug!("Loaded config from {:?}", path);
    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    for path_str in DEFAULT_PATHS {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            return load_config(path);
        }
    }

    tracing::debug!("No config file found, using defaults");
    Ok(Config::default())
}

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    let parser = &config.parser;
    if !parser.strip_extensions && !parser.normalize_casing && !parser.drop_trailing_article {
        tracing::warn!("All optional parser stages are disabled; titles will keep raw casing and extensions");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::SortBy;
    use std::io::Write;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.parser.normalize_casing);
        assert!(config.display.show_badges);
        assert_eq!(config.display.sort, SortBy::Added);
    }

    #[test]
    fn test_partial_sections() {
        let config: Config = toml::from_str(
            r#"
            [parser]
            normalize_casing = false

            [display]
            sort = "size"
            "#,
        )
        .unwrap();

        assert!(!config.parser.normalize_casing);
        assert!(config.parser.strip_extensions);
        assert!(config.display.show_badges);
        assert_eq!(config.display.sort, SortBy::Size);
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[display]\nshow_badges = false").unwrap();

        let config = load_config(file.path()).unwrap();
        assert!(!config.display.show_badges);
    }

    #[test]
    fn test_load_config_rejects_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[display]\nsort = \"sideways\"").unwrap();

        let err = load_config(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config(Path::new("/nonexistent/boxshelf.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_custom_path_takes_precedence() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[parser]\ndrop_trailing_article = false").unwrap();

        let config = load_config_or_default(Some(file.path())).unwrap();
        assert!(!config.parser.drop_trailing_article);
    }

    #[test]
    fn test_validate_all_stages_disabled_is_ok() {
        let mut config = Config::default();
        config.parser.strip_extensions = false;
        config.parser.normalize_casing = false;
        config.parser.drop_trailing_article = false;
        assert!(validate_config(&config).is_ok());
    }
}
