//! Configuration module for the lox CLI.
//!
//! Settings come from a `lox.toml` file. Every field is optional and
//! command-line flags take precedence over the file.

use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{DriverError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "lox.toml";

/// How `tokenize` prints tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `KIND lexeme literal` line per token.
    #[default]
    Text,
    /// A JSON array of token records.
    Json,
}

/// Application configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Log at debug level.
    #[serde(default)]
    pub verbose: bool,

    /// Token output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Token output settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Output format.
    #[serde(default)]
    pub format: OutputFormat,

    /// Print each token's byte span.
    #[serde(default)]
    pub show_spans: bool,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/lox`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DriverError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| DriverError::Config(format!("Failed to parse configuration: {}", e)))
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("lox").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("lox").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.verbose);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(!config.output.show_spans);
    }

    #[test]
    fn test_parse_full_config() {
        let config = Config::parse(
            "verbose = true\n\n[output]\nformat = \"json\"\nshow_spans = true\n",
        )
        .unwrap();
        assert!(config.verbose);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.show_spans);
    }

    #[test]
    fn test_parse_partial_config() {
        let config = Config::parse("[output]\nshow_spans = true\n").unwrap();
        assert!(!config.verbose);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.output.show_spans);
    }

    #[test]
    fn test_parse_empty_config() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_rejects_unknown_format() {
        let err = Config::parse("[output]\nformat = \"xml\"\n").unwrap_err();
        assert!(matches!(err, DriverError::Config(_)));
    }

    #[test]
    fn test_load_from_path() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&config_path, "verbose = true\n").unwrap();

        let config = Config::load_from_path(&config_path).unwrap();
        assert!(config.verbose);
    }

    #[test]
    fn test_load_from_nonexistent_path() {
        let result = Config::load_from_path(Path::new("/nonexistent/path/lox.toml"));
        assert!(matches!(result, Err(DriverError::Config(_))));
    }
}
