//! Runtime configuration, read from an optional TOML file.
//!
//! ```toml
//! max_quarters = 5
//! initial_report = "initial.txt"
//! results_report = "results.txt"
//! color = true
//! ```
//!
//! Every key is optional.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use citywalk_paths::MAX_QUARTERS;
use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Most quarters an accepted route may pass.
    pub max_quarters: u32,
    /// Where the initial data report is written.
    pub initial_report: PathBuf,
    /// Where the search results are written.
    pub results_report: PathBuf,
    /// Color the map printed to the terminal.
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_quarters: MAX_QUARTERS,
            initial_report: PathBuf::from("initial.txt"),
            results_report: PathBuf::from("results.txt"),
            color: true,
        }
    }
}

impl Config {
    /// Parse a configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load the configuration at `path`, or the defaults when no path is
    /// given. A path that cannot be read is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {e}", path.display())))?;
        let config = Self::from_toml(&text)?;
        info!("loaded config from {}", path.display());
        Ok(config)
    }
}

/// Errors that can occur when loading a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Io(String),
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "cannot read config {msg}"),
            Self::Parse(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
        assert_eq!(Config::default().max_quarters, 5);
    }

    #[test]
    fn partial_override() {
        let c = Config::from_toml("max_quarters = 2\ncolor = false\n").unwrap();
        assert_eq!(c.max_quarters, 2);
        assert!(!c.color);
        assert_eq!(c.results_report, PathBuf::from("results.txt"));
    }

    #[test]
    fn unknown_key_rejected() {
        assert!(matches!(
            Config::from_toml("quarters = 3"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn load_none_and_missing() {
        assert_eq!(Config::load(None).unwrap(), Config::default());
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("citywalk.toml");
        assert!(matches!(
            Config::load(Some(missing.as_path())),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("citywalk.toml");
        fs::write(&path, "results_report = \"out/r.txt\"\n").unwrap();
        let c = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(c.results_report, PathBuf::from("out/r.txt"));
        assert_eq!(c.max_quarters, MAX_QUARTERS);
    }
}
