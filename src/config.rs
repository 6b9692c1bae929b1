//! Configuration file support
//!
//! Loads settings from ~/.qfind.toml (or %USERPROFILE%\.qfind.toml on Windows)
//!
//! Example:
//! ```text
//! # qfind configuration
//! dataset = "/srv/exams/documents.json"
//! empty-query = "all"           # or "none"
//! choice-highlight = "live"     # or "committed"
//! scroll-top-threshold = 15
//! log-dir = "/tmp/qfind"
//! ```

use std::fs;
use std::io;
use std::path::PathBuf;

use serde::Deserialize;

use crate::error::Result;
use crate::filter::EmptyQuery;

/// Which search text highlights the choices of a result card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChoiceHighlight {
    /// The text currently in the query field
    #[default]
    Live,
    /// The term of the last executed search, same as the question text
    Committed,
}

/// Configuration settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Dataset path used when none is given on the command line
    pub dataset: Option<PathBuf>,
    /// What an empty query matches
    pub empty_query: EmptyQuery,
    /// Keyword source for choice highlighting
    pub choice_highlight: ChoiceHighlight,
    /// Rows scrolled before the scroll-to-top button shows
    pub scroll_top_threshold: usize,
    /// Directory for the log file
    pub log_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset: None,
            empty_query: EmptyQuery::All,
            choice_highlight: ChoiceHighlight::Live,
            scroll_top_threshold: 15,
            log_dir: None,
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".qfind.toml"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".qfind.toml"))
        }
    }

    /// Load configuration from file. A missing file gives the defaults.
    pub fn load() -> Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Config::default());
        };

        match fs::read_to_string(&path) {
            Ok(contents) => Self::parse(&contents),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Config::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Parse config file contents
    pub fn parse(contents: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(contents)?;
        config.scroll_top_threshold = config.scroll_top_threshold.clamp(1, 1000);
        Ok(config)
    }

    /// Directory the log file goes into
    pub fn log_dir(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(std::env::temp_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FinderError;

    #[test]
    fn test_parse_config() {
        let contents = r#"
# Comment
dataset = "/data/documents.json"
empty-query = "none"
choice-highlight = "committed"
scroll-top-threshold = 40
log-dir = "/var/log/qfind"
        "#;

        let config = Config::parse(contents).unwrap();
        assert_eq!(config.dataset, Some(PathBuf::from("/data/documents.json")));
        assert_eq!(config.empty_query, EmptyQuery::None);
        assert_eq!(config.choice_highlight, ChoiceHighlight::Committed);
        assert_eq!(config.scroll_top_threshold, 40);
        assert_eq!(config.log_dir(), PathBuf::from("/var/log/qfind"));
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = Config::parse("empty-query = \"none\"\n").unwrap();
        assert_eq!(config.empty_query, EmptyQuery::None);
        assert_eq!(config.choice_highlight, ChoiceHighlight::Live);
        assert_eq!(config.scroll_top_threshold, 15);
        assert_eq!(config.dataset, None);

        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_threshold_clamped() {
        let config = Config::parse("scroll-top-threshold = 0").unwrap();
        assert_eq!(config.scroll_top_threshold, 1);

        let config = Config::parse("scroll-top-threshold = 99999").unwrap();
        assert_eq!(config.scroll_top_threshold, 1000);
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(Config::parse("empty-query = \"some\""), Err(FinderError::Config(_))));
        assert!(matches!(Config::parse("scroll-top-threshold = -3"), Err(FinderError::Config(_))));
        assert!(matches!(Config::parse("this is not toml"), Err(FinderError::Config(_))));
    }
}
