//! Startup configuration
//!
//! Read once from an optional JSON file next to the working directory.
//! Every field has a default, so a partial file is fine and a missing file
//! means "all defaults".

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::config::{CONFIG_FILE, DEFAULT_LOG_LEVEL};
use crate::constants::dataset::DEFAULT_FILE;
use crate::constants::layout::{CHART_HEIGHT, MAX_CHART_HEIGHT, MIN_CHART_HEIGHT};
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// CSV loaded at startup
    pub dataset_path: PathBuf,
    pub dark_mode: bool,
    pub show_grid: bool,
    pub show_legend: bool,
    /// Height of each chart panel in points
    pub chart_height: f32,
    /// tracing filter directive, e.g. "info" or "pheno_plot=debug"
    pub log_level: String,
    /// Font with CJK glyphs for plant names and solar terms.
    /// `None` tries a few well-known system fonts.
    pub font_path: Option<PathBuf>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_FILE),
            dark_mode: false,
            show_grid: true,
            show_legend: true,
            chart_height: CHART_HEIGHT,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            font_path: None,
        }
    }
}

impl ViewerConfig {
    /// Parse a config file, failing on I/O or JSON errors
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: Self = serde_json::from_str(&contents)?;
        config.validate();
        Ok(config)
    }

    /// Load the config at `path`, falling back to defaults.
    ///
    /// Runs before logging is set up, so problems are returned as a warning
    /// for the caller to log once the subscriber exists.
    pub fn load_or_default(path: &Path) -> (Self, Option<String>) {
        if !path.exists() {
            return (Self::default(), None);
        }
        match Self::from_file(path) {
            Ok(config) => (config, None),
            Err(e) => (
                Self::default(),
                Some(format!("ignoring {}: {}", path.display(), e.user_message())),
            ),
        }
    }

    /// Config file in the working directory
    pub fn default_path() -> PathBuf {
        PathBuf::from(CONFIG_FILE)
    }

    /// Validate and fix any out-of-range values
    pub fn validate(&mut self) {
        if !self.chart_height.is_finite() {
            self.chart_height = CHART_HEIGHT;
        }
        self.chart_height = self.chart_height.clamp(MIN_CHART_HEIGHT, MAX_CHART_HEIGHT);
        if self.log_level.trim().is_empty() {
            self.log_level = DEFAULT_LOG_LEVEL.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let (config, warning) = ViewerConfig::load_or_default(&dir.path().join(CONFIG_FILE));
        assert_eq!(config, ViewerConfig::default());
        assert!(warning.is_none());
        assert_eq!(config.dataset_path, PathBuf::from("大肚山植調.csv"));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let file = write_config(r#"{ "dark_mode": true, "dataset_path": "data/obs.csv" }"#);
        let config = ViewerConfig::from_file(file.path()).unwrap();
        assert!(config.dark_mode);
        assert_eq!(config.dataset_path, PathBuf::from("data/obs.csv"));
        assert!(config.show_grid);
        assert_eq!(config.chart_height, CHART_HEIGHT);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.font_path, None);
    }

    #[test]
    fn test_malformed_file_falls_back_with_warning() {
        let file = write_config("{ not json");
        let (config, warning) = ViewerConfig::load_or_default(file.path());
        assert_eq!(config, ViewerConfig::default());
        assert!(warning.is_some_and(|w| w.contains("Config error")));
    }

    #[test]
    fn test_validate_clamps_height() {
        let file = write_config(r#"{ "chart_height": 5.0, "log_level": " " }"#);
        let config = ViewerConfig::from_file(file.path()).unwrap();
        assert_eq!(config.chart_height, MIN_CHART_HEIGHT);
        assert_eq!(config.log_level, "info");

        let mut config = ViewerConfig {
            chart_height: 1.0e6,
            ..Default::default()
        };
        config.validate();
        assert_eq!(config.chart_height, MAX_CHART_HEIGHT);
    }
}
