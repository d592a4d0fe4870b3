//! Widget configuration.
//!
//! The same structure is read from TOML by the CLI and passed as a plain
//! object from JavaScript when the widget is mounted.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    engine::SearchOptions,
    error::{Result, SearchError},
    teaser::TeaserOptions,
};

/// Main configuration structure for fragsearch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Location of the index resource.
    #[serde(default = "default_index_url")]
    pub index_url: String,

    /// Selector of the search text input.
    #[serde(default = "default_input_selector")]
    pub input_selector: String,

    /// Selector of the list receiving result items.
    #[serde(default = "default_list_selector")]
    pub list_selector: String,

    /// Selector of the container shown only when there are results.
    #[serde(default = "default_results_selector")]
    pub results_selector: String,

    /// Console log level in the browser (`error`, `warn`, `info`, `debug`, `trace`).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Matching settings.
    #[serde(default)]
    pub search: SearchOptions,

    /// Excerpt settings.
    #[serde(default)]
    pub teaser: TeaserOptions,
}

fn default_index_url() -> String {
    "/index.json".to_string()
}

fn default_input_selector() -> String {
    ".search-input".to_string()
}

fn default_list_selector() -> String {
    ".search-list".to_string()
}

fn default_results_selector() -> String {
    ".search-results".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            index_url: default_index_url(),
            input_selector: default_input_selector(),
            list_selector: default_list_selector(),
            results_selector: default_results_selector(),
            log_level: default_log_level(),
            search: SearchOptions::default(),
            teaser: TeaserOptions::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SearchError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            SearchError::config(format!("Failed to read {}: {e}", path.display()))
        })?;
        let config = Self::from_toml(&content)?;
        Ok(config)
    }

    /// Load configuration with `FRAGSEARCH__*` environment overrides.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path).required(false))
            .add_source(config::Environment::with_prefix("FRAGSEARCH").separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate TOML configuration.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.index_url.trim().is_empty() {
            return Err(SearchError::config("index_url cannot be empty"));
        }

        for (name, selector) in [
            ("input_selector", &self.input_selector),
            ("list_selector", &self.list_selector),
            ("results_selector", &self.results_selector),
        ] {
            if selector.trim().is_empty() {
                return Err(SearchError::config(format!("{name} cannot be empty")));
            }
        }

        if self.teaser.context_chars == 0 {
            tracing::warn!("teaser.context_chars is 0, excerpts will only contain the match");
        }

        self.search.validate()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::matches::FieldKey;

    fn create_test_config() -> String {
        r##"
index_url = "/search/index.json"
input_selector = "#q"
log_level = "debug"

[search]
keys = ["html"]
min_match_char_length = 4
case_sensitive = true
limit = 8

[teaser]
context_chars = 40
emphasis_open = "<mark>"
emphasis_close = "</mark>"
"##
        .to_string()
    }

    #[test]
    fn test_load_config() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("fragsearch.toml");
        let mut file = std::fs::File::create(&config_path).expect("create file");
        file.write_all(create_test_config().as_bytes())
            .expect("write");

        let config = Config::load(&config_path).expect("load config");

        assert_eq!(config.index_url, "/search/index.json");
        assert_eq!(config.input_selector, "#q");
        assert_eq!(config.list_selector, ".search-list");
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.search.keys, vec![FieldKey::Html]);
        assert_eq!(config.search.min_match_char_length, 4);
        assert!(config.search.case_sensitive);
        assert!(config.search.ignore_location);
        assert_eq!(config.search.limit, Some(8));
        assert_eq!(config.teaser.context_chars, 40);
        assert_eq!(config.teaser.emphasis_open, "<mark>");
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::from_toml("").expect("empty config");

        assert_eq!(config, Config::default());
        assert_eq!(config.index_url, "/index.json");
        assert_eq!(config.results_selector, ".search-results");
        assert_eq!(config.search.min_match_char_length, 3);
        assert_eq!(config.teaser.context_chars, 60);
    }

    #[test]
    fn test_config_rejects_unknown_search_key() {
        let err = Config::from_toml("[search]\nkeys = [\"title\", \"body\"]").unwrap_err();
        assert!(err.to_string().contains("unsupported field `body`"));
    }

    #[test]
    fn test_config_rejects_empty_index_url() {
        let err = Config::from_toml("index_url = \"\"").unwrap_err();
        assert!(err.to_string().contains("index_url cannot be empty"));
    }

    #[test]
    fn test_load_with_env_without_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config = Config::load_with_env(&dir.path().join("missing.toml")).expect("defaults");
        assert_eq!(config.index_url, "/index.json");
    }

    #[test]
    fn test_config_not_found() {
        let result = Config::load(Path::new("/nonexistent/fragsearch.toml"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not found"));
    }
}
