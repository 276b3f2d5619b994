//! Configuration file handling
//!
//! The file-loadable subset of harness settings. Reporters and observers are
//! code-level concerns and are configured on the `Harness` directly.

use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

use super::{Error, Result};

/// Main configuration structure
#[derive(Debug, Deserialize, Default)]
pub struct HarnessConfig {
    /// Run behavior settings
    #[serde(default)]
    pub run: RunConfig,

    /// Tag filter; when the section is absent every case runs
    #[serde(default)]
    pub filter: Option<FilterConfig>,
}

/// Run behavior settings
#[derive(Debug, Deserialize, Default)]
pub struct RunConfig {
    /// Delay in milliseconds before the first suite starts
    #[serde(default)]
    pub start_delay_ms: Option<u64>,

    /// Deprecated: `false` skips report construction and delivery entirely
    #[serde(default)]
    pub send_report: Option<bool>,
}

/// Tag filter settings
#[derive(Debug, Deserialize)]
pub struct FilterConfig {
    /// Tags whose cases should run; an empty list runs zero cases
    #[serde(default)]
    pub tags: Vec<String>,
}

impl HarnessConfig {
    /// Load configuration from a TOML file
    ///
    /// Returns default configuration if the file doesn't exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| Error::FileRead {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        content.parse()
    }
}

impl FromStr for HarnessConfig {
    type Err = Error;

    fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::ConfigParse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: HarnessConfig = "".parse().unwrap();
        assert_eq!(config.run.start_delay_ms, None);
        assert_eq!(config.run.send_report, None);
        assert!(config.filter.is_none());
    }

    #[test]
    fn test_full_config_parses() {
        let config: HarnessConfig = r#"
[run]
start_delay_ms = 200
send_report = false

[filter]
tags = ["smoke", "render"]
"#
        .parse()
        .unwrap();

        assert_eq!(config.run.start_delay_ms, Some(200));
        assert_eq!(config.run.send_report, Some(false));
        let filter = config.filter.expect("filter section");
        assert_eq!(filter.tags, vec!["smoke", "render"]);
    }

    #[test]
    fn test_filter_section_without_tags_is_empty() {
        let config: HarnessConfig = "[filter]\n".parse().unwrap();
        let filter = config.filter.expect("filter section");
        assert!(filter.tags.is_empty());
    }

    #[test]
    fn test_invalid_toml_is_a_parse_error() {
        let err = "run = nonsense".parse::<HarnessConfig>().unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let config = HarnessConfig::load(Path::new("/nonexistent/harness.toml")).unwrap();
        assert!(config.filter.is_none());
    }

    #[test]
    fn test_load_reads_a_real_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("harness.toml");
        std::fs::write(&path, "[run]\nstart_delay_ms = 50\n").unwrap();

        let config = HarnessConfig::load(&path).unwrap();
        assert_eq!(config.run.start_delay_ms, Some(50));
    }
}
