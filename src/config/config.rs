//! Config file handling

use std::path::{Path, PathBuf};

use crate::cli::OutputFormat;
use crate::errors::CurlexError;

/// Environment variable pointing at an alternative config file
pub const CONFIG_ENV: &str = "CURLEX_CONFIG";

/// curlex configuration
///
/// Every field is a default that the matching command-line flag overrides.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Language keys emitted when no `--lang` is given (empty = all)
    pub languages: Vec<String>,
    /// Base URL used when no `--base-url` is given
    pub base_url: Option<String>,
    /// Output format used when no `--format` is given
    pub format: Option<OutputFormat>,
}

impl Config {
    /// Load configuration from `$CURLEX_CONFIG` or the default location
    ///
    /// A missing file is not an error.
    pub fn load() -> Result<Self, CurlexError> {
        let config_file = match std::env::var_os(CONFIG_ENV) {
            Some(path) => PathBuf::from(path),
            None => Self::default_config_dir().join("config.toml"),
        };
        Self::load_from(&config_file)
    }

    /// Load configuration from a specific file
    pub fn load_from(config_file: &Path) -> Result<Self, CurlexError> {
        if !config_file.exists() {
            tracing::trace!(path = %config_file.display(), "no config file");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_file)
            .map_err(|e| CurlexError::Config(format!("Failed to read config: {}", e)))?;

        Self::parse(&content)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, CurlexError> {
        let toml_value: toml::Value = toml::from_str(content)
            .map_err(|e| CurlexError::Config(format!("Invalid config TOML: {}", e)))?;

        let defaults = toml_value.get("defaults");

        let languages = defaults
            .and_then(|d| d.get("languages"))
            .and_then(|v| v.as_array())
            .map(|arr| {
                arr.iter()
                    .filter_map(|v| v.as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_default();

        let base_url = defaults
            .and_then(|d| d.get("base_url"))
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
            .map(String::from);

        let format = match defaults.and_then(|d| d.get("format")).and_then(|v| v.as_str()) {
            Some(name) => Some(
                OutputFormat::from_name(name)
                    .ok_or_else(|| CurlexError::Config(format!("Unknown format '{}'", name)))?,
            ),
            None => None,
        };

        Ok(Self {
            languages,
            base_url,
            format,
        })
    }

    /// Get the default config directory
    fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .map(|p| p.join("curlex"))
            .unwrap_or_else(|| PathBuf::from(".curlex"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_full() {
        let config = Config::parse(
            r#"
[defaults]
languages = ["curl", "python-requests"]
base_url = "https://api.example.com"
format = "json"
"#,
        )
        .unwrap();
        assert_eq!(config.languages, vec!["curl", "python-requests"]);
        assert_eq!(config.base_url.as_deref(), Some("https://api.example.com"));
        assert_eq!(config.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(Config::parse("[defaults"), Err(CurlexError::Config(_))));
        assert!(matches!(
            Config::parse("[defaults]\nformat = \"yaml\""),
            Err(CurlexError::Config(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[defaults]\nbase_url = \"http://localhost:8080\"").unwrap();
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.base_url.as_deref(), Some("http://localhost:8080"));
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, Config::default());
    }
}
