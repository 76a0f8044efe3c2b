//! Configuration file support.
//!
//! Settings are read from a `solkit.toml` file. Every section and key is
//! optional:
//!
//! ```toml
//! [warnings]
//! action = "once"
//! pending_action = "ignore"
//!
//! [table]
//! precision = 4
//! show_uncertainty = false
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::constants::TableSettings;
use crate::deprecation::{FilterAction, FilteredSink, WarningSink};

pub const CONFIG_FILE_NAME: &str = "solkit.toml";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {message}")]
    Parse { path: String, message: String },

    #[error("No {0} found in standard locations")]
    NotFound(String),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SolkitConfig {
    #[serde(default)]
    pub warnings: WarningSettings,
    #[serde(default)]
    pub table: TableSettings,
}

/// How deprecation warnings are filtered before they reach a sink.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarningSettings {
    #[serde(default)]
    pub action: FilterAction,
    #[serde(default)]
    pub pending_action: FilterAction,
}

impl WarningSettings {
    /// Wrap `inner` in a [`FilteredSink`] applying these actions.
    pub fn into_sink<S: WarningSink>(self, inner: S) -> FilteredSink<S> {
        FilteredSink::new(inner, self.action, self.pending_action)
    }
}

impl SolkitConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(SolkitConfig)` if successful
    /// * `Err(ConfigError)` if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_toml_str(&content).map_err(|e| match e {
            ConfigError::Parse { path: key, message } => ConfigError::Parse {
                path: path.display().to_string(),
                message: format!("at '{}': {}", key, message),
            },
            other => other,
        })?;

        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text.
    ///
    /// On failure, [`ConfigError::Parse`] carries the dotted path of the
    /// offending key (for example `warnings.action`).
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let deserializer = toml::Deserializer::new(content);
        serde_path_to_error::deserialize(deserializer).map_err(|e| ConfigError::Parse {
            path: e.path().to_string(),
            message: e.inner().to_string(),
        })
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `solkit.toml` in:
    /// 1. Current directory
    /// 2. `rust_backend/` directory
    /// 3. Parent directory
    ///
    /// # Returns
    /// * `Ok(SolkitConfig)` if found and parsed successfully
    /// * `Err(ConfigError)` if no config file was found or it fails to parse
    pub fn from_default_location() -> Result<Self, ConfigError> {
        let search_paths = [
            PathBuf::from(CONFIG_FILE_NAME),
            Path::new("rust_backend").join(CONFIG_FILE_NAME),
            Path::new("..").join(CONFIG_FILE_NAME),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(ConfigError::NotFound(CONFIG_FILE_NAME.to_string()))
    }

    /// Like [`SolkitConfig::from_default_location`], falling back to the
    /// defaults when no file exists. Parse errors are still reported.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        match Self::from_default_location() {
            Err(ConfigError::NotFound(_)) => Ok(Self::default()),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deprecation::{Category, RecordingSink, Warning};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = SolkitConfig::from_toml_str("").unwrap();
        assert_eq!(config, SolkitConfig::default());
        assert_eq!(config.warnings.action, FilterAction::Always);
        assert_eq!(config.table.precision, 6);
        assert!(config.table.show_uncertainty);
    }

    #[test]
    fn test_partial_sections() {
        let toml = r#"
[warnings]
pending_action = "ignore"

[table]
precision = 3
"#;
        let config = SolkitConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.warnings.action, FilterAction::Always);
        assert_eq!(config.warnings.pending_action, FilterAction::Ignore);
        assert_eq!(config.table.precision, 3);
        assert!(config.table.show_uncertainty);
    }

    #[test]
    fn test_unknown_action_names_the_key() {
        let toml = r#"
[warnings]
action = "error"
"#;
        match SolkitConfig::from_toml_str(toml) {
            Err(ConfigError::Parse { path, .. }) => assert_eq!(path, "warnings.action"),
            other => panic!("expected a parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[warnings]\naction = \"once\"").unwrap();

        let config = SolkitConfig::from_file(file.path()).unwrap();
        assert_eq!(config.warnings.action, FilterAction::Once);
    }

    #[test]
    fn test_from_file_reports_file_and_key() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[table]\nprecision = \"many\"").unwrap();

        let err = SolkitConfig::from_file(file.path()).unwrap_err();
        let message = err.to_string();
        assert!(message.contains(&file.path().display().to_string()));
        assert!(message.contains("table.precision"));
    }

    #[test]
    fn test_missing_file() {
        let err = SolkitConfig::from_file("/nonexistent/solkit.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_once_suppresses_repeats() {
        let settings = WarningSettings {
            action: FilterAction::Once,
            pending_action: FilterAction::Always,
        };
        let sink = settings.into_sink(RecordingSink::new());
        for _ in 0..3 {
            sink.emit(&Warning::new("same", Category::Deprecation));
        }
        assert_eq!(sink.inner().len(), 1);
    }
}
