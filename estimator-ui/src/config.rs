//! Configuration for the estimator shell, loaded from a TOML file.
//!
//! Every key is optional:
//!
//! ```toml
//! [logging]
//! level = "debug"
//! stderr = true
//! file = "estimator.log"
//!
//! [estimate]
//! prefill_due_date = false
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub estimate: EstimateSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Bare level ("info") or a full filter directive. `RUST_LOG` wins when set.
    #[serde(default = "default_level")]
    pub level: String,

    /// Mirror log records to stderr.
    #[serde(default = "default_true")]
    pub stderr: bool,

    /// Append log records to this file. The directory must exist.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EstimateSettings {
    /// Start a new estimate with today's date as the due date.
    #[serde(default = "default_true")]
    pub prefill_due_date: bool,
}

fn default_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            stderr: default_true(),
            file: None,
        }
    }
}

impl Default for EstimateSettings {
    fn default() -> Self {
        Self {
            prefill_due_date: default_true(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.stderr);
        assert!(config.estimate.prefill_due_date);
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            [logging]
            file = "logs/estimator.log"

            [estimate]
            prefill_due_date = false
            "#,
        )
        .unwrap();

        assert_eq!(config.logging.level, "info");
        assert_eq!(
            config.logging.file,
            Some(PathBuf::from("logs/estimator.log"))
        );
        assert!(!config.estimate.prefill_due_date);
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = AppConfig::from_toml_str("[logging\nlevel = ").unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = AppConfig::load(Path::new("/nonexistent/estimator.toml")).unwrap_err();

        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
