//! cpee-steps configuration.
//!
//! Loaded from `~/.cpee-steps/config.toml`, or from an explicit path.
//! Every setting is optional; a missing default file means defaults.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::extract::{Extractor, Markers};
use crate::model::FieldNames;

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// cpee-steps configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Default log filter when `CPEE_STEPS_LOG` is unset (e.g. `"info"`).
    pub log_filter: Option<String>,

    /// Event body keys the pipeline reads.
    pub fields: FieldNames,

    /// Content markers for slot classification.
    pub markers: Markers,
}

impl Config {
    /// Load config from `path`, or from the default location when `None`.
    ///
    /// An explicit path must exist. The default file may be absent.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from(path),
            None => match Self::path() {
                Some(path) if path.exists() => Self::load_from(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The default config file path: `~/.cpee-steps/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".cpee-steps").join("config.toml"))
    }

    /// An extractor using the configured field names and markers.
    pub fn extractor(&self) -> Extractor {
        Extractor::new(self.fields.clone(), self.markers.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    #[test]
    fn partial_config_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "log-filter = \"debug\"\n\n[fields]\ntimestamp = \"time:timestamp\"\n\n[markers]\nuser-input = \"Prompt:\"\n",
        )
        .unwrap();

        let config = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(config.log_filter.as_deref(), Some("debug"));
        assert_eq!(config.fields.timestamp, "time:timestamp");
        assert_eq!(config.fields.correlation, FieldNames::default().correlation);
        assert_eq!(config.markers.user_input, "Prompt:");
        assert_eq!(
            config.markers.input_cpee_tree,
            Markers::default().input_cpee_tree
        );
    }

    #[test]
    fn empty_file_is_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "").unwrap();

        assert_eq!(Config::load(Some(path.as_path())).unwrap(), Config::default());
    }

    #[test]
    fn missing_explicit_path_fails() {
        let dir = TempDir::new().unwrap();
        let err = Config::load(Some(dir.path().join("nope.toml").as_path())).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn invalid_toml_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "fields = 3").unwrap();

        let err = Config::load(Some(path.as_path())).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().starts_with("invalid config at"));
    }
}
