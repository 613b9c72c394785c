//! Construction-time settings for a [`ConfReader`](crate::ConfReader).

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::backend::ini::DEFAULT_SECTION;
use crate::path::DEFAULT_DELIMITER;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("settings file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("failed to read settings file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse settings file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Reader settings, typically kept in a small TOML file:
///
/// ```toml
/// default_section = "global"
/// delimiter = "/"
/// ```
///
/// Missing fields fall back to `"Default"` and `'.'`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReaderSettings {
    /// Section for parameters declared before any section header.
    pub default_section: String,
    /// Delimiter used by lookups that don't pass one explicitly.
    pub delimiter: char,
}

impl Default for ReaderSettings {
    fn default() -> Self {
        Self {
            default_section: DEFAULT_SECTION.to_string(),
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

impl ReaderSettings {
    /// Loads settings from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => SettingsError::FileNotFound(path.to_path_buf()),
            _ => SettingsError::ReadError {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        toml::from_str(&contents).map_err(|source| SettingsError::ParseError {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}
