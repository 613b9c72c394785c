use std::path::PathBuf;
use thiserror::Error;

/// Failure while loading a configuration file into a backend.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("unable to open config file: {0}")]
    FileNotFound(PathBuf),

    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid line format in '{path}' (line {line_number}): {line}")]
    ParseError {
        path: PathBuf,
        line_number: usize,
        line: String,
    },
}

/// Failure while resolving a parameter path against stored data.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LookupError {
    #[error("parameter not found: {section}.{key}")]
    NotFound { section: String, key: String },

    #[error("invalid parameter path: at most {max} segments allowed, got {segments}")]
    InvalidPath { segments: usize, max: usize },
}
