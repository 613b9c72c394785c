use crate::backend::{LoadError, LookupError};
use crate::settings::SettingsError;
use thiserror::Error;

/// Top-level error type for the conf-reader library.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),

    #[error("unable to convert parameter value '{value}' from string to {type_name}: {reason}")]
    Conversion {
        value: String,
        type_name: &'static str,
        reason: String,
    },

    #[error("conf reader used without a backend")]
    NoBackend,
}
