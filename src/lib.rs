//! Typed lookups into hierarchical configuration files.
//!
//! A [`ConfReader`] delegates file handling to a swappable [`Backend`];
//! [`IniBackend`] reads INI-style files. Parameters are addressed by
//! `section.key` paths, or a bare `key` for the default section.

pub mod backend;
mod error;
pub mod path;
pub mod reader;
pub mod settings;

pub use backend::{Backend, ExportedParams, IniBackend, LoadError, LookupError, SECTION_MARKER};
pub use error::Error;
pub use reader::ConfReader;
pub use settings::{ReaderSettings, SettingsError};
