//! Pluggable file-format backends.
//!
//! A [`Backend`] owns the parsed parameters of one file format. The
//! [`ConfReader`](crate::ConfReader) facade only talks to this trait, so a new
//! format is added by implementing it and installing the backend with
//! [`ConfReader::change_backend`](crate::ConfReader::change_backend).

mod error;
pub mod ini;

use std::path::Path;

pub use error::{LoadError, LookupError};
pub use ini::IniBackend;

/// Value paired with a section name in [`ExportedParams`] to mark the start
/// of that section's block.
pub const SECTION_MARKER: &str = "section_name";

/// Full dump of a backend's parameters.
///
/// Each section contributes a `(section, SECTION_MARKER)` entry followed by
/// its own `(key, value)` entries:
/// `section1, section1_par1, section1_par2, section2, section2_par1, ...`
pub type ExportedParams = Vec<(String, String)>;

/// Load and query operations every file-format backend provides.
pub trait Backend: Send + Sync + std::fmt::Debug {
    /// Returns an independent copy holding the same data.
    fn clone_box(&self) -> Box<dyn Backend>;

    /// Drops all stored data. Calling it on an empty backend is a no-op.
    fn reset(&mut self);

    /// Opens `path`, parses it and merges the found parameters into the
    /// store, overwriting existing ones.
    ///
    /// Entries stored before a parse error stay stored.
    fn load_and_parse(&mut self, path: &Path) -> Result<(), LoadError>;

    /// Returns the value addressed by `segments`.
    fn get(&self, segments: &[String]) -> Result<String, LookupError>;

    /// Returns whether `segments` addresses a stored value. Never fails.
    fn has(&self, segments: &[String]) -> bool;

    /// Exports every stored parameter, see [`ExportedParams`].
    fn get_all(&self) -> ExportedParams;
}

impl Clone for Box<dyn Backend> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
