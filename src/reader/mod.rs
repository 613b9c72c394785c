//! Format-agnostic access to configuration parameters.

use std::path::Path;
use std::str::FromStr;

use log::debug;

use crate::backend::{Backend, ExportedParams, IniBackend};
use crate::path::{split_path, DEFAULT_DELIMITER};
use crate::settings::ReaderSettings;
use crate::Error;

/// Reads configuration files through a pluggable [`Backend`] and looks up
/// parameters by path, e.g. `section.param`.
///
/// Cloning a `ConfReader` clones its backend, so the copy owns independent
/// data.
///
/// ## Example
///
/// ```no_run
/// use conf_reader::{ConfReader, IniBackend};
///
/// let mut config = ConfReader::new(IniBackend::new());
/// config.load_file("config/app.ini")?;
///
/// let name = config.get("personal_info.name")?;
/// let age: u32 = config.get_as("personal_info.age")?;
///
/// // A later file overrides the parameters it redefines.
/// config.load_file("config/local.ini")?;
/// if config.has("personal_info.age") {
///     let age: u32 = config.get_as("personal_info.age")?;
/// }
/// # Ok::<(), conf_reader::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfReader {
    backend: Option<Box<dyn Backend>>,
    delimiter: char,
}

impl Default for ConfReader {
    fn default() -> Self {
        Self::without_backend()
    }
}

impl ConfReader {
    /// Creates a reader that owns `backend`.
    pub fn new(backend: impl Backend + 'static) -> Self {
        Self::with_backend(Box::new(backend))
    }

    pub fn with_backend(backend: Box<dyn Backend>) -> Self {
        Self {
            backend: Some(backend),
            delimiter: DEFAULT_DELIMITER,
        }
    }

    /// Creates a reader with no backend. Loads and lookups fail with
    /// [`Error::NoBackend`] until one is installed with
    /// [`change_backend`](Self::change_backend).
    pub fn without_backend() -> Self {
        Self {
            backend: None,
            delimiter: DEFAULT_DELIMITER,
        }
    }

    /// Creates an INI reader configured by `settings`.
    pub fn from_settings(settings: &ReaderSettings) -> Self {
        let mut reader = Self::new(IniBackend::with_default_section(
            settings.default_section.clone(),
        ));
        reader.delimiter = settings.delimiter;
        reader
    }

    /// Delimiter used by [`get`](Self::get), [`get_as`](Self::get_as) and
    /// [`has`](Self::has).
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    pub fn set_delimiter(&mut self, delimiter: char) {
        self.delimiter = delimiter;
    }

    fn backend(&self) -> Result<&dyn Backend, Error> {
        self.backend.as_deref().ok_or(Error::NoBackend)
    }

    /// Loads and parses `path`, merging its parameters into the stored ones.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<(), Error> {
        let backend = self.backend.as_deref_mut().ok_or(Error::NoBackend)?;
        backend.load_and_parse(path.as_ref())?;
        Ok(())
    }

    /// Returns whether `path` names a stored parameter. Never fails: an
    /// invalid path or a missing backend both give `false`.
    pub fn has(&self, path: &str) -> bool {
        self.has_with(path, self.delimiter)
    }

    pub fn has_with(&self, path: &str, delimiter: char) -> bool {
        self.backend
            .as_deref()
            .is_some_and(|backend| backend.has(&split_path(path, delimiter)))
    }

    /// Returns the raw value of the parameter at `path`.
    pub fn get(&self, path: &str) -> Result<String, Error> {
        self.get_with(path, self.delimiter)
    }

    pub fn get_with(&self, path: &str, delimiter: char) -> Result<String, Error> {
        let backend = self.backend()?;
        Ok(backend.get(&split_path(path, delimiter))?)
    }

    /// Returns the parameter at `path` converted to `T`.
    ///
    /// The whole value must parse as `T`; otherwise [`Error::Conversion`]
    /// carries the raw value and the target type name.
    pub fn get_as<T>(&self, path: &str) -> Result<T, Error>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        self.get_as_with(path, self.delimiter)
    }

    pub fn get_as_with<T>(&self, path: &str, delimiter: char) -> Result<T, Error>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let value = self.get_with(path, delimiter)?;
        value.parse::<T>().map_err(|e| Error::Conversion {
            reason: e.to_string(),
            type_name: std::any::type_name::<T>(),
            value,
        })
    }

    /// Returns all stored parameters grouped by section, see
    /// [`ExportedParams`]. Empty when no backend is installed.
    pub fn get_all(&self) -> ExportedParams {
        self.backend
            .as_deref()
            .map(|backend| backend.get_all())
            .unwrap_or_default()
    }

    /// Drops all stored parameters, keeping the backend.
    pub fn reset(&mut self) {
        if let Some(backend) = self.backend.as_deref_mut() {
            debug!("resetting stored parameters");
            backend.reset();
        }
    }

    /// Replaces the backend, discarding the old one with its data.
    pub fn change_backend(&mut self, backend: Box<dyn Backend>) {
        debug!("changing backend, dropping stored parameters");
        self.backend = Some(backend);
    }
}
