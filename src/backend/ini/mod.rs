//! Backend for INI-style `key = value` files with `[section]` headers.

mod line;

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, trace, warn};

use self::line::{classify, Line};
use super::{Backend, ExportedParams, LoadError, LookupError, SECTION_MARKER};

/// Section holding parameters that appear before any section header.
pub const DEFAULT_SECTION: &str = "Default";

/// A path is either `key` or `section.key`.
const MAX_PATH_SEGMENTS: usize = 2;

/// Section name -> (key -> value).
type IniParams = BTreeMap<String, BTreeMap<String, String>>;

/// Parses `*.ini` files and stores their parameters per section.
///
/// Supported lines:
///
/// ```ini
/// ; comment
/// unsectioned = value
///
/// [ section ]
/// key = value
/// quoted = "value with spaces"
/// ```
///
/// Any other line aborts the load with [`LoadError::ParseError`]. Loading
/// several files merges them, later files overriding earlier ones.
#[derive(Debug, Clone)]
pub struct IniBackend {
    params: IniParams,
    default_section: String,
}

impl Default for IniBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl IniBackend {
    /// Creates an empty backend using [`DEFAULT_SECTION`].
    pub fn new() -> Self {
        Self::with_default_section(DEFAULT_SECTION)
    }

    /// Creates an empty backend that files unsectioned parameters, and
    /// single-segment lookups, under `name`.
    pub fn with_default_section(name: impl Into<String>) -> Self {
        Self {
            params: IniParams::new(),
            default_section: name.into(),
        }
    }

    pub fn default_section(&self) -> &str {
        &self.default_section
    }

    /// Number of stored key/value pairs across all sections.
    pub fn len(&self) -> usize {
        self.params.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Parses in-memory INI text into the store.
    pub fn parse_str(&mut self, text: &str) -> Result<(), LoadError> {
        self.parse_reader(text.as_bytes(), Path::new("<string>"))
    }

    /// Parses every line of `reader` into the store.
    ///
    /// `origin` only labels errors. Parsing stops at the first unrecognized
    /// line; parameters stored from earlier lines are kept.
    pub fn parse_reader(&mut self, reader: impl BufRead, origin: &Path) -> Result<(), LoadError> {
        let mut section = self.default_section.clone();

        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| LoadError::ReadError {
                path: origin.to_path_buf(),
                source,
            })?;

            match classify(&line) {
                Some(Line::Param { key, value }) => {
                    trace!("{}: [{}] {} = {:?}", index + 1, section, key, value);
                    self.params
                        .entry(section.clone())
                        .or_default()
                        .insert(key.to_string(), value.to_string());
                }
                Some(Line::Section(name)) => {
                    debug!("{}: entering section [{}]", index + 1, name);
                    section = name.to_string();
                }
                Some(Line::Comment | Line::Empty) => {}
                None => {
                    warn!("{}:{}: invalid line format: {}", origin.display(), index + 1, line);
                    return Err(LoadError::ParseError {
                        path: origin.to_path_buf(),
                        line_number: index + 1,
                        line,
                    });
                }
            }
        }

        Ok(())
    }

    /// Maps path segments onto `(section, key)`.
    fn resolve<'a>(&'a self, segments: &'a [String]) -> Result<(&'a str, &'a str), LookupError> {
        match segments {
            [key] => Ok((self.default_section.as_str(), key.as_str())),
            [section, key] => Ok((section.as_str(), key.as_str())),
            _ => Err(LookupError::InvalidPath {
                segments: segments.len(),
                max: MAX_PATH_SEGMENTS,
            }),
        }
    }

    fn lookup(&self, segments: &[String]) -> Result<&str, LookupError> {
        let (section, key) = self.resolve(segments)?;
        self.params
            .get(section)
            .and_then(|params| params.get(key))
            .map(String::as_str)
            .ok_or_else(|| LookupError::NotFound {
                section: section.to_string(),
                key: key.to_string(),
            })
    }
}

impl Backend for IniBackend {
    fn clone_box(&self) -> Box<dyn Backend> {
        Box::new(self.clone())
    }

    fn reset(&mut self) {
        self.params.clear();
    }

    fn load_and_parse(&mut self, path: &Path) -> Result<(), LoadError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => LoadError::FileNotFound(path.to_path_buf()),
            _ => LoadError::ReadError {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        debug!("loading ini file {}", path.display());
        let before = self.len();
        self.parse_reader(BufReader::new(file), path)?;
        debug!(
            "loaded {}: {} parameters stored ({} before)",
            path.display(),
            self.len(),
            before
        );
        Ok(())
    }

    fn get(&self, segments: &[String]) -> Result<String, LookupError> {
        self.lookup(segments).map(str::to_string)
    }

    fn has(&self, segments: &[String]) -> bool {
        self.lookup(segments).is_ok()
    }

    fn get_all(&self) -> ExportedParams {
        let mut out = ExportedParams::with_capacity(self.params.len() + self.len());
        for (section, params) in &self.params {
            out.push((section.clone(), SECTION_MARKER.to_string()));
            out.extend(params.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        out
    }
}
