//! Splitting of dotted parameter paths.

/// Delimiter used when a lookup doesn't specify one.
pub const DEFAULT_DELIMITER: char = '.';

/// Splits `path` into segments on `delimiter`.
///
/// Never returns an empty list: a path without the delimiter (including the
/// empty path) comes back as a single segment. A single trailing delimiter
/// doesn't produce an empty final segment, so `"a.b."` yields `["a", "b"]`.
pub fn split_path(path: &str, delimiter: char) -> Vec<String> {
    let trimmed = path.strip_suffix(delimiter).unwrap_or(path);
    trimmed.split(delimiter).map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_and_key() {
        assert_eq!(split_path("server.port", '.'), vec!["server", "port"]);
    }

    #[test]
    fn test_key_only() {
        assert_eq!(split_path("port", '.'), vec!["port"]);
    }

    #[test]
    fn test_empty_path_is_one_segment() {
        assert_eq!(split_path("", '.'), vec![""]);
    }

    #[test]
    fn test_custom_delimiter() {
        assert_eq!(split_path("a/b/c", '/'), vec!["a", "b", "c"]);
        assert_eq!(split_path("a.b", '/'), vec!["a.b"]);
    }

    #[test]
    fn test_trailing_delimiter() {
        assert_eq!(split_path("a.b.", '.'), vec!["a", "b"]);
        assert_eq!(split_path(".", '.'), vec![""]);
    }

    #[test]
    fn test_inner_empty_segment_kept() {
        assert_eq!(split_path("a..b", '.'), vec!["a", "", "b"]);
    }
}
