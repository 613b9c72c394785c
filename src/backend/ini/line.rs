//! Classification of single INI lines.

use std::sync::LazyLock;

use regex::Regex;

// key = "value with spaces"; key has no whitespace, value may be empty
static QUOTED_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^\s*(\S+)\s*=\s*"(.*)"\s*$"#).expect("valid regex"));

// key = value; neither side may contain whitespace
static PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\S+)\s*=\s*(\S+)\s*$").expect("valid regex"));

// [ section ]; one pair of brackets, no whitespace in the name
static SECTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\[\s*([^\[\]\s]+)\s*\]\s*$").expect("valid regex"));

static COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*;").expect("valid regex"));

static EMPTY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*$").expect("valid regex"));

/// A recognized INI line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    Param { key: &'a str, value: &'a str },
    Section(&'a str),
    Comment,
    Empty,
}

/// Classifies `line`, or returns `None` if it matches no supported format.
///
/// Formats are tried in a fixed order: quoted parameter, bare parameter,
/// section header, comment, empty line. The first match wins, which is what
/// lets `key = "a = b"` parse as a quoted value.
pub fn classify(line: &str) -> Option<Line<'_>> {
    for re in [&*QUOTED_PARAM, &*PARAM] {
        if let Some(caps) = re.captures(line) {
            let (_, [key, value]) = caps.extract();
            return Some(Line::Param { key, value });
        }
    }

    if let Some(caps) = SECTION.captures(line) {
        let (_, [name]) = caps.extract();
        return Some(Line::Section(name));
    }

    if COMMENT.is_match(line) {
        return Some(Line::Comment);
    }

    if EMPTY.is_match(line) {
        return Some(Line::Empty);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param<'a>(key: &'a str, value: &'a str) -> Option<Line<'a>> {
        Some(Line::Param { key, value })
    }

    #[test]
    fn test_bare_param() {
        assert_eq!(classify("name=John"), param("name", "John"));
        assert_eq!(classify("  name   =  John  "), param("name", "John"));
    }

    #[test]
    fn test_quoted_param_keeps_inner_whitespace() {
        assert_eq!(classify(r#"name = "John Smith""#), param("name", "John Smith"));
        assert_eq!(classify(r#"motd = "  padded  "  "#), param("motd", "  padded  "));
    }

    #[test]
    fn test_quoted_param_may_be_empty() {
        assert_eq!(classify(r#"name = """#), param("name", ""));
    }

    #[test]
    fn test_quoted_value_with_equals() {
        assert_eq!(classify(r#"expr = "a = b""#), param("expr", "a = b"));
    }

    #[test]
    fn test_unquoted_value_with_space_is_rejected() {
        assert_eq!(classify("name = John Smith"), None);
    }

    #[test]
    fn test_key_with_space_is_rejected() {
        assert_eq!(classify("first name = John"), None);
        assert_eq!(classify(r#"first name = "John""#), None);
    }

    #[test]
    fn test_missing_value_is_rejected() {
        assert_eq!(classify("name ="), None);
        assert_eq!(classify("= value"), None);
    }

    #[test]
    fn test_section() {
        assert_eq!(classify("[server]"), Some(Line::Section("server")));
        assert_eq!(classify("  [  server ]  "), Some(Line::Section("server")));
    }

    #[test]
    fn test_malformed_sections() {
        assert_eq!(classify("[my server]"), None);
        assert_eq!(classify("[]"), None);
        assert_eq!(classify("[[server]]"), None);
        assert_eq!(classify("[server"), None);
    }

    #[test]
    fn test_comment_and_empty() {
        assert_eq!(classify("; a comment"), Some(Line::Comment));
        assert_eq!(classify("   ;indented"), Some(Line::Comment));
        assert_eq!(classify(""), Some(Line::Empty));
        assert_eq!(classify(" \t "), Some(Line::Empty));
    }

    #[test]
    fn test_param_takes_precedence_over_comment() {
        assert_eq!(classify(";key=value"), param(";key", "value"));
    }

    #[test]
    fn test_hash_comment_is_not_supported() {
        assert_eq!(classify("# not a comment here"), None);
    }
}
