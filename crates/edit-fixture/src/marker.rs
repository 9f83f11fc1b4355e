//! Cursor marker convention.
//!
//! A marked text embeds exactly one cursor marker (`^` by default) and any number of whitespace
//! boundary markers (`$` by default). Boundary markers only make trailing whitespace visible to
//! the person reading the fixture; they are stripped before anything else happens.
//!
//! All offsets are character offsets (Unicode scalar values).

use crate::error::{FixtureError, FixtureRole};

/// Default cursor marker.
pub const CURSOR: char = '^';
/// Default whitespace boundary marker.
pub const WHITESPACE_BOUNDARY: char = '$';

/// Plain text and cursor offset extracted from a marked text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFixture {
    /// Text with all markers removed.
    pub plain_text: String,
    /// Cursor position in characters, `0..=plain_text.chars().count()`.
    pub cursor_offset: usize,
}

/// Marker characters used by a harness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerConfig {
    cursor: char,
    whitespace_boundary: char,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            cursor: CURSOR,
            whitespace_boundary: WHITESPACE_BOUNDARY,
        }
    }
}

impl MarkerConfig {
    /// Create a marker configuration; both markers must be distinct characters.
    pub fn new(cursor: char, whitespace_boundary: char) -> Result<Self, FixtureError> {
        if cursor == whitespace_boundary {
            return Err(FixtureError::InvalidMarkers(cursor));
        }
        Ok(Self {
            cursor,
            whitespace_boundary,
        })
    }

    /// The cursor marker.
    pub fn cursor(&self) -> char {
        self.cursor
    }

    /// The whitespace boundary marker.
    pub fn whitespace_boundary(&self) -> char {
        self.whitespace_boundary
    }

    /// Parse a marked input into plain text and cursor offset.
    pub fn parse(&self, marked: &str) -> Result<ParsedFixture, FixtureError> {
        self.parse_as(marked, FixtureRole::Input)
    }

    /// Validate a marked expected output and strip its boundary markers.
    ///
    /// The cursor marker stays in place, since it is compared against [`MarkerConfig::format`]
    /// output verbatim.
    pub fn normalize_expected(&self, marked: &str) -> Result<String, FixtureError> {
        let stripped = self.strip_boundaries(marked);
        self.check_cursor_count(&stripped, marked, FixtureRole::Expected)?;
        Ok(stripped)
    }

    /// Insert the cursor marker into `text` at `cursor_offset`.
    ///
    /// Boundary markers are never re-inserted.
    pub fn format(&self, text: &str, cursor_offset: usize) -> Result<String, FixtureError> {
        let byte = byte_offset(text, cursor_offset).ok_or(FixtureError::CursorOutOfBounds {
            offset: cursor_offset,
            len: text.chars().count(),
        })?;

        let mut out = String::with_capacity(text.len() + self.cursor.len_utf8());
        out.push_str(&text[..byte]);
        out.push(self.cursor);
        out.push_str(&text[byte..]);
        Ok(out)
    }

    pub(crate) fn parse_as(
        &self,
        marked: &str,
        role: FixtureRole,
    ) -> Result<ParsedFixture, FixtureError> {
        let stripped = self.strip_boundaries(marked);
        self.check_cursor_count(&stripped, marked, role)?;

        let mut plain_text = String::with_capacity(stripped.len());
        let mut cursor_offset = 0;
        for (idx, ch) in stripped.chars().enumerate() {
            if ch == self.cursor {
                cursor_offset = idx;
            } else {
                plain_text.push(ch);
            }
        }

        Ok(ParsedFixture {
            plain_text,
            cursor_offset,
        })
    }

    fn strip_boundaries(&self, marked: &str) -> String {
        marked
            .chars()
            .filter(|&ch| ch != self.whitespace_boundary)
            .collect()
    }

    fn check_cursor_count(
        &self,
        stripped: &str,
        marked: &str,
        role: FixtureRole,
    ) -> Result<(), FixtureError> {
        let cursor_count = stripped.chars().filter(|&ch| ch == self.cursor).count();
        if cursor_count != 1 {
            return Err(FixtureError::MalformedFixture {
                role,
                cursor_count,
                fixture: marked.to_string(),
            });
        }
        Ok(())
    }
}

/// Parse a marked input with the default markers.
pub fn parse(marked: &str) -> Result<ParsedFixture, FixtureError> {
    MarkerConfig::default().parse(marked)
}

/// Insert the default cursor marker into `text` at `cursor_offset`.
pub fn format(text: &str, cursor_offset: usize) -> Result<String, FixtureError> {
    MarkerConfig::default().format(text, cursor_offset)
}

/// Validate a marked expected output with the default markers and strip `$`.
pub fn normalize_expected(marked: &str) -> Result<String, FixtureError> {
    MarkerConfig::default().normalize_expected(marked)
}

/// Byte index of the `char_offset`-th character, `None` when past the end.
pub(crate) fn byte_offset(text: &str, char_offset: usize) -> Option<usize> {
    text.char_indices()
        .map(|(byte, _)| byte)
        .chain(std::iter::once(text.len()))
        .nth(char_offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cursor_at_end() {
        let parsed = parse("object A^").unwrap();
        assert_eq!(parsed.plain_text, "object A");
        assert_eq!(parsed.cursor_offset, 8);
    }

    #[test]
    fn test_parse_cursor_at_start() {
        let parsed = parse("^fn main() {}").unwrap();
        assert_eq!(parsed.plain_text, "fn main() {}");
        assert_eq!(parsed.cursor_offset, 0);
    }

    #[test]
    fn test_parse_strips_boundaries_before_locating_cursor() {
        let parsed = parse("a$b^c$").unwrap();
        assert_eq!(parsed.plain_text, "abc");
        assert_eq!(parsed.cursor_offset, 2);
    }

    #[test]
    fn test_parse_counts_characters_not_bytes() {
        let parsed = parse("你好^世界").unwrap();
        assert_eq!(parsed.plain_text, "你好世界");
        assert_eq!(parsed.cursor_offset, 2);
    }

    #[test]
    fn test_parse_rejects_missing_cursor() {
        let err = parse("object A").unwrap_err();
        match err {
            FixtureError::MalformedFixture {
                role, cursor_count, ..
            } => {
                assert_eq!(role, FixtureRole::Input);
                assert_eq!(cursor_count, 0);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_rejects_two_cursors() {
        let err = parse("a^b^").unwrap_err();
        assert!(err.is_malformed());
        assert!(err.to_string().contains("found 2"));
    }

    #[test]
    fn test_normalize_expected_keeps_cursor() {
        assert_eq!(normalize_expected("foo^$  $").unwrap(), "foo^  ");
        let err = normalize_expected("foo$").unwrap_err();
        assert!(matches!(
            err,
            FixtureError::MalformedFixture {
                role: FixtureRole::Expected,
                cursor_count: 0,
                ..
            }
        ));
    }

    #[test]
    fn test_format_inserts_marker() {
        assert_eq!(format("object AB", 9).unwrap(), "object AB^");
        assert_eq!(format("", 0).unwrap(), "^");
        assert_eq!(format("héllo", 2).unwrap(), "hé^llo");
    }

    #[test]
    fn test_format_out_of_bounds() {
        let err = format("abc", 4).unwrap_err();
        assert!(matches!(
            err,
            FixtureError::CursorOutOfBounds { offset: 4, len: 3 }
        ));
    }

    #[test]
    fn test_custom_markers() {
        let markers = MarkerConfig::new('|', '¶').unwrap();
        let parsed = markers.parse("let x = |1;¶").unwrap();
        assert_eq!(parsed.plain_text, "let x = 1;");
        assert_eq!(parsed.cursor_offset, 8);
        // The default markers are ordinary text here.
        assert_eq!(markers.format("a^b$", 4).unwrap(), "a^b$|");
    }

    #[test]
    fn test_identical_markers_rejected() {
        let err = MarkerConfig::new('#', '#').unwrap_err();
        assert!(matches!(err, FixtureError::InvalidMarkers('#')));
    }
}
