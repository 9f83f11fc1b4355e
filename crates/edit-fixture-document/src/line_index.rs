//! Rope-backed text store with line lookup.
//!
//! Offsets are character offsets. Lines are split on `\n`; an empty document has one line.

use ropey::Rope;
use std::ops::Range;

/// Document text plus O(log n) line/offset conversion.
#[derive(Debug, Clone, Default)]
pub struct LineIndex {
    rope: Rope,
}

impl LineIndex {
    /// Build an index over `text`.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Number of lines. A trailing newline starts one more (empty) line.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Total characters.
    pub fn char_count(&self) -> usize {
        self.rope.len_chars()
    }

    /// Total bytes.
    pub fn byte_count(&self) -> usize {
        self.rope.len_bytes()
    }

    /// `(line, column)` of a character offset; offsets past the end are clamped.
    pub fn char_offset_to_position(&self, char_offset: usize) -> (usize, usize) {
        let char_offset = char_offset.min(self.rope.len_chars());
        let line = self.rope.char_to_line(char_offset);
        (line, char_offset - self.rope.line_to_char(line))
    }

    /// Character offset of `(line, column)`; the column is clamped to the line length and
    /// lines past the end map to the end of the document.
    pub fn position_to_char_offset(&self, line: usize, column: usize) -> usize {
        if line >= self.rope.len_lines() {
            return self.rope.len_chars();
        }
        let start = self.rope.line_to_char(line);
        start + column.min(self.line_len(line))
    }

    /// Text of `line` without its line break.
    pub fn line_text(&self, line: usize) -> Option<String> {
        if line >= self.rope.len_lines() {
            return None;
        }
        let mut text = self.rope.line(line).to_string();
        if text.ends_with('\n') {
            text.pop();
            if text.ends_with('\r') {
                text.pop();
            }
        }
        Some(text)
    }

    /// The full text.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Text in a character range; the caller checks bounds.
    pub fn slice(&self, range: Range<usize>) -> String {
        self.rope.slice(range).to_string()
    }

    pub(crate) fn insert(&mut self, char_offset: usize, text: &str) {
        self.rope.insert(char_offset, text);
    }

    pub(crate) fn remove(&mut self, range: Range<usize>) {
        if range.start < range.end {
            self.rope.remove(range);
        }
    }

    fn line_len(&self, line: usize) -> usize {
        let start = self.rope.line_to_char(line);
        let end = if line + 1 < self.rope.len_lines() {
            self.rope.line_to_char(line + 1) - 1
        } else {
            self.rope.len_chars()
        };
        end - start
    }
}
