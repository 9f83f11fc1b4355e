//! Backing stores the harness runs operations against.

use crate::marker::byte_offset;
use std::ops::Range;

/// The text store a harness materializes fixtures into.
///
/// Implementations range from a plain [`String`] ([`StringBuffer`]) to documents with derived
/// state or whole on-disk projects. The harness only needs to hand the parsed text over and read
/// the result back.
pub trait Collaborator {
    /// Error reported by `prepare` and by edits against this store.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Establish `text` as the current editable content.
    ///
    /// Called once per test, before the operation runs. A second call replaces the content.
    fn prepare(&mut self, text: &str) -> Result<(), Self::Error>;

    /// The full current text.
    fn current_source(&self) -> String;
}

/// A collaborator that supports character-offset text edits.
///
/// The built-in operations in [`crate::operation`] are written against this trait.
pub trait EditBuffer: Collaborator {
    /// Length of the current text in characters.
    fn char_count(&self) -> usize;

    /// Insert `text` at character offset `offset`.
    fn insert(&mut self, offset: usize, text: &str) -> Result<(), Self::Error>;

    /// Remove the characters in `range`.
    fn remove(&mut self, range: Range<usize>) -> Result<(), Self::Error>;

    /// Replace the characters in `range` with `text`.
    fn replace(&mut self, range: Range<usize>, text: &str) -> Result<(), Self::Error> {
        let start = range.start;
        self.remove(range)?;
        self.insert(start, text)
    }
}

/// Errors of [`StringBuffer`] edits.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BufferError {
    #[error("offset {offset} is out of bounds (length {len})")]
    /// An offset past the end of the text.
    InvalidOffset {
        /// Requested offset.
        offset: usize,
        /// Text length in characters.
        len: usize,
    },
    #[error("invalid range {start}..{end} (length {len})")]
    /// A reversed range or a range past the end of the text.
    InvalidRange {
        /// Range start.
        start: usize,
        /// Range end.
        end: usize,
        /// Text length in characters.
        len: usize,
    },
}

/// In-memory collaborator holding the text in a `String`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringBuffer {
    text: String,
}

impl StringBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    fn byte_range(&self, range: &Range<usize>) -> Result<Range<usize>, BufferError> {
        let len = self.char_count();
        let invalid = BufferError::InvalidRange {
            start: range.start,
            end: range.end,
            len,
        };
        if range.start > range.end {
            return Err(invalid);
        }
        let start = byte_offset(&self.text, range.start).ok_or(invalid.clone())?;
        let end = byte_offset(&self.text, range.end).ok_or(invalid)?;
        Ok(start..end)
    }
}

impl Collaborator for StringBuffer {
    type Error = BufferError;

    fn prepare(&mut self, text: &str) -> Result<(), Self::Error> {
        self.text = text.to_string();
        Ok(())
    }

    fn current_source(&self) -> String {
        self.text.clone()
    }
}

impl EditBuffer for StringBuffer {
    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn insert(&mut self, offset: usize, text: &str) -> Result<(), Self::Error> {
        let byte = byte_offset(&self.text, offset).ok_or(BufferError::InvalidOffset {
            offset,
            len: self.char_count(),
        })?;
        self.text.insert_str(byte, text);
        Ok(())
    }

    fn remove(&mut self, range: Range<usize>) -> Result<(), Self::Error> {
        let bytes = self.byte_range(&range)?;
        self.text.replace_range(bytes, "");
        Ok(())
    }

    fn replace(&mut self, range: Range<usize>, text: &str) -> Result<(), Self::Error> {
        let bytes = self.byte_range(&range)?;
        self.text.replace_range(bytes, text);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_buffer_edits() {
        let mut buffer = StringBuffer::new();
        buffer.prepare("Hello World").unwrap();

        buffer.insert(6, "Beautiful ").unwrap();
        assert_eq!(buffer.text(), "Hello Beautiful World");

        buffer.remove(6..16).unwrap();
        assert_eq!(buffer.current_source(), "Hello World");

        buffer.replace(0..5, "Goodbye").unwrap();
        assert_eq!(buffer.text(), "Goodbye World");
    }

    #[test]
    fn test_string_buffer_multibyte_offsets() {
        let mut buffer = StringBuffer::new();
        buffer.prepare("你好世界").unwrap();
        buffer.insert(2, ", ").unwrap();
        assert_eq!(buffer.text(), "你好, 世界");
        assert_eq!(buffer.char_count(), 6);
    }

    #[test]
    fn test_string_buffer_rejects_bad_offsets() {
        let mut buffer = StringBuffer::new();
        buffer.prepare("abc").unwrap();

        assert_eq!(
            buffer.insert(4, "x"),
            Err(BufferError::InvalidOffset { offset: 4, len: 3 })
        );
        assert_eq!(
            buffer.remove(2..1),
            Err(BufferError::InvalidRange {
                start: 2,
                end: 1,
                len: 3
            })
        );
        assert!(buffer.remove(1..5).is_err());
        assert_eq!(buffer.text(), "abc");
    }
}
