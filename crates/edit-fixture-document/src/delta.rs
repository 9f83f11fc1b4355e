//! Edit records.
//!
//! Every mutation of a [`crate::Document`] is recorded as a [`TextDelta`] expressed in character
//! offsets, so a test can inspect exactly what an operation did without diffing texts.

/// One applied edit.
///
/// `start` is a character offset into the document as it was right before this edit. The
/// removed span is `start..start + deleted_len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDelta {
    /// Document version produced by this edit.
    pub version: u64,
    /// Start character offset.
    pub start: usize,
    /// Exact removed text (may be empty).
    pub deleted_text: String,
    /// Exact inserted text (may be empty).
    pub inserted_text: String,
}

impl TextDelta {
    /// Removed length in characters.
    pub fn deleted_len(&self) -> usize {
        self.deleted_text.chars().count()
    }

    /// Inserted length in characters.
    pub fn inserted_len(&self) -> usize {
        self.inserted_text.chars().count()
    }

    /// Exclusive end of the removed span, in pre-edit offsets.
    pub fn end(&self) -> usize {
        self.start + self.deleted_len()
    }

    /// Whether this edit changed nothing.
    pub fn is_noop(&self) -> bool {
        self.deleted_text == self.inserted_text
    }
}
