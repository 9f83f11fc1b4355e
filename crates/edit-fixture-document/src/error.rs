//! Document-level errors.

/// Errors produced by [`crate::Document`] and [`crate::DocumentBuffer`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentError {
    #[error("document has not been prepared")]
    /// The buffer was edited before `prepare` created a document.
    NotPrepared,

    #[error("invalid offset {offset} (document length {len})")]
    /// An offset past the end of the document.
    InvalidOffset {
        /// Requested character offset.
        offset: usize,
        /// Document length in characters.
        len: usize,
    },

    #[error("invalid range {start}..{end} (document length {len})")]
    /// A reversed range or one reaching past the end of the document.
    InvalidRange {
        /// Range start.
        start: usize,
        /// Range end.
        end: usize,
        /// Document length in characters.
        len: usize,
    },
}
