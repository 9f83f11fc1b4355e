//! The editable document.

use crate::delta::TextDelta;
use crate::error::DocumentError;
use crate::line_index::LineIndex;
use crate::partition::{Partition, partition};
use edit_fixture_lang::LanguageConfig;
use std::ops::Range;
use unicode_segmentation::UnicodeSegmentation;

/// Rope-backed text with derived line index, partitions and an edit log.
///
/// Partitions are recomputed after every edit, so they always describe the current text.
#[derive(Debug, Clone)]
pub struct Document {
    index: LineIndex,
    language: LanguageConfig,
    partitions: Vec<Partition>,
    deltas: Vec<TextDelta>,
    version: u64,
}

impl Document {
    /// Create a document at version 0.
    pub fn new(text: &str, language: LanguageConfig) -> Self {
        let partitions = partition(text, &language);
        Self {
            index: LineIndex::from_text(text),
            language,
            partitions,
            deltas: Vec::new(),
            version: 0,
        }
    }

    /// The full text.
    pub fn text(&self) -> String {
        self.index.text()
    }

    /// Length in characters.
    pub fn char_count(&self) -> usize {
        self.index.char_count()
    }

    /// Line/offset lookup.
    pub fn line_index(&self) -> &LineIndex {
        &self.index
    }

    /// Language the document is partitioned with.
    pub fn language(&self) -> &LanguageConfig {
        &self.language
    }

    /// Incremented by every edit.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Edits applied since the document was created, oldest first.
    pub fn deltas(&self) -> &[TextDelta] {
        &self.deltas
    }

    /// Current partitions, in document order.
    pub fn partitions(&self) -> &[Partition] {
        &self.partitions
    }

    /// The partition containing `offset`.
    ///
    /// The end of the document belongs to the last partition. Returns `None` for an empty
    /// document or an offset past the end.
    pub fn partition_at(&self, offset: usize) -> Option<&Partition> {
        if offset > self.char_count() {
            return None;
        }
        self.partitions
            .iter()
            .find(|p| p.range.contains(&offset))
            .or_else(|| self.partitions.last().filter(|p| p.range.end == offset))
    }

    /// Text in a character range.
    pub fn slice(&self, range: Range<usize>) -> Result<String, DocumentError> {
        self.check_range(&range)?;
        Ok(self.index.slice(range))
    }

    /// Insert `text` at `offset`.
    pub fn insert(&mut self, offset: usize, text: &str) -> Result<(), DocumentError> {
        self.replace(offset..offset, text)
    }

    /// Remove `range` and return the removed text.
    pub fn remove(&mut self, range: Range<usize>) -> Result<String, DocumentError> {
        self.check_range(&range)?;
        let removed = self.index.slice(range.clone());
        self.apply(range, removed.clone(), "");
        Ok(removed)
    }

    /// Replace `range` with `text`.
    pub fn replace(&mut self, range: Range<usize>, text: &str) -> Result<(), DocumentError> {
        self.check_range(&range)?;
        let removed = self.index.slice(range.clone());
        self.apply(range, removed, text);
        Ok(())
    }

    /// Start of the grapheme cluster ending at `offset`, or `offset` at the start of the text.
    pub fn prev_grapheme_boundary(&self, offset: usize) -> usize {
        let offset = offset.min(self.char_count());
        let before = self.index.slice(0..offset);
        match before.graphemes(true).next_back() {
            Some(grapheme) => offset - grapheme.chars().count(),
            None => offset,
        }
    }

    /// End of the grapheme cluster starting at `offset`, or `offset` at the end of the text.
    pub fn next_grapheme_boundary(&self, offset: usize) -> usize {
        let offset = offset.min(self.char_count());
        let after = self.index.slice(offset..self.char_count());
        match after.graphemes(true).next() {
            Some(grapheme) => offset + grapheme.chars().count(),
            None => offset,
        }
    }

    fn apply(&mut self, range: Range<usize>, deleted_text: String, inserted_text: &str) {
        let start = range.start;
        self.index.remove(range);
        self.index.insert(start, inserted_text);
        self.version += 1;
        self.partitions = partition(&self.index.text(), &self.language);

        tracing::trace!(
            version = self.version,
            start,
            deleted = deleted_text.chars().count(),
            inserted = inserted_text.chars().count(),
            "document edited"
        );
        self.deltas.push(TextDelta {
            version: self.version,
            start,
            deleted_text,
            inserted_text: inserted_text.to_string(),
        });
    }

    fn check_range(&self, range: &Range<usize>) -> Result<(), DocumentError> {
        let len = self.char_count();
        if range.start == range.end && range.start > len {
            return Err(DocumentError::InvalidOffset {
                offset: range.start,
                len,
            });
        }
        if range.start > range.end || range.end > len {
            return Err(DocumentError::InvalidRange {
                start: range.start,
                end: range.end,
                len,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partition::PartitionKind;

    #[test]
    fn test_edits_record_deltas() {
        let mut doc = Document::new("object A", LanguageConfig::plain());
        doc.insert(8, " {}").unwrap();
        let removed = doc.remove(0..7).unwrap();
        doc.replace(0..1, "B").unwrap();

        assert_eq!(removed, "object ");
        assert_eq!(doc.text(), "B {}");
        assert_eq!(doc.version(), 3);

        let deltas = doc.deltas();
        assert_eq!(deltas.len(), 3);
        assert_eq!(deltas[0].inserted_text, " {}");
        assert_eq!(deltas[1].deleted_text, "object ");
        assert_eq!(deltas[1].end(), 7);
        assert_eq!(deltas[2].deleted_len(), 1);
        assert_eq!(deltas[2].inserted_len(), 1);
    }

    #[test]
    fn test_invalid_edits_leave_document_untouched() {
        let mut doc = Document::new("abc", LanguageConfig::plain());
        assert_eq!(
            doc.insert(4, "x"),
            Err(DocumentError::InvalidOffset { offset: 4, len: 3 })
        );
        assert_eq!(
            doc.remove(2..5),
            Err(DocumentError::InvalidRange {
                start: 2,
                end: 5,
                len: 3
            })
        );
        assert_eq!(doc.text(), "abc");
        assert_eq!(doc.version(), 0);
        assert!(doc.deltas().is_empty());
    }

    #[test]
    fn test_partitions_follow_edits() {
        let mut doc = Document::new("val x = 1", LanguageConfig::scala_like());
        assert_eq!(doc.partitions().len(), 1);

        doc.insert(9, " // one").unwrap();
        let kind = |offset| doc.partition_at(offset).map(|p| p.kind);
        assert_eq!(kind(0), Some(PartitionKind::Code));
        assert_eq!(kind(10), Some(PartitionKind::LineComment));
        assert_eq!(kind(16), Some(PartitionKind::LineComment));
        assert_eq!(kind(17), None);
    }

    #[test]
    fn test_partition_at_empty_document() {
        let doc = Document::new("", LanguageConfig::scala_like());
        assert!(doc.partition_at(0).is_none());
    }

    #[test]
    fn test_grapheme_boundaries() {
        // "e" + combining acute accent is one grapheme of two chars.
        let doc = Document::new("ae\u{301}b", LanguageConfig::plain());
        assert_eq!(doc.prev_grapheme_boundary(3), 1);
        assert_eq!(doc.next_grapheme_boundary(1), 3);
        assert_eq!(doc.prev_grapheme_boundary(0), 0);
        assert_eq!(doc.next_grapheme_boundary(4), 4);
    }

    #[test]
    fn test_line_index_tracks_text() {
        let mut doc = Document::new("a\nb", LanguageConfig::plain());
        doc.insert(3, "\nc").unwrap();
        assert_eq!(doc.line_index().line_count(), 3);
        assert_eq!(doc.line_index().line_text(2).as_deref(), Some("c"));
    }
}
