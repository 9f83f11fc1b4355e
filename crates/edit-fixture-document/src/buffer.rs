//! Harness collaborator backed by a [`Document`].

use crate::document::Document;
use crate::error::DocumentError;
use edit_fixture::{Collaborator, EditBuffer, EditContext, Operation};
use edit_fixture_lang::LanguageConfig;
use std::ops::Range;

/// Collaborators that expose a [`Document`] to operations.
pub trait HasDocument {
    /// The prepared document.
    fn document(&self) -> Result<&Document, DocumentError>;
}

/// A collaborator that materializes each fixture into a fresh [`Document`].
#[derive(Debug, Clone, Default)]
pub struct DocumentBuffer {
    language: LanguageConfig,
    document: Option<Document>,
}

impl DocumentBuffer {
    /// Create a buffer whose documents use `language`.
    pub fn new(language: LanguageConfig) -> Self {
        Self {
            language,
            document: None,
        }
    }

    /// Language new documents are created with.
    pub fn language(&self) -> &LanguageConfig {
        &self.language
    }

    /// The document, mutably.
    pub fn document_mut(&mut self) -> Result<&mut Document, DocumentError> {
        self.document.as_mut().ok_or(DocumentError::NotPrepared)
    }
}

impl HasDocument for DocumentBuffer {
    fn document(&self) -> Result<&Document, DocumentError> {
        self.document.as_ref().ok_or(DocumentError::NotPrepared)
    }
}

impl Collaborator for DocumentBuffer {
    type Error = DocumentError;

    fn prepare(&mut self, text: &str) -> Result<(), Self::Error> {
        let document = Document::new(text, self.language.clone());
        tracing::trace!(
            language = %self.language.name,
            lines = document.line_index().line_count(),
            partitions = document.partitions().len(),
            "document prepared"
        );
        self.document = Some(document);
        Ok(())
    }

    fn current_source(&self) -> String {
        self.document.as_ref().map(Document::text).unwrap_or_default()
    }
}

impl EditBuffer for DocumentBuffer {
    fn char_count(&self) -> usize {
        self.document.as_ref().map_or(0, Document::char_count)
    }

    fn insert(&mut self, offset: usize, text: &str) -> Result<(), Self::Error> {
        self.document_mut()?.insert(offset, text)
    }

    fn remove(&mut self, range: Range<usize>) -> Result<(), Self::Error> {
        self.document_mut()?.remove(range).map(drop)
    }

    fn replace(&mut self, range: Range<usize>, text: &str) -> Result<(), Self::Error> {
        self.document_mut()?.replace(range, text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Backward,
    Forward,
}

/// Removes one grapheme cluster next to the cursor.
#[derive(Debug, Clone, Copy)]
pub struct DeleteGrapheme {
    direction: Direction,
}

impl DeleteGrapheme {
    /// Delete the grapheme before the cursor, like Backspace.
    pub fn backward() -> Self {
        Self {
            direction: Direction::Backward,
        }
    }

    /// Delete the grapheme after the cursor, like Delete.
    pub fn forward() -> Self {
        Self {
            direction: Direction::Forward,
        }
    }
}

impl<C> Operation<C> for DeleteGrapheme
where
    C: EditBuffer + HasDocument,
    C::Error: From<DocumentError>,
{
    fn name(&self) -> &str {
        match self.direction {
            Direction::Backward => "delete-grapheme-backward",
            Direction::Forward => "delete-grapheme-forward",
        }
    }

    fn execute(self, cx: &mut EditContext<'_, C>) -> Result<(), C::Error> {
        let cursor = cx.cursor();
        let document = cx.buffer().document()?;
        let range = match self.direction {
            Direction::Backward => document.prev_grapheme_boundary(cursor)..cursor,
            Direction::Forward => cursor..document.next_grapheme_boundary(cursor),
        };

        let start = range.start;
        cx.buffer_mut().remove(range)?;
        cx.set_cursor(start);
        Ok(())
    }
}
