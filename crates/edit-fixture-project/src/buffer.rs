//! Harness collaborator backed by a transient project.

use crate::error::ProjectError;
use crate::project::TransientProject;
use crate::suite::ProjectSuite;
use crate::unit::CompilationUnit;
use edit_fixture::{Collaborator, EditBuffer};
use edit_fixture_document::{Document, DocumentBuffer, DocumentError, HasDocument};
use std::ops::Range;
use std::path::Path;

/// A [`DocumentBuffer`] whose text is also loaded into a throwaway project and analyzed.
///
/// `prepare` creates the project (once), writes the fixture text as the compilation unit and
/// analyzes it with the suite's shared analyzer. Edits go to the in-memory document; call
/// [`ProjectBuffer::reload`] to push them to disk and refresh the unit.
#[derive(Debug)]
pub struct ProjectBuffer<'s> {
    suite: &'s ProjectSuite,
    document: DocumentBuffer,
    project: Option<TransientProject>,
    unit: Option<CompilationUnit>,
}

impl<'s> ProjectBuffer<'s> {
    pub(crate) fn new(suite: &'s ProjectSuite) -> Self {
        Self {
            suite,
            document: DocumentBuffer::new(suite.config().language.clone()),
            project: None,
            unit: None,
        }
    }

    /// The analyzed compilation unit.
    pub fn unit(&self) -> Result<&CompilationUnit, ProjectError> {
        self.unit.as_ref().ok_or(ProjectError::NotPrepared)
    }

    /// The project directory.
    pub fn project_path(&self) -> Result<&Path, ProjectError> {
        self.project
            .as_ref()
            .map(TransientProject::path)
            .ok_or(ProjectError::NotPrepared)
    }

    /// The underlying document buffer.
    pub fn document_buffer(&self) -> &DocumentBuffer {
        &self.document
    }

    /// The document, mutably.
    pub fn document_mut(&mut self) -> Result<&mut Document, ProjectError> {
        Ok(self.document.document_mut()?)
    }

    /// Write the current text to disk and re-analyze it.
    pub fn reload(&mut self) -> Result<&CompilationUnit, ProjectError> {
        let text = self.document.document()?.text();
        self.load(&text)
    }

    /// Delete the project, if one was created. Safe to call more than once.
    pub fn teardown(&mut self) -> Result<(), ProjectError> {
        self.unit = None;
        match self.project.take() {
            Some(project) => project.delete(),
            None => Ok(()),
        }
    }

    fn load(&mut self, text: &str) -> Result<&CompilationUnit, ProjectError> {
        let project = match self.project.take() {
            Some(project) => project,
            None => TransientProject::create(self.suite.config())?,
        };
        let project = self.project.insert(project);
        project.write_source(text)?;

        let analyzer = self.suite.analyzer()?;
        let document = self.document.document()?;
        let symbols = analyzer.analyze(document);
        tracing::debug!(
            path = %project.source_file().display(),
            version = document.version(),
            symbols = symbols.len(),
            "compilation unit loaded"
        );

        let unit = CompilationUnit::new(
            project.source_file().to_path_buf(),
            symbols,
            document.version(),
        );
        Ok(&*self.unit.insert(unit))
    }
}

impl HasDocument for ProjectBuffer<'_> {
    fn document(&self) -> Result<&Document, DocumentError> {
        self.document.document()
    }
}

impl Collaborator for ProjectBuffer<'_> {
    type Error = ProjectError;

    fn prepare(&mut self, text: &str) -> Result<(), Self::Error> {
        self.document.prepare(text)?;
        self.load(text)?;
        Ok(())
    }

    fn current_source(&self) -> String {
        self.document.current_source()
    }
}

impl EditBuffer for ProjectBuffer<'_> {
    fn char_count(&self) -> usize {
        self.document.char_count()
    }

    fn insert(&mut self, offset: usize, text: &str) -> Result<(), Self::Error> {
        Ok(self.document.insert(offset, text)?)
    }

    fn remove(&mut self, range: Range<usize>) -> Result<(), Self::Error> {
        Ok(self.document.remove(range)?)
    }

    fn replace(&mut self, range: Range<usize>, text: &str) -> Result<(), Self::Error> {
        Ok(self.document.replace(range, text)?)
    }
}
