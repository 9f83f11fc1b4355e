//! The analyzed source file of a project.

use crate::analyzer::Symbol;
use std::path::{Path, PathBuf};

/// A source file loaded into a project, with the declarations found in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilationUnit {
    path: PathBuf,
    symbols: Vec<Symbol>,
    version: u64,
}

impl CompilationUnit {
    pub(crate) fn new(path: PathBuf, symbols: Vec<Symbol>, version: u64) -> Self {
        Self {
            path,
            symbols,
            version,
        }
    }

    /// Absolute path of the source file on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Declarations in document order.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Document version the unit was analyzed at.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// The declaration whose name touches `offset` (start and end inclusive).
    pub fn symbol_at(&self, offset: usize) -> Option<&Symbol> {
        self.symbols
            .iter()
            .find(|s| s.range.start <= offset && offset <= s.range.end)
    }

    /// The first declaration named `name`.
    pub fn symbol_named(&self, name: &str) -> Option<&Symbol> {
        self.symbols.iter().find(|s| s.name == name)
    }
}
