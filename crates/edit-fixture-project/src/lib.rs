#![warn(missing_docs)]
//! `edit-fixture-project` - throwaway projects for `edit-fixture` tests.
//!
//! Some operations need more than a text buffer: they look up declarations or expect the
//! source to exist on disk. [`ProjectSuite`] provides that context:
//!
//! - the [`Analyzer`] is built lazily, once per suite;
//! - every run creates a [`TransientProject`] (a fresh temp directory holding the fixture text
//!   as a [`CompilationUnit`]) and deletes it afterwards, on success, mismatch, error or panic.
//!
//! ```rust
//! use edit_fixture::EditBuffer;
//! use edit_fixture_project::{ProjectConfig, ProjectSuite};
//!
//! let root = tempfile::tempdir().unwrap();
//! let suite = ProjectSuite::new(ProjectConfig::default().with_root(root.path()));
//!
//! suite
//!     .run_with("object A {\n  def run = ^\n}", "object A {\n  def run = run^\n}", |cx| {
//!         let name = cx.buffer().unit()?.symbol_named("run").unwrap().name.clone();
//!         let at = cx.cursor();
//!         cx.buffer_mut().insert(at, &name)?;
//!         cx.set_cursor(at + name.len());
//!         Ok(())
//!     })
//!     .unwrap();
//! ```

pub mod analyzer;
pub mod buffer;
pub mod config;
pub mod error;
pub mod project;
pub mod suite;
pub mod unit;

pub use analyzer::{Analyzer, Symbol};
pub use buffer::ProjectBuffer;
pub use config::{PROJECT_ROOT_ENV, ProjectConfig};
pub use error::ProjectError;
pub use project::TransientProject;
pub use suite::ProjectSuite;
pub use unit::CompilationUnit;
