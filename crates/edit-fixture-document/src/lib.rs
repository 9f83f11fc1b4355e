#![warn(missing_docs)]
//! `edit-fixture-document` - a document collaborator for `edit-fixture`.
//!
//! [`DocumentBuffer`] binds the harness to a [`Document`]: rope-backed text with a line index,
//! content partitions (code, comments, literals) and a log of every edit. Operations reach the
//! document through [`HasDocument`] when they need more than plain text edits.
//!
//! ```rust
//! use edit_fixture::{Harness, Insert};
//! use edit_fixture_document::{DocumentBuffer, HasDocument, PartitionKind};
//! use edit_fixture_lang::LanguageConfig;
//!
//! let mut harness = Harness::new(DocumentBuffer::new(LanguageConfig::scala_like()));
//! harness
//!     .run("val s = \"ab^\"", "val s = \"abc^\"", Insert::new("c"))
//!     .unwrap();
//!
//! let document = harness.collaborator().document().unwrap();
//! assert_eq!(document.partition_at(10).unwrap().kind, PartitionKind::String);
//! assert_eq!(document.deltas().len(), 1);
//! ```

pub mod buffer;
pub mod delta;
pub mod document;
pub mod error;
pub mod line_index;
pub mod partition;

pub use buffer::{DeleteGrapheme, DocumentBuffer, HasDocument};
pub use delta::TextDelta;
pub use document::Document;
pub use error::DocumentError;
pub use line_index::LineIndex;
pub use partition::{Partition, PartitionKind, partition};
