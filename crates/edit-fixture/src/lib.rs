#![warn(missing_docs)]
//! edit-fixture - marked-text fixtures for editing operations
//!
//! # Overview
//!
//! A fixture describes an edit as two strings: the input with a cursor marker (`^`) and the
//! expected output with the cursor where the edit should leave it. The harness strips the
//! markers, hands the plain text to a [`Collaborator`], runs the [`Operation`] under test,
//! re-inserts the cursor into the resulting text and compares.
//!
//! `$` may be placed anywhere to make trailing whitespace visible; it is removed before the
//! text is used and never takes part in the comparison.
//!
//! ```text
//! input      "object A^"
//!   ├─ parse ──────────►  ("object A", 8)
//!   ├─ prepare ────────►  collaborator holds "object A"
//!   ├─ execute ────────►  insert "B" at 8, cursor 9
//!   ├─ format ─────────►  "object AB^"
//!   └─ compare with ───►  "object AB^"   (expected)
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use edit_fixture::{Harness, Insert, StringBuffer};
//!
//! let mut harness = Harness::new(StringBuffer::new());
//! harness
//!     .input("object A^")
//!     .becomes("object AB^")
//!     .after(Insert::new("B"))
//!     .unwrap();
//!
//! let err = harness
//!     .run("object A^", "object AX^", Insert::new("B"))
//!     .unwrap_err();
//! let mismatch = err.mismatch().unwrap();
//! assert_eq!(mismatch.expected, "object AX^");
//! assert_eq!(mismatch.actual, "object AB^");
//! ```
//!
//! # Module Description
//!
//! - [`marker`] - cursor/boundary marker parsing and formatting
//! - [`harness`] - fixture executor and fluent builder
//! - [`operation`] - operation trait, edit context and primitive edits
//! - [`collaborator`] - backing store traits and the in-memory [`StringBuffer`]
//! - [`error`] - [`FixtureError`] and the mismatch report
//!
//! Richer collaborators live in `edit-fixture-document` (rope-backed documents with partitions)
//! and `edit-fixture-project` (throwaway projects with symbol analysis).

pub mod collaborator;
pub mod error;
pub mod harness;
pub mod marker;
pub mod operation;

pub use collaborator::{BufferError, Collaborator, EditBuffer, StringBuffer};
pub use error::{BoxError, FixtureError, FixtureRole, Mismatch, Stage};
pub use harness::{Expectation, Harness, Input, assert_edit};
pub use marker::{MarkerConfig, ParsedFixture, format, normalize_expected, parse};
pub use operation::{
    Chain, DeleteBackward, DeleteForward, EditContext, Identity, Insert, MoveCursor, Operation,
    Replace,
};
