//! Error taxonomy of the harness.
//!
//! A [`FixtureError::MalformedFixture`] means the test was written wrong and is raised before
//! anything touches the collaborator. A [`FixtureError::Mismatch`] is the regular assertion
//! failure. Everything the collaborator or the operation reports is carried through unchanged in
//! [`FixtureError::Collaborator`].

use pretty_assertions::StrComparison;
use std::fmt;

/// Boxed error produced by a collaborator or an operation.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Which half of a fixture a marker error was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureRole {
    /// The marked input text.
    Input,
    /// The marked expected output.
    Expected,
}

impl fmt::Display for FixtureRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixtureRole::Input => f.write_str("input"),
            FixtureRole::Expected => f.write_str("expected output"),
        }
    }
}

/// The harness stage a collaborator error was raised in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// `Collaborator::prepare`.
    Prepare,
    /// `Operation::execute`.
    Execute,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Prepare => f.write_str("prepare"),
            Stage::Execute => f.write_str("execute"),
        }
    }
}

/// Expected and actual marked text of a failed comparison.
///
/// Both strings are kept verbatim; `Display` renders them followed by a line diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    /// Expected output with boundary markers stripped.
    pub expected: String,
    /// Current text with the cursor marker re-inserted.
    pub actual: String,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "fixture output mismatch")?;
        writeln!(f, "expected: {:?}", self.expected)?;
        writeln!(f, "actual:   {:?}", self.actual)?;
        writeln!(f)?;
        write!(f, "{}", StrComparison::new(&self.expected, &self.actual))
    }
}

/// Errors produced while running a fixture.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("malformed {role} fixture: expected exactly one cursor marker, found {cursor_count} in {fixture:?}")]
    /// The input or expected string does not contain exactly one cursor marker.
    MalformedFixture {
        /// Which string was malformed.
        role: FixtureRole,
        /// Number of cursor markers found.
        cursor_count: usize,
        /// The offending fixture text.
        fixture: String,
    },

    #[error("{0}")]
    /// The formatted actual output differs from the expected output.
    Mismatch(Mismatch),

    #[error("cursor offset {offset} is outside the text (length {len})")]
    /// The cursor ended up past the end of the text.
    CursorOutOfBounds {
        /// Cursor offset (characters).
        offset: usize,
        /// Text length (characters).
        len: usize,
    },

    #[error("cursor and whitespace boundary markers must differ (both {0:?})")]
    /// A marker configuration uses the same character twice.
    InvalidMarkers(char),

    #[error("collaborator failed during {stage}: {source}")]
    /// The collaborator or the operation reported an error.
    Collaborator {
        /// Stage the error was raised in.
        stage: Stage,
        /// The underlying error.
        #[source]
        source: BoxError,
    },
}

impl FixtureError {
    /// Returns the mismatch report if this is an assertion failure.
    pub fn mismatch(&self) -> Option<&Mismatch> {
        match self {
            FixtureError::Mismatch(mismatch) => Some(mismatch),
            _ => None,
        }
    }

    /// Returns `true` for fixture-authoring errors raised before any side effect.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            FixtureError::MalformedFixture { .. } | FixtureError::InvalidMarkers(_)
        )
    }
}
