//! Fixture executor.
//!
//! A run is linear: parse both fixtures, prepare the collaborator, execute the operation, read
//! the text back, format it with the cursor and compare. Nothing is retried, and a malformed
//! fixture stops the run before the collaborator is touched.

use crate::collaborator::{Collaborator, StringBuffer};
use crate::error::{FixtureError, FixtureRole, Mismatch, Stage};
use crate::marker::MarkerConfig;
use crate::operation::{EditContext, Operation};

/// Runs fixtures against a collaborator.
///
/// The cursor offset is per-run state: every run starts from the offset parsed out of its input.
#[derive(Debug)]
pub struct Harness<C> {
    collaborator: C,
    markers: MarkerConfig,
    cursor: usize,
}

impl<C: Default> Default for Harness<C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<C> Harness<C> {
    /// Create a harness with the default `^`/`$` markers.
    pub fn new(collaborator: C) -> Self {
        Self {
            collaborator,
            markers: MarkerConfig::default(),
            cursor: 0,
        }
    }

    /// Use custom marker characters.
    pub fn with_markers(mut self, markers: MarkerConfig) -> Self {
        self.markers = markers;
        self
    }

    /// Marker configuration in use.
    pub fn markers(&self) -> MarkerConfig {
        self.markers
    }

    /// Cursor offset at the end of the last run.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The collaborator, for assertions beyond the marked text.
    pub fn collaborator(&self) -> &C {
        &self.collaborator
    }

    /// The collaborator, mutably.
    pub fn collaborator_mut(&mut self) -> &mut C {
        &mut self.collaborator
    }

    /// Consume the harness and return the collaborator.
    pub fn into_inner(self) -> C {
        self.collaborator
    }
}

impl<C: Collaborator> Harness<C> {
    /// Run `operation` on `input` and compare the result with `expected`.
    pub fn run<O>(&mut self, input: &str, expected: &str, operation: O) -> Result<(), FixtureError>
    where
        O: Operation<C>,
    {
        let parsed = self.markers.parse_as(input, FixtureRole::Input)?;
        let expected = self.markers.normalize_expected(expected)?;

        self.cursor = parsed.cursor_offset;
        self.collaborator
            .prepare(&parsed.plain_text)
            .map_err(|err| FixtureError::Collaborator {
                stage: Stage::Prepare,
                source: Box::new(err),
            })?;
        tracing::trace!(cursor = self.cursor, "fixture prepared");

        let name = operation.name().to_string();
        let mut cx = EditContext::new(&mut self.collaborator, &mut self.cursor);
        operation
            .execute(&mut cx)
            .map_err(|err| FixtureError::Collaborator {
                stage: Stage::Execute,
                source: Box::new(err),
            })?;
        tracing::trace!(operation = %name, cursor = self.cursor, "operation executed");

        let actual = self
            .markers
            .format(&self.collaborator.current_source(), self.cursor)?;

        if actual == expected {
            tracing::debug!(operation = %name, "fixture passed");
            Ok(())
        } else {
            tracing::debug!(operation = %name, %expected, %actual, "fixture mismatch");
            Err(FixtureError::Mismatch(Mismatch { expected, actual }))
        }
    }

    /// [`Harness::run`] with a closure operation.
    pub fn run_with<F>(&mut self, input: &str, expected: &str, f: F) -> Result<(), FixtureError>
    where
        F: FnOnce(&mut EditContext<'_, C>) -> Result<(), C::Error>,
    {
        self.run(input, expected, f)
    }

    /// Start a fluent fixture: `harness.input(a).becomes(b).after(op)`.
    pub fn input<'h>(&'h mut self, input: &'h str) -> Input<'h, C> {
        Input {
            harness: self,
            input,
        }
    }

    /// Run a fixture and panic with the rendered error if it fails.
    #[track_caller]
    pub fn assert_edit<O>(&mut self, input: &str, expected: &str, operation: O)
    where
        O: Operation<C>,
    {
        if let Err(err) = self.run(input, expected, operation) {
            panic!("{err}");
        }
    }
}

/// First half of the fluent form, holding the input.
pub struct Input<'h, C> {
    harness: &'h mut Harness<C>,
    input: &'h str,
}

impl<'h, C: Collaborator> Input<'h, C> {
    /// Bind the expected output.
    pub fn becomes(self, expected: &'h str) -> Expectation<'h, C> {
        Expectation {
            harness: self.harness,
            input: self.input,
            expected,
        }
    }
}

/// Input and expected output bound together; the fixture runs on [`Expectation::after`].
pub struct Expectation<'h, C> {
    harness: &'h mut Harness<C>,
    input: &'h str,
    expected: &'h str,
}

impl<C: Collaborator> Expectation<'_, C> {
    /// Run the fixture with `operation`.
    pub fn after<O: Operation<C>>(self, operation: O) -> Result<(), FixtureError> {
        self.harness.run(self.input, self.expected, operation)
    }

    /// Run the fixture with a closure operation.
    pub fn after_fn<F>(self, f: F) -> Result<(), FixtureError>
    where
        F: FnOnce(&mut EditContext<'_, C>) -> Result<(), C::Error>,
    {
        self.harness.run(self.input, self.expected, f)
    }
}

/// Run a fixture against a fresh [`StringBuffer`], panicking on failure.
#[track_caller]
pub fn assert_edit<O: Operation<StringBuffer>>(input: &str, expected: &str, operation: O) {
    Harness::new(StringBuffer::new()).assert_edit(input, expected, operation);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collaborator::BufferError;
    use crate::operation::{Identity, Insert};
    use std::cell::Cell;

    #[test]
    fn test_run_resets_cursor_per_fixture() {
        let mut harness = Harness::new(StringBuffer::new());
        harness.run("ab^", "abc^", Insert::new("c")).unwrap();
        assert_eq!(harness.cursor(), 3);

        harness.run("^ab", "^ab", Identity).unwrap();
        assert_eq!(harness.cursor(), 0);
        assert_eq!(harness.collaborator().text(), "ab");
    }

    #[test]
    fn test_malformed_expected_stops_before_prepare() {
        let ran = Cell::new(false);
        let mut harness = Harness::new(StringBuffer::new());
        let err = harness
            .run_with("a^", "a", |_cx| {
                ran.set(true);
                Ok(())
            })
            .unwrap_err();

        assert!(err.is_malformed());
        assert!(!ran.get());
        assert_eq!(harness.collaborator().text(), "");
    }

    #[test]
    fn test_operation_error_is_propagated() {
        let mut harness = Harness::new(StringBuffer::new());
        let err = harness
            .run_with("a^", "a^", |_cx| {
                Err(BufferError::InvalidOffset { offset: 9, len: 1 })
            })
            .unwrap_err();

        match err {
            FixtureError::Collaborator { stage, source } => {
                assert_eq!(stage, Stage::Execute);
                assert_eq!(source.to_string(), "offset 9 is out of bounds (length 1)");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_cursor_past_end_is_reported() {
        let mut harness = Harness::new(StringBuffer::new());
        let err = harness
            .run_with("ab^", "ab^", |cx| {
                cx.set_cursor(7);
                Ok(())
            })
            .unwrap_err();
        assert!(matches!(
            err,
            FixtureError::CursorOutOfBounds { offset: 7, len: 2 }
        ));
    }
}
