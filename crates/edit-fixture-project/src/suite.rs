//! Per-suite context and the per-test project lifecycle.

use crate::analyzer::Analyzer;
use crate::buffer::ProjectBuffer;
use crate::config::ProjectConfig;
use crate::error::ProjectError;
use edit_fixture::{EditContext, Harness, Operation};
use std::sync::OnceLock;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Shared state for a group of project-backed fixtures.
///
/// The analyzer is built on first use and reused by every test of the suite. Each
/// [`ProjectSuite::run`] gets its own project, deleted when the run ends however it ends.
/// A suite is `Sync`, so it can live in a `static` shared by the tests of one file.
#[derive(Debug)]
pub struct ProjectSuite {
    config: ProjectConfig,
    analyzer: OnceLock<Result<Analyzer, regex::Error>>,
    analyzer_builds: AtomicUsize,
}

impl Default for ProjectSuite {
    fn default() -> Self {
        Self::new(ProjectConfig::from_env())
    }
}

impl ProjectSuite {
    /// Create a suite. Nothing is built until the first run.
    pub fn new(config: ProjectConfig) -> Self {
        Self {
            config,
            analyzer: OnceLock::new(),
            analyzer_builds: AtomicUsize::new(0),
        }
    }

    /// Suite configuration.
    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    /// The shared analyzer, built on first call.
    ///
    /// Concurrent first calls block on a single build. A pattern error is cached and returned
    /// again on every later call.
    pub fn analyzer(&self) -> Result<&Analyzer, ProjectError> {
        let built = self.analyzer.get_or_init(|| {
            self.analyzer_builds.fetch_add(1, Ordering::Relaxed);
            let built = Analyzer::new(&self.config.language);
            tracing::debug!(
                language = %self.config.language.name,
                ok = built.is_ok(),
                "analyzer built"
            );
            built
        });
        built.as_ref().map_err(|err| ProjectError::Pattern(err.clone()))
    }

    /// How many times the analyzer has been built.
    pub fn analyzer_builds(&self) -> usize {
        self.analyzer_builds.load(Ordering::Relaxed)
    }

    /// Run one fixture in a fresh project, then delete the project.
    ///
    /// A teardown failure is reported even when the fixture passed; when both fail the result is
    /// [`ProjectError::FixtureAndTeardown`].
    pub fn run<'s, O>(
        &'s self,
        input: &str,
        expected: &str,
        operation: O,
    ) -> Result<(), ProjectError>
    where
        O: Operation<ProjectBuffer<'s>>,
    {
        let mut harness = Harness::new(ProjectBuffer::new(self)).with_markers(self.config.markers);
        let outcome = harness.run(input, expected, operation);
        let teardown = harness.collaborator_mut().teardown();

        match (outcome, teardown) {
            (Ok(()), Ok(())) => Ok(()),
            (Err(fixture), Ok(())) => Err(ProjectError::Fixture(fixture)),
            (Ok(()), Err(teardown)) => Err(teardown),
            (Err(fixture), Err(teardown)) => Err(ProjectError::FixtureAndTeardown {
                fixture,
                teardown: Box::new(teardown),
            }),
        }
    }

    /// [`ProjectSuite::run`] with a closure operation.
    pub fn run_with<'s, F>(&'s self, input: &str, expected: &str, f: F) -> Result<(), ProjectError>
    where
        F: FnOnce(&mut EditContext<'_, ProjectBuffer<'s>>) -> Result<(), ProjectError>,
    {
        self.run(input, expected, f)
    }

    /// Run a fixture and panic with the rendered error if it or its teardown fails.
    #[track_caller]
    pub fn assert_edit<'s, O>(&'s self, input: &str, expected: &str, operation: O)
    where
        O: Operation<ProjectBuffer<'s>>,
    {
        if let Err(err) = self.run(input, expected, operation) {
            panic!("{err}");
        }
    }
}
