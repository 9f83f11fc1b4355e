//! Project layer errors.

use edit_fixture::FixtureError;
use edit_fixture_document::DocumentError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors of the project layer.
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error(transparent)]
    /// The fixture itself failed (malformed, mismatch, collaborator error).
    Fixture(#[from] FixtureError),

    #[error(transparent)]
    /// An edit against the project document failed.
    Document(#[from] DocumentError),

    #[error("invalid declaration pattern: {0}")]
    /// The declaration keywords did not form a valid pattern.
    Pattern(#[from] regex::Error),

    #[error("failed to set up project at {path}: {source}")]
    /// Creating the project directory or writing the source file failed.
    Setup {
        /// Path being created or written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    #[error("project has not been prepared")]
    /// The project was used before `prepare` created it.
    NotPrepared,

    #[error("failed to delete project {path}: {source}")]
    /// Removing the project directory failed.
    Teardown {
        /// Project directory.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    #[error("{fixture}\nproject teardown also failed: {teardown}")]
    /// The fixture failed and so did the teardown that followed it.
    FixtureAndTeardown {
        /// The fixture failure.
        fixture: FixtureError,
        /// The teardown failure.
        teardown: Box<ProjectError>,
    },
}

impl ProjectError {
    /// Returns `true` if project teardown failed, alone or after a fixture failure.
    pub fn is_teardown(&self) -> bool {
        matches!(
            self,
            ProjectError::Teardown { .. } | ProjectError::FixtureAndTeardown { .. }
        )
    }

    /// The fixture failure, if any.
    pub fn fixture(&self) -> Option<&FixtureError> {
        match self {
            ProjectError::Fixture(err) | ProjectError::FixtureAndTeardown { fixture: err, .. } => {
                Some(err)
            }
            _ => None,
        }
    }
}
