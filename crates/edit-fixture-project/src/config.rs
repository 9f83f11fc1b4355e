//! Project layer configuration.

use edit_fixture::MarkerConfig;
use edit_fixture_lang::LanguageConfig;
use std::path::{Path, PathBuf};

/// Environment variable overriding the directory projects are created in.
pub const PROJECT_ROOT_ENV: &str = "EDIT_FIXTURE_PROJECT_ROOT";

/// How transient projects are laid out.
#[derive(Debug, Clone)]
pub struct ProjectConfig {
    /// Prefix of each project directory name; a random suffix keeps them unique.
    pub name_prefix: String,
    /// Path of the compilation unit, relative to the project directory.
    pub source_path: PathBuf,
    /// Language of the compilation unit.
    pub language: LanguageConfig,
    /// Parent directory for projects. `None` means the system temp directory.
    pub root: Option<PathBuf>,
    /// Fixture markers.
    pub markers: MarkerConfig,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name_prefix: "edit-fixture-".to_string(),
            source_path: PathBuf::from("src/Fixture.scala"),
            language: LanguageConfig::scala_like(),
            root: None,
            markers: MarkerConfig::default(),
        }
    }
}

impl ProjectConfig {
    /// Defaults, with `root` taken from `EDIT_FIXTURE_PROJECT_ROOT` when it is set and non-empty.
    pub fn from_env() -> Self {
        let root = std::env::var_os(PROJECT_ROOT_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);
        Self {
            root,
            ..Self::default()
        }
    }

    /// Set the directory name prefix.
    pub fn with_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.name_prefix = prefix.into();
        self
    }

    /// Set the compilation unit path.
    pub fn with_source_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.source_path = path.into();
        self
    }

    /// Set the language.
    pub fn with_language(mut self, language: LanguageConfig) -> Self {
        self.language = language;
        self
    }

    /// Create projects under `root`.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    /// Set the fixture markers.
    pub fn with_markers(mut self, markers: MarkerConfig) -> Self {
        self.markers = markers;
        self
    }

    /// Directory projects are created in.
    pub fn root_dir(&self) -> PathBuf {
        self.root.clone().unwrap_or_else(std::env::temp_dir)
    }

    pub(crate) fn source_file(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.source_path)
    }
}
