//! Transient on-disk projects.

use crate::config::ProjectConfig;
use crate::error::ProjectError;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A uniquely named project directory that lives for one test.
///
/// [`TransientProject::delete`] removes it and reports failures. A project that is dropped
/// instead (for example while a panicking test unwinds) is removed on a best-effort basis.
#[derive(Debug)]
pub struct TransientProject {
    dir: TempDir,
    source_file: PathBuf,
}

impl TransientProject {
    /// Create an empty project under the configured root.
    pub fn create(config: &ProjectConfig) -> Result<Self, ProjectError> {
        let root = config.root_dir();
        fs::create_dir_all(&root).map_err(|source| ProjectError::Setup {
            path: root.clone(),
            source,
        })?;

        let dir = tempfile::Builder::new()
            .prefix(&config.name_prefix)
            .tempdir_in(&root)
            .map_err(|source| ProjectError::Setup { path: root, source })?;
        let source_file = config.source_file(dir.path());

        tracing::debug!(path = %dir.path().display(), "created transient project");
        Ok(Self { dir, source_file })
    }

    /// Project directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of the compilation unit.
    pub fn source_file(&self) -> &Path {
        &self.source_file
    }

    /// Write the compilation unit, creating parent directories as needed.
    pub fn write_source(&self, text: &str) -> Result<(), ProjectError> {
        let setup = |source| ProjectError::Setup {
            path: self.source_file.clone(),
            source,
        };
        if let Some(parent) = self.source_file.parent() {
            fs::create_dir_all(parent).map_err(setup)?;
        }
        fs::write(&self.source_file, text).map_err(setup)
    }

    /// Remove the project directory.
    pub fn delete(self) -> Result<(), ProjectError> {
        let path = self.dir.path().to_path_buf();
        tracing::debug!(path = %path.display(), "deleting transient project");
        self.dir
            .close()
            .map_err(|source| ProjectError::Teardown { path, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_write_delete() {
        let root = tempfile::tempdir().unwrap();
        let config = ProjectConfig::default()
            .with_root(root.path())
            .with_name_prefix("unit-");

        let project = TransientProject::create(&config).unwrap();
        let dir = project.path().to_path_buf();
        assert!(dir.starts_with(root.path()));
        assert!(
            dir.file_name()
                .unwrap()
                .to_string_lossy()
                .starts_with("unit-")
        );

        project.write_source("object A").unwrap();
        assert_eq!(
            fs::read_to_string(dir.join("src/Fixture.scala")).unwrap(),
            "object A"
        );

        project.delete().unwrap();
        assert!(!dir.exists());
    }

    #[test]
    fn test_drop_removes_directory() {
        let root = tempfile::tempdir().unwrap();
        let config = ProjectConfig::default().with_root(root.path());
        let project = TransientProject::create(&config).unwrap();
        let dir = project.path().to_path_buf();
        drop(project);
        assert!(!dir.exists());
    }

    #[test]
    fn test_delete_reports_missing_directory() {
        let root = tempfile::tempdir().unwrap();
        let config = ProjectConfig::default().with_root(root.path());
        let project = TransientProject::create(&config).unwrap();
        fs::remove_dir_all(project.path()).unwrap();

        let err = project.delete().unwrap_err();
        assert!(err.is_teardown());
    }
}
