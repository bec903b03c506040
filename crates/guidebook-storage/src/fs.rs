//! Filesystem storage backend.

use std::path::{Component, Path, PathBuf};

use crate::storage::{Storage, StorageError, StorageErrorKind};

/// Backend identifier used in error messages.
const BACKEND: &str = "Fs";

/// Filesystem storage rooted at a base directory.
///
/// All relative paths passed to [`Storage`] methods are resolved
/// against the root. Paths escaping the root are rejected.
#[derive(Debug)]
pub struct FsStorage {
    root: PathBuf,
}

impl FsStorage {
    /// Create a filesystem storage rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve a relative path against the root.
    ///
    /// Rejects absolute paths and `..` components so callers can't
    /// escape the root directory.
    fn resolve(&self, path: &str) -> Result<PathBuf, StorageError> {
        let relative = Path::new(path);
        let escapes = relative.components().any(|c| {
            matches!(
                c,
                Component::ParentDir | Component::RootDir | Component::Prefix(_)
            )
        });
        if escapes {
            return Err(StorageError::new(StorageErrorKind::InvalidPath)
                .with_backend(BACKEND)
                .with_path(path));
        }
        Ok(self.root.join(relative))
    }
}

impl Storage for FsStorage {
    fn read(&self, path: &str) -> Result<String, StorageError> {
        let full = self.resolve(path)?;
        std::fs::read_to_string(&full)
            .map_err(|e| StorageError::io(e, Some(full)).with_backend(BACKEND))
    }

    fn write(&self, path: &str, contents: &str) -> Result<(), StorageError> {
        let full = self.resolve(path)?;
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| StorageError::io(e, Some(parent.to_path_buf())).with_backend(BACKEND))?;
        }
        std::fs::write(&full, contents)
            .map_err(|e| StorageError::io(e, Some(full)).with_backend(BACKEND))
    }

    fn exists(&self, path: &str) -> bool {
        self.resolve(path).is_ok_and(|full| full.is_file())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn read_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("README.md"), "# Hello").unwrap();

        let storage = FsStorage::new(dir.path());
        assert_eq!(storage.read("README.md").unwrap(), "# Hello");
    }

    #[test]
    fn read_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FsStorage::new(dir.path());

        let err = storage.read("missing.md").unwrap_err();
        assert_eq!(err.kind, StorageErrorKind::NotFound);
    }

    #[test]
    fn write_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FsStorage::new(dir.path());

        storage
            .write("01-hello-world/index.html", "<html></html>")
            .unwrap();

        let written =
            std::fs::read_to_string(dir.path().join("01-hello-world/index.html")).unwrap();
        assert_eq!(written, "<html></html>");
    }

    #[test]
    fn exists_reflects_filesystem() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FsStorage::new(dir.path());

        assert!(!storage.exists("page.html"));
        storage.write("page.html", "x").unwrap();
        assert!(storage.exists("page.html"));
    }

    #[test]
    fn parent_dir_components_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FsStorage::new(dir.path());

        let err = storage.read("../outside.md").unwrap_err();
        assert_eq!(err.kind, StorageErrorKind::InvalidPath);
    }
}
