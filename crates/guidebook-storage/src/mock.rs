//! Mock storage implementation for testing.
//!
//! Provides [`MockStorage`] for unit testing without filesystem access.

use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use crate::storage::{Storage, StorageError, StorageErrorKind};

/// Backend identifier used in error messages.
const BACKEND: &str = "Mock";

/// Mock storage for testing.
///
/// Stores file contents in memory. Use the builder methods to seed
/// test data and to inject failures for specific paths.
///
/// # Example
///
/// ```
/// use guidebook_storage::{MockStorage, Storage};
///
/// let storage = MockStorage::new().with_file("guide/README.md", "# Guide");
///
/// assert_eq!(storage.read("guide/README.md").unwrap(), "# Guide");
/// ```
#[derive(Debug, Default)]
pub struct MockStorage {
    files: RwLock<HashMap<String, String>>,
    failing_reads: HashSet<String>,
    failing_writes: HashSet<String>,
}

impl MockStorage {
    /// Create a new empty mock storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file with the given content.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_file(self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.files
            .write()
            .unwrap()
            .insert(path.into(), content.into());
        self
    }

    /// Make reads of the given path fail with a permission error.
    #[must_use]
    pub fn with_failing_read(mut self, path: impl Into<String>) -> Self {
        self.failing_reads.insert(path.into());
        self
    }

    /// Make writes to the given path fail with a permission error.
    #[must_use]
    pub fn with_failing_write(mut self, path: impl Into<String>) -> Self {
        self.failing_writes.insert(path.into());
        self
    }

    /// Get the content written to a path, if any.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn written(&self, path: &str) -> Option<String> {
        self.files.read().unwrap().get(path).cloned()
    }
}

impl Storage for MockStorage {
    fn read(&self, path: &str) -> Result<String, StorageError> {
        if self.failing_reads.contains(path) {
            return Err(StorageError::new(StorageErrorKind::PermissionDenied)
                .with_backend(BACKEND)
                .with_path(path));
        }
        self.files
            .read()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| StorageError::not_found(path).with_backend(BACKEND))
    }

    fn write(&self, path: &str, contents: &str) -> Result<(), StorageError> {
        if self.failing_writes.contains(path) {
            return Err(StorageError::new(StorageErrorKind::PermissionDenied)
                .with_backend(BACKEND)
                .with_path(path));
        }
        self.files
            .write()
            .unwrap()
            .insert(path.to_owned(), contents.to_owned());
        Ok(())
    }

    fn exists(&self, path: &str) -> bool {
        self.files.read().unwrap().contains_key(path)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn read_seeded_file() {
        let storage = MockStorage::new().with_file("a.md", "# A");
        assert_eq!(storage.read("a.md").unwrap(), "# A");
    }

    #[test]
    fn read_missing_file_is_not_found() {
        let storage = MockStorage::new();
        let err = storage.read("missing.md").unwrap_err();
        assert_eq!(err.kind, StorageErrorKind::NotFound);
    }

    #[test]
    fn write_then_read_back() {
        let storage = MockStorage::new();
        storage.write("out/index.html", "<html></html>").unwrap();

        assert!(storage.exists("out/index.html"));
        assert_eq!(storage.written("out/index.html").unwrap(), "<html></html>");
    }

    #[test]
    fn injected_read_failure() {
        let storage = MockStorage::new()
            .with_file("a.md", "# A")
            .with_failing_read("a.md");

        let err = storage.read("a.md").unwrap_err();
        assert_eq!(err.kind, StorageErrorKind::PermissionDenied);
    }

    #[test]
    fn injected_write_failure() {
        let storage = MockStorage::new().with_failing_write("out.html");

        let err = storage.write("out.html", "x").unwrap_err();
        assert_eq!(err.kind, StorageErrorKind::PermissionDenied);
        assert!(!storage.exists("out.html"));
    }
}
