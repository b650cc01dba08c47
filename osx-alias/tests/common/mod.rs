//! Common test utilities for integration tests.
//!
//! This module provides a temporary directory tree in which tests create
//! plain files, directories and alias files.

use std::fs;
use std::path::{Path, PathBuf};

use osx_alias::bookmark::{BookmarkBuilder, BookmarkLayout};
use tempfile::TempDir;

/// A temporary directory tree for alias fixtures.
///
/// The directory is removed when the fixture is dropped.
pub struct AliasTree {
    dir: TempDir,
}

#[allow(dead_code)]
impl AliasTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create temp dir"),
        }
    }

    /// Root of the tree.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of `rel` inside the tree, as a string.
    pub fn path(&self, rel: &str) -> String {
        self.root().join(rel).to_string_lossy().into_owned()
    }

    /// Creates the directory `rel` and its parents.
    pub fn dir(&self, rel: &str) -> String {
        let path = self.root().join(rel);
        fs::create_dir_all(&path).expect("failed to create directory");
        path.to_string_lossy().into_owned()
    }

    /// Creates a plain file at `rel`.
    pub fn file(&self, rel: &str) -> String {
        self.write(rel, b"plain contents\n")
    }

    /// Creates an alias file at `rel` recording `target`.
    pub fn alias(&self, rel: &str, target: &str, is_directory: bool) -> String {
        let data = BookmarkBuilder::for_target(target, is_directory).build();
        self.write(rel, &data)
    }

    /// Creates an alias file using the in-memory bookmark layout.
    pub fn memory_alias(&self, rel: &str, target: &str, is_directory: bool) -> String {
        let data = BookmarkBuilder::for_target(target, is_directory)
            .layout(BookmarkLayout::Memory)
            .build();
        self.write(rel, &data)
    }

    /// Writes raw bytes to `rel`, creating parent directories.
    pub fn write(&self, rel: &str, data: &[u8]) -> String {
        let path: PathBuf = self.root().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent directory");
        }
        fs::write(&path, data).expect("failed to write file");
        path.to_string_lossy().into_owned()
    }
}
