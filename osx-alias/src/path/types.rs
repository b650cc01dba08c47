//! Core types for path handling.
//!
//! [`ProbedPath`] is the single value that flows through resolution: the
//! input string, its absolute form and the three facts queried from the file
//! system. [`DirectoryHandle`] is the cursor used to walk an alias's
//! ancestor chain.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Error, Result};
use crate::path::normalize::{absolutize, with_directory_suffix};
use crate::provider::MetadataProvider;

/// An input path after standardization and file-system probing.
///
/// # Examples
///
/// ```
/// use osx_alias::path::ProbedPath;
/// use osx_alias::provider::LocalFileSystem;
/// use std::path::Path;
///
/// let probed = ProbedPath::probe("../..", Path::new("/"), &LocalFileSystem::new());
/// assert_eq!(probed.absolute(), "/");
/// assert!(probed.exists());
/// assert!(probed.segments().is_empty());
/// assert!(!probed.should_resolve());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbedPath {
    raw: String,
    absolute: String,
    exists: bool,
    is_directory: bool,
    is_alias: bool,
}

impl ProbedPath {
    /// Standardize `raw` against `cwd` and query the provider about it.
    ///
    /// The alias check is skipped for paths that do not exist.
    pub fn probe<P: MetadataProvider + ?Sized>(raw: &str, cwd: &Path, provider: &P) -> Self {
        let standardized = absolutize(raw, cwd);
        let query = Path::new(&standardized);

        let is_directory = provider.is_directory(query);
        let exists = provider.exists(query);
        let is_alias = exists && provider.is_alias(query);

        Self {
            raw: raw.to_string(),
            absolute: with_directory_suffix(&standardized, is_directory),
            exists,
            is_directory,
            is_alias,
        }
    }

    /// The input as given.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Absolute, standardized form; ends with `/` iff it is a directory.
    #[must_use]
    pub fn absolute(&self) -> &str {
        &self.absolute
    }

    /// Whether an entry exists at the path.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.exists
    }

    /// Whether the path is a directory.
    #[must_use]
    pub fn is_directory(&self) -> bool {
        self.is_directory
    }

    /// Whether the path is an alias. Always false for missing paths.
    #[must_use]
    pub fn is_alias(&self) -> bool {
        self.is_alias
    }

    /// Non-empty components of the absolute path, topmost first.
    #[must_use]
    pub fn segments(&self) -> Vec<&str> {
        self.absolute.split('/').filter(|s| !s.is_empty()).collect()
    }

    /// Whether this path names an alias that should be followed.
    ///
    /// The root has no basename and is never followed.
    #[must_use]
    pub fn should_resolve(&self) -> bool {
        self.exists && self.is_alias && !self.segments().is_empty()
    }
}

/// A directory reached while walking down from the root.
///
/// # Examples
///
/// ```
/// use osx_alias::path::DirectoryHandle;
/// use osx_alias::provider::LocalFileSystem;
///
/// let fs = LocalFileSystem::new();
/// let root = DirectoryHandle::root();
/// assert!(root.descend(&fs, "no-such-directory-here").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryHandle {
    path: PathBuf,
}

impl DirectoryHandle {
    /// The file-system root.
    #[must_use]
    pub fn root() -> Self {
        Self {
            path: PathBuf::from("/"),
        }
    }

    /// Path of this directory.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Move into the child directory `name`.
    ///
    /// # Errors
    ///
    /// Returns `AncestorNotFound` if the child does not exist or is not a
    /// directory.
    pub fn descend<P: MetadataProvider + ?Sized>(&self, provider: &P, name: &str) -> Result<Self> {
        let path = self.path.join(name);
        if provider.exists(&path) && provider.is_directory(&path) {
            Ok(Self { path })
        } else {
            Err(Error::AncestorNotFound { path })
        }
    }

    /// Look up the entry `name` in this directory.
    ///
    /// # Errors
    ///
    /// Returns `AliasNotFound` if no such entry exists.
    pub fn entry<P: MetadataProvider + ?Sized>(&self, provider: &P, name: &str) -> Result<PathBuf> {
        let path = self.path.join(name);
        if provider.exists(&path) {
            Ok(path)
        } else {
            Err(Error::AliasNotFound { path })
        }
    }
}
