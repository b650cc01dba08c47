//! Metadata provider backed by the local file system.

use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use crate::bookmark::{AliasTarget, Bookmark};
use crate::error::{Error, Result};
use crate::provider::MetadataProvider;

/// Reads metadata straight from the local file system.
///
/// Alias files are recognized by content: a regular file whose data starts
/// with a complete bookmark header (see [`Bookmark::has_header`]). Symbolic
/// links are never treated as aliases, even when they point at one.
///
/// # Examples
///
/// ```
/// use osx_alias::provider::{LocalFileSystem, MetadataProvider};
/// use std::path::Path;
///
/// let fs = LocalFileSystem::new();
/// assert!(fs.exists(Path::new("/")));
/// assert!(fs.is_directory(Path::new("/")));
/// assert!(!fs.is_alias(Path::new("/")));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl LocalFileSystem {
    /// Create a provider for the local file system.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl MetadataProvider for LocalFileSystem {
    fn exists(&self, path: &Path) -> bool {
        fs::symlink_metadata(path).is_ok()
    }

    fn is_directory(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_alias(&self, path: &Path) -> bool {
        let len = match fs::symlink_metadata(path) {
            Ok(meta) if meta.file_type().is_file() => meta.len(),
            _ => return false,
        };

        let mut head = [0u8; 16];
        match File::open(path).and_then(|mut file| file.read_exact(&mut head)) {
            Ok(()) => Bookmark::has_header(&head, len),
            Err(e) => {
                log::debug!("cannot sniff {}: {e}", path.display());
                false
            }
        }
    }

    fn resolve_alias_target(&self, path: &Path) -> Result<AliasTarget> {
        let data = fs::read(path).map_err(|source| Error::AliasUnreadable {
            path: path.to_path_buf(),
            source,
        })?;

        let bookmark = Bookmark::parse(&data).map_err(|source| Error::InvalidAlias {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!(
            "decoded {} table(s) of contents from {}",
            bookmark.tocs().len(),
            path.display()
        );

        bookmark.target().ok_or_else(|| Error::MissingTarget {
            path: path.to_path_buf(),
        })
    }
}
