//! File-system metadata queries used by the resolver.
//!
//! The resolver never touches the file system directly. Everything it needs
//! to know about a path goes through [`MetadataProvider`], which keeps the
//! resolution pipeline testable and lets other platforms plug in their own
//! notion of an alias.

mod local;

use std::path::Path;

use crate::bookmark::AliasTarget;
use crate::error::Result;

pub use local::LocalFileSystem;

/// The four file-system primitives alias resolution depends on.
///
/// On a file system without alias files, `is_alias` returns `false` for every
/// path and the resolver degrades to printing normalized paths.
#[cfg_attr(test, mockall::automock)]
pub trait MetadataProvider {
    /// Whether an entry exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Whether `path` names a directory.
    fn is_directory(&self, path: &Path) -> bool;

    /// Whether `path` names an alias file.
    fn is_alias(&self, path: &Path) -> bool;

    /// Read the original item recorded in the alias at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the alias cannot be read, its payload is corrupt,
    /// or it records no target.
    fn resolve_alias_target(&self, path: &Path) -> Result<AliasTarget>;
}
