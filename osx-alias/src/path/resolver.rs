//! Alias resolution.
//!
//! This module turns an input path into either its normalized absolute form
//! or, when it names an alias, the path of the alias's original item.

use std::path::{Path, PathBuf};

use serde_json::json;

use crate::diagnostics::{Diagnostics, NoopDiagnostics};
use crate::error::Result;
use crate::path::normalize::with_directory_suffix;
use crate::path::types::{DirectoryHandle, ProbedPath};
use crate::provider::{LocalFileSystem, MetadataProvider};

/// Resolves input paths, following alias files to their targets.
///
/// Resolution never fails for ordinary paths: missing paths and paths that
/// are not aliases come back in normalized absolute form, with a trailing
/// separator for directories. Only an alias whose target cannot be looked
/// up produces an error.
///
/// # Examples
///
/// ```
/// use osx_alias::AliasResolver;
///
/// let resolver = AliasResolver::new("/");
/// assert_eq!(resolver.working_directory(), std::path::Path::new("/"));
/// assert_eq!(resolver.resolve(None).unwrap(), "/");
/// assert_eq!(
///     resolver.resolve(Some("/no/such/place/../file")).unwrap(),
///     "/no/such/file"
/// );
/// ```
pub struct AliasResolver<P = LocalFileSystem> {
    provider: P,
    working_directory: PathBuf,
    diagnostics: Box<dyn Diagnostics>,
}

impl AliasResolver<LocalFileSystem> {
    /// Create a resolver over the local file system.
    #[must_use]
    pub fn new(working_directory: impl Into<PathBuf>) -> Self {
        Self::with_provider(LocalFileSystem::new(), working_directory)
    }
}

impl<P: MetadataProvider> AliasResolver<P> {
    /// Create a resolver over a custom metadata provider.
    #[must_use]
    pub fn with_provider(provider: P, working_directory: impl Into<PathBuf>) -> Self {
        Self {
            provider,
            working_directory: working_directory.into(),
            diagnostics: Box::new(NoopDiagnostics),
        }
    }

    /// Send diagnostic records to `diagnostics`.
    #[must_use]
    pub fn with_diagnostics(mut self, diagnostics: Box<dyn Diagnostics>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Directory relative inputs are resolved against.
    #[must_use]
    pub fn working_directory(&self) -> &Path {
        &self.working_directory
    }

    /// Standardize and probe `input`. Absent or empty input means `"."`.
    #[must_use]
    pub fn probe(&self, input: Option<&str>) -> ProbedPath {
        let raw = match input {
            Some(s) if !s.is_empty() => s,
            _ => ".",
        };
        let probed = ProbedPath::probe(raw, &self.working_directory, &self.provider);
        self.diagnostics.record(
            "probe",
            json!({
                "raw": probed.raw(),
                "absolute": probed.absolute(),
                "exists": probed.exists(),
                "is_alias": probed.is_alias(),
                "is_directory": probed.is_directory(),
            }),
        );
        probed
    }

    /// Resolve `input` to the path it stands for.
    ///
    /// # Errors
    ///
    /// Returns an error only when `input` is an alias and its target cannot
    /// be determined: an ancestor directory cannot be traversed, the alias
    /// entry vanished, or the alias is unreadable or records no target.
    pub fn resolve(&self, input: Option<&str>) -> Result<String> {
        let probed = self.probe(input);

        let (output, resolved_alias) = if probed.should_resolve() {
            (self.follow(&probed)?, true)
        } else {
            (probed.absolute().to_string(), false)
        };

        self.diagnostics.record(
            "result",
            json!({
                "input": probed.raw(),
                "output": output,
                "resolved_alias": resolved_alias,
            }),
        );
        Ok(output)
    }

    fn follow(&self, probed: &ProbedPath) -> Result<String> {
        let segments = probed.segments();
        let Some((basename, ancestors)) = segments.split_last() else {
            return Ok(probed.absolute().to_string());
        };

        let parent = ancestors
            .iter()
            .try_fold(DirectoryHandle::root(), |dir, name| {
                dir.descend(&self.provider, name)
            })?;
        let alias = parent.entry(&self.provider, basename)?;
        let target = self.provider.resolve_alias_target(&alias)?;

        self.diagnostics.record(
            "alias",
            json!({
                "absolute": probed.absolute(),
                "segments": segments,
                "basename": basename,
                "target": target,
            }),
        );

        let is_directory =
            target.is_directory() || self.provider.is_directory(Path::new(target.path()));
        Ok(with_directory_suffix(target.path(), is_directory))
    }
}
