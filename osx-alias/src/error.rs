//! Error types for the osx-alias library.
//!
//! Resolution of an ordinary path never fails: paths that do not exist or are
//! not aliases pass through unchanged. The variants below cover the one
//! failure class the library has, looking up the target of a confirmed alias,
//! plus configuration and I/O problems surfaced to the CLI.

use std::path::PathBuf;

use thiserror::Error;

use crate::bookmark::BookmarkError;

/// Result type alias for operations that may fail with an osx-alias error.
///
/// # Examples
///
/// ```
/// use osx_alias::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("/Users/x/".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the osx-alias library.
#[derive(Debug, Error)]
pub enum Error {
    /// An ancestor directory of the alias could not be traversed.
    #[error("ancestor directory not found: {}", path.display())]
    AncestorNotFound {
        /// The ancestor that does not exist or is not a directory.
        path: PathBuf,
    },

    /// The alias entry disappeared from its enclosing directory.
    #[error("alias not found: {}", path.display())]
    AliasNotFound {
        /// The path of the missing alias entry.
        path: PathBuf,
    },

    /// The alias file could not be read.
    #[error("cannot read alias {}: {source}", path.display())]
    AliasUnreadable {
        /// The alias file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The alias payload is corrupt.
    #[error("invalid alias {}: {source}", path.display())]
    InvalidAlias {
        /// The alias file.
        path: PathBuf,
        /// The decoding failure.
        #[source]
        source: BookmarkError,
    },

    /// The alias decoded but records no original item.
    #[error("alias {} does not record a target", path.display())]
    MissingTarget {
        /// The alias file.
        path: PathBuf,
    },

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field or environment variable that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if this error came from looking up an alias target.
    ///
    /// # Examples
    ///
    /// ```
    /// use osx_alias::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::AncestorNotFound { path: PathBuf::from("/Users/gone") };
    /// assert!(err.is_alias_failure());
    ///
    /// let err = Error::Validation { field: "PWD".into(), message: "bad".into() };
    /// assert!(!err.is_alias_failure());
    /// ```
    #[must_use]
    pub fn is_alias_failure(&self) -> bool {
        matches!(
            self,
            Self::AncestorNotFound { .. }
                | Self::AliasNotFound { .. }
                | Self::AliasUnreadable { .. }
                | Self::InvalidAlias { .. }
                | Self::MissingTarget { .. }
        )
    }
}
