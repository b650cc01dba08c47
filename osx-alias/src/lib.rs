#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # osx-alias
//!
//! A library for resolving macOS Finder alias files to the items they point
//! at.
//!
//! Modern alias files carry Apple bookmark data in their data fork. This
//! crate decodes that data directly, so aliases can be resolved on any host
//! that can read the file.
//!
//! ## Core Types
//!
//! - [`AliasResolver`]: turns an input path into its target path
//! - [`MetadataProvider`] and [`LocalFileSystem`]: file-system queries
//! - [`bookmark::Bookmark`] and [`AliasTarget`]: the bookmark codec
//! - [`Config`] and [`ConfigBuilder`]: runtime settings
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use osx_alias::bookmark::{Bookmark, BookmarkBuilder};
//!
//! let data = BookmarkBuilder::for_target("/Users/x/Projects", true).build();
//! let target = Bookmark::parse(&data).unwrap().target().unwrap();
//! assert_eq!(target.path(), "/Users/x/Projects");
//! assert!(target.is_directory());
//! ```

pub mod bookmark;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod logging;
pub mod path;
pub mod provider;

// Re-export key types at crate root for convenience
pub use bookmark::AliasTarget;
pub use config::{Config, ConfigBuilder};
pub use diagnostics::{Diagnostics, NoopDiagnostics};
pub use error::{Error, Result};
pub use logging::{LogLevel, Logger};
pub use path::AliasResolver;
pub use provider::{LocalFileSystem, MetadataProvider};
