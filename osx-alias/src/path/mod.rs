//! Path resolution with alias following.
//!
//! # Key Concepts
//!
//! ## Standardization
//!
//! Input strings are collapsed without touching the file system:
//! - Expanding a leading tilde (~) to the home directory
//! - Dropping empty and `.` components, resolving `..` for rooted paths
//! - Prefixing relative paths with the working directory
//!
//! ## Probing
//!
//! The absolute path is then checked through a
//! [`MetadataProvider`](crate::provider::MetadataProvider): is it a directory
//! (directories gain a trailing `/`), does it exist, and is it an alias.
//!
//! ## Following
//!
//! An alias is looked up by walking its ancestor chain from the root and
//! reading the original item recorded in it. Anything else passes through in
//! its absolute form.
//!
//! # Examples
//!
//! ```no_run
//! use osx_alias::AliasResolver;
//!
//! let resolver = AliasResolver::new("/Users/x");
//! let target = resolver.resolve(Some("Desktop/link.alias")).unwrap();
//! println!("{target}");
//! ```

pub mod normalize;
pub mod resolver;
pub mod types;

pub use resolver::AliasResolver;
pub use types::{DirectoryHandle, ProbedPath};
