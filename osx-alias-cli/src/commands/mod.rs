//! CLI command implementations.
//!
//! - `resolve`: print the target of an alias (the default action)
//! - `completions`: print a shell completion script

pub mod completions;
pub mod resolve;

pub use completions::CompletionsCommand;
pub use resolve::ResolveCommand;
