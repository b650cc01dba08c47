//! Path standardization functions.
//!
//! These functions work on path strings only and never touch the file
//! system:
//! - Expanding a leading tilde (`~`) to the home directory
//! - Collapsing empty, `.` and `..` components
//! - Making relative paths absolute against a working directory
//! - Adding the trailing separator that marks a directory

use std::borrow::Cow;
use std::path::Path;

/// Expand a leading `~` or `~/` to the home directory.
///
/// `~user` forms are left unchanged, as is everything when the home
/// directory cannot be determined.
///
/// # Examples
///
/// ```
/// use osx_alias::path::normalize::expand_tilde;
///
/// let expanded = expand_tilde("~/Desktop");
/// assert!(expanded.ends_with("/Desktop"));
///
/// assert_eq!(expand_tilde("/absolute"), "/absolute");
/// assert_eq!(expand_tilde("~someone/Desktop"), "~someone/Desktop");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> Cow<'_, str> {
    let rest = match path.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => return Cow::Borrowed(path),
    };

    let Some(home) = home::home_dir() else {
        return Cow::Borrowed(path);
    };
    let home = home.to_string_lossy();
    Cow::Owned(format!("{}{rest}", home.trim_end_matches('/')))
}

/// Collapse a path string without consulting the file system.
///
/// Expands a leading tilde, drops empty and `.` components and strips the
/// trailing separator. For rooted paths `..` removes the preceding
/// component and stops at the root; relative paths keep their `..`
/// components since there is nothing to resolve them against yet.
///
/// # Examples
///
/// ```
/// use osx_alias::path::normalize::standardize;
///
/// assert_eq!(standardize("/Users//x/./Desktop/"), "/Users/x/Desktop");
/// assert_eq!(standardize("/Users/x/../y"), "/Users/y");
/// assert_eq!(standardize("/../.."), "/");
/// assert_eq!(standardize("a/../b"), "a/../b");
/// assert_eq!(standardize("."), "");
/// ```
#[must_use]
pub fn standardize(path: &str) -> String {
    let expanded = expand_tilde(path);
    let rooted = expanded.starts_with('/');

    let mut parts: Vec<&str> = Vec::new();
    for component in expanded.split('/') {
        match component {
            "" | "." => {}
            ".." if rooted => {
                parts.pop();
            }
            other => parts.push(other),
        }
    }

    let joined = parts.join("/");
    if rooted {
        format!("/{joined}")
    } else {
        joined
    }
}

/// Make `raw` absolute against `cwd` and standardize the result.
///
/// # Examples
///
/// ```
/// use osx_alias::path::normalize::absolutize;
/// use std::path::Path;
///
/// let cwd = Path::new("/Users/x");
/// assert_eq!(absolutize("Desktop/link.alias", cwd), "/Users/x/Desktop/link.alias");
/// assert_eq!(absolutize("../y", cwd), "/Users/y");
/// assert_eq!(absolutize(".", cwd), "/Users/x");
/// assert_eq!(absolutize("/tmp/", cwd), "/tmp");
/// ```
#[must_use]
pub fn absolutize(raw: &str, cwd: &Path) -> String {
    let standardized = standardize(raw);
    if standardized.starts_with('/') {
        return standardized;
    }
    standardize(&format!("{}/{raw}", cwd.to_string_lossy()))
}

/// Append a trailing separator to `path` when it names a directory.
///
/// # Examples
///
/// ```
/// use osx_alias::path::normalize::with_directory_suffix;
///
/// assert_eq!(with_directory_suffix("/Users/x", true), "/Users/x/");
/// assert_eq!(with_directory_suffix("/", true), "/");
/// assert_eq!(with_directory_suffix("/Users/x/a.txt", false), "/Users/x/a.txt");
/// ```
#[must_use]
pub fn with_directory_suffix(path: &str, is_directory: bool) -> String {
    if is_directory && !path.ends_with('/') {
        format!("{path}/")
    } else {
        path.to_string()
    }
}
