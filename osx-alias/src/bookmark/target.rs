//! Extraction of the original item recorded in a bookmark.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::keys;
use super::reader::Bookmark;
use super::value::BookmarkValue;

/// The original item an alias points at, as recorded in the alias.
///
/// # Examples
///
/// ```
/// use osx_alias::AliasTarget;
///
/// let target = AliasTarget::new("/Users/x/Projects", true);
/// assert_eq!(target.path(), "/Users/x/Projects");
/// assert!(target.is_directory());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AliasTarget {
    path: String,
    is_directory: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    volume: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    created: Option<DateTime<Utc>>,
}

impl AliasTarget {
    /// Create a target with only a path and a directory flag.
    #[must_use]
    pub fn new(path: impl Into<String>, is_directory: bool) -> Self {
        Self {
            path: path.into(),
            is_directory,
            name: None,
            volume: None,
            created: None,
        }
    }

    /// Absolute path of the target, without a trailing separator.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Whether the alias recorded the target as a directory.
    #[must_use]
    pub fn is_directory(&self) -> bool {
        self.is_directory
    }

    /// File name recorded for the target.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Mount point of the volume holding the target.
    #[must_use]
    pub fn volume(&self) -> Option<&str> {
        self.volume.as_deref()
    }

    /// Creation date recorded for the target.
    #[must_use]
    pub fn created(&self) -> Option<DateTime<Utc>> {
        self.created
    }
}

impl Bookmark {
    /// The original item recorded in this bookmark.
    ///
    /// The path comes from the path component array, or failing that from
    /// the target URL. Returns `None` when neither is present or usable.
    #[must_use]
    pub fn target(&self) -> Option<AliasTarget> {
        let path = self.target_path()?;
        let is_directory = self
            .get(keys::TARGET_FLAGS)
            .and_then(BookmarkValue::as_data)
            .and_then(|data| data.get(..8))
            .and_then(|word| <[u8; 8]>::try_from(word).ok())
            .is_some_and(|word| u64::from_le_bytes(word) & keys::FLAG_DIRECTORY != 0);

        Some(AliasTarget {
            path,
            is_directory,
            name: self
                .get(keys::TARGET_NAME)
                .and_then(BookmarkValue::as_str)
                .map(str::to_owned),
            volume: self.get(keys::VOLUME_PATH).and_then(|value| match value {
                BookmarkValue::Url(url) => file_url_to_path(url),
                BookmarkValue::String(s) => Some(s.clone()),
                _ => None,
            }),
            created: self
                .get(keys::TARGET_CREATION_DATE)
                .and_then(BookmarkValue::as_date),
        })
    }

    fn target_path(&self) -> Option<String> {
        if let Some(items) = self.get(keys::TARGET_PATH).and_then(BookmarkValue::as_array) {
            let components = items
                .iter()
                .map(BookmarkValue::as_str)
                .collect::<Option<Vec<_>>>()?;
            return Some(format!("/{}", components.join("/")));
        }
        match self.get(keys::TARGET_URL)? {
            BookmarkValue::Url(url) => file_url_to_path(url),
            _ => None,
        }
    }
}

/// Convert a `file://` URL to a path: strip the scheme and an optional
/// `localhost` authority, percent-decode, and drop a trailing separator.
/// Returns `None` for other schemes or undecodable input.
fn file_url_to_path(url: &str) -> Option<String> {
    let rest = url.strip_prefix("file://")?;
    let rest = rest.strip_prefix("localhost").unwrap_or(rest);
    if !rest.starts_with('/') {
        return None;
    }

    let bytes = rest.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = bytes.get(i + 1..i + 3)?;
            if !hex.iter().all(u8::is_ascii_hexdigit) {
                return None;
            }
            decoded.push(u8::from_str_radix(std::str::from_utf8(hex).ok()?, 16).ok()?);
            i += 3;
        } else {
            decoded.push(bytes[i]);
            i += 1;
        }
    }

    let mut path = String::from_utf8(decoded).ok()?;
    while path.len() > 1 && path.ends_with('/') {
        path.pop();
    }
    Some(path)
}
