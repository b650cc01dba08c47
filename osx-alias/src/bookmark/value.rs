//! Decoded bookmark items.

use chrono::{DateTime, Utc};

/// A numeric item. Bookmarks store CFNumber values of several widths; they
/// are widened on decode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Any signed integer subtype.
    Int(i64),
    /// Any floating point subtype.
    Float(f64),
}

/// A decoded bookmark item.
#[derive(Debug, Clone, PartialEq)]
pub enum BookmarkValue {
    /// UTF-8 string.
    String(String),
    /// Opaque bytes.
    Data(Vec<u8>),
    /// Integer or floating point number.
    Number(Number),
    /// Point in time.
    Date(DateTime<Utc>),
    /// Boolean.
    Bool(bool),
    /// Ordered list of items.
    Array(Vec<BookmarkValue>),
    /// Key/value pairs in stored order.
    Dict(Vec<(BookmarkValue, BookmarkValue)>),
    /// Raw 16-byte UUID.
    Uuid([u8; 16]),
    /// Absolute URL string.
    Url(String),
    /// URL relative to a base item.
    RelativeUrl {
        /// The base URL item.
        base: Box<BookmarkValue>,
        /// The relative part.
        relative: Box<BookmarkValue>,
    },
    /// Explicit null.
    Null,
}

impl BookmarkValue {
    /// Returns the string payload, if this is a string item.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the items, if this is an array item.
    #[must_use]
    pub fn as_array(&self) -> Option<&[BookmarkValue]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the bytes, if this is a data item.
    #[must_use]
    pub fn as_data(&self) -> Option<&[u8]> {
        match self {
            Self::Data(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// Returns the date, if this is a date item.
    #[must_use]
    pub fn as_date(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Date(date) => Some(*date),
            _ => None,
        }
    }
}

/// Key of a table of contents entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BookmarkKey {
    /// Numeric key, see [`crate::bookmark::keys`].
    Standard(u32),
    /// Key named by a string item.
    Named(String),
}
