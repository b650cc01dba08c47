//! Decoding of the bookmark data stored inside Finder alias files.
//!
//! Since Mac OS X 10.6, "Make Alias" writes a file whose data fork holds
//! bookmark data: a small binary table of contents mapping numeric keys to
//! typed items (strings, arrays, numbers, dates, URLs, ...). The path of the
//! original item is recorded as an array of path components, so an alias can
//! be resolved without asking Finder.
//!
//! # Layout
//!
//! Two headers exist. Bookmark data held in memory starts with
//! `book`, the total size, a version and the offset of the data area. Alias
//! files on disk start with `book\0\0\0\0mark\0\0\0\0` and carry the data
//! offset at byte 16. Everything after the header is shared: all integers are
//! little-endian and all item offsets are relative to the data area.
//!
//! # Examples
//!
//! ```
//! use osx_alias::bookmark::{Bookmark, BookmarkBuilder};
//!
//! let bytes = BookmarkBuilder::for_target("/Users/x/Projects", true).build();
//! let bookmark = Bookmark::parse(&bytes).unwrap();
//! let target = bookmark.target().unwrap();
//!
//! assert_eq!(target.path(), "/Users/x/Projects");
//! assert!(target.is_directory());
//! ```

pub mod keys;
mod reader;
mod target;
mod value;
mod writer;

use thiserror::Error;

pub use reader::{Bookmark, Toc};
pub use target::AliasTarget;
pub use value::{BookmarkKey, BookmarkValue, Number};
pub use writer::{BookmarkBuilder, BookmarkLayout};

/// Signature at the start of every bookmark.
pub const BOOKMARK_MAGIC: &[u8; 4] = b"book";

/// Marker that distinguishes the on-disk alias file header.
pub(crate) const ALIAS_FILE_MARKER: &[u8; 4] = b"mark";

/// Magic number at the start of each table of contents.
pub(crate) const TOC_MAGIC: u32 = 0xffff_fffe;

/// Seconds between the Unix epoch and 2001-01-01T00:00:00Z.
pub(crate) const APPLE_EPOCH_OFFSET: i64 = 978_307_200;

// Item type codes. The low byte is a subtype.
pub(crate) const TYPE_MASK: u32 = 0xffff_ff00;
pub(crate) const SUBTYPE_MASK: u32 = 0x0000_00ff;
pub(crate) const TYPE_STRING: u32 = 0x0100;
pub(crate) const TYPE_DATA: u32 = 0x0200;
pub(crate) const TYPE_NUMBER: u32 = 0x0300;
pub(crate) const TYPE_DATE: u32 = 0x0400;
pub(crate) const TYPE_BOOLEAN: u32 = 0x0500;
pub(crate) const TYPE_ARRAY: u32 = 0x0600;
pub(crate) const TYPE_DICT: u32 = 0x0700;
pub(crate) const TYPE_UUID: u32 = 0x0800;
pub(crate) const TYPE_URL: u32 = 0x0900;
pub(crate) const TYPE_NULL: u32 = 0x0a00;

pub(crate) const URL_ABSOLUTE: u32 = 0x01;
pub(crate) const URL_RELATIVE: u32 = 0x02;

/// Errors produced while decoding bookmark data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookmarkError {
    /// The input is too short to hold a header.
    #[error("bookmark data too short ({len} bytes)")]
    TooShort {
        /// Length of the input.
        len: usize,
    },

    /// The input does not start with `book`.
    #[error("bad bookmark magic")]
    BadMagic,

    /// The declared size does not match the input length.
    #[error("declared size {declared} does not match data length {actual}")]
    SizeMismatch {
        /// Size recorded in the header.
        declared: usize,
        /// Actual input length.
        actual: usize,
    },

    /// The data area offset is outside the input.
    #[error("header size {header} is invalid for {size} bytes of data")]
    BadHeader {
        /// Offset of the data area.
        header: usize,
        /// Input length.
        size: usize,
    },

    /// An offset points outside the data area.
    #[error("offset {offset} out of range")]
    OffsetOutOfRange {
        /// The offending offset, relative to the data area.
        offset: usize,
    },

    /// An item's payload runs past the end of the data area.
    #[error("item at offset {offset} is truncated")]
    Truncated {
        /// Offset of the item.
        offset: usize,
    },

    /// A table of contents is malformed.
    #[error("table of contents at offset {offset} is invalid: {reason}")]
    BadToc {
        /// Offset of the table of contents.
        offset: usize,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// An item's type code is unknown.
    #[error("unsupported item type {type_code:#06x} at offset {offset}")]
    UnsupportedType {
        /// The raw type code.
        type_code: u32,
        /// Offset of the item.
        offset: usize,
    },

    /// A fixed-size item has the wrong payload length.
    #[error("item at offset {offset} has unexpected length {len}")]
    BadLength {
        /// Offset of the item.
        offset: usize,
        /// Actual payload length.
        len: usize,
    },

    /// A string item is not valid UTF-8.
    #[error("item at offset {offset} is not valid UTF-8")]
    InvalidUtf8 {
        /// Offset of the item.
        offset: usize,
    },

    /// A date item is not representable.
    #[error("item at offset {offset} is not a valid date")]
    InvalidDate {
        /// Offset of the item.
        offset: usize,
    },

    /// Arrays or dictionaries nest too deeply (or reference themselves).
    #[error("items nested deeper than {0} levels")]
    TooDeep(usize),

    /// Decoding would produce more items than a real bookmark holds.
    #[error("more than {0} items")]
    TooManyItems(usize),
}
