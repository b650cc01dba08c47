//! Bookmark data encoder.
//!
//! The encoder produces the bytes an alias file would hold. It never touches
//! the file system; callers decide where the bytes go.

use super::keys;
use super::value::{BookmarkValue, Number};
use super::{
    ALIAS_FILE_MARKER, APPLE_EPOCH_OFFSET, BOOKMARK_MAGIC, TOC_MAGIC, TYPE_ARRAY, TYPE_BOOLEAN,
    TYPE_DATA, TYPE_DATE, TYPE_DICT, TYPE_NULL, TYPE_NUMBER, TYPE_STRING, TYPE_URL, TYPE_UUID,
    URL_ABSOLUTE, URL_RELATIVE,
};

/// Version word written into the in-memory header.
const MEMORY_VERSION: u32 = 0x1004_0000;

/// Header size of the in-memory layout.
const MEMORY_HEADER_LEN: usize = 0x30;

/// Header size of the on-disk alias file layout.
const ALIAS_FILE_HEADER_LEN: usize = 0x38;

/// Which header to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookmarkLayout {
    /// `book\0\0\0\0mark\0\0\0\0` header, as found in alias files.
    #[default]
    AliasFile,
    /// `book` + size + version header, as returned by bookmark APIs.
    Memory,
}

/// Builds bookmark data with a single table of contents.
///
/// # Examples
///
/// ```
/// use osx_alias::bookmark::{keys, Bookmark, BookmarkBuilder, BookmarkValue};
///
/// let bytes = BookmarkBuilder::for_target("/Users/x/Documents/report.pdf", false)
///     .entry(keys::VOLUME_NAME, BookmarkValue::String("Macintosh HD".into()))
///     .build();
///
/// let bookmark = Bookmark::parse(&bytes).unwrap();
/// assert_eq!(bookmark.target().unwrap().path(), "/Users/x/Documents/report.pdf");
/// ```
#[derive(Debug, Clone, Default)]
pub struct BookmarkBuilder {
    layout: BookmarkLayout,
    entries: Vec<(u32, BookmarkValue)>,
}

impl BookmarkBuilder {
    /// Create an empty builder using the alias file layout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder pre-populated with the entries Finder records for a
    /// target: path components, resource flags, file name, containing folder
    /// index and volume path.
    #[must_use]
    pub fn for_target(path: &str, is_directory: bool) -> Self {
        let components: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let flags = if is_directory {
            keys::FLAG_DIRECTORY
        } else {
            keys::FLAG_REGULAR_FILE
        };
        let mut flag_words = Vec::with_capacity(24);
        flag_words.extend_from_slice(&flags.to_le_bytes());
        flag_words.extend_from_slice(&(keys::FLAG_REGULAR_FILE | keys::FLAG_DIRECTORY).to_le_bytes());
        flag_words.extend_from_slice(&0u64.to_le_bytes());

        let mut builder = Self::new()
            .entry(
                keys::TARGET_PATH,
                BookmarkValue::Array(
                    components
                        .iter()
                        .map(|c| BookmarkValue::String((*c).to_string()))
                        .collect(),
                ),
            )
            .entry(keys::TARGET_FLAGS, BookmarkValue::Data(flag_words))
            .entry(keys::VOLUME_PATH, BookmarkValue::Url("file:///".to_string()));

        if let Some(name) = components.last() {
            builder = builder.entry(keys::TARGET_NAME, BookmarkValue::String((*name).to_string()));
        }
        if components.len() > 1 {
            let index = i64::try_from(components.len() - 2).unwrap_or(i64::MAX);
            builder = builder.entry(
                keys::CONTAINING_FOLDER_INDEX,
                BookmarkValue::Number(Number::Int(index)),
            );
        }
        builder
    }

    /// Select the header layout.
    #[must_use]
    pub fn layout(mut self, layout: BookmarkLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Set an entry, replacing any previous value for the same key.
    #[must_use]
    pub fn entry(mut self, key: u32, value: BookmarkValue) -> Self {
        self.entries.retain(|(k, _)| *k != key);
        self.entries.push((key, value));
        self
    }

    /// Remove an entry.
    #[must_use]
    pub fn without(mut self, key: u32) -> Self {
        self.entries.retain(|(k, _)| *k != key);
        self
    }

    /// Encode the bookmark.
    #[must_use]
    pub fn build(&self) -> Vec<u8> {
        let mut entries: Vec<&(u32, BookmarkValue)> = self.entries.iter().collect();
        entries.sort_by_key(|(key, _)| *key);

        let mut encoder = Encoder {
            body: vec![0; 4], // first TOC offset, patched below
        };
        let offsets: Vec<(u32, u32)> = entries
            .iter()
            .map(|(key, value)| (*key, encoder.encode(value)))
            .collect();

        let toc_offset = encoder.offset();
        let count = to_u32(offsets.len());
        encoder.put_u32(12 + 12 * count);
        encoder.put_u32(TOC_MAGIC);
        encoder.put_u32(1);
        encoder.put_u32(0);
        encoder.put_u32(count);
        for (key, offset) in offsets {
            encoder.put_u32(key);
            encoder.put_u32(offset);
            encoder.put_u32(0);
        }
        encoder.body[0..4].copy_from_slice(&toc_offset.to_le_bytes());

        let mut out = match self.layout {
            BookmarkLayout::AliasFile => {
                let mut header = Vec::with_capacity(ALIAS_FILE_HEADER_LEN);
                header.extend_from_slice(BOOKMARK_MAGIC);
                header.extend_from_slice(&[0; 4]);
                header.extend_from_slice(ALIAS_FILE_MARKER);
                header.extend_from_slice(&[0; 4]);
                header.extend_from_slice(&to_u32(ALIAS_FILE_HEADER_LEN).to_le_bytes());
                header.resize(ALIAS_FILE_HEADER_LEN, 0);
                header
            }
            BookmarkLayout::Memory => {
                let total = MEMORY_HEADER_LEN + encoder.body.len();
                let mut header = Vec::with_capacity(total);
                header.extend_from_slice(BOOKMARK_MAGIC);
                header.extend_from_slice(&to_u32(total).to_le_bytes());
                header.extend_from_slice(&MEMORY_VERSION.to_le_bytes());
                header.extend_from_slice(&to_u32(MEMORY_HEADER_LEN).to_le_bytes());
                header.resize(MEMORY_HEADER_LEN, 0);
                header
            }
        };
        out.extend_from_slice(&encoder.body);
        out
    }
}

fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

struct Encoder {
    body: Vec<u8>,
}

impl Encoder {
    fn offset(&self) -> u32 {
        to_u32(self.body.len())
    }

    fn put_u32(&mut self, value: u32) {
        self.body.extend_from_slice(&value.to_le_bytes());
    }

    fn item(&mut self, type_code: u32, payload: &[u8]) -> u32 {
        let offset = self.offset();
        self.put_u32(to_u32(payload.len()));
        self.put_u32(type_code);
        self.body.extend_from_slice(payload);
        while self.body.len() % 4 != 0 {
            self.body.push(0);
        }
        offset
    }

    #[allow(clippy::cast_precision_loss)]
    fn encode(&mut self, value: &BookmarkValue) -> u32 {
        match value {
            BookmarkValue::String(s) => self.item(TYPE_STRING | 1, s.as_bytes()),
            BookmarkValue::Data(bytes) => self.item(TYPE_DATA | 1, bytes),
            BookmarkValue::Number(Number::Int(n)) => self.item(TYPE_NUMBER | 4, &n.to_le_bytes()),
            BookmarkValue::Number(Number::Float(f)) => {
                self.item(TYPE_NUMBER | 6, &f.to_le_bytes())
            }
            BookmarkValue::Date(date) => {
                let millis = date.timestamp_millis() - APPLE_EPOCH_OFFSET * 1000;
                let seconds = millis as f64 / 1000.0;
                self.item(TYPE_DATE, &seconds.to_be_bytes())
            }
            BookmarkValue::Bool(b) => self.item(TYPE_BOOLEAN | u32::from(*b), &[]),
            BookmarkValue::Array(items) => {
                let offsets: Vec<u32> = items.iter().map(|item| self.encode(item)).collect();
                self.item(TYPE_ARRAY | 1, &offsets_payload(&offsets))
            }
            BookmarkValue::Dict(pairs) => {
                let mut offsets = Vec::with_capacity(pairs.len() * 2);
                for (key, value) in pairs {
                    offsets.push(self.encode(key));
                    offsets.push(self.encode(value));
                }
                self.item(TYPE_DICT | 1, &offsets_payload(&offsets))
            }
            BookmarkValue::Uuid(bytes) => self.item(TYPE_UUID | 1, bytes),
            BookmarkValue::Url(url) => self.item(TYPE_URL | URL_ABSOLUTE, url.as_bytes()),
            BookmarkValue::RelativeUrl { base, relative } => {
                let base = self.encode(base);
                let relative = self.encode(relative);
                self.item(TYPE_URL | URL_RELATIVE, &offsets_payload(&[base, relative]))
            }
            BookmarkValue::Null => self.item(TYPE_NULL, &[]),
        }
    }
}

fn offsets_payload(offsets: &[u32]) -> Vec<u8> {
    offsets.iter().flat_map(|o| o.to_le_bytes()).collect()
}
