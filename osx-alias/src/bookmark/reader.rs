//! Bookmark data decoder.

use std::cell::Cell;

use chrono::{DateTime, Utc};

use super::value::{BookmarkKey, BookmarkValue, Number};
use super::{
    BookmarkError, ALIAS_FILE_MARKER, APPLE_EPOCH_OFFSET, BOOKMARK_MAGIC, SUBTYPE_MASK, TOC_MAGIC,
    TYPE_ARRAY, TYPE_BOOLEAN, TYPE_DATA, TYPE_DATE, TYPE_DICT, TYPE_MASK, TYPE_NULL, TYPE_NUMBER,
    TYPE_STRING, TYPE_URL, TYPE_UUID, URL_ABSOLUTE, URL_RELATIVE,
};

type Result<T> = std::result::Result<T, BookmarkError>;

/// Arrays and dictionaries reference their children by offset, so a crafted
/// file can form a cycle. Nesting is capped instead of tracked.
const MAX_DEPTH: usize = 32;

/// Upper bound on items decoded from one bookmark. Children may share an
/// offset, so a shallow tree can still expand exponentially.
const MAX_ITEMS: usize = 10_000;

/// Upper bound on chained tables of contents.
const MAX_TOCS: usize = 64;

/// Size of a TOC header: size, magic, id, next, count.
const TOC_HEADER_LEN: usize = 20;

/// Size of a TOC entry: key, offset, reserved.
const TOC_ENTRY_LEN: usize = 12;

/// One table of contents.
#[derive(Debug, Clone, PartialEq)]
pub struct Toc {
    id: u32,
    entries: Vec<(BookmarkKey, BookmarkValue)>,
}

impl Toc {
    /// Identifier of this table of contents.
    #[must_use]
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Entries in stored order.
    #[must_use]
    pub fn entries(&self) -> &[(BookmarkKey, BookmarkValue)] {
        &self.entries
    }

    fn get(&self, key: u32) -> Option<&BookmarkValue> {
        self.entries
            .iter()
            .find(|(k, _)| *k == BookmarkKey::Standard(key))
            .map(|(_, v)| v)
    }
}

/// Decoded bookmark data.
///
/// # Examples
///
/// ```
/// use osx_alias::bookmark::{keys, Bookmark, BookmarkBuilder, BookmarkValue};
///
/// let bytes = BookmarkBuilder::for_target("/Users/x/report.pdf", false).build();
/// let bookmark = Bookmark::parse(&bytes).unwrap();
///
/// let name = bookmark.get(keys::TARGET_NAME).and_then(BookmarkValue::as_str);
/// assert_eq!(name, Some("report.pdf"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Bookmark {
    tocs: Vec<Toc>,
}

impl Bookmark {
    /// Decode bookmark data in either header layout.
    ///
    /// # Errors
    ///
    /// Returns a [`BookmarkError`] describing the first structural problem
    /// found: bad magic, inconsistent sizes, out-of-range offsets, truncated
    /// or unknown items, looping TOC chains, excessive nesting or too many
    /// items.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let data_offset = parse_header(data)?;
        let reader = ItemReader {
            body: &data[data_offset..],
            decoded: Cell::new(0),
        };

        let mut tocs = Vec::new();
        let mut visited = Vec::new();
        let mut toc_offset = reader.u32_at(0)? as usize;

        while toc_offset != 0 {
            if visited.contains(&toc_offset) || visited.len() >= MAX_TOCS {
                return Err(BookmarkError::BadToc {
                    offset: toc_offset,
                    reason: "chain loops",
                });
            }
            visited.push(toc_offset);

            let (toc, next) = reader.toc(toc_offset)?;
            tocs.push(toc);
            toc_offset = next;
        }

        Ok(Self { tocs })
    }

    /// All tables of contents in chain order.
    #[must_use]
    pub fn tocs(&self) -> &[Toc] {
        &self.tocs
    }

    /// Look up a numeric key, searching tables of contents in chain order.
    #[must_use]
    pub fn get(&self, key: u32) -> Option<&BookmarkValue> {
        self.tocs.iter().find_map(|toc| toc.get(key))
    }

    /// Whether `head`, the leading bytes of a file `file_len` bytes long,
    /// starts with a bookmark header in either layout.
    ///
    /// The alias file layout needs its full 16-byte signature; the in-memory
    /// layout needs a size field equal to `file_len`. The data behind the
    /// header is not examined and may still fail to [`parse`](Self::parse).
    ///
    /// # Examples
    ///
    /// ```
    /// use osx_alias::bookmark::{Bookmark, BookmarkBuilder};
    ///
    /// let bytes = BookmarkBuilder::for_target("/a", false).build();
    /// assert!(Bookmark::has_header(&bytes, bytes.len() as u64));
    /// assert!(!Bookmark::has_header(b"bookkeeping notes\n", 18));
    /// ```
    #[must_use]
    pub fn has_header(head: &[u8], file_len: u64) -> bool {
        if head.len() < 16 || &head[0..4] != BOOKMARK_MAGIC {
            return false;
        }
        if &head[8..12] == ALIAS_FILE_MARKER {
            return head[4..8] == [0; 4] && head[12..16] == [0; 4];
        }
        u64::from(le_u32(head, 4)) == file_len
    }
}

/// Validates the header and returns the offset of the data area.
fn parse_header(data: &[u8]) -> Result<usize> {
    if data.len() < 16 {
        return Err(BookmarkError::TooShort { len: data.len() });
    }
    if &data[0..4] != BOOKMARK_MAGIC {
        return Err(BookmarkError::BadMagic);
    }

    let data_offset = if &data[8..12] == ALIAS_FILE_MARKER {
        if data.len() < 20 {
            return Err(BookmarkError::TooShort { len: data.len() });
        }
        le_u32(data, 16) as usize
    } else {
        let declared = le_u32(data, 4) as usize;
        if declared != data.len() {
            return Err(BookmarkError::SizeMismatch {
                declared,
                actual: data.len(),
            });
        }
        le_u32(data, 12) as usize
    };

    if data_offset < 16 || data_offset.saturating_add(4) > data.len() {
        return Err(BookmarkError::BadHeader {
            header: data_offset,
            size: data.len(),
        });
    }
    Ok(data_offset)
}

fn le_u32(data: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]])
}

fn fixed<const N: usize>(payload: &[u8], offset: usize) -> Result<[u8; N]> {
    <[u8; N]>::try_from(payload).map_err(|_| BookmarkError::BadLength {
        offset,
        len: payload.len(),
    })
}

struct ItemReader<'a> {
    body: &'a [u8],
    decoded: Cell<usize>,
}

impl ItemReader<'_> {
    fn u32_at(&self, at: usize) -> Result<u32> {
        let bytes = at
            .checked_add(4)
            .and_then(|end| self.body.get(at..end))
            .ok_or(BookmarkError::OffsetOutOfRange { offset: at })?;
        Ok(le_u32(bytes, 0))
    }

    fn toc(&self, offset: usize) -> Result<(Toc, usize)> {
        let size = self.u32_at(offset)? as usize;
        if self.u32_at(offset + 4)? != TOC_MAGIC {
            return Err(BookmarkError::BadToc {
                offset,
                reason: "bad magic",
            });
        }
        let id = self.u32_at(offset + 8)?;
        let next = self.u32_at(offset + 12)? as usize;
        let count = self.u32_at(offset + 16)? as usize;

        // The size field excludes the size and magic words.
        let total = size.saturating_add(8);
        if offset.saturating_add(total) > self.body.len() {
            return Err(BookmarkError::BadToc {
                offset,
                reason: "truncated",
            });
        }
        if count.saturating_mul(TOC_ENTRY_LEN).saturating_add(TOC_HEADER_LEN) > total {
            return Err(BookmarkError::BadToc {
                offset,
                reason: "entries overrun table",
            });
        }

        let mut entries = Vec::with_capacity(count);
        for n in 0..count {
            let base = offset + TOC_HEADER_LEN + n * TOC_ENTRY_LEN;
            let raw_key = self.u32_at(base)?;
            let value_offset = self.u32_at(base + 4)? as usize;

            let key = if raw_key & 0x8000_0000 == 0 {
                BookmarkKey::Standard(raw_key)
            } else {
                match self.item((raw_key & 0x7fff_ffff) as usize, 0)? {
                    BookmarkValue::String(name) => BookmarkKey::Named(name),
                    _ => {
                        return Err(BookmarkError::BadToc {
                            offset,
                            reason: "named key is not a string",
                        })
                    }
                }
            };
            entries.push((key, self.item(value_offset, 0)?));
        }

        Ok((Toc { id, entries }, next))
    }

    fn item(&self, offset: usize, depth: usize) -> Result<BookmarkValue> {
        if depth > MAX_DEPTH {
            return Err(BookmarkError::TooDeep(MAX_DEPTH));
        }
        let decoded = self.decoded.get() + 1;
        if decoded > MAX_ITEMS {
            return Err(BookmarkError::TooManyItems(MAX_ITEMS));
        }
        self.decoded.set(decoded);

        let length = self.u32_at(offset)? as usize;
        let type_code = self.u32_at(offset + 4)?;
        let start = offset + 8;
        let payload = start
            .checked_add(length)
            .and_then(|end| self.body.get(start..end))
            .ok_or(BookmarkError::Truncated { offset })?;
        let subtype = type_code & SUBTYPE_MASK;

        let value = match type_code & TYPE_MASK {
            TYPE_STRING => BookmarkValue::String(
                std::str::from_utf8(payload)
                    .map_err(|_| BookmarkError::InvalidUtf8 { offset })?
                    .to_owned(),
            ),
            TYPE_DATA => BookmarkValue::Data(payload.to_vec()),
            TYPE_NUMBER => BookmarkValue::Number(number(type_code, payload, offset)?),
            TYPE_DATE => BookmarkValue::Date(date(payload, offset)?),
            TYPE_BOOLEAN => BookmarkValue::Bool(subtype == 1),
            TYPE_ARRAY => {
                let items = self.offsets(payload, offset)?;
                BookmarkValue::Array(
                    items
                        .into_iter()
                        .map(|at| self.item(at, depth + 1))
                        .collect::<Result<_>>()?,
                )
            }
            TYPE_DICT => {
                let items = self.offsets(payload, offset)?;
                if items.len() % 2 != 0 {
                    return Err(BookmarkError::BadLength {
                        offset,
                        len: payload.len(),
                    });
                }
                BookmarkValue::Dict(
                    items
                        .chunks_exact(2)
                        .map(|pair| {
                            Ok((self.item(pair[0], depth + 1)?, self.item(pair[1], depth + 1)?))
                        })
                        .collect::<Result<_>>()?,
                )
            }
            TYPE_UUID => BookmarkValue::Uuid(fixed::<16>(payload, offset)?),
            TYPE_URL if subtype == URL_ABSOLUTE => BookmarkValue::Url(
                std::str::from_utf8(payload)
                    .map_err(|_| BookmarkError::InvalidUtf8 { offset })?
                    .to_owned(),
            ),
            TYPE_URL if subtype == URL_RELATIVE => {
                let parts = fixed::<8>(payload, offset)?;
                let base = le_u32(&parts, 0) as usize;
                let relative = le_u32(&parts, 4) as usize;
                BookmarkValue::RelativeUrl {
                    base: Box::new(self.item(base, depth + 1)?),
                    relative: Box::new(self.item(relative, depth + 1)?),
                }
            }
            TYPE_NULL => BookmarkValue::Null,
            _ => return Err(BookmarkError::UnsupportedType { type_code, offset }),
        };
        Ok(value)
    }

    fn offsets(&self, payload: &[u8], offset: usize) -> Result<Vec<usize>> {
        if payload.len() % 4 != 0 {
            return Err(BookmarkError::BadLength {
                offset,
                len: payload.len(),
            });
        }
        Ok(payload
            .chunks_exact(4)
            .map(|chunk| le_u32(chunk, 0) as usize)
            .collect())
    }
}

/// Decodes a number according to its CFNumberType subtype.
fn number(type_code: u32, payload: &[u8], offset: usize) -> Result<Number> {
    let number = match type_code & SUBTYPE_MASK {
        1 | 7 => Number::Int(i64::from(i8::from_le_bytes(fixed(payload, offset)?))),
        2 | 8 => Number::Int(i64::from(i16::from_le_bytes(fixed(payload, offset)?))),
        3 | 9 => Number::Int(i64::from(i32::from_le_bytes(fixed(payload, offset)?))),
        4 | 10 | 11 | 14 | 15 => Number::Int(i64::from_le_bytes(fixed(payload, offset)?)),
        5 | 12 => Number::Float(f64::from(f32::from_le_bytes(fixed(payload, offset)?))),
        6 | 13 | 16 => Number::Float(f64::from_le_bytes(fixed(payload, offset)?)),
        _ => return Err(BookmarkError::UnsupportedType { type_code, offset }),
    };
    Ok(number)
}

/// Dates are big-endian seconds since 2001-01-01T00:00:00Z.
#[allow(clippy::cast_possible_truncation)]
fn date(payload: &[u8], offset: usize) -> Result<DateTime<Utc>> {
    let seconds = f64::from_be_bytes(fixed(payload, offset)?);
    if !seconds.is_finite() {
        return Err(BookmarkError::InvalidDate { offset });
    }
    let millis = (seconds * 1000.0).round() as i64;
    APPLE_EPOCH_OFFSET
        .checked_mul(1000)
        .and_then(|epoch| epoch.checked_add(millis))
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .ok_or(BookmarkError::InvalidDate { offset })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bookmark::{keys, BookmarkBuilder, BookmarkLayout};

    #[test]
    fn test_parse_alias_file_layout() {
        let bytes = BookmarkBuilder::for_target("/Users/x/Documents/report.pdf", false)
            .layout(BookmarkLayout::AliasFile)
            .build();
        assert_eq!(&bytes[8..12], b"mark");

        let bookmark = Bookmark::parse(&bytes).unwrap();
        let path = bookmark.get(keys::TARGET_PATH).unwrap().as_array().unwrap();
        let components: Vec<_> = path.iter().filter_map(BookmarkValue::as_str).collect();
        assert_eq!(components, ["Users", "x", "Documents", "report.pdf"]);
    }

    #[test]
    fn test_parse_memory_layout() {
        let bytes = BookmarkBuilder::for_target("/Users/x/Projects", true)
            .layout(BookmarkLayout::Memory)
            .build();
        assert_eq!(le_u32(&bytes, 4) as usize, bytes.len());

        let bookmark = Bookmark::parse(&bytes).unwrap();
        assert_eq!(bookmark.tocs().len(), 1);
        assert_eq!(bookmark.tocs()[0].id(), 1);
        assert_eq!(
            bookmark.get(keys::TARGET_NAME).and_then(BookmarkValue::as_str),
            Some("Projects")
        );
    }

    #[test]
    fn test_parse_decodes_every_item_type() {
        let date = DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap();
        let bytes = BookmarkBuilder::new()
            .entry(0xf001, BookmarkValue::Data(vec![1, 2, 3]))
            .entry(0xf002, BookmarkValue::Number(Number::Int(-42)))
            .entry(0xf003, BookmarkValue::Number(Number::Float(1.5)))
            .entry(0xf004, BookmarkValue::Date(date))
            .entry(0xf005, BookmarkValue::Bool(true))
            .entry(0xf006, BookmarkValue::Bool(false))
            .entry(
                0xf007,
                BookmarkValue::Dict(vec![(
                    BookmarkValue::String("k".into()),
                    BookmarkValue::Null,
                )]),
            )
            .entry(0xf008, BookmarkValue::Uuid([7; 16]))
            .entry(0xf009, BookmarkValue::Url("file:///Volumes/Data/".into()))
            .entry(
                0xf00a,
                BookmarkValue::RelativeUrl {
                    base: Box::new(BookmarkValue::Url("file:///".into())),
                    relative: Box::new(BookmarkValue::String("Users".into())),
                },
            )
            .build();

        let bookmark = Bookmark::parse(&bytes).unwrap();
        assert_eq!(bookmark.get(0xf001), Some(&BookmarkValue::Data(vec![1, 2, 3])));
        assert_eq!(bookmark.get(0xf002), Some(&BookmarkValue::Number(Number::Int(-42))));
        assert_eq!(bookmark.get(0xf003), Some(&BookmarkValue::Number(Number::Float(1.5))));
        assert_eq!(bookmark.get(0xf004).and_then(BookmarkValue::as_date), Some(date));
        assert_eq!(bookmark.get(0xf005), Some(&BookmarkValue::Bool(true)));
        assert_eq!(bookmark.get(0xf006), Some(&BookmarkValue::Bool(false)));
        assert!(matches!(bookmark.get(0xf007), Some(BookmarkValue::Dict(pairs)) if pairs.len() == 1));
        assert_eq!(bookmark.get(0xf008), Some(&BookmarkValue::Uuid([7; 16])));
        assert!(matches!(bookmark.get(0xf00a), Some(BookmarkValue::RelativeUrl { .. })));
    }

    #[test]
    fn test_parse_narrow_number_subtypes() {
        let reader_input = [0xfe_u8];
        assert_eq!(number(0x0301, &reader_input, 0).unwrap(), Number::Int(-2));
        assert_eq!(
            number(0x0303, &7i32.to_le_bytes(), 0).unwrap(),
            Number::Int(7)
        );
        assert_eq!(
            number(0x0305, &2.5f32.to_le_bytes(), 0).unwrap(),
            Number::Float(2.5)
        );
        assert!(matches!(
            number(0x0303, &[1, 2], 0),
            Err(BookmarkError::BadLength { len: 2, .. })
        ));
        assert!(matches!(
            number(0x0399, &[], 0),
            Err(BookmarkError::UnsupportedType { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_short_input() {
        assert_eq!(
            Bookmark::parse(b"book"),
            Err(BookmarkError::TooShort { len: 4 })
        );
    }

    #[test]
    fn test_parse_rejects_bad_magic() {
        let mut bytes = BookmarkBuilder::for_target("/a", false).build();
        bytes[0..4].copy_from_slice(b"alis");
        assert_eq!(Bookmark::parse(&bytes), Err(BookmarkError::BadMagic));
    }

    #[test]
    fn test_parse_rejects_size_mismatch() {
        let mut bytes = BookmarkBuilder::for_target("/a", false)
            .layout(BookmarkLayout::Memory)
            .build();
        bytes.push(0);
        assert!(matches!(
            Bookmark::parse(&bytes),
            Err(BookmarkError::SizeMismatch { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_truncated_alias_file() {
        let bytes = BookmarkBuilder::for_target("/Users/x/Documents/report.pdf", false).build();
        let truncated = &bytes[..bytes.len() - 16];
        assert!(Bookmark::parse(truncated).is_err());
    }

    #[test]
    fn test_parse_rejects_data_offset_past_end() {
        let mut bytes = BookmarkBuilder::for_target("/a", false).build();
        let len = u32::try_from(bytes.len()).unwrap();
        bytes[16..20].copy_from_slice(&len.to_le_bytes());
        assert!(matches!(
            Bookmark::parse(&bytes),
            Err(BookmarkError::BadHeader { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_toc_loop() {
        let mut bytes = BookmarkBuilder::for_target("/a", false).build();
        let data_offset = le_u32(&bytes, 16) as usize;
        let toc_offset = le_u32(&bytes, data_offset);
        // Point the TOC's "next" field back at itself.
        let next_field = data_offset + toc_offset as usize + 12;
        bytes[next_field..next_field + 4].copy_from_slice(&toc_offset.to_le_bytes());

        assert!(matches!(
            Bookmark::parse(&bytes),
            Err(BookmarkError::BadToc {
                reason: "chain loops",
                ..
            })
        ));
    }

    #[test]
    fn test_parse_rejects_self_referencing_array() {
        // Hand-built data area: TOC offset, then an array whose only element
        // is itself.
        let mut body = Vec::new();
        body.extend_from_slice(&0u32.to_le_bytes()); // patched below
        let array_offset = u32::try_from(body.len()).unwrap();
        body.extend_from_slice(&4u32.to_le_bytes());
        body.extend_from_slice(&0x0601u32.to_le_bytes());
        body.extend_from_slice(&array_offset.to_le_bytes());
        let toc_offset = u32::try_from(body.len()).unwrap();
        body.extend_from_slice(&24u32.to_le_bytes());
        body.extend_from_slice(&TOC_MAGIC.to_le_bytes());
        body.extend_from_slice(&1u32.to_le_bytes());
        body.extend_from_slice(&0u32.to_le_bytes());
        body.extend_from_slice(&1u32.to_le_bytes());
        body.extend_from_slice(&keys::TARGET_PATH.to_le_bytes());
        body.extend_from_slice(&array_offset.to_le_bytes());
        body.extend_from_slice(&0u32.to_le_bytes());
        body[0..4].copy_from_slice(&toc_offset.to_le_bytes());

        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"book\0\0\0\0mark\0\0\0\0");
        bytes.extend_from_slice(&20u32.to_le_bytes());
        bytes.extend_from_slice(&body);

        assert_eq!(
            Bookmark::parse(&bytes),
            Err(BookmarkError::TooDeep(MAX_DEPTH))
        );
    }

    /// Wraps a hand-built data area in an alias file header.
    fn alias_file(body: &[u8]) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"book\0\0\0\0mark\0\0\0\0");
        bytes.extend_from_slice(&20u32.to_le_bytes());
        bytes.extend_from_slice(body);
        bytes
    }

    fn put(body: &mut Vec<u8>, words: &[u32]) -> u32 {
        let at = u32::try_from(body.len()).unwrap();
        for word in words {
            body.extend_from_slice(&word.to_le_bytes());
        }
        at
    }

    #[test]
    fn test_parse_rejects_shared_child_fan_out() {
        // Each array lists the level below it twice: shallow enough to pass
        // the depth limit, but 2^21 items if fully expanded.
        let mut body = Vec::new();
        put(&mut body, &[0]); // patched below
        let mut child = put(&mut body, &[0, TYPE_STRING | 1]);
        for _ in 0..20 {
            child = put(&mut body, &[8, TYPE_ARRAY | 1, child, child]);
        }
        let toc_offset = put(
            &mut body,
            &[24, TOC_MAGIC, 1, 0, 1, keys::TARGET_PATH, child, 0],
        );
        body[0..4].copy_from_slice(&toc_offset.to_le_bytes());

        assert_eq!(
            Bookmark::parse(&alias_file(&body)),
            Err(BookmarkError::TooManyItems(MAX_ITEMS))
        );
    }

    #[test]
    fn test_parse_rejects_toc_count_beyond_size() {
        let mut body = Vec::new();
        put(&mut body, &[4]);
        // Room for one entry, but the count claims two.
        put(&mut body, &[24, TOC_MAGIC, 1, 0, 2, keys::TARGET_PATH, 0, 0]);

        assert_eq!(
            Bookmark::parse(&alias_file(&body)),
            Err(BookmarkError::BadToc {
                offset: 4,
                reason: "entries overrun table",
            })
        );
    }

    #[test]
    fn test_has_header_checks_both_layouts() {
        let alias = BookmarkBuilder::for_target("/a", false).build();
        let memory = BookmarkBuilder::for_target("/a", false)
            .layout(BookmarkLayout::Memory)
            .build();
        let memory_len = memory.len() as u64;

        assert!(Bookmark::has_header(&alias, alias.len() as u64));
        assert!(Bookmark::has_header(&memory, memory_len));
        assert!(!Bookmark::has_header(&memory, memory_len + 1));
        assert!(!Bookmark::has_header(b"book\0\0\0\0mark\0\0\0\x01", 16));
        assert!(!Bookmark::has_header(b"bookkeeping notes\n", 18));
        assert!(!Bookmark::has_header(b"book", 4));
    }

    #[test]
    fn test_parse_rejects_invalid_utf8_string() {
        let mut bytes = BookmarkBuilder::new()
            .entry(keys::TARGET_NAME, BookmarkValue::String("ab".into()))
            .build();
        let pos = bytes.windows(2).rposition(|w| w == b"ab").unwrap();
        bytes[pos] = 0xff;
        assert!(matches!(
            Bookmark::parse(&bytes),
            Err(BookmarkError::InvalidUtf8 { .. })
        ));
    }
}
