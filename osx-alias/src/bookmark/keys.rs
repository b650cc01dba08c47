//! Well-known table of contents keys.
//!
//! Only the keys this crate reads or writes are listed; bookmarks created by
//! recent macOS releases carry many more, which are decoded but not
//! interpreted.

/// Absolute URL of the target.
pub const TARGET_URL: u32 = 0x1003;
/// Array of path component strings leading to the target.
pub const TARGET_PATH: u32 = 0x1004;
/// Array of catalog node ids parallel to [`TARGET_PATH`].
pub const TARGET_CNID_PATH: u32 = 0x1005;
/// Resource property flags of the target (three little-endian u64 words).
pub const TARGET_FLAGS: u32 = 0x1010;
/// File name of the target.
pub const TARGET_NAME: u32 = 0x1020;
/// Creation date of the target.
pub const TARGET_CREATION_DATE: u32 = 0x1040;
/// Mount point of the volume holding the target.
pub const VOLUME_PATH: u32 = 0x2002;
/// Display name of the volume holding the target.
pub const VOLUME_NAME: u32 = 0x2010;
/// Index into [`TARGET_PATH`] of the folder containing the target.
pub const CONTAINING_FOLDER_INDEX: u32 = 0xc001;

/// Bit in the first word of [`TARGET_FLAGS`] set for regular files.
pub const FLAG_REGULAR_FILE: u64 = 0x1;
/// Bit in the first word of [`TARGET_FLAGS`] set for directories.
pub const FLAG_DIRECTORY: u64 = 0x2;
