//! MIFF layout constants

/// Magic at the start of every container.
pub const MIFF_MAGIC: [u8; 4] = *b"MIFF";

/// Endianness tag selecting little-endian record fields.
pub const LITTLE_ENDIAN_TAG: [u8; 4] = *b"Litl";

/// Endianness tag written for big-endian containers. Readers treat any tag other
/// than [`LITTLE_ENDIAN_TAG`] as big-endian.
pub const BIG_ENDIAN_TAG: [u8; 4] = *b"BigE";

/// Magic + big-endian total size + endianness tag.
pub const CONTAINER_HEADER_SIZE: usize = 12;

/// Record tag + big-endian record length.
pub const RECORD_HEADER_SIZE: usize = 8;

/// Two metadata floats + name length prefix + aux name length prefix.
pub const RECORD_METADATA_SIZE: usize = 16;

/// Offset of the declared size within the container header.
pub(crate) const DECLARED_SIZE_OFFSET: usize = 4;

/// Offset of the endianness tag within the container header.
pub(crate) const ENDIAN_TAG_OFFSET: usize = 8;
