//! Error types for container parsing.
//!
//! Everything here threatens the integrity of the read cursor, so a container walk
//! stops at the first [`ContainerError`].

use crate::tag::RecordTag;
use thiserror::Error;

/// Result type for container operations
pub type ContainerResult<T> = Result<T, ContainerError>;

/// Errors raised while reading or writing a MIFF container.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContainerError {
    /// The input does not start with the `MIFF` magic
    #[error("Not a MIFF container: found magic '{}'", .found.escape_ascii())]
    Format { found: [u8; 4] },

    /// The input ends before the bytes a header or record declares
    #[error("Input truncated at offset {offset}: required {required} bytes, {available} available")]
    TruncatedInput {
        offset: usize,
        required: usize,
        available: usize,
    },

    /// A record's length fields are inconsistent
    #[error("Corrupt record '{tag}' at offset {offset}: {reason}")]
    CorruptRecord {
        tag: RecordTag,
        offset: usize,
        reason: CorruptRecordReason,
    },

    /// A record handed to the writer does not fit the 32-bit length fields
    #[error("Record '{tag}' is too large to store: {length} bytes")]
    RecordTooLarge { tag: RecordTag, length: usize },
}

/// Why a record was rejected as corrupt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CorruptRecordReason {
    /// The record cannot even hold the fixed metadata block
    #[error("declared length {declared} is shorter than the {required} byte metadata block")]
    MetadataTooShort { declared: u32, required: usize },

    /// The name runs past the end of the record
    #[error("name of {name_length} bytes does not fit in a {declared} byte record")]
    NameOverrunsRecord { declared: u32, name_length: u32 },

    /// `declared - name - aux name - metadata` is negative
    #[error("name ({name_length} bytes) and aux name ({aux_length} bytes) leave a negative payload in a {declared} byte record")]
    NegativePayload {
        declared: u32,
        name_length: u32,
        aux_length: u32,
    },

    /// The record extends past the container's declared total size
    #[error("record ends at offset {end}, past the declared container size {declared_size}")]
    ExceedsDeclaredSize { end: usize, declared_size: u32 },
}
