//! Error types for MBmp record decoding.

use miff_pvr::DecodeError;
use thiserror::Error;

/// Result type for bitmap record operations
pub type BitmapResult<T> = Result<T, BitmapError>;

/// Errors local to a single MBmp record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BitmapError {
    /// The payload cannot hold the 20 byte sub-header
    #[error("Bitmap payload too short for its sub-header: {actual} bytes, 20 required")]
    SubHeaderTooShort { actual: usize },

    /// The texture data could not be decoded
    #[error(transparent)]
    Decode(#[from] DecodeError),
}
