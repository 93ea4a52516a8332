//! Error types for texture decoding.

use crate::format::{CompressionScheme, PixelFormat};
use thiserror::Error;

/// Result type for texture decode operations
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Errors that can occur while decoding a single texture.
///
/// All of these are local to one image; a caller walking a container
/// can report them and move on to the next record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Width or height exceeds the supported bound
    #[error("Image dimensions {width}x{height} exceed the maximum of {max_width}x{max_height}")]
    Dimension {
        width: u32,
        height: u32,
        max_width: u32,
        max_height: u32,
    },

    /// The pixel format / compression scheme pair has no decoder
    #[error("Unsupported texture encoding: {pixel_format:?} {scheme:?}")]
    UnsupportedFormat {
        pixel_format: PixelFormat,
        scheme: CompressionScheme,
    },

    /// Payload is too short to hold the data the dimensions call for
    #[error("Texture payload too short: required at least {required} bytes, got {actual} bytes")]
    PayloadTooShort { required: usize, actual: usize },

    /// A twiddled lookup points outside the pixel (or index) data
    #[error("Twiddled index {index} is out of range for {len} entries")]
    IndexOutOfRange { index: usize, len: usize },
}
