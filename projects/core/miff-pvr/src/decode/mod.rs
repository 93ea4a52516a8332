//! Texture decode strategies.
//!
//! Every strategy reads only the largest mip level. PowerVR stores mip levels from
//! smallest to largest, so the largest level is always the tail of the payload.

mod linear;
mod twiddled;
mod vq;

pub use linear::decode_linear;
pub use twiddled::decode_twiddled;
pub use vq::{decode_vq, CODEBOOK_ENTRIES, CODEBOOK_SIZE};

use crate::error::{DecodeError, DecodeResult};
use crate::format::{DecodeStrategy, PixelFormat, TextureFormat};
use crate::image::DecodedImage;
use crate::pixel::{Argb1555, Argb4444, PixelUnpacker, Rgb565};
use crate::twiddle::validate_dimensions;
use alloc::vec::Vec;

/// Size in bytes of one packed texel.
pub const BYTES_PER_TEXEL: usize = 2;

/// Decodes the texture in `payload` (the record data following the image sub-header).
///
/// Dimensions are validated before the payload is inspected.
///
/// # Errors
///
/// - [`DecodeError::Dimension`] when `width` or `height` exceeds the supported bound.
/// - [`DecodeError::UnsupportedFormat`] when `format` has no decoder.
/// - [`DecodeError::PayloadTooShort`] / [`DecodeError::IndexOutOfRange`] when the
///   payload does not hold the data the dimensions call for.
pub fn decode_texture(
    payload: &[u8],
    format: TextureFormat,
    width: u32,
    height: u32,
) -> DecodeResult<DecodedImage> {
    validate_dimensions(width, height)?;
    let strategy = format.strategy()?;

    match format.pixel_format {
        PixelFormat::Argb1555 => run::<Argb1555>(strategy, payload, width, height),
        PixelFormat::Argb4444 => run::<Argb4444>(strategy, payload, width, height),
        PixelFormat::Rgb565 => run::<Rgb565>(strategy, payload, width, height),
        pixel_format => Err(DecodeError::UnsupportedFormat {
            pixel_format,
            scheme: format.scheme,
        }),
    }
}

#[inline]
fn run<P: PixelUnpacker>(
    strategy: DecodeStrategy,
    payload: &[u8],
    width: u32,
    height: u32,
) -> DecodeResult<DecodedImage> {
    match strategy {
        DecodeStrategy::Twiddled => decode_twiddled::<P>(payload, width, height),
        DecodeStrategy::VectorQuantized => decode_vq::<P>(payload, width, height),
        DecodeStrategy::Linear => decode_linear::<P>(payload, width, height),
    }
}

/// Number of texels in a `width` x `height` image, saturating on overflow.
#[inline]
pub(crate) fn texel_count(width: u32, height: u32) -> usize {
    usize::try_from(width as u64 * height as u64).unwrap_or(usize::MAX)
}

/// Returns the trailing `len` bytes of `payload`.
#[inline]
pub(crate) fn final_level(payload: &[u8], len: usize) -> DecodeResult<&[u8]> {
    if payload.len() < len {
        return Err(DecodeError::PayloadTooShort {
            required: len,
            actual: payload.len(),
        });
    }

    Ok(&payload[payload.len() - len..])
}

/// Reads little-endian 16-bit words.
#[inline]
pub(crate) fn read_words(bytes: &[u8]) -> Vec<u16> {
    bytes
        .chunks_exact(BYTES_PER_TEXEL)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect()
}
