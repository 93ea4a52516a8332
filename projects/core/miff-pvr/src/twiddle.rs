//! Morton (Z-order) addressing for twiddled textures.
//!
//! Twiddled textures store their texels along a space-filling curve rather than
//! row by row. The curve position of a texel is obtained by interleaving the bits
//! of its two coordinates, which is what [`morton`] computes.

use crate::error::{DecodeError, DecodeResult};

/// Largest width accepted by the decoders.
pub const MAX_WIDTH: u32 = 0x80000;

/// Largest height accepted by the decoders.
pub const MAX_HEIGHT: u32 = 0x80000;

/// Interleaves the bits of `x` and `y` into a Morton code.
///
/// Bit 0 of the result is bit 0 of `x`, bit 1 is bit 0 of `y`, bit 2 is bit 1 of `x`
/// and so on. The spreading is the 32-bit magic-mask variant, so the result is a
/// true interleave only for coordinates below `0x10000`. Bits 16 to 23 of a coordinate
/// survive the first mask and are spread from bit 16 upwards, overlapping the
/// interleaved low bits. Higher bits are dropped.
///
/// # Examples
///
/// ```
/// use miff_pvr::twiddle::morton;
///
/// assert_eq!(morton(0, 0), 0);
/// assert_eq!(morton(1, 0), 1);
/// assert_eq!(morton(0, 1), 2);
/// assert_eq!(morton(1, 1), 3);
/// ```
#[inline]
pub const fn morton(x: u32, y: u32) -> u32 {
    spread_bits(x) | (spread_bits(y) << 1)
}

/// Moves bit `n` of the low half-word of `v` to bit `2n`.
#[inline(always)]
const fn spread_bits(v: u32) -> u32 {
    let v = (v | (v << 8)) & 0x00ff00ff;
    let v = (v | (v << 4)) & 0x0f0f0f0f;
    let v = (v | (v << 2)) & 0x33333333;
    (v | (v << 1)) & 0x55555555
}

/// Checks the image dimensions against [`MAX_WIDTH`] and [`MAX_HEIGHT`].
///
/// Must be called before any decode strategy touches the payload.
pub fn validate_dimensions(width: u32, height: u32) -> DecodeResult<()> {
    if width > MAX_WIDTH || height > MAX_HEIGHT {
        return Err(DecodeError::Dimension {
            width,
            height,
            max_width: MAX_WIDTH,
            max_height: MAX_HEIGHT,
        });
    }

    Ok(())
}
