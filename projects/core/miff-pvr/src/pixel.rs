//! Packed 16-bit pixel formats and their expansion to 8 bits per channel.

use crate::image::ChannelLayout;
use alloc::vec::Vec;
use derive_enum_all_values::AllValues;

/// PowerVR pixel format codes.
///
/// Only [`PixelFormat::Argb1555`], [`PixelFormat::Rgb565`] and [`PixelFormat::Argb4444`]
/// can be decoded; the remaining codes exist so that classification results can be
/// reported faithfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
#[repr(u8)]
pub enum PixelFormat {
    Argb1555 = 0,
    Rgb565 = 1,
    Argb4444 = 2,
    Yuv422 = 3,
    Bump = 4,
    /// 4 bits per pixel palettized
    Pal4Bpp = 5,
    /// 8 bits per pixel palettized
    Pal8Bpp = 6,
}

impl PixelFormat {
    /// Channel layout of the decoded pixels, or [`None`] if the format cannot be decoded.
    pub fn channel_layout(self) -> Option<ChannelLayout> {
        match self {
            PixelFormat::Argb1555 | PixelFormat::Argb4444 => Some(ChannelLayout::Rgba),
            PixelFormat::Rgb565 => Some(ChannelLayout::Rgb),
            _ => None,
        }
    }

    /// Whether a decoder exists for this format.
    #[inline]
    pub fn is_supported(self) -> bool {
        self.channel_layout().is_some()
    }
}

/// Scales an `n`-bit channel value with maximum `max` to 0-255, rounding to nearest.
///
/// Computes `round(255 * value / max)` in integer arithmetic. For the maxima used here
/// (15, 31, 63) the quotient never lands exactly on .5, so no tie rule is needed.
#[inline(always)]
const fn scale_to_u8(value: u16, max: u16) -> u8 {
    let value = value as u32;
    let max = max as u32;
    ((510 * value + max) / (2 * max)) as u8
}

/// Unpacks an ARGB1555 word into `[r, g, b, a]`.
///
/// The single alpha bit becomes 0 or 255.
///
/// ```
/// use miff_pvr::pixel::unpack_1555;
///
/// assert_eq!(unpack_1555(0x8000), [0, 0, 0, 255]);
/// assert_eq!(unpack_1555(0x7FFF), [255, 255, 255, 0]);
/// ```
#[inline]
pub const fn unpack_1555(colour: u16) -> [u8; 4] {
    let a = (255 * ((colour >> 15) & 1)) as u8;
    let r = scale_to_u8((colour >> 10) & 0x1F, 31);
    let g = scale_to_u8((colour >> 5) & 0x1F, 31);
    let b = scale_to_u8(colour & 0x1F, 31);
    [r, g, b, a]
}

/// Unpacks an ARGB4444 word into `[r, g, b, a]`.
#[inline]
pub const fn unpack_4444(colour: u16) -> [u8; 4] {
    let a = scale_to_u8((colour >> 12) & 0xF, 15);
    let r = scale_to_u8((colour >> 8) & 0xF, 15);
    let g = scale_to_u8((colour >> 4) & 0xF, 15);
    let b = scale_to_u8(colour & 0xF, 15);
    [r, g, b, a]
}

/// Unpacks an RGB565 word into `[r, g, b]`.
#[inline]
pub const fn unpack_565(colour: u16) -> [u8; 3] {
    let r = scale_to_u8((colour >> 11) & 0x1F, 31);
    let g = scale_to_u8((colour >> 5) & 0x3F, 63);
    let b = scale_to_u8(colour & 0x1F, 31);
    [r, g, b]
}

/// A decodable packed pixel format, used to monomorphize the decode strategies.
pub trait PixelUnpacker {
    /// Layout of the channels appended by [`PixelUnpacker::unpack_into`].
    const LAYOUT: ChannelLayout;

    /// Appends the expanded channels of `colour` to `row`.
    fn unpack_into(colour: u16, row: &mut Vec<u8>);
}

/// [`PixelUnpacker`] for [`PixelFormat::Argb1555`].
pub struct Argb1555;

/// [`PixelUnpacker`] for [`PixelFormat::Argb4444`].
pub struct Argb4444;

/// [`PixelUnpacker`] for [`PixelFormat::Rgb565`].
pub struct Rgb565;

impl PixelUnpacker for Argb1555 {
    const LAYOUT: ChannelLayout = ChannelLayout::Rgba;

    #[inline(always)]
    fn unpack_into(colour: u16, row: &mut Vec<u8>) {
        row.extend_from_slice(&unpack_1555(colour));
    }
}

impl PixelUnpacker for Argb4444 {
    const LAYOUT: ChannelLayout = ChannelLayout::Rgba;

    #[inline(always)]
    fn unpack_into(colour: u16, row: &mut Vec<u8>) {
        row.extend_from_slice(&unpack_4444(colour));
    }
}

impl PixelUnpacker for Rgb565 {
    const LAYOUT: ChannelLayout = ChannelLayout::Rgb;

    #[inline(always)]
    fn unpack_into(colour: u16, row: &mut Vec<u8>) {
        row.extend_from_slice(&unpack_565(colour));
    }
}
