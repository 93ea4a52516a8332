//! MBmp sub-header constants

/// Size of the sub-header preceding the texture data in every MBmp payload.
pub const SUB_HEADER_SIZE: usize = 20;

pub(crate) const FORMAT0_OFFSET: usize = 0;
pub(crate) const UNKNOWN0_OFFSET: usize = 1;
pub(crate) const UNKNOWN1_OFFSET: usize = 2;
pub(crate) const FORMAT1_OFFSET: usize = 3;
pub(crate) const UNKNOWN2_OFFSET: usize = 4;
pub(crate) const WIDTH_OFFSET: usize = 8;
pub(crate) const HEIGHT_OFFSET: usize = 12;
pub(crate) const UNKNOWN3_OFFSET: usize = 16;

// Observed `f1` values.
pub const F1_VQ: u8 = 0xE0;
pub const F1_TWIDDLED_MIPMAP_4444: u8 = 0xA0;
pub const F1_VQ_565: u8 = 0xC0;
pub const F1_VQ_MIPMAP_565: u8 = 0xD0;
pub const F1_VQ_MIPMAP: u8 = 0xF0;
pub const F1_TWIDDLED_MIPMAP: u8 = 0x80;
pub const F1_RECTANGLE_4444: u8 = 0x20;
pub const F1_RECTANGLE_565: u8 = 0x00;

/// `f0` value selecting ARGB4444 for the 0xE0 / 0xF0 VQ variants.
pub const F0_ARGB4444: u8 = 3;
/// `f0` value selecting ARGB1555 for the 0x80 twiddled variant.
pub const F0_ARGB1555: u8 = 4;
