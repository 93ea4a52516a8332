use super::constants::*;
use crate::error::{BitmapError, BitmapResult};
use endian_writer::{EndianReader, LittleEndianReader};

/// The fixed header at the start of every MBmp payload.
///
/// The sub-header is always little-endian, whatever the container's endianness tag says.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageSubHeader {
    /// Format byte 0; refines the pixel format for some `f1` values.
    pub f0: u8,
    pub unknown0: u8,
    pub unknown1: u8,
    /// Format byte 1; selects the compression scheme.
    pub f1: u8,
    pub unknown2: u32,
    pub width: u32,
    pub height: u32,
    pub unknown3: u32,
}

impl ImageSubHeader {
    /// Parses the sub-header from the start of an MBmp payload.
    ///
    /// # Errors
    ///
    /// [`BitmapError::SubHeaderTooShort`] if `payload` holds fewer than
    /// [`SUB_HEADER_SIZE`] bytes.
    pub fn parse(payload: &[u8]) -> BitmapResult<Self> {
        if payload.len() < SUB_HEADER_SIZE {
            return Err(BitmapError::SubHeaderTooShort {
                actual: payload.len(),
            });
        }

        // SAFETY: payload.len() >= SUB_HEADER_SIZE (20), so every u32 read below, the
        // last one at UNKNOWN3_OFFSET (16) + 4, stays in bounds.
        let mut reader = unsafe { LittleEndianReader::new(payload.as_ptr()) };
        let (unknown2, width, height, unknown3) = unsafe {
            (
                reader.read_u32_at(UNKNOWN2_OFFSET as isize),
                reader.read_u32_at(WIDTH_OFFSET as isize),
                reader.read_u32_at(HEIGHT_OFFSET as isize),
                reader.read_u32_at(UNKNOWN3_OFFSET as isize),
            )
        };

        Ok(Self {
            f0: payload[FORMAT0_OFFSET],
            unknown0: payload[UNKNOWN0_OFFSET],
            unknown1: payload[UNKNOWN1_OFFSET],
            f1: payload[FORMAT1_OFFSET],
            unknown2,
            width,
            height,
            unknown3,
        })
    }

    /// Texture data following the sub-header.
    #[inline]
    pub fn texture_data(payload: &[u8]) -> &[u8] {
        payload.get(SUB_HEADER_SIZE..).unwrap_or_default()
    }
}
