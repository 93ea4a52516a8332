//! Common test imports and MBmp payload builders.
#![allow(unused_imports)]

pub use miff_container::{read_container, Endianness, MiffWriter, RecordTag};
pub use rstest::rstest;

use crate::bitmap::constants::*;
use endian_writer::{EndianWriter, LittleEndianWriter};

/// A zeroed sub-header with the given format bytes and dimensions.
pub fn sub_header(f0: u8, f1: u8, width: u32, height: u32) -> Vec<u8> {
    let mut data = vec![0u8; SUB_HEADER_SIZE];
    data[FORMAT0_OFFSET] = f0;
    data[FORMAT1_OFFSET] = f1;

    let mut writer = unsafe { LittleEndianWriter::new(data.as_mut_ptr()) };
    unsafe {
        writer.write_u32_at(width, WIDTH_OFFSET as isize);
        writer.write_u32_at(height, HEIGHT_OFFSET as isize);
    }
    data
}

/// A complete MBmp payload: sub-header followed by little-endian texel words.
pub fn bitmap_payload(f0: u8, f1: u8, width: u32, height: u32, words: &[u16]) -> Vec<u8> {
    let mut data = sub_header(f0, f1, width, height);
    for word in words {
        data.extend_from_slice(&word.to_le_bytes());
    }
    data
}
