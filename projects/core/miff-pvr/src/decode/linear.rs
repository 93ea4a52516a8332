use super::{final_level, read_words, texel_count, BYTES_PER_TEXEL};
use crate::error::DecodeResult;
use crate::image::DecodedImage;
use crate::pixel::PixelUnpacker;
use alloc::vec::Vec;

/// Decodes a rectangular (row-major, untwiddled) texture.
///
/// Reads the trailing `width * height` little-endian words of `payload`. Rows are
/// returned in reverse build order.
pub fn decode_linear<P: PixelUnpacker>(
    payload: &[u8],
    width: u32,
    height: u32,
) -> DecodeResult<DecodedImage> {
    let texels = texel_count(width, height);
    let level = final_level(payload, texels.saturating_mul(BYTES_PER_TEXEL))?;
    let data = read_words(level);

    let row_texels = width as usize;
    let mut rows = Vec::with_capacity(height as usize);
    for words in (0..height as usize).map(|r| &data[r * row_texels..(r + 1) * row_texels]) {
        let mut row = Vec::with_capacity(row_texels * P::LAYOUT.channels());
        for &colour in words {
            P::unpack_into(colour, &mut row);
        }
        rows.push(row);
    }

    rows.reverse();
    Ok(DecodedImage::from_rows(width, P::LAYOUT, rows))
}
