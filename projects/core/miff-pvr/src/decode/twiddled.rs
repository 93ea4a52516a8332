use super::{final_level, read_words, texel_count, BYTES_PER_TEXEL};
use crate::error::{DecodeError, DecodeResult};
use crate::image::DecodedImage;
use crate::pixel::PixelUnpacker;
use crate::twiddle::morton;
use alloc::vec::Vec;

/// Decodes a twiddled (Morton ordered) texture.
///
/// Reads the trailing `width * height` little-endian words of `payload`, skipping any
/// smaller mip levels stored before them. Texel (`i`, `j`) is fetched from
/// `morton(i, j)` when `j <= i` and from `morton(j, i)` otherwise; the twiddle order on
/// disk only covers one triangular half and is mirrored across the diagonal.
///
/// Rows are returned in reverse build order: the first row of the result is row
/// `height - 1`.
pub fn decode_twiddled<P: PixelUnpacker>(
    payload: &[u8],
    width: u32,
    height: u32,
) -> DecodeResult<DecodedImage> {
    let texels = texel_count(width, height);
    let level = final_level(payload, texels.saturating_mul(BYTES_PER_TEXEL))?;
    let data = read_words(level);

    let row_len = width as usize * P::LAYOUT.channels();
    let mut rows = Vec::with_capacity(height as usize);
    for i in 0..height {
        let mut row = Vec::with_capacity(row_len);
        for j in 0..width {
            let index = (if j <= i { morton(i, j) } else { morton(j, i) }) as usize;
            let colour = *data.get(index).ok_or(DecodeError::IndexOutOfRange {
                index,
                len: data.len(),
            })?;
            P::unpack_into(colour, &mut row);
        }
        rows.push(row);
    }

    rows.reverse();
    Ok(DecodedImage::from_rows(width, P::LAYOUT, rows))
}
