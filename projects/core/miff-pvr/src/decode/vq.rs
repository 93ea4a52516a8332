use super::{read_words, texel_count};
use crate::error::{DecodeError, DecodeResult};
use crate::image::DecodedImage;
use crate::pixel::PixelUnpacker;
use crate::twiddle::morton;
use alloc::vec::Vec;

/// Number of colour words in a VQ codebook.
pub const CODEBOOK_ENTRIES: usize = 1024;

/// Size in bytes of a VQ codebook.
pub const CODEBOOK_SIZE: usize = CODEBOOK_ENTRIES * 2;

/// Codebook words that make up one 2x2 block.
const WORDS_PER_BLOCK: usize = 4;

/// Decodes a vector-quantized texture.
///
/// The payload starts with a [`CODEBOOK_SIZE`] byte codebook; each group of four
/// consecutive words is a 2x2 block (words 0 and 2 on one row, 1 and 3 on the next).
/// The index map of the largest mip level is the trailing `width * height / 4` bytes,
/// addressed in twiddled order. Reading from the end also skips the padding byte that
/// sits between the codebook and the first mip level.
///
/// The result covers `[0, height / 2) x [0, width / 2)` blocks, so odd dimensions lose
/// their last row or column. Rows are returned in reverse build order.
pub fn decode_vq<P: PixelUnpacker>(
    payload: &[u8],
    width: u32,
    height: u32,
) -> DecodeResult<DecodedImage> {
    let index_len = texel_count(width, height) / 4;
    let required = index_len.saturating_add(CODEBOOK_SIZE);
    if payload.len() < required {
        return Err(DecodeError::PayloadTooShort {
            required,
            actual: payload.len(),
        });
    }

    let codebook = read_words(&payload[..CODEBOOK_SIZE]);
    let indices = &payload[payload.len() - index_len..];

    let blocks_x = width / 2;
    let blocks_y = height / 2;
    let row_len = blocks_x as usize * 2 * P::LAYOUT.channels();

    let mut rows = Vec::with_capacity(blocks_y as usize * 2);
    for i in 0..blocks_y {
        let mut upper = Vec::with_capacity(row_len);
        let mut lower = Vec::with_capacity(row_len);
        for j in 0..blocks_x {
            let index = morton(i, j) as usize;
            let block = *indices.get(index).ok_or(DecodeError::IndexOutOfRange {
                index,
                len: indices.len(),
            })?;

            let entry = WORDS_PER_BLOCK * block as usize;
            let words = &codebook[entry..entry + WORDS_PER_BLOCK];
            P::unpack_into(words[0], &mut upper);
            P::unpack_into(words[1], &mut lower);
            P::unpack_into(words[2], &mut upper);
            P::unpack_into(words[3], &mut lower);
        }
        rows.push(upper);
        rows.push(lower);
    }

    rows.reverse();
    Ok(DecodedImage::from_rows(blocks_x * 2, P::LAYOUT, rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::{unpack_1555, unpack_4444, Argb1555, Argb4444, Rgb565};
    use crate::test_prelude::*;

    #[rstest]
    #[case(4, 4, 0x00)]
    #[case(8, 8, 0x5A)]
    #[case(8, 8, 0xFF)]
    #[case(16, 16, 0x13)]
    fn uniform_codebook_gives_uniform_image(
        #[case] width: u32,
        #[case] height: u32,
        #[case] index_fill: u8,
    ) {
        let codebook = [0xF0F0u16; CODEBOOK_ENTRIES];
        let indices = vec![index_fill; (width * height / 4) as usize];
        let payload = vq_payload(&codebook, &indices);

        let image = decode_vq::<Argb4444>(&payload, width, height).unwrap();
        let colour = unpack_4444(0xF0F0);

        assert_eq!(image.width(), width);
        assert_eq!(image.height(), height);
        for row in image.rows() {
            for pixel in row.chunks_exact(4) {
                assert_eq!(pixel, &colour[..]);
            }
        }
    }

    #[test]
    fn block_words_are_split_across_two_rows() {
        let mut codebook = [0u16; CODEBOOK_ENTRIES];
        // Block 1: words 0..4 = red, green, blue, white (ARGB1555, opaque)
        codebook[4..8].copy_from_slice(&[0xFC00, 0x83E0, 0x801F, 0xFFFF]);
        let payload = vq_payload(&codebook, &[1]);

        let image = decode_vq::<Argb1555>(&payload, 2, 2).unwrap();

        // Built as [upper, lower] then reversed.
        let lower = [unpack_1555(0x83E0), unpack_1555(0xFFFF)].concat();
        let upper = [unpack_1555(0xFC00), unpack_1555(0x801F)].concat();
        assert_eq!(image.rows()[0], lower);
        assert_eq!(image.rows()[1], upper);
    }

    #[test]
    fn index_map_is_read_in_twiddled_order_from_the_end() {
        let mut codebook = [0u16; CODEBOOK_ENTRIES];
        for block in 0..4 {
            // Fill block `block` with a distinct RGB565 grey level.
            let value = (block as u16 + 1) * 0x0841;
            codebook[block * 4..block * 4 + 4].fill(value);
        }
        // 4x4 image → 2x2 blocks; a smaller leading level is skipped.
        let mut payload = vq_payload(&codebook, &[3]);
        payload.extend_from_slice(&[0, 1, 2, 3]);

        let image = decode_vq::<Rgb565>(&payload, 4, 4).unwrap();
        assert_eq!(image.rows().len(), 4);

        // Block (i, j) uses index morton(i, j); block row i lands at output rows
        // 3 - 2i (upper) and 2 - 2i (lower).
        for i in 0..2u32 {
            for j in 0..2u32 {
                let block = morton(i, j) as u16;
                let expected = ((block + 1) * 0x0841) >> 11;
                let pixel = image.pixel(2 * j, 3 - 2 * i).unwrap();
                let red = (pixel[0] as u32 * 31 + 127) / 255;
                assert_eq!(red as u16, expected, "block ({i}, {j})");
            }
        }
    }

    #[test]
    fn odd_dimensions_truncate_to_whole_blocks() {
        let codebook = [0u16; CODEBOOK_ENTRIES];
        let payload = vq_payload(&codebook, &[0; 3]);
        let image = decode_vq::<Rgb565>(&payload, 3, 5).unwrap();

        assert_eq!(image.width(), 2);
        assert_eq!(image.height(), 4);
    }

    #[test]
    fn payload_without_codebook_is_an_error() {
        let payload = [0u8; CODEBOOK_SIZE - 1];
        assert_eq!(
            decode_vq::<Rgb565>(&payload, 2, 2),
            Err(DecodeError::PayloadTooShort {
                required: CODEBOOK_SIZE + 1,
                actual: CODEBOOK_SIZE - 1
            })
        );
    }
}
