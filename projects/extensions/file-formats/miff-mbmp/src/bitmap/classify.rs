use super::constants::*;
use miff_pvr::{CompressionScheme, PixelFormat, TextureFormat};

/// Maps the two MBmp format bytes to a PowerVR pixel format and compression scheme.
///
/// Total over every `(f0, f1)` pair: unknown `f1` values fall back to a square
/// twiddled RGB565 texture.
pub const fn classify(f0: u8, f1: u8) -> TextureFormat {
    use CompressionScheme::*;
    use PixelFormat::*;

    let (pixel_format, scheme) = match f1 {
        F1_VQ if f0 == F0_ARGB4444 => (Argb4444, Vq),
        F1_VQ => (Rgb565, Vq),
        F1_TWIDDLED_MIPMAP_4444 => (Argb4444, SquareTwiddledMipmap),
        F1_VQ_565 => (Rgb565, Vq),
        F1_VQ_MIPMAP_565 => (Rgb565, VqMipmap),
        F1_VQ_MIPMAP if f0 == F0_ARGB4444 => (Argb4444, VqMipmap),
        F1_VQ_MIPMAP => (Rgb565, VqMipmap),
        F1_TWIDDLED_MIPMAP if f0 == F0_ARGB1555 => (Argb1555, SquareTwiddledMipmap),
        F1_TWIDDLED_MIPMAP => (Rgb565, SquareTwiddledMipmap),
        F1_RECTANGLE_4444 => (Argb4444, Rectangle),
        F1_RECTANGLE_565 => (Rgb565, Rectangle),
        _ => (Rgb565, SquareTwiddled),
    };

    TextureFormat::new(pixel_format, scheme)
}
