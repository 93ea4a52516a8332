//! Texture encoding descriptors and decode strategy selection.

use crate::error::{DecodeError, DecodeResult};
pub use crate::pixel::PixelFormat;

/// PowerVR texture compression/layout scheme codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CompressionScheme {
    SquareTwiddled = 0x1,
    SquareTwiddledMipmap = 0x2,
    Vq = 0x3,
    VqMipmap = 0x4,
    ClutTwiddled8Bit = 0x5,
    ClutTwiddled4Bit = 0x6,
    DirectTwiddled8Bit = 0x7,
    DirectTwiddled4Bit = 0x8,
    Rectangle = 0x9,
    RectangularStride = 0xB,
    RectangularTwiddled = 0xD,
    SmallVq = 0x10,
    SmallVqMipmap = 0x11,
    SquareTwiddledMipmapAlt = 0x12,
}

/// The three decode algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeStrategy {
    /// Morton-ordered texels, largest mip level last
    Twiddled,
    /// 2x2 codebook blocks addressed by a twiddled index map
    VectorQuantized,
    /// Row-major texels
    Linear,
}

/// Pixel format plus compression scheme, as produced by a format classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureFormat {
    pub pixel_format: PixelFormat,
    pub scheme: CompressionScheme,
}

impl TextureFormat {
    pub const fn new(pixel_format: PixelFormat, scheme: CompressionScheme) -> Self {
        Self {
            pixel_format,
            scheme,
        }
    }

    /// Picks the decode algorithm for this format.
    ///
    /// # Errors
    ///
    /// [`DecodeError::UnsupportedFormat`] if either the pixel format or the scheme has
    /// no decoder.
    pub fn strategy(&self) -> DecodeResult<DecodeStrategy> {
        let unsupported = || DecodeError::UnsupportedFormat {
            pixel_format: self.pixel_format,
            scheme: self.scheme,
        };

        if !self.pixel_format.is_supported() {
            return Err(unsupported());
        }

        match self.scheme {
            CompressionScheme::SquareTwiddled | CompressionScheme::SquareTwiddledMipmap => {
                Ok(DecodeStrategy::Twiddled)
            }
            CompressionScheme::Vq | CompressionScheme::VqMipmap => {
                Ok(DecodeStrategy::VectorQuantized)
            }
            CompressionScheme::Rectangle => Ok(DecodeStrategy::Linear),
            _ => Err(unsupported()),
        }
    }
}
