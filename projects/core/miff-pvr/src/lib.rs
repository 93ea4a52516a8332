#![doc = include_str!("../README.MD")]
#![no_std]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[cfg(test)]
pub mod test_prelude;

pub mod decode;
pub mod error;
pub mod format;
pub mod image;
pub mod pixel;
pub mod twiddle;

pub use decode::decode_texture;
pub use error::{DecodeError, DecodeResult};
pub use format::{CompressionScheme, DecodeStrategy, TextureFormat};
pub use image::{ChannelLayout, DecodedImage};
pub use pixel::PixelFormat;
