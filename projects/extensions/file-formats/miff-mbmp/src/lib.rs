#![doc = include_str!("../README.MD")]

#[cfg(test)]
pub mod test_prelude;

pub mod bitmap;
pub mod error;
pub mod handler;

pub use bitmap::classify::classify;
pub use bitmap::sub_header::ImageSubHeader;
pub use error::{BitmapError, BitmapResult};
pub use handler::{decode_bitmap_record, BitmapHandler, ImageSink, NamedImage};
