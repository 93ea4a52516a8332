//! Decoded pixel grids.

use alloc::vec::Vec;
use core::fmt;

/// Order and count of the channels stored for each decoded pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelLayout {
    /// Red, green, blue
    Rgb,
    /// Red, green, blue, alpha
    Rgba,
}

impl ChannelLayout {
    /// Bytes per pixel.
    #[inline]
    pub const fn channels(self) -> usize {
        match self {
            ChannelLayout::Rgb => 3,
            ChannelLayout::Rgba => 4,
        }
    }

    /// `"RGB"` or `"RGBA"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            ChannelLayout::Rgb => "RGB",
            ChannelLayout::Rgba => "RGBA",
        }
    }
}

impl fmt::Display for ChannelLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully decoded texture.
///
/// Rows are stored top to bottom as they should appear in the output image. The
/// decoders build rows bottom-up, so `rows()[0]` is the last row a decoder produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    width: u32,
    height: u32,
    layout: ChannelLayout,
    rows: Vec<Vec<u8>>,
}

impl DecodedImage {
    /// Wraps rows produced by a decoder.
    ///
    /// Every row must hold `width * layout.channels()` bytes.
    pub(crate) fn from_rows(width: u32, layout: ChannelLayout, rows: Vec<Vec<u8>>) -> Self {
        debug_assert!(rows
            .iter()
            .all(|row| row.len() == width as usize * layout.channels()));

        Self {
            width,
            height: rows.len() as u32,
            layout,
            rows,
        }
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Channel layout of every pixel.
    #[inline]
    pub fn layout(&self) -> ChannelLayout {
        self.layout
    }

    /// Rows, top first.
    #[inline]
    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    /// Channels of the pixel at column `x` of row `y`, if in bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
        let channels = self.layout.channels();
        let start = x as usize * channels;
        self.rows
            .get(y as usize)
            .and_then(|row| row.get(start..start + channels))
    }

    /// Whether the image holds no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Concatenates the rows into a single tightly packed buffer, top row first.
    pub fn to_packed(&self) -> Vec<u8> {
        self.rows.concat()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[rstest]
    #[case(ChannelLayout::Rgb, 3, "RGB")]
    #[case(ChannelLayout::Rgba, 4, "RGBA")]
    fn channel_layout_describes_itself(
        #[case] layout: ChannelLayout,
        #[case] channels: usize,
        #[case] name: &str,
    ) {
        assert_eq!(layout.channels(), channels);
        assert_eq!(layout.as_str(), name);
        assert_eq!(format!("{layout}"), name);
    }

    #[test]
    fn pixel_indexes_rows_and_columns() {
        let image = DecodedImage::from_rows(
            2,
            ChannelLayout::Rgb,
            vec![vec![1, 2, 3, 4, 5, 6], vec![7, 8, 9, 10, 11, 12]],
        );
        assert_eq!(image.height(), 2);
        assert_eq!(image.pixel(1, 0), Some(&[4u8, 5, 6][..]));
        assert_eq!(image.pixel(0, 1), Some(&[7u8, 8, 9][..]));
        assert_eq!(image.pixel(2, 0), None);
        assert_eq!(image.pixel(0, 2), None);
        assert_eq!(image.to_packed(), (1..=12).collect::<Vec<u8>>());
    }
}
