//! Record handler that turns `MBmp` records into decoded images.

use crate::bitmap::classify::classify;
use crate::bitmap::sub_header::ImageSubHeader;
use crate::error::BitmapResult;
use miff_container::{Record, RecordHandler, RecordHandlerError};
use miff_pvr::{decode_texture, DecodedImage};
use tracing::debug;

/// A decoded bitmap together with the name of the record it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedImage {
    pub name: String,
    pub image: DecodedImage,
}

/// Receives images decoded by [`BitmapHandler`].
pub trait ImageSink {
    fn accept(&mut self, name: &str, image: DecodedImage) -> Result<(), RecordHandlerError>;
}

impl ImageSink for Vec<NamedImage> {
    fn accept(&mut self, name: &str, image: DecodedImage) -> Result<(), RecordHandlerError> {
        self.push(NamedImage {
            name: name.to_owned(),
            image,
        });
        Ok(())
    }
}

/// Decodes the texture stored in an MBmp payload.
///
/// # Errors
///
/// - [`crate::BitmapError::SubHeaderTooShort`] if the payload has no complete sub-header.
/// - [`crate::BitmapError::Decode`] if the texture data cannot be decoded.
pub fn decode_bitmap_record(payload: &[u8]) -> BitmapResult<DecodedImage> {
    let header = ImageSubHeader::parse(payload)?;
    let format = classify(header.f0, header.f1);

    debug!(
        f0 = header.f0,
        f1 = header.f1,
        pixel_format = ?format.pixel_format,
        scheme = ?format.scheme,
        width = header.width,
        height = header.height,
        "Decoding bitmap"
    );

    let image = decode_texture(
        ImageSubHeader::texture_data(payload),
        format,
        header.width,
        header.height,
    )?;
    Ok(image)
}

/// Handles `MBmp` records by decoding them and passing the image to an [`ImageSink`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BitmapHandler;

impl<C: ImageSink> RecordHandler<C> for BitmapHandler {
    fn handle(&self, record: &Record<'_>, collector: &mut C) -> Result<(), RecordHandlerError> {
        let image = decode_bitmap_record(record.payload)?;
        debug!(
            name = %record.name,
            layout = %image.layout(),
            width = image.width(),
            height = image.height(),
            "Decoded bitmap"
        );
        collector.accept(&record.name, image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BitmapError;
    use crate::test_prelude::*;
    use miff_pvr::{ChannelLayout, DecodeError};

    #[test]
    fn rectangle_565_rows_are_reversed() {
        // Build order: row 0 = [red, green], row 1 = [blue, white]
        let payload = bitmap_payload(0, 0x00, 2, 2, &[0xF800, 0x07E0, 0x001F, 0xFFFF]);
        let image = decode_bitmap_record(&payload).unwrap();

        assert_eq!(image.layout(), ChannelLayout::Rgb);
        assert_eq!(image.rows()[0], [0, 0, 255, 255, 255, 255]);
        assert_eq!(image.rows()[1], [255, 0, 0, 0, 255, 0]);
    }

    #[test]
    fn rectangle_4444_has_alpha() {
        let payload = bitmap_payload(0, 0x20, 1, 1, &[0xF0F0]);
        let image = decode_bitmap_record(&payload).unwrap();
        assert_eq!(image.layout(), ChannelLayout::Rgba);
        assert_eq!(image.rows()[0], [0, 255, 0, 255]);
    }

    #[test]
    fn twiddled_mipmap_1555_reads_final_level() {
        // Smaller mip levels precede the largest one; only the last 4 words matter.
        let payload = bitmap_payload(4, 0x80, 2, 2, &[0x1234, 0x8000, 0x8000, 0x8000, 0x8000]);
        let image = decode_bitmap_record(&payload).unwrap();
        assert_eq!(image.layout(), ChannelLayout::Rgba);
        for row in image.rows() {
            assert_eq!(row, &[0, 0, 0, 255, 0, 0, 0, 255]);
        }
    }

    #[test]
    fn short_sub_header_is_reported() {
        assert_eq!(
            decode_bitmap_record(&[0; 10]),
            Err(BitmapError::SubHeaderTooShort { actual: 10 })
        );
    }

    #[test]
    fn oversized_dimensions_are_reported() {
        let payload = bitmap_payload(0, 0x00, 0x80001, 1, &[]);
        assert!(matches!(
            decode_bitmap_record(&payload),
            Err(BitmapError::Decode(DecodeError::Dimension { .. }))
        ));
    }

    #[test]
    fn truncated_texture_is_reported() {
        let payload = bitmap_payload(0, 0x00, 4, 4, &[0; 3]);
        assert_eq!(
            decode_bitmap_record(&payload),
            Err(BitmapError::Decode(DecodeError::PayloadTooShort {
                required: 32,
                actual: 6
            }))
        );
    }

    #[test]
    fn handler_feeds_sink() {
        let payload = bitmap_payload(0, 0x00, 1, 1, &[0xFFFF]);
        let mut writer = MiffWriter::new(Endianness::Big);
        writer
            .push_record(RecordTag::BITMAP, [0.0; 2], "a/b/white", "", &payload)
            .unwrap();
        let bytes = writer.finish();
        let record = read_container(&bytes).unwrap().records.remove(0);

        let mut sink = Vec::<NamedImage>::new();
        BitmapHandler.handle(&record, &mut sink).unwrap();
        assert_eq!(sink.len(), 1);
        assert_eq!(sink[0].name, "a/b/white");
        assert_eq!(sink[0].image.rows()[0], [255, 255, 255]);
    }
}
