//! Container bytes in, decoded images out.

use miff_container::{Dispatcher, Endianness, MiffWriter, RecordTag};
use miff_mbmp::{BitmapError, BitmapHandler, NamedImage};
use miff_pvr::pixel::unpack_565;
use miff_pvr::{ChannelLayout, DecodeError};

fn mbmp_payload(f0: u8, f1: u8, width: u32, height: u32, texels: &[u8]) -> Vec<u8> {
    let mut payload = vec![f0, 0, 0, f1];
    payload.extend_from_slice(&0u32.to_le_bytes());
    payload.extend_from_slice(&width.to_le_bytes());
    payload.extend_from_slice(&height.to_le_bytes());
    payload.extend_from_slice(&0u32.to_le_bytes());
    payload.extend_from_slice(texels);
    payload
}

fn dispatch(bytes: &[u8]) -> miff_container::DispatchOutcome<Vec<NamedImage>> {
    let mut dispatcher = Dispatcher::<Vec<NamedImage>>::new();
    dispatcher.register(RecordTag::BITMAP, BitmapHandler);
    dispatcher.dispatch(bytes, Vec::new()).unwrap()
}

#[test]
fn minimal_rectangle_container_decodes_to_reversed_rgb_rows() {
    let texels = [0x00, 0xF8, 0xE0, 0x07, 0x1F, 0x00, 0x34, 0x12];
    let payload = mbmp_payload(0, 0x00, 2, 2, &texels);

    let mut writer = MiffWriter::new(Endianness::Little);
    writer
        .push_record(RecordTag::BITMAP, [1.0, 1.0], "TEX", "", &payload)
        .unwrap();
    let outcome = dispatch(&writer.finish());

    assert_eq!(outcome.report.handled, 1);
    let image = &outcome.collector[0].image;
    assert_eq!(outcome.collector[0].name, "TEX");
    assert_eq!(image.layout(), ChannelLayout::Rgb);
    assert_eq!((image.width(), image.height()), (2, 2));

    let expected_row = |a: u16, b: u16| [unpack_565(a), unpack_565(b)].concat();
    assert_eq!(image.rows()[0], expected_row(0x001F, 0x1234));
    assert_eq!(image.rows()[1], expected_row(0xF800, 0x07E0));
}

#[test]
fn vq_with_uniform_codebook_is_uniform() {
    let width = 8u32;
    let height = 8u32;
    let mut texels = Vec::new();
    for _ in 0..1024 {
        texels.extend_from_slice(&0xF81Fu16.to_le_bytes());
    }
    texels.push(0);
    texels.extend((0..width * height / 4).map(|i| (i * 37) as u8));

    let payload = mbmp_payload(0, 0xC0, width, height, &texels);
    let mut writer = MiffWriter::new(Endianness::Big);
    writer
        .push_record(RecordTag::BITMAP, [0.0; 2], "vq", "", &payload)
        .unwrap();
    let outcome = dispatch(&writer.finish());

    let image = &outcome.collector[0].image;
    assert_eq!(image.height(), height);
    for row in image.rows() {
        assert!(row.chunks(3).all(|px| px == [255, 0, 255]));
    }
}

#[test]
fn bad_bitmaps_are_reported_and_the_walk_continues() {
    let mut writer = MiffWriter::new(Endianness::Little);
    writer
        .push_record(RecordTag::BITMAP, [0.0; 2], "short", "", &[0; 8])
        .unwrap()
        .push_record(
            RecordTag::BITMAP,
            [0.0; 2],
            "huge",
            "",
            &mbmp_payload(0, 0x00, 0x80000 + 1, 1, &[]),
        )
        .unwrap()
        .push_record(RecordTag::SCRIPT, [0.0; 2], "line", "", b"hello")
        .unwrap()
        .push_record(
            RecordTag::BITMAP,
            [0.0; 2],
            "ok",
            "",
            &mbmp_payload(0, 0x20, 1, 1, &[0xFF, 0xFF]),
        )
        .unwrap();
    let outcome = dispatch(&writer.finish());

    assert_eq!(outcome.report.handled, 1);
    assert_eq!(outcome.collector[0].name, "ok");
    assert_eq!(outcome.collector[0].image.layout(), ChannelLayout::Rgba);
    assert_eq!(outcome.report.skipped.len(), 1);
    assert_eq!(outcome.report.skipped[0].tag, RecordTag::SCRIPT);

    let failures = &outcome.report.failures;
    assert_eq!(failures.len(), 2);
    assert_eq!(
        failures[0].error.downcast_ref::<BitmapError>(),
        Some(&BitmapError::SubHeaderTooShort { actual: 8 })
    );
    assert!(matches!(
        failures[1].error.downcast_ref::<BitmapError>(),
        Some(BitmapError::Decode(DecodeError::Dimension { .. }))
    ));
}
