#![no_main]

// Decoding arbitrary payloads under every format byte pair must never panic, and
// successful decodes must produce consistent row shapes.

use libfuzzer_sys::{arbitrary, fuzz_target};
use miff_mbmp::classify;
use miff_pvr::decode_texture;

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct TextureInput {
    pub f0: u8,
    pub f1: u8,
    pub width: u8,
    pub height: u8,
    pub payload: Vec<u8>,
}

fuzz_target!(|input: TextureInput| {
    let format = classify(input.f0, input.f1);
    let width = u32::from(input.width);
    let height = u32::from(input.height);

    let Ok(image) = decode_texture(&input.payload, format, width, height) else {
        return;
    };

    let row_len = image.width() as usize * image.layout().channels();
    assert_eq!(image.rows().len(), image.height() as usize);
    assert!(image.rows().iter().all(|row| row.len() == row_len));
    assert!(image.width() <= width);
    assert!(image.height() <= height);
});
