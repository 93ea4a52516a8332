//! PNG export for decoded textures

use crate::error::ImageWriteError;
use miff_pvr::{ChannelLayout, DecodedImage};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Writes `image` to `path` as an 8-bit RGB or RGBA PNG.
pub fn write_png(image: &DecodedImage, path: &Path) -> Result<(), ImageWriteError> {
    if image.is_empty() {
        return Err(ImageWriteError::Empty(path.display().to_string()));
    }

    let file = File::create(path)?;
    let w = BufWriter::new(file);

    let mut encoder = png::Encoder::new(w, image.width(), image.height());
    encoder.set_color(match image.layout() {
        ChannelLayout::Rgb => png::ColorType::Rgb,
        ChannelLayout::Rgba => png::ColorType::Rgba,
    });
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::Default);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(&image.to_packed())?;
    writer.finish()?;
    Ok(())
}
