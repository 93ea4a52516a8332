//! Shared imports and builders for unit tests.

pub use crate::container::Endianness;
pub use crate::tag::RecordTag;
pub use crate::writer::MiffWriter;
pub use rstest::rstest;

/// Three records with distinct tags, names, metadata and payloads.
pub fn sample_container(endianness: Endianness) -> Vec<u8> {
    let mut writer = MiffWriter::new(endianness);
    writer
        .push_record(RecordTag::BITMAP, [1.0, 1.0], "first", "", &[1, 2, 3, 4])
        .unwrap()
        .push_record(RecordTag::SCRIPT, [0.25, 4.0], "second", "aux", b"line")
        .unwrap()
        .push_record(RecordTag::MODEL, [0.0, 0.0], "third", "", &[0xAA; 5])
        .unwrap();
    writer.finish()
}
