#![no_main]

// Whatever the writer produces, the reader must read back unchanged.

use libfuzzer_sys::{arbitrary, fuzz_target};
use miff_container::{read_container, Endianness, MiffWriter, RecordTag};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct FuzzRecord {
    pub tag: [u8; 4],
    pub metadata: [u32; 2],
    pub name: String,
    pub aux_name: String,
    pub payload: Vec<u8>,
}

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct FuzzContainer {
    pub little_endian: bool,
    pub records: Vec<FuzzRecord>,
}

/// Names the reader returns unchanged: printable ASCII only.
fn printable(name: &str) -> String {
    name.chars().filter(|c| (' '..='\x7F').contains(c)).collect()
}

fuzz_target!(|input: FuzzContainer| {
    let endianness = if input.little_endian {
        Endianness::Little
    } else {
        Endianness::Big
    };

    let mut writer = MiffWriter::new(endianness);
    for record in &input.records {
        // Floats go in as raw bits so NaN payloads compare bitwise below.
        let metadata = record.metadata.map(f32::from_bits);
        writer
            .push_record(
                RecordTag::new(record.tag),
                metadata,
                &printable(&record.name),
                &printable(&record.aux_name),
                &record.payload,
            )
            .unwrap();
    }
    let bytes = writer.finish();

    let container = read_container(&bytes).unwrap();
    assert_eq!(container.header.endianness, endianness);
    assert_eq!(container.records.len(), input.records.len());
    for (read, written) in container.records.iter().zip(&input.records) {
        assert_eq!(read.tag.as_bytes(), &written.tag);
        assert_eq!(read.metadata.map(f32::to_bits), written.metadata);
        assert_eq!(read.name, printable(&written.name));
        assert_eq!(read.aux_name, printable(&written.aux_name));
        assert_eq!(read.payload, &written.payload[..]);
    }
});
