#![no_main]

// Arbitrary bytes must either parse or fail with an error; never panic or read past
// the declared container size.

use libfuzzer_sys::fuzz_target;
use miff_container::{read_container, Dispatcher, MiffReader, RecordTag};
use miff_mbmp::{BitmapHandler, NamedImage};

fuzz_target!(|data: &[u8]| {
    let Ok(reader) = MiffReader::new(data) else {
        return;
    };
    let declared = reader.header().declared_size as usize;

    let mut end = 12;
    for record in reader {
        let Ok(record) = record else {
            break;
        };
        assert_eq!(record.offset, end);
        end += record.total_length();
        assert!(end <= declared);
        assert!(end <= data.len());
    }

    if let Ok(container) = read_container(data) {
        let total: usize = container.records.iter().map(|r| r.total_length()).sum();
        assert!(12 + total <= declared.max(12));
    }

    // Bitmap decoding errors are record-local; only container errors may surface.
    let mut dispatcher = Dispatcher::<Vec<NamedImage>>::new();
    dispatcher.register(RecordTag::BITMAP, BitmapHandler);
    let _ = dispatcher.dispatch(data, Vec::new());
});
