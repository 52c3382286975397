//! Fuzz target for reading raw tags from an arbitrary stream.
//!
//! Every tag read must re-encode to exactly the bytes it was read from.
//!
//! Run with: cargo +nightly fuzz run tag_reader

#![no_main]

use libfuzzer_sys::fuzz_target;
use swf_telemetry::RawTag;
use swf_telemetry::format::cursor::ByteCursor;

fuzz_target!(|data: &[u8]| {
    let mut cursor = ByteCursor::new(data.to_vec());
    while cursor.has_remaining() {
        let start = cursor.position();
        let Ok(tag) = RawTag::read(&mut cursor) else {
            break;
        };
        assert_eq!(tag.as_bytes(), &data[start..cursor.position()]);
        if tag.is_end() {
            break;
        }
    }
});
