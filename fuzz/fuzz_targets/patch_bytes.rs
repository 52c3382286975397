//! Fuzz target for TelemetryPatcher::patch_bytes with arbitrary byte input.
//!
//! Exercises header parsing, zlib inflation and the tag rewriter with
//! malformed or adversarial files. Any successful patch must produce a file
//! whose declared length matches its decompressed size and which refuses a
//! second patch.
//!
//! Run with: cargo +nightly fuzz run patch_bytes

#![no_main]

use libfuzzer_sys::fuzz_target;
use swf_telemetry::{Container, TelemetryPatcher};

fuzz_target!(|data: &[u8]| {
    let patcher = TelemetryPatcher::default();
    let Ok((output, report)) = patcher.patch_bytes(data) else {
        return;
    };

    let container = Container::decode(&output).expect("patched output must decode");
    assert_eq!(report.new_length as usize, container.body().len() + 8);

    let err = patcher
        .patch_bytes(&output)
        .expect_err("patched output must not be patched twice");
    assert!(err.is_already_patched());
});
