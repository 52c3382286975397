//! Shared test utilities for integration tests.
//!
//! Builders for small but well-formed SWF files, so each test can state the
//! exact tag sequence it exercises.
//!
//! Note: `#![allow(dead_code)]` is required because each integration test file
//! compiles as a separate crate and may only use a subset of these helpers.

#![allow(dead_code)]

use swf_telemetry::codec::ZlibEncoderOptions;
use swf_telemetry::codec::zlib::deflate;
use swf_telemetry::format::tag_code;
use swf_telemetry::{Password, RawTag};

/// Frame header of a 550x400 stage at 24 fps with one frame (nbits = 15).
pub const STAGE: [u8; 13] = [
    0x78, 0x00, 0x05, 0x5F, 0x00, 0x00, 0x0F, 0xA0, 0x00, 0x00, 0x18, 0x01, 0x00,
];

/// `EnableTelemetry` tag without a password.
pub const TELEMETRY_NO_PASSWORD: [u8; 4] = [0x42, 0x17, 0x00, 0x00];

/// A typical `FileAttributes` tag (AS3, network access).
pub fn file_attributes() -> RawTag {
    RawTag::new(tag_code::FILE_ATTRIBUTES, &[0x08, 0x00, 0x00, 0x00])
}

/// A `Metadata` tag with a short XML payload.
pub fn metadata() -> RawTag {
    RawTag::new(tag_code::METADATA, b"<rdf:RDF/>\0")
}

/// The End tag.
pub fn end() -> RawTag {
    RawTag::new(tag_code::END, &[])
}

/// An existing `EnableTelemetry` tag.
pub fn telemetry() -> RawTag {
    RawTag::new(tag_code::ENABLE_TELEMETRY, &[0x00, 0x00])
}

/// A signature tag.
pub fn signed() -> RawTag {
    RawTag::new(tag_code::SIGNED_SWF, &[0u8; 16])
}

/// `SetBackgroundColor` (white).
pub fn background() -> RawTag {
    RawTag::new(9, &[0xFF, 0xFF, 0xFF])
}

/// `ShowFrame`.
pub fn show_frame() -> RawTag {
    RawTag::new(1, &[])
}

/// A tag large enough to need the long length form.
pub fn long_tag(code: u16, len: usize) -> RawTag {
    let payload: Vec<u8> = (0..len).map(|i| (i % 251) as u8).collect();
    RawTag::new(code, &payload)
}

/// Concatenates the frame header and the encoded tags.
pub fn body(tags: &[RawTag]) -> Vec<u8> {
    let mut body = STAGE.to_vec();
    for tag in tags {
        body.extend_from_slice(tag.as_bytes());
    }
    body
}

/// Builds an uncompressed (`FWS`) file with a correct declared length.
pub fn fws(version: u8, tags: &[RawTag]) -> Vec<u8> {
    wrap(b"FWS", version, &body(tags))
}

/// Builds a zlib-compressed (`CWS`) file with a correct declared length.
pub fn cws(version: u8, tags: &[RawTag]) -> Vec<u8> {
    let body = body(tags);
    let compressed =
        deflate(&body, &ZlibEncoderOptions::default()).expect("Failed to compress test body");
    let mut out = header(b"CWS", version, body.len());
    out.extend_from_slice(&compressed);
    out
}

/// Prefixes `body` with a file header using `signature`.
pub fn wrap(signature: &[u8; 3], version: u8, body: &[u8]) -> Vec<u8> {
    let mut out = header(signature, version, body.len());
    out.extend_from_slice(body);
    out
}

fn header(signature: &[u8; 3], version: u8, body_len: usize) -> Vec<u8> {
    let mut out = signature.to_vec();
    out.push(version);
    out.extend_from_slice(&((body_len + 8) as u32).to_le_bytes());
    out
}

/// Expected `EnableTelemetry` tag bytes for `password`.
pub fn expected_telemetry(password: &str) -> Vec<u8> {
    swf_telemetry::edit::encode_telemetry_tag(Some(&Password::new(password)))
}

/// Reads the declared file length from a file header.
pub fn declared_length(file: &[u8]) -> u32 {
    u32::from_le_bytes([file[4], file[5], file[6], file[7]])
}
