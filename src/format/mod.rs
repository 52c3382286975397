//! SWF format constants, definitions, and low-level parsing utilities.
//!
//! A SWF file is an 8-byte file header followed by a (possibly compressed)
//! body. The body starts with the frame header and continues with a stream
//! of self-delimiting tags terminated by an End tag.

pub mod cursor;
pub mod frame;
pub mod header;
pub mod tag;

/// Size of the file header in bytes.
///
/// The file header contains:
/// - 3 bytes: signature (`FWS`, `CWS` or `ZWS`)
/// - 1 byte: SWF version
/// - 4 bytes: file length (little-endian, uncompressed, including this header)
pub const HEADER_SIZE: usize = 8;

/// Offset of the file length field within the file header.
pub const FILE_LENGTH_OFFSET: usize = 4;

/// Tag type codes recognized by the rewriter.
pub mod tag_code {
    /// End of tag stream marker.
    pub const END: u16 = 0;
    /// FileAttributes; the first tag of every SWF 8+ file.
    pub const FILE_ATTRIBUTES: u16 = 69;
    /// XMP metadata; some players require it right after FileAttributes.
    pub const METADATA: u16 = 77;
    /// Marker tag of a digitally signed SWF.
    pub const SIGNED_SWF: u16 = 92;
    /// EnableTelemetry; the tag this crate inserts.
    pub const ENABLE_TELEMETRY: u16 = 93;
}

/// Compression signatures found in the first three bytes of a file.
pub mod signature {
    /// Uncompressed body.
    pub const UNCOMPRESSED: &[u8; 3] = b"FWS";
    /// zlib-compressed body.
    pub const ZLIB: &[u8; 3] = b"CWS";
    /// LZMA-compressed body.
    pub const LZMA: &[u8; 3] = b"ZWS";
}
