//! zlib framing for `CWS` bodies.
//!
//! A `CWS` file stores everything after its 8-byte header as a single zlib
//! stream (RFC 1950). The body is small enough to hold in memory, so both
//! directions work on whole buffers.

use std::io::{self, Read, Write};

use flate2::Compression as FlateLevel;
use flate2::bufread::ZlibDecoder;
use flate2::write::ZlibEncoder;

/// Highest zlib compression level.
pub const MAX_LEVEL: u32 = 9;

/// Level used when none is configured, matching zlib's own default.
pub const DEFAULT_LEVEL: u32 = 6;

/// Settings for re-compressing a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZlibEncoderOptions {
    /// Compression level (0-9).
    pub level: u32,
}

impl Default for ZlibEncoderOptions {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL,
        }
    }
}

impl ZlibEncoderOptions {
    /// Creates options with the given level, clamped to 9.
    pub fn with_level(level: u32) -> Self {
        Self {
            level: level.min(MAX_LEVEL),
        }
    }
}

/// Inflates a complete zlib stream.
///
/// `size_hint` is only a capacity reservation; the output grows past it if
/// the stream is longer. Corrupt data or a failed Adler-32 check is reported
/// as an [`io::Error`].
pub fn inflate(data: &[u8], size_hint: usize) -> io::Result<Vec<u8>> {
    let mut out = Vec::with_capacity(size_hint);
    ZlibDecoder::new(data).read_to_end(&mut out)?;
    Ok(out)
}

/// Deflates `data` into a complete zlib stream.
pub fn deflate(data: &[u8], options: &ZlibEncoderOptions) -> io::Result<Vec<u8>> {
    let level = FlateLevel::new(options.level.min(MAX_LEVEL));
    let mut encoder = ZlibEncoder::new(Vec::with_capacity(data.len() / 2), level);
    encoder.write_all(data)?;
    encoder.finish()
}
