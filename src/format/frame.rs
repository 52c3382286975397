//! The frame header that precedes the tag stream.

use crate::Result;

use super::cursor::ByteCursor;

/// Frame size, rate and count, kept as the exact bytes found in the file.
///
/// The frame size is a bit-packed RECT: the top 5 bits of its first byte
/// give the width `nbits` of each of its four fields, so the RECT occupies
/// `ceil((5 + 4 * nbits) / 8)` bytes. It is followed by the frame rate
/// (8.8 fixed point) and the frame count, both 16-bit little-endian.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameHeader {
    raw: Vec<u8>,
    rect_len: usize,
}

impl FrameHeader {
    /// Reads the frame header at the cursor position.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnexpectedEof`](crate::Error::UnexpectedEof) if the
    /// stream is too short to hold it.
    pub fn read(cursor: &mut ByteCursor) -> Result<Self> {
        let nbits = (cursor.peek_u8()? >> 3) as usize;
        let rect_len = (5 + 4 * nbits).div_ceil(8);
        let raw = cursor.read_slice(rect_len + 4)?.to_vec();
        Ok(Self { raw, rect_len })
    }

    /// Returns the header exactly as read.
    pub fn as_bytes(&self) -> &[u8] {
        &self.raw
    }

    /// Returns the encoded length in bytes.
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Always false; a frame header holds at least the rate and count.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns the bit width of each RECT field.
    pub fn rect_bits(&self) -> u8 {
        self.raw[0] >> 3
    }

    /// Returns the frame rate in frames per second.
    pub fn frame_rate(&self) -> f32 {
        let fraction = self.raw[self.rect_len] as f32 / 256.0;
        self.raw[self.rect_len + 1] as f32 + fraction
    }

    /// Returns the number of frames.
    pub fn frame_count(&self) -> u16 {
        u16::from_le_bytes([self.raw[self.rect_len + 2], self.raw[self.rect_len + 3]])
    }
}
