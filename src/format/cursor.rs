//! In-memory byte buffer used while editing a decompressed SWF body.

use crate::{Error, Result};

/// A readable and writable byte buffer with a single position.
///
/// Reads advance the position and fail with [`Error::UnexpectedEof`] when
/// fewer bytes remain than requested. Writes append at the end; the rewriter
/// uses one cursor for its input and another for its output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ByteCursor {
    data: Vec<u8>,
    pos: usize,
}

impl ByteCursor {
    /// Creates a cursor over `data`, positioned at the start.
    pub fn new(data: Vec<u8>) -> Self {
        Self { data, pos: 0 }
    }

    /// Creates an empty cursor with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::new(Vec::with_capacity(capacity))
    }

    /// Returns the current position.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns the number of bytes between the position and the end.
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Returns true if at least one byte remains to be read.
    pub fn has_remaining(&self) -> bool {
        self.remaining() > 0
    }

    /// Returns the whole buffer.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the cursor and returns the buffer.
    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }

    /// Reads exactly `count` bytes and returns them as a borrowed slice.
    pub fn read_slice(&mut self, count: usize) -> Result<&[u8]> {
        if self.remaining() < count {
            return Err(Error::UnexpectedEof {
                offset: self.pos as u64,
                needed: count,
            });
        }
        let start = self.pos;
        self.pos += count;
        Ok(&self.data[start..self.pos])
    }

    /// Returns the byte at the position without consuming it.
    pub fn peek_u8(&self) -> Result<u8> {
        self.data.get(self.pos).copied().ok_or(Error::UnexpectedEof {
            offset: self.pos as u64,
            needed: 1,
        })
    }

    /// Reads an unsigned 16-bit little-endian integer.
    pub fn read_u16_le(&mut self) -> Result<u16> {
        let bytes = self.read_slice(2)?;
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    /// Reads an unsigned 32-bit little-endian integer.
    pub fn read_u32_le(&mut self) -> Result<u32> {
        let bytes = self.read_slice(4)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Appends `bytes` to the end of the buffer.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.data.extend_from_slice(bytes);
    }
}
