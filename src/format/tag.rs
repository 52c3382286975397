//! SWF tag headers and raw tags.
//!
//! Every tag starts with a 16-bit little-endian code: the upper 10 bits are
//! the tag type, the lower 6 bits the payload length. A length field of
//! `0x3F` is an escape meaning the real length follows as a 32-bit
//! little-endian integer.
//!
//! | Form | Layout | Used for |
//! |------|--------|----------|
//! | short | `code` | lengths `0..=62` |
//! | long | `code` `length:u32` | lengths `>= 63` |

use crate::Result;

use super::cursor::ByteCursor;
use super::tag_code;

/// Escape value in the short length field that announces a 32-bit length.
pub const LONG_LENGTH_ESCAPE: u16 = 0x3F;

/// Largest tag type representable in the 10-bit type field.
pub const MAX_TAG_CODE: u16 = 0x3FF;

/// Size of a short tag header.
pub const SHORT_HEADER_SIZE: usize = 2;

/// Size of a long tag header.
pub const LONG_HEADER_SIZE: usize = 6;

/// The decoded `(type, length)` pair at the start of a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagHeader {
    /// Tag type.
    pub code: u16,
    /// Payload length in bytes.
    pub length: u32,
}

impl TagHeader {
    /// Creates a header for a tag of type `code` with a `length`-byte payload.
    pub fn new(code: u16, length: u32) -> Self {
        debug_assert!(code <= MAX_TAG_CODE, "tag code {} out of range", code);
        Self { code, length }
    }

    /// Returns true if the canonical encoding needs the long form.
    pub fn is_long(&self) -> bool {
        self.length >= LONG_LENGTH_ESCAPE as u32
    }

    /// Returns the size of the canonical encoding.
    pub fn encoded_len(&self) -> usize {
        if self.is_long() {
            LONG_HEADER_SIZE
        } else {
            SHORT_HEADER_SIZE
        }
    }

    /// Reads a header in either form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnexpectedEof`](crate::Error::UnexpectedEof) if the
    /// stream ends inside the header.
    pub fn read(cursor: &mut ByteCursor) -> Result<Self> {
        let code = cursor.read_u16_le()?;
        let short_length = code & LONG_LENGTH_ESCAPE;
        let length = if short_length == LONG_LENGTH_ESCAPE {
            cursor.read_u32_le()?
        } else {
            short_length as u32
        };

        Ok(Self {
            code: code >> 6,
            length,
        })
    }

    /// Returns the canonical encoding: short form whenever the length allows.
    pub fn to_bytes(&self) -> Vec<u8> {
        let code = self.code << 6;
        let mut out = Vec::with_capacity(self.encoded_len());
        if self.is_long() {
            out.extend_from_slice(&(code | LONG_LENGTH_ESCAPE).to_le_bytes());
            out.extend_from_slice(&self.length.to_le_bytes());
        } else {
            out.extend_from_slice(&(code | self.length as u16).to_le_bytes());
        }
        out
    }
}

/// A tag exactly as it appears on the wire: header followed by payload.
///
/// Raw tags are never modified; the rewriter either copies them verbatim or
/// rejects the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTag {
    code: u16,
    header_len: usize,
    bytes: Vec<u8>,
}

impl RawTag {
    /// Builds a tag with a canonically encoded header.
    pub fn new(code: u16, payload: &[u8]) -> Self {
        let header = TagHeader::new(code, payload.len() as u32);
        let mut bytes = header.to_bytes();
        let header_len = bytes.len();
        bytes.extend_from_slice(payload);
        Self {
            code,
            header_len,
            bytes,
        }
    }

    /// Reads one tag, keeping the header bytes as found, whether or not
    /// they use the canonical form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnexpectedEof`](crate::Error::UnexpectedEof) if the
    /// stream ends inside the header or the payload.
    pub fn read(cursor: &mut ByteCursor) -> Result<Self> {
        let start = cursor.position();
        let header = TagHeader::read(cursor)?;
        let header_len = cursor.position() - start;
        cursor.read_slice(header.length as usize)?;
        let bytes = cursor.as_slice()[start..cursor.position()].to_vec();

        Ok(Self {
            code: header.code,
            header_len,
            bytes,
        })
    }

    /// Returns the tag type.
    pub fn code(&self) -> u16 {
        self.code
    }

    /// Returns true for the End tag.
    pub fn is_end(&self) -> bool {
        self.code == tag_code::END
    }

    /// Returns the full wire encoding.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the payload without the header.
    pub fn payload(&self) -> &[u8] {
        &self.bytes[self.header_len..]
    }

    /// Returns the size of the header as found on the wire (2 or 6).
    pub fn header_len(&self) -> usize {
        self.header_len
    }

    /// Returns the total encoded size.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false; every tag has at least a header.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_short_header_encoding() {
        // FileAttributes (69) with 4-byte payload: 69 << 6 | 4 = 0x1144
        let header = TagHeader::new(tag_code::FILE_ATTRIBUTES, 4);
        assert!(!header.is_long());
        assert_eq!(header.to_bytes(), vec![0x44, 0x11]);
    }

    #[test]
    fn test_long_header_encoding() {
        let header = TagHeader::new(tag_code::METADATA, 63);
        assert!(header.is_long());
        assert_eq!(header.encoded_len(), 6);
        // 77 << 6 | 0x3F = 0x137F
        assert_eq!(header.to_bytes(), vec![0x7F, 0x13, 63, 0, 0, 0]);
    }

    #[test]
    fn test_header_boundary() {
        assert!(!TagHeader::new(1, 62).is_long());
        assert!(TagHeader::new(1, 63).is_long());
    }

    #[test]
    fn test_end_tag_encoding() {
        assert_eq!(TagHeader::new(tag_code::END, 0).to_bytes(), vec![0, 0]);
    }

    #[test]
    fn test_read_short_tag() {
        let mut cursor = ByteCursor::new(vec![0x45, 0x13, b'h', b'e', b'l', b'l', b'o', 0x00]);
        let tag = RawTag::read(&mut cursor).unwrap();
        assert_eq!(tag.code(), tag_code::METADATA);
        assert_eq!(tag.payload(), b"hello");
        assert_eq!(tag.header_len(), 2);
        assert_eq!(tag.len(), 7);
        assert_eq!(cursor.remaining(), 1);
    }

    #[test]
    fn test_read_long_tag() {
        let payload = vec![0xAB; 100];
        let tag = RawTag::new(12, &payload);
        assert_eq!(tag.header_len(), 6);

        let mut cursor = ByteCursor::new(tag.as_bytes().to_vec());
        let read = RawTag::read(&mut cursor).unwrap();
        assert_eq!(read, tag);
        assert_eq!(read.payload(), &payload[..]);
    }

    #[test]
    fn test_read_keeps_non_canonical_header() {
        // Long form used for a 3-byte payload; must be preserved as-is
        let bytes = vec![0xBF, 0x00, 3, 0, 0, 0, 1, 2, 3];
        let mut cursor = ByteCursor::new(bytes.clone());
        let tag = RawTag::read(&mut cursor).unwrap();
        assert_eq!(tag.code(), 2);
        assert_eq!(tag.header_len(), 6);
        assert_eq!(tag.payload(), &[1, 2, 3]);
        assert_eq!(tag.as_bytes(), &bytes[..]);
    }

    #[test]
    fn test_read_truncated_header() {
        let mut cursor = ByteCursor::new(vec![0x00]);
        let err = RawTag::read(&mut cursor).unwrap_err();
        assert!(matches!(err, Error::UnexpectedEof { offset: 0, needed: 2 }));
    }

    #[test]
    fn test_read_truncated_long_length() {
        let mut cursor = ByteCursor::new(vec![0x7F, 0x13, 0x40, 0x00]);
        assert!(matches!(
            RawTag::read(&mut cursor),
            Err(Error::UnexpectedEof { offset: 2, needed: 4 })
        ));
    }

    #[test]
    fn test_read_truncated_payload() {
        let mut cursor = ByteCursor::new(vec![0x45, 0x13, b'h', b'i']);
        assert!(matches!(
            RawTag::read(&mut cursor),
            Err(Error::UnexpectedEof { offset: 2, needed: 5 })
        ));
    }

    #[test]
    fn test_end_tag() {
        let mut cursor = ByteCursor::new(vec![0, 0]);
        let tag = RawTag::read(&mut cursor).unwrap();
        assert!(tag.is_end());
        assert!(tag.payload().is_empty());
    }
}
