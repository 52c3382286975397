//! SWF file header structures and parsing.

use crate::{Error, Result};

use super::{FILE_LENGTH_OFFSET, HEADER_SIZE, signature};

/// Compression scheme of a SWF body, identified by the file signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Compression {
    /// `FWS`: the body is stored as-is.
    None,
    /// `CWS`: the body is a zlib stream.
    Zlib,
    /// `ZWS`: the body is LZMA-compressed. Recognized but not supported.
    Lzma,
}

impl Compression {
    /// Identifies the compression scheme from a 3-byte signature.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BadFormat`] if the signature is not one of `FWS`,
    /// `CWS` or `ZWS`.
    pub fn from_signature(sig: &[u8]) -> Result<Self> {
        match sig {
            s if s == signature::UNCOMPRESSED => Ok(Compression::None),
            s if s == signature::ZLIB => Ok(Compression::Zlib),
            s if s == signature::LZMA => Ok(Compression::Lzma),
            other => Err(Error::BadFormat(format!(
                "Unrecognized signature: \"{}\"",
                other.escape_ascii()
            ))),
        }
    }

    /// Returns the 3-byte signature for this scheme.
    pub fn signature(&self) -> &'static [u8; 3] {
        match self {
            Compression::None => signature::UNCOMPRESSED,
            Compression::Zlib => signature::ZLIB,
            Compression::Lzma => signature::LZMA,
        }
    }

    /// Returns a human-readable name for this scheme.
    pub fn name(&self) -> &'static str {
        match self {
            Compression::None => "uncompressed",
            Compression::Zlib => "zlib",
            Compression::Lzma => "LZMA",
        }
    }
}

impl std::fmt::Display for Compression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The 8-byte header at the start of every SWF file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwfHeader {
    /// Compression of everything after the header.
    pub compression: Compression,
    /// SWF version byte.
    pub version: u8,
    /// Declared length of the uncompressed file, including this header.
    pub file_length: u32,
}

impl SwfHeader {
    /// Parses the header from the first 8 bytes of `data`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BadFormat`] if `data` is shorter than the header or
    /// the signature is not recognized.
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < HEADER_SIZE {
            return Err(Error::BadFormat(format!(
                "file is {} bytes, shorter than the {}-byte header",
                data.len(),
                HEADER_SIZE
            )));
        }

        let compression = Compression::from_signature(&data[..3])?;
        let version = data[3];
        let file_length = u32::from_le_bytes([data[4], data[5], data[6], data[7]]);

        Ok(Self {
            compression,
            version,
            file_length,
        })
    }

    /// Serializes the header.
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut out = [0u8; HEADER_SIZE];
        out[..3].copy_from_slice(self.compression.signature());
        out[3] = self.version;
        out[FILE_LENGTH_OFFSET..].copy_from_slice(&self.file_length.to_le_bytes());
        out
    }

    /// Returns the body length implied by the declared file length.
    pub fn declared_body_len(&self) -> usize {
        (self.file_length as usize).saturating_sub(HEADER_SIZE)
    }

    /// Recomputes the declared file length for a body of `body_len` bytes.
    ///
    /// The declared length always describes the uncompressed file image:
    /// the header plus the decompressed body, regardless of compression.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BadFormat`] if the image does not fit in 32 bits.
    pub fn fix_length(&mut self, body_len: usize) -> Result<u32> {
        let total = body_len
            .checked_add(HEADER_SIZE)
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| {
                Error::BadFormat(format!(
                    "body of {} bytes exceeds the 32-bit file length field",
                    body_len
                ))
            })?;
        self.file_length = total;
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compression_from_signature() {
        assert_eq!(
            Compression::from_signature(b"FWS").unwrap(),
            Compression::None
        );
        assert_eq!(
            Compression::from_signature(b"CWS").unwrap(),
            Compression::Zlib
        );
        assert_eq!(
            Compression::from_signature(b"ZWS").unwrap(),
            Compression::Lzma
        );
    }

    #[test]
    fn test_compression_unknown_signature() {
        let err = Compression::from_signature(b"PK\x03").unwrap_err();
        assert!(matches!(err, Error::BadFormat(_)));
        assert!(err.to_string().contains("PK\\x03"));
    }

    #[test]
    fn test_compression_signature() {
        assert_eq!(Compression::None.signature(), b"FWS");
        assert_eq!(Compression::Zlib.signature(), b"CWS");
    }

    #[test]
    fn test_header_parse() {
        let data = [b'C', b'W', b'S', 0x0A, 0x34, 0x12, 0x00, 0x00, 0xFF];
        let header = SwfHeader::parse(&data).unwrap();
        assert_eq!(header.compression, Compression::Zlib);
        assert_eq!(header.version, 10);
        assert_eq!(header.file_length, 0x1234);
        assert_eq!(header.declared_body_len(), 0x1234 - 8);
        assert_eq!(&header.to_bytes()[..], &data[..8]);
    }

    #[test]
    fn test_header_too_short() {
        let err = SwfHeader::parse(b"FWS\x0A").unwrap_err();
        assert!(matches!(err, Error::BadFormat(_)));
    }

    #[test]
    fn test_header_parse_lzma_is_recognized() {
        let header = SwfHeader::parse(b"ZWS\x0D\x00\x01\x00\x00").unwrap();
        assert_eq!(header.compression, Compression::Lzma);
    }

    #[test]
    fn test_fix_length() {
        let mut header = SwfHeader {
            compression: Compression::None,
            version: 9,
            file_length: 0,
        };
        assert_eq!(header.fix_length(100).unwrap(), 108);
        assert_eq!(header.file_length, 108);
        assert_eq!(&header.to_bytes()[4..], &108u32.to_le_bytes());
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_fix_length_overflow() {
        let mut header = SwfHeader {
            compression: Compression::None,
            version: 9,
            file_length: 42,
        };
        assert!(header.fix_length(u32::MAX as usize).is_err());
        assert_eq!(header.file_length, 42);
    }
}
