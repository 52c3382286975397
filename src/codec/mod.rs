//! Container codec: splits a SWF file into header and decompressed body and
//! reassembles it with the original compression.

pub mod zlib;

use crate::format::HEADER_SIZE;
use crate::format::header::{Compression, SwfHeader};
use crate::{Error, Result};

pub use zlib::ZlibEncoderOptions;

/// Upper bound on the buffer reserved from an untrusted declared length.
const MAX_SIZE_HINT: usize = 64 * 1024 * 1024;

/// A SWF file with its body decompressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    header: SwfHeader,
    body: Vec<u8>,
}

impl Container {
    /// Creates a container from a header and an uncompressed body.
    ///
    /// The header's file length is taken as given; call
    /// [`replace_body`](Self::replace_body) to recompute it.
    pub fn new(header: SwfHeader, body: Vec<u8>) -> Self {
        Self { header, body }
    }

    /// Decodes a complete SWF file.
    ///
    /// # Errors
    ///
    /// - [`Error::BadFormat`] if the signature is unknown, the file is
    ///   shorter than its header, or the zlib stream is corrupt
    /// - [`Error::UnsupportedCompression`] for `ZWS` (LZMA) files
    pub fn decode(data: &[u8]) -> Result<Self> {
        let header = SwfHeader::parse(data)?;
        let rest = &data[HEADER_SIZE..];

        let body = match header.compression {
            Compression::None => rest.to_vec(),
            Compression::Zlib => {
                let hint = header.declared_body_len().min(MAX_SIZE_HINT);
                zlib::inflate(rest, hint)
                    .map_err(|e| Error::BadFormat(format!("zlib stream: {}", e)))?
            }
            Compression::Lzma => {
                return Err(Error::UnsupportedCompression {
                    compression: header.compression,
                });
            }
        };

        log::debug!(
            "Decoded {} SWF version {}: {} body bytes",
            header.compression,
            header.version,
            body.len()
        );
        if header.declared_body_len() != body.len() {
            log::warn!(
                "Declared file length {} does not match actual length {}",
                header.file_length,
                body.len() + HEADER_SIZE
            );
        }

        Ok(Self { header, body })
    }

    /// Returns the file header.
    pub fn header(&self) -> &SwfHeader {
        &self.header
    }

    /// Returns the decompressed body.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Takes the body out of the container, leaving it empty.
    pub fn take_body(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.body)
    }

    /// Replaces the body and recomputes the declared file length.
    ///
    /// Returns the new declared length.
    pub fn replace_body(&mut self, body: Vec<u8>) -> Result<u32> {
        let length = self.header.fix_length(body.len())?;
        self.body = body;
        Ok(length)
    }

    /// Encodes the container with the compression it was read with.
    ///
    /// `options` only affects `CWS` files.
    pub fn encode(&self, options: &ZlibEncoderOptions) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(HEADER_SIZE + self.body.len());
        out.extend_from_slice(&self.header.to_bytes());

        match self.header.compression {
            Compression::None => out.extend_from_slice(&self.body),
            Compression::Zlib => out.extend_from_slice(&zlib::deflate(&self.body, options)?),
            Compression::Lzma => {
                return Err(Error::UnsupportedCompression {
                    compression: self.header.compression,
                });
            }
        }

        Ok(out)
    }
}
