//! The `EnableTelemetry` tag.
//!
//! Payload layout:
//!
//! | Field | Size | Value |
//! |-------|------|-------|
//! | reserved | 2 | always 0 |
//! | password digest | 0 or 32 | SHA-256 of the password, if any |

use crate::crypto::{DIGEST_SIZE, Password, password_digest};
use crate::format::tag::{RawTag, TagHeader};
use crate::format::tag_code;
use crate::{Error, Result};

/// Size of the reserved field at the start of the payload.
pub const RESERVED_SIZE: usize = 2;

/// An `EnableTelemetry` tag, optionally gated by a password digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryTag {
    digest: Option<[u8; DIGEST_SIZE]>,
}

impl TelemetryTag {
    /// Creates the tag, digesting `password` if one is given.
    pub fn new(password: Option<&Password>) -> Self {
        Self {
            digest: password.map(password_digest),
        }
    }

    /// Returns true if viewing advanced telemetry requires a password.
    pub fn is_password_protected(&self) -> bool {
        self.digest.is_some()
    }

    /// Returns the stored password digest.
    pub fn password_digest(&self) -> Option<&[u8; DIGEST_SIZE]> {
        self.digest.as_ref()
    }

    /// Returns the payload length: 2 without a password, 34 with one.
    pub fn payload_len(&self) -> u32 {
        let digest_len = if self.digest.is_some() { DIGEST_SIZE } else { 0 };
        (RESERVED_SIZE + digest_len) as u32
    }

    /// Serializes the complete tag, header included.
    pub fn to_bytes(&self) -> Vec<u8> {
        let header = TagHeader::new(tag_code::ENABLE_TELEMETRY, self.payload_len());
        let mut out = header.to_bytes();
        out.extend_from_slice(&[0u8; RESERVED_SIZE]);
        if let Some(digest) = &self.digest {
            out.extend_from_slice(digest);
        }
        out
    }

    /// Parses an existing `EnableTelemetry` tag.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BadFormat`] if `tag` is another type or its payload
    /// is neither 2 nor 34 bytes long.
    pub fn parse(tag: &RawTag) -> Result<Self> {
        if tag.code() != tag_code::ENABLE_TELEMETRY {
            return Err(Error::BadFormat(format!(
                "expected EnableTelemetry tag, found type {}",
                tag.code()
            )));
        }

        let payload = tag.payload();
        match payload.len() {
            RESERVED_SIZE => Ok(Self { digest: None }),
            n if n == RESERVED_SIZE + DIGEST_SIZE => {
                let mut digest = [0u8; DIGEST_SIZE];
                digest.copy_from_slice(&payload[RESERVED_SIZE..]);
                Ok(Self {
                    digest: Some(digest),
                })
            }
            n => Err(Error::BadFormat(format!("EnableTelemetry payload is {} bytes", n))),
        }
    }
}

/// Encodes the `EnableTelemetry` tag for an optional password.
pub fn encode_telemetry_tag(password: Option<&Password>) -> Vec<u8> {
    TelemetryTag::new(password).to_bytes()
}
