//! Error types for SWF patching operations.
//!
//! This module provides the [`Error`] enum which represents all possible
//! failure modes when patching a SWF file, along with a convenient
//! [`Result<T>`] type alias.
//!
//! Every error is fatal for the current run. The source file is only
//! rewritten after the complete output has been built, so any error leaves
//! it untouched.
//!
//! ## User-Friendly Error Messages
//!
//! ```rust
//! use swf_telemetry::Error;
//!
//! fn print_user_message(error: &Error) {
//!     match error {
//!         Error::Io(e) => println!("File error: {}", e),
//!         Error::AlreadyPatched { .. } => println!("Telemetry is already enabled."),
//!         Error::UnsupportedSignedFile { .. } => println!("Signed SWF files cannot be patched."),
//!         e if e.is_corruption() => println!("The file is not a valid SWF."),
//!         _ => println!("Error: {}", error),
//!     }
//! }
//! ```

use std::io;

use crate::format::header::Compression;

/// The main error type for SWF patching.
///
/// | Category | Variants | Typical Cause |
/// |----------|----------|---------------|
/// | I/O | [`Io`][Self::Io] | File system operations |
/// | Format | [`BadFormat`][Self::BadFormat], [`UnexpectedEof`][Self::UnexpectedEof] | Not a SWF, or truncated |
/// | Compatibility | [`UnsupportedCompression`][Self::UnsupportedCompression], [`UnsupportedSignedFile`][Self::UnsupportedSignedFile] | Files this tool cannot rewrite |
/// | State | [`AlreadyPatched`][Self::AlreadyPatched], [`FileAttributesNotFound`][Self::FileAttributesNotFound] | Nothing to do, or nowhere to do it |
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An I/O error occurred while reading or writing the file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file is not a SWF, or one of its headers is malformed.
    ///
    /// The string describes what was expected vs. found.
    #[error("Bad SWF: {0}")]
    BadFormat(String),

    /// The decompressed stream ended in the middle of a header or tag.
    #[error("Bad SWF: unexpected end of file at offset {offset:#x} (needed {needed} more bytes)")]
    UnexpectedEof {
        /// Offset into the decompressed stream where the read started.
        offset: u64,
        /// Number of bytes the read required.
        needed: usize,
    },

    /// The file uses a compression scheme this build cannot rewrite.
    #[error("{compression} compression is not supported")]
    UnsupportedCompression {
        /// The compression detected from the signature.
        compression: Compression,
    },

    /// The file already contains an `EnableTelemetry` tag.
    #[error("Bad SWF: already has EnableTelemetry tag (offset {offset:#x})")]
    AlreadyPatched {
        /// Offset of the existing tag in the decompressed stream.
        offset: u64,
    },

    /// The file carries a signature tag; rewriting it would invalidate it.
    #[error("Bad SWF: signed SWFs are not supported (offset {offset:#x})")]
    UnsupportedSignedFile {
        /// Offset of the signature tag in the decompressed stream.
        offset: u64,
    },

    /// The tag stream ended without a `FileAttributes` tag, so no telemetry
    /// tag could be inserted.
    ///
    /// Only returned when `PatchOptions::require_file_attributes` is enabled
    /// (the default).
    #[error("Bad SWF: no FileAttributes tag found, telemetry tag not inserted")]
    FileAttributesNotFound,

    /// Invalid compression level specified.
    ///
    /// Compression levels must be in the range 0-9.
    #[error("Invalid compression level {level}: must be 0-9")]
    InvalidCompressionLevel {
        /// The invalid level that was specified.
        level: u32,
    },
}

impl Error {
    /// Returns `true` if the input is not a well-formed SWF file.
    pub fn is_corruption(&self) -> bool {
        matches!(self, Error::BadFormat(_) | Error::UnexpectedEof { .. })
    }

    /// Returns `true` if the file is valid but uses a feature this tool
    /// cannot rewrite.
    pub fn is_unsupported(&self) -> bool {
        matches!(
            self,
            Error::UnsupportedCompression { .. } | Error::UnsupportedSignedFile { .. }
        )
    }

    /// Returns `true` if the file already has telemetry enabled.
    pub fn is_already_patched(&self) -> bool {
        matches!(self, Error::AlreadyPatched { .. })
    }

    /// Returns the offset in the decompressed stream associated with this
    /// error, if any.
    pub fn offset(&self) -> Option<u64> {
        match self {
            Error::UnexpectedEof { offset, .. } => Some(*offset),
            Error::AlreadyPatched { offset } => Some(*offset),
            Error::UnsupportedSignedFile { offset } => Some(*offset),
            _ => None,
        }
    }
}

/// A specialized Result type for SWF patching operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_from() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_bad_format() {
        let err = Error::BadFormat("Unrecognized signature: \"ABC\"".into());
        assert_eq!(err.to_string(), "Bad SWF: Unrecognized signature: \"ABC\"");
        assert!(err.is_corruption());
        assert!(!err.is_unsupported());
    }

    #[test]
    fn test_unexpected_eof() {
        let err = Error::UnexpectedEof {
            offset: 0x1a,
            needed: 2,
        };
        assert!(err.to_string().contains("0x1a"));
        assert!(err.is_corruption());
        assert_eq!(err.offset(), Some(0x1a));
    }

    #[test]
    fn test_unsupported_compression() {
        let err = Error::UnsupportedCompression {
            compression: Compression::Lzma,
        };
        assert_eq!(err.to_string(), "LZMA compression is not supported");
        assert!(err.is_unsupported());
        assert_eq!(err.offset(), None);
    }

    #[test]
    fn test_already_patched() {
        let err = Error::AlreadyPatched { offset: 0x20 };
        assert!(err.is_already_patched());
        assert!(!err.is_corruption());
        assert!(err.to_string().contains("EnableTelemetry"));
    }

    #[test]
    fn test_signed_file() {
        let err = Error::UnsupportedSignedFile { offset: 0x40 };
        assert!(err.is_unsupported());
        assert!(err.to_string().contains("signed"));
    }

    #[test]
    fn test_invalid_compression_level() {
        let err = Error::InvalidCompressionLevel { level: 12 };
        assert_eq!(err.to_string(), "Invalid compression level 12: must be 0-9");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
