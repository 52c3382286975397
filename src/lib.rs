//! # swf-telemetry
//!
//! A pure-Rust tool for enabling advanced telemetry in compiled SWF movies.
//!
//! The crate edits a SWF file in place: it decompresses the body, walks the
//! tag stream, inserts an `EnableTelemetry` tag right after the
//! `FileAttributes` tag (or after `Metadata` when it follows), recomputes the
//! declared file length and re-encodes the file with its original
//! compression. Every other tag is copied byte for byte.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use swf_telemetry::{PatchOptions, TelemetryPatcher, Result};
//!
//! fn main() -> Result<()> {
//!     let patcher = TelemetryPatcher::new(PatchOptions::new());
//!     let report = patcher.patch_path("movie.swf")?;
//!     println!("Inserted telemetry tag: {}", report.inserted);
//!     Ok(())
//! }
//! ```
//!
//! ### Requiring a Password
//!
//! When a password is supplied, its SHA-256 digest is embedded in the tag and
//! profilers must present the same password to read advanced telemetry.
//!
//! ```rust,no_run
//! use swf_telemetry::{Password, PatchOptions, TelemetryPatcher, Result};
//!
//! fn main() -> Result<()> {
//!     let options = PatchOptions::new().password(Password::new("secret"));
//!     TelemetryPatcher::new(options).patch_path("movie.swf")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Supported Files
//!
//! | Signature | Compression | Status |
//! |-----------|-------------|--------|
//! | `FWS` | none | Supported |
//! | `CWS` | zlib | Supported |
//! | `ZWS` | LZMA | Rejected with [`Error::UnsupportedCompression`] |
//!
//! Signed SWF files and files that already carry a telemetry tag are
//! rejected. A failed run never modifies the source file.
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli` | No | Command-line interface tool |

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod codec;
pub mod crypto;
pub mod edit;
pub mod error;
pub mod format;

pub use codec::Container;
pub use crypto::Password;
pub use error::{Error, Result};
pub use format::header::{Compression, SwfHeader};
pub use format::tag::{RawTag, TagHeader};

// Re-export edit API at crate root for convenience
pub use edit::{PatchOptions, PatchReport, Placement, TelemetryPatcher};
