//! SWF editing: inserting the `EnableTelemetry` tag.
//!
//! # Example
//!
//! ```rust,no_run
//! use swf_telemetry::edit::{PatchOptions, TelemetryPatcher};
//!
//! let patcher = TelemetryPatcher::new(PatchOptions::new());
//! let report = patcher.patch_path("movie.swf")?;
//!
//! if let Some(placement) = report.placement {
//!     println!("Inserted telemetry tag {}", placement);
//! }
//! # Ok::<(), swf_telemetry::Error>(())
//! ```
//!
//! # Implementation Notes
//!
//! A patch run:
//! 1. Decodes the file header and decompresses the body
//! 2. Copies the frame header, then walks the tags with [`TagRewriter`]
//! 3. Inserts the telemetry tag after `FileAttributes` (or after `Metadata`
//!    when it comes next)
//! 4. Recomputes the declared file length
//! 5. Re-encodes with the original compression and commits the file

mod editor;
mod options;
pub mod rewriter;
pub mod telemetry;

pub use editor::{PatchReport, TelemetryPatcher};
pub use options::PatchOptions;
pub use rewriter::{Placement, RewriteState, RewriteSummary, TagRewriter, rewrite_body};
pub use telemetry::{TelemetryTag, encode_telemetry_tag};
