//! Patch driver: decode, rewrite, fix the length, re-encode, commit.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::codec::Container;
use crate::format::header::Compression;
use crate::{Error, Result};

use super::options::PatchOptions;
use super::rewriter::{Placement, rewrite_body};
use super::telemetry::TelemetryTag;

/// Result of a patch operation.
#[must_use = "patch report should be checked to verify the tag was inserted"]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchReport {
    /// Compression of the input (and output) file.
    pub compression: Compression,
    /// SWF version byte.
    pub version: u8,
    /// Declared file length before patching.
    pub original_length: u32,
    /// Declared file length after patching.
    pub new_length: u32,
    /// Number of tags read, End tag included.
    pub tags_read: usize,
    /// Whether the telemetry tag was inserted.
    pub inserted: bool,
    /// Where the telemetry tag was inserted.
    pub placement: Option<Placement>,
    /// Whether the inserted tag carries a password digest.
    pub password_protected: bool,
    /// Whether the patched file was written to disk.
    pub written: bool,
}

/// Inserts an `EnableTelemetry` tag into SWF files.
///
/// # Example
///
/// ```rust,no_run
/// use swf_telemetry::{PatchOptions, TelemetryPatcher};
///
/// let patcher = TelemetryPatcher::new(PatchOptions::new().password("secret"));
/// let report = patcher.patch_path("movie.swf")?;
/// assert!(report.inserted);
/// # Ok::<(), swf_telemetry::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct TelemetryPatcher {
    options: PatchOptions,
}

impl TelemetryPatcher {
    /// Creates a patcher with the given options.
    pub fn new(options: PatchOptions) -> Self {
        Self { options }
    }

    /// Returns the options in use.
    pub fn options(&self) -> &PatchOptions {
        &self.options
    }

    /// Patches a complete SWF file held in memory.
    ///
    /// Returns the patched file and a report. When no `FileAttributes` tag
    /// exists and `PatchOptions::require_file_attributes` is off, the
    /// returned bytes equal the input.
    ///
    /// # Errors
    ///
    /// Any [`Error`] aborts the run; nothing partial is returned.
    pub fn patch_bytes(&self, input: &[u8]) -> Result<(Vec<u8>, PatchReport)> {
        let mut container = Container::decode(input)?;
        let header = *container.header();

        let tag = TelemetryTag::new(self.options.password.as_ref());
        let (body, summary) = rewrite_body(container.take_body(), tag.to_bytes())?;

        let mut report = PatchReport {
            compression: header.compression,
            version: header.version,
            original_length: header.file_length,
            new_length: header.file_length,
            tags_read: summary.tags_read,
            inserted: summary.placement.is_some(),
            placement: summary.placement,
            password_protected: tag.is_password_protected(),
            written: false,
        };

        if !report.inserted {
            if self.options.require_file_attributes {
                return Err(Error::FileAttributesNotFound);
            }
            log::warn!("No FileAttributes tag found; leaving the file unchanged");
            return Ok((input.to_vec(), report));
        }

        report.new_length = container.replace_body(body)?;
        let output = container.encode(&self.options.encoder_options())?;

        log::debug!(
            "Patched {} SWF: declared length {} -> {}, {} bytes on disk",
            report.compression,
            report.original_length,
            report.new_length,
            output.len()
        );
        Ok((output, report))
    }

    /// Patches the SWF file at `path` in place.
    ///
    /// The whole output is built in memory first, then written to a
    /// temporary file next to `path` and renamed over it, so a failure never
    /// leaves a truncated file behind.
    pub fn patch_path(&self, path: impl AsRef<Path>) -> Result<PatchReport> {
        let path = path.as_ref();
        let input = fs::read(path)?;
        let (output, mut report) = self.patch_bytes(&input)?;

        if !report.inserted {
            return Ok(report);
        }
        if self.options.dry_run {
            log::info!("Dry run: not writing {}", path.display());
            return Ok(report);
        }

        replace_file(path, &output)?;
        report.written = true;
        Ok(report)
    }
}

/// Atomically replaces the contents of `path`, keeping its permissions.
///
/// Symlinks are followed: the file they point to is replaced and the link
/// itself is left in place.
fn replace_file(path: &Path, data: &[u8]) -> Result<()> {
    let target = fs::canonicalize(path)?;
    let dir = target.parent().unwrap_or_else(|| Path::new("."));
    let permissions = fs::metadata(&target)?.permissions();

    let mut temp = tempfile::NamedTempFile::new_in(dir)?;
    temp.write_all(data)?;
    temp.as_file().sync_all()?;
    temp.as_file().set_permissions(permissions)?;
    temp.persist(&target).map_err(|e| Error::Io(e.error))?;
    log::debug!("Replaced {}", target.display());
    Ok(())
}
