//! Read-modify-write pass over the tag stream.
//!
//! The rewriter is a three-state machine driven one tag at a time:
//!
//! | State | Tag | Action | Next |
//! |-------|-----|--------|------|
//! | any | EnableTelemetry | fail `AlreadyPatched` | - |
//! | any | signed marker | fail `UnsupportedSignedFile` | - |
//! | Scanning | FileAttributes (first) | emit | FoundFileAttributes |
//! | Scanning | End | emit | Done |
//! | Scanning | other | emit | Scanning |
//! | FoundFileAttributes | Metadata | emit, then telemetry | Scanning |
//! | FoundFileAttributes | End | telemetry, then emit | Done |
//! | FoundFileAttributes | other | telemetry, then emit | Scanning |
//!
//! Metadata must stay adjacent to FileAttributes, so the telemetry tag goes
//! after it when it is present.

use crate::format::cursor::ByteCursor;
use crate::format::frame::FrameHeader;
use crate::format::tag::RawTag;
use crate::format::tag_code;
use crate::{Error, Result};

/// Position of the rewriter in the tag stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewriteState {
    /// Copying tags, looking for `FileAttributes`.
    Scanning,
    /// `FileAttributes` was just emitted; the next tag decides placement.
    FoundFileAttributes,
    /// The End tag was emitted.
    Done,
}

/// Where the telemetry tag was inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Directly after `FileAttributes`.
    AfterFileAttributes,
    /// After the `Metadata` tag that follows `FileAttributes`.
    AfterMetadata,
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Placement::AfterFileAttributes => write!(f, "after FileAttributes"),
            Placement::AfterMetadata => write!(f, "after Metadata"),
        }
    }
}

/// Outcome of rewriting a body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteSummary {
    /// Number of tags read from the input, End tag included.
    pub tags_read: usize,
    /// Where the telemetry tag went, or `None` if it was not inserted.
    pub placement: Option<Placement>,
    /// Bytes after the End tag that were dropped.
    pub trailing_bytes: usize,
}

/// Tag-at-a-time rewriter that owns the output buffer.
#[derive(Debug)]
pub struct TagRewriter {
    telemetry_tag: Vec<u8>,
    state: RewriteState,
    placement: Option<Placement>,
    tags_read: usize,
    output: ByteCursor,
}

impl TagRewriter {
    /// Creates a rewriter that inserts `telemetry_tag` (a fully encoded tag).
    pub fn new(telemetry_tag: Vec<u8>, capacity: usize) -> Self {
        Self {
            telemetry_tag,
            state: RewriteState::Scanning,
            placement: None,
            tags_read: 0,
            output: ByteCursor::with_capacity(capacity),
        }
    }

    /// Returns the current state.
    pub fn state(&self) -> RewriteState {
        self.state
    }

    /// Returns where the telemetry tag was inserted so far.
    pub fn placement(&self) -> Option<Placement> {
        self.placement
    }

    /// Appends bytes that precede the tag stream (the frame header).
    pub fn emit_raw(&mut self, bytes: &[u8]) {
        self.output.write_bytes(bytes);
    }

    /// Processes one tag read at `offset` in the input.
    ///
    /// # Errors
    ///
    /// - [`Error::AlreadyPatched`] for an existing telemetry tag
    /// - [`Error::UnsupportedSignedFile`] for the signed-SWF marker
    /// - [`Error::BadFormat`] if called after the End tag
    pub fn feed(&mut self, tag: RawTag, offset: u64) -> Result<RewriteState> {
        self.tags_read += 1;

        match tag.code() {
            tag_code::ENABLE_TELEMETRY => return Err(Error::AlreadyPatched { offset }),
            tag_code::SIGNED_SWF => return Err(Error::UnsupportedSignedFile { offset }),
            _ => {}
        }

        match self.state {
            RewriteState::Done => {
                return Err(Error::BadFormat(format!(
                    "tag type {} after End tag at offset {:#x}",
                    tag.code(),
                    offset
                )));
            }
            RewriteState::FoundFileAttributes if tag.code() == tag_code::METADATA => {
                self.output.write_bytes(tag.as_bytes());
                self.insert(Placement::AfterMetadata);
                self.state = RewriteState::Scanning;
            }
            RewriteState::FoundFileAttributes => {
                self.insert(Placement::AfterFileAttributes);
                self.pass_through(&tag);
            }
            RewriteState::Scanning
                if tag.code() == tag_code::FILE_ATTRIBUTES && self.placement.is_none() =>
            {
                self.output.write_bytes(tag.as_bytes());
                self.state = RewriteState::FoundFileAttributes;
            }
            RewriteState::Scanning => self.pass_through(&tag),
        }

        Ok(self.state)
    }

    /// Consumes the rewriter and returns the output body.
    pub fn finish(self) -> (Vec<u8>, Option<Placement>, usize) {
        (self.output.into_inner(), self.placement, self.tags_read)
    }

    fn insert(&mut self, placement: Placement) {
        log::debug!(
            "Inserting {}-byte telemetry tag {} at output offset {:#x}",
            self.telemetry_tag.len(),
            placement,
            self.output.position()
        );
        self.output.write_bytes(&self.telemetry_tag);
        self.placement = Some(placement);
    }

    fn pass_through(&mut self, tag: &RawTag) {
        self.output.write_bytes(tag.as_bytes());
        self.state = if tag.is_end() {
            RewriteState::Done
        } else {
            RewriteState::Scanning
        };
    }
}

/// Rewrites a decompressed body (frame header followed by tags), inserting
/// `telemetry_tag`.
///
/// Untouched tags are copied byte for byte and in order. Scanning stops at
/// the End tag.
///
/// # Errors
///
/// Returns [`Error::UnexpectedEof`] if the body ends before the End tag,
/// plus every error of [`TagRewriter::feed`].
pub fn rewrite_body(body: Vec<u8>, telemetry_tag: Vec<u8>) -> Result<(Vec<u8>, RewriteSummary)> {
    let capacity = body.len() + telemetry_tag.len();
    let mut input = ByteCursor::new(body);
    let mut rewriter = TagRewriter::new(telemetry_tag, capacity);

    let frame = FrameHeader::read(&mut input)?;
    log::debug!(
        "Frame header: {} bytes ({}-bit RECT), {} fps, {} frames",
        frame.len(),
        frame.rect_bits(),
        frame.frame_rate(),
        frame.frame_count()
    );
    rewriter.emit_raw(frame.as_bytes());

    while rewriter.state() != RewriteState::Done {
        let offset = input.position() as u64;
        let tag = RawTag::read(&mut input)?;
        rewriter.feed(tag, offset)?;
    }

    let trailing_bytes = input.remaining();
    if trailing_bytes > 0 {
        log::warn!(
            "Discarding {} bytes after the End tag at offset {:#x}",
            trailing_bytes,
            input.position()
        );
    }

    let (output, placement, tags_read) = rewriter.finish();
    Ok((
        output,
        RewriteSummary {
            tags_read,
            placement,
            trailing_bytes,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edit::telemetry::encode_telemetry_tag;

    const FRAME: [u8; 5] = [0x00, 0x00, 0x18, 0x01, 0x00];

    fn body(tags: &[RawTag]) -> Vec<u8> {
        let mut out = FRAME.to_vec();
        for tag in tags {
            out.extend_from_slice(tag.as_bytes());
        }
        out
    }

    fn file_attributes() -> RawTag {
        RawTag::new(tag_code::FILE_ATTRIBUTES, &[0x08, 0, 0, 0])
    }

    fn metadata() -> RawTag {
        RawTag::new(tag_code::METADATA, b"hello")
    }

    fn end() -> RawTag {
        RawTag::new(tag_code::END, &[])
    }

    fn telemetry() -> RawTag {
        RawTag::new(tag_code::ENABLE_TELEMETRY, &[0, 0])
    }

    #[test]
    fn test_insert_after_metadata() {
        let show_frame = RawTag::new(1, &[]);
        let input = body(&[file_attributes(), metadata(), show_frame.clone(), end()]);
        let (output, summary) = rewrite_body(input, encode_telemetry_tag(None)).unwrap();

        let expected = body(&[file_attributes(), metadata(), telemetry(), show_frame, end()]);
        assert_eq!(output, expected);
        assert_eq!(summary.placement, Some(Placement::AfterMetadata));
        assert_eq!(summary.tags_read, 4);
        assert_eq!(summary.trailing_bytes, 0);
    }

    #[test]
    fn test_insert_after_file_attributes() {
        let background = RawTag::new(9, &[0xFF, 0xFF, 0xFF]);
        let input = body(&[file_attributes(), background.clone(), end()]);
        let (output, summary) = rewrite_body(input, encode_telemetry_tag(None)).unwrap();

        let expected = body(&[file_attributes(), telemetry(), background, end()]);
        assert_eq!(output, expected);
        assert_eq!(summary.placement, Some(Placement::AfterFileAttributes));
    }

    #[test]
    fn test_file_attributes_followed_by_end() {
        let input = body(&[file_attributes(), end()]);
        let (output, summary) = rewrite_body(input, encode_telemetry_tag(None)).unwrap();
        assert_eq!(output, body(&[file_attributes(), telemetry(), end()]));
        assert_eq!(summary.placement, Some(Placement::AfterFileAttributes));
        assert_eq!(summary.tags_read, 2);
    }

    #[test]
    fn test_no_file_attributes() {
        let input = body(&[RawTag::new(1, &[]), end()]);
        let (output, summary) = rewrite_body(input.clone(), encode_telemetry_tag(None)).unwrap();
        assert_eq!(output, input);
        assert_eq!(summary.placement, None);
    }

    #[test]
    fn test_second_file_attributes_passes_through() {
        let input = body(&[file_attributes(), file_attributes(), end()]);
        let (output, _) = rewrite_body(input, encode_telemetry_tag(None)).unwrap();
        assert_eq!(
            output,
            body(&[file_attributes(), telemetry(), file_attributes(), end()])
        );
    }

    #[test]
    fn test_already_patched() {
        let input = body(&[file_attributes(), telemetry(), end()]);
        let err = rewrite_body(input, encode_telemetry_tag(None)).unwrap_err();
        // Offset in the body: frame (5) + FileAttributes (6)
        assert!(matches!(err, Error::AlreadyPatched { offset: 11 }));
    }

    #[test]
    fn test_already_patched_later_in_stream() {
        let input = body(&[RawTag::new(1, &[]), telemetry(), end()]);
        let err = rewrite_body(input, encode_telemetry_tag(None)).unwrap_err();
        assert!(err.is_already_patched());
    }

    #[test]
    fn test_signed_file_rejected() {
        let input = body(&[
            file_attributes(),
            RawTag::new(tag_code::SIGNED_SWF, &[1, 2]),
            end(),
        ]);
        let err = rewrite_body(input, encode_telemetry_tag(None)).unwrap_err();
        assert!(matches!(err, Error::UnsupportedSignedFile { .. }));
    }

    #[test]
    fn test_missing_end_tag() {
        let input = body(&[file_attributes(), metadata()]);
        let err = rewrite_body(input, encode_telemetry_tag(None)).unwrap_err();
        assert!(matches!(err, Error::UnexpectedEof { needed: 2, .. }));
    }

    #[test]
    fn test_trailing_bytes_discarded() {
        let mut input = body(&[file_attributes(), end()]);
        input.extend_from_slice(&[0xDE, 0xAD]);
        let (output, summary) = rewrite_body(input, encode_telemetry_tag(None)).unwrap();
        assert_eq!(output, body(&[file_attributes(), telemetry(), end()]));
        assert_eq!(summary.trailing_bytes, 2);
    }

    #[test]
    fn test_feed_after_done() {
        let mut rewriter = TagRewriter::new(encode_telemetry_tag(None), 0);
        assert_eq!(rewriter.feed(end(), 0).unwrap(), RewriteState::Done);
        assert!(matches!(rewriter.feed(end(), 2), Err(Error::BadFormat(_))));
    }

    #[test]
    fn test_state_transitions() {
        let mut rewriter = TagRewriter::new(encode_telemetry_tag(None), 0);
        assert_eq!(rewriter.state(), RewriteState::Scanning);

        let state = rewriter.feed(file_attributes(), 0).unwrap();
        assert_eq!(state, RewriteState::FoundFileAttributes);
        assert_eq!(rewriter.placement(), None);

        let state = rewriter.feed(metadata(), 6).unwrap();
        assert_eq!(state, RewriteState::Scanning);
        assert_eq!(rewriter.placement(), Some(Placement::AfterMetadata));
        assert_eq!(rewriter.feed(end(), 13).unwrap(), RewriteState::Done);
    }
}
