//! Exit codes for the CLI tool.

use swf_telemetry::Error;

/// Exit code constants
pub const SUCCESS: i32 = 0;
/// Operation completed with warnings
pub const WARNING: i32 = 1;
/// Fatal error occurred
pub const FATAL_ERROR: i32 = 2;
/// Not a valid SWF file
pub const BAD_FILE: i32 = 3;
/// File already has telemetry enabled
pub const ALREADY_PATCHED: i32 = 4;
/// I/O error
pub const IO_ERROR: i32 = 5;
/// Valid SWF that this tool cannot rewrite
pub const UNSUPPORTED: i32 = 6;
/// Invalid command line arguments
pub const BAD_ARGS: i32 = 255;

/// Exit code enum for structured handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success,
    Warning,
    FatalError,
    BadFile,
    AlreadyPatched,
    IoError,
    Unsupported,
    BadArgs,
}

impl ExitCode {
    /// Returns the numeric exit code
    pub fn code(self) -> i32 {
        match self {
            Self::Success => SUCCESS,
            Self::Warning => WARNING,
            Self::FatalError => FATAL_ERROR,
            Self::BadFile => BAD_FILE,
            Self::AlreadyPatched => ALREADY_PATCHED,
            Self::IoError => IO_ERROR,
            Self::Unsupported => UNSUPPORTED,
            Self::BadArgs => BAD_ARGS,
        }
    }
}

/// Converts a patch error to an exit code
pub fn error_to_exit_code(error: &Error) -> ExitCode {
    match error {
        Error::Io(_) => ExitCode::IoError,
        Error::BadFormat(_) | Error::UnexpectedEof { .. } => ExitCode::BadFile,
        Error::FileAttributesNotFound => ExitCode::BadFile,
        Error::AlreadyPatched { .. } => ExitCode::AlreadyPatched,
        Error::UnsupportedCompression { .. } | Error::UnsupportedSignedFile { .. } => {
            ExitCode::Unsupported
        }
        Error::InvalidCompressionLevel { .. } => ExitCode::BadArgs,
        // Future error variants - required by #[non_exhaustive]
        _ => ExitCode::FatalError,
    }
}
