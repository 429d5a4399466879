use std::fmt;
use std::io;

use rxchan_frame::{ErrorKind, FrameError};

// Exit code constants. INTEGRITY_FAILED keeps the stage's historical status 1.
pub const SUCCESS: i32 = 0;
pub const INTEGRITY_FAILED: i32 = 1;
pub const PERMISSION_DENIED: i32 = 50;
pub const DATA_INVALID: i32 = 60;
pub const LIMIT_EXCEEDED: i32 = 61;
pub const INPUT_UNAVAILABLE: i32 = 66;
pub const OUTPUT_FAILED: i32 = 74;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn io_error(context: &str, err: io::Error) -> CliError {
    let code = match err.kind() {
        io::ErrorKind::PermissionDenied => PERMISSION_DENIED,
        io::ErrorKind::NotFound
        | io::ErrorKind::UnexpectedEof
        | io::ErrorKind::BrokenPipe => INPUT_UNAVAILABLE,
        _ => INTERNAL,
    };
    CliError::new(code, format!("{context}: {err}"))
}

/// Any failure to deliver stage output, a closed downstream pipe included,
/// fails the invocation.
pub fn output_error(err: io::Error) -> CliError {
    CliError::new(OUTPUT_FAILED, format!("writing stdout failed: {err}"))
}

pub fn exit_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::InputUnavailable => INPUT_UNAVAILABLE,
        ErrorKind::MalformedFrame => DATA_INVALID,
        ErrorKind::ResourceLimitExceeded => LIMIT_EXCEEDED,
        ErrorKind::IntegrityMismatch => INTEGRITY_FAILED,
    }
}

pub fn frame_error(context: &str, err: FrameError) -> CliError {
    match err {
        FrameError::Io(source) if source.kind() == io::ErrorKind::PermissionDenied => {
            io_error(context, source)
        }
        other => CliError::new(exit_code(other.kind()), format!("{context}: {other}")),
    }
}
