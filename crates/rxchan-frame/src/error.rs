use std::fmt;

/// Errors that can occur while reading or decoding a frame.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// The input stream reached EOF before a frame line was available.
    #[error("no frame available (input closed)")]
    InputClosed,

    /// An I/O error occurred while reading the frame line.
    #[error("frame I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The frame text is not an even-length, non-empty run of hex digits.
    #[error("malformed frame: {0}")]
    Malformed(Malformed),

    /// The frame exceeds the configured maximum size.
    #[error("frame too large ({size} bytes, max {max})")]
    TooLarge { size: usize, max: usize },

    /// The input line ran past the configured maximum before it ended; the
    /// rest of the line was not read, so its size is unknown.
    #[error("frame too large (exceeds max {max} bytes)")]
    LineTooLong { max: usize },

    /// The computed checksum disagrees with the trailer byte.
    #[error("CRC check failed (computed 0x{computed:02x}, trailer 0x{trailer:02x})")]
    IntegrityMismatch { computed: u8, trailer: u8 },
}

/// Why a frame's hex text was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Malformed {
    /// No hex digits after trimming the line terminator.
    Empty,
    /// An odd number of hex digits.
    OddLength(usize),
    /// A byte that is not `0-9a-fA-F` at the given offset.
    InvalidDigit { offset: usize, byte: u8 },
}

impl fmt::Display for Malformed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Malformed::Empty => write!(f, "empty frame"),
            Malformed::OddLength(len) => write!(f, "odd hex length ({len} digits)"),
            Malformed::InvalidDigit { offset, byte } if byte.is_ascii_graphic() => {
                write!(f, "invalid hex digit '{}' at offset {offset}", *byte as char)
            }
            Malformed::InvalidDigit { offset, byte } => {
                write!(f, "invalid hex byte 0x{byte:02x} at offset {offset}")
            }
        }
    }
}

/// Coarse classification of [`FrameError`], one entry per failure outcome
/// of a decode invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InputUnavailable,
    MalformedFrame,
    ResourceLimitExceeded,
    IntegrityMismatch,
}

impl FrameError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FrameError::InputClosed | FrameError::Io(_) => ErrorKind::InputUnavailable,
            FrameError::Malformed(_) => ErrorKind::MalformedFrame,
            FrameError::TooLarge { .. } | FrameError::LineTooLong { .. } => {
                ErrorKind::ResourceLimitExceeded
            }
            FrameError::IntegrityMismatch { .. } => ErrorKind::IntegrityMismatch,
        }
    }
}

impl From<Malformed> for FrameError {
    fn from(reason: Malformed) -> Self {
        FrameError::Malformed(reason)
    }
}

pub type Result<T> = std::result::Result<T, FrameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_cover_every_variant() {
        assert_eq!(FrameError::InputClosed.kind(), ErrorKind::InputUnavailable);
        assert_eq!(
            FrameError::Io(std::io::Error::other("boom")).kind(),
            ErrorKind::InputUnavailable
        );
        assert_eq!(
            FrameError::from(Malformed::Empty).kind(),
            ErrorKind::MalformedFrame
        );
        assert_eq!(
            FrameError::TooLarge { size: 9, max: 8 }.kind(),
            ErrorKind::ResourceLimitExceeded
        );
        assert_eq!(
            FrameError::LineTooLong { max: 8 }.kind(),
            ErrorKind::ResourceLimitExceeded
        );
        assert_eq!(
            FrameError::IntegrityMismatch {
                computed: 0,
                trailer: 7
            }
            .kind(),
            ErrorKind::IntegrityMismatch
        );
    }

    #[test]
    fn display_messages() {
        let err = FrameError::IntegrityMismatch {
            computed: 0x00,
            trailer: 0x07,
        };
        assert_eq!(
            err.to_string(),
            "CRC check failed (computed 0x00, trailer 0x07)"
        );

        let err = FrameError::from(Malformed::InvalidDigit {
            offset: 3,
            byte: b'g',
        });
        assert_eq!(
            err.to_string(),
            "malformed frame: invalid hex digit 'g' at offset 3"
        );

        let err = FrameError::from(Malformed::InvalidDigit {
            offset: 0,
            byte: b' ',
        });
        assert_eq!(
            err.to_string(),
            "malformed frame: invalid hex byte 0x20 at offset 0"
        );
    }
}
