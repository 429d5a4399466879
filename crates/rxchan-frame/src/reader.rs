use std::io::{BufRead, ErrorKind};

use tracing::debug;

use crate::codec::FrameConfig;
use crate::error::{FrameError, Result};

/// Room for a `\r\n` terminator after the hex digits.
const TERMINATOR_ALLOWANCE: usize = 2;

/// Read exactly one frame line from `reader`.
///
/// At most `2 * max_frame_bytes + 2` bytes are consumed, so an oversized or
/// unterminated stream cannot grow the buffer without bound. The returned
/// line keeps its terminator; [`FrameDecoder`](crate::FrameDecoder) trims it.
///
/// Returns `Err(FrameError::InputClosed)` when EOF comes before any byte.
pub fn read_frame_line<R: BufRead>(reader: R, config: &FrameConfig) -> Result<String> {
    let limit = config
        .max_hex_digits()
        .saturating_add(TERMINATOR_ALLOWANCE);
    let mut bounded = reader.take((limit as u64).saturating_add(1));
    let mut raw = Vec::with_capacity(limit.min(8 * 1024));

    loop {
        match bounded.read_until(b'\n', &mut raw) {
            Ok(_) => break,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(FrameError::Io(err)),
        }
    }

    if raw.is_empty() {
        return Err(FrameError::InputClosed);
    }
    if raw.len() > limit {
        return Err(FrameError::LineTooLong {
            max: config.max_frame_bytes,
        });
    }

    debug!(len = raw.len(), "read frame line");
    // Non-UTF-8 bytes become U+FFFD, which hex decoding rejects.
    Ok(String::from_utf8_lossy(&raw).into_owned())
}

#[cfg(test)]
mod tests {
    use std::io::{self, Cursor, Read};

    use super::*;
    use crate::error::ErrorKind as FrameErrorKind;

    #[test]
    fn reads_first_line_only() {
        let input = Cursor::new(b"411d\nffff\n".to_vec());
        let line = read_frame_line(input, &FrameConfig::default()).unwrap();
        assert_eq!(line, "411d\n");
    }

    #[test]
    fn accepts_unterminated_line() {
        let input = Cursor::new(b"411d".to_vec());
        let line = read_frame_line(input, &FrameConfig::default()).unwrap();
        assert_eq!(line, "411d");
    }

    #[test]
    fn empty_line_is_returned() {
        let input = Cursor::new(b"\n".to_vec());
        let line = read_frame_line(input, &FrameConfig::default()).unwrap();
        assert_eq!(line, "\n");
    }

    #[test]
    fn eof_is_input_closed() {
        let input = Cursor::new(Vec::new());
        let err = read_frame_line(input, &FrameConfig::default()).unwrap_err();
        assert!(matches!(err, FrameError::InputClosed));
        assert_eq!(err.kind(), FrameErrorKind::InputUnavailable);
    }

    #[test]
    fn oversized_line_is_rejected() {
        let config = FrameConfig { max_frame_bytes: 2 };
        let input = Cursor::new(b"0102030405\n".to_vec());
        let err = read_frame_line(input, &config).unwrap_err();
        assert_eq!(err.kind(), FrameErrorKind::ResourceLimitExceeded);
    }

    #[test]
    fn oversized_line_does_not_guess_its_size() {
        let config = FrameConfig { max_frame_bytes: 2 };
        let input = Cursor::new(format!("{}\n", "0".repeat(50)).into_bytes());
        let err = read_frame_line(input, &config).unwrap_err();
        assert!(matches!(err, FrameError::LineTooLong { max: 2 }));
        assert_eq!(err.to_string(), "frame too large (exceeds max 2 bytes)");
    }

    #[test]
    fn crlf_at_limit_fits() {
        let config = FrameConfig { max_frame_bytes: 2 };
        let input = Cursor::new(b"0102\r\n".to_vec());
        let line = read_frame_line(input, &config).unwrap();
        assert_eq!(line, "0102\r\n");
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }
    }

    #[test]
    fn io_error_is_input_unavailable() {
        let reader = io::BufReader::new(FailingReader);
        let err = read_frame_line(reader, &FrameConfig::default()).unwrap_err();
        assert!(matches!(err, FrameError::Io(_)));
        assert_eq!(err.kind(), FrameErrorKind::InputUnavailable);
    }

    #[test]
    fn interrupted_reads_are_retried() {
        struct FlakyReader {
            interrupted: bool,
            inner: Cursor<Vec<u8>>,
        }

        impl Read for FlakyReader {
            fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
                if !self.interrupted {
                    self.interrupted = true;
                    return Err(io::Error::from(io::ErrorKind::Interrupted));
                }
                self.inner.read(buf)
            }
        }

        let reader = io::BufReader::new(FlakyReader {
            interrupted: false,
            inner: Cursor::new(b"00\n".to_vec()),
        });
        let line = read_frame_line(reader, &FrameConfig::default()).unwrap();
        assert_eq!(line, "00\n");
    }
}
