use bytes::Bytes;
use tracing::{debug, warn};

use crate::bits::to_bit_string;
use crate::crc::crc8;
use crate::error::{FrameError, Malformed, Result};
use crate::hex::decode_hex;

/// Default maximum frame size: 8000 bytes (16000 hex digits).
pub const DEFAULT_MAX_FRAME_BYTES: usize = 8000;

/// A received frame: payload bytes followed by one trailer byte.
///
/// Always holds at least one byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    bytes: Bytes,
}

impl Frame {
    /// Wrap a byte sequence. Returns `None` for an empty sequence.
    pub fn new(bytes: impl Into<Bytes>) -> Option<Self> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return None;
        }
        Some(Self { bytes })
    }

    /// All bytes, trailer included.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Bytes preceding the trailer. Empty for a single-byte frame.
    pub fn payload(&self) -> &[u8] {
        &self.bytes[..self.bytes.len() - 1]
    }

    /// The transmitted CRC-8 value.
    pub fn trailer(&self) -> u8 {
        self.bytes[self.bytes.len() - 1]
    }

    /// CRC-8 over the whole frame, trailer slot included.
    pub fn checksum(&self) -> u8 {
        crc8(&self.bytes)
    }

    /// Accept when `crc8(all bytes) == trailer`.
    pub fn verify(&self) -> Result<()> {
        let computed = self.checksum();
        let trailer = self.trailer();
        if computed != trailer {
            return Err(FrameError::IntegrityMismatch { computed, trailer });
        }
        Ok(())
    }

    /// Bit-string covering payload and trailer, MSB first.
    pub fn to_bit_string(&self) -> String {
        to_bit_string(&self.bytes)
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false; a frame carries at least its trailer.
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Configuration for frame decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameConfig {
    /// Maximum frame size in bytes (payload + trailer). Default: 8000.
    pub max_frame_bytes: usize,
}

impl FrameConfig {
    /// Hex digits needed to carry `max_frame_bytes`.
    pub fn max_hex_digits(&self) -> usize {
        self.max_frame_bytes.saturating_mul(2)
    }
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            max_frame_bytes: DEFAULT_MAX_FRAME_BYTES,
        }
    }
}

/// Turns one line of hex text into a verified bit-string.
#[derive(Debug, Clone, Default)]
pub struct FrameDecoder {
    config: FrameConfig,
}

impl FrameDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: FrameConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FrameConfig {
        &self.config
    }

    /// Trim, bound-check and hex-decode a line without verifying it.
    ///
    /// The returned frame may still fail [`Frame::verify`].
    pub fn parse(&self, line: &str) -> Result<Frame> {
        let text = trim_line_terminator(line);
        if text.len() > self.config.max_hex_digits() {
            return Err(FrameError::TooLarge {
                size: text.len().div_ceil(2),
                max: self.config.max_frame_bytes,
            });
        }

        let bytes = decode_hex(text)?;
        debug!(bytes = bytes.len(), "decoded frame hex");
        Frame::new(bytes).ok_or(FrameError::Malformed(Malformed::Empty))
    }

    /// Parse and verify a line, returning the frame on accept.
    pub fn verify(&self, line: &str) -> Result<Frame> {
        let frame = self.parse(line)?;
        if let Err(err) = frame.verify() {
            warn!(bytes = frame.len(), "{err}");
            return Err(err);
        }
        debug!(
            bytes = frame.len(),
            trailer = frame.trailer(),
            "frame verified"
        );
        Ok(frame)
    }

    /// Parse, verify and render a line as the downstream bit-string.
    pub fn decode(&self, line: &str) -> Result<String> {
        self.verify(line).map(|frame| frame.to_bit_string())
    }
}

/// Decode one frame line with the default configuration.
pub fn decode_frame(line: &str) -> Result<String> {
    FrameDecoder::new().decode(line)
}

/// Strip a single trailing `\n` or `\r\n`; nothing else is trimmed.
pub fn trim_line_terminator(line: &str) -> &str {
    match line.strip_suffix('\n') {
        Some(rest) => rest.strip_suffix('\r').unwrap_or(rest),
        None => line,
    }
}
