//! CRC-8 verified frame decoding for the RX channel-decoding stage.
//!
//! A frame arrives as one line of hex text: payload bytes followed by a
//! single trailer byte carrying the sender's CRC-8. Decoding:
//! - strips one trailing line terminator
//! - hex-decodes the digit pairs (bounded by [`FrameConfig::max_frame_bytes`])
//! - accepts the frame when `crc8(all bytes) == trailer`
//! - renders every byte, trailer included, as ASCII bits MSB first
//!
//! Any failure yields a [`FrameError`] and no output.

pub mod bits;
pub mod codec;
pub mod crc;
pub mod error;
pub mod hex;
pub mod reader;

pub use bits::{from_bit_string, to_bit_string};
pub use codec::{
    decode_frame, trim_line_terminator, Frame, FrameConfig, FrameDecoder,
    DEFAULT_MAX_FRAME_BYTES,
};
pub use crc::{candidate_trailers, crc8, POLYNOMIAL};
pub use error::{ErrorKind, FrameError, Malformed, Result};
pub use self::hex::decode_hex;
pub use reader::read_frame_line;
