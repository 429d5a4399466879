//! RX channel-decoding stage of the simulated receive pipeline.
//!
//! Consumes one hex-encoded frame from the framing stage, verifies its CRC-8
//! trailer, and hands the frame to source decoding as a string of ASCII bits.
//!
//! # Crate Structure
//!
//! - [`frame`]: CRC-8 engine, hex/bit conversion and the frame decoder
//!
//! The `rxchan` binary (behind the `cli` feature) wraps this as a pipeline
//! stage reading stdin and writing stdout.

/// Re-export frame types.
pub mod frame {
    pub use rxchan_frame::*;
}
