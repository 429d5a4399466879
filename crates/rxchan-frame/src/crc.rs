//! CRC-8 engine.
//!
//! Bit-serial, MSB first, no reflection, initial value 0, no final XOR.
//! Generator polynomial x^8 + x^2 + x + 1 (0x07), the CRC-8/SMBUS parameters.

/// Generator polynomial with the implicit x^8 term dropped.
pub const POLYNOMIAL: u8 = 0x07;

/// Initial register value.
pub const INIT: u8 = 0x00;

/// Compute the CRC-8 of `data`.
///
/// Total over its input: the empty slice yields `0`.
pub fn crc8(data: &[u8]) -> u8 {
    let mut crc = INIT;
    for &byte in data {
        crc ^= byte;
        for _ in 0..8 {
            // u8 shifts discard the carried-out bit, which is the 0xFF mask.
            if crc & 0x80 != 0 {
                crc = (crc << 1) ^ POLYNOMIAL;
            } else {
                crc <<= 1;
            }
        }
    }
    crc
}

/// Trailer values `t` for which `payload ++ [t]` passes frame verification,
/// i.e. `crc8(payload ++ [t]) == t`.
///
/// Verification hashes the trailer slot too, so a payload has either zero or
/// two such trailers.
pub fn candidate_trailers(payload: &[u8]) -> Vec<u8> {
    let seed = crc8(payload);
    (0..=u8::MAX)
        .filter(|&trailer| crc8(&[seed ^ trailer]) == trailer)
        .collect()
}
