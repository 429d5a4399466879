//! Byte <-> ASCII bit-string conversion for the source-decoding stage.

/// Render every byte as eight `'0'`/`'1'` characters, most significant bit
/// first, bytes in order, no separators.
pub fn to_bit_string(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len() * 8);
    for &byte in data {
        for shift in (0..8u8).rev() {
            out.push(if (byte >> shift) & 1 == 1 { '1' } else { '0' });
        }
    }
    out
}

/// Inverse of [`to_bit_string`].
///
/// Returns `None` when the length is not a multiple of eight or a character
/// other than `'0'`/`'1'` appears.
pub fn from_bit_string(bits: &str) -> Option<Vec<u8>> {
    let bits = bits.as_bytes();
    if bits.len() % 8 != 0 {
        return None;
    }
    bits.chunks_exact(8)
        .map(|group| {
            group.iter().try_fold(0u8, |acc, &bit| match bit {
                b'0' => Some(acc << 1),
                b'1' => Some((acc << 1) | 1),
                _ => None,
            })
        })
        .collect()
}
