use bytes::{Bytes, BytesMut};
use ::hex::FromHexError;

use crate::error::Malformed;

/// Decode an even-length run of hex digit pairs into bytes.
///
/// Accepts `0-9a-fA-F` only; no whitespace, prefixes or separators.
pub fn decode_hex(text: &str) -> Result<Bytes, Malformed> {
    let digits = text.as_bytes();
    if digits.is_empty() {
        return Err(Malformed::Empty);
    }

    let mut out = BytesMut::zeroed(digits.len() / 2);
    ::hex::decode_to_slice(digits, &mut out).map_err(|err| match err {
        // `index` is a byte offset into `digits`; report the raw byte rather
        // than the lossy `char` the crate hands back.
        FromHexError::InvalidHexCharacter { index, .. } => Malformed::InvalidDigit {
            offset: index,
            byte: digits[index],
        },
        _ => Malformed::OddLength(digits.len()),
    })?;
    Ok(out.freeze())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_mixed_case() {
        let bytes = decode_hex("00fFa5C3").unwrap();
        assert_eq!(bytes.as_ref(), &[0x00, 0xFF, 0xA5, 0xC3]);
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(decode_hex(""), Err(Malformed::Empty));
    }

    #[test]
    fn rejects_odd_length() {
        assert_eq!(decode_hex("010"), Err(Malformed::OddLength(3)));
    }

    #[test]
    fn reports_offset_of_bad_digit() {
        assert_eq!(
            decode_hex("01x7"),
            Err(Malformed::InvalidDigit {
                offset: 2,
                byte: b'x'
            })
        );
        assert_eq!(
            decode_hex("010 "),
            Err(Malformed::InvalidDigit {
                offset: 3,
                byte: b' '
            })
        );
    }

    #[test]
    fn rejects_sign_and_prefix_forms() {
        assert!(decode_hex("+1").is_err());
        assert!(decode_hex("0x").is_err());
    }

    #[test]
    fn rejects_non_ascii() {
        // "é" is two UTF-8 bytes, neither a hex digit.
        assert_eq!(
            decode_hex("é"),
            Err(Malformed::InvalidDigit {
                offset: 0,
                byte: 0xC3
            })
        );
    }

    #[test]
    fn agrees_with_lowercase_encoding() {
        let bytes = decode_hex("DEAD01").unwrap();
        assert_eq!(::hex::encode(&bytes), "dead01");
    }
}
