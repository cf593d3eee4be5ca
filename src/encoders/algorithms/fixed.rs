//! Short form for values whose byte width is known up front.
//!
//! Since the decoder always knows how many bytes to expect, the padding the
//! general encoder would add is never written. The text length is exactly
//! `ceil(N * 8 / bits_per_char)`: 22 characters for 16 bytes and 11 for 8
//! bytes with the URL-safe dictionary.

use super::chunked::{pack, unpack};
use crate::core::dictionary::Dictionary;

pub use super::errors::DecodeError;

/// Text length of an `N`-byte value.
pub fn fixed_len<const N: usize>(dictionary: &Dictionary) -> usize {
    dictionary.unpadded_len(N)
}

pub fn encode_fixed<const N: usize>(value: &[u8; N], dictionary: &Dictionary) -> String {
    let mut result = String::with_capacity(fixed_len::<N>(dictionary));
    pack(value, dictionary, |index| {
        result.push(char::from(dictionary.symbol(index)))
    });
    result
}

/// Decodes exactly `fixed_len::<N>()` characters back into `N` bytes.
///
/// Any other length fails with `LengthMismatch`; padding characters are
/// rejected like any other character outside the dictionary.
pub fn decode_fixed<const N: usize>(
    encoded: &str,
    dictionary: &Dictionary,
) -> Result<[u8; N], DecodeError> {
    let expected = fixed_len::<N>(dictionary);
    let actual = encoded.chars().count();
    if actual != expected {
        return Err(DecodeError::LengthMismatch { actual, expected });
    }

    let mut value = [0u8; N];
    let written = unpack(encoded, encoded, dictionary, &mut value)?;
    debug_assert_eq!(written, N);

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_lengths() {
        let base64url = Dictionary::base64url();
        assert_eq!(fixed_len::<16>(&base64url), 22);
        assert_eq!(fixed_len::<8>(&base64url), 11);

        let base32 = Dictionary::base32();
        assert_eq!(fixed_len::<16>(&base32), 26);
        assert_eq!(fixed_len::<8>(&base32), 13);
    }

    #[test]
    fn test_fixed16_vector() {
        let base64url = Dictionary::base64url();
        let bytes = [
            0xE5, 0x0A, 0xDD, 0x53, 0x10, 0xD4, 0x56, 0x40, 0x80, 0x10, 0x6C, 0x3C, 0xA6, 0xF2,
            0xEC, 0x13,
        ];
        assert_eq!(encode_fixed(&bytes, &base64url), "5QrdUxDUVkCAEGw8pvLsEw");
        assert_eq!(
            decode_fixed::<16>("5QrdUxDUVkCAEGw8pvLsEw", &base64url).unwrap(),
            bytes
        );
    }

    #[test]
    fn test_fixed8_extremes() {
        let base64url = Dictionary::base64url();
        assert_eq!(encode_fixed(&[0u8; 8], &base64url), "AAAAAAAAAAA");
        assert_eq!(encode_fixed(&[0xFFu8; 8], &base64url), "__________8");
        assert_eq!(
            decode_fixed::<8>("__________8", &base64url).unwrap(),
            [0xFF; 8]
        );
    }

    #[test]
    fn test_length_mismatch() {
        let base64url = Dictionary::base64url();
        assert_eq!(
            decode_fixed::<16>("5QrdUxDUVkCAEGw8pvLsE", &base64url),
            Err(DecodeError::LengthMismatch {
                actual: 21,
                expected: 22
            })
        );
        assert_eq!(
            decode_fixed::<8>("", &base64url),
            Err(DecodeError::LengthMismatch {
                actual: 0,
                expected: 11
            })
        );
        // The padded general form is not accepted
        assert!(matches!(
            decode_fixed::<8>("RgGxr0_n1ZI=", &base64url),
            Err(DecodeError::LengthMismatch { actual: 12, .. })
        ));
    }

    #[test]
    fn test_padding_inside_fixed_text_is_invalid() {
        let base64url = Dictionary::base64url();
        assert!(matches!(
            decode_fixed::<8>("RgGxr0_n1Z=", &base64url),
            Err(DecodeError::InvalidCharacter {
                char: '=',
                position: 10,
                ..
            })
        ));
    }

    #[test]
    fn test_invalid_character() {
        let base64url = Dictionary::base64url();
        assert!(matches!(
            decode_fixed::<16>("6nE2uKQ4$0ar9kpmybgkdw", &base64url),
            Err(DecodeError::InvalidCharacter { char: '$', .. })
        ));
    }
}
