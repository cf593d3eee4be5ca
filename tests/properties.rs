//! Property-based tests.

use base_pack::{DecodeError, Dictionary, base32, base64url, decode, encode, from_url_safe, to_url_safe};
use proptest::prelude::*;

proptest! {
    #[test]
    fn base32_roundtrip(data in any::<Vec<u8>>()) {
        let text = base32::encode(&data);
        prop_assert_eq!(text.len() % 8, 0);
        prop_assert_eq!(base32::decode(&text).unwrap(), data);
    }

    #[test]
    fn base64url_roundtrip(data in any::<Vec<u8>>()) {
        let text = base64url::encode(&data);
        prop_assert_eq!(text.len(), (data.len() * 8).div_ceil(6));
        prop_assert_eq!(base64url::decode(&text).unwrap(), data);
    }

    #[test]
    fn trailing_padding_is_ignored(data in any::<Vec<u8>>(), extra in 0usize..10) {
        let pad = "=".repeat(extra);

        let text = format!("{}{}", base32::encode(&data), pad);
        prop_assert_eq!(base32::decode(&text).unwrap(), data.clone());

        let text = format!("{}{}", base64url::encode(&data), pad);
        prop_assert_eq!(base64url::decode(&text).unwrap(), data);
    }

    #[test]
    fn base32_case_insensitive(data in any::<Vec<u8>>()) {
        let text = base32::encode(&data).to_lowercase();
        prop_assert_eq!(base32::decode(&text).unwrap(), data);
    }

    #[test]
    fn fixed16_roundtrip(value in any::<[u8; 16]>()) {
        let text = base64url::encode_fixed16(&value);
        prop_assert_eq!(text.len(), 22);
        prop_assert_eq!(base64url::decode_fixed16(&text).unwrap(), value);
    }

    #[test]
    fn i64_roundtrip(value in any::<i64>()) {
        let text = base64url::encode_i64(value);
        prop_assert_eq!(text.len(), 11);
        prop_assert_eq!(base64url::decode_i64(&text).unwrap(), value);
    }

    #[test]
    fn fixed16_rejects_other_lengths(text in "[A-Za-z0-9_-]{0,40}") {
        prop_assume!(text.len() != 22);
        let is_length_mismatch = matches!(
            base64url::decode_fixed16(&text),
            Err(DecodeError::LengthMismatch { expected: 22, .. })
        );
        prop_assert!(is_length_mismatch);
    }

    #[test]
    fn decode_never_panics(text in "\\PC*") {
        let _ = base32::decode(&text);
        let _ = base64url::decode(&text);
        let _ = base64url::decode_fixed8(&text);
    }

    #[test]
    fn url_safe_mapping_is_reversible(index in 0usize..64) {
        let standard = Dictionary::base64url().encode_digit(index).map(from_url_safe);
        let c = base_pack::BASE64_CHARS.chars().nth(index).unwrap();
        prop_assert_eq!(standard, Some(Some(c)));
        prop_assert_eq!(from_url_safe(to_url_safe(c)), Some(c));
    }

    #[test]
    fn generic_matches_module_functions(data in any::<Vec<u8>>()) {
        prop_assert_eq!(encode(&data, &Dictionary::base32()), base32::encode(&data));
        let text = base64url::encode(&data);
        prop_assert_eq!(decode(&text, &Dictionary::base64url()).unwrap(), data);
    }
}
