//! URL-safe base64: the standard 6-bit alphabet with `+`/`/` rendered as
//! `-`/`_`.
//!
//! The general encoder writes no padding; the decoder accepts text with or
//! without trailing `=`. Fixed-width helpers give the short forms of 16-byte
//! identifiers (22 characters) and 8-byte integers (11 characters).
//!
//! ```
//! use base_pack::{Guid, base64url};
//!
//! let guid: Guid = "53dd0ae5-d410-4056-8010-6c3ca6f2ec13".parse().unwrap();
//! assert_eq!(base64url::encode_guid(&guid), "5QrdUxDUVkCAEGw8pvLsEw");
//! assert_eq!(base64url::decode_i64("RgGxr0_n1ZI").unwrap(), -7866126844696657594);
//! ```

use crate::core::dictionary::Dictionary;
use crate::encoders::algorithms::errors::{DecodeError, EncodeError};
use crate::encoders::algorithms::{chunked, fixed};
use crate::guid::Guid;
use std::sync::LazyLock;

static BASE64URL: LazyLock<Dictionary> = LazyLock::new(Dictionary::base64url);

/// Text length of a 16-byte value.
pub const FIXED16_LEN: usize = 22;

/// Text length of an 8-byte value.
pub const FIXED8_LEN: usize = 11;

/// The shared URL-safe dictionary.
pub fn dictionary() -> &'static Dictionary {
    &BASE64URL
}

pub fn encode(data: &[u8]) -> String {
    chunked::encode_chunked(data, &BASE64URL)
}

/// Writes unpadded text into `output`, returning the number of bytes written.
pub fn encode_into(data: &[u8], output: &mut [u8]) -> Result<usize, EncodeError> {
    chunked::encode_chunked_into(data, &BASE64URL, output)
}

pub fn decode(encoded: &str) -> Result<Vec<u8>, DecodeError> {
    chunked::decode_chunked(encoded, &BASE64URL)
}

pub fn decode_into(encoded: &str, output: &mut [u8]) -> Result<usize, DecodeError> {
    chunked::decode_chunked_into(encoded, &BASE64URL, output)
}

/// `None` decodes to an empty vector.
pub fn decode_opt(encoded: Option<&str>) -> Result<Vec<u8>, DecodeError> {
    encoded.map_or_else(|| Ok(Vec::new()), decode)
}

pub fn encoded_len(n: usize) -> usize {
    BASE64URL.encoded_len(n)
}

/// Bytes decoded from `symbols` data symbols (padding excluded).
pub fn decoded_len(symbols: usize) -> usize {
    BASE64URL.decoded_len(symbols)
}

pub fn encode_fixed16(value: &[u8; 16]) -> String {
    fixed::encode_fixed(value, &BASE64URL)
}

/// Decodes exactly 22 characters.
pub fn decode_fixed16(encoded: &str) -> Result<[u8; 16], DecodeError> {
    fixed::decode_fixed(encoded, &BASE64URL)
}

pub fn encode_fixed8(value: &[u8; 8]) -> String {
    fixed::encode_fixed(value, &BASE64URL)
}

/// Decodes exactly 11 characters.
pub fn decode_fixed8(encoded: &str) -> Result<[u8; 8], DecodeError> {
    fixed::decode_fixed(encoded, &BASE64URL)
}

pub fn encode_guid(guid: &Guid) -> String {
    encode_fixed16(&guid.to_bytes_le())
}

pub fn decode_guid(encoded: &str) -> Result<Guid, DecodeError> {
    decode_fixed16(encoded).map(Guid::from_bytes_le)
}

/// Encodes the little-endian bytes of `value`.
pub fn encode_i64(value: i64) -> String {
    encode_fixed8(&value.to_le_bytes())
}

pub fn decode_i64(encoded: &str) -> Result<i64, DecodeError> {
    decode_fixed8(encoded).map(i64::from_le_bytes)
}
