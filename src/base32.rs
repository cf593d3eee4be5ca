//! RFC 4648 base32: 5 bits per symbol, padded with `=` to 8-symbol blocks.
//!
//! Decoding is case-insensitive and tolerates missing or extra trailing
//! padding.
//!
//! ```
//! assert_eq!(base_pack::base32::encode(&[0xFF, 0x1D]), "74OQ====");
//! assert_eq!(base_pack::base32::decode("74oq").unwrap(), [0xFF, 0x1D]);
//! ```

use crate::core::dictionary::Dictionary;
use crate::encoders::algorithms::chunked;
use crate::encoders::algorithms::errors::{DecodeError, EncodeError};
use std::sync::LazyLock;

static BASE32: LazyLock<Dictionary> = LazyLock::new(Dictionary::base32);

/// The shared base32 dictionary.
pub fn dictionary() -> &'static Dictionary {
    &BASE32
}

pub fn encode(data: &[u8]) -> String {
    chunked::encode_chunked(data, &BASE32)
}

/// Writes padded base32 into `output`, returning the number of bytes written.
pub fn encode_into(data: &[u8], output: &mut [u8]) -> Result<usize, EncodeError> {
    chunked::encode_chunked_into(data, &BASE32, output)
}

pub fn decode(encoded: &str) -> Result<Vec<u8>, DecodeError> {
    chunked::decode_chunked(encoded, &BASE32)
}

pub fn decode_into(encoded: &str, output: &mut [u8]) -> Result<usize, DecodeError> {
    chunked::decode_chunked_into(encoded, &BASE32, output)
}

/// `None` decodes to an empty vector.
pub fn decode_opt(encoded: Option<&str>) -> Result<Vec<u8>, DecodeError> {
    encoded.map_or_else(|| Ok(Vec::new()), decode)
}

/// Padded text length for `n` bytes.
pub fn encoded_len(n: usize) -> usize {
    BASE32.encoded_len(n)
}

/// Bytes decoded from `symbols` data symbols (padding excluded).
pub fn decoded_len(symbols: usize) -> usize {
    BASE32.decoded_len(symbols)
}
