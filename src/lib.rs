//! Bit-packing binary-to-text codecs.
//!
//! Two dictionaries share one packing engine: RFC 4648 base32 (5 bits per
//! symbol, `=`-padded to 8-symbol blocks, case-insensitive) and URL-safe
//! base64 (6 bits per symbol, unpadded output, padding optional on decode).
//! The URL-safe codec also has short fixed-width forms for 16-byte
//! identifiers and 8-byte integers.
//!
//! ```
//! use base_pack::{base32, base64url};
//!
//! assert_eq!(base32::encode(&[0x13, 0xD0, 0xA9, 0xB3]), "CPIKTMY=");
//! assert_eq!(base64url::encode(&[0x69, 0x52, 0xCE]), "aVLO");
//! assert_eq!(base64url::decode_fixed8("AQAAAAAAAAA").unwrap(), 1i64.to_le_bytes());
//! ```

mod core;
mod encoders;
mod guid;

pub mod base32;
pub mod base64url;

pub use crate::core::config::{DictionaryConfig, DictionaryRegistry, Settings};
pub use crate::core::dictionary::{
    BASE32_CHARS, BASE64_CHARS, Dictionary, DictionaryBuilder, DictionaryError, PADDING,
    from_url_safe, to_url_safe,
};
pub use crate::encoders::algorithms::{
    DecodeError, DictionaryNotFoundError, EncodeError, find_closest_dictionary,
};
pub use crate::encoders::fixed::{decode_fixed, encode_fixed, fixed_len};
pub use crate::guid::{Guid, GuidParseError};

/// Encodes `data` with `dictionary`, padding per the dictionary's policy.
pub fn encode(data: &[u8], dictionary: &Dictionary) -> String {
    encoders::chunked::encode_chunked(data, dictionary)
}

/// Encodes into a caller-supplied ASCII buffer, returning the bytes written.
pub fn encode_into(
    data: &[u8],
    dictionary: &Dictionary,
    output: &mut [u8],
) -> Result<usize, EncodeError> {
    encoders::chunked::encode_chunked_into(data, dictionary, output)
}

/// Decodes `encoded`, ignoring trailing padding. Empty text decodes to an
/// empty vector.
pub fn decode(encoded: &str, dictionary: &Dictionary) -> Result<Vec<u8>, DecodeError> {
    encoders::chunked::decode_chunked(encoded, dictionary)
}

/// Decodes into a caller-supplied buffer, returning the bytes written.
pub fn decode_into(
    encoded: &str,
    dictionary: &Dictionary,
    output: &mut [u8],
) -> Result<usize, DecodeError> {
    encoders::chunked::decode_chunked_into(encoded, dictionary, output)
}

/// Like [`decode`], with `None` treated as empty text.
pub fn decode_opt(encoded: Option<&str>, dictionary: &Dictionary) -> Result<Vec<u8>, DecodeError> {
    encoded.map_or_else(|| Ok(Vec::new()), |text| decode(text, dictionary))
}
