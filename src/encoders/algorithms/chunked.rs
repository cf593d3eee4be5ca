use crate::core::dictionary::Dictionary;

pub use super::errors::{DecodeError, EncodeError};

/// Reads up to one block of bytes as a big-endian integer, left-aligned to
/// `block_bytes * 8` bits. Missing bytes are zero.
fn load_block(bytes: &[u8], block_bytes: usize) -> u64 {
    (0..block_bytes).fold(0u64, |block, i| {
        (block << 8) | u64::from(bytes.get(i).copied().unwrap_or(0))
    })
}

/// Slices `data` into `bits_per_char`-wide symbol indices, one block at a time.
///
/// A short final block yields only its meaningful symbols; its low-order bits
/// are zero. No padding is produced here.
pub(crate) fn pack(data: &[u8], dictionary: &Dictionary, mut emit: impl FnMut(u8)) {
    let bits_per_char = dictionary.bits_per_char();
    let block_bytes = dictionary.block_bytes();
    let block_chars = dictionary.block_chars();
    let block_bits = block_bytes * 8;
    let mask = (1u64 << bits_per_char) - 1;

    let chunks = data.chunks_exact(block_bytes);
    let remainder = chunks.remainder();

    for chunk in chunks {
        let block = load_block(chunk, block_bytes);
        for i in 1..=block_chars {
            emit(((block >> (block_bits - i * bits_per_char)) & mask) as u8);
        }
    }

    if !remainder.is_empty() {
        let block = load_block(remainder, block_bytes);
        for i in 1..=dictionary.meaningful_chars(remainder.len()) {
            emit(((block >> (block_bits - i * bits_per_char)) & mask) as u8);
        }
    }
}

/// Reassembles bytes from `symbols` into `output`, returning the number written.
///
/// `output` must hold at least `dictionary.decoded_len(symbols.chars().count())`
/// bytes. Bits of a trailing partial byte are dropped without checking that
/// they are zero. `input` is the caller's original text, echoed in errors.
pub(crate) fn unpack(
    symbols: &str,
    input: &str,
    dictionary: &Dictionary,
    output: &mut [u8],
) -> Result<usize, DecodeError> {
    let bits_per_char = dictionary.bits_per_char();
    let block_bytes = dictionary.block_bytes();
    let block_chars = dictionary.block_chars();
    let block_bits = block_bytes * 8;

    let mut written = 0;
    let mut block = 0u64;
    let mut filled = 0;

    for (position, c) in symbols.chars().enumerate() {
        let digit = dictionary.decode_char(c).ok_or_else(|| {
            DecodeError::invalid_character(c, position, input, &dictionary.valid_chars())
        })?;

        block = (block << bits_per_char) | u64::from(digit);
        filled += 1;

        if filled == block_chars {
            for i in 1..=block_bytes {
                output[written] = (block >> (block_bits - i * 8)) as u8;
                written += 1;
            }
            block = 0;
            filled = 0;
        }
    }

    if filled > 0 {
        let block = block << ((block_chars - filled) * bits_per_char);
        for i in 1..=(filled * bits_per_char / 8) {
            output[written] = (block >> (block_bits - i * 8)) as u8;
            written += 1;
        }
    }

    Ok(written)
}

/// Strips every trailing padding character.
fn strip_padding<'a>(encoded: &'a str, dictionary: &Dictionary) -> &'a str {
    match dictionary.padding() {
        Some(pad) => encoded.trim_end_matches(pad),
        None => encoded,
    }
}

pub fn encode_chunked(data: &[u8], dictionary: &Dictionary) -> String {
    let encoded_len = dictionary.encoded_len(data.len());
    let mut result = String::with_capacity(encoded_len);

    pack(data, dictionary, |index| {
        result.push(char::from(dictionary.symbol(index)))
    });

    if let Some(pad_char) = dictionary.output_padding() {
        while result.len() < encoded_len {
            result.push(pad_char);
        }
    }

    result
}

/// Encodes into a caller-supplied buffer of ASCII bytes.
///
/// Returns the number of bytes written, or `BufferTooSmall` if `output`
/// is shorter than `dictionary.encoded_len(data.len())`.
pub fn encode_chunked_into(
    data: &[u8],
    dictionary: &Dictionary,
    output: &mut [u8],
) -> Result<usize, EncodeError> {
    let required = dictionary.encoded_len(data.len());
    if output.len() < required {
        return Err(EncodeError::BufferTooSmall {
            required,
            actual: output.len(),
        });
    }

    let mut written = 0;
    pack(data, dictionary, |index| {
        output[written] = dictionary.symbol(index);
        written += 1;
    });

    if let Some(pad_char) = dictionary.output_padding() {
        output[written..required].fill(pad_char as u8);
        written = required;
    }

    Ok(written)
}

/// Decodes text, ignoring any number of trailing padding characters.
///
/// Empty text (or text made only of padding) decodes to an empty vector.
pub fn decode_chunked(encoded: &str, dictionary: &Dictionary) -> Result<Vec<u8>, DecodeError> {
    let symbols = strip_padding(encoded, dictionary);

    let mut result = vec![0u8; dictionary.decoded_len(symbols.chars().count())];
    let written = unpack(symbols, encoded, dictionary, &mut result)?;
    result.truncate(written);

    Ok(result)
}

/// Decodes into a caller-supplied buffer, returning the number of bytes written.
pub fn decode_chunked_into(
    encoded: &str,
    dictionary: &Dictionary,
    output: &mut [u8],
) -> Result<usize, DecodeError> {
    let symbols = strip_padding(encoded, dictionary);

    let required = dictionary.decoded_len(symbols.chars().count());
    if output.len() < required {
        return Err(DecodeError::BufferTooSmall {
            required,
            actual: output.len(),
        });
    }

    unpack(symbols, encoded, dictionary, output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols(data: &[u8], dictionary: &Dictionary) -> Vec<u8> {
        let mut out = Vec::new();
        pack(data, dictionary, |index| out.push(index));
        out
    }

    #[test]
    fn test_pack_base32_block() {
        let base32 = Dictionary::base32();
        // 11001 00101 10111 01001 01100 00101 11101 01101
        assert_eq!(
            symbols(&[0xC9, 0x6E, 0x96, 0x17, 0xAD], &base32),
            [25, 5, 23, 9, 12, 5, 29, 13]
        );
    }

    #[test]
    fn test_pack_zero_fills_last_group() {
        let base64url = Dictionary::base64url();
        // 00100000 -> 001000 00(0000)
        assert_eq!(symbols(&[0x20], &base64url), [8, 0]);
        // 11111111 -> 11111 111(00)
        assert_eq!(symbols(&[0xFF], &Dictionary::base32()), [31, 28]);
    }

    #[test]
    fn test_pack_symbol_counts_per_remainder() {
        let base32 = Dictionary::base32();
        for (len, expected) in [(1, 2), (2, 4), (3, 5), (4, 7), (5, 8), (6, 10)] {
            assert_eq!(symbols(&vec![0xA5; len], &base32).len(), expected, "len {}", len);
        }

        let base64url = Dictionary::base64url();
        for (len, expected) in [(1, 2), (2, 3), (3, 4), (4, 6), (16, 22)] {
            assert_eq!(symbols(&vec![0x5A; len], &base64url).len(), expected, "len {}", len);
        }
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode_chunked(&[], &Dictionary::base32()), "");
        assert_eq!(encode_chunked(&[], &Dictionary::base64url()), "");
    }

    #[test]
    fn test_encode_padding_policy() {
        assert_eq!(encode_chunked(&[0xFF, 0x1D], &Dictionary::base32()), "74OQ====");
        assert_eq!(encode_chunked(&[0x10, 0xB8], &Dictionary::base64url()), "ELg");
    }

    #[test]
    fn test_encode_into_matches_encode() {
        let base32 = Dictionary::base32();
        let data = [0x13, 0xD0, 0xA9, 0xB3];
        let mut buf = [0u8; 16];
        let written = encode_chunked_into(&data, &base32, &mut buf).unwrap();
        assert_eq!(written, 8);
        assert_eq!(&buf[..written], b"CPIKTMY=");
        assert_eq!(buf[written..], [0u8; 8]);
    }

    #[test]
    fn test_encode_into_buffer_too_small() {
        let mut buf = [0u8; 7];
        assert_eq!(
            encode_chunked_into(&[1, 2, 3, 4], &Dictionary::base32(), &mut buf),
            Err(EncodeError::BufferTooSmall {
                required: 8,
                actual: 7
            })
        );

        let mut buf = [0u8; 2];
        assert_eq!(
            encode_chunked_into(&[0x10, 0xB8], &Dictionary::base64url(), &mut buf),
            Err(EncodeError::BufferTooSmall {
                required: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn test_decode_into_exact_buffer() {
        let mut buf = [0u8; 5];
        let written = decode_chunked_into("ZFXJMF5N", &Dictionary::base32(), &mut buf).unwrap();
        assert_eq!(written, 5);
        assert_eq!(buf, [0xC9, 0x6E, 0x96, 0x17, 0xAD]);
    }

    #[test]
    fn test_decode_into_buffer_too_small() {
        let mut buf = [0u8; 3];
        assert_eq!(
            decode_chunked_into("CPIKTMY=", &Dictionary::base32(), &mut buf),
            Err(DecodeError::BufferTooSmall {
                required: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn test_decode_ignores_nonzero_trailing_bits() {
        let base64url = Dictionary::base64url();
        // "IA" is canonical for 0x20; "IB" sets a dropped bit
        assert_eq!(decode_chunked("IA", &base64url).unwrap(), [0x20]);
        assert_eq!(decode_chunked("IB", &base64url).unwrap(), [0x20]);
    }

    #[test]
    fn test_decode_lone_symbol_yields_nothing() {
        assert_eq!(decode_chunked("A", &Dictionary::base32()).unwrap(), Vec::<u8>::new());
        assert_eq!(decode_chunked("A===", &Dictionary::base64url()).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_decode_only_padding() {
        assert!(decode_chunked("========", &Dictionary::base32()).unwrap().is_empty());
    }

    #[test]
    fn test_decode_padding_in_middle_is_invalid() {
        let err = decode_chunked("JV=NJA==", &Dictionary::base32()).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::InvalidCharacter {
                char: '=',
                position: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_decode_reports_char_position() {
        let err = decode_chunked("hg712)21", &Dictionary::base64url()).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::InvalidCharacter {
                char: ')',
                position: 5,
                ..
            }
        ));
    }
}
