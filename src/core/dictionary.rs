use num_integer::lcm;
use std::fmt;

/// Marker for bytes that do not belong to the dictionary.
const INVALID: u8 = 0xFF;

/// The 32-symbol RFC 4648 alphabet.
pub const BASE32_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// The standard 6-bit alphabet. The URL-safe rendering is derived from it with
/// [`to_url_safe`] and [`from_url_safe`] rather than kept as a second table.
pub const BASE64_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Padding character shared by both built-in dictionaries.
pub const PADDING: char = '=';

/// Maps a standard 6-bit symbol to its URL-safe rendering.
pub fn to_url_safe(c: char) -> char {
    match c {
        '+' => '-',
        '/' => '_',
        other => other,
    }
}

/// Maps a URL-safe symbol back to the standard table.
///
/// The raw `+` and `/` are not part of the URL-safe rendering and map to `None`.
pub fn from_url_safe(c: char) -> Option<char> {
    match c {
        '-' => Some('+'),
        '_' => Some('/'),
        '+' | '/' => None,
        other => Some(other),
    }
}

/// Errors raised while building a [`Dictionary`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    /// No characters were supplied
    Empty,
    /// Bit packing needs a power-of-two symbol count
    NotPowerOfTwo(usize),
    /// Only 5-bit (32) and 6-bit (64) dictionaries are supported
    UnsupportedSize(usize),
    /// A character appears twice (after case folding or URL-safe rendering)
    DuplicateCharacter(char),
    /// Symbols and padding must be printable ASCII
    NonPrintable(char),
    /// The padding character collides with a symbol
    PaddingInAlphabet(char),
    /// The padding value from a config file was not a single character
    InvalidPadding(String),
    /// A URL-safe dictionary lists `-` or `_` directly; they are only valid
    /// as the renderings of `+` and `/`
    UrlSafeSymbol(char),
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DictionaryError::Empty => write!(f, "dictionary cannot be empty"),
            DictionaryError::NotPowerOfTwo(len) => {
                write!(f, "bit packing requires a power-of-two dictionary size, got {}", len)
            }
            DictionaryError::UnsupportedSize(len) => write!(
                f,
                "unsupported dictionary size {} (only 32 and 64 symbols are supported)",
                len
            ),
            DictionaryError::DuplicateCharacter(c) => {
                write!(f, "duplicate character in dictionary: '{}'", c)
            }
            DictionaryError::NonPrintable(c) => {
                write!(f, "character {:?} is not printable ASCII", c)
            }
            DictionaryError::PaddingInAlphabet(c) => {
                write!(f, "padding character '{}' is also a dictionary symbol", c)
            }
            DictionaryError::InvalidPadding(s) => {
                write!(f, "padding must be exactly one character, got {:?}", s)
            }
            DictionaryError::UrlSafeSymbol(c) => write!(
                f,
                "URL-safe dictionaries list '+' and '/' and render them as '-' and '_', found '{}'",
                c
            ),
        }
    }
}

impl std::error::Error for DictionaryError {}

/// A bit-packing dictionary: symbols, padding and the block geometry derived
/// from the symbol count.
///
/// Each symbol carries `log2(base)` bits. A block is the smallest run of bytes
/// whose bit count is also a whole number of symbols: 5 bytes / 8 symbols for
/// base32 and 3 bytes / 4 symbols for base64.
#[derive(Debug, Clone)]
pub struct Dictionary {
    chars: Vec<char>,
    decode_table: [u8; 128],
    padding: Option<char>,
    case_insensitive: bool,
    url_safe: bool,
    pad_output: bool,
    bits_per_char: usize,
    block_bytes: usize,
    block_chars: usize,
}

impl Dictionary {
    /// Starts building a dictionary.
    pub fn builder() -> DictionaryBuilder {
        DictionaryBuilder::default()
    }

    /// The RFC 4648 base32 dictionary: case-insensitive, `=`-padded to 8 symbols.
    pub fn base32() -> Self {
        Self::from_parts(
            BASE32_CHARS.chars().collect(),
            Some(PADDING),
            true,
            false,
            true,
        )
    }

    /// The URL-safe base64 dictionary: case-sensitive, emits no padding but
    /// accepts `=` on decode.
    pub fn base64url() -> Self {
        Self::from_parts(
            BASE64_CHARS.chars().collect(),
            Some(PADDING),
            false,
            true,
            false,
        )
    }

    // Callers guarantee `chars` passed validation.
    fn from_parts(
        chars: Vec<char>,
        padding: Option<char>,
        case_insensitive: bool,
        url_safe: bool,
        pad_output: bool,
    ) -> Self {
        let mut decode_table = [INVALID; 128];
        for (index, &c) in chars.iter().enumerate() {
            decode_table[c as usize] = index as u8;
            if case_insensitive {
                decode_table[c.to_ascii_lowercase() as usize] = index as u8;
                decode_table[c.to_ascii_uppercase() as usize] = index as u8;
            }
        }

        let bits_per_char = chars.len().trailing_zeros() as usize;
        let block_bits = lcm(bits_per_char, 8);

        Dictionary {
            chars,
            decode_table,
            padding,
            case_insensitive,
            url_safe,
            pad_output,
            bits_per_char,
            block_bytes: block_bits / 8,
            block_chars: block_bits / bits_per_char,
        }
    }

    /// Number of symbols (32 or 64).
    pub fn base(&self) -> usize {
        self.chars.len()
    }

    pub fn bits_per_char(&self) -> usize {
        self.bits_per_char
    }

    /// Input bytes per full block.
    pub fn block_bytes(&self) -> usize {
        self.block_bytes
    }

    /// Output symbols per full block.
    pub fn block_chars(&self) -> usize {
        self.block_chars
    }

    pub fn padding(&self) -> Option<char> {
        self.padding
    }

    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    pub fn is_url_safe(&self) -> bool {
        self.url_safe
    }

    /// Padding appended by the general encoder, if any.
    pub fn output_padding(&self) -> Option<char> {
        if self.pad_output { self.padding } else { None }
    }

    /// Symbols that carry data for a final block of `remaining` bytes.
    ///
    /// For base32 this is 1→2, 2→4, 3→5, 4→7, 5→8; for base64 1→2, 2→3, 3→4.
    pub fn meaningful_chars(&self, remaining: usize) -> usize {
        (remaining * 8).div_ceil(self.bits_per_char)
    }

    /// Symbol count for `n` bytes without any padding.
    pub fn unpadded_len(&self, n: usize) -> usize {
        n / self.block_bytes * self.block_chars + self.meaningful_chars(n % self.block_bytes)
    }

    /// Text length produced by the general encoder for `n` bytes.
    pub fn encoded_len(&self, n: usize) -> usize {
        if self.output_padding().is_some() {
            n.div_ceil(self.block_bytes) * self.block_chars
        } else {
            self.unpadded_len(n)
        }
    }

    /// Bytes recovered from `symbols` data symbols. Trailing bits that do not
    /// complete a byte are dropped.
    pub fn decoded_len(&self, symbols: usize) -> usize {
        symbols / self.block_chars * self.block_bytes
            + (symbols % self.block_chars) * self.bits_per_char / 8
    }

    /// Encodes a digit (0 to base-1) as a character.
    ///
    /// Returns `None` if the digit is out of range.
    pub fn encode_digit(&self, digit: usize) -> Option<char> {
        self.chars.get(digit).map(|&c| self.render(c))
    }

    /// Decodes a character back to its digit value.
    ///
    /// Returns `None` if the character is not in the dictionary. Padding is
    /// never a digit.
    pub fn decode_char(&self, c: char) -> Option<u8> {
        let c = if self.url_safe { from_url_safe(c)? } else { c };
        if !c.is_ascii() {
            return None;
        }
        match self.decode_table[c as usize] {
            INVALID => None,
            digit => Some(digit),
        }
    }

    /// ASCII byte for a masked symbol index.
    pub(crate) fn symbol(&self, index: u8) -> u8 {
        self.render(self.chars[index as usize]) as u8
    }

    /// The dictionary as it appears in encoded text.
    pub fn valid_chars(&self) -> String {
        self.chars.iter().map(|&c| self.render(c)).collect()
    }

    fn render(&self, c: char) -> char {
        if self.url_safe { to_url_safe(c) } else { c }
    }
}

/// Builder for [`Dictionary`] that validates the character set.
#[derive(Debug, Clone)]
pub struct DictionaryBuilder {
    chars: Vec<char>,
    padding: Option<char>,
    case_insensitive: bool,
    url_safe: bool,
    pad_output: bool,
}

impl Default for DictionaryBuilder {
    fn default() -> Self {
        DictionaryBuilder {
            chars: Vec::new(),
            padding: None,
            case_insensitive: false,
            url_safe: false,
            pad_output: true,
        }
    }
}

impl DictionaryBuilder {
    pub fn chars(mut self, chars: Vec<char>) -> Self {
        self.chars = chars;
        self
    }

    pub fn chars_from_str(mut self, s: &str) -> Self {
        self.chars = s.chars().collect();
        self
    }

    pub fn padding(mut self, padding: char) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn case_insensitive(mut self, yes: bool) -> Self {
        self.case_insensitive = yes;
        self
    }

    /// Render `+`/`/` as `-`/`_`.
    pub fn url_safe(mut self, yes: bool) -> Self {
        self.url_safe = yes;
        self
    }

    /// Whether the general encoder appends padding. Decoding always accepts it.
    pub fn pad_output(mut self, yes: bool) -> Self {
        self.pad_output = yes;
        self
    }

    pub fn build(self) -> Result<Dictionary, DictionaryError> {
        let len = self.chars.len();
        if len == 0 {
            return Err(DictionaryError::Empty);
        }
        if !len.is_power_of_two() {
            return Err(DictionaryError::NotPowerOfTwo(len));
        }
        if len != 32 && len != 64 {
            return Err(DictionaryError::UnsupportedSize(len));
        }

        let mut seen = [false; 128];
        for &c in &self.chars {
            if !c.is_ascii_graphic() {
                return Err(DictionaryError::NonPrintable(c));
            }
            if self.url_safe && from_url_safe(to_url_safe(c)) != Some(c) {
                return Err(DictionaryError::UrlSafeSymbol(c));
            }
            let rendered = if self.url_safe { to_url_safe(c) } else { c };
            let key = if self.case_insensitive {
                rendered.to_ascii_uppercase()
            } else {
                rendered
            };
            if std::mem::replace(&mut seen[key as usize], true) {
                return Err(DictionaryError::DuplicateCharacter(c));
            }
        }

        if let Some(pad) = self.padding {
            if !pad.is_ascii_graphic() {
                return Err(DictionaryError::NonPrintable(pad));
            }
            let key = if self.case_insensitive {
                pad.to_ascii_uppercase()
            } else {
                pad
            };
            if seen[key as usize] || self.chars.contains(&pad) {
                return Err(DictionaryError::PaddingInAlphabet(pad));
            }
        }

        Ok(Dictionary::from_parts(
            self.chars,
            self.padding,
            self.case_insensitive,
            self.url_safe,
            self.pad_output,
        ))
    }
}
