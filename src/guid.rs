//! 16-byte structured identifier.
//!
//! Bytes are kept in the mixed-endian in-memory layout produced by the
//! time-ordered identifier generator: the first three fields are stored
//! little-endian, the trailing eight bytes as-is. That layout is what the
//! short text form encodes, so `53dd0ae5-d410-4056-8010-6c3ca6f2ec13`
//! becomes `5QrdUxDUVkCAEGw8pvLsEw`.

use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Guid([u8; 16]);

impl Guid {
    /// The all-zero identifier.
    pub const NIL: Guid = Guid([0; 16]);

    /// Wraps bytes in the mixed-endian layout.
    pub const fn from_bytes_le(bytes: [u8; 16]) -> Self {
        Guid(bytes)
    }

    /// Bytes in the mixed-endian layout.
    pub const fn to_bytes_le(&self) -> [u8; 16] {
        self.0
    }

    /// Builds from bytes in canonical (text) order.
    pub fn from_bytes_be(b: [u8; 16]) -> Self {
        Self::from_fields(
            u32::from_be_bytes([b[0], b[1], b[2], b[3]]),
            u16::from_be_bytes([b[4], b[5]]),
            u16::from_be_bytes([b[6], b[7]]),
            [b[8], b[9], b[10], b[11], b[12], b[13], b[14], b[15]],
        )
    }

    /// Bytes in canonical (text) order.
    pub fn to_bytes_be(&self) -> [u8; 16] {
        let (d1, d2, d3, d4) = self.as_fields();
        let mut out = [0u8; 16];
        out[..4].copy_from_slice(&d1.to_be_bytes());
        out[4..6].copy_from_slice(&d2.to_be_bytes());
        out[6..8].copy_from_slice(&d3.to_be_bytes());
        out[8..].copy_from_slice(&d4);
        out
    }

    pub fn from_fields(d1: u32, d2: u16, d3: u16, d4: [u8; 8]) -> Self {
        let mut bytes = [0u8; 16];
        bytes[..4].copy_from_slice(&d1.to_le_bytes());
        bytes[4..6].copy_from_slice(&d2.to_le_bytes());
        bytes[6..8].copy_from_slice(&d3.to_le_bytes());
        bytes[8..].copy_from_slice(&d4);
        Guid(bytes)
    }

    pub fn as_fields(&self) -> (u32, u16, u16, [u8; 8]) {
        let b = &self.0;
        (
            u32::from_le_bytes([b[0], b[1], b[2], b[3]]),
            u16::from_le_bytes([b[4], b[5]]),
            u16::from_le_bytes([b[6], b[7]]),
            [b[8], b[9], b[10], b[11], b[12], b[13], b[14], b[15]],
        )
    }

    /// Version nibble (the high nibble of the third field).
    pub fn version(&self) -> u8 {
        self.0[7] >> 4
    }

    pub fn is_nil(&self) -> bool {
        self.0 == [0; 16]
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (d1, d2, d3, d4) = self.as_fields();
        write!(
            f,
            "{:08x}-{:04x}-{:04x}-{}-{}",
            d1,
            d2,
            d3,
            hex::encode(&d4[..2]),
            hex::encode(&d4[2..])
        )
    }
}

impl fmt::Debug for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Guid({})", self)
    }
}

impl From<[u8; 16]> for Guid {
    fn from(bytes: [u8; 16]) -> Self {
        Guid::from_bytes_le(bytes)
    }
}

impl From<Guid> for [u8; 16] {
    fn from(guid: Guid) -> Self {
        guid.to_bytes_le()
    }
}

/// Errors from parsing the canonical `8-4-4-4-12` text form.
#[derive(Debug, Clone, PartialEq)]
pub enum GuidParseError {
    /// Not 36 characters (38 with braces)
    InvalidLength(usize),
    /// Hyphens missing or misplaced
    InvalidGroups,
    /// Non-hex digit
    InvalidHex(hex::FromHexError),
}

impl fmt::Display for GuidParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuidParseError::InvalidLength(len) => write!(
                f,
                "invalid GUID length {} (expected 36 characters, e.g. 53dd0ae5-d410-4056-8010-6c3ca6f2ec13)",
                len
            ),
            GuidParseError::InvalidGroups => {
                write!(f, "invalid GUID: expected groups of 8-4-4-4-12 hex digits")
            }
            GuidParseError::InvalidHex(e) => write!(f, "invalid GUID: {}", e),
        }
    }
}

impl std::error::Error for GuidParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GuidParseError::InvalidHex(e) => Some(e),
            _ => None,
        }
    }
}

impl FromStr for Guid {
    type Err = GuidParseError;

    /// Parses `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`, optionally wrapped in braces.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s
            .strip_prefix('{')
            .and_then(|inner| inner.strip_suffix('}'))
            .unwrap_or(s);

        if s.len() != 36 {
            return Err(GuidParseError::InvalidLength(s.chars().count()));
        }

        let raw = s.as_bytes();
        if [8, 13, 18, 23].iter().any(|&i| raw[i] != b'-') {
            return Err(GuidParseError::InvalidGroups);
        }

        let digits: Vec<u8> = raw.iter().copied().filter(|&b| b != b'-').collect();
        if digits.len() != 32 {
            return Err(GuidParseError::InvalidGroups);
        }

        let mut bytes = [0u8; 16];
        hex::decode_to_slice(&digits, &mut bytes).map_err(GuidParseError::InvalidHex)?;

        Ok(Guid::from_bytes_be(bytes))
    }
}
