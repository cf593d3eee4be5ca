use std::fmt;

/// Errors that can occur during decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The input contains a character that is neither a dictionary symbol nor
    /// trailing padding
    InvalidCharacter {
        char: char,
        position: usize,
        input: String,
        valid_chars: String,
    },
    /// Fixed-width text of the wrong length
    LengthMismatch { actual: usize, expected: usize },
    /// The caller-supplied output buffer cannot hold the decoded bytes
    BufferTooSmall { required: usize, actual: usize },
}

impl DecodeError {
    /// Create an InvalidCharacter error with context
    pub fn invalid_character(c: char, position: usize, input: &str, valid_chars: &str) -> Self {
        // Truncate long inputs on a char boundary
        let display_input = match input.char_indices().nth(60) {
            Some((cut, _)) => format!("{}...", &input[..cut]),
            None => input.to_string(),
        };

        DecodeError::InvalidCharacter {
            char: c,
            position,
            input: display_input,
            valid_chars: valid_chars.to_string(),
        }
    }

    /// A one-line suggestion for the user, if there is one.
    pub fn hint(&self) -> String {
        match self {
            DecodeError::InvalidCharacter { valid_chars, .. } => {
                format!("valid characters: {}", valid_chars)
            }
            DecodeError::LengthMismatch { expected, .. } => {
                format!("fixed-width text is exactly {} characters with no padding", expected)
            }
            DecodeError::BufferTooSmall { required, .. } => {
                format!("allocate at least {} bytes for the output", required)
            }
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::InvalidCharacter { char: c, position, .. } => {
                write!(f, "invalid character {:?} at position {}", c, position)
            }
            DecodeError::LengthMismatch { actual, expected } => write!(
                f,
                "invalid length for fixed-width decode: input is {} characters, expected {}",
                actual, expected
            ),
            DecodeError::BufferTooSmall { required, actual } => write!(
                f,
                "output buffer too small: {} bytes required, {} available",
                required, actual
            ),
        }
    }
}

impl std::error::Error for DecodeError {}

/// Errors that can occur during encoding into a caller-supplied buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// The output buffer cannot hold the encoded text
    BufferTooSmall { required: usize, actual: usize },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::BufferTooSmall { required, actual } => write!(
                f,
                "output buffer too small: {} characters required, {} available",
                required, actual
            ),
        }
    }
}

impl std::error::Error for EncodeError {}

/// Error when a dictionary is not found
#[derive(Debug)]
pub struct DictionaryNotFoundError {
    pub name: String,
    pub suggestion: Option<String>,
}

impl DictionaryNotFoundError {
    pub fn new(name: impl Into<String>, suggestion: Option<String>) -> Self {
        Self {
            name: name.into(),
            suggestion,
        }
    }
}

impl fmt::Display for DictionaryNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dictionary '{}' not found", self.name)?;
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for DictionaryNotFoundError {}

/// Edit distance between two names, counted in chars.
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let target: Vec<char> = s2.chars().collect();
    let mut prev_row: Vec<usize> = (0..=target.len()).collect();
    let mut curr_row = vec![0; target.len() + 1];

    for (i, c1) in s1.chars().enumerate() {
        curr_row[0] = i + 1;
        for (j, &c2) in target.iter().enumerate() {
            let substitution = prev_row[j] + usize::from(c1 != c2);
            curr_row[j + 1] = substitution.min(prev_row[j + 1] + 1).min(curr_row[j] + 1);
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[target.len()]
}

/// Find the closest matching dictionary name
pub fn find_closest_dictionary(name: &str, available: &[String]) -> Option<String> {
    // Tolerate 1-2 typos in short names, up to 3 in longer ones
    let threshold = if name.len() < 5 { 2 } else { 3 };

    available
        .iter()
        .map(|candidate| (levenshtein_distance(name, candidate), candidate))
        .filter(|(distance, _)| *distance <= threshold)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, candidate)| candidate.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("base32", "base32"), 0);
        assert_eq!(levenshtein_distance("base64url", "base32"), 5);
        assert_eq!(levenshtein_distance("bas32", "base32"), 1);
        assert_eq!(levenshtein_distance("", "base32"), 6);
        assert_eq!(levenshtein_distance("base32", ""), 6);
    }

    #[test]
    fn test_find_closest_dictionary() {
        let dicts = vec!["base32".to_string(), "base64url".to_string()];

        assert_eq!(
            find_closest_dictionary("bas32", &dicts),
            Some("base32".to_string())
        );
        assert_eq!(
            find_closest_dictionary("base64ur", &dicts),
            Some("base64url".to_string())
        );
        assert_eq!(find_closest_dictionary("hex", &dicts), None);
        assert_eq!(find_closest_dictionary("base32", &[]), None);
    }

    #[test]
    fn test_invalid_character_display() {
        let err = DecodeError::invalid_character(')', 5, "hg712)21", "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567");
        assert_eq!(err.to_string(), "invalid character ')' at position 5");
        assert!(err.hint().contains("ABCDEFGHIJKLMNOPQRSTUVWXYZ234567"));
    }

    #[test]
    fn test_invalid_character_truncates_long_input() {
        let long = "é".repeat(100);
        match DecodeError::invalid_character('é', 0, &long, "") {
            DecodeError::InvalidCharacter { input, .. } => {
                assert_eq!(input.chars().count(), 63);
                assert!(input.ends_with("..."));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_length_mismatch_display() {
        let err = DecodeError::LengthMismatch {
            actual: 21,
            expected: 22,
        };
        let display = err.to_string();
        assert!(display.contains("21 characters"));
        assert!(display.contains("expected 22"));
    }

    #[test]
    fn test_buffer_too_small_display() {
        let err = EncodeError::BufferTooSmall {
            required: 8,
            actual: 4,
        };
        assert_eq!(
            err.to_string(),
            "output buffer too small: 8 characters required, 4 available"
        );
    }

    #[test]
    fn test_dictionary_not_found_error() {
        let err = DictionaryNotFoundError::new("bas32", Some("base32".to_string()));
        let display = err.to_string();
        assert!(display.contains("dictionary 'bas32' not found"));
        assert!(display.contains("did you mean 'base32'?"));
    }
}
