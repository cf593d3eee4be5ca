pub mod chunked;
pub mod errors;
pub mod fixed;

// Re-export error types for public API
pub use errors::{DecodeError, DictionaryNotFoundError, EncodeError, find_closest_dictionary};
