pub mod algorithms;

pub use algorithms::{chunked, fixed};
