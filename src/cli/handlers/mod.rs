pub mod config;
pub mod decode;
pub mod encode;
pub mod guid;
pub mod int64;
