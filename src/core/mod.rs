// Public modules
pub mod component;
pub mod engine;
pub mod error;
pub mod generator;
pub mod lockfile;
pub mod patch;
pub mod validate;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
