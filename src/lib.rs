// Error taxonomy for config loading
pub mod error;

// The loader itself - file read plus text decode
pub mod loader;

// Re-export main types for convenience
pub use error::ConfigError;
pub use loader::{from_str, load};
