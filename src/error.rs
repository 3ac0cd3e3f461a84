use thiserror::Error;

/// Failure modes of a config load.
///
/// Open and read failures keep the underlying `std::io::Error`, so callers
/// can still distinguish a missing file from a permission problem via
/// `std::io::ErrorKind`. Decode failures are a separate kind. Every failure
/// is surfaced to the caller; nothing is retried or logged away.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
}
