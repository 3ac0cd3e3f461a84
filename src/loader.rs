use std::path::Path;

use serde::de::DeserializeOwned;
use tokio::fs;
use tracing::debug;

use crate::error::ConfigError;

/// Reads the file at `path` in full and decodes its YAML contents into `T`.
///
/// The read sizes its buffer from the file's actual length, so files of any
/// size decode without truncation. The file handle is released on every exit
/// path, including read and decode failures. On failure no partially decoded
/// value escapes to the caller.
pub async fn load<T, P>(path: P) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let content = fs::read_to_string(path).await?;
    debug!("read {} bytes from {}", content.len(), path.display());
    from_str(&content)
}

/// Decodes a YAML document into `T` without touching the filesystem.
pub fn from_str<T: DeserializeOwned>(text: &str) -> Result<T, ConfigError> {
    Ok(serde_yaml::from_str(text)?)
}
