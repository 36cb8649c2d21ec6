// src/storage/error.rs
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize servers: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl From<StoreError> for std::io::Error {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Io { source, .. } => source,
            other => std::io::Error::new(std::io::ErrorKind::Other, other.to_string()),
        }
    }
}
