use std::{error::Error, io, path::PathBuf};
use thiserror::Error;

/// Result alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Error raised by user stores regardless of the backing medium.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Backing medium cannot be reached.
    #[error("storage unavailable: {message}")]
    Unavailable {
        /// What could not be reached.
        message: String,
        /// Underlying failure.
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
    /// Collection could not be encoded as JSON.
    #[error("failed to serialize user collection")]
    Serialize {
        /// Encoder failure.
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write user collection to `{path}`")]
    /// Encoded document could not be written.
    Write {
        /// Destination file.
        path: PathBuf,
        /// I/O failure.
        #[source]
        source: io::Error,
    },
}

impl StorageError {
    /// Construct an unavailable error from any backend failure.
    pub fn unavailable(message: String, source: impl Error + Send + Sync + 'static) -> Self {
        StorageError::Unavailable {
            message,
            source: Box::new(source),
        }
    }
}
