//! Storage error types.

use thiserror::Error;

/// Errors raised by storage backends and the typed read/write helpers.
///
/// The lenient [`crate::StoreView::read`] and [`crate::StoreView::write`]
/// recover from all of these; the `try_*` variants surface them.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying filesystem operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Value could not be encoded as JSON.
    #[error("Failed to serialize value for key {key}: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Stored text is not valid JSON for the requested type.
    #[error("Failed to deserialize value for key {key}: {source}")]
    Deserialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Backend refused the write because it would exceed its capacity.
    #[error("Quota exceeded writing key {key} ({size} bytes, limit {limit})")]
    QuotaExceeded {
        key: String,
        size: usize,
        limit: usize,
    },

    /// Key cannot be mapped onto the backend.
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),
}
