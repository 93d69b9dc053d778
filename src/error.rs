//! Error types
//!
//! The scoring engine itself has no failure mode. These cover the edges
//! around it: the external suggestion provider and the garden store.

use thiserror::Error;

/// Why an external suggestion provider produced nothing usable
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProviderError {
    #[error("suggestion provider not configured")]
    Unavailable,
    #[error("suggestion provider timed out after {0} ms")]
    Timeout(u64),
    #[error("suggestion provider returned status {0}")]
    Status(u16),
    #[error("suggestion provider request failed: {0}")]
    Transport(String),
    #[error("suggestion provider returned malformed output: {0}")]
    Malformed(String),
}

/// Garden store loading failures
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("{path}: expected a JSON array of records")]
    Shape { path: String },
}
