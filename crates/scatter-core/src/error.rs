// File: crates/scatter-core/src/error.rs
// Summary: Typed errors for loading and field transformation.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to obtain the record array. None of these are retried.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Transport failure or a non-success HTTP status.
    #[error("failed to fetch {url}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Payload is not JSON, or not an array of records with the expected fields.
    #[error("payload is not a valid record array")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    #[error("record {index}: malformed time {value:?}, expected MM:SS")]
    MalformedTime { index: usize, value: String },
}
