use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::RunNumber;

/// Error type for dataset resolution, catalog, and event-list IO failures.
#[derive(Debug, Error)]
pub enum PickError {
    /// The resolver has no dataset for this run and stream.
    #[error("no dataset known for run {run} in primary dataset '{primary_dataset}'")]
    DatasetNotFound {
        /// Run that failed to resolve.
        run: RunNumber,
        /// Canonical stream name passed to the resolver.
        primary_dataset: String,
    },
    /// Catalog content failed to parse or validate.
    #[error("invalid dataset catalog: {0}")]
    Catalog(String),
    /// An event list could not be encoded or decoded.
    #[error("event list JSON error at {}: {source}", path.display())]
    Json {
        /// Event list file involved.
        path: PathBuf,
        /// Underlying serde_json error.
        source: serde_json::Error,
    },
    /// Filesystem failure.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// Invalid run configuration.
    #[error("configuration error: {0}")]
    Configuration(String),
}
