//! Error types for configuration loading.

use std::path::PathBuf;

use saju_time::TimeError;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse JSON {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The merged layers do not describe a valid [`crate::EngineConfig`].
    #[error("invalid configuration: {0}")]
    Invalid(#[source] serde_json::Error),
    #[error("invalid configuration: {0}")]
    Time(#[from] TimeError),
    #[error("reference year out of range: {0} (expected 1-9999)")]
    ReferenceYear(i32),
    #[error("tracing has already been initialised")]
    TracingAlreadyInitialised,
    #[error("invalid log filter {filter:?}: {message}")]
    LogFilter { filter: String, message: String },
}
