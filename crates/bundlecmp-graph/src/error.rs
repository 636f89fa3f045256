//! Error types for the graph crate.
//!
//! Only loading can fail. Dangling references, missing owners, and other
//! resolution misses are expressed as `Option`/sentinel values, never as
//! errors.

/// Errors that can occur while loading a container.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// The dump file could not be read.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The dump file is not a valid container graph.
    #[error("malformed container dump: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Convenience alias for graph results.
pub type GraphResult<T> = Result<T, GraphError>;
