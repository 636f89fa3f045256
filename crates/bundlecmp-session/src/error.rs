use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    /// A container failed to load. This blocks comparison entirely.
    #[error("container load failed: {0}")]
    Load(#[from] bundlecmp_graph::GraphError),

    /// A diff was requested for a name absent from the match set.
    #[error("no matched renderer named {0:?}")]
    NameNotMatched(String),
}

pub type SessionResult<T> = Result<T, SessionError>;
