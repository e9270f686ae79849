use thiserror::Error;

pub type PipelineResult<T> = std::result::Result<T, PipelineError>;

/// Error taxonomy for pipeline operations.
///
/// Callers branch on kind: a missing external tool carries its own
/// remediation, not-found conditions abort without side effects, and
/// external-call failures surface the underlying message verbatim. A
/// declined confirmation is never an error; flows model it as an outcome.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("{tool} is not available: {remediation}")]
    DependencyMissing { tool: &'static str, remediation: &'static str },

    #[error("{0}")]
    NotFound(String),

    #[error("external call failed: {0}")]
    External(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
