//! Error taxonomy shared by the algorithms, the manager and the HTTP surface.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LabError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LabError {
    /// Bad or missing input, unsupported shape/type, out-of-range size.
    #[error("{0}")]
    InvalidArgument(String),

    #[error("Algorithm '{0}' not found")]
    NotFound(String),

    /// Input violates an algorithm precondition (e.g. unsorted data for binary search).
    #[error("{0}")]
    PreconditionFailed(String),

    #[error("Input is too large: {size} elements (maximum {max})")]
    TooLarge { size: usize, max: usize },

    #[error("Error executing algorithm '{algorithm}': {source}")]
    ExecutionFailed {
        algorithm: String,
        #[source]
        source: Box<LabError>,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl LabError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Wrap an execution failure with the algorithm identifier.
    pub fn execution(algorithm: impl Into<String>, source: LabError) -> Self {
        Self::ExecutionFailed {
            algorithm: algorithm.into(),
            source: Box::new(source),
        }
    }

    /// Innermost error, looking through `ExecutionFailed` wrappers.
    pub fn root(&self) -> &LabError {
        match self {
            Self::ExecutionFailed { source, .. } => source.root(),
            other => other,
        }
    }

    /// Whether the failure was caused by the caller's input.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self.root(),
            Self::InvalidArgument(_)
                | Self::NotFound(_)
                | Self::PreconditionFailed(_)
                | Self::TooLarge { .. }
        )
    }

    pub fn status_code(&self) -> http::StatusCode {
        if self.is_client_error() {
            http::StatusCode::BAD_REQUEST
        } else {
            http::StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
