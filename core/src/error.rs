use thiserror::Error;

/// Errors raised by graph mutation and query operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    #[error("'{key}' not found in graph")]
    NotFound { key: String },

    #[error("unrecognized filter attribute '{key}' (expected 'year' or 'rating')")]
    InvalidKey { key: String },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl GraphError {
    pub fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound { key: key.into() }
    }

    pub fn invalid_key(key: impl Into<String>) -> Self {
        Self::InvalidKey { key: key.into() }
    }

    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument(reason.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;
