use thiserror::Error;

pub type ConstantsResult<T> = Result<T, ConstantsError>;

/// Errors raised by constant lookups and conversions.
#[derive(Debug, Error)]
pub enum ConstantsError {
    #[error("{0} is not a valid key; use find() to list the available constants")]
    NotFound(String),

    #[error("Constant '{name}' is expressed in {actual}, not {expected}")]
    UnitMismatch {
        name: String,
        expected: String,
        actual: String,
    },

    #[error("Failed to serialize constants: {0}")]
    Serialization(#[from] serde_json::Error),
}
