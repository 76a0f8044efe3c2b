//! Error types for deprecation markers.

use crate::docs::TemplateError;

/// Result type for deprecation operations
pub type DeprecationResult<T> = Result<T, DeprecationError>;

/// Configuration errors raised while building a deprecation wrapper.
///
/// These surface at decoration time, never when the wrapped item is called.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeprecationError {
    #[error("Invalid version '{input}': {reason}")]
    InvalidVersion { input: String, reason: String },

    #[error("Cannot deprecate '{name}': unsupported target kind '{kind}'")]
    UnsupportedTarget { name: String, kind: String },

    #[error("Invalid deprecation message: {0}")]
    InvalidMessage(#[from] TemplateError),
}
