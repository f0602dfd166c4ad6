//! Error types for star_coil.

use thiserror::Error;

/// Result type alias for star_coil operations.
pub type Result<T> = std::result::Result<T, StarCoilError>;

/// Errors that can occur while validating input for star pattern enumeration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StarCoilError {
    /// Point count (or other numeric input) is non-positive or not a number.
    #[error("invalid argument `{input}`: {reason}")]
    InvalidArgument { input: String, reason: String },
}

impl StarCoilError {
    /// Create an invalid argument error for the `input` given.
    pub fn invalid_argument(input: impl Into<String>, reason: impl Into<String>) -> Self {
        StarCoilError::InvalidArgument {
            input: input.into(),
            reason: reason.into(),
        }
    }
}
