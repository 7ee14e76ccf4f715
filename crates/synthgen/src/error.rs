//! Generator error types.

use thiserror::Error;

/// Generation errors.
#[derive(Debug, Error)]
pub enum SynthError {
    #[error("Invalid parameters: {reason}")]
    InvalidParameters { reason: String },
}

impl SynthError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParameters {
            reason: reason.into(),
        }
    }
}

/// Result type for generation operations.
pub type Result<T> = std::result::Result<T, SynthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameters_display() {
        let error = SynthError::invalid("n must be > 0");
        assert_eq!(error.to_string(), "Invalid parameters: n must be > 0");
    }
}
