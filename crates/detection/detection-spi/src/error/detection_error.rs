//! Detection error types.

use thiserror::Error;

/// Detection errors.
#[derive(Debug, Error)]
pub enum DetectionError {
    #[error("Invalid window: {window} - must be >= 1")]
    InvalidWindow { window: usize },
}

/// Result type for detection operations.
pub type Result<T> = std::result::Result<T, DetectionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_window_display() {
        let error = DetectionError::InvalidWindow { window: 0 };
        assert_eq!(error.to_string(), "Invalid window: 0 - must be >= 1");
    }

    #[test]
    fn test_error_is_debug() {
        let error = DetectionError::InvalidWindow { window: 0 };
        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("InvalidWindow"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error: Box<dyn std::error::Error> =
            Box::new(DetectionError::InvalidWindow { window: 0 });
        assert!(!error.to_string().is_empty());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DetectionError>();
    }
}
