pub mod validation_error;

pub use validation_error::{ErrorCategory, ErrorContext, ValidationError, ValidationErrorCode};

pub type Result<T> = std::result::Result<T, ValidationError>;

impl From<std::io::Error> for ValidationError {
    fn from(error: std::io::Error) -> Self {
        ValidationError::new(ValidationErrorCode::DocumentParseFailed, Some(error.to_string()))
    }
}

impl From<serde_json::Error> for ValidationError {
    fn from(error: serde_json::Error) -> Self {
        ValidationError::new(ValidationErrorCode::DocumentParseFailed, Some(error.to_string()))
    }
}

