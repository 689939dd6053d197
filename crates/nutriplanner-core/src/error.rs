//! Error types for the meal planner library.

use thiserror::Error;

/// Comprehensive error type for all meal planner operations.
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Missing credential or generation client initialization failure
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// Invalid form input that blocks a submission
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Failure reported by, or while talking to, the generation service
    #[error("Generation service error: {message}")]
    Generation {
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Coarse classification of a [`PlannerError`], used by interfaces to decide
/// how an error is surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Fatal at startup; no recovery is attempted.
    Configuration,
    /// Recoverable; the user corrects the form and resubmits.
    Validation,
    /// Recoverable; the user retries later.
    Generation,
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> PlannerError {
        PlannerError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

/// Builder for creating generation service errors with optional transport
/// source.
pub struct GenerationErrorBuilder {
    message: String,
}

impl GenerationErrorBuilder {
    /// Create a new generation error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given transport source.
    pub fn with_source(self, source: reqwest::Error) -> PlannerError {
        PlannerError::Generation {
            message: format!("{}: {}", self.message, source),
            source: Some(source),
        }
    }

    /// Build the error without a source.
    pub fn build(self) -> PlannerError {
        PlannerError::Generation {
            message: self.message,
            source: None,
        }
    }
}

impl PlannerError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a builder for generation service errors.
    pub fn generation(message: impl Into<String>) -> GenerationErrorBuilder {
        GenerationErrorBuilder::new(message)
    }

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Classifies the error for the presentation layer.
    ///
    /// Serialization failures only happen while decoding a service reply, so
    /// they are reported as generation errors.
    pub fn kind(&self) -> ErrorKind {
        match self {
            PlannerError::Configuration { .. } => ErrorKind::Configuration,
            PlannerError::InvalidInput { .. } => ErrorKind::Validation,
            PlannerError::Generation { .. } | PlannerError::Serialization { .. } => {
                ErrorKind::Generation
            }
        }
    }
}

/// Result type alias for meal planner operations
pub type Result<T> = std::result::Result<T, PlannerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_builder() {
        let err = PlannerError::invalid_input("meals").with_reason("select at least one meal");
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'meals': select at least one meal"
        );
    }

    #[test]
    fn test_generation_builder_without_source() {
        let err = PlannerError::generation("quota exceeded").build();
        assert_eq!(err.kind(), ErrorKind::Generation);
        assert!(err.to_string().contains("quota exceeded"));
    }

    #[test]
    fn test_serialization_is_generation_kind() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = PlannerError::from(source);
        assert_eq!(err.kind(), ErrorKind::Generation);
    }

    #[test]
    fn test_configuration_kind() {
        let err = PlannerError::configuration("GOOGLE_API_KEY is not set");
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert!(err.to_string().starts_with("Configuration error"));
    }
}
