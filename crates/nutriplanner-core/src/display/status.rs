//! Status messages for submission feedback.

use std::fmt;

use crate::error::{ErrorKind, PlannerError};

/// Severity of an [`OperationStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Success,
    Warning,
    Failure,
}

/// A one-line status message.
///
/// Validation problems are warnings (the user fixes the form and resubmits);
/// service and configuration problems are failures.
pub struct OperationStatus {
    pub message: String,
    pub level: StatusLevel,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: StatusLevel::Success,
        }
    }

    /// Create a new warning status.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: StatusLevel::Warning,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: StatusLevel::Failure,
        }
    }

    /// Status for a failed submission, graded by the error's kind.
    pub fn from_error(error: &PlannerError) -> Self {
        match error.kind() {
            ErrorKind::Validation => Self::warning(error.to_string()),
            ErrorKind::Configuration | ErrorKind::Generation => {
                Self::failure(error.to_string())
            }
        }
    }

    pub fn is_success(&self) -> bool {
        self.level == StatusLevel::Success
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.level {
            StatusLevel::Success => "Success:",
            StatusLevel::Warning => "Warning:",
            StatusLevel::Failure => "Error:",
        };
        writeln!(f, "{prefix} {}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        let success = OperationStatus::success("Cardápio gerado");
        assert!(format!("{success}").starts_with("Success: Cardápio gerado"));
        assert!(success.is_success());

        let warning = OperationStatus::warning("Campo inválido");
        assert!(format!("{warning}").starts_with("Warning:"));

        let failure = OperationStatus::failure("Serviço indisponível");
        assert!(format!("{failure}").starts_with("Error:"));
        assert!(!failure.is_success());
    }

    #[test]
    fn test_from_error_grades_by_kind() {
        let invalid = PlannerError::invalid_input("meals").with_reason("empty");
        assert_eq!(OperationStatus::from_error(&invalid).level, StatusLevel::Warning);

        let generation = PlannerError::generation("timeout").build();
        assert_eq!(
            OperationStatus::from_error(&generation).level,
            StatusLevel::Failure
        );

        let config = PlannerError::configuration("no key");
        assert_eq!(OperationStatus::from_error(&config).level, StatusLevel::Failure);
    }
}
