//! Unified error hierarchy for RunTools
//!
//! The numeric core never fails; every error originates at the calculator
//! boundary (invalid input) or in the ambient layers around it (config,
//! export, IO).

use crate::export::ExportError;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Top-level error type for all RunTools operations
#[derive(Debug, Error)]
pub enum RunToolsError {
    /// One of the calculator's input groups failed validation
    #[error("Invalid input: {field}")]
    InvalidInput { field: InputField },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Export errors
    #[error("Export error: {0}")]
    Export(#[from] ExportError),
}

/// The group of form fields a validation failure belongs to.
///
/// Malformed syntax and out-of-range values are not distinguished; the
/// whole group is reported as invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    /// The 10K reference time of the zone calculator
    Time10k,
    /// Distance + time of the pace calculator
    PaceInputs,
    /// Distance + pace of the time calculator
    TimeInputs,
    /// Time + pace of the distance calculator
    DistanceInputs,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InputField::Time10k => "10K time",
            InputField::PaceInputs => "distance and time",
            InputField::TimeInputs => "distance and pace",
            InputField::DistanceInputs => "time and pace",
        };
        write!(f, "{}", name)
    }
}

impl InputField {
    /// Inline hint shown next to the offending inputs
    pub fn hint(&self) -> &'static str {
        match self {
            InputField::Time10k => "Please enter a valid 10K time (mm:ss or hh:mm:ss)",
            InputField::PaceInputs => {
                "Please enter a positive distance and a valid time (mm:ss or hh:mm:ss)"
            }
            InputField::TimeInputs => "Please enter a positive distance and a valid pace (mm:ss)",
            InputField::DistanceInputs => {
                "Please enter a valid time (mm:ss or hh:mm:ss) and pace (mm:ss)"
            }
        }
    }
}

/// Result type alias for RunTools operations
pub type Result<T> = std::result::Result<T, RunToolsError>;

impl RunToolsError {
    pub fn invalid(field: InputField) -> Self {
        RunToolsError::InvalidInput { field }
    }

    /// Whether this error came from user input rather than the environment
    pub fn is_input_error(&self) -> bool {
        matches!(self, RunToolsError::InvalidInput { .. })
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            RunToolsError::InvalidInput { .. } => ErrorSeverity::Warning,
            RunToolsError::Configuration(_) => ErrorSeverity::Warning,
            RunToolsError::Io(_) => ErrorSeverity::Error,
            RunToolsError::Export(_) => ErrorSeverity::Error,
        }
    }

    /// Get user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            RunToolsError::InvalidInput { field } => field.hint().to_string(),
            RunToolsError::Configuration(reason) => {
                format!("Configuration problem, falling back to defaults: {}", reason)
            }
            _ => self.to_string(),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Error that prevents operation but system can continue
    Error,
    /// Warning that doesn't prevent operation
    Warning,
}

impl ErrorSeverity {
    /// Convert to tracing level
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            ErrorSeverity::Error => tracing::Level::ERROR,
            ErrorSeverity::Warning => tracing::Level::WARN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_severity() {
        let err = RunToolsError::invalid(InputField::Time10k);
        assert_eq!(err.severity(), ErrorSeverity::Warning);
        assert_eq!(err.severity().to_tracing_level(), tracing::Level::WARN);

        let err = RunToolsError::Io(std::io::Error::new(std::io::ErrorKind::Other, "disk"));
        assert_eq!(err.severity(), ErrorSeverity::Error);
    }

    #[test]
    fn test_input_error_classification() {
        assert!(RunToolsError::invalid(InputField::PaceInputs).is_input_error());
        assert!(!RunToolsError::Configuration("bad".to_string()).is_input_error());
    }

    #[test]
    fn test_user_messages() {
        let err = RunToolsError::invalid(InputField::Time10k);
        assert!(err.user_message().contains("10K time"));

        let err = RunToolsError::invalid(InputField::TimeInputs);
        assert!(err.user_message().contains("pace (mm:ss)"));
    }

    #[test]
    fn test_display_names_field_group() {
        let err = RunToolsError::invalid(InputField::DistanceInputs);
        assert_eq!(err.to_string(), "Invalid input: time and pace");
    }
}
