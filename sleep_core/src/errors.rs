//! # Error Types
//!
//! Structured error types for sleep_core. Every variant carries enough context
//! for a front-end (or an LLM driving the API) to explain what went wrong
//! without parsing strings.
//!
//! ## Example
//!
//! ```rust
//! use sleep_core::errors::{CalcError, CalcResult};
//!
//! fn validate_income(annual_income: f64) -> CalcResult<()> {
//!     if annual_income < 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "annual_income",
//!             annual_income.to_string(),
//!             "Income cannot be negative",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for sleep_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation, report and export operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (negative, NaN, out of range)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// The return projection cannot be computed (division by a non-positive price)
    #[error("Undefined projection: {field} = {value} - {reason}")]
    UndefinedProjection {
        field: String,
        value: String,
        reason: String,
    },

    /// PDF report compilation or rendering failed
    #[error("Report failed: {stage} - {reason}")]
    ReportFailed { stage: String, reason: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UndefinedProjection error
    pub fn undefined_projection(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::UndefinedProjection {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a ReportFailed error
    pub fn report_failed(stage: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::ReportFailed {
            stage: stage.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// True for errors caused by what the user typed, as opposed to I/O or rendering.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            CalcError::InvalidInput { .. } | CalcError::UndefinedProjection { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::UndefinedProjection { .. } => "UNDEFINED_PROJECTION",
            CalcError::ReportFailed { .. } => "REPORT_FAILED",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(e: serde_json::Error) -> Self {
        CalcError::serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("mattress_price", "-5", "Price cannot be negative");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            CalcError::undefined_projection("mattress_price", "0", "zero").error_code(),
            "UNDEFINED_PROJECTION"
        );
        assert_eq!(CalcError::report_failed("compile", "bad").error_code(), "REPORT_FAILED");
    }

    #[test]
    fn test_input_error_classification() {
        assert!(CalcError::invalid_input("annual_income", "-1", "neg").is_input_error());
        assert!(!CalcError::file_error("write", "a.pdf", "denied").is_input_error());
    }

    #[test]
    fn test_display_message() {
        let error = CalcError::file_error("rename", "report.pdf", "permission denied");
        assert_eq!(
            error.to_string(),
            "File error: rename on 'report.pdf' - permission denied"
        );
    }
}
