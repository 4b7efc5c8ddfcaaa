// ABOUTME: Validation errors raised before a trip estimation is computed
// ABOUTME: MissingField and InvalidValue variants with conversion into AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Estimation Error Types
//!
//! A trip record is either accepted whole or rejected with the first offending
//! field. Unrecognized profile categories are not errors: they resolve through the
//! coefficient fallback chain.

use super::{AppError, ErrorCode};
use thiserror::Error;

/// Errors raised while decoding or validating estimation inputs
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EstimationError {
    /// A required value is absent or is not a number
    #[error("missing required field '{field}'")]
    MissingField {
        /// Form or record field name (e.g. `course_3`)
        field: String,
    },
    /// A value is present but outside its allowed range
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue {
        /// Form or record field name
        field: String,
        /// Why the value was rejected
        reason: String,
    },
}

impl EstimationError {
    /// Create a "missing field" error
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create an "invalid value" error
    #[must_use]
    pub fn invalid_value(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Name of the offending field
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::MissingField { field } | Self::InvalidValue { field, .. } => field,
        }
    }

    /// Error code this failure maps to
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::MissingField { .. } => ErrorCode::MissingRequiredField,
            Self::InvalidValue { .. } => ErrorCode::ValueOutOfRange,
        }
    }
}

impl From<EstimationError> for AppError {
    fn from(error: EstimationError) -> Self {
        match error {
            EstimationError::MissingField { field } => Self::missing_field(field),
            EstimationError::InvalidValue { field, reason } => Self::out_of_range(field, reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_converts_to_bad_request() {
        let error = EstimationError::missing_field("course_1");
        assert_eq!(error.field(), "course_1");

        let app_error = AppError::from(error);
        assert_eq!(app_error.code, ErrorCode::MissingRequiredField);
        assert_eq!(app_error.http_status(), 400);
    }

    #[test]
    fn test_invalid_value_keeps_reason() {
        let error = EstimationError::invalid_value("luggage", "must not be negative");
        assert_eq!(error.error_code(), ErrorCode::ValueOutOfRange);
        assert_eq!(
            error.to_string(),
            "invalid value for 'luggage': must not be negative"
        );

        let app_error = AppError::from(error);
        assert!(app_error.message.contains("must not be negative"));
    }
}
