//! Validation error types
//!
//! A failed validation carries one entry per violated constraint so the
//! client can map errors back to fields. Violations serialize directly
//! into the HTTP error body.

use serde::Serialize;
use thiserror::Error;

/// One violated constraint on one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    /// Field path, e.g. `"year"` or `"genre[1]"`
    pub field: String,
    /// Rule identifier: `required`, `type`, `non_empty`, `range`,
    /// `positive`, `url`, `enum`
    pub rule: &'static str,
    /// Human-readable description
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, rule: &'static str, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            rule,
            message: message.into(),
        }
    }

    pub fn required(field: &str) -> Self {
        Self::new(field, "required", format!("{} is required", field))
    }

    pub fn wrong_type(field: impl Into<String>, expected: &str) -> Self {
        let field = field.into();
        let message = format!("{} must be {}", field, expected);
        Self::new(field, "type", message)
    }
}

/// Validation failure: every violated constraint, in field-check order.
///
/// Validation never short-circuits, so a payload that breaks several
/// rules reports all of them in one response.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Payload failed validation with {} violation(s)", .violations.len())]
pub struct ValidationError {
    pub violations: Vec<FieldViolation>,
}

impl ValidationError {
    pub fn new(violations: Vec<FieldViolation>) -> Self {
        Self { violations }
    }

    /// True when a violation names the given field.
    pub fn mentions(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

/// Result type for validation
pub type ValidationResult<T> = Result<T, ValidationError>;
