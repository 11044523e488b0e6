//! Form definitions backing the employee routes.

use serde::Serialize;

pub mod employee;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// A single field-level validation failure, rendered next to the offending
/// form input.
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}
