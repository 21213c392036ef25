#![deny(missing_docs)]

//! # Checked Field Access
//!
//! Accessors over loosely structured JSON objects that report absence and type
//! mismatches as [`AppError`] values. Callers decide per field whether a miss
//! is fatal (`require_*`) or defaults (`optional_*`).

use crate::error::{AppError, AppResult};
use serde_json::Value;

/// Typed lookups on JSON objects.
///
/// `context` names the enclosing element (e.g. `GET /users`) and only feeds
/// error messages.
pub trait ValueExt {
    /// Returns the field, failing with `MissingField` when absent.
    fn require(&self, field: &str, context: &str) -> AppResult<&Value>;

    /// Returns the field as a string, failing when absent or not a string.
    fn require_str(&self, field: &str, context: &str) -> AppResult<&str>;

    /// Returns the field as a string if present.
    ///
    /// Fails only when the field exists with a non-string value.
    fn optional_str(&self, field: &str, context: &str) -> AppResult<Option<&str>>;

    /// Returns the field as an array if present.
    fn optional_array(&self, field: &str, context: &str) -> AppResult<Option<&Vec<Value>>>;

    /// Returns the boolean value of the field, `false` when absent or not a boolean.
    fn flag(&self, field: &str) -> bool;
}

impl ValueExt for Value {
    fn require(&self, field: &str, context: &str) -> AppResult<&Value> {
        self.get(field)
            .ok_or_else(|| AppError::missing(context, field))
    }

    fn require_str(&self, field: &str, context: &str) -> AppResult<&str> {
        self.require(field, context)?
            .as_str()
            .ok_or_else(|| invalid(context, field, "a string"))
    }

    fn optional_str(&self, field: &str, context: &str) -> AppResult<Option<&str>> {
        match self.get(field) {
            None => Ok(None),
            Some(value) => value
                .as_str()
                .map(Some)
                .ok_or_else(|| invalid(context, field, "a string")),
        }
    }

    fn optional_array(&self, field: &str, context: &str) -> AppResult<Option<&Vec<Value>>> {
        match self.get(field) {
            None => Ok(None),
            Some(value) => value
                .as_array()
                .map(Some)
                .ok_or_else(|| invalid(context, field, "an array")),
        }
    }

    fn flag(&self, field: &str) -> bool {
        self.get(field).and_then(Value::as_bool).unwrap_or(false)
    }
}

fn invalid(context: &str, field: &str, expected: &'static str) -> AppError {
    AppError::InvalidField {
        context: context.to_string(),
        field: field.to_string(),
        expected,
    }
}
