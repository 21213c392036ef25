//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// Only `Io` and `Json` convert implicitly; every other variant carries
/// context and must be built explicitly.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors (reading the OpenAPI document, writing pages).
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// Serialization failure while pretty-printing a JSON fragment.
    #[display("JSON Error: {_0}")]
    Json(serde_json::Error),

    /// The input is not valid JSON or lacks the top-level `info`/`paths` objects.
    #[from(ignore)]
    #[display("Parse Error: {_0}")]
    Parse(String),

    /// A field the renderer needs is absent.
    #[from(ignore)]
    #[display("Missing field '{field}' in {context}")]
    MissingField {
        /// Where the lookup happened (e.g. `GET /users`).
        context: String,
        /// Name of the absent field.
        field: String,
    },

    /// A field is present but holds the wrong kind of JSON value.
    #[from(ignore)]
    #[display("Field '{field}' in {context} must be {expected}")]
    InvalidField {
        /// Where the lookup happened.
        context: String,
        /// Name of the offending field.
        field: String,
        /// Human readable description of the expected JSON type.
        expected: &'static str,
    },

    /// A reference pointer names a segment that does not exist.
    #[from(ignore)]
    #[display("Unresolvable reference '{pointer}': segment '{segment}' not found")]
    Lookup {
        /// The full pointer as written in the document.
        pointer: String,
        /// The first segment that failed to resolve.
        segment: String,
    },

    /// Generic errors.
    #[from(ignore)]
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Shorthand for [`AppError::MissingField`].
    pub fn missing(context: impl Into<String>, field: impl Into<String>) -> Self {
        AppError::MissingField {
            context: context.into(),
            field: field.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_io_conversion() {
        let io_err = Error::new(ErrorKind::NotFound, "spec.json");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
    }

    #[test]
    fn test_json_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let app_err: AppError = json_err.into();
        assert!(matches!(app_err, AppError::Json(_)));
    }

    #[test]
    fn test_missing_field_display() {
        let err = AppError::missing("GET /users", "externalDocs");
        assert_eq!(
            format!("{}", err),
            "Missing field 'externalDocs' in GET /users"
        );
    }

    #[test]
    fn test_lookup_display() {
        let err = AppError::Lookup {
            pointer: "/components/parameters/Foo".into(),
            segment: "Foo".into(),
        };
        assert_eq!(
            err.to_string(),
            "Unresolvable reference '/components/parameters/Foo': segment 'Foo' not found"
        );
    }
}
