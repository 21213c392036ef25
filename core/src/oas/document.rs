#![deny(missing_docs)]

//! # OpenAPI Document
//!
//! Loads a JSON specification and exposes its `info` object and the
//! operations under `paths`, in document order.

use crate::error::{AppError, AppResult};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// The only method that produces documentation pages.
pub const READ_METHOD: &str = "get";

/// A parsed specification document.
///
/// Construction guarantees that `info` and `paths` exist and are objects.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecDocument {
    root: Value,
}

/// One method entry of one path item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Operation<'a> {
    /// URL path template, e.g. `/users/{id}`.
    pub path: &'a str,
    /// Method key exactly as it appears in the path item.
    pub method: &'a str,
    /// The raw operation object.
    pub value: &'a Value,
}

impl Operation<'_> {
    /// Whether this operation is rendered to a page.
    pub fn is_read(&self) -> bool {
        self.method == READ_METHOD
    }

    /// Label used in error messages and logs, e.g. `GET /users`.
    pub fn label(&self) -> String {
        format!("{} {}", self.method.to_uppercase(), self.path)
    }
}

impl SpecDocument {
    /// Parses a JSON string into a document.
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let root: Value = serde_json::from_str(json)
            .map_err(|e| AppError::Parse(format!("Failed to parse OpenAPI JSON: {}", e)))?;
        Self::from_value(root)
    }

    /// Reads and parses the document at `path`.
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Wraps an already decoded value, checking the top-level layout.
    pub fn from_value(root: Value) -> AppResult<Self> {
        for key in ["info", "paths"] {
            match root.get(key) {
                Some(Value::Object(_)) => {}
                Some(_) => {
                    return Err(AppError::Parse(format!(
                        "OpenAPI document '{}' must be an object",
                        key
                    )))
                }
                None => {
                    return Err(AppError::Parse(format!(
                        "OpenAPI document missing required '{}' object",
                        key
                    )))
                }
            }
        }
        Ok(Self { root })
    }

    /// The whole document, used as the base for reference resolution.
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// The `info` object.
    pub fn info(&self) -> &Value {
        &self.root["info"]
    }

    fn paths(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.root["paths"].as_object().into_iter().flatten()
    }

    /// Every method entry of every path item, in document order.
    ///
    /// Path items that are not objects contribute nothing.
    pub fn operations(&self) -> impl Iterator<Item = Operation<'_>> {
        self.paths().flat_map(|(path, item)| {
            item.as_object()
                .into_iter()
                .flatten()
                .map(move |(method, value)| Operation {
                    path: path.as_str(),
                    method: method.as_str(),
                    value,
                })
        })
    }
}
