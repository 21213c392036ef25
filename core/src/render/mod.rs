#![deny(missing_docs)]

//! # Markdown Rendering
//!
//! Turns operations and the `info` object into markdown pages.
//!
//! Two page layouts exist for operations:
//! - [`RenderMode::Summary`]: summary, docs link and a parameter listing.
//! - [`RenderMode::FullDump`]: the raw operation object plus every reference
//!   reachable from it, pretty-printed.
//!
//! The `info` README page is the same in both modes.

mod params;

use crate::error::{AppError, AppResult};
use crate::oas::{collect_references, Operation, SpecDocument, ValueExt};
use serde::{Deserialize, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;
use std::fmt;

/// Page layout used for operation files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderMode {
    /// Summary, description, docs link and grouped parameters.
    #[default]
    Summary,
    /// Description followed by JSON dumps of the operation and its references.
    FullDump,
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderMode::Summary => write!(f, "summary"),
            RenderMode::FullDump => write!(f, "full-dump"),
        }
    }
}

/// Renders markdown pages in a fixed [`RenderMode`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    mode: RenderMode,
}

impl Renderer {
    /// Creates a renderer for the given layout.
    pub fn new(mode: RenderMode) -> Self {
        Self { mode }
    }

    /// Renders the page for one operation.
    ///
    /// `doc` is the enclosing document, used to resolve references.
    pub fn render_operation(&self, op: &Operation<'_>, doc: &SpecDocument) -> AppResult<String> {
        match self.mode {
            RenderMode::Summary => render_summary(op, doc.root()),
            RenderMode::FullDump => render_full_dump(op, doc.root()),
        }
    }

    /// Renders the README page from the `info` object.
    pub fn render_info(&self, info: &Value) -> AppResult<String> {
        let title = info.require_str("title", "info")?;
        let description = info.require_str("description", "info")?;

        let mut lines = vec![format!("# {}", title), String::new(), description.to_string()];
        lines.push(String::new());
        lines.extend(json_block(info)?);
        lines.push(String::new());
        Ok(lines.join("\n"))
    }
}

fn header(op: &Operation<'_>, summary: &str, description: &str) -> Vec<String> {
    vec![
        format!("# {}", summary),
        String::new(),
        format!("`{} {}`", op.method.to_uppercase(), op.path),
        String::new(),
        description.to_string(),
        String::new(),
    ]
}

fn render_summary(op: &Operation<'_>, root: &Value) -> AppResult<String> {
    let context = op.label();
    let summary = op.value.require_str("summary", &context)?;
    let description = op.value.require_str("description", &context)?;

    let docs = op.value.require("externalDocs", &context)?;
    let docs_context = format!("{} externalDocs", context);
    let link = format!(
        "[{}]({})",
        docs.require_str("description", &docs_context)?,
        docs.require_str("url", &docs_context)?
    );

    let mut lines = header(op, summary, description);
    lines.push(link);
    lines.push(String::new());
    lines.extend(params::parameters_section(op, summary, root)?);
    Ok(lines.join("\n"))
}

fn render_full_dump(op: &Operation<'_>, root: &Value) -> AppResult<String> {
    let context = op.label();
    let summary = op.value.require_str("summary", &context)?;
    let description = op.value.require_str("description", &context)?;

    let mut lines = header(op, summary, description);
    lines.push("## Operation Object".to_string());
    lines.push(String::new());
    lines.extend(json_block(op.value)?);

    let references = collect_references(op.value, root)?;
    if !references.is_empty() {
        lines.push(String::new());
        lines.push("## References".to_string());
        for reference in &references {
            lines.push(String::new());
            lines.push(format!("### `{}`", reference.pointer));
            lines.push(String::new());
            lines.extend(json_block(reference.target)?);
        }
    }
    lines.push(String::new());
    Ok(lines.join("\n"))
}

/// Pretty-prints `value` with a four space indent.
pub fn pretty_json(value: &Value) -> AppResult<String> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(|e| AppError::General(e.to_string()))
}

fn json_block(value: &Value) -> AppResult<[String; 3]> {
    Ok(["```json".to_string(), pretty_json(value)?, "```".to_string()])
}
