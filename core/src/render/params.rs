//! Parameter listing for summary pages.

use crate::error::AppResult;
use crate::oas::{as_reference, resolve_pointer, Operation, ValueExt};
use serde_json::Value;

const PATH_LOCATION: &str = "path";

/// Builds the `All Parameters` block, or nothing when the operation has no
/// `parameters` field.
pub(super) fn parameters_section(
    op: &Operation<'_>,
    summary: &str,
    root: &Value,
) -> AppResult<Vec<String>> {
    let context = op.label();
    let Some(parameters) = op.value.optional_array("parameters", &context)? else {
        return Ok(Vec::new());
    };

    let mut path_items = Vec::new();
    let mut query_items = Vec::new();

    for entry in parameters {
        let param = dereference(entry, root)?;
        let item = list_item(param, root, &context)?;
        if param.get("in").and_then(Value::as_str) == Some(PATH_LOCATION) {
            path_items.push(item);
        } else {
            query_items.push(item);
        }
    }

    let mut out = vec![format!("## All Parameters for \"{}\"", summary), String::new()];

    if !path_items.is_empty() {
        out.push("### Path Parameters".to_string());
        out.push(String::new());
        out.extend(path_items);
    }

    if !query_items.is_empty() {
        out.push("### Query Parameters".to_string());
        out.push(String::new());
        out.extend(query_items);
    }

    Ok(out)
}

/// Follows a single `$ref` hop; inline values pass through.
fn dereference<'a>(value: &'a Value, root: &'a Value) -> AppResult<&'a Value> {
    match as_reference(value) {
        Some(pointer) => resolve_pointer(pointer, root),
        None => Ok(value),
    }
}

/// `` - `name` (type, required): description ``
fn list_item(param: &Value, root: &Value, context: &str) -> AppResult<String> {
    let name = param.require_str("name", &format!("{} parameter", context))?;
    let param_context = format!("{} parameter '{}'", context, name);

    let mut detail = param
        .get("schema")
        .and_then(|schema| schema_type(schema, root))
        .unwrap_or_default();

    if param.flag("required") {
        detail.push_str(", required");
    }

    let mut item = format!("- `{}`", name);
    if !detail.is_empty() {
        item.push_str(&format!(" ({})", detail));
    }
    if let Some(description) = param.optional_str("description", &param_context)? {
        item.push_str(": ");
        item.push_str(description);
    }
    Ok(item)
}

/// Reads `type` from an inline schema, or from a local schema reference.
///
/// A reference that does not resolve in this document (remote URLs, typos)
/// leaves the type empty.
fn schema_type(schema: &Value, root: &Value) -> Option<String> {
    let schema = match dereference(schema, root) {
        Ok(resolved) => resolved,
        Err(err) => {
            tracing::debug!(%err, "schema type unavailable");
            return None;
        }
    };
    schema.get("type").map(type_label)
}

/// OpenAPI 3.1 allows `type` to be a list (`["string", "null"]`).
fn type_label(value: &Value) -> String {
    match value {
        Value::String(name) => name.clone(),
        Value::Array(names) => names
            .iter()
            .map(|name| name.as_str().map(str::to_string).unwrap_or_else(|| name.to_string()))
            .collect::<Vec<_>>()
            .join(" | "),
        other => other.to_string(),
    }
}
