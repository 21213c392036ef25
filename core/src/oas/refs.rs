#![deny(missing_docs)]

//! # Reference Resolution
//!
//! Resolves document-local `$ref` pointers and collects the transitive closure
//! of references reachable from a fragment.
//!
//! Pointers are plain slash-separated paths from the document root
//! (`/components/parameters/Limit`). The first segment is always discarded, so
//! the fragment form `#/components/parameters/Limit` resolves identically.
//! Segments are used verbatim: `~0`/`~1` escapes are not decoded.

use crate::error::{AppError, AppResult};
use crate::oas::walker::walk;
use serde_json::Value;

/// Key that marks a reference object.
pub const REF_KEY: &str = "$ref";

/// A discovered reference together with the value it points to.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRef<'a> {
    /// The pointer exactly as written in the document.
    pub pointer: &'a str,
    /// The resolved target inside the document root.
    pub target: &'a Value,
}

/// Dereferences `pointer` against `root` by successive key (or array index) lookups.
pub fn resolve_pointer<'a>(pointer: &str, root: &'a Value) -> AppResult<&'a Value> {
    let mut target = root;
    for segment in pointer.split('/').skip(1) {
        let next = match target {
            Value::Object(entries) => entries.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        };
        target = next.ok_or_else(|| AppError::Lookup {
            pointer: pointer.to_string(),
            segment: segment.to_string(),
        })?;
    }
    Ok(target)
}

/// Returns the pointer if `value` is a reference object (`{"$ref": "..."}`).
pub fn as_reference(value: &Value) -> Option<&str> {
    value.get(REF_KEY).and_then(Value::as_str)
}

/// Collects every reference reachable from `value`, following references into
/// their resolved targets.
///
/// Order is depth-first: each reference is followed immediately by the
/// references found inside its target, before the next reference discovered
/// in `value`. Repeated pointers are reported once per discovery site.
///
/// A pointer that is already being expanded further up the chain is reported
/// but not expanded again, which keeps cyclic documents finite.
pub fn collect_references<'a>(value: &'a Value, root: &'a Value) -> AppResult<Vec<ResolvedRef<'a>>> {
    let mut found = Vec::new();
    let mut expanding = Vec::new();
    collect_into(value, root, &mut expanding, &mut found)?;
    Ok(found)
}

fn collect_into<'a>(
    value: &'a Value,
    root: &'a Value,
    expanding: &mut Vec<&'a str>,
    found: &mut Vec<ResolvedRef<'a>>,
) -> AppResult<()> {
    for (key, node) in walk(value) {
        if key.as_name() != Some(REF_KEY) {
            continue;
        }
        // A property that happens to be named `$ref` inside a schema is not a pointer.
        let Some(pointer) = node.as_str() else {
            continue;
        };

        let target = resolve_pointer(pointer, root)?;
        found.push(ResolvedRef { pointer, target });

        if expanding.contains(&pointer) {
            tracing::warn!(pointer, "reference cycle detected; not expanding again");
            continue;
        }

        expanding.push(pointer);
        collect_into(target, root, expanding, found)?;
        expanding.pop();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document() -> Value {
        json!({
            "components": {
                "parameters": {
                    "Limit": {"name": "limit", "in": "query", "schema": {"$ref": "/components/schemas/Count"}},
                    "Id": {"name": "id", "in": "path"}
                },
                "schemas": {
                    "Count": {"type": "integer"},
                    "Node": {"type": "object", "properties": {"next": {"$ref": "/components/schemas/Node"}}},
                    "A": {"items": {"$ref": "/components/schemas/B"}},
                    "B": {"items": {"$ref": "/components/schemas/A"}}
                },
                "list": [{"name": "first"}, {"name": "second"}]
            }
        })
    }

    #[test]
    fn test_resolve_pointer_success() {
        let doc = document();
        let target = resolve_pointer("/components/parameters/Id", &doc).unwrap();
        assert_eq!(target, &json!({"name": "id", "in": "path"}));
    }

    #[test]
    fn test_resolve_pointer_fragment_form() {
        let doc = document();
        let plain = resolve_pointer("/components/schemas/Count", &doc).unwrap();
        let fragment = resolve_pointer("#/components/schemas/Count", &doc).unwrap();
        assert_eq!(plain, fragment);
    }

    #[test]
    fn test_resolve_pointer_array_index() {
        let doc = document();
        let target = resolve_pointer("/components/list/1/name", &doc).unwrap();
        assert_eq!(target, &json!("second"));
    }

    #[test]
    fn test_resolve_pointer_missing_segment() {
        let doc = document();
        match resolve_pointer("/components/parameters/Foo", &doc).unwrap_err() {
            AppError::Lookup { pointer, segment } => {
                assert_eq!(pointer, "/components/parameters/Foo");
                assert_eq!(segment, "Foo");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_resolve_pointer_does_not_unescape() {
        let doc = json!({"a/b": 1, "a~1b": 2});
        assert_eq!(resolve_pointer("/a~1b", &doc).unwrap(), &json!(2));
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let doc = document();
        let first = resolve_pointer("/components/schemas/Node", &doc).unwrap();
        let second = resolve_pointer("/components/schemas/Node", &doc).unwrap();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_as_reference() {
        assert_eq!(as_reference(&json!({"$ref": "/x"})), Some("/x"));
        assert_eq!(as_reference(&json!({"name": "x"})), None);
        assert_eq!(as_reference(&json!({"$ref": {"type": "string"}})), None);
    }

    #[test]
    fn test_collect_references_transitive_order() {
        let doc = document();
        let op = json!({
            "parameters": [
                {"$ref": "/components/parameters/Limit"},
                {"$ref": "/components/parameters/Id"}
            ]
        });
        let refs = collect_references(&op, &doc).unwrap();
        let pointers: Vec<_> = refs.iter().map(|r| r.pointer).collect();
        assert_eq!(
            pointers,
            vec![
                "/components/parameters/Limit",
                "/components/schemas/Count",
                "/components/parameters/Id",
            ]
        );
        assert_eq!(refs[1].target, &json!({"type": "integer"}));
    }

    #[test]
    fn test_collect_references_keeps_duplicates() {
        let doc = document();
        let op = json!([
            {"$ref": "/components/parameters/Id"},
            {"$ref": "/components/parameters/Id"}
        ]);
        let refs = collect_references(&op, &doc).unwrap();
        assert_eq!(refs.len(), 2);
    }

    #[test]
    fn test_collect_references_self_cycle_terminates() {
        let doc = document();
        let schema = json!({"$ref": "/components/schemas/Node"});
        let refs = collect_references(&schema, &doc).unwrap();
        let pointers: Vec<_> = refs.iter().map(|r| r.pointer).collect();
        assert_eq!(
            pointers,
            vec!["/components/schemas/Node", "/components/schemas/Node"]
        );
    }

    #[test]
    fn test_collect_references_mutual_cycle_terminates() {
        let doc = document();
        let schema = json!({"$ref": "/components/schemas/A"});
        let refs = collect_references(&schema, &doc).unwrap();
        let pointers: Vec<_> = refs.iter().map(|r| r.pointer).collect();
        assert_eq!(
            pointers,
            vec![
                "/components/schemas/A",
                "/components/schemas/B",
                "/components/schemas/A",
            ]
        );
    }

    #[test]
    fn test_collect_references_propagates_lookup_error() {
        let doc = document();
        let op = json!({"schema": {"$ref": "/components/schemas/Missing"}});
        let err = collect_references(&op, &doc).unwrap_err();
        assert!(matches!(err, AppError::Lookup { .. }));
    }

    #[test]
    fn test_collect_references_skips_non_string_ref_keys() {
        let doc = document();
        let schema = json!({"properties": {"$ref": {"type": "string"}}});
        assert!(collect_references(&schema, &doc).unwrap().is_empty());
    }
}
