#![deny(missing_docs)]

//! # Value Tree Walker
//!
//! Lazy depth-first, pre-order traversal over a `serde_json::Value`.
//!
//! Every object entry and array element is yielded as a `(Key, &Value)` pair
//! before any of its descendants. Scalars yield nothing. Each call to [`walk`]
//! owns its own stack, so traversals can be restarted and run side by side.

use serde_json::{map, Value};
use std::fmt;
use std::iter::Enumerate;
use std::slice;

/// Position of a value inside its parent container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key<'a> {
    /// Key of an object entry.
    Name(&'a str),
    /// Index of an array element.
    Index(usize),
}

impl Key<'_> {
    /// Returns the object key, or `None` for array positions.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Key::Name(name) => Some(*name),
            Key::Index(_) => None,
        }
    }
}

impl fmt::Display for Key<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Name(name) => write!(f, "{}", name),
            Key::Index(index) => write!(f, "{}", index),
        }
    }
}

enum Children<'a> {
    Object(map::Iter<'a>),
    Array(Enumerate<slice::Iter<'a, Value>>),
}

impl<'a> Children<'a> {
    fn of(value: &'a Value) -> Option<Self> {
        match value {
            Value::Object(entries) => Some(Children::Object(entries.iter())),
            Value::Array(items) => Some(Children::Array(items.iter().enumerate())),
            _ => None,
        }
    }

    fn next_pair(&mut self) -> Option<(Key<'a>, &'a Value)> {
        match self {
            Children::Object(iter) => iter.next().map(|(k, v)| (Key::Name(k.as_str()), v)),
            Children::Array(iter) => iter.next().map(|(i, v)| (Key::Index(i), v)),
        }
    }
}

/// Iterator returned by [`walk`].
pub struct Walk<'a> {
    stack: Vec<Children<'a>>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (Key<'a>, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let top = self.stack.last_mut()?;
            match top.next_pair() {
                Some((key, value)) => {
                    if let Some(children) = Children::of(value) {
                        self.stack.push(children);
                    }
                    return Some((key, value));
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

/// Starts a fresh pre-order traversal of `value`.
pub fn walk(value: &Value) -> Walk<'_> {
    Walk {
        stack: Children::of(value).into_iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn keys(value: &Value) -> Vec<String> {
        walk(value).map(|(k, _)| k.to_string()).collect()
    }

    #[test]
    fn test_scalar_yields_nothing() {
        assert_eq!(walk(&json!("text")).count(), 0);
        assert_eq!(walk(&json!(42)).count(), 0);
        assert_eq!(walk(&Value::Null).count(), 0);
    }

    #[test]
    fn test_pre_order_over_nested_values() {
        let value = json!({
            "a": {"b": 1, "c": [10, {"d": true}]},
            "e": "x"
        });
        assert_eq!(keys(&value), vec!["a", "b", "c", "0", "1", "d", "e"]);
    }

    #[test]
    fn test_pairs_carry_values() {
        let value = json!({"outer": {"inner": "v"}});
        let pairs: Vec<_> = walk(&value).collect();
        assert_eq!(pairs[0].0, Key::Name("outer"));
        assert_eq!(pairs[0].1, &json!({"inner": "v"}));
        assert_eq!(pairs[1], (Key::Name("inner"), &json!("v")));
    }

    #[test]
    fn test_array_root_uses_indices() {
        let value = json!(["a", ["b"]]);
        let pairs: Vec<_> = walk(&value).map(|(k, _)| k).collect();
        assert_eq!(pairs, vec![Key::Index(0), Key::Index(1), Key::Index(0)]);
    }

    #[test]
    fn test_walk_is_restartable() {
        let value = json!({"x": [1, 2], "y": {"z": null}});
        let first = keys(&value);
        let second = keys(&value);
        assert_eq!(first, second);
        assert_eq!(first.len(), 5);
    }

    #[test]
    fn test_key_as_name() {
        assert_eq!(Key::Name("$ref").as_name(), Some("$ref"));
        assert_eq!(Key::Index(3).as_name(), None);
    }
}
