#![deny(missing_docs)]

//! # OpenAPI Document Module
//!
//! - **document**: Loading and iterating a specification.
//! - **fields**: Checked accessors over raw JSON objects.
//! - **walker**: Pre-order traversal over JSON values.
//! - **refs**: `$ref` pointer resolution and collection.

pub mod document;
pub mod fields;
pub mod refs;
pub mod walker;

pub use document::{Operation, SpecDocument, READ_METHOD};
pub use fields::ValueExt;
pub use refs::{as_reference, collect_references, resolve_pointer, ResolvedRef, REF_KEY};
pub use walker::{walk, Key, Walk};
