#![deny(missing_docs)]

//! # oasdoc Core
//!
//! Core library for turning an OpenAPI JSON document into markdown pages.

/// Shared error types.
pub mod error;

/// OpenAPI document model, traversal and `$ref` resolution.
pub mod oas;

/// Markdown rendering.
pub mod render;

/// Output locations and page writers.
pub mod emitter;

/// End-to-end documentation runs.
pub mod pipeline;

pub use emitter::{DocWriter, FsWriter, MemoryWriter, RenderedDocument};
pub use error::{AppError, AppResult};
pub use oas::{collect_references, resolve_pointer, walk, Operation, ResolvedRef, SpecDocument};
pub use pipeline::{generate_docs, render_documents, write_docs, GenerateOptions, GenerationReport};
pub use render::{RenderMode, Renderer};
