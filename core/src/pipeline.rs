#![deny(missing_docs)]

//! # Documentation Pipeline
//!
//! Drives a whole run: load the specification, render the README, then render
//! and write one page per `get` operation, in document order.
//!
//! Every failure aborts the run. Pages written before the failure stay in
//! place, and pages from paths that no longer exist are never removed.

use crate::emitter::{operation_path, readme_path, DocWriter, RenderedDocument};
use crate::error::AppResult;
use crate::oas::SpecDocument;
use crate::render::{RenderMode, Renderer};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Options for a documentation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateOptions {
    /// Layout of operation pages.
    pub mode: RenderMode,
    /// Whether to write `README.md` from the `info` object.
    pub readme: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            mode: RenderMode::Summary,
            readme: true,
        }
    }
}

/// Outcome of a completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Pages written, relative to the output root, in write order.
    pub written: Vec<PathBuf>,
    /// Number of operations skipped because their method is not `get`.
    pub skipped: usize,
}

/// Loads the specification at `input` and writes its pages through `writer`.
pub fn generate_docs<W: DocWriter>(
    input: &Path,
    options: &GenerateOptions,
    writer: &mut W,
) -> AppResult<GenerationReport> {
    let doc = SpecDocument::load(input)?;
    tracing::info!(input = %input.display(), mode = %options.mode, "generating documentation");
    write_docs(&doc, options, writer)
}

/// Renders and writes every page of `doc`, one at a time.
pub fn write_docs<W: DocWriter>(
    doc: &SpecDocument,
    options: &GenerateOptions,
    writer: &mut W,
) -> AppResult<GenerationReport> {
    let mut report = GenerationReport::default();
    each_document(doc, options, &mut report.skipped, |page| {
        writer.write_doc(&page.relative_path, &page.contents)?;
        report.written.push(page.relative_path);
        Ok(())
    })?;
    tracing::info!(
        written = report.written.len(),
        skipped = report.skipped,
        "documentation complete"
    );
    Ok(report)
}

/// Renders every page of `doc` without writing anything.
pub fn render_documents(
    doc: &SpecDocument,
    options: &GenerateOptions,
) -> AppResult<Vec<RenderedDocument>> {
    let mut pages = Vec::new();
    let mut skipped = 0;
    each_document(doc, options, &mut skipped, |page| {
        pages.push(page);
        Ok(())
    })?;
    Ok(pages)
}

fn each_document<F>(
    doc: &SpecDocument,
    options: &GenerateOptions,
    skipped: &mut usize,
    mut sink: F,
) -> AppResult<()>
where
    F: FnMut(RenderedDocument) -> AppResult<()>,
{
    let renderer = Renderer::new(options.mode);

    if options.readme {
        sink(RenderedDocument {
            relative_path: readme_path(),
            contents: renderer.render_info(doc.info())?,
        })?;
    }

    for op in doc.operations() {
        if !op.is_read() {
            tracing::debug!(operation = %op.label(), "skipping non-read operation");
            *skipped += 1;
            continue;
        }
        sink(RenderedDocument {
            relative_path: operation_path(op.path, op.method),
            contents: renderer.render_operation(&op, doc)?,
        })?;
    }

    Ok(())
}
