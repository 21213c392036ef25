#![deny(missing_docs)]

//! # File Emitter
//!
//! Maps operations to output locations and writes rendered pages.
//!
//! Locations are relative to the output root and derived verbatim from the
//! path template: `/users/{id}` + `get` becomes `users/{id}/get.md`. No
//! sanitization is applied to template braces or other characters.

use crate::error::AppResult;
use indexmap::IndexMap;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the index page.
pub const README_FILE: &str = "README.md";

/// A rendered page and where it goes, relative to the output root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    /// Location relative to the output root.
    pub relative_path: PathBuf,
    /// Markdown text.
    pub contents: String,
}

/// Relative location of the page for `method` on `url_path`.
pub fn operation_path(url_path: &str, method: &str) -> PathBuf {
    let trimmed = url_path.strip_prefix('/').unwrap_or(url_path);
    Path::new(trimmed).join(format!("{}.md", method))
}

/// Relative location of the README page.
pub fn readme_path() -> PathBuf {
    PathBuf::from(README_FILE)
}

/// Destination for rendered pages.
///
/// Abstracted so the pipeline can be driven without touching the filesystem.
pub trait DocWriter {
    /// Stores `contents` at `relative`, replacing anything already there.
    fn write_doc(&mut self, relative: &Path, contents: &str) -> AppResult<()>;
}

/// Writes pages below a root directory, creating directories as needed.
#[derive(Debug, Clone)]
pub struct FsWriter {
    root: PathBuf,
}

impl FsWriter {
    /// Creates a writer rooted at `root`. Nothing is created until the first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The output root.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl DocWriter for FsWriter {
    fn write_doc(&mut self, relative: &Path, contents: &str) -> AppResult<()> {
        let target = self.root.join(relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, contents)?;
        tracing::debug!(path = %target.display(), bytes = contents.len(), "wrote page");
        Ok(())
    }
}

/// Keeps pages in memory, in write order.
#[derive(Debug, Clone, Default)]
pub struct MemoryWriter {
    /// Pages keyed by relative location.
    pub pages: IndexMap<PathBuf, String>,
}

impl MemoryWriter {
    /// Looks up a page by relative location.
    pub fn get(&self, relative: impl AsRef<Path>) -> Option<&str> {
        self.pages.get(relative.as_ref()).map(String::as_str)
    }
}

impl DocWriter for MemoryWriter {
    fn write_doc(&mut self, relative: &Path, contents: &str) -> AppResult<()> {
        self.pages.insert(relative.to_path_buf(), contents.to_string());
        Ok(())
    }
}
