//! Source files: reading and discovery.

use crate::config::InputSelection;
use crate::error::{JscError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Extension matched (case-insensitively) by directory discovery.
pub const JS_EXTENSION: &str = "js";

/// One source file as read from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    identifier: String,
    content: String,
}

impl SourceUnit {
    pub fn new(identifier: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            content: content.into(),
        }
    }

    /// Read a file into a unit. Missing, unreadable and non UTF-8 files are errors.
    pub fn read(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|e| JscError::io(path, e))?;
        let content = String::from_utf8(bytes)
            .map_err(|_| JscError::InvalidEncoding { path: path.to_path_buf() })?;
        Ok(Self::new(path.display().to_string(), content))
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Size in bytes.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Check whether a path carries the `.js` extension, ignoring case.
pub fn is_javascript_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(JS_EXTENSION))
}

/// Collect the JavaScript files below `root`, sorted by file name.
pub fn discover_javascript_files(root: &Path, recursive: bool) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        return Err(JscError::DirectoryNotFound { path: root.to_path_buf() });
    }
    if !root.is_dir() {
        return Err(JscError::NotADirectory { path: root.to_path_buf() });
    }

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut files = Vec::new();
    for entry in WalkDir::new(root).max_depth(max_depth).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() && is_javascript_file(entry.path()) {
            files.push(entry.into_path());
        }
    }
    debug!(root = %root.display(), count = files.len(), "discovered javascript files");
    Ok(files)
}

/// Resolve an input selection into the ordered list of files to process.
pub fn resolve_inputs(selection: &InputSelection) -> Result<Vec<PathBuf>> {
    match selection {
        InputSelection::Files(files) => Ok(files.clone()),
        InputSelection::Directory { root, recursive } => discover_javascript_files(root, *recursive),
    }
}
