use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How sources are turned into output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Run every rewriting pass.
    #[default]
    Compact,
    /// Concatenate sources verbatim. Used for pre-minified or third-party libraries.
    MergeOnly,
}

/// Immutable settings shared by the orchestrator and the batch merger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileConfig {
    pub mode: Mode,
    /// Extension of the files written by batch jobs, without the dot.
    pub output_extension: String,
}

impl CompileConfig {
    pub fn merge_only() -> Self {
        Self { mode: Mode::MergeOnly, ..Self::default() }
    }

    pub fn is_merge_only(&self) -> bool {
        self.mode == Mode::MergeOnly
    }
}

impl Default for CompileConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Compact,
            output_extension: "js".into(),
        }
    }
}

/// Where the source files of a single run come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSelection {
    /// Explicit list, processed in the given order.
    Files(Vec<PathBuf>),
    /// Every `.js` file under `root`.
    Directory { root: PathBuf, recursive: bool },
}
