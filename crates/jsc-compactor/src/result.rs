//! Compilation results and size statistics.

use serde::Serialize;

/// A file that could not contribute to the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileFailure {
    pub identifier: String,
    pub message: String,
}

/// Output of one run over a list of files.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CompilationResult {
    pub output: String,
    /// Bytes read from every file that was processed.
    pub size_before: usize,
    pub size_after: usize,
    pub files_processed: usize,
    pub failures: Vec<FileFailure>,
    pub passes_applied: Vec<String>,
}

impl CompilationResult {
    pub fn new(passes_applied: Vec<String>) -> Self {
        Self { passes_applied, ..Self::default() }
    }

    /// Append one file's contribution.
    pub fn push(&mut self, size_before: usize, output: &str) {
        self.size_before += size_before;
        self.output.push_str(output);
        self.size_after = self.output.len();
        self.files_processed += 1;
    }

    pub fn record_failure(&mut self, identifier: impl Into<String>, message: impl Into<String>) {
        self.failures.push(FileFailure {
            identifier: identifier.into(),
            message: message.into(),
        });
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn ratio(&self) -> f64 {
        if self.size_before == 0 { return 1.0; }
        self.size_after as f64 / self.size_before as f64
    }

    /// Size reduction in percent. Negative when the output grew.
    pub fn reduction_pct(&self) -> f64 {
        reduction_pct(self.size_before, self.size_after)
    }
}

/// Size reduction from `size_before` to `size_after` in percent, 0 for empty input.
pub fn reduction_pct(size_before: usize, size_after: usize) -> f64 {
    if size_before == 0 { return 0.0; }
    (1.0 - size_after as f64 / size_before as f64) * 100.0
}
