//! Per-file orchestration: read, compact (or pass through), accumulate.

use crate::pipeline::Pipeline;
use crate::result::CompilationResult;
use jsc_core::{CompileConfig, SourceUnit};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Drives the pipeline over a list of sources according to a [`CompileConfig`].
pub struct Orchestrator<'a> {
    config: &'a CompileConfig,
    pipeline: Pipeline,
}

impl<'a> Orchestrator<'a> {
    pub fn new(config: &'a CompileConfig) -> Self {
        Self::with_pipeline(config, Pipeline::standard())
    }

    pub fn with_pipeline(config: &'a CompileConfig, pipeline: Pipeline) -> Self {
        Self { config, pipeline }
    }

    /// Empty result labelled with the passes this orchestrator applies.
    pub fn start(&self) -> CompilationResult {
        if self.config.is_merge_only() {
            CompilationResult::default()
        } else {
            CompilationResult::new(self.pipeline.pass_names())
        }
    }

    /// Transformed text of one unit. Compacted units end with a newline so
    /// each file stays on its own line; merge-only returns the content untouched.
    pub fn compile_source(&self, unit: &SourceUnit) -> String {
        if self.config.is_merge_only() {
            return unit.content().to_string();
        }
        let mut compacted = self.pipeline.compact(unit.content());
        compacted.push('\n');
        compacted
    }

    /// Compile a unit and append it to `result`.
    pub fn accumulate(&self, unit: &SourceUnit, result: &mut CompilationResult) {
        debug!(file = unit.identifier(), bytes = unit.len(), "merging file");
        let output = self.compile_source(unit);
        result.push(unit.len(), &output);
    }

    /// Read one file and append it, or record why it could not be read.
    pub fn process_file(&self, path: &Path, result: &mut CompilationResult) {
        debug!(file = %path.display(), "opening file");
        match SourceUnit::read(path) {
            Ok(unit) => self.accumulate(&unit, result),
            Err(e) => {
                warn!(file = %path.display(), error = %e, "skipping file");
                result.record_failure(path.display().to_string(), e.to_string());
            }
        }
    }

    /// Process files in order. Unreadable files are skipped.
    pub fn process_files(&self, paths: &[PathBuf]) -> CompilationResult {
        let mut result = self.start();
        for path in paths {
            self.process_file(path, &mut result);
        }
        result
    }

    /// Compile units that were already loaded.
    pub fn compile_units<'u>(&self, units: impl IntoIterator<Item = &'u SourceUnit>) -> CompilationResult {
        let mut result = self.start();
        for unit in units {
            self.accumulate(unit, &mut result);
        }
        result
    }
}
