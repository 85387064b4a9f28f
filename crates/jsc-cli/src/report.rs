//! Console output: colored batch progress and size statistics.

use jsc_compactor::result::reduction_pct;
use jsc_compactor::BatchObserver;
use jsc_core::JobSpec;
use owo_colors::OwoColorize;
use std::path::Path;

/// Prints batch progress the way the legacy tool did: plain progress on
/// stdout, green for generated files and red for failures.
pub struct ConsoleObserver;

impl BatchObserver for ConsoleObserver {
    fn file_started(&mut self, _job: &JobSpec, file: &Path) {
        println!("Processing: {}", file.display());
    }

    fn file_failed(&mut self, _job: &JobSpec, file: &Path, message: &str) {
        println!("{}", read_failure_line(file, message).bold().red());
    }

    fn job_written(&mut self, _job: &JobSpec, output: &Path) {
        println!("{}", format!("Generating: {}", output.display()).bold().green());
    }

    fn job_failed(&mut self, _job: &JobSpec, output: &Path, reason: &str) {
        println!("{}", format!("Fail to compile {} ({reason})", output.display()).bold().red());
    }
}

/// Message for a file that could not be read, whatever the cause.
pub fn read_failure_line(file: &Path, message: &str) -> String {
    format!("Cannot read: {} ({message})", file.display())
}

/// Print before/after sizes and the gain on stderr.
pub fn print_stats(size_before: usize, size_after: usize) {
    eprintln!("Before : {size_before}");
    eprintln!("After : {size_after}");
    eprintln!("Gain : {:.2} %", reduction_pct(size_before, size_after));
}
