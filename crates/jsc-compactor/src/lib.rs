//! JavaScript compactor — comment, line and whitespace stripping.
//!
//! Passes, run between literal protection and restoration:
//! 1. Comments — `//` and `/* */`
//! 2. Lines — join continuations, drop blank lines, remove line breaks
//! 3. Semicolons — collapse runs, drop `;` before `}`
//! 4. Whitespace — collapse blanks, tighten operators and punctuation

pub mod merger;
pub mod orchestrator;
pub mod pass1_comments;
pub mod pass2_lines;
pub mod pass3_semicolons;
pub mod pass4_whitespace;
pub mod pipeline;
pub mod result;
pub mod vault;

pub use merger::{BatchMerger, BatchObserver, BatchReport, JobOutcome, JobStatus, SilentObserver};
pub use orchestrator::Orchestrator;
pub use pipeline::{Pass, Pipeline, STANDARD_PASSES};
pub use result::{CompilationResult, FileFailure};
