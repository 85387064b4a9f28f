//! Shared types for the JavaScript compactor: configuration, errors,
//! source discovery and batch job descriptions.

pub mod config;
pub mod error;
pub mod job;
pub mod source;

pub use config::{CompileConfig, InputSelection, Mode};
pub use error::{JscError, Result};
pub use job::{JobAction, JobSpec};
pub use source::SourceUnit;
