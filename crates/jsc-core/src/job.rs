//! Batch job descriptions.
//!
//! A batch file is a JSON object mapping a job name to its description:
//!
//! ```json
//! {
//!   "vendor": { "files": ["lib/jquery.min.js"], "action": "merge" },
//!   "app": { "files": ["src/a.js", "src/b.js"], "action": "compile", "outputDirectory": "dist" }
//! }
//! ```
//!
//! Jobs keep their declaration order.

use crate::error::{JscError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// What a job does with its files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobAction {
    /// Raw concatenation.
    #[default]
    Merge,
    /// Run the compaction pipeline on every file.
    Compile,
}

impl JobAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Merge => "merge",
            Self::Compile => "compile",
        }
    }
}

impl fmt::Display for JobAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobAction {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "merge" => Ok(Self::Merge),
            "compile" => Ok(Self::Compile),
            other => Err(other.to_string()),
        }
    }
}

/// A validated batch job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSpec {
    pub name: String,
    pub files: Vec<PathBuf>,
    pub action: JobAction,
    pub output_directory: PathBuf,
}

impl JobSpec {
    /// `<output_directory>/<name>.<extension>`
    pub fn output_path(&self, extension: &str) -> PathBuf {
        self.output_directory.join(format!("{}.{extension}", self.name))
    }
}

/// On-disk shape of a job before defaults and validation.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawJob {
    files: Option<Vec<PathBuf>>,
    action: Option<String>,
    #[serde(rename = "outputDirectory", alias = "outputdirectory", alias = "output_directory")]
    output_directory: Option<PathBuf>,
}

/// Parse a batch description. Jobs without an output directory write to
/// `default_output_dir`.
///
/// Every job is validated before any is returned, so a bad entry anywhere in
/// the file aborts the batch before output is produced.
pub fn parse_batch(text: &str, default_output_dir: &Path) -> Result<Vec<JobSpec>> {
    let root: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(text).map_err(|e| JscError::InvalidBatch(e.to_string()))?;

    let mut jobs = Vec::with_capacity(root.len());
    for (name, value) in root {
        if !is_valid_job_name(&name) {
            return Err(JscError::InvalidJobName { job: name });
        }
        let raw: RawJob = serde_json::from_value(value)
            .map_err(|e| JscError::InvalidBatch(format!("job '{name}': {e}")))?;

        let files = raw.files.ok_or_else(|| JscError::MissingJobFiles { job: name.clone() })?;
        let action = match raw.action {
            Some(action) => action
                .parse::<JobAction>()
                .map_err(|action| JscError::UnknownAction { job: name.clone(), action })?,
            None => JobAction::default(),
        };
        let output_directory = raw
            .output_directory
            .unwrap_or_else(|| default_output_dir.to_path_buf());

        jobs.push(JobSpec { name, files, action, output_directory });
    }
    Ok(jobs)
}

/// Job names become file names, so they must stay inside the output directory.
fn is_valid_job_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\'])
}

/// Read and parse a batch file, defaulting output directories to the working directory.
pub fn load_batch(path: &Path) -> Result<Vec<JobSpec>> {
    let text = std::fs::read_to_string(path).map_err(|e| JscError::io(path, e))?;
    let cwd = std::env::current_dir().map_err(|e| JscError::io(".", e))?;
    parse_batch(&text, &cwd)
}
