//! Batch merger — runs a list of jobs in declaration order.

use crate::orchestrator::Orchestrator;
use crate::result::CompilationResult;
use jsc_core::{CompileConfig, JobAction, JobSpec, Mode};
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Progress callbacks, invoked in processing order.
pub trait BatchObserver {
    fn file_started(&mut self, _job: &JobSpec, _file: &Path) {}
    fn file_failed(&mut self, _job: &JobSpec, _file: &Path, _message: &str) {}
    fn job_written(&mut self, _job: &JobSpec, _output: &Path) {}
    fn job_failed(&mut self, _job: &JobSpec, _output: &Path, _reason: &str) {}
}

/// Observer that ignores every event.
pub struct SilentObserver;

impl BatchObserver for SilentObserver {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobStatus {
    Written,
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct JobOutcome {
    pub name: String,
    pub action: JobAction,
    pub output_path: PathBuf,
    pub result: CompilationResult,
    pub status: JobStatus,
}

impl JobOutcome {
    pub fn is_written(&self) -> bool {
        self.status == JobStatus::Written
    }
}

/// Outcome of every job of a batch.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub jobs: Vec<JobOutcome>,
}

impl BatchReport {
    pub fn failed_jobs(&self) -> impl Iterator<Item = &JobOutcome> {
        self.jobs.iter().filter(|j| !j.is_written())
    }

    pub fn all_written(&self) -> bool {
        self.jobs.iter().all(JobOutcome::is_written)
    }

    pub fn size_before(&self) -> usize {
        self.jobs.iter().map(|j| j.result.size_before).sum()
    }

    pub fn size_after(&self) -> usize {
        self.jobs.iter().map(|j| j.result.size_after).sum()
    }
}

pub struct BatchMerger<'a> {
    config: &'a CompileConfig,
}

impl<'a> BatchMerger<'a> {
    pub fn new(config: &'a CompileConfig) -> Self {
        Self { config }
    }

    /// Run all jobs. A failing job never stops the ones after it.
    pub fn run(&self, jobs: &[JobSpec], observer: &mut dyn BatchObserver) -> BatchReport {
        let mut report = BatchReport::default();
        for job in jobs {
            report.jobs.push(self.run_job(job, observer));
        }
        report
    }

    /// Build one job's output and write it to `<dir>/<name>.<ext>`.
    ///
    /// A merge job with any unreadable file writes nothing. A compile job
    /// skips unreadable files and writes the rest.
    pub fn run_job(&self, job: &JobSpec, observer: &mut dyn BatchObserver) -> JobOutcome {
        let output_path = job.output_path(&self.config.output_extension);
        let mode = match job.action {
            JobAction::Merge => Mode::MergeOnly,
            JobAction::Compile => Mode::Compact,
        };
        let job_config = CompileConfig { mode, ..self.config.clone() };
        let orchestrator = Orchestrator::new(&job_config);

        let mut result = orchestrator.start();
        for file in &job.files {
            observer.file_started(job, file);
            let failures_before = result.failures.len();
            orchestrator.process_file(file, &mut result);
            if let Some(failure) = result.failures.get(failures_before) {
                observer.file_failed(job, file, &failure.message);
            }
        }

        let status = if job.action == JobAction::Merge && result.has_failures() {
            JobStatus::Failed(format!("{} file(s) could not be read", result.failures.len()))
        } else {
            match write_output(&output_path, &result.output) {
                Ok(()) => JobStatus::Written,
                Err(e) => JobStatus::Failed(e.to_string()),
            }
        };

        match &status {
            JobStatus::Written => {
                info!(job = %job.name, output = %output_path.display(), bytes = result.size_after, "job written");
                observer.job_written(job, &output_path);
            }
            JobStatus::Failed(reason) => {
                error!(job = %job.name, output = %output_path.display(), %reason, "job failed");
                observer.job_failed(job, &output_path, reason);
            }
        }

        JobOutcome {
            name: job.name.clone(),
            action: job.action,
            output_path,
            result,
            status,
        }
    }
}

fn write_output(path: &Path, output: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, output)
}
