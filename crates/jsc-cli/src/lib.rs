//! # jsc-cli
//!
//! Command-line front end for the JavaScript compactor.
//!
//! Inputs are selected by exactly one of `--input a.js,b.js`, `--directory
//! DIR [--recursive]` or `--batch jobs.json`. Without `--output` the result
//! goes to stdout; diagnostics always go to stderr.

pub mod report;

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use jsc_compactor::{BatchMerger, Orchestrator};
use jsc_core::source::resolve_inputs;
use jsc_core::{job, CompileConfig, InputSelection, Mode};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Compile Javascript files.
#[derive(Debug, Parser)]
#[command(name = "jscompiler", version, about, long_about = None)]
#[command(after_help = "Caution: Javascript syntax is not checked")]
#[command(group(ArgGroup::new("source").required(true).args(["input", "directory", "batch"])))]
pub struct Cli {
    /// Input files, comma separated (eg: file1,file2).
    #[arg(short, long, value_name = "COMMA_SEPARATED_FILES", value_delimiter = ',')]
    pub input: Vec<PathBuf>,

    /// Output file. An existing file is overwritten.
    #[arg(short, long, value_name = "OUTPUTFILE", conflicts_with = "batch")]
    pub output: Option<PathBuf>,

    /// Compile every .js file of a directory.
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Descend into subdirectories of --directory.
    #[arg(short, long, requires = "directory")]
    pub recursive: bool,

    /// Print sizes before and after compilation on stderr.
    #[arg(short, long)]
    pub show_infos: bool,

    /// JSON batch description; one output file per job.
    #[arg(short = 'f', long, visible_alias = "makefile", value_name = "BATCH_FILE")]
    pub batch: Option<PathBuf>,

    /// Trace every pass on stderr.
    #[arg(short, long)]
    pub verbose: bool,

    /// Simply merge files without compiling (useful for minified libraries).
    #[arg(short, long, visible_alias = "join", short_alias = 'j', conflicts_with = "batch")]
    pub merge: bool,

    /// Extension of the files written by batch jobs.
    #[arg(long, default_value = "js")]
    pub extension: String,
}

impl Cli {
    /// Settings handed to the orchestrator and the batch merger.
    pub fn config(&self) -> CompileConfig {
        CompileConfig {
            mode: if self.merge { Mode::MergeOnly } else { Mode::Compact },
            output_extension: self.extension.trim_start_matches('.').to_string(),
        }
    }

    /// Input selection for a single run, `None` in batch mode.
    pub fn selection(&self) -> Option<InputSelection> {
        if let Some(root) = &self.directory {
            return Some(InputSelection::Directory {
                root: root.clone(),
                recursive: self.recursive,
            });
        }
        if self.batch.is_some() {
            return None;
        }
        Some(InputSelection::Files(self.input.clone()))
    }

    /// Log filter used when `RUST_LOG` is unset.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}

/// Execute the parsed command line.
pub fn run(cli: &Cli) -> Result<()> {
    let config = cli.config();
    match &cli.batch {
        Some(path) => run_batch(cli, &config, path),
        None => {
            let selection = cli.selection().context("no input selected")?;
            run_single(cli, &config, &selection)
        }
    }
}

fn run_single(cli: &Cli, config: &CompileConfig, selection: &InputSelection) -> Result<()> {
    let files = resolve_inputs(selection)?;
    info!(files = files.len(), mode = ?config.mode, "compiling");
    let result = Orchestrator::new(config).process_files(&files);

    match &cli.output {
        Some(path) => std::fs::write(path, &result.output)
            .with_context(|| format!("cannot write {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(result.output.as_bytes())?;
            stdout.flush()?;
        }
    }

    if cli.show_infos {
        report::print_stats(result.size_before, result.size_after);
    }
    Ok(())
}

fn run_batch(cli: &Cli, config: &CompileConfig, path: &std::path::Path) -> Result<()> {
    let jobs = job::load_batch(path)
        .with_context(|| format!("cannot use batch file {}", path.display()))?;
    info!(jobs = jobs.len(), "running batch");

    let mut observer = report::ConsoleObserver;
    let report = BatchMerger::new(config).run(&jobs, &mut observer);

    if cli.show_infos {
        report::print_stats(report.size_before(), report.size_after());
    }
    Ok(())
}
