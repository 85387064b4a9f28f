use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JscError {
    #[error("{} does not exist", path.display())]
    DirectoryNotFound { path: PathBuf },
    #[error("{} is not a directory", path.display())]
    NotADirectory { path: PathBuf },
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}: file is not valid UTF-8", path.display())]
    InvalidEncoding { path: PathBuf },
    #[error("Directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Invalid batch description: {0}")]
    InvalidBatch(String),
    #[error("Job '{job}' has no files defined")]
    MissingJobFiles { job: String },
    #[error("Unknown action '{action}' for job '{job}'")]
    UnknownAction { job: String, action: String },
    #[error("Invalid job name '{job}': names cannot contain path separators")]
    InvalidJobName { job: String },
}

impl JscError {
    /// Build an I/O error tagged with the path that caused it.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, JscError>;
