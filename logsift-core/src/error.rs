use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiftError {
    #[error("No log file provided")]
    EmptyInputPath,
    #[error("File '{}' not found", path.display())]
    FileNotFound { path: PathBuf },
    #[error("Permission denied to read '{}'", path.display())]
    PermissionDenied { path: PathBuf },
    #[error("Failed to open '{}'", path.display())]
    Open { path: PathBuf, source: io::Error },
    #[error("Failed to read '{}'", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("Failed to create output directory '{}'", path.display())]
    CreateOutputDir { path: PathBuf, source: io::Error },
    #[error("Failed to write '{}'", path.display())]
    WriteOutput { path: PathBuf, source: io::Error },
    #[error("Failed to write report")]
    Console(#[from] io::Error),
    #[error("Failed to read the log file path from input")]
    Prompt(#[source] io::Error),
    #[error("Invalid configuration '{}': {message}", path.display())]
    Config { path: PathBuf, message: String },
    #[error("Failed to render JSON report")]
    Json(#[from] serde_json::Error),
}

impl SiftError {
    /// Maps a failed `File::open` on the input log to the matching fatal variant.
    pub fn from_open(path: &Path, err: io::Error) -> Self {
        let path = path.to_path_buf();
        match err.kind() {
            io::ErrorKind::NotFound => SiftError::FileNotFound { path },
            io::ErrorKind::PermissionDenied => SiftError::PermissionDenied { path },
            _ => SiftError::Open { path, source: err },
        }
    }
}
