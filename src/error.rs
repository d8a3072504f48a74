//! Error taxonomy for dedup operations.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while deduplicating or generating corpora.
#[derive(Error, Debug)]
pub enum DedupError {
    #[error("input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("output file already exists: {} (use --force to overwrite)", .0.display())]
    OutputExists(PathBuf),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, DedupError>;

/// Map an open/create failure to the typed variant for its path.
///
/// NotFound and PermissionDenied get their own variants so the CLI can
/// report them distinctly; everything else stays a generic I/O error.
pub fn open_error(path: &Path, err: io::Error) -> DedupError {
    match err.kind() {
        io::ErrorKind::NotFound => DedupError::InputNotFound(path.to_path_buf()),
        io::ErrorKind::PermissionDenied => DedupError::PermissionDenied(path.to_path_buf()),
        _ => DedupError::Io(err),
    }
}
