use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the filesystem helpers in `fs_op`.
#[derive(Error, Debug)]
pub enum FsOpError {
    /// Wrapper for underlying IO errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error tied to a specific path.
    #[error("filesystem operation on `{path}` failed: {msg}")]
    PathContext { path: PathBuf, msg: String },
}

impl FsOpError {
    /// Attach `path` to an IO error so the caller can tell which entry failed.
    pub fn at(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        FsOpError::PathContext {
            path: path.into(),
            msg: err.to_string(),
        }
    }
}
