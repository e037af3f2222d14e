use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum PathTreeError {
    #[error("Empty path")]
    EmptyPath,
    #[error("Invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: &'static str },
    #[error("Invalid exclude pattern: {0}")]
    Pattern(String),
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
impl PathTreeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PathTreeError::Io {
            path: path.into(),
            source,
        }
    }
    pub(crate) fn invalid(path: &str, reason: &'static str) -> Self {
        PathTreeError::InvalidPath {
            path: path.to_string(),
            reason,
        }
    }
}
