use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadingError {
    #[error("Failed to read {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },

    #[error("Failed to walk the bank directory: {0}")]
    WalkDir(#[from] async_walkdir::Error),

    #[error("No such bank file: {0}")]
    NotFound(PathBuf),
}

impl LoadingError {
    pub(crate) fn read(path: &Path, source: std::io::Error) -> Self {
        Self::Read {
            path: path.to_path_buf(),
            source,
        }
    }
}
