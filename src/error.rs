use crate::storage::StorageError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("The directory '{}' was not found.", .0.display())]
    DirectoryNotFound(PathBuf),
    #[error("{0}")]
    Storage(#[from] StorageError),
    #[error("Invalid object URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("Path {0:?} has no file name")]
    MissingFileName(PathBuf),
}
