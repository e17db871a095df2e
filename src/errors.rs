use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error while accessing a file or resource: {0}")]
    Io(#[from] std::io::Error),

    #[error("file does not exist. {}", .path.display())]
    StoreNotFound { path: PathBuf },

    #[error("Invalid line format in file: {0}")]
    MalformedLine(String),

    #[error("Unrecognized command: '{0}'")]
    ParseCommand(String),

    #[error("Invalid number format: {0}")]
    ParseInt(#[from] std::num::ParseIntError),

    #[error("End of input")]
    EndOfInput,
}

impl AppError {
    pub fn store_not_found(path: impl Into<PathBuf>) -> Self {
        AppError::StoreNotFound { path: path.into() }
    }

    pub fn is_store_not_found(&self) -> bool {
        matches!(self, AppError::StoreNotFound { .. })
    }
}
