pub mod memory;
pub mod txt;

use crate::domain::contact::Contact;
use crate::errors::AppError;
use std::fs;
use std::path::Path;

pub use memory::MemStore;
pub use txt::{DEFAULT_STORAGE_PATH, TxtStore};

/// One raw store line, without its terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLine {
    Text(String),
    /// Bytes that are not UTF-8, decoded lossily for reporting.
    Undecodable(String),
}

impl StoreLine {
    pub fn from_bytes(mut bytes: Vec<u8>) -> Self {
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }
        match String::from_utf8(bytes) {
            Ok(text) => StoreLine::Text(text),
            Err(e) => StoreLine::Undecodable(String::from_utf8_lossy(e.as_bytes()).into_owned()),
        }
    }
}

impl From<&str> for StoreLine {
    fn from(text: &str) -> Self {
        StoreLine::Text(text.to_string())
    }
}

/// Append-only line storage for contacts.
pub trait ContactStore {
    fn append(&mut self, contact: &Contact) -> Result<(), AppError>;

    /// Every line of the store in order. A line that is not valid UTF-8 does
    /// not fail the read. A store that does not exist yet yields
    /// `AppError::StoreNotFound`.
    fn read_lines(&self) -> Result<Vec<StoreLine>, AppError>;

    fn location(&self) -> &Path;
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
