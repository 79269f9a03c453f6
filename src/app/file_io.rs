use std::fs;

use super::error::{AppError, Result};

/// Read a whole file as text. Invalid UTF-8 counts as a read failure.
pub fn read_document(path: &str) -> Result<String> {
    fs::read_to_string(path).map_err(|source| AppError::Read {
        path: path.to_string(),
        source,
    })
}

/// Write `text` to `path`, creating or truncating the file.
/// The bytes on disk are exactly the bytes of `text`.
pub fn write_document(path: &str, text: &str) -> Result<()> {
    fs::write(path, text).map_err(|source| AppError::Write {
        path: path.to_string(),
        source,
    })
}
