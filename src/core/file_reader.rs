//! File reading for the `contents` format
//!
//! Content is read fully into memory and the handle dropped right away.
//! Non-UTF-8 bytes are converted lossily and flagged with a warning.

use std::fs;
use std::io::Read;
use std::path::Path;

/// Warning codes for file operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningCode {
    /// File could not be opened or read; it was skipped
    FileUnreadable,
    /// Lossy encoding conversion used
    LossyConversion,
}

impl WarningCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningCode::FileUnreadable => "FILE_UNREADABLE",
            WarningCode::LossyConversion => "LOSSY_CONVERSION",
        }
    }
}

/// A structured, non-fatal warning about one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileWarning {
    pub code: WarningCode,
    pub message: String,
    pub path: String,
}

impl FileWarning {
    pub fn new(code: WarningCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: path.into(),
        }
    }
}

/// Content of one file plus how it was decoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileContent {
    pub text: String,
    pub lossy: bool,
}

/// Read a whole file as text
pub fn read_file(path: &Path) -> std::io::Result<FileContent> {
    let bytes = read_file_bytes(path)?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(FileContent { text, lossy: false }),
        Err(err) => Ok(FileContent {
            text: String::from_utf8_lossy(err.as_bytes()).into_owned(),
            lossy: true,
        }),
    }
}

fn read_file_bytes(path: &Path) -> std::io::Result<Vec<u8>> {
    let mut file = fs::File::open(path)?;
    let capacity = file.metadata().map(|m| m.len() as usize).unwrap_or(0);
    let mut buffer = Vec::with_capacity(capacity);
    file.read_to_end(&mut buffer)?;
    Ok(buffer)
}
