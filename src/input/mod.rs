use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Could not read {0}: {1}")]
    Read(PathBuf, String),

    #[error("Malformed {0}: {1}")]
    Parse(PathBuf, String),

    #[error("File is empty: {0}")]
    EmptyFile(PathBuf),

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

/// Text handed to the pipeline together with where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedText {
    pub text: String,
    pub source: String,
}

/// Load a plain-text draft.
///
/// Whitespace-only files are rejected here so the user gets a message
/// instead of an empty report.
pub fn load_file(path: &str) -> Result<LoadedText, LoadError> {
    let path = Path::new(path);

    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let text = std::fs::read_to_string(path)
        .map_err(|e| LoadError::Read(path.to_path_buf(), e.to_string()))?;

    if text.trim().is_empty() {
        return Err(LoadError::EmptyFile(path.to_path_buf()));
    }

    Ok(LoadedText {
        text,
        source: format!("file:{}", path.display()),
    })
}

pub mod clipboard;
