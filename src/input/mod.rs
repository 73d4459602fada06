use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Could not read {path}: {message}")]
    Read { path: PathBuf, message: String },

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Source is empty: {0}")]
    Empty(String),
}

/// Raw request text pulled from a file or the clipboard.
pub struct LoadedInput {
    pub text: String,
    pub source: String,
}

pub mod clipboard;
pub mod file;
pub mod payload;

pub use payload::{InputError, Request};
