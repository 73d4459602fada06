use crate::engine::config::ConfigError;
use crate::input::{InputError, LoadError};
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TallyError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Could not encode response: {0}")]
    Encode(#[from] serde_json::Error),
}
