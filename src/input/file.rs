use super::{LoadError, LoadedInput};
use std::path::Path;
use tracing::info;

/// Read a JSON request file into the form.
pub fn load(path: &str) -> Result<LoadedInput, LoadError> {
    let path = Path::new(path);

    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let text = std::fs::read_to_string(path).map_err(|e| LoadError::Read {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if text.trim().is_empty() {
        return Err(LoadError::Empty(path.display().to_string()));
    }

    info!("Loaded {} bytes from {}", text.len(), path.display());

    Ok(LoadedInput {
        text: text.trim_end().to_string(),
        source: format!("file:{}", path.display()),
    })
}
