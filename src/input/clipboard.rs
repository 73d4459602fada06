use super::{LoadError, LoadedInput};
use arboard::Clipboard;
use tracing::info;

/// Read the system clipboard as request text.
pub fn load() -> Result<LoadedInput, LoadError> {
    let mut clipboard = Clipboard::new().map_err(|e| LoadError::Clipboard(e.to_string()))?;
    let text = clipboard
        .get_text()
        .map_err(|e| LoadError::Clipboard(e.to_string()))?;

    from_text(text)
}

fn from_text(text: String) -> Result<LoadedInput, LoadError> {
    if text.trim().is_empty() {
        return Err(LoadError::Empty("clipboard".to_string()));
    }

    info!("Loaded {} bytes from clipboard", text.len());

    Ok(LoadedInput {
        text: text.trim().to_string(),
        source: "clipboard".to_string(),
    })
}
