/// Application events
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    Submit,
    Clear,
    LoadFile(String),
    LoadClipboard,
    Quit,
    Help,
    InvalidCommand(String),
}
