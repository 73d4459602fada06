use crate::app::mode::AppMode;
use crate::app::toast::ToastKind;
use crate::engine::Field;

/// Snapshot of everything the UI draws in one frame
pub struct RenderState {
    pub mode: AppMode,
    pub input: String,
    pub input_cursor: usize,
    pub command: String,
    pub command_cursor: usize,
    pub fields: Vec<(Field, bool)>,
    pub field_cursor: usize,
    /// Pretty-printed filtered response of the last successful submission
    pub output: Option<String>,
    pub toast: Option<(ToastKind, String)>,
}

impl RenderState {
    /// Render state for a fresh form with nothing submitted yet
    pub fn empty(mode: AppMode) -> Self {
        Self {
            mode,
            input: String::new(),
            input_cursor: 0,
            command: String::new(),
            command_cursor: 0,
            fields: Field::ALL.iter().map(|&field| (field, false)).collect(),
            field_cursor: 0,
            output: None,
            toast: None,
        }
    }
}
