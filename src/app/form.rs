use crate::engine::{filter_response, ClassificationResult, Field, PartialResult};
use std::collections::BTreeSet;

/// Multi-select state plus the last successful result.
pub struct FormState {
    pub selected: BTreeSet<Field>,
    pub cursor: usize,
    pub last_result: Option<ClassificationResult>,
}

impl FormState {
    pub fn new(default_fields: &[Field]) -> Self {
        Self {
            selected: default_fields.iter().copied().collect(),
            cursor: 0,
            last_result: None,
        }
    }

    pub fn highlighted(&self) -> Field {
        Field::ALL[self.cursor]
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.cursor < Field::ALL.len() - 1 {
            self.cursor += 1;
        }
    }

    pub fn toggle_highlighted(&mut self) {
        let field = self.highlighted();
        if !self.selected.remove(&field) {
            self.selected.insert(field);
        }
    }

    pub fn is_selected(&self, field: Field) -> bool {
        self.selected.contains(&field)
    }

    /// Filtered view of the last result under the current selection.
    pub fn filtered(&self) -> Option<PartialResult> {
        self.last_result
            .as_ref()
            .map(|result| filter_response(result, &self.selected))
    }
}
