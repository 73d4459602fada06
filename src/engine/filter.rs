use crate::engine::classifier::ClassificationResult;
use crate::engine::field::Field;
use serde::Serialize;
use std::collections::BTreeSet;

/// Projection of a [`ClassificationResult`] onto the selected fields.
///
/// `is_success` and `user_id` are always present; unselected fields are
/// left out of the serialized form instead of being written as null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartialResult {
    pub is_success: bool,
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numbers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alphabets: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highest_alphabet: Option<Vec<String>>,
}

impl PartialResult {
    fn slot(&mut self, field: Field) -> &mut Option<Vec<String>> {
        match field {
            Field::Numbers => &mut self.numbers,
            Field::Alphabets => &mut self.alphabets,
            Field::HighestAlphabet => &mut self.highest_alphabet,
        }
    }
}

/// Selected fields are copied even when empty (`"alphabets": []`); only unselected fields are omitted.
pub fn filter_response(result: &ClassificationResult, selected: &BTreeSet<Field>) -> PartialResult {
    let mut partial = PartialResult {
        is_success: result.is_success,
        user_id: result.user_id.clone(),
        numbers: None,
        alphabets: None,
        highest_alphabet: None,
    };

    for &field in selected {
        *partial.slot(field) = Some(field.extract(result).to_vec());
    }

    partial
}
