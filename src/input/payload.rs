//! JSON request parsing.
//!
//! A request is an object with a `data` array of strings. Everything else is
//! rejected before any classification runs.

use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Invalid input: {0}")]
    InvalidShape(String),
}

/// Tokens extracted from a well-formed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub data: Vec<String>,
}

impl Request {
    pub fn parse(text: &str) -> Result<Self, InputError> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| InputError::InvalidJson(e.to_string()))?;
        Self::from_value(&value)
    }

    pub fn from_value(value: &Value) -> Result<Self, InputError> {
        let object = value
            .as_object()
            .ok_or_else(|| InputError::InvalidShape("expected a JSON object".to_string()))?;
        let data = object
            .get("data")
            .ok_or_else(|| InputError::InvalidShape("missing \"data\" field".to_string()))?;
        Ok(Self {
            data: tokens_from_value(data)?,
        })
    }
}

/// Accepts only an array whose elements are all strings.
pub fn tokens_from_value(value: &Value) -> Result<Vec<String>, InputError> {
    let items = value
        .as_array()
        .ok_or_else(|| InputError::InvalidShape("\"data\" must be an array".to_string()))?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.as_str().map(str::to_string).ok_or_else(|| {
                InputError::InvalidShape(format!("\"data\"[{index}] is not a string"))
            })
        })
        .collect()
}
