//! Error body shapes returned by the HTTP surface.

use std::collections::BTreeMap;

use blog_core::FieldError;
use serde::{Deserialize, Serialize};

/// Simple error body: `{"error": "<message>"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Validation error body: field-keyed arrays of messages.
///
/// `{"errors": {"content": ["The content field must be at least 10 characters."]}}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationErrorBody {
    pub errors: BTreeMap<String, Vec<String>>,
}

impl ValidationErrorBody {
    pub fn from_fields(fields: &[FieldError]) -> Self {
        let mut errors: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for err in fields {
            errors
                .entry(err.field.to_string())
                .or_default()
                .push(err.message.clone());
        }
        Self { errors }
    }
}
