use std::collections::BTreeMap;

use crate::student::Field;
use crate::types::StudentId;
use crate::validation::rules::{ValidationResult, DUPLICATE_CODE_MESSAGE};

/// Whole-file rejection of an import payload.
#[derive(Debug, thiserror::Error)]
pub enum ImportFormatError {
    #[error("Malformed JSON: {0}")]
    Malformed(String),

    #[error("Top-level JSON value is not a list of students")]
    NotAList,
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed on {} field(s)", .0.errors.len())]
    Validation(ValidationResult),

    #[error("Student code {code} already exists")]
    DuplicateCode { code: String },

    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: StudentId },

    #[error("Import rejected: {0}")]
    ImportFormat(#[from] ImportFormatError),

    #[error("No students imported: {invalid} invalid, {duplicate} duplicate")]
    NothingImported { invalid: usize, duplicate: usize },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CoreError {
    /// Inline per-field messages for errors that belong next to an input.
    ///
    /// Returns `None` for errors that are reported as a banner instead.
    pub fn field_errors(&self) -> Option<BTreeMap<Field, String>> {
        match self {
            Self::Validation(result) => Some(result.messages()),
            Self::DuplicateCode { .. } => Some(BTreeMap::from([(
                Field::Code,
                DUPLICATE_CODE_MESSAGE.to_string(),
            )])),
            _ => None,
        }
    }
}
