//! The in-memory roster of registered students.
//!
//! Insertion order is preserved and deletion removes in place. The roster is
//! the only owner of its records; student codes are unique across it.

use chrono::Utc;
use serde_json::Value;

use crate::error::CoreError;
use crate::export;
use crate::import::{merge_batch, ImportSummary};
use crate::student::{new_student_id, StudentFields, StudentRecord};
use crate::validation::validate_all;

#[derive(Debug, Clone, Default)]
pub struct Roster {
    records: Vec<StudentRecord>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&StudentRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn contains_code(&self, code: &str) -> bool {
        self.records.iter().any(|r| r.code() == code)
    }

    /// Validate and append a new student.
    ///
    /// All fields are validated before the uniqueness check; the roster is
    /// untouched on any error.
    pub fn add(&mut self, fields: StudentFields) -> Result<&StudentRecord, CoreError> {
        let result = validate_all(&fields);
        if !result.is_valid {
            return Err(CoreError::Validation(result));
        }
        if self.contains_code(&fields.code) {
            return Err(CoreError::DuplicateCode { code: fields.code });
        }

        let index = self.records.len();
        self.records.push(StudentRecord {
            id: new_student_id(),
            fields,
            timestamp: Utc::now(),
        });
        Ok(&self.records[index])
    }

    /// Remove a student by id. Unknown ids are a no-op.
    pub fn delete(&mut self, id: &str) -> Option<StudentRecord> {
        let index = self.records.iter().position(|r| r.id == id)?;
        Some(self.records.remove(index))
    }

    /// Replace every field of an existing student, keeping its id,
    /// timestamp, and position.
    pub fn replace(&mut self, id: &str, fields: StudentFields) -> Result<&StudentRecord, CoreError> {
        let index = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| CoreError::NotFound {
                entity: "Student",
                id: id.to_string(),
            })?;

        let result = validate_all(&fields);
        if !result.is_valid {
            return Err(CoreError::Validation(result));
        }
        let taken = self
            .records
            .iter()
            .enumerate()
            .any(|(i, r)| i != index && r.code() == fields.code);
        if taken {
            return Err(CoreError::DuplicateCode { code: fields.code });
        }

        self.records[index].fields = fields;
        Ok(&self.records[index])
    }

    /// Merge a parsed import payload.
    ///
    /// Either every accepted element is appended (in input order) or, when
    /// nothing was accepted, the roster is left as it was.
    pub fn import(&mut self, parsed: &Value) -> Result<ImportSummary, CoreError> {
        let batch = merge_batch(&self.records, parsed, Utc::now())?;
        if batch.accepted.is_empty() {
            return Err(CoreError::NothingImported {
                invalid: batch.invalid,
                duplicate: batch.duplicate,
            });
        }

        let summary = ImportSummary {
            imported: batch.accepted.len(),
            invalid: batch.invalid,
            duplicate: batch.duplicate,
        };
        self.records.extend(batch.accepted);
        Ok(summary)
    }

    /// Pretty-printed JSON array of every record.
    pub fn export_json(&self) -> Result<String, CoreError> {
        export::to_json(&self.records)
    }
}
