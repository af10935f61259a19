//! Batch import of student records from parsed JSON.
//!
//! [`merge_batch`] is pure: it sees the existing roster and a parsed JSON
//! value and decides, element by element, what would be accepted. Applying
//! the result is left to [`crate::roster::Roster::import`].

use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::{Map, Value};

use crate::error::{CoreError, ImportFormatError};
use crate::student::{new_student_id, Field, StudentFields, StudentRecord};
use crate::types::Timestamp;
use crate::validation::validate;

/// Outcome of evaluating one import payload against a roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportBatch {
    /// Records that passed every check, in input order.
    pub accepted: Vec<StudentRecord>,
    /// Elements missing a field or failing validation.
    pub invalid: usize,
    /// Elements whose code was already taken.
    pub duplicate: usize,
}

/// Counts reported after a successful import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: usize,
    pub invalid: usize,
    pub duplicate: usize,
}

/// Parse import file contents. Syntax errors reject the whole file.
///
/// A leading byte-order mark is skipped.
pub fn parse_import(text: &str) -> Result<Value, CoreError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    serde_json::from_str(text)
        .map_err(|e| CoreError::ImportFormat(ImportFormatError::Malformed(e.to_string())))
}

/// Evaluate every element of `parsed` against `existing`.
///
/// Fails only when `parsed` is not an array. A code counts as taken if it is
/// already in `existing` or was accepted earlier in the same batch.
pub fn merge_batch(
    existing: &[StudentRecord],
    parsed: &Value,
    now: Timestamp,
) -> Result<ImportBatch, CoreError> {
    let elements = parsed.as_array().ok_or(ImportFormatError::NotAList)?;

    let mut seen_codes: HashSet<String> = existing.iter().map(|r| r.code().to_string()).collect();
    let mut batch = ImportBatch {
        accepted: Vec::new(),
        invalid: 0,
        duplicate: 0,
    };

    for element in elements {
        let Some(object) = element.as_object() else {
            batch.invalid += 1;
            continue;
        };
        let Some(fields) = extract_fields(object) else {
            batch.invalid += 1;
            continue;
        };

        if Field::ALL
            .into_iter()
            .any(|field| validate(field, fields.get(field)).is_err())
        {
            batch.invalid += 1;
            continue;
        }

        if seen_codes.contains(&fields.code) {
            batch.duplicate += 1;
            continue;
        }

        seen_codes.insert(fields.code.clone());
        batch.accepted.push(StudentRecord {
            id: supplied_id(object).unwrap_or_else(new_student_id),
            timestamp: object.get("timestamp").and_then(parse_timestamp).unwrap_or(now),
            fields,
        });
    }

    Ok(batch)
}

/// Pull the seven fields out of an element. Absent or non-string values
/// make the whole element unusable.
fn extract_fields(object: &Map<String, Value>) -> Option<StudentFields> {
    let mut fields = StudentFields::default();
    for field in Field::ALL {
        let value = object.get(field.as_str())?.as_str()?;
        fields.set(field, value);
    }
    Some(fields)
}

fn supplied_id(object: &Map<String, Value>) -> Option<String> {
    object
        .get("id")
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
        .map(str::to_owned)
}

/// Accepts RFC 3339, a naive date-time (taken as UTC), or a bare date
/// (midnight UTC).
fn parse_timestamp(value: &Value) -> Option<Timestamp> {
    let raw = value.as_str()?;
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = raw.parse::<NaiveDateTime>() {
        return Some(naive.and_utc());
    }
    raw.parse::<NaiveDate>()
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
