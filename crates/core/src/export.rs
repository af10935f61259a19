//! JSON export of the roster.

use chrono::NaiveDate;

use crate::error::CoreError;
use crate::student::StudentRecord;

/// Prefix of every exported file name.
pub const EXPORT_FILE_PREFIX: &str = "estudiantes_registrados_";

/// `estudiantes_registrados_<YYYY-MM-DD>.json`
pub fn export_file_name(date: NaiveDate) -> String {
    format!("{EXPORT_FILE_PREFIX}{}.json", date.format("%Y-%m-%d"))
}

/// Serialize records as a pretty-printed JSON array (two-space indent).
pub fn to_json(records: &[StudentRecord]) -> Result<String, CoreError> {
    Ok(serde_json::to_string_pretty(records)?)
}
