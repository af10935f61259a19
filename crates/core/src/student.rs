//! Student record types.
//!
//! [`StudentFields`] is the raw, unvalidated input of the form (or of one
//! import element). [`StudentRecord`] is what the roster stores once every
//! field has passed validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{StudentId, Timestamp};

// ---------------------------------------------------------------------------
// Field names
// ---------------------------------------------------------------------------

/// One of the seven user-entered fields of a student record.
///
/// Serialized with the camelCase wire names used by the import/export files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Code,
    EntryDate,
    Address,
    Landline,
    Mobile,
    Email,
}

impl Field {
    /// Every field, in form order.
    pub const ALL: [Field; 7] = [
        Field::Name,
        Field::Code,
        Field::EntryDate,
        Field::Address,
        Field::Landline,
        Field::Mobile,
        Field::Email,
    ];

    /// Wire name matching serde's `rename_all = "camelCase"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Code => "code",
            Self::EntryDate => "entryDate",
            Self::Address => "address",
            Self::Landline => "landline",
            Self::Mobile => "mobile",
            Self::Email => "email",
        }
    }

    /// Look a field up by its wire name. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == name)
    }

    /// Position of the field in [`Field::ALL`].
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Raw input
// ---------------------------------------------------------------------------

/// The seven raw string values of a registration candidate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentFields {
    pub name: String,
    pub code: String,
    pub entry_date: String,
    pub address: String,
    pub landline: String,
    pub mobile: String,
    pub email: String,
}

impl StudentFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Code => &self.code,
            Field::EntryDate => &self.entry_date,
            Field::Address => &self.address,
            Field::Landline => &self.landline,
            Field::Mobile => &self.mobile,
            Field::Email => &self.email,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Code => &mut self.code,
            Field::EntryDate => &mut self.entry_date,
            Field::Address => &mut self.address,
            Field::Landline => &mut self.landline,
            Field::Mobile => &mut self.mobile,
            Field::Email => &mut self.email,
        };
        *slot = value.into();
    }
}

// ---------------------------------------------------------------------------
// Stored record
// ---------------------------------------------------------------------------

/// A registered student.
///
/// Serializes as a flat JSON object: `id`, the seven camelCase fields, then
/// an RFC 3339 `timestamp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: StudentId,
    #[serde(flatten)]
    pub fields: StudentFields,
    pub timestamp: Timestamp,
}

impl StudentRecord {
    pub fn code(&self) -> &str {
        &self.fields.code
    }
}

/// Generate a fresh, time-ordered student identifier.
pub fn new_student_id() -> StudentId {
    uuid::Uuid::now_v7().to_string()
}

/// Render a `YYYY-MM-DD` entry date as `DD/MM/YYYY`.
///
/// Values that are not a real calendar date are returned unchanged.
pub fn format_entry_date(entry_date: &str) -> String {
    match NaiveDate::parse_from_str(entry_date, "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => entry_date.to_string(),
    }
}
