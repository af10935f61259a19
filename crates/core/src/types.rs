/// Student identifiers are opaque strings (generated ones are UUID v7).
pub type StudentId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
