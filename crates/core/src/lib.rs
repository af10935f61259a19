//! Domain core for the student registration form.
//!
//! Field validation, the in-memory roster, and JSON import/export. Nothing in
//! this crate performs I/O or logging; the `registro-app` crate owns both.

pub mod error;
pub mod export;
pub mod import;
pub mod roster;
pub mod student;
pub mod types;
pub mod validation;
