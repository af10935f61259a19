//! Field validation for student registration.
//!
//! Provides the static per-field rule table and a pure evaluator over it,
//! with no dependency on the roster or any UI.

pub mod evaluator;
pub mod rules;

pub use evaluator::{validate, validate_all};
pub use rules::{FieldRule, FieldViolation, ValidationResult, ViolationKind, FIELD_RULES};
