//! Rule evaluator — pure logic over [`FIELD_RULES`].

use std::sync::LazyLock;

use regex::Regex;

use super::rules::{
    rule_for, FieldViolation, ValidationResult, ViolationKind, FIELD_RULES, REQUIRED_MESSAGE,
};
use crate::student::{Field, StudentFields};

/// Compiled patterns, indexed like [`FIELD_RULES`].
static COMPILED_RULES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    FIELD_RULES
        .iter()
        .map(|rule| Regex::new(rule.pattern).expect("valid regex"))
        .collect()
});

/// Validate one raw value. The value is not trimmed.
pub fn validate(field: Field, raw: &str) -> Result<(), FieldViolation> {
    if raw.is_empty() {
        return Err(FieldViolation {
            field,
            kind: ViolationKind::Required,
            message: REQUIRED_MESSAGE.to_string(),
        });
    }

    if COMPILED_RULES[field.index()].is_match(raw) {
        Ok(())
    } else {
        Err(FieldViolation {
            field,
            kind: ViolationKind::Pattern,
            message: rule_for(field).message.to_string(),
        })
    }
}

/// Validate all seven fields. Every field is checked; nothing short-circuits.
pub fn validate_all(fields: &StudentFields) -> ValidationResult {
    let errors = Field::ALL
        .into_iter()
        .filter_map(|field| validate(field, fields.get(field)).err())
        .collect();
    ValidationResult::from_errors(errors)
}
