//! Validation rule table and result types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::student::Field;

/// Message for any field left empty.
pub const REQUIRED_MESSAGE: &str = "Este campo es obligatorio";

/// Message attached to `code` when another student already holds it.
pub const DUPLICATE_CODE_MESSAGE: &str = "Este código de estudiante ya existe";

/// Pattern and mismatch message for one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub field: Field,
    pub pattern: &'static str,
    pub message: &'static str,
}

/// One rule per field, in [`Field::ALL`] order.
///
/// Digits are spelled `[0-9]` because `\d` matches any Unicode digit.
pub const FIELD_RULES: [FieldRule; 7] = [
    FieldRule {
        field: Field::Name,
        pattern: r"^[\p{L}\s]+$",
        message: "El nombre solo debe contener letras y espacios",
    },
    FieldRule {
        field: Field::Code,
        pattern: r"^[1-9][0-9]{7}$",
        message: "El código debe tener 8 dígitos y no empezar con 0",
    },
    FieldRule {
        field: Field::EntryDate,
        pattern: r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$",
        message: "La fecha debe tener formato YYYY-MM-DD",
    },
    FieldRule {
        field: Field::Address,
        pattern: r"^[\p{L}0-9\s\-.,#]+$",
        message: "La dirección contiene caracteres no permitidos",
    },
    FieldRule {
        field: Field::Landline,
        pattern: r"^6056[0-9]{6}$",
        message: "El teléfono fijo debe tener 10 dígitos y empezar con 6056",
    },
    FieldRule {
        field: Field::Mobile,
        pattern: r"^3[0-9]{9}$",
        message: "El teléfono celular debe tener 10 dígitos y empezar con 3",
    },
    FieldRule {
        field: Field::Email,
        pattern: r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$",
        message: "Ingrese un correo electrónico válido",
    },
];

/// The rule governing `field`.
pub fn rule_for(field: Field) -> &'static FieldRule {
    &FIELD_RULES[field.index()]
}

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    Required,
    Pattern,
}

/// A single field-level rule violation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: Field,
    pub kind: ViolationKind,
    pub message: String,
}

/// Aggregated result of validating every field of one candidate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<FieldViolation>,
}

impl ValidationResult {
    pub fn from_errors(errors: Vec<FieldViolation>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    pub fn error_for(&self, field: Field) -> Option<&FieldViolation> {
        self.errors.iter().find(|e| e.field == field)
    }

    /// Messages keyed by field, for inline display.
    pub fn messages(&self) -> BTreeMap<Field, String> {
        self.errors
            .iter()
            .map(|e| (e.field, e.message.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_in_field_order() {
        for (rule, field) in FIELD_RULES.iter().zip(Field::ALL) {
            assert_eq!(rule.field, field);
            assert_eq!(rule_for(field).field, field);
        }
    }

    #[test]
    fn messages_are_distinct() {
        let mut seen: Vec<&str> = FIELD_RULES.iter().map(|r| r.message).collect();
        seen.push(REQUIRED_MESSAGE);
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), FIELD_RULES.len() + 1);
    }

    #[test]
    fn empty_error_list_is_valid() {
        let result = ValidationResult::from_errors(Vec::new());
        assert!(result.is_valid);
        assert!(result.messages().is_empty());
    }
}
