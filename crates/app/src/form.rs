//! Registration form state: current input values and inline errors.

use std::collections::BTreeMap;

use registro_core::student::{Field, StudentFields};
use registro_core::validation::validate;

#[derive(Debug, Clone, Default)]
pub struct FormState {
    values: StudentFields,
    errors: BTreeMap<Field, String>,
}

impl FormState {
    pub fn values(&self) -> &StudentFields {
        &self.values
    }

    pub fn errors(&self) -> &BTreeMap<Field, String> {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Store a new value and re-validate that field only.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values.set(field, value);
        match validate(field, self.values.get(field)) {
            Ok(()) => {
                self.errors.remove(&field);
            }
            Err(violation) => {
                self.errors.insert(field, violation.message);
            }
        }
    }

    /// Replace every inline error at once (after a submit attempt).
    pub fn set_errors(&mut self, errors: BTreeMap<Field, String>) {
        self.errors = errors;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
