#![allow(dead_code)]

use std::path::Path;

use registro_app::config::{AppConfig, LogFormat};
use registro_app::state::AppState;
use registro_core::student::{Field, StudentFields};
use serde_json::{json, Value};

/// Build a test `AppConfig` exporting into `dir`.
pub fn test_config(dir: &Path) -> AppConfig {
    AppConfig {
        export_dir: dir.to_path_buf(),
        log_format: LogFormat::Text,
    }
}

pub fn test_state(dir: &Path) -> AppState {
    AppState::new(test_config(dir))
}

/// A candidate that passes every field rule.
pub fn valid_fields(code: &str) -> StudentFields {
    StudentFields {
        name: "Valentina Ríos".to_string(),
        code: code.to_string(),
        entry_date: "2024-08-12".to_string(),
        address: "Calle 84 # 45-120, Apto. 5B".to_string(),
        landline: "6056781234".to_string(),
        mobile: "3014567890".to_string(),
        email: "valentina.rios@example.edu.co".to_string(),
    }
}

/// Type a whole candidate into the form, field by field.
pub fn fill_form(state: &mut AppState, fields: &StudentFields) {
    for field in Field::ALL {
        state.handle_change(field, fields.get(field));
    }
}

/// One import element as it would appear in a file.
pub fn import_element(code: &str) -> Value {
    json!({
        "name": "Andrés Castillo",
        "code": code,
        "entryDate": "2023-01-30",
        "address": "Carrera 53 # 98-15",
        "landline": "6056112233",
        "mobile": "3209876543",
        "email": "andres.castillo@example.com"
    })
}
