//! File read/write for roster import and export.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use registro_core::export::export_file_name;
use registro_core::roster::Roster;

use crate::error::{AppError, AppResult};

/// Read an import file as UTF-8 text.
pub fn read_import_file(path: &Path) -> AppResult<String> {
    std::fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Write the roster to `<dir>/estudiantes_registrados_<date>.json`,
/// replacing any file of the same name.
pub fn write_export(dir: &Path, roster: &Roster, date: NaiveDate) -> AppResult<PathBuf> {
    let json = roster.export_json()?;
    let path = dir.join(export_file_name(date));
    std::fs::write(&path, json).map_err(|source| AppError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
