use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::Utc;
use registro_core::error::CoreError;
use registro_core::import::{parse_import, ImportSummary};
use registro_core::roster::Roster;
use registro_core::student::{Field, StudentFields, StudentRecord};
use registro_core::types::StudentId;

use crate::banner::{self, Banner, READ_ERROR_MESSAGE};
use crate::config::AppConfig;
use crate::error::AppResult;
use crate::form::FormState;
use crate::transfer;

/// Everything the registration screen shows, owned by a single controller.
///
/// Mutated only through `&mut self`; every operation runs to completion.
#[derive(Debug)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    roster: Roster,
    form: FormState,
    banner: Option<Banner>,
    submitted: bool,
    expanded: Option<StudentId>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
            roster: Roster::new(),
            form: FormState::default(),
            banner: None,
            submitted: false,
            expanded: None,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    /// Whether the last submit registered a student.
    pub fn submitted(&self) -> bool {
        self.submitted
    }

    pub fn expanded(&self) -> Option<&str> {
        self.expanded.as_deref()
    }

    pub fn clear_banner(&mut self) {
        self.banner = None;
    }

    /// `N estudiante(s) registrado(s)`
    pub fn registered_label(&self) -> String {
        format!("{} estudiante(s) registrado(s)", self.roster.len())
    }

    // -- Form ---------------------------------------------------------------

    pub fn handle_change(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// Register the student currently in the form.
    ///
    /// On success the form is reset. On failure the input is kept and the
    /// inline errors are replaced by the ones from this attempt.
    pub fn handle_submit(&mut self) -> Result<StudentRecord, CoreError> {
        self.submitted = false;

        match self.roster.add(self.form.values().clone()) {
            Ok(record) => {
                let record = record.clone();
                tracing::info!(id = %record.id, code = %record.code(), "Student registered");
                self.form.reset();
                self.submitted = true;
                Ok(record)
            }
            Err(err) => {
                tracing::debug!(error = %err, "Submit rejected");
                if let Some(errors) = err.field_errors() {
                    self.form.set_errors(errors);
                }
                Err(err)
            }
        }
    }

    pub fn handle_delete(&mut self, id: &str) -> Option<StudentRecord> {
        let removed = self.roster.delete(id)?;
        tracing::info!(id = %removed.id, code = %removed.code(), "Student deleted");
        if self.expanded.as_deref() == Some(id) {
            self.expanded = None;
        }
        Some(removed)
    }

    /// Overwrite every field of a registered student, keeping its id and
    /// position in the roster.
    pub fn replace_student(
        &mut self,
        id: &str,
        fields: StudentFields,
    ) -> Result<StudentRecord, CoreError> {
        match self.roster.replace(id, fields) {
            Ok(record) => {
                tracing::info!(id = %record.id, code = %record.code(), "Student replaced");
                Ok(record.clone())
            }
            Err(err) => {
                tracing::debug!(error = %err, "Replace rejected");
                Err(err)
            }
        }
    }

    /// Expand a roster row, or collapse it if it is already expanded.
    pub fn toggle_expanded(&mut self, id: &str) {
        if self.expanded.as_deref() == Some(id) {
            self.expanded = None;
        } else {
            self.expanded = Some(id.to_string());
        }
    }

    // -- Import / export ----------------------------------------------------

    /// Import file contents, reporting the outcome in the banner.
    pub fn import_json(&mut self, text: &str) -> Result<ImportSummary, CoreError> {
        self.banner = None;

        let outcome = parse_import(text).and_then(|parsed| self.roster.import(&parsed));
        self.banner = Some(match &outcome {
            Ok(summary) => {
                tracing::info!(
                    imported = summary.imported,
                    invalid = summary.invalid,
                    duplicate = summary.duplicate,
                    "Students imported"
                );
                Banner::Success(banner::import_success_message(summary))
            }
            Err(err) => {
                tracing::warn!(error = %err, "Import rejected");
                Banner::Error(banner::import_error_message(err))
            }
        });
        outcome
    }

    pub fn import_file(&mut self, path: &Path) -> AppResult<ImportSummary> {
        self.banner = None;

        let text = match transfer::read_import_file(path) {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(error = %err, "Import file unreadable");
                self.banner = Some(Banner::Error(READ_ERROR_MESSAGE.to_string()));
                return Err(err);
            }
        };
        Ok(self.import_json(&text)?)
    }

    /// Write the roster into `dir`, named after today's UTC date.
    pub fn export_to_dir(&self, dir: &Path) -> AppResult<PathBuf> {
        let path = transfer::write_export(dir, &self.roster, Utc::now().date_naive())?;
        tracing::info!(path = %path.display(), students = self.roster.len(), "Roster exported");
        Ok(path)
    }

    /// [`AppState::export_to_dir`] into the configured export directory.
    pub fn export_default(&self) -> AppResult<PathBuf> {
        self.export_to_dir(&self.config.export_dir)
    }
}
