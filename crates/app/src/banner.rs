//! User-facing outcome messages for import.

use registro_core::error::{CoreError, ImportFormatError};
use registro_core::import::ImportSummary;

pub const READ_ERROR_MESSAGE: &str = "Error al leer el archivo";
pub const MALFORMED_MESSAGE: &str = "Error al procesar el archivo JSON. Verifique el formato.";
pub const NOT_A_LIST_MESSAGE: &str =
    "El archivo no contiene un formato válido de lista de estudiantes";

/// The single outcome message shown above the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    Success(String),
    Error(String),
}

impl Banner {
    pub fn message(&self) -> &str {
        match self {
            Self::Success(msg) | Self::Error(msg) => msg,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// `Se importaron N estudiantes correctamente[, X registros inválidos][, Y duplicados ignorados].`
pub fn import_success_message(summary: &ImportSummary) -> String {
    let mut msg = format!("Se importaron {} estudiantes correctamente", summary.imported);
    if summary.invalid > 0 {
        msg.push_str(&format!(", {} registros inválidos", summary.invalid));
    }
    if summary.duplicate > 0 {
        msg.push_str(&format!(", {} duplicados ignorados", summary.duplicate));
    }
    msg.push('.');
    msg
}

pub fn import_error_message(err: &CoreError) -> String {
    match err {
        CoreError::ImportFormat(ImportFormatError::Malformed(_)) => MALFORMED_MESSAGE.to_string(),
        CoreError::ImportFormat(ImportFormatError::NotAList) => NOT_A_LIST_MESSAGE.to_string(),
        CoreError::NothingImported { invalid, duplicate } => format!(
            "No se pudo importar ningún estudiante. {invalid} registros inválidos, {duplicate} duplicados."
        ),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_without_rejections() {
        let summary = ImportSummary {
            imported: 3,
            invalid: 0,
            duplicate: 0,
        };
        assert_eq!(
            import_success_message(&summary),
            "Se importaron 3 estudiantes correctamente."
        );
    }

    #[test]
    fn success_with_rejections() {
        let summary = ImportSummary {
            imported: 2,
            invalid: 1,
            duplicate: 4,
        };
        assert_eq!(
            import_success_message(&summary),
            "Se importaron 2 estudiantes correctamente, 1 registros inválidos, 4 duplicados ignorados."
        );
    }

    #[test]
    fn only_duplicates_suffix() {
        let summary = ImportSummary {
            imported: 1,
            invalid: 0,
            duplicate: 2,
        };
        assert_eq!(
            import_success_message(&summary),
            "Se importaron 1 estudiantes correctamente, 2 duplicados ignorados."
        );
    }

    #[test]
    fn nothing_imported_message() {
        let err = CoreError::NothingImported {
            invalid: 2,
            duplicate: 0,
        };
        assert_eq!(
            import_error_message(&err),
            "No se pudo importar ningún estudiante. 2 registros inválidos, 0 duplicados."
        );
    }

    #[test]
    fn format_errors_map_to_fixed_messages() {
        assert_eq!(
            import_error_message(&CoreError::ImportFormat(ImportFormatError::NotAList)),
            NOT_A_LIST_MESSAGE
        );
        assert_eq!(
            import_error_message(&CoreError::ImportFormat(ImportFormatError::Malformed(
                "EOF".into()
            ))),
            MALFORMED_MESSAGE
        );
    }
}
