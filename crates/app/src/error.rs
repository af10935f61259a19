use std::path::PathBuf;

use registro_core::error::CoreError;

/// Application-level error type for the controller and binary.
///
/// Wraps [`CoreError`] for domain errors and adds file and configuration
/// failures.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `registro_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Reading an import file or writing an export failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// An environment variable held an unusable value.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for controller return values.
pub type AppResult<T> = Result<T, AppError>;
