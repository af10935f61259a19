use std::path::PathBuf;

use crate::error::{AppError, AppResult};

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Application configuration loaded from environment variables.
///
/// All fields have defaults suitable for local use.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory that receives exported rosters (default: `.`).
    pub export_dir: PathBuf,
    /// Log line format (default: `text`).
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            export_dir: PathBuf::from("."),
            log_format: LogFormat::Text,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default |
    /// |------------------------|---------|
    /// | `REGISTRO_EXPORT_DIR`  | `.`     |
    /// | `REGISTRO_LOG_FORMAT`  | `text`  |
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`], reading values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let defaults = Self::default();

        let export_dir = lookup("REGISTRO_EXPORT_DIR")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.export_dir);

        let log_format = match lookup("REGISTRO_LOG_FORMAT") {
            None => defaults.log_format,
            Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "text" | "" => LogFormat::Text,
                "json" => LogFormat::Json,
                other => {
                    return Err(AppError::Config(format!(
                        "REGISTRO_LOG_FORMAT must be 'text' or 'json', got '{other}'"
                    )))
                }
            },
        };

        Ok(Self {
            export_dir,
            log_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.export_dir, PathBuf::from("."));
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn reads_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("REGISTRO_EXPORT_DIR", "/tmp/exports"),
            ("REGISTRO_LOG_FORMAT", "JSON"),
        ]))
        .unwrap();
        assert_eq!(config.export_dir, PathBuf::from("/tmp/exports"));
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn blank_export_dir_uses_default() {
        let config =
            AppConfig::from_lookup(lookup_from(&[("REGISTRO_EXPORT_DIR", "  ")])).unwrap();
        assert_eq!(config.export_dir, PathBuf::from("."));
    }

    #[test]
    fn rejects_unknown_log_format() {
        let err = AppConfig::from_lookup(lookup_from(&[("REGISTRO_LOG_FORMAT", "xml")]))
            .unwrap_err();
        assert!(matches!(err, AppError::Config(msg) if msg.contains("xml")));
    }
}
