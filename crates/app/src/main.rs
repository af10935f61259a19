use std::path::PathBuf;
use std::process::ExitCode;

use registro_app::config::AppConfig;
use registro_app::state::AppState;
use registro_app::telemetry;

/// Import every JSON file named on the command line, in order, then export
/// the merged roster into the configured directory.
fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    // --- Configuration ---
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    // --- Tracing ---
    telemetry::init_tracing(config.log_format);
    tracing::info!(export_dir = %config.export_dir.display(), "Loaded configuration");

    let mut state = AppState::new(config);
    let mut rejected = 0usize;

    for path in std::env::args_os().skip(1).map(PathBuf::from) {
        if state.import_file(&path).is_err() {
            rejected += 1;
        }
        if let Some(banner) = state.banner() {
            if banner.is_error() {
                tracing::warn!(file = %path.display(), "{}", banner.message());
            } else {
                tracing::info!(file = %path.display(), "{}", banner.message());
            }
        }
    }

    tracing::info!("{}", state.registered_label());

    if let Err(err) = state.export_default() {
        tracing::error!(error = %err, "Export failed");
        return ExitCode::FAILURE;
    }

    if rejected > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
