//! Application startup and utilities.
//!
//! Exit codes, tracing setup and configuration hints for `resize-replay`.

use resize_notify::HOST_ELEMENT;
use resize_notify::config::{ConfigError, field};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// The scenario replayed to the end (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// The scenario could not be loaded or validated (exit code 1).
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// The replay aborted or its output could not be written (exit code 2).
    pub fn runtime_error() -> ExitCode {
        ExitCode::from(2)
    }
}

const INIT_HINT: &str = "Run 'resize-replay init' to generate a scenario template.";

/// Returns a follow-up hint for configuration errors a user can act on.
pub fn config_hint(error: &ConfigError) -> Option<String> {
    match error {
        ConfigError::MissingRequired { field: f, .. } if *f == field::SCENARIO => {
            Some(INIT_HINT.to_string())
        }
        ConfigError::FileRead { .. } => Some(INIT_HINT.to_string()),
        ConfigError::UnknownElement { .. } => Some(format!(
            "Declare the element in an [[elements]] table; '{HOST_ELEMENT}' is only valid for resize and detach."
        )),
        ConfigError::InvalidElement { .. } => Some(format!(
            "Element names must be unique, non-empty and not '{HOST_ELEMENT}'."
        )),
        ConfigError::InvalidSize { .. } => {
            Some("Widths and heights must be finite and not negative.".to_string())
        }
        _ => None,
    }
}

/// Prints the hint for `error`, if there is one.
pub fn print_config_hint(error: &ConfigError) {
    if let Some(hint) = config_hint(error) {
        eprintln!("\n{hint}");
    }
}

/// Sets up the tracing subscriber for logging.
///
/// Logs go to stderr so that notifications on stdout stay machine-readable.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
