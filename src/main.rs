//! resize-replay: Resize Notification Replay
//!
//! Replays a scripted layout through a resize notifier and prints every
//! notification on stdout.

use resize_notify::config::{Cli, Command, ValidatedConfig, write_default_config};
use std::path::Path;
use std::process::ExitCode;

mod app;
mod run;

use app::{exit_code, print_config_hint, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();

    if let Some(Command::Init { output }) = &cli.command {
        return write_template(output);
    }

    let config = match ValidatedConfig::load(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Scenario error: {e}");
            print_config_hint(&e);
            return exit_code::CONFIG_ERROR;
        }
    };

    setup_tracing(config.verbose);
    tracing::debug!("{config}");

    replay_scenario(config)
}

/// Writes the scenario template for `resize-replay init`.
fn write_template(output: &Path) -> ExitCode {
    match write_default_config(output) {
        Ok(()) => {
            println!("Scenario template written to: {}", output.display());
            println!("Replay it with: resize-replay --scenario {}", output.display());
            exit_code::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code::CONFIG_ERROR
        }
    }
}

/// Replays the scenario on a single-threaded runtime.
///
/// The notifier callback shares state through `Rc`, so the replay future is
/// not `Send` and never leaves this thread.
#[cfg(not(tarpaulin_include))]
fn replay_scenario(config: ValidatedConfig) -> ExitCode {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Failed to start runtime: {e}");
            return exit_code::runtime_error();
        }
    };

    let mut out = std::io::stdout().lock();
    match runtime.block_on(run::execute(config, &mut out)) {
        Ok(report) if report.failed_steps.is_empty() => exit_code::SUCCESS,
        Ok(report) => {
            tracing::info!("Finished with failed step(s) {:?}", report.failed_steps);
            exit_code::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            exit_code::runtime_error()
        }
    }
}
