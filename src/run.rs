//! Application execution logic.
//!
//! Replays the configured scenario and writes every notification to the
//! given output.

use std::io::{self, Write};

use thiserror::Error;

use resize_notify::config::ValidatedConfig;
use resize_notify::replay::{ReplayError, ReplayReport, replay, write_notifications};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// The scenario could not be replayed.
    #[error("Replay failed: {0}")]
    Replay(#[from] ReplayError),

    /// Notifications could not be written.
    #[error("Failed to write notifications: {0}")]
    Output(#[source] io::Error),
}

/// Replays the scenario and writes the notifications to `out`.
///
/// Notifier failures inside individual steps are logged and do not fail the
/// run; they are listed in the returned report.
///
/// # Errors
///
/// Returns an error if:
/// - A step refers to an element missing from the layout
/// - A direct layout change is rejected
/// - Writing to `out` fails
pub async fn execute<W: Write>(config: ValidatedConfig, out: &mut W) -> Result<ReplayReport, RunError> {
    tracing::info!(
        "Replaying {} step(s) over {} element(s)",
        config.scenario.steps.len(),
        config.scenario.elements.len()
    );

    let report = replay(&config.notifier, &config.scenario, config.settle).await?;

    if !report.failed_steps.is_empty() {
        tracing::warn!(
            "{} step(s) failed: {:?}",
            report.failed_steps.len(),
            report.failed_steps
        );
    }

    write_notifications(out, &report.notifications, config.format).map_err(RunError::Output)?;
    out.flush().map_err(RunError::Output)?;

    Ok(report)
}
