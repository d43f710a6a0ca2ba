//! Notification records and their rendering.

use serde::Serialize;
use std::fmt;
use std::io::{self, Write};

/// How notifications are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `step N (action): WxH`, one line each
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// One notification emitted during replay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    /// 1-based index of the step after which the notification fired.
    pub step: usize,
    /// Action of that step.
    pub action: &'static str,
    /// Reported width.
    pub width: f64,
    /// Reported height.
    pub height: f64,
}

impl Notification {
    /// Renders the notification as a single line without a trailing newline.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render(&self, format: OutputFormat) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::Text => Ok(format!(
                "step {} ({}): {}x{}",
                self.step, self.action, self.width, self.height
            )),
            OutputFormat::Json => serde_json::to_string(self),
        }
    }
}

/// Writes every notification on its own line.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_notifications<W: Write>(
    out: &mut W,
    notifications: &[Notification],
    format: OutputFormat,
) -> io::Result<()> {
    for notification in notifications {
        let line = notification.render(format).map_err(io::Error::other)?;
        writeln!(out, "{line}")?;
    }
    Ok(())
}
