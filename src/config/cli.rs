//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// resize-replay: Resize Notification Replay
///
/// Replays a scripted layout scenario through a resize notifier and prints
/// every notification it emits.
#[derive(Debug, Parser)]
#[command(name = "resize-replay")]
#[command(version, about, long_about = None)]
#[allow(clippy::struct_excessive_bools)] // CLI flags are naturally boolean
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Scenario file to replay (required for run mode)
    #[arg(long, short)]
    pub scenario: Option<PathBuf>,

    /// Ignore width changes
    #[arg(long = "ignore-width")]
    pub ignore_width: bool,

    /// Ignore height changes
    #[arg(long = "ignore-height")]
    pub ignore_height: bool,

    /// Drop the first measurement after each subscription
    #[arg(long = "skip-initial")]
    pub skip_initial: bool,

    /// Declared element to observe instead of the host element
    #[arg(long, value_name = "NAME")]
    pub element: Option<String>,

    /// Tag of the host element
    #[arg(long = "host-tag")]
    pub host_tag: Option<String>,

    /// Milliseconds to wait for measurements after each step
    #[arg(long = "settle-ms")]
    pub settle_ms: Option<u64>,

    /// Output format for notifications
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for resize-replay
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a scenario template
    Init {
        /// Output path for the scenario file
        #[arg(long, short, default_value = "scenario.toml")]
        output: PathBuf,
    },
}

/// Output format argument for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// One human-readable line per notification
    Text,
    /// One JSON object per line
    Json,
}

impl From<FormatArg> for crate::replay::OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Some(Command::Init { .. }))
    }
}
