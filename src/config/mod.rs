//! Configuration layer for resize-replay.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML scenario file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`], [`NotifierSettings`])
//! - Scenario template generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - Values explicitly passed via command line
//! 2. **TOML scenario file** - Values from the `[notifier]` and `[replay]` tables
//! 3. **Built-in defaults** - Hardcoded default values
//!
//! The layout itself (`[host]`, `[[elements]]`, `[[steps]]`) is TOML-only.
//!
//! # Boolean Flag Semantics
//!
//! Boolean flags (`--ignore-width`, `--ignore-height`, `--skip-initial`) use OR semantics:
//! - If the feature is turned off in either CLI or TOML, it is off.
//! - Once turned off in TOML, CLI cannot turn it back on (flags only disable).
//! - This differs from other options where "CLI explicit > TOML".

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod validated_tests;

pub use cli::{Cli, Command, FormatArg};
pub use error::{ConfigError, field};
pub use toml::{
    ElementSection, HostSection, NotifierSection, ReplaySection, StepSection, TomlConfig,
    default_config_template,
};
pub use validated::{NotifierSettings, ValidatedConfig, write_default_config};
