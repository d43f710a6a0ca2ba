//! Scenario replay on a simulated layout.
//!
//! This module provides:
//! - The validated scenario model ([`Scenario`], [`Step`], [`ElementSpec`])
//! - The replay driver ([`Replayer`], [`replay`])
//! - Notification output ([`Notification`], [`OutputFormat`])

mod output;
mod runner;
mod scenario;

pub use output::{Notification, OutputFormat, write_notifications};
pub use runner::{ReplayError, ReplayReport, Replayer, replay};
pub use scenario::{ElementSpec, Scenario, Step};
