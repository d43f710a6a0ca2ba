//! Notifier layer turning raw measurements into resize notifications.
//!
//! This module provides:
//! - Target selection ([`select_target`], [`TargetSource`])
//! - Subscription lifetime management ([`Observation`])
//! - Per-axis change filtering ([`ChangeFilter`], [`AxisConfig`], [`Decision`])
//! - Configuration ([`NotifierOptions`])
//! - The composed component ([`ResizeNotifier`])

mod filter;
mod observation;
mod options;
mod resize_notifier;
mod target;

#[cfg(test)]
mod test_fixtures;

pub use filter::{AxisConfig, ChangeFilter, Decision, LastMeasurement};
pub use observation::Observation;
pub use options::{HostRefCallback, NotifierOptions, ResizeCallback};
pub use resize_notifier::ResizeNotifier;
pub use target::{TargetSource, select_target, select_target_with_source};
