//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

/// Width changes are reported by default.
pub const HORIZONTAL: bool = true;

/// Height changes are reported by default.
pub const VERTICAL: bool = true;

/// The first measurement after a subscription is reported by default.
pub const INITIAL: bool = true;

/// Tag of the host element created on mount.
pub const HOST_TAG: &str = "div";

/// Host element width in the replay layout.
pub const HOST_WIDTH: f64 = 0.0;

/// Host element height in the replay layout.
pub const HOST_HEIGHT: f64 = 0.0;

/// Time allowed for queued measurements to arrive after each replay step.
pub const SETTLE_MS: u64 = 50;

