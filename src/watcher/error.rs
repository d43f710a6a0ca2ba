//! Error types for the watcher layer.

use thiserror::Error;

/// Error type for watcher operations.
///
/// Raised synchronously by [`super::Watcher::observe`] and propagated unchanged
/// to whoever asked for the subscription. There is no internal retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WatchError {
    /// The handle does not refer to any known element.
    #[error("Unknown target: {target}")]
    UnknownTarget {
        /// Debug rendering of the offending handle.
        target: String,
    },

    /// The element exists but is no longer attached to a layout.
    #[error("Target is detached: {target}")]
    Detached {
        /// Debug rendering of the offending handle.
        target: String,
    },

    /// The host element could not be created.
    #[error("Failed to create host element <{tag}>: {reason}")]
    HostCreation {
        /// Requested tag name.
        tag: String,
        /// Reason for the failure.
        reason: String,
    },
}

impl WatchError {
    /// Creates an `UnknownTarget` error for a handle.
    #[must_use]
    pub fn unknown(target: &impl std::fmt::Debug) -> Self {
        Self::UnknownTarget {
            target: format!("{target:?}"),
        }
    }

    /// Creates a `Detached` error for a handle.
    #[must_use]
    pub fn detached(target: &impl std::fmt::Debug) -> Self {
        Self::Detached {
            target: format!("{target:?}"),
        }
    }
}
