//! Watcher layer: the external size-change primitive and its delivery channel.
//!
//! This module provides:
//! - The [`Watcher`] trait abstracting a platform resize observer
//! - Measurement entries ([`ResizeEntry`]) delivered in batches
//! - The delivery channel ([`channel`], [`DeliverySender`], [`Deliveries`])
//! - An in-memory implementation ([`SimulatedWatcher`]) backed by a layout model
//! - Error handling ([`WatchError`])

mod channel;
mod entry;
mod error;
mod simulated;

pub use channel::{Deliveries, DeliverySender, channel};
pub use entry::{ResizeEntry, Size};
pub use error::WatchError;
pub use simulated::{ElementId, SimulatedWatcher};

use std::fmt::Debug;

/// An opaque handle to a measurable element.
///
/// The notifier never looks inside a handle; it only clones handles and
/// compares them for equality to decide which element is bound.
pub trait Target: Clone + PartialEq + Debug {}

impl<T> Target for T where T: Clone + PartialEq + Debug {}

/// Trait for platform size-change watchers.
///
/// Implementations report content-box dimensions for every observed target
/// through a [`DeliverySender`], including once shortly after `observe` is
/// first called for a target. Delivery is never synchronous with the
/// `observe` call from the notifier's point of view: batches are queued and
/// processed later.
///
/// # Errors
///
/// Only `observe` can fail. Tearing a subscription down is infallible so that
/// disposal never throws.
pub trait Watcher<T: Target> {
    /// Starts reporting size changes for `target`.
    ///
    /// # Errors
    ///
    /// Returns [`WatchError`] when the handle cannot be observed
    /// (unknown, detached or otherwise invalid).
    fn observe(&mut self, target: &T) -> Result<(), WatchError>;

    /// Stops reporting size changes for `target`.
    ///
    /// After this returns, no further entries for `target` are sent.
    fn unobserve(&mut self, target: &T);

    /// Stops reporting size changes for every target.
    fn disconnect(&mut self);
}

/// Supplies a locally created host element when no external element is given.
pub trait HostProvider<T: Target> {
    /// Creates the host element described by `tag`.
    ///
    /// # Errors
    ///
    /// Returns [`WatchError`] if the element cannot be created.
    fn create_host(&mut self, tag: &str) -> Result<T, WatchError>;
}
