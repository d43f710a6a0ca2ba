//! resize-notify: Element Resize Notifications
//!
//! A library that watches the size of one target element, chosen between an
//! explicitly supplied element and a host element, and reports
//! `(width, height)` to a callback whenever an enabled axis changes.
//!
//! The platform side is abstracted by the [`watcher::Watcher`] trait; the
//! [`notifier::ResizeNotifier`] adds target selection, retargeting and
//! per-axis filtering on top. [`replay`] drives the notifier through
//! scripted layout scenarios on a [`watcher::SimulatedWatcher`].

pub mod config;
pub mod notifier;
pub mod replay;
pub mod watcher;

/// Name given to host elements created by the simulated layout.
pub const HOST_ELEMENT: &str = "host";
