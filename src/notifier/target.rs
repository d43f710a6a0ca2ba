//! Target selection between an explicit element and the local host element.

use crate::watcher::Target;

/// Where the selected target came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetSource {
    /// An element supplied by the caller.
    Explicit,
    /// The locally created host element.
    Host,
}

/// Picks the element that should be observed.
///
/// An explicit element always wins. Otherwise the host element is used once
/// it exists. Before the host element is attached and without an explicit
/// element there is nothing to observe.
#[must_use]
pub fn select_target<'a, T: Target>(explicit: Option<&'a T>, local: Option<&'a T>) -> Option<&'a T> {
    select_target_with_source(explicit, local).map(|(target, _)| target)
}

/// Like [`select_target`], also reporting which input was chosen.
#[must_use]
pub fn select_target_with_source<'a, T: Target>(
    explicit: Option<&'a T>,
    local: Option<&'a T>,
) -> Option<(&'a T, TargetSource)> {
    explicit
        .map(|target| (target, TargetSource::Explicit))
        .or_else(|| local.map(|target| (target, TargetSource::Host)))
}
