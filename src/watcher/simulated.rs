//! In-memory watcher backed by a simple layout model.
//!
//! [`SimulatedWatcher`] owns a flat set of named elements with content-box
//! sizes. It behaves like a platform resize observer: observing an element
//! queues its current size once, and resizing an observed element queues the
//! new size only when it actually changed.

use super::{DeliverySender, HostProvider, ResizeEntry, Size, WatchError, Watcher};
use std::fmt;

/// Handle to an element of a [`SimulatedWatcher`] layout.
///
/// Elements are never removed from the layout, so every handle stays unique
/// for the lifetime of its watcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(usize);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug)]
struct Element {
    name: String,
    size: Size,
    attached: bool,
}

/// Layout-backed watcher for tests and scenario replay.
#[derive(Debug)]
pub struct SimulatedWatcher {
    elements: Vec<Element>,
    observed: Vec<ElementId>,
    host_size: Size,
    sender: DeliverySender<ElementId>,
}

impl SimulatedWatcher {
    /// Creates an empty layout that reports through `sender`.
    #[must_use]
    pub const fn new(sender: DeliverySender<ElementId>) -> Self {
        Self {
            elements: Vec::new(),
            observed: Vec::new(),
            host_size: Size::new(0.0, 0.0),
            sender,
        }
    }

    /// Sets the size given to host elements created through [`HostProvider`].
    #[must_use]
    pub const fn with_host_size(mut self, size: Size) -> Self {
        self.host_size = size;
        self
    }

    /// Adds an attached element to the layout.
    pub fn create_element(&mut self, name: impl Into<String>, size: Size) -> ElementId {
        let id = ElementId(self.elements.len());
        self.elements.push(Element {
            name: name.into(),
            size,
            attached: true,
        });
        id
    }

    /// Looks an element up by name. The first match wins.
    #[must_use]
    pub fn element(&self, name: &str) -> Option<ElementId> {
        self.elements
            .iter()
            .position(|e| e.name == name)
            .map(ElementId)
    }

    /// Returns the name of an element.
    #[must_use]
    pub fn name(&self, id: ElementId) -> Option<&str> {
        self.get(id).map(|e| e.name.as_str())
    }

    /// Returns the current size of an element.
    #[must_use]
    pub fn size(&self, id: ElementId) -> Option<Size> {
        self.get(id).map(|e| e.size)
    }

    /// Returns true if `id` is currently observed.
    #[must_use]
    pub fn is_observed(&self, id: ElementId) -> bool {
        self.observed.contains(&id)
    }

    /// Returns every observed element, in observation order.
    #[must_use]
    pub fn observed(&self) -> &[ElementId] {
        &self.observed
    }

    /// Changes the size of an element.
    ///
    /// Returns `true` if a measurement was queued, which happens only when the
    /// element is observed and its size changed.
    ///
    /// # Errors
    ///
    /// Returns [`WatchError`] if the element is unknown or detached.
    pub fn resize(&mut self, id: ElementId, size: Size) -> Result<bool, WatchError> {
        let observed = self.is_observed(id);
        let element = self.attached_mut(id)?;
        if element.size == size {
            return Ok(false);
        }
        element.size = size;

        if !observed {
            return Ok(false);
        }
        tracing::trace!("Layout change on {id}: {}x{}", size.width, size.height);
        Ok(self
            .sender
            .send(vec![ResizeEntry::new(id, size.width, size.height)]))
    }

    /// Removes an element from the layout.
    ///
    /// A detached element stops being observed and can no longer be observed.
    ///
    /// # Errors
    ///
    /// Returns [`WatchError::UnknownTarget`] if the element does not exist.
    pub fn detach(&mut self, id: ElementId) -> Result<(), WatchError> {
        let element = self
            .elements
            .get_mut(id.0)
            .ok_or_else(|| WatchError::unknown(&id))?;
        element.attached = false;
        self.observed.retain(|o| *o != id);
        Ok(())
    }

    fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.0)
    }

    fn attached_mut(&mut self, id: ElementId) -> Result<&mut Element, WatchError> {
        match self.elements.get_mut(id.0) {
            Some(element) if element.attached => Ok(element),
            Some(_) => Err(WatchError::detached(&id)),
            None => Err(WatchError::unknown(&id)),
        }
    }
}

impl Watcher<ElementId> for SimulatedWatcher {
    fn observe(&mut self, target: &ElementId) -> Result<(), WatchError> {
        let size = self.attached_mut(*target)?.size;
        if self.is_observed(*target) {
            return Ok(());
        }
        self.observed.push(*target);
        // Initial measurement, as a platform observer reports once after observe.
        self.sender
            .send(vec![ResizeEntry::new(*target, size.width, size.height)]);
        Ok(())
    }

    fn unobserve(&mut self, target: &ElementId) {
        self.observed.retain(|o| o != target);
    }

    fn disconnect(&mut self) {
        self.observed.clear();
    }
}

impl HostProvider<ElementId> for SimulatedWatcher {
    fn create_host(&mut self, tag: &str) -> Result<ElementId, WatchError> {
        if tag.trim().is_empty() {
            return Err(WatchError::HostCreation {
                tag: tag.to_string(),
                reason: "tag name is empty".to_string(),
            });
        }
        Ok(self.create_element(crate::HOST_ELEMENT, self.host_size))
    }
}

#[cfg(test)]
#[path = "simulated_tests.rs"]
mod tests;
