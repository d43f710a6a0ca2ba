//! Measurement types delivered by watchers.

use serde::Serialize;

/// Content-box dimensions of an element.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Size {
    /// Content-box width.
    pub width: f64,
    /// Content-box height.
    pub height: f64,
}

impl Size {
    /// Creates a new size.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A single raw measurement reported by a watcher.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeEntry<T> {
    /// The element the measurement belongs to.
    pub target: T,
    /// Content-box width.
    pub width: f64,
    /// Content-box height.
    pub height: f64,
}

impl<T> ResizeEntry<T> {
    /// Creates a new entry.
    #[must_use]
    pub const fn new(target: T, width: f64, height: f64) -> Self {
        Self {
            target,
            width,
            height,
        }
    }

    /// Returns the measured dimensions.
    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}
