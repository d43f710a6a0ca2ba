//! Validated scenario model.

use crate::watcher::Size;

/// A declared element of the replay layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementSpec {
    /// Unique element name.
    pub name: String,
    /// Initial content-box size.
    pub size: Size,
}

impl ElementSpec {
    /// Creates an element declaration.
    #[must_use]
    pub fn new(name: impl Into<String>, size: Size) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

/// One replay step.
///
/// Element names are checked during configuration validation; `host` names
/// the host element created by [`Step::Mount`].
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Create the host element and start observing.
    Mount,
    /// Stop observing.
    Unmount,
    /// Change an element's size.
    Resize {
        /// Element name.
        element: String,
        /// New content-box size.
        size: Size,
    },
    /// Observe a declared element instead of the host.
    Select {
        /// Element name.
        element: String,
    },
    /// Go back to observing the host element.
    Clear,
    /// Remove an element from the layout.
    Detach {
        /// Element name.
        element: String,
    },
    /// Change notifier options. `None` keeps the current value.
    Configure {
        /// Report width changes.
        horizontal: Option<bool>,
        /// Report height changes.
        vertical: Option<bool>,
        /// Report the first measurement after each subscription.
        initial: Option<bool>,
    },
}

impl Step {
    /// Short action name used in logs and output.
    #[must_use]
    pub const fn action(&self) -> &'static str {
        match self {
            Self::Mount => "mount",
            Self::Unmount => "unmount",
            Self::Resize { .. } => "resize",
            Self::Select { .. } => "select",
            Self::Clear => "clear",
            Self::Detach { .. } => "detach",
            Self::Configure { .. } => "configure",
        }
    }
}

/// A complete layout script.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scenario {
    /// Initial size of the host element.
    pub host_size: Size,
    /// Declared elements besides the host.
    pub elements: Vec<ElementSpec>,
    /// Steps in replay order.
    pub steps: Vec<Step>,
}
