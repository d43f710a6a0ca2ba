//! Notifier configuration surface.

use super::AxisConfig;
use crate::config::defaults;
use std::fmt;

/// Consumer callback receiving `(width, height)`.
pub type ResizeCallback = Box<dyn FnMut(f64, f64)>;

/// Hook receiving the host element once it is attached.
pub type HostRefCallback<T> = Box<dyn FnMut(&T)>;

/// Options for a [`super::ResizeNotifier`].
///
/// Defaults: both axes enabled, initial measurement reported, host tag
/// `div`, no explicit element.
///
/// # Example
///
/// ```
/// use resize_notify::notifier::NotifierOptions;
///
/// let options = NotifierOptions::<u32>::new(|w, h| println!("{w}x{h}"))
///     .vertical(false)
///     .initial(false);
///
/// assert!(options.axes().horizontal);
/// assert!(!options.axes().vertical);
/// assert!(!options.reports_initial());
/// ```
pub struct NotifierOptions<T> {
    pub(super) on_resize: Option<ResizeCallback>,
    pub(super) on_host_ref: Option<HostRefCallback<T>>,
    pub(super) element: Option<T>,
    pub(super) axes: AxisConfig,
    pub(super) initial: bool,
    pub(super) host_tag: String,
}

impl<T> NotifierOptions<T> {
    /// Creates options reporting to `on_resize`.
    #[must_use]
    pub fn new(on_resize: impl FnMut(f64, f64) + 'static) -> Self {
        Self {
            on_resize: Some(Box::new(on_resize)),
            ..Self::default()
        }
    }

    /// Observes `element` instead of the host element.
    #[must_use]
    pub fn element(mut self, element: T) -> Self {
        self.element = Some(element);
        self
    }

    /// Enables or disables width-driven notifications.
    #[must_use]
    pub const fn horizontal(mut self, enabled: bool) -> Self {
        self.axes.horizontal = enabled;
        self
    }

    /// Enables or disables height-driven notifications.
    #[must_use]
    pub const fn vertical(mut self, enabled: bool) -> Self {
        self.axes.vertical = enabled;
        self
    }

    /// Sets both axes at once.
    #[must_use]
    pub const fn axes_config(mut self, axes: AxisConfig) -> Self {
        self.axes = axes;
        self
    }

    /// Reports or drops the first measurement after each subscription.
    #[must_use]
    pub const fn initial(mut self, report: bool) -> Self {
        self.initial = report;
        self
    }

    /// Sets the tag of the host element created on mount.
    #[must_use]
    pub fn host_tag(mut self, tag: impl Into<String>) -> Self {
        self.host_tag = tag.into();
        self
    }

    /// Registers a hook invoked whenever a host element is attached.
    #[must_use]
    pub fn on_host_ref(mut self, hook: impl FnMut(&T) + 'static) -> Self {
        self.on_host_ref = Some(Box::new(hook));
        self
    }

    /// Returns the axis configuration.
    #[must_use]
    pub const fn axes(&self) -> AxisConfig {
        self.axes
    }

    /// Returns true if the first measurement is reported.
    #[must_use]
    pub const fn reports_initial(&self) -> bool {
        self.initial
    }

    /// Returns the explicit element, if any.
    #[must_use]
    pub const fn explicit_element(&self) -> Option<&T> {
        self.element.as_ref()
    }

    /// Returns the host tag.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.host_tag
    }

    /// Returns true if a resize callback is set.
    #[must_use]
    pub const fn has_callback(&self) -> bool {
        self.on_resize.is_some()
    }
}

impl<T> Default for NotifierOptions<T> {
    /// Options without a callback. Measurements are filtered but not reported.
    fn default() -> Self {
        Self {
            on_resize: None,
            on_host_ref: None,
            element: None,
            axes: AxisConfig::new(defaults::HORIZONTAL, defaults::VERTICAL),
            initial: defaults::INITIAL,
            host_tag: defaults::HOST_TAG.to_string(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for NotifierOptions<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotifierOptions")
            .field("on_resize", &self.on_resize.is_some())
            .field("on_host_ref", &self.on_host_ref.is_some())
            .field("element", &self.element)
            .field("axes", &self.axes)
            .field("initial", &self.initial)
            .field("host_tag", &self.host_tag)
            .finish()
    }
}
