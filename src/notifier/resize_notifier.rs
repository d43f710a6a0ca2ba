//! The resize notifier: target selection, subscription and filtering combined.

use super::filter::{AxisConfig, ChangeFilter, Decision};
use super::observation::Observation;
use super::options::{HostRefCallback, NotifierOptions, ResizeCallback};
use super::target::select_target;
use crate::watcher::{Deliveries, HostProvider, ResizeEntry, Size, Target, WatchError, Watcher};
use std::fmt;

/// Turns raw watcher measurements into `(width, height)` notifications.
///
/// # Lifecycle
///
/// The owning component drives three entry points:
/// - [`Self::on_target_first_available`] once the component is mounted
/// - [`Self::on_target_changed`] (or [`Self::set_element`]) after updates
/// - [`Self::on_dispose`] on teardown
///
/// The host element is supplied through [`Self::attach_host`], or created by
/// a [`HostProvider`] with [`Self::mount_with`] / [`Self::mount`].
///
/// # Delivery
///
/// Watchers queue measurements; nothing is reported until the notifier is
/// driven with [`Self::process_pending`] or [`Self::next_delivery`].
/// Synchronous platforms can call [`Self::handle_entries`] directly.
/// Only measurements for the currently bound target reach the filter.
///
/// # Example
///
/// ```
/// use resize_notify::notifier::{NotifierOptions, ResizeNotifier};
/// use resize_notify::watcher::{SimulatedWatcher, Size, channel};
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let (tx, rx) = channel();
/// let watcher = SimulatedWatcher::new(tx).with_host_size(Size::new(200.0, 100.0));
///
/// let reports = Rc::new(RefCell::new(Vec::new()));
/// let sink = Rc::clone(&reports);
/// let options = NotifierOptions::new(move |w, h| sink.borrow_mut().push((w, h)));
///
/// let mut notifier = ResizeNotifier::new(watcher, rx, options);
/// notifier.mount().unwrap();
/// notifier.process_pending();
///
/// assert_eq!(*reports.borrow(), vec![(200.0, 100.0)]);
/// ```
pub struct ResizeNotifier<T, W> {
    observation: Observation<T, W>,
    filter: ChangeFilter,
    on_resize: Option<ResizeCallback>,
    on_host_ref: Option<HostRefCallback<T>>,
    element: Option<T>,
    host: Option<T>,
    initial: bool,
    host_tag: String,
    mounted: bool,
}

impl<T, W> ResizeNotifier<T, W>
where
    T: Target,
    W: Watcher<T>,
{
    /// Creates an unmounted notifier.
    #[must_use]
    pub fn new(watcher: W, deliveries: Deliveries<T>, options: NotifierOptions<T>) -> Self {
        Self {
            observation: Observation::new(watcher, deliveries),
            filter: ChangeFilter::new(options.axes),
            on_resize: options.on_resize,
            on_host_ref: options.on_host_ref,
            element: options.element,
            host: None,
            initial: options.initial,
            host_tag: options.host_tag,
            mounted: false,
        }
    }

    /// Reference hook for the host element.
    ///
    /// Records the handle and calls the host-ref hook when one is supplied.
    /// Selection is re-evaluated on the next lifecycle entry point.
    pub fn attach_host(&mut self, host: Option<T>) {
        if let (Some(host), Some(hook)) = (host.as_ref(), self.on_host_ref.as_mut()) {
            hook(host);
        }
        self.host = host;
    }

    /// Creates the host element with `provider`, attaches it and mounts.
    ///
    /// The host is created once per notifier; later mounts reuse it.
    ///
    /// # Errors
    ///
    /// Returns [`WatchError`] if the host cannot be created or the selected
    /// target cannot be observed.
    pub fn mount_with<P>(&mut self, provider: &mut P) -> Result<(), WatchError>
    where
        P: HostProvider<T>,
    {
        if self.host.is_none() {
            let host = provider.create_host(&self.host_tag)?;
            self.attach_host(Some(host));
        }
        self.on_target_first_available()
    }

    /// Mounts using the watcher itself as the host provider.
    ///
    /// # Errors
    ///
    /// Same as [`Self::mount_with`].
    pub fn mount(&mut self) -> Result<(), WatchError>
    where
        W: HostProvider<T>,
    {
        if self.host.is_none() {
            let host = self.observation.watcher_mut().create_host(&self.host_tag)?;
            self.attach_host(Some(host));
        }
        self.on_target_first_available()
    }

    /// Mount entry point: subscribes to the selected target, if any.
    ///
    /// # Errors
    ///
    /// Propagates the watcher's [`WatchError`].
    pub fn on_target_first_available(&mut self) -> Result<(), WatchError> {
        self.mounted = true;
        let Some(target) = select_target(self.element.as_ref(), self.host.as_ref()).cloned()
        else {
            tracing::debug!("Mounted without a target to observe");
            return Ok(());
        };
        self.observation.start(target)?;
        self.filter.arm(self.initial);
        Ok(())
    }

    /// Replaces the explicit element and re-evaluates the selection.
    ///
    /// # Errors
    ///
    /// Propagates the watcher's [`WatchError`] if the newly selected target
    /// cannot be observed. The notifier is then left without a subscription.
    pub fn set_element(&mut self, element: Option<T>) -> Result<(), WatchError> {
        self.element = element;
        self.on_target_changed()
    }

    /// Update entry point: moves the subscription if the selection changed.
    ///
    /// Nothing happens before mount or when the selected target is already
    /// bound. If nothing is selectable any more the subscription is dropped.
    ///
    /// # Errors
    ///
    /// Propagates the watcher's [`WatchError`].
    pub fn on_target_changed(&mut self) -> Result<(), WatchError> {
        if !self.mounted {
            return Ok(());
        }

        let selected = select_target(self.element.as_ref(), self.host.as_ref()).cloned();
        if self.observation.bound() == selected.as_ref() {
            return Ok(());
        }

        match selected {
            Some(target) => {
                self.observation.retarget(target)?;
                self.filter.arm(self.initial);
            }
            None => self.observation.release(),
        }
        Ok(())
    }

    /// Dispose entry point. Never fails, even if never mounted.
    pub fn on_dispose(&mut self) {
        self.observation.stop();
        self.mounted = false;
    }

    /// Feeds a batch delivered synchronously by the platform.
    ///
    /// Returns the number of measurements that passed the filter.
    pub fn handle_entries(&mut self, entries: &[ResizeEntry<T>]) -> usize {
        let sizes = self.observation.current_sizes(entries);
        self.notify_all(sizes)
    }

    /// Processes every queued batch without waiting.
    ///
    /// Returns the number of measurements that passed the filter.
    pub fn process_pending(&mut self) -> usize {
        let mut notified = 0;
        while let Some(sizes) = self.observation.try_next_batch() {
            notified += self.notify_all(sizes);
        }
        notified
    }

    /// Waits for one batch and processes it.
    ///
    /// Returns the number of measurements that passed the filter, or `None` once the
    /// watcher side of the delivery channel is closed. Cancel-safe.
    pub async fn next_delivery(&mut self) -> Option<usize> {
        let sizes = self.observation.next_batch().await?;
        Some(self.notify_all(sizes))
    }

    /// Runs one measurement of the bound target through the filter and
    /// invokes the callback if it passes.
    pub fn on_measurement(&mut self, width: f64, height: f64) -> Decision {
        let decision = self.filter.accept(Size::new(width, height));
        match decision {
            Decision::Suppressed => {
                tracing::debug!("Suppressed initial measurement {width}x{height}");
            }
            Decision::Unchanged => {
                tracing::trace!("Ignored measurement {width}x{height}: no enabled axis changed");
            }
            Decision::Changed(size) => match self.on_resize.as_mut() {
                Some(callback) => callback(size.width, size.height),
                None => tracing::trace!("No resize callback set"),
            },
        }
        decision
    }

    /// Replaces the axis configuration.
    pub const fn set_axes(&mut self, axes: AxisConfig) {
        self.filter.set_axes(axes);
    }

    /// Changes initial-measurement reporting for future subscriptions.
    pub const fn set_initial(&mut self, report: bool) {
        self.initial = report;
    }

    /// Replaces the resize callback. `None` disables reporting.
    pub fn set_on_resize(&mut self, callback: Option<ResizeCallback>) {
        self.on_resize = callback;
    }

    /// Returns the axis configuration.
    #[must_use]
    pub const fn axes(&self) -> AxisConfig {
        self.filter.axes()
    }

    /// Returns true if the first measurement after a subscription is reported.
    #[must_use]
    pub const fn reports_initial(&self) -> bool {
        self.initial
    }

    /// Returns the currently observed target.
    #[must_use]
    pub const fn bound(&self) -> Option<&T> {
        self.observation.bound()
    }

    /// Returns the explicit element, if any.
    #[must_use]
    pub const fn element(&self) -> Option<&T> {
        self.element.as_ref()
    }

    /// Returns the attached host element, if any.
    #[must_use]
    pub const fn host(&self) -> Option<&T> {
        self.host.as_ref()
    }

    /// Returns true between mount and dispose.
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Returns the underlying watcher.
    #[must_use]
    pub const fn watcher(&self) -> &W {
        self.observation.watcher()
    }

    /// Returns the underlying watcher mutably.
    pub const fn watcher_mut(&mut self) -> &mut W {
        self.observation.watcher_mut()
    }

    fn notify_all(&mut self, sizes: Vec<Size>) -> usize {
        sizes
            .into_iter()
            .filter(|size| {
                self.on_measurement(size.width, size.height)
                    .forwarded()
                    .is_some()
            })
            .count()
    }
}

impl<T: fmt::Debug, W: fmt::Debug> fmt::Debug for ResizeNotifier<T, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResizeNotifier")
            .field("observation", &self.observation)
            .field("filter", &self.filter)
            .field("on_resize", &self.on_resize.is_some())
            .field("element", &self.element)
            .field("host", &self.host)
            .field("initial", &self.initial)
            .field("host_tag", &self.host_tag)
            .field("mounted", &self.mounted)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "resize_notifier_tests.rs"]
mod tests;
