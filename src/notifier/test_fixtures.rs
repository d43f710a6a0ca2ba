//! Shared test fixtures for notifier tests.

use crate::watcher::{
    Deliveries, DeliverySender, ResizeEntry, Size, WatchError, Watcher, channel,
};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Watcher call as seen by [`RecordingWatcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Observe(&'static str),
    Unobserve(&'static str),
    Disconnect,
}

pub type CallLog = Rc<RefCell<Vec<Call>>>;

/// Mock watcher that records every call and reports configured sizes.
///
/// `observe` queues the element's configured size, if any, mimicking the
/// initial measurement of a platform observer.
#[derive(Debug)]
pub struct RecordingWatcher {
    calls: CallLog,
    sizes: HashMap<&'static str, Size>,
    failing: Vec<&'static str>,
    sender: DeliverySender<&'static str>,
}

impl RecordingWatcher {
    pub fn new(sender: DeliverySender<&'static str>) -> Self {
        Self {
            calls: Rc::default(),
            sizes: HashMap::new(),
            failing: Vec::new(),
            sender,
        }
    }

    pub fn with_size(mut self, target: &'static str, width: f64, height: f64) -> Self {
        self.sizes.insert(target, Size::new(width, height));
        self
    }

    pub fn failing_on(mut self, target: &'static str) -> Self {
        self.failing.push(target);
        self
    }

    pub fn calls(&self) -> CallLog {
        Rc::clone(&self.calls)
    }

    /// Handle for queueing measurements after the watcher has been moved.
    pub fn emitter(&self) -> DeliverySender<&'static str> {
        self.sender.clone()
    }
}

impl Watcher<&'static str> for RecordingWatcher {
    fn observe(&mut self, target: &&'static str) -> Result<(), WatchError> {
        self.calls.borrow_mut().push(Call::Observe(*target));
        if self.failing.contains(target) {
            return Err(WatchError::detached(target));
        }
        if let Some(size) = self.sizes.get(target) {
            self.sender
                .send(vec![ResizeEntry::new(*target, size.width, size.height)]);
        }
        Ok(())
    }

    fn unobserve(&mut self, target: &&'static str) {
        self.calls.borrow_mut().push(Call::Unobserve(*target));
    }

    fn disconnect(&mut self) {
        self.calls.borrow_mut().push(Call::Disconnect);
    }
}

/// Creates a recording watcher with its delivery queue.
pub fn recording_watcher() -> (RecordingWatcher, Deliveries<&'static str>) {
    let (tx, rx) = channel();
    (RecordingWatcher::new(tx), rx)
}

/// Queues a single measurement.
pub fn emit(sender: &DeliverySender<&'static str>, target: &'static str, width: f64, height: f64) {
    sender.send(vec![ResizeEntry::new(target, width, height)]);
}

pub type Reports = Rc<RefCell<Vec<(f64, f64)>>>;

/// Creates a callback that records every `(width, height)` it receives.
pub fn recorder() -> (Reports, impl FnMut(f64, f64) + 'static) {
    let reports: Reports = Rc::default();
    let sink = Rc::clone(&reports);
    (reports, move |width, height| {
        sink.borrow_mut().push((width, height));
    })
}
