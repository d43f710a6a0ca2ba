//! Replays a [`Scenario`] through a [`ResizeNotifier`] backed by a
//! [`SimulatedWatcher`].

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use thiserror::Error;

use super::output::Notification;
use super::scenario::{Scenario, Step};
use crate::HOST_ELEMENT;
use crate::config::NotifierSettings;
use crate::notifier::{AxisConfig, ResizeNotifier};
use crate::watcher::{ElementId, SimulatedWatcher, WatchError, channel};

/// Error type for replay failures.
#[derive(Debug, Error)]
pub enum ReplayError {
    /// A step or option names an element missing from the layout.
    #[error("Unknown element '{name}' at {context}")]
    UnknownElement {
        /// The referenced name
        name: String,
        /// Where the reference appears
        context: String,
    },

    /// The layout rejected a direct size change or detach.
    #[error("Step {step} ({action}) failed: {source}")]
    Layout {
        /// 1-based step index
        step: usize,
        /// Step action
        action: &'static str,
        /// Underlying watcher error
        #[source]
        source: WatchError,
    },
}

/// Outcome of a replay.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplayReport {
    /// Notifications in emission order.
    pub notifications: Vec<Notification>,
    /// Number of steps executed.
    pub steps: usize,
    /// Steps whose notifier entry point returned an error.
    pub failed_steps: Vec<usize>,
}

type Recorded = Rc<RefCell<Vec<(f64, f64)>>>;

/// Drives one scenario from start to finish.
///
/// Each step is applied, then deliveries are processed until no batch
/// arrives within the settle window.
#[derive(Debug)]
pub struct Replayer {
    notifier: ResizeNotifier<ElementId, SimulatedWatcher>,
    recorded: Recorded,
    settle: Duration,
}

impl Replayer {
    /// Builds the layout and an unmounted notifier.
    ///
    /// # Errors
    ///
    /// Returns [`ReplayError::UnknownElement`] if the explicit element in
    /// `settings` is not declared by the scenario.
    pub fn new(
        settings: &NotifierSettings,
        scenario: &Scenario,
        settle: Duration,
    ) -> Result<Self, ReplayError> {
        let (tx, rx) = channel();
        let mut watcher = SimulatedWatcher::new(tx).with_host_size(scenario.host_size);
        for element in &scenario.elements {
            watcher.create_element(element.name.clone(), element.size);
        }

        let recorded: Recorded = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&recorded);
        let mut options = settings
            .to_options(move |width, height| sink.borrow_mut().push((width, height)))
            .on_host_ref(|host: &ElementId| tracing::debug!("Host element attached as {host}"));

        if let Some(name) = settings.element.as_deref() {
            let id = watcher
                .element(name)
                .ok_or_else(|| ReplayError::UnknownElement {
                    name: name.to_string(),
                    context: "notifier.element".to_string(),
                })?;
            options = options.element(id);
        }

        Ok(Self {
            notifier: ResizeNotifier::new(watcher, rx, options),
            recorded,
            settle,
        })
    }

    /// Returns the notifier being driven.
    #[must_use]
    pub const fn notifier(&self) -> &ResizeNotifier<ElementId, SimulatedWatcher> {
        &self.notifier
    }

    /// Runs every step and collects the notifications.
    ///
    /// # Errors
    ///
    /// Returns [`ReplayError`] if a step refers to a missing element or a
    /// direct layout change is rejected. Errors from the notifier's own entry
    /// points are logged and recorded in [`ReplayReport::failed_steps`].
    pub async fn run(mut self, steps: &[Step]) -> Result<ReplayReport, ReplayError> {
        let mut report = ReplayReport::default();

        for (index, step) in steps.iter().enumerate() {
            let number = index + 1;
            tracing::debug!("Step {number}: {}", step.action());

            if let Err(e) = self.apply(number, step)? {
                tracing::warn!("Step {number} ({}) failed: {e}", step.action());
                report.failed_steps.push(number);
            }
            self.settle().await;

            report.notifications.extend(
                self.recorded
                    .borrow_mut()
                    .drain(..)
                    .map(|(width, height)| Notification {
                        step: number,
                        action: step.action(),
                        width,
                        height,
                    }),
            );
            report.steps = number;
        }

        self.notifier.on_dispose();
        tracing::info!(
            "Replayed {} step(s), {} notification(s)",
            report.steps,
            report.notifications.len()
        );
        Ok(report)
    }

    /// Applies one step.
    ///
    /// The outer error aborts the replay; the inner one is a notifier
    /// failure the replay continues past.
    fn apply(&mut self, number: usize, step: &Step) -> Result<Result<(), WatchError>, ReplayError> {
        let outcome = match step {
            Step::Mount => self.notifier.mount(),
            Step::Unmount => {
                self.notifier.on_dispose();
                Ok(())
            }
            Step::Resize { element, size } => {
                let id = self.resolve(element, number)?;
                self.notifier
                    .watcher_mut()
                    .resize(id, *size)
                    .map_err(|source| layout_error(number, step, source))?;
                Ok(())
            }
            Step::Select { element } => {
                let id = self.resolve(element, number)?;
                self.notifier.set_element(Some(id))
            }
            Step::Clear => self.notifier.set_element(None),
            Step::Detach { element } => {
                let id = self.resolve(element, number)?;
                self.notifier
                    .watcher_mut()
                    .detach(id)
                    .map_err(|source| layout_error(number, step, source))?;
                Ok(())
            }
            Step::Configure {
                horizontal,
                vertical,
                initial,
            } => {
                let current = self.notifier.axes();
                self.notifier.set_axes(AxisConfig::new(
                    horizontal.unwrap_or(current.horizontal),
                    vertical.unwrap_or(current.vertical),
                ));
                if let Some(report) = initial {
                    self.notifier.set_initial(*report);
                }
                Ok(())
            }
        };
        Ok(outcome)
    }

    /// Processes deliveries until none arrives within the settle window.
    async fn settle(&mut self) {
        self.notifier.process_pending();
        while let Ok(Some(_)) = tokio::time::timeout(self.settle, self.notifier.next_delivery()).await
        {}
    }

    fn resolve(&self, name: &str, step: usize) -> Result<ElementId, ReplayError> {
        let found = if name == HOST_ELEMENT {
            self.notifier.host().copied()
        } else {
            self.notifier.watcher().element(name)
        };
        found.ok_or_else(|| ReplayError::UnknownElement {
            name: name.to_string(),
            context: format!("step {step}"),
        })
    }
}

/// Replays `scenario` with the given notifier settings.
///
/// # Errors
///
/// See [`Replayer::new`] and [`Replayer::run`].
pub async fn replay(
    settings: &NotifierSettings,
    scenario: &Scenario,
    settle: Duration,
) -> Result<ReplayReport, ReplayError> {
    Replayer::new(settings, scenario, settle)?
        .run(&scenario.steps)
        .await
}

fn layout_error(step: usize, kind: &Step, source: WatchError) -> ReplayError {
    ReplayError::Layout {
        step,
        action: kind.action(),
        source,
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
