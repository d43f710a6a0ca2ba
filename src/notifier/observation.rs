//! Subscription lifetime management.
//!
//! [`Observation`] owns the watcher, the delivery queue and the single bound
//! target. It guarantees that at most one target is observed at a time and
//! that nothing measured for a superseded target ever leaves this type.

use crate::watcher::{Deliveries, ResizeEntry, Size, Target, WatchError, Watcher};

/// Owner of one watcher subscription.
///
/// # Retargeting
///
/// [`Observation::retarget`] runs three steps in order:
/// 1. Unobserve the current target
/// 2. Discard every batch already queued (all of it belongs to the old binding)
/// 3. Observe the new target
///
/// If step 3 fails the observation is left unbound and the error is returned.
#[derive(Debug)]
pub struct Observation<T, W> {
    watcher: W,
    deliveries: Deliveries<T>,
    bound: Option<T>,
}

impl<T, W> Observation<T, W>
where
    T: Target,
    W: Watcher<T>,
{
    /// Creates an unbound observation.
    #[must_use]
    pub const fn new(watcher: W, deliveries: Deliveries<T>) -> Self {
        Self {
            watcher,
            deliveries,
            bound: None,
        }
    }

    /// Returns the currently bound target, if any.
    #[must_use]
    pub const fn bound(&self) -> Option<&T> {
        self.bound.as_ref()
    }

    /// Returns true if a target is bound.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.bound.is_some()
    }

    /// Returns the underlying watcher.
    #[must_use]
    pub const fn watcher(&self) -> &W {
        &self.watcher
    }

    /// Returns the underlying watcher mutably.
    pub const fn watcher_mut(&mut self) -> &mut W {
        &mut self.watcher
    }

    /// Subscribes to the first available target.
    ///
    /// Calling `start` while already bound behaves like [`Self::retarget`].
    ///
    /// # Errors
    ///
    /// Propagates the watcher's [`WatchError`] if `target` cannot be observed.
    pub fn start(&mut self, target: T) -> Result<(), WatchError> {
        if self.bound.is_some() {
            return self.retarget(target);
        }
        self.bind(target)
    }

    /// Moves the subscription to `target`.
    ///
    /// # Errors
    ///
    /// Propagates the watcher's [`WatchError`] if `target` cannot be observed.
    /// The previous target is already released at that point.
    pub fn retarget(&mut self, target: T) -> Result<(), WatchError> {
        self.release();
        self.bind(target)
    }

    /// Tears the subscription down. Safe to call at any time.
    pub fn stop(&mut self) {
        if let Some(previous) = self.bound.take() {
            tracing::debug!("Stopping observation of {previous:?}");
        }
        self.watcher.disconnect();
        let discarded = self.deliveries.discard_pending();
        if discarded > 0 {
            tracing::debug!("Dropped {discarded} queued measurement(s) on stop");
        }
    }

    /// Takes the next queued batch without waiting.
    ///
    /// Returns the sizes measured for the bound target; entries for any other
    /// target are dropped. `None` means the queue is empty.
    pub fn try_next_batch(&mut self) -> Option<Vec<Size>> {
        let batch = self.deliveries.try_next()?;
        Some(self.current_sizes(&batch))
    }

    /// Waits for the next batch and keeps the bound target's sizes.
    ///
    /// Returns `None` once the watcher side of the channel is gone.
    pub async fn next_batch(&mut self) -> Option<Vec<Size>> {
        let batch = self.deliveries.recv().await?;
        Some(self.current_sizes(&batch))
    }

    /// Keeps the sizes of entries that belong to the bound target.
    #[must_use]
    pub fn current_sizes(&self, entries: &[ResizeEntry<T>]) -> Vec<Size> {
        let Some(bound) = self.bound.as_ref() else {
            if !entries.is_empty() {
                tracing::debug!("Dropped {} measurement(s) while unbound", entries.len());
            }
            return Vec::new();
        };

        let sizes: Vec<Size> = entries
            .iter()
            .filter(|entry| entry.target == *bound)
            .map(ResizeEntry::size)
            .collect();

        let stale = entries.len() - sizes.len();
        if stale > 0 {
            tracing::debug!("Dropped {stale} measurement(s) for superseded targets");
        }
        sizes
    }

    fn bind(&mut self, target: T) -> Result<(), WatchError> {
        self.watcher.observe(&target)?;
        tracing::debug!("Observing {target:?}");
        self.bound = Some(target);
        Ok(())
    }

    /// Unobserves the bound target and drops everything queued for it.
    pub fn release(&mut self) {
        if let Some(previous) = self.bound.take() {
            self.watcher.unobserve(&previous);
            tracing::debug!("Stopped observing {previous:?}");
        }
        let discarded = self.deliveries.discard_pending();
        if discarded > 0 {
            tracing::debug!("Dropped {discarded} queued measurement(s) from previous target");
        }
    }
}

#[cfg(test)]
#[path = "observation_tests.rs"]
mod tests;
