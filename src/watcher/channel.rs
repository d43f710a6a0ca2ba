//! Delivery channel between a watcher and the notifier.
//!
//! Watchers push measurement batches through a [`DeliverySender`]; the
//! notifier owns the matching [`Deliveries`] receiver and processes batches
//! when it is driven. The queue is what makes delivery asynchronous with
//! respect to `observe`.

use super::ResizeEntry;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::mpsc::{self, error::TryRecvError};
use tokio_stream::wrappers::UnboundedReceiverStream;
use tokio_stream::{Stream, StreamExt};

/// Creates a connected sender/receiver pair.
#[must_use]
pub fn channel<T>() -> (DeliverySender<T>, Deliveries<T>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (
        DeliverySender { inner: tx },
        Deliveries {
            inner: UnboundedReceiverStream::new(rx),
        },
    )
}

/// Sending half handed to watcher implementations.
#[derive(Debug)]
pub struct DeliverySender<T> {
    inner: mpsc::UnboundedSender<Vec<ResizeEntry<T>>>,
}

impl<T> Clone for DeliverySender<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> DeliverySender<T> {
    /// Queues a batch of entries for the notifier.
    ///
    /// Empty batches are dropped. Returns `false` if the receiving side has
    /// been dropped.
    pub fn send(&self, batch: Vec<ResizeEntry<T>>) -> bool {
        if batch.is_empty() {
            return !self.inner.is_closed();
        }
        self.inner.send(batch).is_ok()
    }

    /// Returns true if the receiving side has been dropped.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.inner.is_closed()
    }
}

/// Receiving half owned by the notifier.
#[derive(Debug)]
pub struct Deliveries<T> {
    inner: UnboundedReceiverStream<Vec<ResizeEntry<T>>>,
}

impl<T> Deliveries<T> {
    /// Takes the next queued batch without waiting.
    pub fn try_next(&mut self) -> Option<Vec<ResizeEntry<T>>> {
        match self.inner.as_mut().try_recv() {
            Ok(batch) => Some(batch),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }

    /// Waits for the next batch.
    ///
    /// Returns `None` once every sender is gone and the queue is empty.
    /// Cancel-safe: dropping the future never loses a batch.
    pub async fn recv(&mut self) -> Option<Vec<ResizeEntry<T>>> {
        self.inner.next().await
    }

    /// Drops every queued batch and returns how many entries were discarded.
    pub fn discard_pending(&mut self) -> usize {
        let mut discarded = 0;
        while let Some(batch) = self.try_next() {
            discarded += batch.len();
        }
        discarded
    }
}

impl<T> Stream for Deliveries<T> {
    type Item = Vec<ResizeEntry<T>>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.inner).poll_next(cx)
    }
}
