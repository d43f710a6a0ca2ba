//! Tests for `Observation` subscription handling.

use super::*;
use crate::notifier::test_fixtures::{Call, emit, recording_watcher};

#[test]
fn new_observation_is_unbound() {
    let (watcher, rx) = recording_watcher();
    let observation = Observation::new(watcher, rx);

    assert!(!observation.is_active());
    assert!(observation.bound().is_none());
}

#[test]
fn start_observes_target() {
    let (watcher, rx) = recording_watcher();
    let calls = watcher.calls();
    let mut observation = Observation::new(watcher, rx);

    observation.start("host").unwrap();

    assert_eq!(observation.bound(), Some(&"host"));
    assert_eq!(*calls.borrow(), vec![Call::Observe("host")]);
}

#[test]
fn start_delivers_initial_measurement_through_queue() {
    let (watcher, rx) = recording_watcher();
    let mut observation = Observation::new(watcher.with_size("host", 200.0, 100.0), rx);

    observation.start("host").unwrap();

    assert_eq!(
        observation.try_next_batch(),
        Some(vec![Size::new(200.0, 100.0)])
    );
    assert!(observation.try_next_batch().is_none());
}

#[test]
fn start_failure_propagates_and_leaves_unbound() {
    let (watcher, rx) = recording_watcher();
    let mut observation = Observation::new(watcher.failing_on("gone"), rx);

    let result = observation.start("gone");

    assert!(matches!(result, Err(WatchError::Detached { .. })));
    assert!(!observation.is_active());
}

#[test]
fn retarget_unobserves_before_observing() {
    let (watcher, rx) = recording_watcher();
    let calls = watcher.calls();
    let mut observation = Observation::new(watcher, rx);
    observation.start("x").unwrap();

    observation.retarget("y").unwrap();

    assert_eq!(
        *calls.borrow(),
        vec![Call::Observe("x"), Call::Unobserve("x"), Call::Observe("y")]
    );
    assert_eq!(observation.bound(), Some(&"y"));
}

#[test]
fn retarget_discards_queued_measurements_of_old_target() {
    let (watcher, rx) = recording_watcher();
    let sender = watcher.emitter();
    let mut observation = Observation::new(watcher.with_size("y", 50.0, 50.0), rx);
    observation.start("x").unwrap();
    emit(&sender, "x", 10.0, 10.0);

    observation.retarget("y").unwrap();

    assert_eq!(observation.try_next_batch(), Some(vec![Size::new(50.0, 50.0)]));
    assert!(observation.try_next_batch().is_none());
}

#[test]
fn retarget_failure_releases_previous_target() {
    let (watcher, rx) = recording_watcher();
    let calls = watcher.calls();
    let mut observation = Observation::new(watcher.failing_on("bad"), rx);
    observation.start("x").unwrap();

    assert!(observation.retarget("bad").is_err());

    assert!(!observation.is_active());
    assert_eq!(calls.borrow()[1], Call::Unobserve("x"));
}

#[test]
fn start_while_bound_behaves_like_retarget() {
    let (watcher, rx) = recording_watcher();
    let calls = watcher.calls();
    let mut observation = Observation::new(watcher, rx);
    observation.start("x").unwrap();

    observation.start("y").unwrap();

    assert_eq!(calls.borrow()[1], Call::Unobserve("x"));
    assert_eq!(observation.bound(), Some(&"y"));
}

#[test]
fn stop_disconnects_and_unbinds() {
    let (watcher, rx) = recording_watcher();
    let calls = watcher.calls();
    let mut observation = Observation::new(watcher, rx);
    observation.start("x").unwrap();

    observation.stop();

    assert!(!observation.is_active());
    assert_eq!(calls.borrow().last(), Some(&Call::Disconnect));
}

#[test]
fn stop_without_start_is_safe() {
    let (watcher, rx) = recording_watcher();
    let mut observation = Observation::new(watcher, rx);

    observation.stop();
    observation.stop();

    assert!(!observation.is_active());
}

#[test]
fn stop_discards_queued_measurements() {
    let (watcher, rx) = recording_watcher();
    let mut observation = Observation::new(watcher.with_size("x", 1.0, 1.0), rx);
    observation.start("x").unwrap();

    observation.stop();

    assert!(observation.try_next_batch().is_none());
}

#[test]
fn current_sizes_keeps_only_bound_target() {
    let (watcher, rx) = recording_watcher();
    let mut observation = Observation::new(watcher, rx);
    observation.start("y").unwrap();

    let sizes = observation.current_sizes(&[
        ResizeEntry::new("x", 1.0, 1.0),
        ResizeEntry::new("y", 2.0, 2.0),
    ]);

    assert_eq!(sizes, vec![Size::new(2.0, 2.0)]);
}

#[test]
fn current_sizes_is_empty_while_unbound() {
    let (watcher, rx) = recording_watcher();
    let observation = Observation::new(watcher, rx);

    assert!(
        observation
            .current_sizes(&[ResizeEntry::new("x", 1.0, 1.0)])
            .is_empty()
    );
}

#[tokio::test(start_paused = true)]
async fn next_batch_waits_for_delivery() {
    let (watcher, rx) = recording_watcher();
    let sender = watcher.emitter();
    let mut observation = Observation::new(watcher, rx);
    observation.start("x").unwrap();

    emit(&sender, "x", 3.0, 4.0);

    assert_eq!(observation.next_batch().await, Some(vec![Size::new(3.0, 4.0)]));
}
