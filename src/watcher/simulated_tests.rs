//! Tests for `SimulatedWatcher`.

use super::*;
use crate::watcher::{Deliveries, channel};

fn make_watcher() -> (SimulatedWatcher, Deliveries<ElementId>) {
    let (tx, rx) = channel();
    (SimulatedWatcher::new(tx), rx)
}

mod layout {
    use super::*;

    #[test]
    fn create_element_assigns_sequential_ids() {
        let (mut watcher, _rx) = make_watcher();
        let a = watcher.create_element("a", Size::new(1.0, 1.0));
        let b = watcher.create_element("b", Size::new(2.0, 2.0));

        assert_ne!(a, b);
        assert_eq!(watcher.element("a"), Some(a));
        assert_eq!(watcher.element("b"), Some(b));
        assert_eq!(watcher.name(b), Some("b"));
        assert_eq!(watcher.size(b), Some(Size::new(2.0, 2.0)));
    }

    #[test]
    fn element_lookup_misses_unknown_names() {
        let (watcher, _rx) = make_watcher();
        assert!(watcher.element("missing").is_none());
    }

    #[test]
    fn ids_stay_unique_after_detach() {
        let (mut watcher, _rx) = make_watcher();
        let ids: Vec<_> = (0..1000)
            .map(|i| {
                let id = watcher.create_element(format!("e{i}"), Size::default());
                watcher.detach(id).unwrap();
                id
            })
            .collect();

        let unique: std::collections::HashSet<_> = ids.iter().copied().collect();
        assert_eq!(unique.len(), ids.len());
        assert_eq!(watcher.element("e999"), ids.last().copied());
    }

    #[test]
    fn display_shows_numeric_id() {
        let (mut watcher, _rx) = make_watcher();
        let id = watcher.create_element("a", Size::default());
        assert_eq!(id.to_string(), "#0");
    }
}

mod observing {
    use super::*;

    #[test]
    fn observe_queues_initial_measurement() {
        let (mut watcher, mut rx) = make_watcher();
        let id = watcher.create_element("panel", Size::new(200.0, 100.0));

        watcher.observe(&id).unwrap();

        let batch = rx.try_next().unwrap();
        assert_eq!(batch, vec![ResizeEntry::new(id, 200.0, 100.0)]);
        assert!(watcher.is_observed(id));
    }

    #[test]
    fn observing_twice_does_not_repeat_initial_measurement() {
        let (mut watcher, mut rx) = make_watcher();
        let id = watcher.create_element("panel", Size::new(200.0, 100.0));

        watcher.observe(&id).unwrap();
        watcher.observe(&id).unwrap();

        assert_eq!(rx.discard_pending(), 1);
        assert_eq!(watcher.observed(), &[id]);
    }

    #[test]
    fn observe_unknown_element_fails() {
        let (mut watcher, mut rx) = make_watcher();
        let (mut other, _other_rx) = make_watcher();
        other.create_element("x", Size::default());
        let foreign = other.element("x").unwrap();

        let result = watcher.observe(&foreign);

        assert!(matches!(result, Err(WatchError::UnknownTarget { .. })));
        assert!(rx.try_next().is_none());
    }

    #[test]
    fn observe_detached_element_fails() {
        let (mut watcher, _rx) = make_watcher();
        let id = watcher.create_element("panel", Size::default());
        watcher.detach(id).unwrap();

        let result = watcher.observe(&id);

        assert!(matches!(result, Err(WatchError::Detached { .. })));
    }

    #[test]
    fn unobserve_stops_reporting() {
        let (mut watcher, mut rx) = make_watcher();
        let id = watcher.create_element("panel", Size::new(1.0, 1.0));
        watcher.observe(&id).unwrap();
        rx.discard_pending();

        watcher.unobserve(&id);
        let queued = watcher.resize(id, Size::new(5.0, 5.0)).unwrap();

        assert!(!queued);
        assert!(rx.try_next().is_none());
        assert_eq!(watcher.size(id), Some(Size::new(5.0, 5.0)));
    }

    #[test]
    fn disconnect_stops_every_subscription() {
        let (mut watcher, _rx) = make_watcher();
        let a = watcher.create_element("a", Size::default());
        let b = watcher.create_element("b", Size::default());
        watcher.observe(&a).unwrap();
        watcher.observe(&b).unwrap();

        watcher.disconnect();

        assert!(watcher.observed().is_empty());
    }
}

mod resizing {
    use super::*;

    #[test]
    fn resize_of_observed_element_queues_measurement() {
        let (mut watcher, mut rx) = make_watcher();
        let id = watcher.create_element("panel", Size::new(200.0, 100.0));
        watcher.observe(&id).unwrap();
        rx.discard_pending();

        let queued = watcher.resize(id, Size::new(300.0, 100.0)).unwrap();

        assert!(queued);
        assert_eq!(
            rx.try_next().unwrap(),
            vec![ResizeEntry::new(id, 300.0, 100.0)]
        );
    }

    #[test]
    fn resize_to_same_size_queues_nothing() {
        let (mut watcher, mut rx) = make_watcher();
        let id = watcher.create_element("panel", Size::new(200.0, 100.0));
        watcher.observe(&id).unwrap();
        rx.discard_pending();

        let queued = watcher.resize(id, Size::new(200.0, 100.0)).unwrap();

        assert!(!queued);
        assert!(rx.try_next().is_none());
    }

    #[test]
    fn resize_detached_element_fails() {
        let (mut watcher, _rx) = make_watcher();
        let id = watcher.create_element("panel", Size::default());
        watcher.observe(&id).unwrap();
        watcher.detach(id).unwrap();

        assert!(!watcher.is_observed(id));
        assert!(matches!(
            watcher.resize(id, Size::new(1.0, 1.0)),
            Err(WatchError::Detached { .. })
        ));
    }
}

mod host_provider {
    use super::*;

    #[test]
    fn create_host_uses_configured_size() {
        let (tx, _rx) = channel();
        let mut watcher = SimulatedWatcher::new(tx).with_host_size(Size::new(200.0, 100.0));

        let host = watcher.create_host("div").unwrap();

        assert_eq!(watcher.name(host), Some(crate::HOST_ELEMENT));
        assert_eq!(watcher.size(host), Some(Size::new(200.0, 100.0)));
    }

    #[test]
    fn create_host_rejects_empty_tag() {
        let (mut watcher, _rx) = make_watcher();
        let result = watcher.create_host("  ");
        assert!(matches!(result, Err(WatchError::HostCreation { .. })));
    }
}
