use super::filter_config;
use crate::conf::Config;
use crate::enrichment::pv_filter::{PageViewDecision, PvFilter, PvFilterHandle, RejectReason};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

fn config_with(codes: &[u16], patterns: &[&str]) -> Config {
    Config {
        pv_filter: filter_config(codes, patterns, &[]),
        ..Default::default()
    }
}

#[test]
fn default_handle_rejects_everything() {
    let handle = PvFilterHandle::default();

    assert!(!handle.classify(200, "/", "8.8.8.8"));
}

#[test]
fn initialize_publishes_new_rules() {
    // Arrange
    let handle = PvFilterHandle::default();

    // Act
    handle.initialize(&config_with(&[200], &[r"^/hidden"])).unwrap();

    // Assert
    assert!(handle.classify(200, "/", "8.8.8.8"));
    assert!(!handle.classify(200, "/hidden", "8.8.8.8"));
}

#[test]
fn failed_initialize_keeps_current_snapshot() {
    // Arrange
    let handle = PvFilterHandle::from_config(&config_with(&[200], &[r"^/hidden"])).unwrap();

    // Act
    let result = handle.initialize(&config_with(&[404], &["("]));

    // Assert
    assert!(result.is_err());
    assert!(handle.classify(200, "/", "8.8.8.8"));
}

#[test]
fn reinitializing_with_same_config_is_idempotent() {
    let cfg = config_with(&[200, 301], &[r"\.png$"]);
    let handle = PvFilterHandle::from_config(&cfg).unwrap();
    let before = handle.snapshot();

    handle.initialize(&cfg).unwrap();
    let after = handle.snapshot();

    assert!(!Arc::ptr_eq(&before, &after));
    for (status, path, ip) in [(200, "/a.png", "8.8.8.8"), (301, "/", "1.1.1.1"), (500, "/", "1.1.1.1")] {
        assert_eq!(before.evaluate(status, path, ip), after.evaluate(status, path, ip));
    }
}

#[test]
fn held_snapshot_is_not_affected_by_swap() {
    // Arrange
    let handle = PvFilterHandle::from_config(&config_with(&[200], &[r"^/old"])).unwrap();
    let held = handle.snapshot();

    // Act
    let replaced = handle.replace(
        PvFilter::from_config(&filter_config(&[200], &[r"^/new"], &[])).unwrap(),
    );

    // Assert
    assert!(Arc::ptr_eq(&held, &replaced));
    assert_eq!(
        held.evaluate(200, "/old", "8.8.8.8"),
        PageViewDecision::Reject(RejectReason::ExcludedPath { index: 0 })
    );
    assert_eq!(held.evaluate(200, "/new", "8.8.8.8"), PageViewDecision::Count);
    assert_eq!(handle.evaluate(200, "/old", "8.8.8.8"), PageViewDecision::Count);
}

#[test]
fn readers_see_whole_snapshots_during_reloads() {
    // Two rule sets that disagree on every probe. A mixed snapshot would
    // count or reject both probes at once.
    let a = config_with(&[200], &[r"^/a"]);
    let b = config_with(&[200], &[r"^/b"]);
    let handle = Arc::new(PvFilterHandle::from_config(&a).unwrap());
    let stop = Arc::new(AtomicBool::new(false));

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let handle = Arc::clone(&handle);
            let stop = Arc::clone(&stop);
            std::thread::spawn(move || {
                while !stop.load(Ordering::Relaxed) {
                    let snapshot = handle.snapshot();
                    let a_counted = snapshot.classify(200, "/a", "8.8.8.8");
                    let b_counted = snapshot.classify(200, "/b", "8.8.8.8");
                    assert_ne!(a_counted, b_counted);
                }
            })
        })
        .collect();

    for i in 0..200 {
        let cfg = if i % 2 == 0 { &b } else { &a };
        handle.initialize(cfg).unwrap();
    }
    stop.store(true, Ordering::Relaxed);

    for reader in readers {
        reader.join().unwrap();
    }
}

#[test]
fn global_handle_is_initialized_explicitly() {
    let cfg = config_with(&[200], &[r"^/private"]);

    crate::enrichment::pv_filter::init_pv_filters(&cfg).unwrap();

    assert!(crate::enrichment::pv_filter::should_count_as_page_view(200, "/", "8.8.8.8"));
    assert!(!crate::enrichment::pv_filter::should_count_as_page_view(200, "/private/x", "8.8.8.8"));
}
