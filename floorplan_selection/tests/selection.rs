// Copyright 2025 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `floorplan_selection` crate.
//!
//! These exercise how `Selection<T>` and `Overlay<T>` interact with their
//! revision counter and with each other.

use floorplan_selection::{Overlay, Selection};

#[test]
fn empty_selection_basics() {
    let sel = Selection::<u32>::new();
    assert!(sel.is_empty());
    assert_eq!(sel.current(), None);
    assert_eq!(sel.revision(), 0);
}

#[test]
fn select_bumps_revision_only_on_change() {
    let mut sel = Selection::new();
    sel.select(1);
    assert_eq!(sel.current(), Some(&1));
    assert_eq!(sel.revision(), 1);

    sel.select(1);
    assert_eq!(sel.revision(), 1);

    sel.select(2);
    assert_eq!(sel.revision(), 2);
}

#[test]
fn selecting_another_key_is_exclusive() {
    let mut sel = Selection::new();
    sel.select("apt-left");
    sel.select("apt-right");

    assert!(sel.is_selected(&"apt-right"));
    assert!(!sel.is_selected(&"apt-left"));
}

#[test]
fn clear_empties_and_bumps_revision_only_on_change() {
    let mut sel = Selection::new();
    sel.clear();
    assert_eq!(sel.revision(), 0);

    sel.select(7);
    sel.clear();
    assert!(sel.is_empty());
    assert_eq!(sel.revision(), 2);
}

#[test]
fn overlay_starts_closed() {
    let overlay = Overlay::<u32>::default();
    assert!(!overlay.is_open());
    assert_eq!(overlay.subject(), None);
}

#[test]
fn overlay_open_replaces_subject() {
    let mut overlay = Overlay::new();
    overlay.open(1);
    overlay.open(2);
    assert!(overlay.is_open());
    assert_eq!(overlay.subject(), Some(&2));
}

#[test]
fn overlay_close_returns_subject_and_leaves_selection_alone() {
    let mut sel = Selection::new();
    let mut overlay = Overlay::new();
    sel.select("apt-left");
    overlay.open("apt-left");

    assert_eq!(overlay.close(), Some("apt-left"));
    assert!(!overlay.is_open());
    assert_eq!(overlay.close(), None);
    assert_eq!(sel.current(), Some(&"apt-left"));
}
