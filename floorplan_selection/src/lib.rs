// Copyright 2025 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Floorplan Selection: selection and overlay bookkeeping.
//!
//! This crate focuses on the _bookkeeping_ of picking one item in a scene and
//! showing details about it. It does **not** know how items are laid out or
//! hit-tested; callers decide how to map input into a concrete key.
//!
//! Two small containers are provided:
//! - [`Selection`]: at most one selected key plus a monotonically increasing
//!   **revision** counter that bumps when the selection changes.
//! - [`Overlay`]: a floating details panel that is either closed or open on
//!   exactly one subject. "Open without a subject" is unrepresentable.
//!
//! The two are deliberately independent: closing an overlay does not touch the
//! selection, and callers that want both cleared do so explicitly.
//!
//! ## Minimal example
//!
//! ```rust
//! use floorplan_selection::{Overlay, Selection};
//!
//! let mut selection = Selection::new();
//! let mut overlay = Overlay::new();
//!
//! // Click on an item: select it and show its details.
//! selection.select("apt-left");
//! overlay.open("apt-left");
//! assert_eq!(selection.current(), Some(&"apt-left"));
//! assert_eq!(overlay.subject(), Some(&"apt-left"));
//!
//! // Selecting another item replaces the previous one.
//! selection.select("apt-right");
//! assert!(!selection.is_selected(&"apt-left"));
//!
//! // Closing the overlay keeps the selection.
//! overlay.close();
//! assert!(!overlay.is_open());
//! assert_eq!(selection.current(), Some(&"apt-right"));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

/// A single-item selection with a revision counter.
///
/// `Selection` only requires equality on `T` for its mutation methods, which
/// keeps it easy to use with string identifiers or generational handles.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection<T> {
    current: Option<T>,
    revision: u64,
}

impl<T> Selection<T> {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: None,
            revision: 0,
        }
    }

    /// Returns `true` if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }

    /// Returns the selected key, if any.
    #[must_use]
    pub fn current(&self) -> Option<&T> {
        self.current.as_ref()
    }

    /// Returns the current revision counter.
    ///
    /// The revision is bumped only when a mutation changes the selected key.
    /// No-op calls (for example, selecting the already-selected key) leave it
    /// unchanged, so observers can use it as a cheap change marker.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Removes the selected key, if any.
    pub fn clear(&mut self) {
        if self.current.take().is_some() {
            self.bump_revision();
        }
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<T: PartialEq> Selection<T> {
    /// Returns `true` if `key` is the selected key.
    #[must_use]
    pub fn is_selected(&self, key: &T) -> bool {
        self.current.as_ref() == Some(key)
    }

    /// Replaces the selection with `key`.
    ///
    /// Any previously selected key is dropped; at most one key is ever selected.
    pub fn select(&mut self, key: T) {
        if self.is_selected(&key) {
            return;
        }
        self.current = Some(key);
        self.bump_revision();
    }
}

/// A details overlay that is either closed or open on a single subject.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Overlay<T> {
    subject: Option<T>,
}

impl<T> Default for Overlay<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Overlay<T> {
    /// Creates a closed overlay.
    #[must_use]
    pub const fn new() -> Self {
        Self { subject: None }
    }

    /// Returns `true` while the overlay is shown.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.subject.is_some()
    }

    /// Returns the subject being shown, if the overlay is open.
    #[must_use]
    pub fn subject(&self) -> Option<&T> {
        self.subject.as_ref()
    }

    /// Opens the overlay on `subject`, replacing any previous subject.
    pub fn open(&mut self, subject: T) {
        self.subject = Some(subject);
    }

    /// Closes the overlay, returning the subject that was shown.
    pub fn close(&mut self) -> Option<T> {
        self.subject.take()
    }
}
