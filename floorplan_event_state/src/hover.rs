// Copyright 2025 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover state helper: compute enter/leave transitions for a single hovered target.
//!
//! Flat scenes such as a floor plan only ever have one interactive target under
//! the pointer, so this tracks a single key rather than a root→target path.
//!
//! ```
//! use floorplan_event_state::hover::{HoverEvent, HoverState};
//!
//! let mut hover = HoverState::new();
//! assert_eq!(hover.update(Some(1)), [None, Some(HoverEvent::Enter(1))]);
//! assert_eq!(hover.update(Some(1)), [None, None]);
//! assert_eq!(
//!     hover.update(Some(2)),
//!     [Some(HoverEvent::Leave(1)), Some(HoverEvent::Enter(2))]
//! );
//! assert_eq!(hover.update(None), [Some(HoverEvent::Leave(2)), None]);
//! ```

/// A hover transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HoverEvent<K> {
    /// The pointer entered the target.
    Enter(K),
    /// The pointer left the target.
    Leave(K),
}

/// Tracks which target, if any, is currently under the pointer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HoverState<K> {
    current: Option<K>,
}

impl<K> Default for HoverState<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> HoverState<K> {
    /// Creates a state with nothing hovered.
    #[must_use]
    pub const fn new() -> Self {
        Self { current: None }
    }

    /// Returns the hovered target, if any.
    #[must_use]
    pub fn current(&self) -> Option<&K> {
        self.current.as_ref()
    }

    /// Forgets the hovered target without producing transitions.
    pub fn clear(&mut self) {
        self.current = None;
    }
}

impl<K: Clone + PartialEq> HoverState<K> {
    /// Updates the hovered target and returns the `[leave, enter]` transitions, in order.
    pub fn update(&mut self, target: Option<K>) -> [Option<HoverEvent<K>>; 2] {
        if self.current == target {
            return [None, None];
        }
        let leave = self.current.take().map(HoverEvent::Leave);
        let enter = target.clone().map(HoverEvent::Enter);
        self.current = target;
        [leave, enter]
    }
}
