// Copyright 2025 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state helper: turn pointer positions into viewport offsets.
//!
//! ## Usage
//!
//! 1) Start a pan by calling [`DragState::start`] with the pointer position and
//!    the viewport offset at that moment.
//! 2) On each move event, call [`DragState::update`] to get the movement delta since the
//!    last update, or [`DragState::offset_at`] to get the offset the viewport should have now.
//! 3) End the gesture with [`DragState::end`], which returns the final offset for the last
//!    recorded pointer position and resets state.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use floorplan_event_state::drag::DragState;
//!
//! let mut drag = DragState::default();
//!
//! // Start dragging at (10, 20) while the scene origin sits at (100, 0).
//! drag.start(Point::new(10.0, 20.0), Vec2::new(100.0, 0.0));
//! assert!(drag.is_dragging());
//!
//! // Move to (15, 25) - delta is (5, 5)
//! let delta = drag.update(Point::new(15.0, 25.0)).unwrap();
//! assert_eq!(delta, Vec2::new(5.0, 5.0));
//!
//! // The viewport should now be offset by the total drag distance.
//! let offset = drag.offset_at(Point::new(15.0, 25.0)).unwrap();
//! assert_eq!(offset, Vec2::new(105.0, 5.0));
//!
//! assert_eq!(drag.end(), Some(Vec2::new(105.0, 5.0)));
//! assert!(!drag.is_dragging());
//! ```

use kurbo::{Point, Vec2};

/// Tracks an in-progress pan gesture.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragState {
    /// Pointer position where the gesture started.
    pub start_pos: Option<Point>,
    /// Last recorded pointer position during the gesture.
    pub last_pos: Option<Point>,
    /// Viewport offset when the gesture started.
    pub start_offset: Vec2,
}

impl DragState {
    /// Start tracking a new pan from `pos` with the viewport at `offset`.
    pub fn start(&mut self, pos: Point, offset: Vec2) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
        self.start_offset = offset;
    }

    /// Record a new pointer position, returning the movement delta since the last update.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        self.start_pos?;
        let delta = self.last_pos.map(|last| pos - last);
        self.last_pos = Some(pos);
        delta
    }

    /// Get total pointer offset from the gesture start.
    pub fn total_offset(&self, current_pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start_pos| current_pos - start_pos)
    }

    /// Viewport offset implied by the pointer being at `current_pos`.
    pub fn offset_at(&self, current_pos: Point) -> Option<Vec2> {
        self.total_offset(current_pos)
            .map(|total| self.start_offset + total)
    }

    /// End the gesture, returning the offset for the last recorded position.
    pub fn end(&mut self) -> Option<Vec2> {
        let offset = self.last_pos.and_then(|last| self.offset_at(last));
        *self = Self::default();
        offset
    }

    /// Returns `true` while a gesture is active.
    pub fn is_dragging(&self) -> bool {
        self.start_pos.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_drag_state_is_not_dragging() {
        let drag = DragState::default();
        assert!(!drag.is_dragging());
        assert!(drag.last_pos.is_none());
        assert_eq!(drag.start_offset, Vec2::ZERO);
    }

    #[test]
    fn start_records_pointer_and_offset() {
        let mut drag = DragState::default();
        let start = Point::new(10.0, 20.0);

        drag.start(start, Vec2::new(-3.0, 4.0));

        assert_eq!(drag.start_pos, Some(start));
        assert_eq!(drag.start_pos, drag.last_pos);
        assert_eq!(drag.start_offset, Vec2::new(-3.0, 4.0));
    }

    #[test]
    fn update_returns_none_when_not_dragging() {
        let mut drag = DragState::default();

        let delta = drag.update(Point::new(15.0, 25.0));

        assert_eq!(delta, None);
        assert!(drag.last_pos.is_none());
    }

    #[test]
    fn multiple_updates_track_incremental_deltas() {
        let mut drag = DragState::default();
        drag.start(Point::new(0.0, 0.0), Vec2::ZERO);

        assert_eq!(drag.update(Point::new(5.0, 3.0)), Some(Vec2::new(5.0, 3.0)));
        assert_eq!(drag.update(Point::new(8.0, 7.0)), Some(Vec2::new(3.0, 4.0)));
        assert_eq!(drag.update(Point::new(10.0, 10.0)), Some(Vec2::new(2.0, 3.0)));
    }

    #[test]
    fn offset_follows_total_pointer_travel() {
        let mut drag = DragState::default();
        drag.start(Point::new(100.0, 100.0), Vec2::new(-10.0, -6.0));
        drag.update(Point::new(90.0, 85.0));

        assert_eq!(
            drag.offset_at(Point::new(90.0, 85.0)),
            Some(Vec2::new(-20.0, -21.0))
        );
    }

    #[test]
    fn offset_is_none_when_not_dragging() {
        let drag = DragState::default();
        assert_eq!(drag.offset_at(Point::new(1.0, 1.0)), None);
        assert_eq!(drag.total_offset(Point::new(1.0, 1.0)), None);
    }

    #[test]
    fn end_returns_final_offset_and_resets() {
        let mut drag = DragState::default();
        drag.start(Point::new(10.0, 20.0), Vec2::new(1.0, 1.0));
        drag.update(Point::new(15.0, 25.0));

        assert_eq!(drag.end(), Some(Vec2::new(6.0, 6.0)));
        assert_eq!(drag, DragState::default());
    }

    #[test]
    fn end_on_fresh_state_is_safe() {
        let mut drag = DragState::default();
        assert_eq!(drag.end(), None);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn start_overwrites_previous_drag() {
        let mut drag = DragState::default();
        drag.start(Point::new(0.0, 0.0), Vec2::ZERO);
        drag.update(Point::new(10.0, 10.0));

        let new_start = Point::new(50.0, 60.0);
        drag.start(new_start, Vec2::new(7.0, 7.0));

        assert_eq!(drag.start_pos, Some(new_start));
        assert_eq!(drag.start_pos, drag.last_pos);
        assert_eq!(
            drag.offset_at(Point::new(55.0, 65.0)),
            Some(Vec2::new(12.0, 12.0))
        );
    }
}
