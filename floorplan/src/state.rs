// Copyright 2025 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use floorplan_event_state::drag::DragState;
use floorplan_event_state::hover::HoverState;
use floorplan_scene::{Apartment, ApartmentId, Scene, SelectorKind};
use floorplan_selection::{Overlay, Selection};
use floorplan_view2d::{ClampMode, Viewport2D};
use kurbo::{Point, Rect};

use crate::config::{ControllerConfig, PanBounds};

/// Current values of the floor and entrance selectors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectorState {
    /// Selected floor.
    pub floor: u32,
    /// Selected entrance.
    pub entrance: u32,
}

impl SelectorState {
    /// The first option of each of the scene's selectors.
    #[must_use]
    pub fn initial(scene: &Scene) -> Self {
        let first = |kind| scene.options(kind).first().copied().unwrap_or_default();
        Self {
            floor: first(SelectorKind::Floor),
            entrance: first(SelectorKind::Entrance),
        }
    }

    /// Value of one selector.
    #[must_use]
    pub fn get(&self, kind: SelectorKind) -> u32 {
        match kind {
            SelectorKind::Floor => self.floor,
            SelectorKind::Entrance => self.entrance,
        }
    }

    pub(crate) fn set(&mut self, kind: SelectorKind, value: u32) {
        match kind {
            SelectorKind::Floor => self.floor = value,
            SelectorKind::Entrance => self.entrance = value,
        }
    }
}

/// Everything that changes while the viewer is used.
///
/// The scene itself is immutable and lives outside this record.
#[derive(Clone, Debug, PartialEq)]
pub struct FloorPlanState {
    /// Stage scale and offset.
    pub viewport: Viewport2D,
    /// Highlighted apartment.
    pub selection: Selection<ApartmentId>,
    /// Details overlay.
    pub overlay: Overlay<ApartmentId>,
    /// Floor and entrance selectors.
    pub selectors: SelectorState,
    /// Apartment under the pointer.
    pub hover: HoverState<ApartmentId>,
    /// In-progress pan gesture.
    pub drag: DragState,
}

impl FloorPlanState {
    /// Start-up state: identity view, nothing selected, first selector options.
    #[must_use]
    pub fn initial(scene: &Scene, config: &ControllerConfig) -> Self {
        let size = config.view_size;
        let mut viewport = Viewport2D::new(Rect::new(0.0, 0.0, size.width, size.height));
        if let Some(range) = config.zoom_limits {
            let limits = range.limits();
            if limits.is_none() {
                log::warn!("ignoring unusable zoom range {}..{}", range.min, range.max);
            }
            viewport.set_zoom_limits(limits);
        }
        if config.pan_bounds == PanBounds::KeepSceneVisible {
            viewport.set_world_bounds(Some(scene.bounds()));
            viewport.set_clamp_mode(ClampMode::KeepSomeVisible);
        }
        Self {
            viewport,
            selection: Selection::new(),
            overlay: Overlay::new(),
            selectors: SelectorState::initial(scene),
            hover: HoverState::new(),
            drag: DragState::default(),
        }
    }

    /// Id of the selected apartment, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&ApartmentId> {
        self.selection.current()
    }

    /// The apartment shown in the overlay, if it is open.
    #[must_use]
    pub fn overlay_apartment<'s>(&self, scene: &'s Scene) -> Option<&'s Apartment> {
        self.overlay
            .subject()
            .and_then(|id| scene.apartment(id.as_str()))
    }

    /// Topmost apartment under a stage position.
    #[must_use]
    pub fn apartment_at<'s>(&self, scene: &'s Scene, pointer: Point) -> Option<&'s Apartment> {
        scene.hit_test(self.viewport.view_to_world_point(pointer))
    }
}
