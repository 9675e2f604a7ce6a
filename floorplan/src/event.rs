// Copyright 2025 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use floorplan_scene::ApartmentId;
use kurbo::Point;

/// Input accepted by the controller.
///
/// Pointer positions are in stage (screen) coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// One wheel notch. Positive `delta_y` zooms out, anything else zooms in.
    Wheel {
        /// Pointer position at the time of the event.
        pointer: Point,
        /// Vertical wheel delta.
        delta_y: f64,
    },
    /// A pan gesture started.
    DragStart {
        /// Pointer position.
        pointer: Point,
    },
    /// The pointer moved during a pan gesture.
    DragMove {
        /// Pointer position.
        pointer: Point,
    },
    /// A pan gesture finished and the host reports where the stage ended up.
    DragEnd {
        /// Final stage position, used verbatim as the new offset.
        position: Point,
    },
    /// The host resolved a click to an apartment.
    Click {
        /// Clicked apartment.
        apartment: ApartmentId,
    },
    /// A tap or click at a screen position, to be hit-tested.
    Tap {
        /// Pointer position.
        pointer: Point,
    },
    /// The pointer moved without a gesture in progress.
    PointerMove {
        /// Pointer position.
        pointer: Point,
    },
    /// Floor selector changed.
    SelectFloor(u32),
    /// Entrance selector changed.
    SelectEntrance(u32),
    /// "Reset view" pressed.
    ResetView,
    /// Scale and center the view so the whole building outline is visible.
    FitScene,
    /// Overlay close button pressed.
    CloseOverlay,
    /// Overlay "details" button pressed.
    ShowDetails,
    /// Overlay "reserve" button pressed.
    Reserve,
}

/// Pointer cursor the host should show over the stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cursor {
    /// Regular arrow.
    Default,
    /// Hand, shown over apartments.
    Pointer,
}

/// Side effect requested by a transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Show the full details of an apartment.
    ShowDetails(ApartmentId),
    /// Start a reservation for an apartment.
    Reserve(ApartmentId),
    /// Change the stage cursor.
    SetCursor(Cursor),
}
