// Copyright 2025 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Floorplan: an interactive floor-plan viewer core.
//!
//! A fixed set of apartment layouts is shown on a pannable, zoomable stage.
//! Selecting an apartment highlights it and opens a details overlay with its
//! area summary; two cosmetic selectors pick a floor and an entrance.
//!
//! This crate wires the lower-level pieces together:
//! - [`floorplan_scene`] for the static scene and hit testing,
//! - [`floorplan_view2d`] for the scale + offset transform,
//! - [`floorplan_event_state`] for drag and hover bookkeeping,
//! - [`floorplan_selection`] for the selection and overlay,
//! - [`floorplan_display`] for the output display tree.
//!
//! Data flows one way. Input [`Event`]s go through the pure [`reduce`]
//! function, which returns the next [`FloorPlanState`] and a list of
//! [`Action`]s. The [`Controller`] owns the state, forwards overlay actions to
//! an [`ApartmentService`], and renders the state into a
//! [`Display`](floorplan_display::Display) plus panel view models.
//!
//! ## Minimal example
//!
//! ```rust
//! use floorplan::{Controller, Event, NoticeKind};
//! use kurbo::Point;
//!
//! let mut viewer = Controller::reference();
//!
//! // Zoom in one notch around the middle of the stage.
//! viewer.handle(Event::Wheel { pointer: Point::new(500.0, 300.0), delta_y: -100.0 });
//! assert!((viewer.state().viewport.zoom() - 1.02).abs() < 1e-12);
//!
//! // Tap the right-hand apartment and reserve it.
//! viewer.handle(Event::Tap { pointer: Point::new(700.0, 300.0) });
//! let overlay = viewer.overlay_view().unwrap();
//! assert_eq!(overlay.title, "Квартира 3");
//!
//! viewer.handle(Event::Reserve);
//! assert_eq!(viewer.service().notices()[0].kind, NoticeKind::Reservation);
//!
//! let svg = viewer.render().to_svg();
//! assert!(svg.contains("id=\"apt-right\""));
//! ```

mod config;
mod controller;
mod event;
mod panel;
mod reduce;
mod render;
mod service;
mod state;

pub use config::{
    CloseBehavior, ConfigError, ControllerConfig, DEFAULT_ZOOM_STEP, PanBounds, ViewSize,
    ZoomRange,
};
pub use controller::Controller;
pub use event::{Action, Cursor, Event};
pub use panel::{AREA_UNIT, AreaLine, NOTHING_SELECTED, OverlayView, SelectorView, SidebarView};
pub use reduce::{Context, Transition, reduce};
pub use render::{DIMENSION_OPACITY, render, render_apartment};
pub use service::{ApartmentService, Notice, NoticeKind, NoticeService};
pub use state::{FloorPlanState, SelectorState};

pub use floorplan_display;
pub use floorplan_scene;
pub use floorplan_view2d;
