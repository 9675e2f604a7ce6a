// Copyright 2025 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Floorplan View 2D: the pan/zoom viewport of the floor-plan viewer.
//!
//! This crate provides a small, headless model of the stage that shows the
//! floor plan. It focuses on:
//! - Viewport state: a uniform scale factor and a translation offset.
//! - Wheel zoom in discrete steps that keeps the scene point under the
//!   pointer fixed on screen.
//! - Drag pan, reset, and optional zoom limits / pan clamping.
//! - Coordinate conversion between scene and screen space, for hit testing.
//!
//! It does **not** own any scene or rendering backend. Callers are expected
//! to keep the scene elsewhere, read [`Viewport2D::transform`] when building
//! their display tree, and feed input events into the zoom/pan operations.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use floorplan_view2d::{Viewport2D, ZoomDirection};
//!
//! let mut view = Viewport2D::new(Rect::new(0.0, 0.0, 1000.0, 600.0));
//!
//! // A wheel event rolled away from the user at (500, 300).
//! let pointer = Point::new(500.0, 300.0);
//! let before = view.view_to_world_point(pointer);
//! view.zoom_step(pointer, ZoomDirection::from_wheel_delta(-100.0), 1.02);
//!
//! // The scene point under the pointer has not moved.
//! let after = view.world_to_view_point(before);
//! assert!((after.x - pointer.x).abs() < 1e-9);
//! assert!((view.zoom() - 1.02).abs() < 1e-12);
//!
//! view.reset();
//! assert_eq!(view.zoom(), 1.0);
//! ```
//!
//! ## Design notes
//!
//! - The zoom factor is uniform and the transform is `translate(offset) * scale(zoom)`.
//! - Unbounded by default: with no [`ZoomLimits`] and [`ClampMode::None`]
//!   the scale may shrink towards zero or grow without limit, and the
//!   scene may be panned arbitrarily far away.
//! - Rotation is left out.
//!
//! This crate is `no_std`.

#![no_std]

mod modes;
mod viewport2d;

pub use modes::{ClampMode, ZoomDirection, ZoomLimits};
pub use viewport2d::{Viewport2D, Viewport2DDebugInfo};
