// Copyright 2025 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Vec2};

use crate::modes::{ClampMode, ZoomDirection, ZoomLimits};

/// 2D viewport over the floor-plan scene.
///
/// `Viewport2D` tracks the stage rectangle in screen space and a uniform
/// scale + offset mapping scene coordinates onto it:
///
/// ```text
/// screen = scene * zoom + offset
/// ```
///
/// It can be used to:
/// - Convert points and rectangles between scene and screen coordinates.
/// - Zoom in discrete steps around the pointer and pan by drag.
/// - Fit the scene bounds into the view.
#[derive(Clone, Debug, PartialEq)]
pub struct Viewport2D {
    view_rect: Rect,
    world_bounds: Option<Rect>,
    zoom: f64,
    pan: Vec2,
    zoom_limits: Option<ZoomLimits>,
    clamp_mode: ClampMode,
    world_to_view: Affine,
    view_to_world: Affine,
}

impl Viewport2D {
    /// Creates a new viewport covering `view_rect` with zoom `1.0` and no offset.
    ///
    /// No zoom limits and no pan clamping are configured.
    #[must_use]
    pub fn new(view_rect: Rect) -> Self {
        let mut vp = Self {
            view_rect,
            world_bounds: None,
            zoom: 1.0,
            pan: Vec2::ZERO,
            zoom_limits: None,
            clamp_mode: ClampMode::default(),
            world_to_view: Affine::IDENTITY,
            view_to_world: Affine::IDENTITY,
        };
        vp.rebuild_transforms();
        vp
    }

    /// Returns the current view rectangle in screen coordinates.
    #[must_use]
    pub fn view_rect(&self) -> Rect {
        self.view_rect
    }

    /// Sets optional world bounds used for clamping and view fitting.
    pub fn set_world_bounds(&mut self, bounds: Option<Rect>) {
        if self.world_bounds == bounds {
            return;
        }
        self.world_bounds = bounds;
        self.clamp_to_bounds();
    }

    /// Returns the current world bounds, if any.
    #[must_use]
    pub fn world_bounds(&self) -> Option<Rect> {
        self.world_bounds
    }

    /// Returns the current uniform zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Returns the current offset (the screen position of the scene origin).
    #[must_use]
    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    /// Returns the scene → screen transform.
    #[must_use]
    pub fn transform(&self) -> Affine {
        self.world_to_view
    }

    /// Returns the configured zoom limits, if any.
    #[must_use]
    pub fn zoom_limits(&self) -> Option<ZoomLimits> {
        self.zoom_limits
    }

    /// Sets or removes the zoom limits.
    ///
    /// The current zoom is clamped into the new range.
    pub fn set_zoom_limits(&mut self, limits: Option<ZoomLimits>) {
        self.zoom_limits = limits;
        self.set_zoom(self.zoom);
    }

    /// Sets the clamp mode for panning relative to world bounds.
    pub fn set_clamp_mode(&mut self, mode: ClampMode) {
        if self.clamp_mode != mode {
            self.clamp_mode = mode;
            self.clamp_to_bounds();
        }
    }

    /// Returns the current clamp mode.
    #[must_use]
    pub fn clamp_mode(&self) -> ClampMode {
        self.clamp_mode
    }

    /// Sets the zoom factor, clamping it into the configured zoom range.
    ///
    /// Non-finite and non-positive factors are ignored.
    pub fn set_zoom(&mut self, zoom: f64) {
        let Some(clamped) = self.admissible_zoom(zoom) else {
            return;
        };
        if (self.zoom - clamped).abs() < f64::EPSILON {
            return;
        }
        self.zoom = clamped;
        self.rebuild_transforms();
        self.clamp_to_bounds();
    }

    /// Replaces the offset, as reported by the host at the end of a drag.
    pub fn set_pan(&mut self, pan: Vec2) {
        if self.pan == pan {
            return;
        }
        self.pan = pan;
        self.rebuild_transforms();
        self.clamp_to_bounds();
    }

    /// Applies one discrete zoom step of `factor` around `anchor_view`.
    ///
    /// This is the wheel handler: the scene point under `anchor_view` is
    /// computed from the *current* zoom and offset, the zoom is multiplied
    /// (or divided) by `factor`, and the offset is recomputed so that the
    /// same scene point maps back onto `anchor_view`.
    pub fn zoom_step(&mut self, anchor_view: Point, direction: ZoomDirection, factor: f64) {
        if !(factor.is_finite() && factor > 0.0) {
            return;
        }
        let target = direction.apply(self.zoom, factor);
        self.zoom_to_about(anchor_view, target);
    }

    /// Resets zoom to `1.0` and offset to zero.
    ///
    /// This is unconditional: limits and clamping are not consulted.
    pub fn reset(&mut self) {
        self.zoom = 1.0;
        self.pan = Vec2::ZERO;
        self.rebuild_transforms();
    }

    /// Scales and centers the view so that `rect` (in scene coordinates) is
    /// fully visible, preserving aspect ratio.
    ///
    /// The zoom is still clamped to the configured limits.
    pub fn fit_rect(&mut self, rect: Rect) {
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return;
        }
        let view_size = self.view_rect.size();
        if view_size.width <= 0.0 || view_size.height <= 0.0 {
            return;
        }

        let sx = view_size.width / rect.width();
        let sy = view_size.height / rect.height();
        let target_zoom = sx.min(sy);
        let zoom = self.admissible_zoom(target_zoom).unwrap_or(self.zoom);
        self.zoom = zoom;

        self.pan = self.view_rect.center().to_vec2() - rect.center().to_vec2() * zoom;

        self.rebuild_transforms();
        self.clamp_to_bounds();
    }

    /// Returns the visible world‑space rectangle.
    #[must_use]
    pub fn visible_world_rect(&self) -> Rect {
        self.view_to_world_rect(self.view_rect)
    }

    /// Converts a world‑space point into screen coordinates.
    #[must_use]
    pub fn world_to_view_point(&self, pt: Point) -> Point {
        self.world_to_view * pt
    }

    /// Converts a screen‑space point into world coordinates.
    #[must_use]
    pub fn view_to_world_point(&self, pt: Point) -> Point {
        self.view_to_world * pt
    }

    /// Converts a screen‑space rectangle into world coordinates.
    #[must_use]
    pub fn view_to_world_rect(&self, rect: Rect) -> Rect {
        // Uniform positive scale plus translation keeps rectangles axis-aligned.
        let p0 = self.view_to_world * rect.origin();
        let p1 = self.view_to_world * Point::new(rect.max_x(), rect.max_y());
        Rect::from_points(p0, p1)
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> Viewport2DDebugInfo {
        Viewport2DDebugInfo {
            view_rect: self.view_rect,
            world_bounds: self.world_bounds,
            visible_world_rect: self.visible_world_rect(),
            zoom: self.zoom,
            pan: self.pan,
            zoom_limits: self.zoom_limits,
            clamp_mode: self.clamp_mode,
        }
    }

    fn zoom_to_about(&mut self, anchor_view: Point, target_zoom: f64) {
        let Some(new_zoom) = self.admissible_zoom(target_zoom) else {
            return;
        };
        let old_zoom = self.zoom;
        if new_zoom == old_zoom {
            return;
        }

        // Scene point under the anchor, read from the pre-update state.
        let anchor = anchor_view.to_vec2();
        let scene_pt = (anchor - self.pan) / old_zoom;

        self.zoom = new_zoom;
        self.pan = anchor - scene_pt * new_zoom;
        self.rebuild_transforms();
        self.clamp_to_bounds();
    }

    fn admissible_zoom(&self, zoom: f64) -> Option<f64> {
        if !(zoom.is_finite() && zoom > 0.0) {
            return None;
        }
        Some(match self.zoom_limits {
            Some(limits) => limits.clamp(zoom),
            None => zoom,
        })
    }

    fn rebuild_transforms(&mut self) {
        // World → view: scale, then translate by the offset.
        self.world_to_view = Affine::translate(self.pan) * Affine::scale(self.zoom);
        self.view_to_world = self.world_to_view.inverse();
    }

    fn clamp_to_bounds(&mut self) {
        if self.clamp_mode == ClampMode::None {
            return;
        }
        let bounds = match self.world_bounds {
            Some(b) if b.width() > 0.0 && b.height() > 0.0 => b,
            _ => return,
        };

        let visible = self.visible_world_rect();
        if visible.width() <= 0.0 || visible.height() <= 0.0 {
            return;
        }

        let mut dx = 0.0;
        let mut dy = 0.0;

        if visible.max_x() < bounds.min_x() {
            dx = bounds.min_x() - visible.max_x();
        } else if visible.min_x() > bounds.max_x() {
            dx = bounds.max_x() - visible.min_x();
        }

        if visible.max_y() < bounds.min_y() {
            dy = bounds.min_y() - visible.max_y();
        } else if visible.min_y() > bounds.max_y() {
            dy = bounds.max_y() - visible.min_y();
        }

        if dx != 0.0 || dy != 0.0 {
            // Moving the visible rect by +d in world space means moving the
            // scene by -d on screen.
            self.pan += Vec2::new(-dx * self.zoom, -dy * self.zoom);
            self.rebuild_transforms();
        }
    }
}

/// Debug snapshot of a [`Viewport2D`] state.
#[derive(Clone, Copy, Debug)]
pub struct Viewport2DDebugInfo {
    /// Current view rectangle in screen coordinates.
    pub view_rect: Rect,
    /// Optional world bounds for clamping and fitting.
    pub world_bounds: Option<Rect>,
    /// World‑space rectangle currently visible through the view.
    pub visible_world_rect: Rect,
    /// Current uniform zoom factor.
    pub zoom: f64,
    /// Current offset in screen coordinates.
    pub pan: Vec2,
    /// Zoom limits, if configured.
    pub zoom_limits: Option<ZoomLimits>,
    /// Clamp mode for panning relative to bounds.
    pub clamp_mode: ClampMode,
}
