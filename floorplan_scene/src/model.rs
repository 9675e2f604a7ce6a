// Copyright 2025 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Immutable scene entities.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use kurbo::{Point, Rect};
use peniko::Color;

/// Fill of an unselected shape that has no override.
pub const DEFAULT_FILL: Color = Color::WHITE;

/// Unique identifier of an apartment.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ApartmentId(String);

impl ApartmentId {
    /// Wraps an identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApartmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ApartmentId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ApartmentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl PartialEq<str> for ApartmentId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ApartmentId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// One rectangle of an apartment, in the apartment's local coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct ApartmentShape {
    /// Local rectangle relative to the apartment's group origin.
    pub rect: Rect,
    /// Optional room label drawn in the top-left corner.
    pub label: Option<String>,
    /// Fill override that wins over selection highlighting.
    pub fill: Option<Color>,
}

impl ApartmentShape {
    /// Creates an unlabelled shape from its origin and size.
    #[must_use]
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            rect: Rect::new(x, y, x + w, y + h),
            label: None,
            fill: None,
        }
    }

    /// Sets the label. Empty labels are stored as no label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        let label = label.into();
        self.label = (!label.is_empty()).then_some(label);
        self
    }

    /// Sets the fill override.
    #[must_use]
    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }

    /// Fill to draw this shape with, given whether its apartment is selected.
    #[must_use]
    pub fn resolved_fill(&self, selected: bool, highlight: Color) -> Color {
        match (self.fill, selected) {
            (Some(fill), _) => fill,
            (None, true) => highlight,
            (None, false) => DEFAULT_FILL,
        }
    }
}

/// Pre-formatted area figures of an apartment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AreaSummary {
    /// Living area of the unit, e.g. `"24.30"`.
    pub unit: String,
    /// Total area including shared parts, e.g. `"45.47"`.
    pub total: String,
}

impl AreaSummary {
    /// Creates a summary from the two pre-formatted figures.
    pub fn new(unit: impl Into<String>, total: impl Into<String>) -> Self {
        Self {
            unit: unit.into(),
            total: total.into(),
        }
    }

    /// Returns the figures as `[unit, total]`.
    #[must_use]
    pub fn as_array(&self) -> [&str; 2] {
        [&self.unit, &self.total]
    }
}

/// An apartment: a group of shapes placed at an origin in scene space.
#[derive(Clone, Debug, PartialEq)]
pub struct Apartment {
    /// Unique identifier.
    pub id: ApartmentId,
    /// Display number shown in the badge. Not unique.
    pub number: u32,
    /// Area figures shown under the badge and in the overlay.
    pub area: AreaSummary,
    /// Group origin in scene coordinates.
    pub origin: Point,
    /// Shapes in drawing order.
    pub shapes: Vec<ApartmentShape>,
    /// Fill used for shapes without an override while the apartment is selected.
    pub highlight: Color,
}

impl Apartment {
    /// Badge rectangle in local coordinates.
    pub const BADGE: Rect = Rect::new(5.0, 5.0, 45.0, 45.0);
    /// Corner radius of the badge.
    pub const BADGE_RADIUS: f64 = 20.0;

    /// Returns `true` if selecting this apartment would not change how it looks.
    ///
    /// This happens when the highlight equals the default fill and every
    /// shape either has no override or an override that already applies.
    #[must_use]
    pub fn highlight_is_indistinguishable(&self) -> bool {
        self.shapes.iter().all(|shape| {
            shape.resolved_fill(true, self.highlight) == shape.resolved_fill(false, self.highlight)
        })
    }

    /// Bounding box of the shapes and badge, in scene coordinates.
    #[must_use]
    pub fn world_bounds(&self) -> Rect {
        self.shapes
            .iter()
            .fold(Self::BADGE, |acc, shape| acc.union(shape.rect))
            + self.origin.to_vec2()
    }

    /// Returns `true` if the scene point hits one of the shapes or the badge.
    #[must_use]
    pub fn contains(&self, scene_pt: Point) -> bool {
        let local = scene_pt - self.origin.to_vec2();
        Self::BADGE.contains(local) || self.shapes.iter().any(|shape| shape.rect.contains(local))
    }
}
