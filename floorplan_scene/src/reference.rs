// Copyright 2025 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The built-in reference layout: one floor with four apartments around a
//! central core.

use alloc::vec;
use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};
use peniko::Color;

use crate::model::{Apartment, ApartmentShape, AreaSummary};
use crate::scene::Scene;

/// View size the reference layout was drawn for.
pub const VIEW_SIZE: Size = Size::new(1000.0, 600.0);

/// Building outline of the reference layout.
pub const BUILDING: Rect = Rect::new(20.0, 50.0, 860.0, 530.0);

/// Floor options, initial value first.
pub const FLOORS: [u32; 3] = [7, 6, 5];

/// Entrance options, initial value first.
pub const ENTRANCES: [u32; 3] = [8, 7, 6];

const TEAL: Color = Color::from_rgb8(0x7D, 0xD3, 0xC0);

const BATH: &str = "С/У";
const KITCHEN: &str = "кухня";

fn shape(x: f64, y: f64, w: f64, h: f64, label: &str) -> ApartmentShape {
    ApartmentShape::new(x, y, w, h).with_label(label)
}

/// The two middle units share a layout.
fn compact_shapes() -> Vec<ApartmentShape> {
    vec![
        shape(0.0, 80.0, 120.0, 120.0, BATH),
        shape(0.0, 0.0, 60.0, 80.0, KITCHEN),
        shape(60.0, 0.0, 60.0, 80.0, BATH),
        shape(0.0, 200.0, 120.0, 40.0, ""),
        shape(0.0, 240.0, 120.0, 40.0, ""),
    ]
}

/// Apartments of the reference layout in drawing order.
#[must_use]
pub fn apartments() -> Vec<Apartment> {
    vec![
        Apartment {
            id: "apt-left".into(),
            number: 2,
            area: AreaSummary::new("24.30", "45.47"),
            origin: Point::new(50.0, 200.0),
            shapes: vec![
                shape(60.0, 80.0, 160.0, 200.0, BATH).with_fill(TEAL),
                shape(0.0, 0.0, 80.0, 60.0, KITCHEN),
                shape(0.0, 60.0, 60.0, 80.0, BATH),
                shape(0.0, 140.0, 60.0, 40.0, ""),
                shape(60.0, 0.0, 40.0, 80.0, ""),
                shape(100.0, 0.0, 120.0, 80.0, ""),
                shape(220.0, 80.0, 40.0, 120.0, ""),
                shape(220.0, 200.0, 40.0, 80.0, ""),
            ],
            highlight: TEAL,
        },
        Apartment {
            id: "apt-center-left".into(),
            number: 2,
            area: AreaSummary::new("24.30", "44.73"),
            origin: Point::new(310.0, 200.0),
            shapes: compact_shapes(),
            highlight: Color::WHITE,
        },
        Apartment {
            id: "apt-center-right".into(),
            number: 2,
            area: AreaSummary::new("24.30", "45.47"),
            origin: Point::new(460.0, 200.0),
            shapes: compact_shapes(),
            highlight: Color::WHITE,
        },
        Apartment {
            id: "apt-right".into(),
            number: 3,
            area: AreaSummary::new("45.18", "69.33"),
            origin: Point::new(610.0, 200.0),
            shapes: vec![
                shape(0.0, 80.0, 100.0, 120.0, BATH),
                shape(0.0, 0.0, 50.0, 80.0, KITCHEN),
                shape(50.0, 0.0, 50.0, 80.0, BATH),
                shape(100.0, 0.0, 80.0, 120.0, ""),
                shape(100.0, 120.0, 80.0, 80.0, ""),
                shape(0.0, 200.0, 100.0, 40.0, ""),
                shape(100.0, 200.0, 80.0, 40.0, ""),
                shape(0.0, 240.0, 180.0, 40.0, ""),
            ],
            highlight: Color::WHITE,
        },
    ]
}

impl Scene {
    /// The built-in reference layout.
    #[must_use]
    pub fn reference() -> Self {
        // Constructed directly: the data above is known to satisfy every
        // validation rule, which `reference_layout_is_valid` checks.
        Self {
            apartments: apartments(),
            building: BUILDING,
            floors: FLOORS.to_vec(),
            entrances: ENTRANCES.to_vec(),
        }
    }
}
