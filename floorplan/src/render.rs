// Copyright 2025 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene renderer: state in, display tree out.
//!
//! The tree has a fixed shape. Under the root group, which carries the view
//! transform, children are drawn in this order:
//!
//! 1. building outline
//! 2. `compass` group
//! 3. `core` group (lift, stairs, technical rooms)
//! 4. one group per apartment, with the apartment id as group id
//! 5. `entrance` group
//! 6. `dimensions` group at 60% opacity
//!
//! Rendering is a pure function of the scene and the state.

use floorplan_display::{Display, Group, LineNode, RectNode, Stroke, TextNode};
use floorplan_scene::{Apartment, Scene};
use kurbo::{Point, Rect, Size, Vec2};
use peniko::Color;

use crate::state::FloorPlanState;

const BUILDING_STROKE: Color = Color::from_rgb8(0x33, 0x33, 0x33);
const BUILDING_FILL: Color = Color::from_rgb8(0xF8, 0xF8, 0xF8);
const COMPASS_RED: Color = Color::from_rgb8(0xE9, 0x1E, 0x63);
const GREY_66: Color = Color::from_rgb8(0x66, 0x66, 0x66);
const LIFT_FILL: Color = Color::from_rgb8(0xE0, 0xE0, 0xE0);
const STAIRS_FILL: Color = Color::from_rgb8(0xF0, 0xF0, 0xF0);
const STEP_STROKE: Color = Color::from_rgb8(0xCC, 0xCC, 0xCC);
const TECH_FILL: Color = Color::from_rgb8(0xDD, 0xDD, 0xDD);
const SHAPE_STROKE: Color = Color::from_rgb8(0x77, 0x77, 0x77);
const LABEL_COLOR: Color = Color::from_rgb8(0x33, 0x33, 0x33);
const BADGE_FILL: Color = Color::from_rgb8(0xFF, 0xA7, 0x26);
const ENTRANCE_FILL: Color = Color::from_rgb8(0x4C, 0xAF, 0x50);
const ENTRANCE_STROKE: Color = Color::from_rgb8(0x2E, 0x7D, 0x32);
const DIMENSION_STROKE: Color = Color::from_rgb8(0x99, 0x99, 0x99);

/// Opacity of the dimension annotations.
pub const DIMENSION_OPACITY: f32 = 0.6;

/// Builds the display tree for the current state.
#[must_use]
pub fn render(scene: &Scene, state: &FloorPlanState, view_size: Size) -> Display {
    let mut root = Group::new()
        .with_id("stage")
        .with_transform(state.viewport.transform());

    root.push(
        RectNode::new(scene.building())
            .with_fill(BUILDING_FILL)
            .with_stroke(BUILDING_STROKE, 2.0),
    );
    root.push(compass());
    root.push(core_block());
    for apartment in scene.apartments() {
        let selected = state.selection.is_selected(&apartment.id);
        root.push(render_apartment(apartment, selected));
    }
    root.push(entrance_marker());
    root.push(dimensions());

    Display::new(view_size, root)
}

/// Builds the group of one apartment.
#[must_use]
pub fn render_apartment(apartment: &Apartment, selected: bool) -> Group {
    let mut group = Group::new()
        .with_id(apartment.id.as_str())
        .at(apartment.origin.x, apartment.origin.y);

    for shape in &apartment.shapes {
        group.push(
            RectNode::new(shape.rect)
                .with_fill(shape.resolved_fill(selected, apartment.highlight))
                .with_stroke(SHAPE_STROKE, 1.0),
        );
        if let Some(label) = &shape.label {
            group.push(
                TextNode::new(shape.rect.origin() + Vec2::new(8.0, 8.0), label.as_str())
                    .with_size(10.0)
                    .with_color(LABEL_COLOR),
            );
        }
    }

    group.push(
        RectNode::new(Apartment::BADGE)
            .with_fill(BADGE_FILL)
            .with_corner_radius(Apartment::BADGE_RADIUS),
    );
    group.push(
        TextNode::new(Point::new(18.0, 18.0), apartment.number.to_string())
            .with_size(16.0)
            .bold()
            .with_color(Color::WHITE),
    );
    group.push(
        TextNode::new(Point::new(8.0, 50.0), apartment.area.unit.as_str())
            .with_size(10.0)
            .bold(),
    );
    group.push(TextNode::new(Point::new(8.0, 62.0), apartment.area.total.as_str()).with_size(10.0));
    group
}

fn line(points: [f64; 4], color: Color, width: f64) -> LineNode {
    LineNode::new(
        (points[0], points[1]),
        (points[2], points[3]),
        Stroke::new(color, width),
    )
}

fn compass() -> Group {
    Group::new()
        .with_id("compass")
        .at(30.0, 20.0)
        .with_child(TextNode::new(Point::ZERO, "N").with_size(14.0).bold())
        .with_child(line([8.0, 5.0, 8.0, 25.0], COMPASS_RED, 3.0))
        .with_child(line([8.0, 25.0, 5.0, 20.0], COMPASS_RED, 2.0))
        .with_child(line([8.0, 25.0, 11.0, 20.0], COMPASS_RED, 2.0))
        .with_child(
            TextNode::new(Point::new(5.0, 28.0), "S")
                .with_size(12.0)
                .with_color(GREY_66),
        )
}

fn core_block() -> Group {
    let room = |x: f64, y: f64, w: f64, h: f64, fill: Color| {
        RectNode::new(Rect::new(x, y, x + w, y + h))
            .with_fill(fill)
            .with_stroke(GREY_66, 1.0)
    };
    let caption = |x: f64, y: f64, text: &str, size: f64| {
        TextNode::new(Point::new(x, y), text).with_size(size)
    };

    let mut core = Group::new()
        .with_id("core")
        .at(400.0, 150.0)
        .with_child(room(0.0, 0.0, 60.0, 80.0, LIFT_FILL))
        .with_child(caption(20.0, 25.0, "Лифт", 10.0))
        .with_child(room(0.0, 90.0, 60.0, 120.0, STAIRS_FILL))
        .with_child(caption(15.0, 135.0, "Лестн.", 10.0));
    for step in 0..8_u8 {
        let y = 95.0 + f64::from(step) * 12.0;
        core.push(line([5.0, y, 55.0, y], STEP_STROKE, 1.0));
    }
    core.with_child(room(0.0, 220.0, 30.0, 40.0, TECH_FILL))
        .with_child(caption(5.0, 235.0, "Т.п", 8.0))
        .with_child(room(30.0, 220.0, 30.0, 40.0, TECH_FILL))
        .with_child(caption(38.0, 235.0, "Эл.", 8.0))
}

fn entrance_marker() -> Group {
    Group::new()
        .with_id("entrance")
        .at(430.0, 530.0)
        .with_child(
            RectNode::new(Rect::new(-20.0, 0.0, 20.0, 20.0))
                .with_fill(ENTRANCE_FILL)
                .with_stroke(ENTRANCE_STROKE, 1.0),
        )
        .with_child(
            TextNode::new(Point::new(-15.0, 8.0), "Вход")
                .with_size(10.0)
                .bold()
                .with_color(Color::WHITE),
        )
}

fn dimensions() -> Group {
    let dim = |points| line(points, DIMENSION_STROKE, 1.0);
    Group::new()
        .with_id("dimensions")
        .with_opacity(DIMENSION_OPACITY)
        .with_child(dim([50.0, 40.0, 850.0, 40.0]))
        .with_child(dim([50.0, 35.0, 50.0, 45.0]))
        .with_child(dim([850.0, 35.0, 850.0, 45.0]))
        .with_child(
            TextNode::new(Point::new(420.0, 25.0), "800")
                .with_size(10.0)
                .with_color(GREY_66),
        )
        .with_child(dim([10.0, 60.0, 10.0, 520.0]))
        .with_child(dim([5.0, 60.0, 15.0, 60.0]))
        .with_child(dim([5.0, 520.0, 15.0, 520.0]))
        .with_child(
            TextNode::new(Point::new(-5.0, 290.0), "460")
                .with_size(10.0)
                .with_color(GREY_66)
                .with_rotation(-90.0),
        )
}
