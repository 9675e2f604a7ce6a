// Copyright 2025 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Floorplan Display: a small retained display tree and its SVG export.
//!
//! The floor-plan renderer produces a [`Display`]: a tree of [`Group`]s that
//! carry an affine transform and an opacity, with three kinds of leaves:
//! rectangles (fill, stroke, corner radius), single-line text (size, weight,
//! rotation) and line segments.
//!
//! This is deliberately narrower than a general imaging IR. There are no
//! paths, images or resource handles; a host that draws with a real
//! rasterizer walks the tree with [`Display::walk`] and maps each leaf onto
//! its own primitives. [`Display::to_svg`] does exactly that for debugging.
//!
//! All coordinates of a leaf are local to its parent group. The transform of
//! a leaf in view space is the product of the transforms on the path from the
//! root, and its effective opacity is the product of the group opacities.
//!
//! ## Minimal example
//!
//! ```rust
//! use floorplan_display::{Display, Group, RectNode, TextNode};
//! use kurbo::{Point, Rect, Size};
//! use peniko::Color;
//!
//! let badge = Group::new()
//!     .with_id("badge")
//!     .at(100.0, 50.0)
//!     .with_child(
//!         RectNode::new(Rect::new(0.0, 0.0, 40.0, 40.0))
//!             .with_fill(Color::from_rgb8(0xFF, 0xA7, 0x26))
//!             .with_corner_radius(20.0),
//!     )
//!     .with_child(TextNode::new(Point::new(13.0, 13.0), "2").bold());
//!
//! let display = Display::new(Size::new(200.0, 100.0), Group::new().with_child(badge));
//!
//! let mut origins = Vec::new();
//! display.walk(|node, transform, _opacity| {
//!     if let floorplan_display::Node::Text(text) = node {
//!         origins.push(transform * text.origin);
//!     }
//! });
//! assert_eq!(origins, [Point::new(113.0, 63.0)]);
//!
//! let svg = display.to_svg();
//! assert!(svg.contains("<rect"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod svg;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Affine, Line, Point, Rect, Size, Vec2};
use peniko::Color;

pub use svg::to_svg;

/// A complete frame: the view size and the root group.
#[derive(Clone, Debug, PartialEq)]
pub struct Display {
    /// Size of the view the tree is drawn into.
    pub size: Size,
    /// Root of the tree.
    pub root: Group,
}

impl Display {
    /// Creates a display from its view size and root group.
    #[must_use]
    pub fn new(size: Size, root: Group) -> Self {
        Self { size, root }
    }

    /// Visits every node depth-first in drawing order.
    ///
    /// The callback receives the node, the transform from the node's local
    /// space to view space, and the effective opacity. Groups are visited
    /// before their children, with the transform and opacity they inherit
    /// from their parent (not including their own).
    pub fn walk<'a>(&'a self, mut visit: impl FnMut(&'a Node, Affine, f32)) {
        walk_group(&self.root, Affine::IDENTITY, 1.0, &mut visit);
    }

    /// Finds a group anywhere in the tree by id.
    #[must_use]
    pub fn find_group(&self, id: &str) -> Option<&Group> {
        self.root.find_group(id)
    }

    /// Exports the tree as a standalone SVG document.
    #[must_use]
    pub fn to_svg(&self) -> String {
        to_svg(self)
    }
}

fn walk_group<'a>(
    group: &'a Group,
    transform: Affine,
    opacity: f32,
    visit: &mut dyn FnMut(&'a Node, Affine, f32),
) {
    let transform = transform * group.transform;
    let opacity = opacity * group.opacity;
    for child in &group.children {
        visit(child, transform, opacity);
        if let Node::Group(inner) = child {
            walk_group(inner, transform, opacity, visit);
        }
    }
}

/// One node of the tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// A nested group.
    Group(Group),
    /// A rectangle.
    Rect(RectNode),
    /// A line of text.
    Text(TextNode),
    /// A straight line segment.
    Line(LineNode),
}

impl From<Group> for Node {
    fn from(group: Group) -> Self {
        Self::Group(group)
    }
}

impl From<RectNode> for Node {
    fn from(rect: RectNode) -> Self {
        Self::Rect(rect)
    }
}

impl From<TextNode> for Node {
    fn from(text: TextNode) -> Self {
        Self::Text(text)
    }
}

impl From<LineNode> for Node {
    fn from(line: LineNode) -> Self {
        Self::Line(line)
    }
}

/// A transformed, optionally translucent container.
#[derive(Clone, Debug, PartialEq)]
pub struct Group {
    /// Optional name, exported as the SVG `id`.
    pub id: Option<String>,
    /// Transform from this group's space to its parent's.
    pub transform: Affine,
    /// Opacity in `0.0..=1.0`, multiplied into all children.
    pub opacity: f32,
    /// Children in drawing order.
    pub children: Vec<Node>,
}

impl Default for Group {
    fn default() -> Self {
        Self::new()
    }
}

impl Group {
    /// Creates an empty, untransformed, opaque group.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            id: None,
            transform: Affine::IDENTITY,
            opacity: 1.0,
            children: Vec::new(),
        }
    }

    /// Sets the id.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the transform.
    #[must_use]
    pub fn with_transform(mut self, transform: Affine) -> Self {
        self.transform = transform;
        self
    }

    /// Places the group at an offset in its parent.
    #[must_use]
    pub fn at(self, x: f64, y: f64) -> Self {
        self.with_transform(Affine::translate(Vec2::new(x, y)))
    }

    /// Sets the opacity, clamped to `0.0..=1.0`.
    #[must_use]
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Appends a child.
    #[must_use]
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.push(child);
        self
    }

    /// Appends a child in place.
    pub fn push(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    /// Finds this group or a descendant by id.
    #[must_use]
    pub fn find_group(&self, id: &str) -> Option<&Self> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|child| match child {
            Node::Group(group) => group.find_group(id),
            _ => None,
        })
    }

    /// Direct children that are text, in drawing order.
    pub fn texts(&self) -> impl Iterator<Item = &TextNode> {
        self.children.iter().filter_map(|child| match child {
            Node::Text(text) => Some(text),
            _ => None,
        })
    }

    /// Direct children that are rectangles, in drawing order.
    pub fn rects(&self) -> impl Iterator<Item = &RectNode> {
        self.children.iter().filter_map(|child| match child {
            Node::Rect(rect) => Some(rect),
            _ => None,
        })
    }
}

/// Outline paint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    /// Line colour.
    pub color: Color,
    /// Line width in local units.
    pub width: f64,
}

impl Stroke {
    /// Creates a stroke.
    #[must_use]
    pub const fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }
}

/// A rectangle with optional rounded corners.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectNode {
    /// Geometry in local coordinates.
    pub rect: Rect,
    /// Corner radius; `0.0` for square corners.
    pub corner_radius: f64,
    /// Interior paint. `None` leaves the interior unpainted.
    pub fill: Option<Color>,
    /// Outline paint.
    pub stroke: Option<Stroke>,
}

impl RectNode {
    /// Creates an unpainted rectangle.
    #[must_use]
    pub const fn new(rect: Rect) -> Self {
        Self {
            rect,
            corner_radius: 0.0,
            fill: None,
            stroke: None,
        }
    }

    /// Sets the fill.
    #[must_use]
    pub const fn with_fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }

    /// Sets the stroke.
    #[must_use]
    pub const fn with_stroke(mut self, color: Color, width: f64) -> Self {
        self.stroke = Some(Stroke::new(color, width));
        self
    }

    /// Sets the corner radius.
    #[must_use]
    pub const fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius;
        self
    }
}

/// Font weight of a text node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontWeight {
    /// Regular weight.
    #[default]
    Normal,
    /// Bold weight.
    Bold,
}

/// A single line of text.
///
/// `origin` is the top-left corner of the text box, matching canvas-style
/// text placement.
#[derive(Clone, Debug, PartialEq)]
pub struct TextNode {
    /// Top-left corner in local coordinates.
    pub origin: Point,
    /// The text.
    pub text: String,
    /// Font size in local units.
    pub font_size: f64,
    /// Font weight.
    pub weight: FontWeight,
    /// Clockwise rotation about `origin`, in degrees.
    pub rotation: f64,
    /// Text colour.
    pub color: Color,
}

impl TextNode {
    /// Default font size.
    pub const DEFAULT_SIZE: f64 = 12.0;

    /// Creates black, regular-weight text at the default size.
    #[must_use]
    pub fn new(origin: Point, text: impl Into<String>) -> Self {
        Self {
            origin,
            text: text.into(),
            font_size: Self::DEFAULT_SIZE,
            weight: FontWeight::Normal,
            rotation: 0.0,
            color: Color::BLACK,
        }
    }

    /// Sets the font size.
    #[must_use]
    pub fn with_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    /// Makes the text bold.
    #[must_use]
    pub fn bold(mut self) -> Self {
        self.weight = FontWeight::Bold;
        self
    }

    /// Sets the colour.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Sets the rotation in degrees.
    #[must_use]
    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }
}

/// A stroked line segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineNode {
    /// Segment in local coordinates.
    pub line: Line,
    /// Stroke paint.
    pub stroke: Stroke,
}

impl LineNode {
    /// Creates a segment between two points.
    #[must_use]
    pub fn new(from: impl Into<Point>, to: impl Into<Point>, stroke: Stroke) -> Self {
        Self {
            line: Line::new(from, to),
            stroke,
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use kurbo::{Affine, Point, Rect, Size};
    use peniko::Color;

    use super::{Display, Group, LineNode, Node, RectNode, Stroke, TextNode};

    fn sample() -> Display {
        let inner = Group::new()
            .with_id("inner")
            .at(10.0, 20.0)
            .with_opacity(0.5)
            .with_child(RectNode::new(Rect::new(0.0, 0.0, 5.0, 5.0)))
            .with_child(TextNode::new(Point::new(1.0, 2.0), "hi"));
        let root = Group::new()
            .with_transform(Affine::scale(2.0))
            .with_child(LineNode::new(
                (0.0, 0.0),
                (1.0, 1.0),
                Stroke::new(Color::BLACK, 1.0),
            ))
            .with_child(inner);
        Display::new(Size::new(100.0, 100.0), root)
    }

    #[test]
    fn walk_visits_in_drawing_order() {
        let display = sample();
        let mut kinds = Vec::new();
        display.walk(|node, _, _| {
            kinds.push(match node {
                Node::Group(_) => "group",
                Node::Rect(_) => "rect",
                Node::Text(_) => "text",
                Node::Line(_) => "line",
            });
        });
        assert_eq!(kinds, ["line", "group", "rect", "text"]);
    }

    #[test]
    fn walk_accumulates_transform_and_opacity() {
        let display = sample();
        let mut seen = None;
        display.walk(|node, transform, opacity| {
            if let Node::Text(text) = node {
                seen = Some((transform * text.origin, opacity));
            }
        });
        // scale(2) * translate(10, 20) applied to (1, 2).
        assert_eq!(seen, Some((Point::new(22.0, 44.0), 0.5)));
    }

    #[test]
    fn find_group_searches_descendants() {
        let display = sample();
        let inner = display.find_group("inner").unwrap();
        assert_eq!(inner.texts().count(), 1);
        assert_eq!(inner.rects().count(), 1);
        assert!(display.find_group("missing").is_none());
    }

    #[test]
    fn opacity_is_clamped() {
        assert_eq!(Group::new().with_opacity(3.0).opacity, 1.0);
        assert_eq!(Group::new().with_opacity(-1.0).opacity, 0.0);
    }
}
