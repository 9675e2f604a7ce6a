// Copyright 2025 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG export for inspection and snapshot-style tests.
//!
//! Not pixel-exact: text is placed with `dominant-baseline="hanging"` so the
//! origin approximates the top-left of the text box, and no font family is
//! specified.

use alloc::format;
use alloc::string::String;
use core::fmt::Write as _;

use kurbo::Affine;
use peniko::Color;

use crate::{Display, FontWeight, Group, LineNode, Node, RectNode, Stroke, TextNode};

/// Exports a display tree as an SVG document.
///
/// The document's `width`/`height` and `viewBox` match the display size.
#[must_use]
pub fn to_svg(display: &Display) -> String {
    let mut out = String::new();
    let w = fmt_f64(display.size.width);
    let h = fmt_f64(display.size.height);
    let _ = write!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">"
    );
    write_group(&mut out, &display.root);
    out.push_str("</svg>");
    out
}

fn write_group(out: &mut String, group: &Group) {
    out.push_str("<g");
    if let Some(id) = &group.id {
        let _ = write!(out, " id=\"{}\"", escape(id));
    }
    if group.transform != Affine::IDENTITY {
        let _ = write!(out, " transform=\"{}\"", affine_to_svg_matrix(group.transform));
    }
    if group.opacity < 1.0 {
        let _ = write!(out, " opacity=\"{}\"", fmt_f64(f64::from(group.opacity)));
    }
    out.push('>');
    for child in &group.children {
        match child {
            Node::Group(inner) => write_group(out, inner),
            Node::Rect(rect) => write_rect(out, rect),
            Node::Text(text) => write_text(out, text),
            Node::Line(line) => write_line(out, line),
        }
    }
    out.push_str("</g>");
}

fn write_rect(out: &mut String, node: &RectNode) {
    let r = node.rect;
    let _ = write!(
        out,
        "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"",
        fmt_f64(r.x0),
        fmt_f64(r.y0),
        fmt_f64(r.width()),
        fmt_f64(r.height())
    );
    if node.corner_radius > 0.0 {
        let radius = fmt_f64(node.corner_radius);
        let _ = write!(out, " rx=\"{radius}\" ry=\"{radius}\"");
    }
    match node.fill {
        Some(fill) => write_paint(out, "fill", fill),
        None => out.push_str(" fill=\"none\""),
    }
    if let Some(stroke) = node.stroke {
        write_stroke(out, stroke);
    }
    out.push_str("/>");
}

fn write_text(out: &mut String, node: &TextNode) {
    let x = fmt_f64(node.origin.x);
    let y = fmt_f64(node.origin.y);
    let _ = write!(
        out,
        "<text x=\"{x}\" y=\"{y}\" font-size=\"{}\" dominant-baseline=\"hanging\"",
        fmt_f64(node.font_size)
    );
    if node.weight == FontWeight::Bold {
        out.push_str(" font-weight=\"bold\"");
    }
    write_paint(out, "fill", node.color);
    if node.rotation != 0.0 {
        let _ = write!(
            out,
            " transform=\"rotate({} {x} {y})\"",
            fmt_f64(node.rotation)
        );
    }
    let _ = write!(out, ">{}</text>", escape(&node.text));
}

fn write_line(out: &mut String, node: &LineNode) {
    let l = node.line;
    let _ = write!(
        out,
        "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"",
        fmt_f64(l.p0.x),
        fmt_f64(l.p0.y),
        fmt_f64(l.p1.x),
        fmt_f64(l.p1.y)
    );
    write_stroke(out, node.stroke);
    out.push_str("/>");
}

fn write_stroke(out: &mut String, stroke: Stroke) {
    write_paint(out, "stroke", stroke.color);
    let _ = write!(out, " stroke-width=\"{}\"", fmt_f64(stroke.width));
}

fn write_paint(out: &mut String, attr: &str, color: Color) {
    let (rgb, a) = color_to_svg(color);
    let _ = write!(out, " {attr}=\"{rgb}\"");
    if a < 1.0 {
        let _ = write!(out, " {attr}-opacity=\"{}\"", fmt_f64(f64::from(a)));
    }
}

fn color_to_svg(color: Color) -> (String, f32) {
    let rgba = color.to_rgba8();
    let a = f32::from(rgba.a) / 255.0;
    (format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b), a)
}

fn affine_to_svg_matrix(xf: Affine) -> String {
    // kurbo::Affine stores [a, b, c, d, e, f] corresponding to:
    // [ a c e ]
    // [ b d f ]
    // [ 0 0 1 ]
    let c = xf.as_coeffs();
    format!(
        "matrix({} {} {} {} {} {})",
        fmt_f64(c[0]),
        fmt_f64(c[1]),
        fmt_f64(c[2]),
        fmt_f64(c[3]),
        fmt_f64(c[4]),
        fmt_f64(c[5])
    )
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

fn fmt_f64(v: f64) -> String {
    // Keep output readable and stable enough for debugging.
    if !v.is_finite() {
        return format!("{v}");
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "best-effort pretty formatting"
    )]
    let i = v as i64;
    #[allow(clippy::cast_precision_loss, reason = "compared against v only")]
    let diff = (i as f64) - v;
    if diff > -1e-9 && diff < 1e-9 {
        return format!("{i}");
    }

    let mut s = format!("{v:.3}");
    while s.contains('.') && s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    if s == "-0" {
        s.remove(0);
    }
    s
}
