// Copyright 2025 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CSS-style hex colours used by the scene configuration.

use alloc::format;
use alloc::string::String;

use peniko::Color;

/// Parses `#RGB` or `#RRGGBB` (case-insensitive) into an opaque colour.
#[must_use]
pub fn parse_hex_color(text: &str) -> Option<Color> {
    let digits = text.strip_prefix('#')?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |range: core::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    match digits.len() {
        3 => {
            let short = |i: usize| channel(i..i + 1).map(|v| v * 17);
            Some(Color::from_rgb8(short(0)?, short(1)?, short(2)?))
        }
        6 => Some(Color::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        _ => None,
    }
}

/// Formats an opaque colour as `#RRGGBB`.
#[must_use]
pub fn format_hex_color(color: Color) -> String {
    let rgba = color.to_rgba8();
    format!("#{:02X}{:02X}{:02X}", rgba.r, rgba.g, rgba.b)
}
