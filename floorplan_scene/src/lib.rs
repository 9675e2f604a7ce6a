// Copyright 2025 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Floorplan Scene: the static model behind the floor-plan viewer.
//!
//! A [`Scene`] is a fixed list of [`Apartment`]s placed in one coordinate
//! space, plus the building outline and the option lists of the floor and
//! entrance selectors. It is built once and never mutated.
//!
//! This crate provides:
//! - Entities: [`Apartment`], [`ApartmentShape`], [`AreaSummary`] and the
//!   [`ApartmentId`] key.
//! - Load-time validation with a descriptive [`SceneError`]. A single bad
//!   entry rejects the whole scene.
//! - A serde document ([`SceneConfig`]) with hex colour strings, readable
//!   and writable as JSON.
//! - Hit testing in scene coordinates: the topmost apartment whose shapes or
//!   badge contain a point.
//! - The built-in reference layout ([`Scene::reference`]).
//!
//! It does **not** know about screen coordinates; map pointer positions
//! through the viewport first.
//!
//! ## Minimal example
//!
//! ```rust
//! use floorplan_scene::Scene;
//! use kurbo::Point;
//!
//! let scene = Scene::from_json_str(
//!     r##"{
//!         "apartments": [{
//!             "id": "a1",
//!             "number": 1,
//!             "info": ["20.00", "31.50"],
//!             "groupX": 100, "groupY": 100,
//!             "shapes": [{ "x": 0, "y": 0, "w": 120, "h": 80, "label": "кухня" }],
//!             "highlightColor": "#7DD3C0"
//!         }]
//!     }"##,
//! )
//! .unwrap();
//!
//! let hit = scene.hit_test(Point::new(150.0, 150.0)).unwrap();
//! assert_eq!(hit.id, "a1");
//! assert!(scene.hit_test(Point::new(10.0, 10.0)).is_none());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod color;
mod config;
mod error;
mod model;
pub mod reference;
mod scene;

pub use color::{format_hex_color, parse_hex_color};
pub use config::{ApartmentConfig, RectConfig, SceneConfig, ShapeConfig};
pub use error::{SceneError, SelectorKind};
pub use model::{Apartment, ApartmentId, ApartmentShape, AreaSummary, DEFAULT_FILL};
pub use scene::Scene;
