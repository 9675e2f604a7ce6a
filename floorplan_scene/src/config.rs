// Copyright 2025 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Serializable scene description.
//!
//! The document mirrors the shape the layout was authored in: apartments carry
//! `groupX`/`groupY` origins, a two-entry `info` array and a
//! `highlightColor` hex string. Everything is checked by
//! [`Scene::from_config`] before a [`Scene`] is built.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

use crate::color::{format_hex_color, parse_hex_color};
use crate::error::SceneError;
use crate::model::{Apartment, ApartmentShape, AreaSummary};
use crate::reference;
use crate::scene::Scene;

/// An axis-aligned rectangle given by origin and size.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RectConfig {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub w: f64,
    /// Height.
    pub h: f64,
}

impl RectConfig {
    fn reference_building() -> Self {
        Self::from(reference::BUILDING)
    }

    fn to_rect(self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.w, self.y + self.h)
    }
}

impl From<Rect> for RectConfig {
    fn from(rect: Rect) -> Self {
        Self {
            x: rect.x0,
            y: rect.y0,
            w: rect.width(),
            h: rect.height(),
        }
    }
}

/// One shape of an apartment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShapeConfig {
    /// Left edge, relative to the apartment origin.
    pub x: f64,
    /// Top edge, relative to the apartment origin.
    pub y: f64,
    /// Width.
    pub w: f64,
    /// Height.
    pub h: f64,
    /// Room label; empty means none.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub label: String,
    /// Fill override as a hex colour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
}

/// One apartment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApartmentConfig {
    /// Unique identifier.
    pub id: String,
    /// Badge number.
    pub number: u32,
    /// `[unit area, total area]`, pre-formatted.
    pub info: Vec<String>,
    /// Group origin x.
    pub group_x: f64,
    /// Group origin y.
    pub group_y: f64,
    /// Shapes in drawing order.
    pub shapes: Vec<ShapeConfig>,
    /// Fill used for shapes without an override while selected.
    pub highlight_color: String,
}

/// A complete scene document.
///
/// Only `apartments` is required; the building outline and selector options
/// fall back to the reference layout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Apartments in drawing order.
    pub apartments: Vec<ApartmentConfig>,
    /// Building outline.
    #[serde(default = "RectConfig::reference_building")]
    pub building: RectConfig,
    /// Floor selector options, initial value first.
    #[serde(default = "reference_floors")]
    pub floors: Vec<u32>,
    /// Entrance selector options, initial value first.
    #[serde(default = "reference_entrances")]
    pub entrances: Vec<u32>,
}

fn reference_floors() -> Vec<u32> {
    reference::FLOORS.to_vec()
}

fn reference_entrances() -> Vec<u32> {
    reference::ENTRANCES.to_vec()
}

impl SceneConfig {
    /// Parses a JSON document without validating it.
    pub fn from_json_str(json: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the document as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, SceneError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl From<&Scene> for SceneConfig {
    fn from(scene: &Scene) -> Self {
        Self {
            apartments: scene.apartments().iter().map(ApartmentConfig::from).collect(),
            building: scene.building().into(),
            floors: scene.floors.clone(),
            entrances: scene.entrances.clone(),
        }
    }
}

impl From<&Apartment> for ApartmentConfig {
    fn from(apt: &Apartment) -> Self {
        Self {
            id: apt.id.to_string(),
            number: apt.number,
            info: apt.area.as_array().map(String::from).to_vec(),
            group_x: apt.origin.x,
            group_y: apt.origin.y,
            shapes: apt
                .shapes
                .iter()
                .map(|shape| {
                    let RectConfig { x, y, w, h } = shape.rect.into();
                    ShapeConfig {
                        x,
                        y,
                        w,
                        h,
                        label: shape.label.clone().unwrap_or_default(),
                        fill: shape.fill.map(format_hex_color),
                    }
                })
                .collect(),
            highlight_color: format_hex_color(apt.highlight),
        }
    }
}

impl Scene {
    /// Validates a scene document and builds the scene.
    pub fn from_config(config: SceneConfig) -> Result<Self, SceneError> {
        let apartments = config
            .apartments
            .into_iter()
            .map(apartment_from_config)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(
            apartments,
            config.building.to_rect(),
            config.floors,
            config.entrances,
        )
    }

    /// Parses and validates a JSON scene document.
    pub fn from_json_str(json: &str) -> Result<Self, SceneError> {
        Self::from_config(SceneConfig::from_json_str(json)?)
    }
}

impl TryFrom<SceneConfig> for Scene {
    type Error = SceneError;

    fn try_from(config: SceneConfig) -> Result<Self, Self::Error> {
        Self::from_config(config)
    }
}

fn apartment_from_config(config: ApartmentConfig) -> Result<Apartment, SceneError> {
    let ApartmentConfig {
        id,
        number,
        info,
        group_x,
        group_y,
        shapes,
        highlight_color,
    } = config;

    let [unit, total]: [String; 2] = info.try_into().map_err(|info: Vec<String>| {
        SceneError::InfoArity {
            id: id.clone(),
            found: info.len(),
        }
    })?;

    let color = |value: &str| {
        parse_hex_color(value).ok_or_else(|| SceneError::InvalidColor {
            id: id.clone(),
            value: value.into(),
        })
    };
    let highlight = color(&highlight_color)?;
    let shapes = shapes
        .into_iter()
        .map(|shape| {
            let mut built = ApartmentShape::new(shape.x, shape.y, shape.w, shape.h)
                .with_label(shape.label);
            if let Some(fill) = shape.fill {
                built = built.with_fill(color(&fill)?);
            }
            Ok(built)
        })
        .collect::<Result<Vec<_>, SceneError>>()?;

    Ok(Apartment {
        id: id.into(),
        number,
        area: AreaSummary { unit, total },
        origin: Point::new(group_x, group_y),
        shapes,
        highlight,
    })
}
