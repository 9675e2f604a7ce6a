// Copyright 2025 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use hashbrown::HashSet;
use kurbo::{Point, Rect};

use crate::error::{SceneError, SelectorKind};
use crate::model::Apartment;

/// The static floor-plan scene.
///
/// A `Scene` can only be obtained through validation ([`Scene::new`],
/// [`Scene::from_config`], [`Scene::from_json_str`]) or from the built-in
/// [`Scene::reference`] layout, so every accessor can rely on:
/// - at least one apartment, all with unique non-empty ids;
/// - every apartment has at least one shape with finite, positive geometry;
/// - both selector option lists are non-empty and free of duplicates.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub(crate) apartments: Vec<Apartment>,
    pub(crate) building: Rect,
    pub(crate) floors: Vec<u32>,
    pub(crate) entrances: Vec<u32>,
}

impl Scene {
    /// Validates and assembles a scene.
    pub fn new(
        apartments: Vec<Apartment>,
        building: Rect,
        floors: Vec<u32>,
        entrances: Vec<u32>,
    ) -> Result<Self, SceneError> {
        validate_apartments(&apartments)?;
        if !is_valid_rect(building) {
            return Err(SceneError::InvalidBuilding);
        }
        validate_options(SelectorKind::Floor, &floors)?;
        validate_options(SelectorKind::Entrance, &entrances)?;
        Ok(Self {
            apartments,
            building,
            floors,
            entrances,
        })
    }

    /// Apartments in drawing order; later entries are drawn on top.
    #[must_use]
    pub fn apartments(&self) -> &[Apartment] {
        &self.apartments
    }

    /// Looks up an apartment by id.
    #[must_use]
    pub fn apartment(&self, id: &str) -> Option<&Apartment> {
        self.apartments.iter().find(|apt| apt.id == *id)
    }

    /// Outline of the building in scene coordinates.
    #[must_use]
    pub fn building(&self) -> Rect {
        self.building
    }

    /// Option list of a selector.
    #[must_use]
    pub fn options(&self, kind: SelectorKind) -> &[u32] {
        match kind {
            SelectorKind::Floor => &self.floors,
            SelectorKind::Entrance => &self.entrances,
        }
    }

    /// Bounding box of the building and all apartments.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.apartments
            .iter()
            .fold(self.building, |acc, apt| acc.union(apt.world_bounds()))
    }

    /// Returns the topmost apartment under a scene-space point.
    ///
    /// Apartments are tested in reverse drawing order so that the one drawn
    /// last wins where groups overlap.
    #[must_use]
    pub fn hit_test(&self, scene_pt: Point) -> Option<&Apartment> {
        self.apartments.iter().rev().find(|apt| apt.contains(scene_pt))
    }

    /// Apartments whose selection highlight cannot be told apart from the
    /// unselected rendering.
    pub fn indistinguishable_highlights(&self) -> impl Iterator<Item = &Apartment> {
        self.apartments
            .iter()
            .filter(|apt| apt.highlight_is_indistinguishable())
    }
}

fn is_valid_rect(rect: Rect) -> bool {
    [rect.x0, rect.y0, rect.x1, rect.y1]
        .iter()
        .all(|v| v.is_finite())
        && rect.width() > 0.0
        && rect.height() > 0.0
}

fn validate_apartments(apartments: &[Apartment]) -> Result<(), SceneError> {
    if apartments.is_empty() {
        return Err(SceneError::NoApartments);
    }
    let mut seen = HashSet::new();
    for (index, apt) in apartments.iter().enumerate() {
        let id = apt.id.as_str();
        if id.is_empty() {
            return Err(SceneError::EmptyId { index });
        }
        if !seen.insert(id) {
            return Err(SceneError::DuplicateId(id.into()));
        }
        if apt.area.unit.is_empty() || apt.area.total.is_empty() {
            return Err(SceneError::EmptyArea { id: id.into() });
        }
        if !(apt.origin.x.is_finite() && apt.origin.y.is_finite()) {
            return Err(SceneError::InvalidOrigin { id: id.into() });
        }
        if apt.shapes.is_empty() {
            return Err(SceneError::NoShapes { id: id.into() });
        }
        if let Some(index) = apt.shapes.iter().position(|s| !is_valid_rect(s.rect)) {
            return Err(SceneError::InvalidShape {
                id: id.into(),
                index,
            });
        }
    }
    Ok(())
}

fn validate_options(kind: SelectorKind, options: &[u32]) -> Result<(), SceneError> {
    if options.is_empty() {
        return Err(SceneError::EmptyOptions(kind));
    }
    let mut seen = HashSet::new();
    match options.iter().find(|value| !seen.insert(**value)) {
        Some(&value) => Err(SceneError::DuplicateOption { kind, value }),
        None => Ok(()),
    }
}
