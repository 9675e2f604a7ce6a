// Copyright 2025 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text content of the HTML-side panels: the details overlay and the sidebar.
//!
//! These are view models only. Hosts lay them out however they like and map
//! button presses back to [`Event`](crate::Event)s.

use floorplan_scene::{Scene, SelectorKind};

use crate::state::FloorPlanState;

/// Unit suffix appended to area figures.
pub const AREA_UNIT: &str = "м²";
/// Placeholder shown when nothing is selected.
pub const NOTHING_SELECTED: &str = "—";

/// One labelled figure in the overlay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AreaLine {
    /// Caption, e.g. `"Площадь:"`.
    pub caption: &'static str,
    /// Figure with unit, e.g. `"24.30 м²"`.
    pub value: String,
}

/// Content of the floating details overlay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverlayView {
    /// Title, e.g. `"Квартира 2"`.
    pub title: String,
    /// Unit and total area.
    pub areas: [AreaLine; 2],
    /// Label of the details button; sends [`Event::ShowDetails`](crate::Event::ShowDetails).
    pub details_label: &'static str,
    /// Label of the reserve button; sends [`Event::Reserve`](crate::Event::Reserve).
    pub reserve_label: &'static str,
    /// Label of the close button; sends [`Event::CloseOverlay`](crate::Event::CloseOverlay).
    pub close_label: &'static str,
}

impl OverlayView {
    /// Builds the overlay content, or `None` while the overlay is closed.
    #[must_use]
    pub fn new(scene: &Scene, state: &FloorPlanState) -> Option<Self> {
        let apartment = state.overlay_apartment(scene)?;
        let area = |caption, figure: &str| AreaLine {
            caption,
            value: format!("{figure} {AREA_UNIT}"),
        };
        Some(Self {
            title: format!("Квартира {}", apartment.number),
            areas: [
                area("Площадь:", &apartment.area.unit),
                area("Общая площадь:", &apartment.area.total),
            ],
            details_label: "Подробнее",
            reserve_label: "Бронь",
            close_label: "×",
        })
    }
}

/// One of the two selector controls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectorView {
    /// Which selector this is.
    pub kind: SelectorKind,
    /// Caption of the round badge, e.g. `"этаж"`.
    pub badge_caption: &'static str,
    /// Label of the drop-down.
    pub label: &'static str,
    /// Current value.
    pub value: u32,
    /// Available options in display order.
    pub options: Vec<u32>,
}

/// Content of the left-hand control column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarView {
    /// Entrance selector, shown first.
    pub entrance: SelectorView,
    /// Floor selector.
    pub floor: SelectorView,
    /// Label of the reset button; sends [`Event::ResetView`](crate::Event::ResetView).
    pub reset_label: &'static str,
    /// Caption above the selected id.
    pub selected_caption: &'static str,
    /// Selected apartment id, or [`NOTHING_SELECTED`].
    pub selected: String,
}

impl SidebarView {
    /// Builds the sidebar content.
    #[must_use]
    pub fn new(scene: &Scene, state: &FloorPlanState) -> Self {
        let selector = |kind, badge_caption, label| SelectorView {
            kind,
            badge_caption,
            label,
            value: state.selectors.get(kind),
            options: scene.options(kind).to_vec(),
        };
        Self {
            entrance: selector(SelectorKind::Entrance, "подъезд", "Choose entrance"),
            floor: selector(SelectorKind::Floor, "этаж", "Choose floor"),
            reset_label: "Reset view",
            selected_caption: "Selected:",
            selected: state
                .selected()
                .map_or_else(|| NOTHING_SELECTED.to_owned(), ToString::to_string),
        }
    }
}
