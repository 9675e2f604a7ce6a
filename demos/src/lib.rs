// Copyright 2025 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the floor-plan demos.

use floorplan::{Action, ApartmentService, Controller, Event};
use kurbo::Point;

/// A short session: zoom in twice, drag the stage, pick two apartments, ask
/// for details and a reservation, close the overlay, change the selectors
/// and fit the whole plan into view.
#[must_use]
pub fn scripted_session() -> Vec<Event> {
    let center = Point::new(500.0, 300.0);
    vec![
        Event::PointerMove {
            pointer: Point::new(120.0, 260.0),
        },
        Event::Wheel {
            pointer: center,
            delta_y: -100.0,
        },
        Event::Wheel {
            pointer: center,
            delta_y: -100.0,
        },
        Event::DragStart { pointer: center },
        Event::DragMove {
            pointer: Point::new(480.0, 310.0),
        },
        Event::DragEnd {
            position: Point::new(-40.0, -2.0),
        },
        Event::Tap {
            pointer: Point::new(120.0, 260.0),
        },
        Event::ShowDetails,
        Event::Click {
            apartment: "apt-right".into(),
        },
        Event::Reserve,
        Event::CloseOverlay,
        Event::SelectFloor(6),
        Event::SelectEntrance(7),
        Event::FitScene,
    ]
}

/// Feeds `events` to `controller`, logging each event and the actions it produced.
pub fn replay<S: ApartmentService>(
    controller: &mut Controller<S>,
    events: Vec<Event>,
) -> Vec<Action> {
    let mut all = Vec::new();
    for event in events {
        log::debug!("event {event:?}");
        let actions = controller.handle(event);
        for action in &actions {
            log::info!("action {action:?}");
        }
        all.extend(actions);
    }
    all
}
