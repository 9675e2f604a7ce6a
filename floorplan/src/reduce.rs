// Copyright 2025 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pure transition function.
//!
//! [`reduce`] takes the immutable context, the current state and one event,
//! and returns the next state together with the side effects the host or
//! the [`Controller`](crate::Controller) should perform. It never fails:
//! events that do not apply (a click on an unknown apartment, a selector
//! value outside its options, a details request with the overlay closed)
//! leave the state unchanged and are logged.

use floorplan_event_state::hover::HoverEvent;
use floorplan_scene::{ApartmentId, Scene, SelectorKind};
use floorplan_view2d::ZoomDirection;
use kurbo::Point;

use crate::config::{CloseBehavior, ControllerConfig};
use crate::event::{Action, Cursor, Event};
use crate::state::FloorPlanState;

/// Read-only inputs of a transition.
#[derive(Clone, Copy, Debug)]
pub struct Context<'a> {
    /// The static scene.
    pub scene: &'a Scene,
    /// Controller configuration.
    pub config: &'a ControllerConfig,
}

/// Result of a transition.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    /// The next state.
    pub state: FloorPlanState,
    /// Side effects, in the order they were produced.
    pub actions: Vec<Action>,
}

/// Computes the state after `event`.
#[must_use]
pub fn reduce(ctx: &Context<'_>, state: &FloorPlanState, event: &Event) -> Transition {
    let mut next = state.clone();
    let mut actions = Vec::new();

    match event {
        Event::Wheel { pointer, delta_y } => {
            let direction = ZoomDirection::from_wheel_delta(*delta_y);
            next.viewport
                .zoom_step(*pointer, direction, ctx.config.zoom_step);
            log::debug!(
                "zoom {direction:?} at ({}, {}): scale {} offset {:?}",
                pointer.x,
                pointer.y,
                next.viewport.zoom(),
                next.viewport.pan()
            );
        }
        Event::DragStart { pointer } => {
            next.drag.start(*pointer, next.viewport.pan());
        }
        Event::DragMove { pointer } => {
            if let Some(offset) = next.drag.offset_at(*pointer) {
                next.drag.update(*pointer);
                next.viewport.set_pan(offset);
            }
        }
        Event::DragEnd { position } => {
            next.drag.end();
            next.viewport.set_pan(position.to_vec2());
            log::debug!("pan ended at offset {:?}", next.viewport.pan());
        }
        Event::Click { apartment } => {
            if ctx.scene.apartment(apartment.as_str()).is_some() {
                select(&mut next, apartment.clone());
            } else {
                log::warn!("ignoring click on unknown apartment {apartment}");
            }
        }
        Event::Tap { pointer } => {
            if let Some(hit) = state.apartment_at(ctx.scene, *pointer) {
                select(&mut next, hit.id.clone());
            }
        }
        Event::PointerMove { pointer } => {
            hover(ctx, &mut next, *pointer, &mut actions);
        }
        Event::SelectFloor(value) => set_selector(ctx, &mut next, SelectorKind::Floor, *value),
        Event::SelectEntrance(value) => {
            set_selector(ctx, &mut next, SelectorKind::Entrance, *value);
        }
        Event::ResetView => {
            next.viewport.reset();
            log::debug!("view reset");
        }
        Event::FitScene => {
            next.viewport.fit_rect(ctx.scene.bounds());
            log::debug!(
                "fit scene: scale {} offset {:?}",
                next.viewport.zoom(),
                next.viewport.pan()
            );
        }
        Event::CloseOverlay => {
            next.overlay.close();
            if ctx.config.close_behavior == CloseBehavior::ClearSelection {
                next.selection.clear();
            }
        }
        Event::ShowDetails => match next.overlay.subject() {
            Some(id) => actions.push(Action::ShowDetails(id.clone())),
            None => log::warn!("details requested with no apartment open"),
        },
        Event::Reserve => match next.overlay.subject() {
            Some(id) => actions.push(Action::Reserve(id.clone())),
            None => log::warn!("reservation requested with no apartment open"),
        },
    }

    Transition {
        state: next,
        actions,
    }
}

fn select(state: &mut FloorPlanState, id: ApartmentId) {
    state.selection.select(id.clone());
    state.overlay.open(id);
}

fn hover(ctx: &Context<'_>, state: &mut FloorPlanState, pointer: Point, actions: &mut Vec<Action>) {
    let target = state
        .apartment_at(ctx.scene, pointer)
        .map(|apt| apt.id.clone());
    // Moving straight from one apartment to another keeps the pointer cursor.
    match state.hover.update(target) {
        [None, Some(HoverEvent::Enter(id))] => {
            log::debug!("pointer entered {id}");
            actions.push(Action::SetCursor(Cursor::Pointer));
        }
        [Some(HoverEvent::Leave(id)), None] => {
            log::debug!("pointer left {id}");
            actions.push(Action::SetCursor(Cursor::Default));
        }
        _ => {}
    }
}

fn set_selector(ctx: &Context<'_>, state: &mut FloorPlanState, kind: SelectorKind, value: u32) {
    if ctx.scene.options(kind).contains(&value) {
        state.selectors.set(kind, value);
    } else {
        log::warn!("ignoring {kind} {value}: not one of {:?}", ctx.scene.options(kind));
    }
}

#[cfg(test)]
mod tests {
    use floorplan_scene::Scene;
    use kurbo::{Point, Vec2};

    use super::{Context, reduce};
    use crate::config::{CloseBehavior, ControllerConfig};
    use crate::event::{Action, Cursor, Event};
    use crate::state::FloorPlanState;

    fn run(config: &ControllerConfig, events: &[Event]) -> (FloorPlanState, Vec<Action>) {
        let scene = Scene::reference();
        let ctx = Context {
            scene: &scene,
            config,
        };
        let mut state = FloorPlanState::initial(&scene, config);
        let mut actions = Vec::new();
        for event in events {
            let transition = reduce(&ctx, &state, event);
            state = transition.state;
            actions.extend(transition.actions);
        }
        (state, actions)
    }

    fn click(id: &str) -> Event {
        Event::Click {
            apartment: id.into(),
        }
    }

    #[test]
    fn wheel_up_zooms_in_about_the_pointer() {
        let (state, actions) = run(
            &ControllerConfig::default(),
            &[Event::Wheel {
                pointer: Point::new(500.0, 300.0),
                delta_y: -100.0,
            }],
        );
        assert!(actions.is_empty());
        assert!((state.viewport.zoom() - 1.02).abs() < 1e-12);
        let pan = state.viewport.pan();
        assert!((pan.x + 10.0).abs() < 1e-9 && (pan.y + 6.0).abs() < 1e-9, "{pan:?}");
    }

    #[test]
    fn drag_end_adopts_host_position() {
        let (state, _) = run(
            &ControllerConfig::default(),
            &[
                Event::DragStart {
                    pointer: Point::new(10.0, 10.0),
                },
                Event::DragMove {
                    pointer: Point::new(30.0, 25.0),
                },
                Event::DragEnd {
                    position: Point::new(40.0, -12.0),
                },
            ],
        );
        assert_eq!(state.viewport.pan(), Vec2::new(40.0, -12.0));
        assert!(!state.drag.is_dragging());
    }

    #[test]
    fn drag_move_pans_live() {
        let (state, _) = run(
            &ControllerConfig::default(),
            &[
                Event::DragStart {
                    pointer: Point::new(10.0, 10.0),
                },
                Event::DragMove {
                    pointer: Point::new(30.0, 25.0),
                },
            ],
        );
        assert_eq!(state.viewport.pan(), Vec2::new(20.0, 15.0));
        assert!(state.drag.is_dragging());
    }

    #[test]
    fn drag_move_without_start_is_ignored() {
        let (state, _) = run(
            &ControllerConfig::default(),
            &[Event::DragMove {
                pointer: Point::new(30.0, 25.0),
            }],
        );
        assert_eq!(state.viewport.pan(), Vec2::ZERO);
    }

    #[test]
    fn unknown_click_changes_nothing() {
        let config = ControllerConfig::default();
        let (state, _) = run(&config, &[click("apt-nowhere")]);
        assert_eq!(state, FloorPlanState::initial(&Scene::reference(), &config));
    }

    #[test]
    fn tap_on_empty_space_keeps_selection() {
        let (state, _) = run(
            &ControllerConfig::default(),
            &[
                click("apt-left"),
                Event::Tap {
                    pointer: Point::new(5.0, 5.0),
                },
            ],
        );
        assert_eq!(state.selected().map(|id| id.as_str()), Some("apt-left"));
        assert!(state.overlay.is_open());
    }

    #[test]
    fn tap_hit_tests_through_the_view() {
        let config = ControllerConfig::default();
        // Pan the stage so that scene (700, 300) sits at screen (400, 300).
        let (state, _) = run(
            &config,
            &[
                Event::DragEnd {
                    position: Point::new(-300.0, 0.0),
                },
                Event::Tap {
                    pointer: Point::new(400.0, 300.0),
                },
            ],
        );
        assert_eq!(state.selected().map(|id| id.as_str()), Some("apt-right"));
    }

    #[test]
    fn close_can_clear_the_selection() {
        let config = ControllerConfig {
            close_behavior: CloseBehavior::ClearSelection,
            ..ControllerConfig::default()
        };
        let (state, _) = run(&config, &[click("apt-left"), Event::CloseOverlay]);
        assert!(!state.overlay.is_open());
        assert!(state.selected().is_none());
    }

    #[test]
    fn overlay_buttons_emit_actions_only_while_open() {
        let (_, actions) = run(
            &ControllerConfig::default(),
            &[
                Event::ShowDetails,
                click("apt-right"),
                Event::ShowDetails,
                Event::Reserve,
                Event::CloseOverlay,
                Event::Reserve,
            ],
        );
        assert_eq!(
            actions,
            [
                Action::ShowDetails("apt-right".into()),
                Action::Reserve("apt-right".into()),
            ]
        );
    }

    #[test]
    fn selectors_accept_only_listed_values() {
        let (state, _) = run(
            &ControllerConfig::default(),
            &[
                Event::SelectFloor(5),
                Event::SelectEntrance(6),
                Event::SelectFloor(12),
                Event::SelectEntrance(0),
            ],
        );
        assert_eq!(state.selectors.floor, 5);
        assert_eq!(state.selectors.entrance, 6);
    }

    #[test]
    fn fit_scene_frames_the_building() {
        let scene = Scene::reference();
        let (state, actions) = run(
            &ControllerConfig::default(),
            &[
                Event::Wheel {
                    pointer: Point::new(100.0, 100.0),
                    delta_y: 100.0,
                },
                Event::DragEnd {
                    position: Point::new(-400.0, 250.0),
                },
                Event::FitScene,
            ],
        );
        assert!(actions.is_empty());
        let bounds = scene.bounds();
        let visible = state.viewport.visible_world_rect();
        assert!(visible.x0 <= bounds.x0 + 1e-9 && visible.x1 >= bounds.x1 - 1e-9);
        assert!(visible.y0 <= bounds.y0 + 1e-9 && visible.y1 >= bounds.y1 - 1e-9);
        let center = state.viewport.world_to_view_point(bounds.center());
        assert!((center - Point::new(500.0, 300.0)).hypot() < 1e-9);
    }

    #[test]
    fn cursor_changes_only_between_some_and_none() {
        let (state, actions) = run(
            &ControllerConfig::default(),
            &[
                // Empty space, then apt-center-left, then apt-center-right,
                // then the core block.
                Event::PointerMove {
                    pointer: Point::new(5.0, 5.0),
                },
                Event::PointerMove {
                    pointer: Point::new(320.0, 300.0),
                },
                Event::PointerMove {
                    pointer: Point::new(470.0, 300.0),
                },
                Event::PointerMove {
                    pointer: Point::new(430.0, 160.0),
                },
            ],
        );
        assert_eq!(
            actions,
            [
                Action::SetCursor(Cursor::Pointer),
                Action::SetCursor(Cursor::Default),
            ]
        );
        assert!(state.hover.current().is_none());
    }
}
