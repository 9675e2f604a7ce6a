// Copyright 2025 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use floorplan_display::Display;
use floorplan_scene::Scene;

use crate::config::{ConfigError, ControllerConfig};
use crate::event::{Action, Event};
use crate::panel::{OverlayView, SidebarView};
use crate::reduce::{Context, reduce};
use crate::render::render;
use crate::service::{ApartmentService, NoticeService};
use crate::state::FloorPlanState;

/// Owns the scene, the state record and the apartment service.
///
/// [`Controller::handle`] is the only way state changes. Each call runs
/// [`reduce`], keeps the resulting state, forwards details and reservation
/// actions to the service, and returns every action so the host can apply
/// the rest (such as cursor changes).
#[derive(Debug)]
pub struct Controller<S = NoticeService> {
    scene: Scene,
    config: ControllerConfig,
    state: FloorPlanState,
    service: S,
}

impl Controller<NoticeService> {
    /// Creates a controller with the default notice service.
    pub fn new(scene: Scene, config: ControllerConfig) -> Result<Self, ConfigError> {
        Self::with_service(scene, config, NoticeService::new())
    }

    /// The reference layout with the default configuration.
    #[must_use]
    pub fn reference() -> Self {
        Self::build(Scene::reference(), ControllerConfig::default(), NoticeService::new())
    }
}

impl<S: ApartmentService> Controller<S> {
    /// Creates a controller that forwards overlay actions to `service`.
    pub fn with_service(
        scene: Scene,
        config: ControllerConfig,
        service: S,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(scene, config, service))
    }

    fn build(scene: Scene, config: ControllerConfig, service: S) -> Self {
        for apartment in scene.indistinguishable_highlights() {
            log::warn!(
                "apartment {} is highlighted with its unselected fill; selecting it has no visible effect",
                apartment.id
            );
        }
        let state = FloorPlanState::initial(&scene, &config);
        log::info!(
            "floor plan ready: {} apartments, floor {}, entrance {}",
            scene.apartments().len(),
            state.selectors.floor,
            state.selectors.entrance
        );
        Self {
            scene,
            config,
            state,
            service,
        }
    }

    /// Applies one event and returns the actions it produced.
    pub fn handle(&mut self, event: Event) -> Vec<Action> {
        let ctx = Context {
            scene: &self.scene,
            config: &self.config,
        };
        let transition = reduce(&ctx, &self.state, &event);
        if transition.state.selection.revision() != self.state.selection.revision() {
            if let Some(id) = transition.state.selected() {
                log::info!("selected {id}");
            } else {
                log::info!("selection cleared");
            }
        }
        self.state = transition.state;

        for action in &transition.actions {
            self.dispatch(action);
        }
        transition.actions
    }

    fn dispatch(&mut self, action: &Action) {
        let (id, reserve) = match action {
            Action::ShowDetails(id) => (id, false),
            Action::Reserve(id) => (id, true),
            Action::SetCursor(_) => return,
        };
        let Some(apartment) = self.scene.apartment(id.as_str()) else {
            return;
        };
        log::info!(
            "{} for apartment {id}",
            if reserve { "reservation" } else { "details" }
        );
        if reserve {
            self.service.reserve(apartment);
        } else {
            self.service.show_details(apartment);
        }
    }

    /// The display tree for the current state.
    #[must_use]
    pub fn render(&self) -> Display {
        render(&self.scene, &self.state, self.config.view_size.into())
    }

    /// Overlay content, if the overlay is open.
    #[must_use]
    pub fn overlay_view(&self) -> Option<OverlayView> {
        OverlayView::new(&self.scene, &self.state)
    }

    /// Sidebar content.
    #[must_use]
    pub fn sidebar_view(&self) -> SidebarView {
        SidebarView::new(&self.scene, &self.state)
    }

    /// The scene.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The configuration.
    #[must_use]
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// The current state.
    #[must_use]
    pub fn state(&self) -> &FloorPlanState {
        &self.state
    }

    /// The apartment service.
    #[must_use]
    pub fn service(&self) -> &S {
        &self.service
    }

    /// Mutable access to the apartment service.
    pub fn service_mut(&mut self) -> &mut S {
        &mut self.service
    }
}

#[cfg(test)]
mod tests {
    use floorplan_scene::{Apartment, Scene};

    use super::Controller;
    use crate::config::{CloseBehavior, ConfigError, ControllerConfig};
    use crate::event::{Action, Event};
    use crate::service::ApartmentService;

    #[derive(Debug, Default)]
    struct Recorder(Vec<String>);

    impl ApartmentService for Recorder {
        fn show_details(&mut self, apartment: &Apartment) {
            self.0.push(format!("details {}", apartment.number));
        }

        fn reserve(&mut self, apartment: &Apartment) {
            self.0.push(format!("reserve {}", apartment.number));
        }
    }

    #[test]
    fn actions_reach_the_service() {
        let mut controller = Controller::with_service(
            Scene::reference(),
            ControllerConfig::default(),
            Recorder::default(),
        )
        .unwrap();
        controller.handle(Event::Click {
            apartment: "apt-right".into(),
        });
        let actions = controller.handle(Event::Reserve);
        assert_eq!(actions, [Action::Reserve("apt-right".into())]);
        controller.handle(Event::ShowDetails);
        assert_eq!(controller.service().0, ["reserve 3", "details 3"]);
    }

    #[test]
    fn reselecting_does_not_count_as_a_change() {
        let config = ControllerConfig {
            close_behavior: CloseBehavior::ClearSelection,
            ..ControllerConfig::default()
        };
        let mut controller = Controller::new(Scene::reference(), config).unwrap();
        let revision = |c: &Controller| c.state().selection.revision();
        let click = |id: &str| Event::Click {
            apartment: id.into(),
        };

        controller.handle(click("apt-left"));
        assert_eq!(revision(&controller), 1);
        controller.handle(click("apt-left"));
        controller.handle(Event::CloseOverlay);
        assert_eq!(revision(&controller), 2);
        controller.handle(click("apt-right"));
        controller.handle(click("apt-right"));
        assert_eq!(revision(&controller), 3);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = ControllerConfig {
            zoom_step: 0.5,
            ..ControllerConfig::default()
        };
        assert!(matches!(
            Controller::new(Scene::reference(), config),
            Err(ConfigError::ZoomStep(_))
        ));
    }

    #[test]
    fn render_uses_configured_view_size() {
        let controller = Controller::reference();
        let display = controller.render();
        assert_eq!(display.size.width, 1000.0);
        assert_eq!(display.size.height, 600.0);
    }
}
