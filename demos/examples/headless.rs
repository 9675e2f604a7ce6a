// Copyright 2025 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless floor-plan session.
//!
//! Loads the reference layout, or a JSON scene given as the first argument,
//! replays a scripted session and writes the final frame as SVG to stdout.
//! Panel contents and acknowledgements go to the log.
//!
//! Run:
//! - `RUST_LOG=info cargo run -p floorplan_demos --example headless > plan.svg`
//! - `cargo run -p floorplan_demos --example headless -- my_scene.json > plan.svg`

use std::io::Write as _;

use floorplan::floorplan_scene::Scene;
use floorplan::{Controller, ControllerConfig};
use floorplan_demos::{replay, scripted_session};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let scene = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("loading scene from {path}");
            Scene::from_json_str(&std::fs::read_to_string(&path)?)?
        }
        None => Scene::reference(),
    };

    let mut viewer = Controller::new(scene, ControllerConfig::default())?;
    replay(&mut viewer, scripted_session());

    for notice in viewer.service_mut().drain() {
        log::info!("notice for {}: {}", notice.apartment, notice.message());
    }
    let sidebar = viewer.sidebar_view();
    log::info!(
        "sidebar: {} {}, {} {}, selected {}",
        sidebar.entrance.value,
        sidebar.entrance.badge_caption,
        sidebar.floor.value,
        sidebar.floor.badge_caption,
        sidebar.selected
    );
    let info = viewer.state().viewport.debug_info();
    log::info!("viewport: scale {} offset {:?}", info.zoom, info.pan);

    let svg = viewer.render().to_svg();
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(svg.as_bytes())?;
    stdout.write_all(b"\n")?;
    Ok(())
}
