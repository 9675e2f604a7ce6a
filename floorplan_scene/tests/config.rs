// Copyright 2025 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loading scenes from JSON documents.

use floorplan_scene::{
    ApartmentConfig, Scene, SceneConfig, SceneError, SelectorKind, ShapeConfig, reference,
};
use peniko::Color;

fn apartment(id: &str) -> ApartmentConfig {
    ApartmentConfig {
        id: id.into(),
        number: 1,
        info: vec!["10.00".into(), "20.00".into()],
        group_x: 0.0,
        group_y: 0.0,
        shapes: vec![ShapeConfig {
            x: 0.0,
            y: 0.0,
            w: 50.0,
            h: 50.0,
            label: String::new(),
            fill: None,
        }],
        highlight_color: "#FFFFFF".into(),
    }
}

fn document(apartments: Vec<ApartmentConfig>) -> SceneConfig {
    let mut config = SceneConfig::from(&Scene::reference());
    config.apartments = apartments;
    config
}

#[test]
fn reference_survives_json() {
    let json = SceneConfig::from(&Scene::reference())
        .to_json_string()
        .unwrap();
    assert!(json.contains("\"groupX\""));
    assert!(json.contains("\"highlightColor\": \"#7DD3C0\""));
    assert_eq!(Scene::from_json_str(&json).unwrap(), Scene::reference());
}

#[test]
fn omitted_building_and_options_use_reference_values() {
    let scene = Scene::from_json_str(
        r##"{"apartments":[{"id":"x","number":4,"info":["1","2"],"groupX":0,"groupY":0,
            "shapes":[{"x":0,"y":0,"w":10,"h":10}],"highlightColor":"#abc"}]}"##,
    )
    .unwrap();
    assert_eq!(scene.building(), reference::BUILDING);
    assert_eq!(scene.options(SelectorKind::Floor), reference::FLOORS);
    assert_eq!(scene.options(SelectorKind::Entrance), reference::ENTRANCES);
    assert_eq!(
        scene.apartment("x").unwrap().highlight,
        Color::from_rgb8(0xAA, 0xBB, 0xCC)
    );
}

#[test]
fn malformed_json_is_a_parse_error() {
    assert!(matches!(
        Scene::from_json_str("{\"apartments\": ["),
        Err(SceneError::Parse(_))
    ));
    assert!(matches!(
        Scene::from_json_str("{}"),
        Err(SceneError::Parse(_))
    ));
}

#[test]
fn info_must_have_two_entries() {
    let mut short = apartment("a");
    short.info.pop();
    let err = Scene::from_config(document(vec![short])).unwrap_err();
    assert!(matches!(err, SceneError::InfoArity { found: 1, .. }), "{err}");

    let mut long = apartment("a");
    long.info.push("3".into());
    assert!(matches!(
        Scene::from_config(document(vec![long])),
        Err(SceneError::InfoArity { found: 3, .. })
    ));
}

#[test]
fn malformed_colours_are_rejected() {
    let mut bad_highlight = apartment("a");
    bad_highlight.highlight_color = "teal".into();
    assert!(matches!(
        Scene::from_config(document(vec![bad_highlight])),
        Err(SceneError::InvalidColor { value, .. }) if value == "teal"
    ));

    let mut bad_fill = apartment("a");
    bad_fill.shapes[0].fill = Some("#12".into());
    assert!(matches!(
        Scene::from_config(document(vec![bad_fill])),
        Err(SceneError::InvalidColor { value, .. }) if value == "#12"
    ));
}

#[test]
fn one_bad_entry_rejects_the_whole_list() {
    let mut bad = apartment("b");
    bad.shapes[0].w = -5.0;
    let result = Scene::from_config(document(vec![apartment("a"), bad, apartment("c")]));
    assert!(matches!(
        result,
        Err(SceneError::InvalidShape { id, index: 0 }) if id == "b"
    ));
}

#[test]
fn duplicate_ids_are_rejected() {
    let result = Scene::from_config(document(vec![apartment("a"), apartment("a")]));
    assert!(matches!(result, Err(SceneError::DuplicateId(id)) if id == "a"));
}

#[test]
fn empty_selector_options_are_rejected() {
    let mut config = document(vec![apartment("a")]);
    config.entrances.clear();
    assert!(matches!(
        Scene::try_from(config),
        Err(SceneError::EmptyOptions(SelectorKind::Entrance))
    ));
}

#[test]
fn errors_render_readable_messages() {
    let err = Scene::from_config(document(vec![])).unwrap_err();
    assert_eq!(err.to_string(), "scene has no apartments");
}
