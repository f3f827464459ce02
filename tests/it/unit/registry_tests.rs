//! Unit tests for registration, replacement, lookup and unregistration.

use crate::helpers::{unit_box, TestEngineBuilder};
use interact::{ElementHost, ElementId, InteractEngine, InteractOptions, MemoryHost, Rect};
use serde_json::json;

#[test]
fn test_register_and_lookup() {
    let engine = TestEngineBuilder::new()
        .with_element(1, unit_box(), InteractOptions::draggable())
        .build();

    assert!(engine.is_registered(ElementId(1)));
    let record = engine.lookup(ElementId(1)).unwrap();
    assert!(record.allow_drag());
    assert!(!record.allow_resize());
    assert!(engine.lookup(ElementId(2)).is_none());
}

#[test]
fn test_lookup_by_identifier() {
    let engine = TestEngineBuilder::new()
        .with_element(5, unit_box(), InteractOptions::resizable())
        .with_name("panel", 5)
        .with_plain_element(6, unit_box())
        .with_name("plain", 6)
        .build();

    assert_eq!(engine.lookup("panel").map(|r| r.element), Some(ElementId(5)));
    assert!(engine.lookup("plain").is_none());
    assert!(engine.lookup("missing").is_none());
}

#[test]
fn test_reregister_replaces_flags() {
    let mut engine = TestEngineBuilder::new()
        .with_element(1, unit_box(), InteractOptions::draggable())
        .build();

    engine.register(ElementId(1), InteractOptions::resizable());

    assert_eq!(engine.registry().len(), 1);
    let record = engine.lookup(ElementId(1)).unwrap();
    assert!(record.allow_resize());
    assert!(!record.allow_drag());
}

#[test]
fn test_reregister_updates_classes() {
    let mut engine = TestEngineBuilder::new()
        .with_element(1, unit_box(), InteractOptions::draggable())
        .build();
    assert!(engine.host().has_class(ElementId(1), "interact-draggable"));

    engine.register(ElementId(1), InteractOptions::resizable());
    assert_eq!(
        engine.host().classes(ElementId(1)),
        vec!["interact-node".to_string(), "interact-resizeable".to_string()]
    );
}

#[test]
fn test_register_value_uses_defaults() {
    let mut engine = InteractEngine::new(MemoryHost::new());
    engine.register_value(ElementId(1), &json!({ "drag": true, "snap": 10 }));
    engine.register_value(ElementId(2), &json!("resize"));

    assert!(engine.lookup(ElementId(1)).unwrap().allow_drag());
    let second = engine.lookup(ElementId(2)).unwrap();
    assert!(!second.allow_drag() && !second.allow_resize());
}

#[test]
fn test_unregister_unknown_is_noop() {
    let mut engine = TestEngineBuilder::new()
        .with_element(1, unit_box(), InteractOptions::draggable())
        .build();

    engine.unregister(ElementId(99));
    assert_eq!(engine.registry().len(), 1);
    assert!(engine.is_registered(ElementId(1)));
}

#[test]
fn test_unregister_removes_everything() {
    let mut engine = TestEngineBuilder::new()
        .with_element(1, unit_box(), InteractOptions::both())
        .build();
    engine.listen_all(ElementId(1), |_| {});
    assert_eq!(engine.registry().listener_count(ElementId(1)), 1);

    engine.unregister(ElementId(1));

    assert!(!engine.is_registered(ElementId(1)));
    assert_eq!(engine.registry().listener_count(ElementId(1)), 0);
    assert!(engine.host().classes(ElementId(1)).is_empty());
}

#[test]
fn test_unlisten() {
    let mut engine = TestEngineBuilder::new()
        .with_element(1, Rect::new(0.0, 0.0, 10.0, 10.0), InteractOptions::draggable())
        .build();
    let id = engine.listen_all(ElementId(1), |_| {});

    assert!(engine.unlisten(id));
    assert!(!engine.unlisten(id));
}

#[test]
fn test_unregister_unknown_strips_crate_classes() {
    let mut engine = TestEngineBuilder::new()
        .with_plain_element(9, unit_box())
        .build();
    engine.host_mut().add_class(ElementId(9).into(), "interact-dragging");
    engine.host_mut().add_class(ElementId(9).into(), "card");

    engine.unregister(ElementId(9));

    assert_eq!(engine.host().classes(ElementId(9)), vec!["card".to_string()]);
    assert_eq!(engine.registry().len(), 0);
}
