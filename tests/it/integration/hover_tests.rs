//! Integration tests for edge-zone hover cursor classes.

use crate::helpers::{unit_box, TestEngineBuilder};
use interact::{DefaultAction, ElementId, InteractOptions, PointerInput, Rect};

const HOVER_CLASSES: [&str; 3] = ["interact-xresize", "interact-yresize", "interact-xyresize"];

fn hover_classes(engine: &crate::helpers::TestEngine, id: u64) -> Vec<String> {
    engine
        .host()
        .classes(ElementId(id))
        .into_iter()
        .filter(|c| HOVER_CLASSES.contains(&c.as_str()))
        .collect()
}

#[test]
fn test_hover_tracks_edge_zone() {
    let mut engine = TestEngineBuilder::new()
        .with_element(1, unit_box(), InteractOptions::resizable())
        .build();
    let id = ElementId(1);

    let action = engine.pointer_move(&PointerInput::mouse(95.0, 50.0).on(id));
    assert_eq!(action, DefaultAction::Allow);
    assert_eq!(hover_classes(&engine, 1), vec!["interact-xresize"]);

    let _ = engine.pointer_move(&PointerInput::mouse(95.0, 95.0).on(id));
    assert_eq!(hover_classes(&engine, 1), vec!["interact-xyresize"]);

    let _ = engine.pointer_move(&PointerInput::mouse(50.0, 50.0).on(id));
    assert!(hover_classes(&engine, 1).is_empty());
}

#[test]
fn test_leaving_element_clears_hover() {
    let mut engine = TestEngineBuilder::new()
        .with_element(1, unit_box(), InteractOptions::resizable())
        .with_element(2, Rect::new(200.0, 0.0, 100.0, 100.0), InteractOptions::resizable())
        .build();

    let _ = engine.pointer_move(&PointerInput::mouse(50.0, 95.0).on(ElementId(1)));
    assert_eq!(hover_classes(&engine, 1), vec!["interact-yresize"]);

    let _ = engine.pointer_move(&PointerInput::mouse(295.0, 50.0).on(ElementId(2)));
    assert!(hover_classes(&engine, 1).is_empty());
    assert_eq!(hover_classes(&engine, 2), vec!["interact-xresize"]);

    let _ = engine.pointer_move(&PointerInput::mouse(500.0, 500.0));
    assert!(hover_classes(&engine, 2).is_empty());
}

#[test]
fn test_drag_only_element_gets_no_hover() {
    let mut engine = TestEngineBuilder::new()
        .with_element(1, unit_box(), InteractOptions::draggable())
        .build();

    let _ = engine.pointer_move(&PointerInput::mouse(95.0, 95.0).on(ElementId(1)));
    assert!(hover_classes(&engine, 1).is_empty());
}

#[test]
fn test_hover_cleared_when_gesture_starts() {
    let mut engine = TestEngineBuilder::new()
        .with_element(1, unit_box(), InteractOptions::resizable())
        .build();
    let id = ElementId(1);

    let _ = engine.pointer_move(&PointerInput::mouse(95.0, 50.0).on(id));
    let _ = engine.pointer_down(&PointerInput::mouse(95.0, 50.0).on(id));
    assert!(hover_classes(&engine, 1).is_empty());

    // Hover stays off for the rest of the gesture
    let _ = engine.pointer_move(&PointerInput::mouse(99.0, 99.0).on(id));
    assert!(hover_classes(&engine, 1).is_empty());

    let _ = engine.pointer_up(&PointerInput::mouse(99.0, 99.0));
    let _ = engine.pointer_move(&PointerInput::mouse(99.0, 99.0).on(id));
    assert_eq!(hover_classes(&engine, 1), vec!["interact-xyresize"]);
}
