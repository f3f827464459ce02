//! Integration tests for resize gestures and edge-zone priority.

use crate::helpers::{gesture, unit_box, Recorder, TestEngineBuilder};
use interact::{
    ElementId, EngineConfig, InteractOptions, NotificationKind, PointerInput, ResizeAxes,
    StyleTarget,
};

#[test]
fn test_bottom_edge_resize_masks_x() {
    let mut engine = TestEngineBuilder::new()
        .with_element(1, unit_box(), InteractOptions::resizable())
        .build();
    let recorder = Recorder::attach(&mut engine, 1);

    gesture(&mut engine, 1, (50.0, 95.0), &[(60.0, 110.0)]);

    assert_eq!(recorder.names(), vec!["resizestart", "resizemove", "resizeend"]);
    assert_eq!(recorder.deltas(), vec![(0.0, 15.0), (0.0, 15.0), (0.0, 15.0)]);
}

#[test]
fn test_right_edge_resize_masks_y() {
    let mut engine = TestEngineBuilder::new()
        .with_element(1, unit_box(), InteractOptions::resizable())
        .build();
    let recorder = Recorder::attach(&mut engine, 1);

    gesture(&mut engine, 1, (95.0, 50.0), &[(120.0, 70.0)]);

    assert_eq!(recorder.last().unwrap().detail.delta(), (25.0, 0.0));
}

#[test]
fn test_corner_resize_keeps_both_axes() {
    let mut engine = TestEngineBuilder::new()
        .with_element(1, unit_box(), InteractOptions::resizable())
        .build();
    let recorder = Recorder::attach(&mut engine, 1);

    gesture(&mut engine, 1, (95.0, 95.0), &[(105.0, 110.0)]);

    assert_eq!(recorder.last().unwrap().detail.delta(), (10.0, 15.0));
}

#[test]
fn test_resize_wins_over_drag_in_edge_zone() {
    let mut engine = TestEngineBuilder::new()
        .with_element(1, unit_box(), InteractOptions::both())
        .build();
    let recorder = Recorder::attach(&mut engine, 1);

    gesture(&mut engine, 1, (95.0, 50.0), &[(100.0, 50.0)]);
    assert_eq!(recorder.kinds()[0], NotificationKind::ResizeStart);

    recorder.clear();
    gesture(&mut engine, 1, (50.0, 50.0), &[(60.0, 50.0)]);
    assert_eq!(recorder.kinds()[0], NotificationKind::DragStart);
}

#[test]
fn test_interior_press_on_resize_only_element_does_nothing() {
    let mut engine = TestEngineBuilder::new()
        .with_element(1, unit_box(), InteractOptions::resizable())
        .build();
    let recorder = Recorder::attach(&mut engine, 1);

    gesture(&mut engine, 1, (50.0, 50.0), &[(70.0, 70.0)]);

    assert_eq!(recorder.len(), 0);
}

#[test]
fn test_drag_only_element_resizes_in_edge_zone() {
    let mut engine = TestEngineBuilder::new()
        .with_element(1, unit_box(), InteractOptions::draggable())
        .build();
    let recorder = Recorder::attach(&mut engine, 1);

    gesture(&mut engine, 1, (95.0, 50.0), &[(105.0, 60.0)]);

    assert_eq!(recorder.names(), vec!["resizestart", "resizemove", "resizeend"]);
    assert_eq!(recorder.last().unwrap().detail.delta(), (10.0, 0.0));
}

#[test]
fn test_touch_uses_wider_margin() {
    let mut engine = TestEngineBuilder::new()
        .with_element(1, unit_box(), InteractOptions::resizable())
        .build();
    let recorder = Recorder::attach(&mut engine, 1);

    // 20px from the right edge: outside the mouse zone, inside the touch zone
    let _ = engine.pointer_down(&PointerInput::mouse(80.0, 50.0).on(ElementId(1)));
    let _ = engine.pointer_move(&PointerInput::mouse(90.0, 50.0));
    let _ = engine.pointer_up(&PointerInput::mouse(90.0, 50.0));
    assert_eq!(recorder.len(), 0);

    let _ = engine.pointer_down(&PointerInput::touch(80.0, 50.0).on(ElementId(1)));
    assert_eq!(engine.gesture().resize_axes, ResizeAxes::X);
    let _ = engine.pointer_move(&PointerInput::touch(90.0, 50.0));
    let _ = engine.pointer_up(&PointerInput::touch(90.0, 50.0));
    assert_eq!(recorder.names(), vec!["resizestart", "resizemove", "resizeend"]);
}

#[test]
fn test_configured_margin_is_used() {
    let config = EngineConfig {
        mouse_margin: 25.0,
        ..Default::default()
    };
    let mut engine = TestEngineBuilder::new()
        .with_element(1, unit_box(), InteractOptions::resizable())
        .with_config(config)
        .build();

    let _ = engine.pointer_down(&PointerInput::mouse(80.0, 50.0).on(ElementId(1)));
    assert!(engine.gesture().is_resizing());
}

#[test]
fn test_resize_classes_on_element_and_root() {
    let mut engine = TestEngineBuilder::new()
        .with_element(1, unit_box(), InteractOptions::resizable())
        .build();
    let id = ElementId(1);

    let _ = engine.pointer_down(&PointerInput::mouse(50.0, 95.0).on(id));
    assert!(engine.host().has_class(StyleTarget::Root, "interact-yresize"));
    assert!(engine.host().has_class(id, "interact-resizing"));
    assert!(!engine.host().has_class(id, "interact-resize-target"));

    let _ = engine.pointer_move(&PointerInput::mouse(50.0, 105.0));
    assert!(engine.host().has_class(id, "interact-resize-target"));

    let _ = engine.pointer_up(&PointerInput::mouse(50.0, 105.0));
    assert!(engine.host().classes(StyleTarget::Root).is_empty());
    assert_eq!(
        engine.host().classes(id),
        vec!["interact-node".to_string(), "interact-resizeable".to_string()]
    );
}

#[test]
fn test_missing_layout_falls_back_to_drag() {
    let mut engine = TestEngineBuilder::new()
        .with_element(1, unit_box(), InteractOptions::draggable())
        .build();
    engine.host_mut().detach(ElementId(1));

    let _ = engine.pointer_down(&PointerInput::mouse(95.0, 95.0).on(ElementId(1)));
    assert!(engine.gesture().is_dragging());
}

#[test]
fn test_y_axis_resize_over_drag_path() {
    let mut engine = TestEngineBuilder::new()
        .with_element(1, interact::Rect::new(0.0, 0.0, 200.0, 105.0), InteractOptions::resizable())
        .build();
    let recorder = Recorder::attach(&mut engine, 1);

    gesture(&mut engine, 1, (100.0, 100.0), &[(110.0, 105.0), (130.0, 115.0)]);

    let end = recorder.last().unwrap();
    assert_eq!(end.kind, NotificationKind::ResizeEnd);
    assert_eq!(end.detail.delta(), (0.0, 15.0));
}
