//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestEngineBuilder` - Builder for an engine over a `MemoryHost`
//! - `Recorder` - Captures notifications observed on an element
//! - `gesture()` - Runs a down/move*/up sequence

#![allow(dead_code)]

use interact::{
    ElementId, EngineConfig, InteractEngine, InteractOptions, InteractionEvent, MemoryHost,
    NotificationKind, PointerInput, Rect,
};
use std::cell::RefCell;
use std::rc::Rc;

pub type TestEngine = InteractEngine<MemoryHost>;

// ============================================================================
// TestEngineBuilder
// ============================================================================

/// Builder for an engine with pre-registered elements.
///
/// # Example
/// ```ignore
/// let engine = TestEngineBuilder::new()
///     .with_element(1, Rect::new(0.0, 0.0, 100.0, 100.0), InteractOptions::draggable())
///     .build();
/// ```
pub struct TestEngineBuilder {
    elements: Vec<(ElementId, Rect, Option<InteractOptions>)>,
    parents: Vec<(ElementId, ElementId)>,
    names: Vec<(String, ElementId)>,
    config: EngineConfig,
}

impl Default for TestEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEngineBuilder {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            parents: Vec::new(),
            names: Vec::new(),
            config: EngineConfig::default(),
        }
    }

    /// Lay out and register an element.
    pub fn with_element(mut self, id: u64, rect: Rect, options: InteractOptions) -> Self {
        self.elements.push((ElementId(id), rect, Some(options)));
        self
    }

    /// Lay out an element without registering it.
    pub fn with_plain_element(mut self, id: u64, rect: Rect) -> Self {
        self.elements.push((ElementId(id), rect, None));
        self
    }

    pub fn with_parent(mut self, child: u64, parent: u64) -> Self {
        self.parents.push((ElementId(child), ElementId(parent)));
        self
    }

    pub fn with_name(mut self, name: &str, id: u64) -> Self {
        self.names.push((name.to_string(), ElementId(id)));
        self
    }

    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> TestEngine {
        let mut host = MemoryHost::new();
        for (id, rect, _) in &self.elements {
            host.insert(*id, *rect);
        }
        for (child, parent) in &self.parents {
            host.set_parent(*child, *parent);
        }
        for (name, id) in &self.names {
            host.set_name(name.clone(), *id);
        }

        let mut engine =
            InteractEngine::with_config(host, self.config).expect("valid test config");
        for (id, _, options) in self.elements {
            if let Some(options) = options {
                engine.register(id, options);
            }
        }
        engine
    }
}

/// A 100x100 box at the origin.
pub fn unit_box() -> Rect {
    Rect::new(0.0, 0.0, 100.0, 100.0)
}

// ============================================================================
// Recorder
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct Recorded {
    pub kind: NotificationKind,
    pub target: ElementId,
    pub current_target: ElementId,
    pub detail: InteractionEvent,
}

/// Shared log of notifications seen by one or more listeners.
#[derive(Clone, Default)]
pub struct Recorder {
    log: Rc<RefCell<Vec<Recorded>>>,
}

impl Recorder {
    /// Record every notification delivered to `element`, bubbled ones included.
    pub fn attach(engine: &mut TestEngine, element: u64) -> Self {
        let recorder = Self::default();
        recorder.listen_on(engine, element);
        recorder
    }

    pub fn listen_on(&self, engine: &mut TestEngine, element: u64) {
        let log = Rc::clone(&self.log);
        engine.listen_all(ElementId(element), move |n| {
            log.borrow_mut().push(Recorded {
                kind: n.kind(),
                target: n.target(),
                current_target: n.current_target(),
                detail: *n.detail(),
            });
        });
    }

    pub fn events(&self) -> Vec<Recorded> {
        self.log.borrow().clone()
    }

    pub fn kinds(&self) -> Vec<NotificationKind> {
        self.log.borrow().iter().map(|r| r.kind).collect()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.log.borrow().iter().map(|r| r.kind.name()).collect()
    }

    pub fn deltas(&self) -> Vec<(f64, f64)> {
        self.log.borrow().iter().map(|r| r.detail.delta()).collect()
    }

    pub fn last(&self) -> Option<Recorded> {
        self.log.borrow().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.log.borrow().len()
    }

    pub fn clear(&self) {
        self.log.borrow_mut().clear();
    }
}

// ============================================================================
// Gestures
// ============================================================================

/// Press on `target` at `down`, move through `path`, release.
pub fn gesture(engine: &mut TestEngine, target: u64, down: (f64, f64), path: &[(f64, f64)]) {
    let target = ElementId(target);
    let _ = engine.pointer_down(&PointerInput::mouse(down.0, down.1).on(target));
    for &(x, y) in path {
        let _ = engine.pointer_move(&PointerInput::mouse(x, y).on(target));
    }
    let end = path.last().copied().unwrap_or(down);
    let _ = engine.pointer_up(&PointerInput::mouse(end.0, end.1));
}
