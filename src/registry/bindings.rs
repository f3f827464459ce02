//! Pointer handler bindings.
//!
//! Records which internal handler runs for which pointer phase on which
//! target. Binding the same handler twice is a no-op, so re-registration
//! never produces duplicate listeners.

use crate::types::ElementId;
use std::collections::HashMap;

/// Where a pointer handler is attached.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BindingTarget {
    /// Document-wide; sees every event regardless of target
    Document,
    Element(ElementId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
}

/// Internal pointer handlers of the gesture state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Handler {
    GestureStart,
    /// Edge-zone cursor updates while no button is held
    Hover,
    DragMove,
    ResizeMove,
    GestureEnd,
}

#[derive(Debug, Default)]
pub struct BindingTable {
    table: HashMap<(BindingTarget, PointerPhase), Vec<Handler>>,
}

impl BindingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the handler was already bound there.
    pub fn bind(&mut self, target: BindingTarget, phase: PointerPhase, handler: Handler) -> bool {
        let handlers = self.table.entry((target, phase)).or_default();
        if handlers.contains(&handler) {
            return false;
        }
        handlers.push(handler);
        true
    }

    pub fn unbind(&mut self, target: BindingTarget, phase: PointerPhase, handler: Handler) -> bool {
        let Some(handlers) = self.table.get_mut(&(target, phase)) else {
            return false;
        };
        let before = handlers.len();
        handlers.retain(|h| *h != handler);
        let removed = handlers.len() != before;
        if handlers.is_empty() {
            self.table.remove(&(target, phase));
        }
        removed
    }

    /// Drop every handler for one phase of a target.
    pub fn unbind_phase(&mut self, target: BindingTarget, phase: PointerPhase) -> usize {
        self.table
            .remove(&(target, phase))
            .map_or(0, |handlers| handlers.len())
    }

    /// Drop every handler attached to a target.
    pub fn unbind_all(&mut self, target: BindingTarget) -> usize {
        let mut removed = 0;
        self.table.retain(|(t, _), handlers| {
            if *t == target {
                removed += handlers.len();
                false
            } else {
                true
            }
        });
        removed
    }

    /// Handlers for a phase, in bind order.
    pub fn handlers(&self, target: BindingTarget, phase: PointerPhase) -> Vec<Handler> {
        self.table
            .get(&(target, phase))
            .cloned()
            .unwrap_or_default()
    }

    pub fn is_bound(&self, target: BindingTarget, phase: PointerPhase, handler: Handler) -> bool {
        self.table
            .get(&(target, phase))
            .is_some_and(|handlers| handlers.contains(&handler))
    }

    /// Number of handlers bound to a target across all phases.
    pub fn count(&self, target: BindingTarget) -> usize {
        self.table
            .iter()
            .filter(|((t, _), _)| *t == target)
            .map(|(_, handlers)| handlers.len())
            .sum()
    }
}
