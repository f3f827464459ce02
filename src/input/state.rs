//! Gesture state - the only mutable cross-call state of the engine.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Dragging    (pointer down on a draggable element, outside resize zones)
//! Idle -> Resizing    (pointer down inside a resize zone of a registered element)
//! Any  -> Idle        (pointer up - emits the end notification if a start was sent)
//! ```
//!
//! A gesture never switches between dragging and resizing.

use super::hit::ResizeAxes;
use crate::types::{ElementId, Point};
use serde::{Deserialize, Serialize};

/// Kind of gesture in progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GestureMode {
    #[default]
    None,
    Dragging,
    Resizing,
}

/// Tracker for the single pointer gesture an engine follows.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GestureState {
    /// Element that received the pointer down
    pub active_element: Option<ElementId>,
    /// Pointer position at gesture start, fixed for the gesture
    pub origin: Point,
    /// Most recent pointer position
    pub last: Point,
    pub mode: GestureMode,
    /// Only meaningful while `mode` is `Resizing`
    pub resize_axes: ResizeAxes,
    pub pointer_down: bool,
    /// Whether the start notification of the current gesture was emitted
    pub started: bool,
    /// Whether native default actions are suppressed until pointer up
    pub suppress_default: bool,
    /// Element currently showing a hover cursor class
    pub hovered: Option<ElementId>,
}

impl GestureState {
    /// Returns true if no drag or resize is in progress
    pub fn is_idle(&self) -> bool {
        matches!(self.mode, GestureMode::None)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.mode, GestureMode::Dragging)
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self.mode, GestureMode::Resizing)
    }

    /// Record a pointer down on `element` at `origin`.
    pub fn press(&mut self, element: ElementId, origin: Point, suppress_default: bool) {
        self.active_element = Some(element);
        self.origin = origin;
        self.last = origin;
        self.pointer_down = true;
        self.started = false;
        self.suppress_default = suppress_default;
        self.mode = GestureMode::None;
        self.resize_axes = ResizeAxes::None;
    }

    pub fn start_dragging(&mut self) {
        self.mode = GestureMode::Dragging;
        self.resize_axes = ResizeAxes::None;
    }

    pub fn start_resizing(&mut self, axes: ResizeAxes) {
        self.mode = GestureMode::Resizing;
        self.resize_axes = axes;
    }

    /// Offset of the latest position from the origin, masked for resizes.
    pub fn delta(&self) -> (f64, f64) {
        let raw = self.last.offset_from(self.origin);
        match self.mode {
            GestureMode::Resizing => self.resize_axes.mask(raw),
            _ => raw,
        }
    }

    /// Clear everything tied to the current gesture. Hover tracking survives.
    pub fn release(&mut self) {
        let hovered = self.hovered;
        *self = Self {
            hovered,
            ..Self::default()
        };
    }
}
