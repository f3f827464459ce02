//! Pointer input handling - the interaction state machine.
//!
//! The host forwards raw pointer events to `pointer_down`, `pointer_move`
//! and `pointer_up`. Each entry point looks up the handlers bound for that
//! phase (on the target element for downs, on the document for moves and
//! ups) and runs them in bind order.
//!
//! ## Modules
//!
//! - `state` - Gesture state and mode enum
//! - `hit` - Resize edge-zone classification
//! - `pointer_down` - Gesture start (drag vs resize vs nothing)
//! - `pointer_move` - Hover cursor updates and start/move notifications
//! - `pointer_up` - End notifications and cleanup

mod hit;
mod pointer_down;
mod pointer_move;
mod pointer_up;
mod state;

pub use hit::{classify, ResizeAxes};
pub use state::{GestureMode, GestureState};

use crate::engine::InteractEngine;
use crate::events::{self, InteractionEvent, NotificationKind};
use crate::host::ElementHost;
use crate::profile_scope;
use crate::registry::{BindingTarget, Handler, PointerPhase};
use crate::types::{DefaultAction, ElementId, Point, PointerInput};

impl<H: ElementHost> InteractEngine<H> {
    /// Forward a pointer-down (mouse down, touch start).
    pub fn pointer_down(&mut self, input: &PointerInput) -> DefaultAction {
        profile_scope!("pointer_down");

        // Presses on descendants count for the nearest registered ancestor
        let Some(target) = input.target.and_then(|t| self.registered_ancestor(t)) else {
            return DefaultAction::Allow;
        };
        let input = PointerInput {
            target: Some(target),
            ..*input
        };
        let action = self.run_bound(BindingTarget::Element(target), PointerPhase::Down, &input);
        self.apply_deferred();
        action
    }

    /// Forward a pointer-move (mouse move, touch move).
    pub fn pointer_move(&mut self, input: &PointerInput) -> DefaultAction {
        profile_scope!("pointer_move");

        let mut action = self.run_bound(BindingTarget::Document, PointerPhase::Move, input);
        if self.gesture.pointer_down && self.gesture.suppress_default {
            action = DefaultAction::Prevent;
        }
        self.apply_deferred();
        action
    }

    /// Forward a pointer-up (mouse up, touch end). Not scoped to any element.
    pub fn pointer_up(&mut self, input: &PointerInput) -> DefaultAction {
        profile_scope!("pointer_up");

        let action = self.run_bound(BindingTarget::Document, PointerPhase::Up, input);
        self.apply_deferred();
        action
    }

    fn run_bound(
        &mut self,
        target: BindingTarget,
        phase: PointerPhase,
        input: &PointerInput,
    ) -> DefaultAction {
        let mut action = DefaultAction::Allow;
        for handler in self.registry.bindings.handlers(target, phase) {
            let result = match handler {
                Handler::GestureStart => self.start_gesture(input),
                Handler::Hover => self.hover(input),
                Handler::DragMove => self.drag_move(input),
                Handler::ResizeMove => self.resize_move(input),
                Handler::GestureEnd => self.end_gesture(input),
            };
            if result.is_prevented() {
                action = DefaultAction::Prevent;
            }
        }
        action
    }

    /// Payload for a notification at `page`, relative to the gesture origin.
    fn payload(&self, page: Point, input: &PointerInput) -> InteractionEvent {
        let raw = page.offset_from(self.gesture.origin);
        let delta = if self.gesture.is_resizing() {
            self.gesture.resize_axes.mask(raw)
        } else {
            raw
        };
        InteractionEvent::new(self.gesture.origin, delta, page, input.modifiers, input.button)
    }

    fn notify(&mut self, element: ElementId, kind: NotificationKind, detail: InteractionEvent) {
        events::emit(
            &mut self.registry.listeners,
            &self.host,
            element,
            kind,
            detail,
            &mut self.deferred,
        );
    }
}
