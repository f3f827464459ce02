//! Pointer up handling - end notifications and cleanup.
//!
//! Cleanup is unconditional and idempotent: a plain click, or an up with
//! no gesture at all, runs the same steps.

use crate::constants::{
    CLASS_DRAGGING, CLASS_RESIZE_TARGET, CLASS_RESIZING, CLASS_TARGET, CLASS_XRESIZE,
    CLASS_XYRESIZE, CLASS_YRESIZE,
};
use crate::engine::InteractEngine;
use crate::events::NotificationKind;
use crate::host::{ElementHost, StyleTarget};
use crate::registry::{BindingTarget, Handler, PointerPhase};
use crate::types::{DefaultAction, PointerInput};

impl<H: ElementHost> InteractEngine<H> {
    pub(crate) fn end_gesture(&mut self, input: &PointerInput) -> DefaultAction {
        if let Some(element) = self.gesture.active_element {
            if self.gesture.started {
                // End reports where the last move left the pointer
                let kind = if self.gesture.is_resizing() {
                    Some(NotificationKind::ResizeEnd)
                } else if self.gesture.is_dragging() {
                    Some(NotificationKind::DragEnd)
                } else {
                    None
                };
                if let Some(kind) = kind {
                    let detail = self.payload(self.gesture.last, input);
                    self.notify(element, kind, detail);
                    tracing::debug!(
                        %element,
                        kind = kind.name(),
                        dx = detail.dx,
                        dy = detail.dy,
                        "Gesture ended"
                    );
                }
            }
        }

        self.finish_gesture();
        DefaultAction::Allow
    }

    /// Restore idle bindings, drop gesture classes and reset the tracker.
    pub(crate) fn finish_gesture(&mut self) {
        let bindings = &mut self.registry.bindings;
        bindings.unbind(BindingTarget::Document, PointerPhase::Move, Handler::DragMove);
        bindings.unbind(BindingTarget::Document, PointerPhase::Move, Handler::ResizeMove);
        bindings.bind(BindingTarget::Document, PointerPhase::Move, Handler::Hover);
        bindings.bind(BindingTarget::Document, PointerPhase::Up, Handler::GestureEnd);

        if let Some(element) = self.gesture.active_element {
            self.host.remove_classes(
                element.into(),
                &[CLASS_TARGET, CLASS_DRAGGING, CLASS_RESIZING, CLASS_RESIZE_TARGET],
            );
        }
        self.host.remove_classes(
            StyleTarget::Root,
            &[CLASS_XRESIZE, CLASS_YRESIZE, CLASS_XYRESIZE],
        );

        self.gesture.release();
    }
}
