//! Pointer move handling - hover cursors, drag and resize ticks.
//!
//! Move is the hot path: it can fire at display rate or faster, so each
//! handler exits early when it has nothing to do.

use super::hit::classify;
use crate::constants::{CLASS_RESIZE_TARGET, CLASS_XRESIZE, CLASS_XYRESIZE, CLASS_YRESIZE};
use crate::engine::InteractEngine;
use crate::events::NotificationKind;
use crate::host::ElementHost;
use crate::types::{DefaultAction, PointerInput};

const HOVER_CLASSES: [&str; 3] = [CLASS_XYRESIZE, CLASS_XRESIZE, CLASS_YRESIZE];

impl<H: ElementHost> InteractEngine<H> {
    /// Update edge-zone cursor classes while no button is held.
    pub(crate) fn hover(&mut self, input: &PointerInput) -> DefaultAction {
        if self.gesture.pointer_down {
            return DefaultAction::Allow;
        }

        let hovered = input
            .target
            .filter(|t| self.registry.get(*t).is_some_and(|r| r.allow_resize()));

        if self.gesture.hovered != hovered {
            self.clear_hover();
        }

        let Some(target) = hovered else {
            return DefaultAction::Allow;
        };
        let margin = self.config.margin_for(input.kind);
        let axes = self
            .host
            .bounding_box(target)
            .map(|bounds| classify(&bounds, input.page, margin))
            .unwrap_or_default();

        self.host.remove_classes(target.into(), &HOVER_CLASSES);
        if let Some(class) = axes.class_name() {
            self.host.add_class(target.into(), class);
        }
        self.gesture.hovered = Some(target);

        DefaultAction::Allow
    }

    pub(crate) fn drag_move(&mut self, input: &PointerInput) -> DefaultAction {
        if !self.gesture.pointer_down || !self.gesture.is_dragging() {
            return DefaultAction::Allow;
        }
        let Some(element) = self.gesture.active_element else {
            return DefaultAction::Allow;
        };

        if !self.gesture.started {
            self.gesture.started = true;
            let detail = self.payload(input.page, input);
            self.notify(element, NotificationKind::DragStart, detail);
        }

        self.gesture.last = input.page;
        let detail = self.payload(input.page, input);
        tracing::trace!(%element, dx = detail.dx, dy = detail.dy, "Drag move");
        self.notify(element, NotificationKind::DragMove, detail);

        DefaultAction::Prevent
    }

    pub(crate) fn resize_move(&mut self, input: &PointerInput) -> DefaultAction {
        if !self.gesture.pointer_down || !self.gesture.is_resizing() {
            return DefaultAction::Allow;
        }
        let Some(element) = self.gesture.active_element else {
            return DefaultAction::Allow;
        };

        if !self.gesture.started {
            self.gesture.started = true;
            let detail = self.payload(input.page, input);
            self.notify(element, NotificationKind::ResizeStart, detail);
            self.host.add_class(element.into(), CLASS_RESIZE_TARGET);
        }

        self.gesture.last = input.page;
        let detail = self.payload(input.page, input);
        tracing::trace!(%element, dx = detail.dx, dy = detail.dy, "Resize move");
        self.notify(element, NotificationKind::ResizeMove, detail);

        DefaultAction::Prevent
    }

    /// Drop hover cursor classes from the previously hovered element.
    pub(crate) fn clear_hover(&mut self) {
        if let Some(previous) = self.gesture.hovered.take() {
            self.host.remove_classes(previous.into(), &HOVER_CLASSES);
        }
    }
}
