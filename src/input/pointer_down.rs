//! Pointer down handling - decides between resize, drag or nothing.
//!
//! Resize wins whenever the press lands in a resize zone of an interactive
//! element, even one registered for dragging only.

use super::hit::classify;
use crate::constants::{CLASS_DRAGGING, CLASS_RESIZING, CLASS_TARGET};
use crate::engine::InteractEngine;
use crate::host::{ElementHost, StyleTarget};
use crate::registry::{BindingTarget, Handler, PointerPhase};
use crate::types::{DefaultAction, ElementId, PointerInput};

impl<H: ElementHost> InteractEngine<H> {
    /// Walk up from `element` to the first registered element, if any.
    pub(crate) fn registered_ancestor(&self, element: ElementId) -> Option<ElementId> {
        let mut visited: Vec<ElementId> = Vec::new();
        let mut current = Some(element);
        while let Some(candidate) = current {
            if self.registry.contains(candidate) {
                return Some(candidate);
            }
            if visited.contains(&candidate) {
                tracing::warn!(%candidate, "Parent cycle while resolving press target");
                return None;
            }
            visited.push(candidate);
            current = self.host.parent(candidate);
        }
        None
    }

    pub(crate) fn start_gesture(&mut self, input: &PointerInput) -> DefaultAction {
        let Some(target) = input.target else {
            return DefaultAction::Allow;
        };
        let Some(record) = self.registry.get(target).copied() else {
            return DefaultAction::Allow;
        };

        // One gesture at a time; a second press keeps the first gesture
        if self.gesture.pointer_down {
            tracing::debug!(
                %target,
                active = ?self.gesture.active_element,
                "Ignoring pointer down while a gesture is active"
            );
            return if self.gesture.suppress_default {
                DefaultAction::Prevent
            } else {
                DefaultAction::Allow
            };
        }

        self.clear_hover();

        let suppress = record.options.is_interactive();
        self.gesture.press(target, input.page, suppress);

        if suppress {
            self.registry
                .bindings
                .unbind_phase(BindingTarget::Document, PointerPhase::Move);
        }

        let axes = if suppress {
            let margin = self.config.margin_for(input.kind);
            self.host
                .bounding_box(target)
                .map(|bounds| classify(&bounds, input.page, margin))
                .unwrap_or_default()
        } else {
            Default::default()
        };

        if let Some(axes_class) = axes.class_name() {
            self.gesture.start_resizing(axes);
            self.host.add_class(StyleTarget::Root, axes_class);
            self.host.add_class(target.into(), CLASS_TARGET);
            self.host.add_class(target.into(), CLASS_RESIZING);
            self.registry.bindings.bind(
                BindingTarget::Document,
                PointerPhase::Move,
                Handler::ResizeMove,
            );
            tracing::debug!(%target, ?axes, origin = ?input.page, "Resize gesture started");
        } else if record.allow_drag() {
            self.gesture.start_dragging();
            self.host.add_class(target.into(), CLASS_TARGET);
            self.host.add_class(target.into(), CLASS_DRAGGING);
            self.registry.bindings.bind(
                BindingTarget::Document,
                PointerPhase::Move,
                Handler::DragMove,
            );
            tracing::debug!(%target, origin = ?input.page, "Drag gesture started");
        } else {
            tracing::trace!(%target, "Pointer down without a qualifying capability");
        }

        if suppress {
            DefaultAction::Prevent
        } else {
            DefaultAction::Allow
        }
    }
}
