//! Element registry - which elements opted in, with what capabilities.
//!
//! The registry also owns the bookkeeping of everything attached on behalf
//! of an element: pointer handler bindings and host notification listeners.
//! Removing an element detaches all of it in one step.
//!
//! ## Modules
//!
//! - `bindings` - Internal pointer handlers per target and phase
//! - `listeners` - Host notification listeners per element

mod bindings;
mod listeners;

pub use bindings::{BindingTable, BindingTarget, Handler, PointerPhase};
pub use listeners::{Listener, ListenerTable, SubscriptionId};

use crate::config::InteractOptions;
use crate::types::ElementId;
use serde::Serialize;
use std::collections::HashMap;

/// Registration record for one element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RegisteredElement {
    pub element: ElementId,
    pub options: InteractOptions,
}

impl RegisteredElement {
    #[inline]
    pub fn allow_drag(&self) -> bool {
        self.options.drag
    }

    #[inline]
    pub fn allow_resize(&self) -> bool {
        self.options.resize
    }
}

#[derive(Debug, Default)]
pub struct ElementRegistry {
    entries: HashMap<ElementId, RegisteredElement>,
    pub(crate) bindings: BindingTable,
    pub(crate) listeners: ListenerTable,
}

impl ElementRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an element's capabilities.
    ///
    /// Returns true when the element was not registered before. The
    /// gesture-start handler is bound only on first insertion.
    pub fn insert(&mut self, element: ElementId, options: InteractOptions) -> bool {
        let record = RegisteredElement { element, options };
        let is_new = self.entries.insert(element, record).is_none();
        if is_new {
            self.bindings.bind(
                BindingTarget::Element(element),
                PointerPhase::Down,
                Handler::GestureStart,
            );
        }
        is_new
    }

    /// Remove an element and detach everything bound for it.
    pub fn remove(&mut self, element: ElementId) -> Option<RegisteredElement> {
        let record = self.entries.remove(&element)?;
        let handlers = self.bindings.unbind_all(BindingTarget::Element(element));
        let listeners = self.listeners.remove_all(element);
        tracing::debug!(%element, handlers, listeners, "Detached element bindings");
        Some(record)
    }

    pub fn contains(&self, element: ElementId) -> bool {
        self.entries.contains_key(&element)
    }

    pub fn get(&self, element: ElementId) -> Option<&RegisteredElement> {
        self.entries.get(&element)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegisteredElement> {
        self.entries.values()
    }

    pub fn bindings(&self) -> &BindingTable {
        &self.bindings
    }

    pub fn listener_count(&self, element: ElementId) -> usize {
        self.listeners.count(element)
    }
}
