//! The host collaborator.
//!
//! Elements live in whatever UI system embeds the engine. The engine only
//! needs their layout, their parent chain for bubbling, a way to resolve
//! string identifiers, and somewhere to toggle affordance classes.

use crate::types::{ElementId, Rect};

/// Where an affordance class is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleTarget {
    /// A single element
    Element(ElementId),
    /// The document root, used for global cursor overrides during a resize
    Root,
}

impl From<ElementId> for StyleTarget {
    fn from(id: ElementId) -> Self {
        Self::Element(id)
    }
}

/// View of the host UI needed by the interaction engine.
pub trait ElementHost {
    /// Page-space bounding box, or `None` if the element is not laid out.
    fn bounding_box(&self, element: ElementId) -> Option<Rect>;

    /// Parent element for notification bubbling.
    fn parent(&self, _element: ElementId) -> Option<ElementId> {
        None
    }

    /// Resolve a string identifier (e.g. a DOM id) to an element.
    fn resolve(&self, _identifier: &str) -> Option<ElementId> {
        None
    }

    /// Detached elements swallow notifications.
    fn is_attached(&self, _element: ElementId) -> bool {
        true
    }

    fn add_class(&mut self, target: StyleTarget, class: &str);

    fn remove_class(&mut self, target: StyleTarget, class: &str);

    fn remove_classes(&mut self, target: StyleTarget, classes: &[&str]) {
        for class in classes {
            self.remove_class(target, class);
        }
    }
}
