//! In-memory element host.
//!
//! Keeps element boxes in a spatial index, parent links, named identifiers
//! and per-target class sets. Useful for headless integrations, the replay
//! tool and tests.

use crate::host::{ElementHost, StyleTarget};
use crate::spatial_index::SpatialIndex;
use crate::types::{ElementId, Point, Rect};
use std::collections::{BTreeSet, HashMap, HashSet};

#[derive(Default)]
pub struct MemoryHost {
    index: SpatialIndex,
    parents: HashMap<ElementId, ElementId>,
    names: HashMap<String, ElementId>,
    detached: HashSet<ElementId>,
    classes: HashMap<StyleTarget, BTreeSet<String>>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element, or move it if it already exists.
    pub fn insert(&mut self, element: ElementId, rect: Rect) -> &mut Self {
        self.index.insert(element, rect);
        self.detached.remove(&element);
        self
    }

    pub fn set_parent(&mut self, child: ElementId, parent: ElementId) -> &mut Self {
        self.parents.insert(child, parent);
        self
    }

    pub fn set_name(&mut self, name: impl Into<String>, element: ElementId) -> &mut Self {
        self.names.insert(name.into(), element);
        self
    }

    /// Take an element out of the page. Its box and classes are dropped.
    pub fn detach(&mut self, element: ElementId) {
        self.index.remove(element);
        self.detached.insert(element);
        self.classes.remove(&StyleTarget::Element(element));
    }

    /// Topmost attached element under the point.
    pub fn element_at(&self, point: Point) -> Option<ElementId> {
        self.index.topmost_at(point)
    }

    pub fn element_count(&self) -> usize {
        self.index.len()
    }

    pub fn has_class(&self, target: impl Into<StyleTarget>, class: &str) -> bool {
        let target: StyleTarget = target.into();
        self.classes
            .get(&target)
            .is_some_and(|set| set.contains(class))
    }

    /// Classes currently applied to the target, sorted.
    pub fn classes(&self, target: impl Into<StyleTarget>) -> Vec<String> {
        let target: StyleTarget = target.into();
        self.classes
            .get(&target)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }
}

impl ElementHost for MemoryHost {
    fn bounding_box(&self, element: ElementId) -> Option<Rect> {
        self.index.get(element)
    }

    fn parent(&self, element: ElementId) -> Option<ElementId> {
        self.parents.get(&element).copied()
    }

    fn resolve(&self, identifier: &str) -> Option<ElementId> {
        self.names.get(identifier).copied()
    }

    fn is_attached(&self, element: ElementId) -> bool {
        !self.detached.contains(&element)
    }

    fn add_class(&mut self, target: StyleTarget, class: &str) {
        if let StyleTarget::Element(element) = target {
            if self.detached.contains(&element) {
                return;
            }
        }
        self.classes
            .entry(target)
            .or_default()
            .insert(class.to_string());
    }

    fn remove_class(&mut self, target: StyleTarget, class: &str) {
        if let Some(set) = self.classes.get_mut(&target) {
            set.remove(class);
            if set.is_empty() {
                self.classes.remove(&target);
            }
        }
    }
}
