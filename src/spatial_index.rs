//! Spatial Index Module
//!
//! R-tree over element bounding boxes so hosts can resolve a page position
//! to the topmost element in O(log n) instead of scanning every element.

use crate::types::{ElementId, Point, Rect};
use rstar::{RTree, RTreeObject, AABB};
use std::collections::HashMap;

/// An element's bounding box plus its stacking order.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub element: ElementId,
    /// Larger values are painted on top
    pub z: u64,
    pub rect: Rect,
}

impl SpatialEntry {
    #[inline]
    pub fn contains_point(&self, point: Point) -> bool {
        self.rect.contains(point)
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(
            [self.rect.left, self.rect.top],
            [self.rect.right(), self.rect.bottom()],
        )
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.element == other.element
    }
}

/// Spatial index over element boxes.
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<ElementId, SpatialEntry>,
    next_z: u64,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
            next_z: 0,
        }
    }

    /// Insert or move an element. A new element is stacked above all others;
    /// moving an existing one keeps its stacking order.
    pub fn insert(&mut self, element: ElementId, rect: Rect) {
        let z = match self.entries.remove(&element) {
            Some(old_entry) => {
                self.tree.remove(&old_entry);
                old_entry.z
            }
            None => {
                self.next_z += 1;
                self.next_z
            }
        };

        let entry = SpatialEntry { element, z, rect };
        self.tree.insert(entry);
        self.entries.insert(element, entry);
    }

    pub fn remove(&mut self, element: ElementId) -> bool {
        if let Some(entry) = self.entries.remove(&element) {
            self.tree.remove(&entry);
            true
        } else {
            false
        }
    }

    pub fn get(&self, element: ElementId) -> Option<Rect> {
        self.entries.get(&element).map(|entry| entry.rect)
    }

    /// All elements whose box contains the point, in no particular order.
    pub fn query_point(&self, point: Point) -> Vec<ElementId> {
        let point_envelope = AABB::from_point([point.x, point.y]);

        self.tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.contains_point(point))
            .map(|entry| entry.element)
            .collect()
    }

    /// The topmost element whose box contains the point.
    pub fn topmost_at(&self, point: Point) -> Option<ElementId> {
        let point_envelope = AABB::from_point([point.x, point.y]);

        self.tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.contains_point(point))
            .max_by_key(|entry| entry.z)
            .map(|entry| entry.element)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}
